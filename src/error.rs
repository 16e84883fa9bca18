// 🚫 Store Errors - rejected records
//
// Only the tightened constructors (`try_new`) and calendar helpers fail.
// Report computations never fail: empty inputs fold to zero or to `None`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Product or customer name is empty / whitespace only
    #[error("{entity} name must not be empty")]
    EmptyName { entity: &'static str },

    #[error("product '{name}' has negative price {price}")]
    NegativePrice { name: String, price: Decimal },

    #[error("subscription fee must not be negative (got {fee})")]
    NegativeFee { fee: Decimal },

    #[error("subscription ends on {end} before it starts on {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    /// Calendar arithmetic left chrono's supported range
    #[error("date out of range: {0}")]
    DateOutOfRange(String),
}
