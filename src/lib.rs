// Digital Store Reports - Core Library
// Exposes all modules for use in the CLI and tests

pub mod entities;
pub mod calendar;
pub mod error;
pub mod reports;
pub mod sample;
pub mod output;
pub mod logging;

// Re-export commonly used types
pub use entities::{Customer, Payment, Product, Subscription};
pub use calendar::{days_ago, months_ago, months_between};
pub use error::{StoreError, StoreResult};
pub use reports::{
    CustomerProducts, CustomerSpend, PaymentSums, ReportEngine, StoreReport, SubscriptionLine,
    DEFAULT_REVENUE_MONTH,
};
pub use sample::{build_sample_store, SampleStore};
pub use output::render;
pub use logging::init_logging;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
