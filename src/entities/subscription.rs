// 🔁 Subscription Entity - recurring monthly fee
//
// Same shape as a temporal value: `start_date` plays `valid_from`,
// `end_date` plays `valid_until` (None = still active).
// Everything time-dependent takes `today` explicitly.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Customer;
use crate::calendar::months_between;
use crate::error::{StoreError, StoreResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub monthly_fee: Decimal,
    pub start_date: NaiveDate,

    /// None = still active
    pub end_date: Option<NaiveDate>,

    pub customer: Customer,
}

impl Subscription {
    /// Active subscription (no end date)
    pub fn new(monthly_fee: Decimal, start_date: NaiveDate, customer: Customer) -> Self {
        Subscription {
            monthly_fee,
            start_date,
            end_date: None,
            customer,
        }
    }

    pub fn closed(
        monthly_fee: Decimal,
        start_date: NaiveDate,
        end_date: NaiveDate,
        customer: Customer,
    ) -> Self {
        Subscription {
            monthly_fee,
            start_date,
            end_date: Some(end_date),
            customer,
        }
    }

    /// Validating constructor: fee >= 0 and end >= start
    pub fn try_new(
        monthly_fee: Decimal,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        customer: Customer,
    ) -> StoreResult<Self> {
        if monthly_fee.is_sign_negative() && !monthly_fee.is_zero() {
            return Err(StoreError::NegativeFee { fee: monthly_fee });
        }
        if let Some(end) = end_date {
            if end < start_date {
                return Err(StoreError::EndBeforeStart {
                    start: start_date,
                    end,
                });
            }
        }

        Ok(Subscription {
            monthly_fee,
            start_date,
            end_date,
            customer,
        })
    }

    pub fn is_active(&self) -> bool {
        self.end_date.is_none()
    }

    /// Check if the subscription was running on a given date
    pub fn was_active_at(&self, date: NaiveDate) -> bool {
        self.start_date <= date && self.end_date.map_or(true, |end| end > date)
    }

    /// Whole months from start to end, or to `today` while active.
    /// Never negative: a start date after the reference date counts as 0.
    pub fn duration_in_months(&self, today: NaiveDate) -> u32 {
        let until = self.end_date.unwrap_or(today);
        let months = months_between(self.start_date, until);
        u32::try_from(months.max(0)).unwrap_or(u32::MAX)
    }

    /// monthly fee × duration in months (exact)
    pub fn amount_paid(&self, today: NaiveDate) -> Decimal {
        self.monthly_fee * Decimal::from(self.duration_in_months(today))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_active_subscription_duration() {
        let today = date(2025, 6, 15);
        let sub = Subscription::new(dec!(99.98), date(2025, 4, 15), Customer::new("João"));

        assert!(sub.is_active());
        assert_eq!(sub.duration_in_months(today), 2);
    }

    #[test]
    fn test_active_duration_follows_today() {
        let sub = Subscription::new(dec!(99.98), date(2025, 4, 15), Customer::new("João"));

        assert_eq!(sub.duration_in_months(date(2025, 5, 14)), 0);
        assert_eq!(sub.duration_in_months(date(2025, 5, 15)), 1);
        assert_eq!(sub.duration_in_months(date(2025, 9, 15)), 5);
    }

    #[test]
    fn test_closed_subscription_ignores_today() {
        let sub = Subscription::closed(
            dec!(99.98),
            date(2025, 3, 15),
            date(2025, 4, 15),
            Customer::new("Maria"),
        );

        assert!(!sub.is_active());
        assert_eq!(sub.duration_in_months(date(2025, 6, 15)), 1);
        assert_eq!(sub.duration_in_months(date(2030, 1, 1)), 1);
    }

    #[test]
    fn test_amount_paid() {
        let sub = Subscription::new(dec!(99.98), date(2025, 4, 15), Customer::new("João"));

        let paid = sub.amount_paid(date(2025, 6, 15));
        assert_eq!(paid, dec!(199.96));
        assert_eq!(paid.to_string(), "199.96");
    }

    #[test]
    fn test_future_start_counts_as_zero_months() {
        let sub = Subscription::new(dec!(99.98), date(2025, 8, 15), Customer::new("João"));

        assert_eq!(sub.duration_in_months(date(2025, 6, 15)), 0);
        assert_eq!(sub.amount_paid(date(2025, 6, 15)), Decimal::ZERO);
    }

    #[test]
    fn test_was_active_at() {
        let sub = Subscription::closed(
            dec!(10),
            date(2025, 1, 15),
            date(2025, 3, 15),
            Customer::new("Maria"),
        );

        assert!(!sub.was_active_at(date(2025, 1, 14)));
        assert!(sub.was_active_at(date(2025, 1, 15)));
        assert!(sub.was_active_at(date(2025, 3, 14)));
        assert!(!sub.was_active_at(date(2025, 3, 15)));
    }

    #[test]
    fn test_try_new_validation() {
        let customer = Customer::new("João");

        let result = Subscription::try_new(
            dec!(99.98),
            date(2025, 3, 15),
            Some(date(2025, 1, 15)),
            customer.clone(),
        );
        assert!(matches!(result, Err(StoreError::EndBeforeStart { .. })));

        let result = Subscription::try_new(dec!(-1), date(2025, 3, 15), None, customer.clone());
        assert!(matches!(result, Err(StoreError::NegativeFee { .. })));

        let sub = Subscription::try_new(dec!(99.98), date(2025, 3, 15), None, customer).unwrap();
        assert!(sub.is_active());
    }
}
