// 📅 Calendar arithmetic
//
// Whole-month differences are computed from year/month components with a
// day-of-month truncation rule, never from elapsed days / 30.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::{StoreError, StoreResult};

/// Whole calendar months from `start` to `end`.
///
/// Partial months are discarded: 2025-01-15 → 2025-03-14 is 1 month,
/// 2025-01-15 → 2025-03-15 is 2. Negative when `end` precedes `start`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let start_total = start.year() as i64 * 12 + start.month0() as i64;
    let end_total = end.year() as i64 * 12 + end.month0() as i64;
    let months = end_total - start_total;

    if months > 0 && end.day() < start.day() {
        months - 1
    } else if months < 0 && end.day() > start.day() {
        months + 1
    } else {
        months
    }
}

/// `today` minus `n` months, day clamped to the end of the target month
pub fn months_ago(today: NaiveDate, n: u32) -> StoreResult<NaiveDate> {
    today
        .checked_sub_months(Months::new(n))
        .ok_or_else(|| StoreError::DateOutOfRange(format!("{} minus {} months", today, n)))
}

pub fn days_ago(today: NaiveDate, n: u64) -> StoreResult<NaiveDate> {
    today
        .checked_sub_days(Days::new(n))
        .ok_or_else(|| StoreError::DateOutOfRange(format!("{} minus {} days", today, n)))
}

// ============================================================================
// TESTS
// ============================================================================
