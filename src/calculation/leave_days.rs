//! Inclusive day counting and range expansion for leave requests.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Counts the calendar days in `[start, end]` inclusive.
///
/// A single-day request counts as 1. An end date before the start date is
/// a validation error.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hrflow_engine::calculation::inclusive_day_count;
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
/// assert_eq!(inclusive_day_count(start, end).unwrap(), 3);
/// ```
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> EngineResult<u32> {
    if end < start {
        return Err(EngineError::Validation {
            field: "end_date".to_string(),
            message: format!("must not be before start_date ({start} > {end})"),
        });
    }

    // num_days is non-negative here and bounded by the NaiveDate range.
    Ok((end - start).num_days() as u32 + 1)
}

/// Expands `[start, end]` into every calendar day it covers, inclusive.
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> EngineResult<Vec<NaiveDate>> {
    let count = inclusive_day_count(start, end)?;
    Ok(start.iter_days().take(count as usize).collect())
}
