//! Worked-hours computation and attendance classification.
//!
//! Converts a check-in/check-out pair into worked hours and overtime, and
//! classifies the day against the full-day and half-day thresholds.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AttendanceStatus;

/// Hours in a standard full working day.
pub const STANDARD_WORK_DAY_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Minimum worked hours for a day to count as a half day.
pub const HALF_DAY_THRESHOLD_HOURS: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

const SECONDS_PER_HOUR: Decimal = Decimal::from_parts(3600, 0, 0, false, 0);

/// The worked and overtime hours derived from a check-in/check-out pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkedHours {
    /// Elapsed hours between check-in and check-out, to 2 decimal places.
    pub work_hours: Decimal,
    /// Hours beyond the standard day, zero when none.
    pub extra_hours: Decimal,
}

/// Computes worked and overtime hours for a completed attendance day.
///
/// Both instants must be present; the caller ensures check-out does not
/// precede check-in. The elapsed duration is expressed in hours rounded
/// to 2 decimal places, and overtime is whatever exceeds
/// `standard_day_hours`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
/// use hrflow_engine::calculation::{compute_worked_hours, STANDARD_WORK_DAY_HOURS};
///
/// let check_in = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
/// let check_out = Utc.with_ymd_and_hms(2024, 3, 1, 18, 30, 0).unwrap();
///
/// let worked = compute_worked_hours(check_in, check_out, STANDARD_WORK_DAY_HOURS);
/// assert_eq!(worked.work_hours, Decimal::new(95, 1)); // 9.5
/// assert_eq!(worked.extra_hours, Decimal::new(15, 1)); // 1.5
/// ```
pub fn compute_worked_hours(
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
    standard_day_hours: Decimal,
) -> WorkedHours {
    let elapsed_seconds = (check_out - check_in).num_seconds();
    let work_hours = (Decimal::from(elapsed_seconds) / SECONDS_PER_HOUR).round_dp(2);
    let extra_hours = (work_hours - standard_day_hours).max(Decimal::ZERO).round_dp(2);

    WorkedHours {
        work_hours,
        extra_hours,
    }
}

/// Classifies a day's attendance from its worked hours.
///
/// A day is `Present` at or above the full-day threshold, `HalfDay` from
/// the half-day threshold up to the full-day threshold, and `Absent`
/// below that.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use hrflow_engine::calculation::{
///     classify_attendance, HALF_DAY_THRESHOLD_HOURS, STANDARD_WORK_DAY_HOURS,
/// };
/// use hrflow_engine::models::AttendanceStatus;
///
/// let status = classify_attendance(
///     Decimal::new(65, 1), // 6.5 hours
///     STANDARD_WORK_DAY_HOURS,
///     HALF_DAY_THRESHOLD_HOURS,
/// );
/// assert_eq!(status, AttendanceStatus::HalfDay);
/// ```
pub fn classify_attendance(
    work_hours: Decimal,
    full_day_hours: Decimal,
    half_day_hours: Decimal,
) -> AttendanceStatus {
    if work_hours >= full_day_hours {
        AttendanceStatus::Present
    } else if work_hours >= half_day_hours {
        AttendanceStatus::HalfDay
    } else {
        AttendanceStatus::Absent
    }
}
