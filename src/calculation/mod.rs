//! Business arithmetic for the HR operations engine.
//!
//! This module contains the pure calculation functions: worked-hours and
//! overtime computation with attendance classification, salary component
//! resolution, inclusive leave-day counting, and login identifier
//! synthesis. Nothing here touches the record store; callers persist the
//! results.

mod leave_days;
mod login_id;
mod salary_breakdown;
mod work_hours;

pub use leave_days::{days_in_range, inclusive_day_count};
pub use login_id::format_login_id;
pub use salary_breakdown::{SalaryBreakdown, resolve_breakdown};
pub use work_hours::{
    HALF_DAY_THRESHOLD_HOURS, STANDARD_WORK_DAY_HOURS, WorkedHours, classify_attendance,
    compute_worked_hours,
};
