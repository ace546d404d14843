//! Policy types for the HR operations engine.
//!
//! These structures are deserialized from the YAML policy files; the
//! `Default` implementation carries the same values the shipped
//! configuration does, so tests and embedded callers need no files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{HALF_DAY_THRESHOLD_HOURS, STANDARD_WORK_DAY_HOURS};

/// Attendance classification thresholds.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendancePolicy {
    /// Worked hours at or above which a day is a full present day.
    pub full_day_hours: Decimal,
    /// Worked hours at or above which a day is at least a half day.
    pub half_day_hours: Decimal,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            full_day_hours: STANDARD_WORK_DAY_HOURS,
            half_day_hours: HALF_DAY_THRESHOLD_HOURS,
        }
    }
}

/// Account-level rules.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountPolicy {
    /// Maximum number of admin and HR officer accounts combined.
    pub max_privileged: u32,
}

impl Default for AccountPolicy {
    fn default() -> Self {
        Self { max_privileged: 2 }
    }
}

/// Annual leave entitlement defaults for new balance rows.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveEntitlements {
    /// Paid leave days granted per calendar year.
    pub paid_leave_total: u32,
    /// Sick leave days granted per calendar year.
    pub sick_leave_total: u32,
}

impl Default for LeaveEntitlements {
    fn default() -> Self {
        Self {
            paid_leave_total: 12,
            sick_leave_total: 6,
        }
    }
}

/// The complete HR policy the engine operates under.
#[derive(Debug, Clone, Default)]
pub struct HrPolicy {
    /// Attendance classification thresholds.
    pub attendance: AttendancePolicy,
    /// Account-level rules.
    pub accounts: AccountPolicy,
    /// Annual leave entitlement defaults.
    pub entitlements: LeaveEntitlements,
}

/// Structure of `policy.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct PolicyFile {
    pub attendance: AttendancePolicy,
    pub accounts: AccountPolicy,
}

/// Structure of `leave.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct LeaveFile {
    pub entitlements: LeaveEntitlements,
}
