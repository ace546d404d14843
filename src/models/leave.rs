//! Leave request and leave balance records.
//!
//! A leave request moves from `Pending` to exactly one of the terminal
//! states `Approved` or `Rejected`; there is no transition out of a
//! terminal state. Balances are tracked per employee per calendar year.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The category of leave being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Paid annual leave, drawn against the paid entitlement.
    PaidLeave,
    /// Sick leave, drawn against the sick entitlement.
    SickLeave,
    /// Unpaid leave; usage is tracked but unbounded.
    UnpaidLeave,
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaveType::PaidLeave => write!(f, "paid_leave"),
            LeaveType::SickLeave => write!(f, "sick_leave"),
            LeaveType::UnpaidLeave => write!(f, "unpaid_leave"),
        }
    }
}

/// The lifecycle state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Submitted and awaiting review.
    Pending,
    /// Approved by an admin or HR officer. Terminal.
    Approved,
    /// Rejected by an admin or HR officer. Terminal.
    Rejected,
}

impl LeaveStatus {
    /// Returns true once the request has been decided.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LeaveStatus::Approved | LeaveStatus::Rejected)
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "pending"),
            LeaveStatus::Approved => write!(f, "approved"),
            LeaveStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// An employee's request for time off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Store-assigned record identifier.
    pub id: String,
    /// The requesting employee.
    pub employee_id: String,
    /// The category of leave requested.
    pub leave_type: LeaveType,
    /// First day of leave.
    pub start_date: NaiveDate,
    /// Last day of leave, inclusive.
    pub end_date: NaiveDate,
    /// Inclusive day count: `end_date - start_date + 1`.
    pub total_days: u32,
    /// The employee's stated reason.
    pub reason: String,
    /// URL of an uploaded supporting document.
    #[serde(default)]
    pub attachment_url: Option<String>,
    /// Lifecycle state.
    pub status: LeaveStatus,
    /// Remarks recorded by the reviewer.
    #[serde(default)]
    pub admin_remarks: Option<String>,
    /// Identifier of the reviewing employee.
    #[serde(default)]
    pub reviewed_by: Option<String>,
    /// The instant the request was decided.
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Store-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a leave request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLeaveRequest {
    /// The requesting employee.
    pub employee_id: String,
    /// The category of leave requested.
    pub leave_type: LeaveType,
    /// First day of leave.
    pub start_date: NaiveDate,
    /// Last day of leave, inclusive.
    pub end_date: NaiveDate,
    /// Inclusive day count.
    pub total_days: u32,
    /// The employee's stated reason.
    pub reason: String,
    /// URL of an uploaded supporting document.
    #[serde(default)]
    pub attachment_url: Option<String>,
    /// Initial lifecycle state; always `Pending` when submitted through
    /// the workflow.
    pub status: LeaveStatus,
}

/// Fields a leave request update may change. `None` leaves a field
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequestPatch {
    /// New lifecycle state.
    #[serde(default)]
    pub status: Option<LeaveStatus>,
    /// Reviewer remarks to record.
    #[serde(default)]
    pub admin_remarks: Option<String>,
    /// Reviewer identity to record.
    #[serde(default)]
    pub reviewed_by: Option<String>,
    /// Decision instant to record.
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
}

/// Per-employee, per-year leave entitlement and usage.
///
/// `used` exceeding `total` is tolerated; the ledger records usage, it
/// does not enforce caps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// Store-assigned record identifier.
    pub id: String,
    /// The employee the balance belongs to.
    pub employee_id: String,
    /// The calendar year bucket.
    pub year: i32,
    /// Paid leave entitlement for the year.
    pub paid_leave_total: u32,
    /// Paid leave days consumed.
    pub paid_leave_used: u32,
    /// Sick leave entitlement for the year.
    pub sick_leave_total: u32,
    /// Sick leave days consumed.
    pub sick_leave_used: u32,
    /// Unpaid leave days consumed; there is no unpaid entitlement.
    pub unpaid_leave_used: u32,
    /// Store-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a leave balance row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLeaveBalance {
    /// The employee the balance belongs to.
    pub employee_id: String,
    /// The calendar year bucket.
    pub year: i32,
    /// Paid leave entitlement for the year.
    pub paid_leave_total: u32,
    /// Sick leave entitlement for the year.
    pub sick_leave_total: u32,
}

/// Fields a leave balance update may change. `None` leaves a field
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalancePatch {
    /// New paid-leave-used figure.
    #[serde(default)]
    pub paid_leave_used: Option<u32>,
    /// New sick-leave-used figure.
    #[serde(default)]
    pub sick_leave_used: Option<u32>,
    /// New unpaid-leave-used figure.
    #[serde(default)]
    pub unpaid_leave_used: Option<u32>,
}
