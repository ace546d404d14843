//! Per-employee, per-year leave balance ledger.

use std::sync::Arc;

use tracing::info;

use crate::config::HrPolicy;
use crate::error::EngineResult;
use crate::models::{LeaveBalance, LeaveBalancePatch, LeaveType, NewLeaveBalance};
use crate::store::HrStore;

/// Maintains leave balances and applies debits for approved requests.
///
/// Debits are additive and uncapped: usage may exceed the entitlement,
/// which the ledger records rather than rejects.
#[derive(Clone)]
pub struct BalanceLedger {
    store: Arc<dyn HrStore>,
    policy: HrPolicy,
}

impl BalanceLedger {
    /// Creates a ledger over the given store and policy.
    pub fn new(store: Arc<dyn HrStore>, policy: HrPolicy) -> Self {
        Self { store, policy }
    }

    /// Ensures a balance row exists for the employee and year, creating
    /// it with the policy's entitlement defaults when absent. An existing
    /// row is returned unchanged.
    pub async fn initialize(&self, employee_id: &str, year: i32) -> EngineResult<LeaveBalance> {
        if let Some(existing) = self.store.leave_balance(employee_id, year).await? {
            return Ok(existing);
        }

        info!(employee_id, year, "initializing leave balance");
        self.store
            .create_leave_balance(NewLeaveBalance {
                employee_id: employee_id.to_string(),
                year,
                paid_leave_total: self.policy.entitlements.paid_leave_total,
                sick_leave_total: self.policy.entitlements.sick_leave_total,
            })
            .await
    }

    /// Adds `days` to the used column matching `leave_type` for the
    /// employee's year bucket. A missing balance row is created with the
    /// entitlement defaults first, so the debit is never dropped.
    pub async fn debit(
        &self,
        employee_id: &str,
        year: i32,
        leave_type: LeaveType,
        days: u32,
    ) -> EngineResult<LeaveBalance> {
        let balance = self.initialize(employee_id, year).await?;

        let patch = match leave_type {
            LeaveType::PaidLeave => LeaveBalancePatch {
                paid_leave_used: Some(balance.paid_leave_used + days),
                ..Default::default()
            },
            LeaveType::SickLeave => LeaveBalancePatch {
                sick_leave_used: Some(balance.sick_leave_used + days),
                ..Default::default()
            },
            LeaveType::UnpaidLeave => LeaveBalancePatch {
                unpaid_leave_used: Some(balance.unpaid_leave_used + days),
                ..Default::default()
            },
        };

        info!(employee_id, year, %leave_type, days, "debiting leave balance");
        self.store.update_leave_balance(&balance.id, patch).await
    }
}
