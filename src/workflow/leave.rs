//! Leave request lifecycle.
//!
//! A request is submitted as `Pending` and decided exactly once. Approval
//! applies its effects before the status flip: per-day attendance records
//! (skipping days that already have one), then the balance debit, then
//! the flip itself, so a failure mid-sequence leaves the request pending
//! and retryable.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};
use tracing::info;

use crate::calculation::{days_in_range, inclusive_day_count};
use crate::config::HrPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceStatus, Employee, LeaveRequest, LeaveRequestPatch, LeaveStatus, LeaveType,
    NewAttendance, NewLeaveRequest,
};
use crate::store::HrStore;

use super::BalanceLedger;

/// The fields an employee supplies when asking for time off.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaveSubmission {
    /// The requesting employee.
    pub employee_id: String,
    /// The category of leave requested.
    pub leave_type: LeaveType,
    /// First day of leave.
    pub start_date: NaiveDate,
    /// Last day of leave, inclusive.
    pub end_date: NaiveDate,
    /// The stated reason; must not be empty.
    pub reason: String,
    /// URL of an already-uploaded supporting document.
    pub attachment_url: Option<String>,
}

/// Governs the pending → approved/rejected lifecycle of leave requests.
#[derive(Clone)]
pub struct LeaveWorkflow {
    store: Arc<dyn HrStore>,
    ledger: BalanceLedger,
}

impl LeaveWorkflow {
    /// Creates a workflow over the given store and policy.
    pub fn new(store: Arc<dyn HrStore>, policy: HrPolicy) -> Self {
        let ledger = BalanceLedger::new(store.clone(), policy);
        Self { store, ledger }
    }

    /// Submits a leave request with status `Pending`.
    ///
    /// Validates the date range and reason and computes the inclusive day
    /// count. No balance check happens here: a request may be submitted
    /// even when the balance is already exhausted.
    pub async fn submit(&self, submission: LeaveSubmission) -> EngineResult<LeaveRequest> {
        let employee = self.require_employee(&submission.employee_id).await?;

        if submission.reason.trim().is_empty() {
            return Err(EngineError::Validation {
                field: "reason".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        let total_days = inclusive_day_count(submission.start_date, submission.end_date)?;

        info!(
            employee_id = %employee.id,
            leave_type = %submission.leave_type,
            total_days,
            "submitting leave request"
        );
        self.store
            .create_leave_request(NewLeaveRequest {
                employee_id: employee.id,
                leave_type: submission.leave_type,
                start_date: submission.start_date,
                end_date: submission.end_date,
                total_days,
                reason: submission.reason,
                attachment_url: submission.attachment_url,
                status: LeaveStatus::Pending,
            })
            .await
    }

    /// Approves a pending request.
    ///
    /// Creates one attendance record with status `Leave` for every day in
    /// the requested range that does not already have one, debits the
    /// employee's balance for the request's starting year, and finally
    /// stamps the request approved with the reviewer identity, remarks,
    /// and decision instant.
    pub async fn approve(
        &self,
        request_id: &str,
        reviewer_id: &str,
        remarks: Option<String>,
    ) -> EngineResult<LeaveRequest> {
        let request = self.require_pending(request_id).await?;
        let reviewer = self.require_reviewer(reviewer_id).await?;

        let note = format!(
            "Approved {} from {} to {}",
            request.leave_type, request.start_date, request.end_date
        );
        for day in days_in_range(request.start_date, request.end_date)? {
            if self
                .store
                .attendance_on(&request.employee_id, day)
                .await?
                .is_none()
            {
                self.store
                    .create_attendance(NewAttendance {
                        employee_id: request.employee_id.clone(),
                        date: day,
                        check_in: None,
                        status: AttendanceStatus::Leave,
                        notes: Some(note.clone()),
                    })
                    .await?;
            }
        }

        self.ledger
            .debit(
                &request.employee_id,
                request.start_date.year(),
                request.leave_type,
                request.total_days,
            )
            .await?;

        info!(
            request_id = %request.id,
            reviewer_id = %reviewer.id,
            total_days = request.total_days,
            "leave request approved"
        );
        self.store
            .update_leave_request(
                &request.id,
                LeaveRequestPatch {
                    status: Some(LeaveStatus::Approved),
                    admin_remarks: remarks,
                    reviewed_by: Some(reviewer.id),
                    reviewed_at: Some(Utc::now()),
                },
            )
            .await
    }

    /// Rejects a pending request. Stamps the reviewer identity, remarks,
    /// and decision instant; no other side effects.
    pub async fn reject(
        &self,
        request_id: &str,
        reviewer_id: &str,
        remarks: Option<String>,
    ) -> EngineResult<LeaveRequest> {
        let request = self.require_pending(request_id).await?;
        let reviewer = self.require_reviewer(reviewer_id).await?;

        info!(request_id = %request.id, reviewer_id = %reviewer.id, "leave request rejected");
        self.store
            .update_leave_request(
                &request.id,
                LeaveRequestPatch {
                    status: Some(LeaveStatus::Rejected),
                    admin_remarks: remarks,
                    reviewed_by: Some(reviewer.id),
                    reviewed_at: Some(Utc::now()),
                },
            )
            .await
    }

    async fn require_pending(&self, request_id: &str) -> EngineResult<LeaveRequest> {
        let request = self
            .store
            .leave_request(request_id)
            .await?
            .ok_or_else(|| EngineError::RecordNotFound {
                entity: "leave request",
                id: request_id.to_string(),
            })?;

        if request.status.is_terminal() {
            return Err(EngineError::InvalidTransition {
                request_id: request.id,
                status: request.status,
            });
        }
        Ok(request)
    }

    async fn require_reviewer(&self, reviewer_id: &str) -> EngineResult<Employee> {
        let reviewer = self
            .store
            .employee(reviewer_id)
            .await?
            .ok_or_else(|| EngineError::RecordNotFound {
                entity: "employee",
                id: reviewer_id.to_string(),
            })?;

        if !reviewer.role.is_privileged() {
            return Err(EngineError::PolicyViolation {
                message: "only admin or HR officer accounts may review leave requests".to_string(),
            });
        }
        Ok(reviewer)
    }

    async fn require_employee(&self, employee_id: &str) -> EngineResult<Employee> {
        self.store
            .employee(employee_id)
            .await?
            .ok_or_else(|| EngineError::RecordNotFound {
                entity: "employee",
                id: employee_id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeRole, NewEmployee};
    use crate::store::MemoryStore;

    struct Fixture {
        store: Arc<MemoryStore>,
        workflow: LeaveWorkflow,
        ledger: BalanceLedger,
        employee_id: String,
        reviewer_id: String,
    }

    async fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let employee = create_employee(&store, "john.doe@example.com", EmployeeRole::Employee).await;
        let reviewer = create_employee(&store, "hr@example.com", EmployeeRole::HrOfficer).await;

        let policy = HrPolicy::default();
        Fixture {
            workflow: LeaveWorkflow::new(store.clone(), policy.clone()),
            ledger: BalanceLedger::new(store.clone(), policy),
            store,
            employee_id: employee,
            reviewer_id: reviewer,
        }
    }

    async fn create_employee(store: &Arc<MemoryStore>, email: &str, role: EmployeeRole) -> String {
        store
            .create_employee(NewEmployee {
                login_id: format!("OIXX2024{:04}", email.len()),
                first_name: "Test".to_string(),
                last_name: "Person".to_string(),
                email: email.to_string(),
                role,
                department: None,
                designation: None,
                phone: None,
                date_of_joining: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            })
            .await
            .unwrap()
            .id
    }

    fn submission(employee_id: &str, leave_type: LeaveType, start: u32, end: u32) -> LeaveSubmission {
        LeaveSubmission {
            employee_id: employee_id.to_string(),
            leave_type,
            start_date: NaiveDate::from_ymd_opt(2024, 3, start).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, end).unwrap(),
            reason: "family matters".to_string(),
            attachment_url: None,
        }
    }

    #[tokio::test]
    async fn test_submit_computes_inclusive_day_count() {
        let fx = fixture().await;
        let request = fx
            .workflow
            .submit(submission(&fx.employee_id, LeaveType::PaidLeave, 1, 3))
            .await
            .unwrap();

        assert_eq!(request.total_days, 3);
        assert_eq!(request.status, LeaveStatus::Pending);
        assert_eq!(request.reviewed_by, None);
    }

    #[tokio::test]
    async fn test_submit_rejects_reversed_range() {
        let fx = fixture().await;
        let error = fx
            .workflow
            .submit(submission(&fx.employee_id, LeaveType::PaidLeave, 3, 1))
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            EngineError::Validation { ref field, .. } if field == "end_date"
        ));
    }

    #[tokio::test]
    async fn test_submit_rejects_empty_reason() {
        let fx = fixture().await;
        let mut submission = submission(&fx.employee_id, LeaveType::PaidLeave, 1, 1);
        submission.reason = "  ".to_string();

        let error = fx.workflow.submit(submission).await.unwrap_err();
        assert!(matches!(
            error,
            EngineError::Validation { ref field, .. } if field == "reason"
        ));
    }

    #[tokio::test]
    async fn test_submit_allowed_with_exhausted_balance() {
        let fx = fixture().await;
        fx.ledger
            .debit(&fx.employee_id, 2024, LeaveType::SickLeave, 6)
            .await
            .unwrap();

        let request = fx
            .workflow
            .submit(submission(&fx.employee_id, LeaveType::SickLeave, 1, 2))
            .await
            .unwrap();
        assert_eq!(request.status, LeaveStatus::Pending);
    }

    #[tokio::test]
    async fn test_approval_debits_balance_and_creates_attendance() {
        let fx = fixture().await;
        fx.ledger
            .debit(&fx.employee_id, 2024, LeaveType::SickLeave, 1)
            .await
            .unwrap();

        let request = fx
            .workflow
            .submit(submission(&fx.employee_id, LeaveType::SickLeave, 4, 5))
            .await
            .unwrap();
        let approved = fx
            .workflow
            .approve(&request.id, &fx.reviewer_id, Some("get well".to_string()))
            .await
            .unwrap();

        assert_eq!(approved.status, LeaveStatus::Approved);
        assert_eq!(approved.reviewed_by.as_deref(), Some(fx.reviewer_id.as_str()));
        assert!(approved.reviewed_at.is_some());
        assert_eq!(approved.admin_remarks.as_deref(), Some("get well"));

        let balance = fx
            .store
            .leave_balance(&fx.employee_id, 2024)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(balance.sick_leave_used, 3);

        let records = fx.store.list_attendance(&fx.employee_id).await.unwrap();
        assert_eq!(records.len(), 2);
        assert!(
            records
                .iter()
                .all(|r| r.status == AttendanceStatus::Leave && r.check_in.is_none())
        );
    }

    #[tokio::test]
    async fn test_approval_skips_days_that_already_have_attendance() {
        let fx = fixture().await;
        fx.store
            .create_attendance(NewAttendance {
                employee_id: fx.employee_id.clone(),
                date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
                check_in: None,
                status: AttendanceStatus::HalfDay,
                notes: None,
            })
            .await
            .unwrap();

        let request = fx
            .workflow
            .submit(submission(&fx.employee_id, LeaveType::PaidLeave, 4, 6))
            .await
            .unwrap();
        fx.workflow
            .approve(&request.id, &fx.reviewer_id, None)
            .await
            .unwrap();

        let records = fx.store.list_attendance(&fx.employee_id).await.unwrap();
        assert_eq!(records.len(), 3);
        // The pre-existing day keeps its record; only the two new days are leave.
        let leave_days = records
            .iter()
            .filter(|r| r.status == AttendanceStatus::Leave)
            .count();
        assert_eq!(leave_days, 2);
    }

    #[tokio::test]
    async fn test_approving_a_decided_request_is_an_invalid_transition() {
        let fx = fixture().await;
        let request = fx
            .workflow
            .submit(submission(&fx.employee_id, LeaveType::PaidLeave, 1, 1))
            .await
            .unwrap();
        fx.workflow
            .approve(&request.id, &fx.reviewer_id, None)
            .await
            .unwrap();

        let error = fx
            .workflow
            .approve(&request.id, &fx.reviewer_id, None)
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            EngineError::InvalidTransition {
                status: LeaveStatus::Approved,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_rejection_stamps_without_side_effects() {
        let fx = fixture().await;
        let request = fx
            .workflow
            .submit(submission(&fx.employee_id, LeaveType::PaidLeave, 1, 2))
            .await
            .unwrap();
        let rejected = fx
            .workflow
            .reject(&request.id, &fx.reviewer_id, Some("short notice".to_string()))
            .await
            .unwrap();

        assert_eq!(rejected.status, LeaveStatus::Rejected);
        assert_eq!(rejected.admin_remarks.as_deref(), Some("short notice"));

        assert!(fx.store.list_attendance(&fx.employee_id).await.unwrap().is_empty());
        assert!(
            fx.store
                .leave_balance(&fx.employee_id, 2024)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_rejecting_a_decided_request_is_an_invalid_transition() {
        let fx = fixture().await;
        let request = fx
            .workflow
            .submit(submission(&fx.employee_id, LeaveType::PaidLeave, 1, 1))
            .await
            .unwrap();
        fx.workflow
            .reject(&request.id, &fx.reviewer_id, None)
            .await
            .unwrap();

        let error = fx
            .workflow
            .reject(&request.id, &fx.reviewer_id, None)
            .await
            .unwrap_err();
        assert!(matches!(error, EngineError::InvalidTransition { .. }));
    }

    #[tokio::test]
    async fn test_regular_employee_cannot_review() {
        let fx = fixture().await;
        let request = fx
            .workflow
            .submit(submission(&fx.employee_id, LeaveType::PaidLeave, 1, 1))
            .await
            .unwrap();

        let error = fx
            .workflow
            .approve(&request.id, &fx.employee_id, None)
            .await
            .unwrap_err();
        assert!(matches!(error, EngineError::PolicyViolation { .. }));
    }

    #[tokio::test]
    async fn test_unpaid_leave_debits_the_unbounded_counter() {
        let fx = fixture().await;
        let request = fx
            .workflow
            .submit(submission(&fx.employee_id, LeaveType::UnpaidLeave, 10, 14))
            .await
            .unwrap();
        fx.workflow
            .approve(&request.id, &fx.reviewer_id, None)
            .await
            .unwrap();

        let balance = fx
            .store
            .leave_balance(&fx.employee_id, 2024)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(balance.unpaid_leave_used, 5);
        assert_eq!(balance.paid_leave_used, 0);
    }
}
