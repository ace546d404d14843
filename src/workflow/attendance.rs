//! Daily attendance check-in/check-out.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::calculation::{classify_attendance, compute_worked_hours};
use crate::config::HrPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{Attendance, AttendancePatch, AttendanceStatus, Employee, NewAttendance};
use crate::store::HrStore;

/// Records check-ins and check-outs, one attendance record per employee
/// per calendar day.
#[derive(Clone)]
pub struct AttendanceTracker {
    store: Arc<dyn HrStore>,
    policy: HrPolicy,
}

impl AttendanceTracker {
    /// Creates a tracker over the given store and policy.
    pub fn new(store: Arc<dyn HrStore>, policy: HrPolicy) -> Self {
        Self { store, policy }
    }

    /// Opens the day's attendance record with a check-in.
    ///
    /// The day is keyed by the UTC date of `at`. A second check-in on the
    /// same day is a validation error, as is a check-in on a day already
    /// covered by approved leave.
    pub async fn check_in(&self, employee_id: &str, at: DateTime<Utc>) -> EngineResult<Attendance> {
        let employee = self.require_employee(employee_id).await?;
        let date = at.date_naive();

        if self.store.attendance_on(&employee.id, date).await?.is_some() {
            return Err(EngineError::Validation {
                field: "check_in".to_string(),
                message: format!("attendance for {date} is already recorded"),
            });
        }

        info!(employee_id = %employee.id, %date, "check-in");
        self.store
            .create_attendance(NewAttendance {
                employee_id: employee.id,
                date,
                check_in: Some(at),
                status: AttendanceStatus::Present,
                notes: None,
            })
            .await
    }

    /// Closes the day's attendance record with a check-out.
    ///
    /// Requires an open check-in on the UTC date of `at`. Fills the
    /// derived work and overtime hours and reclassifies the day against
    /// the policy thresholds.
    pub async fn check_out(
        &self,
        employee_id: &str,
        at: DateTime<Utc>,
    ) -> EngineResult<Attendance> {
        let employee = self.require_employee(employee_id).await?;
        let date = at.date_naive();

        let record = self
            .store
            .attendance_on(&employee.id, date)
            .await?
            .ok_or_else(|| EngineError::Validation {
                field: "check_out".to_string(),
                message: format!("no check-in recorded for {date}"),
            })?;

        let Some(check_in) = record.check_in else {
            return Err(EngineError::Validation {
                field: "check_out".to_string(),
                message: format!("{date} is not open for check-out"),
            });
        };
        if record.check_out.is_some() {
            return Err(EngineError::Validation {
                field: "check_out".to_string(),
                message: format!("already checked out on {date}"),
            });
        }

        let worked = compute_worked_hours(check_in, at, self.policy.attendance.full_day_hours);
        let status = classify_attendance(
            worked.work_hours,
            self.policy.attendance.full_day_hours,
            self.policy.attendance.half_day_hours,
        );

        info!(
            employee_id = %employee.id,
            %date,
            work_hours = %worked.work_hours,
            extra_hours = %worked.extra_hours,
            "check-out"
        );
        self.store
            .update_attendance(
                &record.id,
                AttendancePatch {
                    check_out: Some(at),
                    work_hours: Some(worked.work_hours),
                    extra_hours: Some(worked.extra_hours),
                    status: Some(status),
                },
            )
            .await
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
    use chrono::{NaiveDate, TimeZone};
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::{EmployeeRole, NewEmployee};
    use crate::store::MemoryStore;

    async fn tracker_with_employee() -> (AttendanceTracker, String) {
        let store = Arc::new(MemoryStore::new());
        let employee = store
            .create_employee(NewEmployee {
                login_id: "OIJD20240001".to_string(),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                email: "john.doe@example.com".to_string(),
                role: EmployeeRole::Employee,
                department: None,
                designation: None,
                phone: None,
                date_of_joining: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            })
            .await
            .unwrap();

        (
            AttendanceTracker::new(store, HrPolicy::default()),
            employee.id,
        )
    }

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, minute, 0).unwrap()
    }

    #[tokio::test]
    async fn test_check_in_opens_a_present_day() {
        let (tracker, employee_id) = tracker_with_employee().await;
        let record = tracker.check_in(&employee_id, at(9, 0)).await.unwrap();

        assert_eq!(record.status, AttendanceStatus::Present);
        assert_eq!(record.check_in, Some(at(9, 0)));
        assert_eq!(record.check_out, None);
        assert_eq!(record.work_hours, None);
    }

    #[tokio::test]
    async fn test_full_day_check_out_fills_hours() {
        let (tracker, employee_id) = tracker_with_employee().await;
        tracker.check_in(&employee_id, at(9, 0)).await.unwrap();
        let record = tracker.check_out(&employee_id, at(18, 30)).await.unwrap();

        assert_eq!(record.work_hours, Some(Decimal::new(95, 1)));
        assert_eq!(record.extra_hours, Some(Decimal::new(15, 1)));
        assert_eq!(record.status, AttendanceStatus::Present);
    }

    #[tokio::test]
    async fn test_short_day_reclassifies_to_half_day() {
        let (tracker, employee_id) = tracker_with_employee().await;
        tracker.check_in(&employee_id, at(9, 0)).await.unwrap();
        let record = tracker.check_out(&employee_id, at(14, 0)).await.unwrap();

        assert_eq!(record.work_hours, Some(Decimal::new(5, 0)));
        assert_eq!(record.status, AttendanceStatus::HalfDay);
    }

    #[tokio::test]
    async fn test_very_short_day_reclassifies_to_absent() {
        let (tracker, employee_id) = tracker_with_employee().await;
        tracker.check_in(&employee_id, at(9, 0)).await.unwrap();
        let record = tracker.check_out(&employee_id, at(10, 30)).await.unwrap();

        assert_eq!(record.status, AttendanceStatus::Absent);
    }

    #[tokio::test]
    async fn test_double_check_in_is_rejected() {
        let (tracker, employee_id) = tracker_with_employee().await;
        tracker.check_in(&employee_id, at(9, 0)).await.unwrap();

        let error = tracker.check_in(&employee_id, at(10, 0)).await.unwrap_err();
        assert!(matches!(
            error,
            EngineError::Validation { ref field, .. } if field == "check_in"
        ));
    }

    #[tokio::test]
    async fn test_check_out_without_check_in_is_rejected() {
        let (tracker, employee_id) = tracker_with_employee().await;
        let error = tracker.check_out(&employee_id, at(17, 0)).await.unwrap_err();
        assert!(matches!(
            error,
            EngineError::Validation { ref field, .. } if field == "check_out"
        ));
    }

    #[tokio::test]
    async fn test_double_check_out_is_rejected() {
        let (tracker, employee_id) = tracker_with_employee().await;
        tracker.check_in(&employee_id, at(9, 0)).await.unwrap();
        tracker.check_out(&employee_id, at(17, 0)).await.unwrap();

        let error = tracker.check_out(&employee_id, at(18, 0)).await.unwrap_err();
        assert!(matches!(
            error,
            EngineError::Validation { ref field, .. } if field == "check_out"
        ));
    }

    #[tokio::test]
    async fn test_unknown_employee_is_rejected() {
        let (tracker, _) = tracker_with_employee().await;
        let error = tracker.check_in("missing", at(9, 0)).await.unwrap_err();
        assert!(matches!(error, EngineError::RecordNotFound { .. }));
    }
}
