//! Attendance record and related types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The classification of a day's attendance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// A full day was worked.
    Present,
    /// Too few hours were worked to count at all.
    Absent,
    /// At least half a day was worked.
    HalfDay,
    /// The day is covered by an approved leave request.
    Leave,
    /// The day is open: checked in but not yet checked out.
    Pending,
}

/// One attendance record per employee per calendar day.
///
/// A record is created when an employee checks in (or when a leave
/// approval covers the day) and completed when they check out, at which
/// point `work_hours`, `extra_hours`, and `status` are recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    /// Store-assigned record identifier.
    pub id: String,
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar day the record covers.
    pub date: NaiveDate,
    /// Check-in instant, absent for leave days.
    #[serde(default)]
    pub check_in: Option<DateTime<Utc>>,
    /// Check-out instant, only valid with a check-in present.
    #[serde(default)]
    pub check_out: Option<DateTime<Utc>>,
    /// Derived worked hours, filled at check-out.
    #[serde(default)]
    pub work_hours: Option<Decimal>,
    /// Derived overtime hours, filled at check-out.
    #[serde(default)]
    pub extra_hours: Option<Decimal>,
    /// The day's classification.
    pub status: AttendanceStatus,
    /// Free-form note, e.g. the leave description for leave days.
    #[serde(default)]
    pub notes: Option<String>,
    /// Store-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating an attendance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAttendance {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The calendar day the record covers.
    pub date: NaiveDate,
    /// Check-in instant, absent for leave days.
    #[serde(default)]
    pub check_in: Option<DateTime<Utc>>,
    /// The day's initial classification.
    pub status: AttendanceStatus,
    /// Free-form note.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Fields an attendance update may change. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendancePatch {
    /// Check-out instant to record.
    #[serde(default)]
    pub check_out: Option<DateTime<Utc>>,
    /// Recomputed worked hours.
    #[serde(default)]
    pub work_hours: Option<Decimal>,
    /// Recomputed overtime hours.
    #[serde(default)]
    pub extra_hours: Option<Decimal>,
    /// Recomputed classification.
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Present).unwrap(),
            "\"present\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::HalfDay).unwrap(),
            "\"half_day\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Leave).unwrap(),
            "\"leave\""
        );
    }

    #[test]
    fn test_deserialize_leave_day_without_timestamps() {
        let json = r#"{
            "id": "att_001",
            "employee_id": "emp_001",
            "date": "2024-03-04",
            "status": "leave",
            "notes": "Approved paid_leave from 2024-03-04 to 2024-03-05",
            "created_at": "2024-03-02T10:00:00Z"
        }"#;

        let record: Attendance = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, AttendanceStatus::Leave);
        assert_eq!(record.check_in, None);
        assert_eq!(record.check_out, None);
        assert_eq!(record.work_hours, None);
    }

    #[test]
    fn test_serialize_round_trip() {
        let record = Attendance {
            id: "att_002".to_string(),
            employee_id: "emp_001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            check_in: Some(
                DateTime::parse_from_rfc3339("2024-03-01T09:00:00Z")
                    .unwrap()
                    .to_utc(),
            ),
            check_out: Some(
                DateTime::parse_from_rfc3339("2024-03-01T18:30:00Z")
                    .unwrap()
                    .to_utc(),
            ),
            work_hours: Some(Decimal::new(95, 1)),
            extra_hours: Some(Decimal::new(15, 1)),
            status: AttendanceStatus::Present,
            notes: None,
            created_at: DateTime::parse_from_rfc3339("2024-03-01T09:00:00Z")
                .unwrap()
                .to_utc(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: Attendance = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
