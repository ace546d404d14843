//! Employee record and related types.
//!
//! This module defines the Employee record, its role and status enums,
//! and the creation/update shapes accepted by the record store.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The access role an employee holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeRole {
    /// Full administrative access.
    Admin,
    /// HR operations access (reviews leave, manages employees).
    HrOfficer,
    /// Regular employee access.
    Employee,
}

impl EmployeeRole {
    /// Returns true for the roles counted against the privileged-account
    /// limit (admin and HR officer combined).
    ///
    /// # Examples
    ///
    /// ```
    /// use hrflow_engine::models::EmployeeRole;
    ///
    /// assert!(EmployeeRole::Admin.is_privileged());
    /// assert!(EmployeeRole::HrOfficer.is_privileged());
    /// assert!(!EmployeeRole::Employee.is_privileged());
    /// ```
    pub fn is_privileged(&self) -> bool {
        matches!(self, EmployeeRole::Admin | EmployeeRole::HrOfficer)
    }
}

/// The employment status of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed and working.
    Active,
    /// No longer working; the record is retained.
    Inactive,
    /// Currently on approved leave.
    OnLeave,
}

/// An employee record as held by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned record identifier.
    pub id: String,
    /// Generated login identifier, immutable after creation.
    pub login_id: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Unique email address.
    pub email: String,
    /// The access role held by this employee.
    pub role: EmployeeRole,
    /// Department the employee belongs to.
    #[serde(default)]
    pub department: Option<String>,
    /// Job title or designation.
    #[serde(default)]
    pub designation: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// URL of the uploaded profile picture.
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    /// The date the employee joined the company.
    pub date_of_joining: NaiveDate,
    /// Current employment status.
    pub status: EmployeeStatus,
    /// Store-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Employee {
    /// Returns the employee's display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields supplied when creating an employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Generated login identifier.
    pub login_id: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Unique email address.
    pub email: String,
    /// The access role to grant.
    pub role: EmployeeRole,
    /// Department the employee belongs to.
    #[serde(default)]
    pub department: Option<String>,
    /// Job title or designation.
    #[serde(default)]
    pub designation: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// The date the employee joins the company.
    pub date_of_joining: NaiveDate,
}

/// Fields an employee update may change. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeePatch {
    /// New department, if changing.
    #[serde(default)]
    pub department: Option<String>,
    /// New designation, if changing.
    #[serde(default)]
    pub designation: Option<String>,
    /// New phone number, if changing.
    #[serde(default)]
    pub phone: Option<String>,
    /// New profile picture URL, if changing.
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    /// New employment status, if changing.
    #[serde(default)]
    pub status: Option<EmployeeStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee(role: EmployeeRole) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            login_id: "OIJD20240001".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            role,
            department: Some("Engineering".to_string()),
            designation: None,
            phone: None,
            profile_picture_url: None,
            date_of_joining: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            status: EmployeeStatus::Active,
            created_at: DateTime::parse_from_rfc3339("2024-03-01T09:00:00Z")
                .unwrap()
                .to_utc(),
        }
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "emp_001",
            "login_id": "OIJD20240001",
            "first_name": "John",
            "last_name": "Doe",
            "email": "john.doe@example.com",
            "role": "employee",
            "department": "Engineering",
            "date_of_joining": "2024-03-01",
            "status": "active",
            "created_at": "2024-03-01T09:00:00Z"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.login_id, "OIJD20240001");
        assert_eq!(employee.role, EmployeeRole::Employee);
        assert_eq!(employee.status, EmployeeStatus::Active);
        assert_eq!(employee.department.as_deref(), Some("Engineering"));
        assert_eq!(employee.designation, None);
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let employee = create_test_employee(EmployeeRole::Admin);
        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&EmployeeRole::Admin).unwrap(),
            "\"admin\""
        );
        assert_eq!(
            serde_json::to_string(&EmployeeRole::HrOfficer).unwrap(),
            "\"hr_officer\""
        );
        assert_eq!(
            serde_json::to_string(&EmployeeRole::Employee).unwrap(),
            "\"employee\""
        );
    }

    #[test]
    fn test_privileged_roles() {
        assert!(create_test_employee(EmployeeRole::Admin).role.is_privileged());
        assert!(
            create_test_employee(EmployeeRole::HrOfficer)
                .role
                .is_privileged()
        );
        assert!(
            !create_test_employee(EmployeeRole::Employee)
                .role
                .is_privileged()
        );
    }

    #[test]
    fn test_full_name() {
        let employee = create_test_employee(EmployeeRole::Employee);
        assert_eq!(employee.full_name(), "John Doe");
    }

    #[test]
    fn test_patch_defaults_to_no_changes() {
        let patch = EmployeePatch::default();
        assert_eq!(patch.department, None);
        assert_eq!(patch.status, None);
    }
}
