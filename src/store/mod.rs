//! Record-store and file-storage seams.
//!
//! The engine owns no persistence: every record lives in an external
//! entity store reached through [`HrStore`], and uploaded files go through
//! [`FileStorage`], which hands back an opaque URL. Store calls are never
//! retried here; a failing collaborator surfaces as
//! [`crate::error::EngineError::StoreUnavailable`] for the caller to
//! handle. [`MemoryStore`] implements both seams for tests and embedded
//! use.

mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use memory::MemoryStore;

use crate::error::EngineResult;
use crate::models::{
    Attendance, AttendancePatch, Company, CompanyPatch, Employee, EmployeePatch, LeaveBalance,
    LeaveBalancePatch, LeaveRequest, LeaveRequestPatch, NewAttendance, NewCompany, NewEmployee,
    NewLeaveBalance, NewLeaveRequest, NewSalary, Salary, SalaryStructure,
};

/// A file accepted by the file-storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    /// The URL under which the uploaded content is reachable.
    pub url: String,
}

/// The entity store the engine delegates all persistence to.
///
/// The store assigns record identifiers and creation timestamps; update
/// methods return the stored record after the write so callers hold the
/// post-write view without a second read. `update_*` on a missing id is
/// a [`crate::error::EngineError::RecordNotFound`].
#[async_trait]
pub trait HrStore: Send + Sync {
    /// Creates an employee record.
    async fn create_employee(&self, new: NewEmployee) -> EngineResult<Employee>;

    /// Looks up an employee by record id.
    async fn employee(&self, id: &str) -> EngineResult<Option<Employee>>;

    /// Looks up an employee by unique email.
    async fn employee_by_email(&self, email: &str) -> EngineResult<Option<Employee>>;

    /// Lists all employees in creation order.
    async fn list_employees(&self) -> EngineResult<Vec<Employee>>;

    /// Applies a patch to an employee record.
    async fn update_employee(&self, id: &str, patch: EmployeePatch) -> EngineResult<Employee>;

    /// Counts employees holding an admin or HR officer role.
    async fn count_privileged(&self) -> EngineResult<u32>;

    /// Reserves and returns the next onboarding sequence number for the
    /// given company code and joining year. Implementations must make
    /// this atomic per (company, year) so concurrent onboardings never
    /// observe the same number.
    async fn next_employee_sequence(&self, company_code: &str, year: i32) -> EngineResult<u32>;

    /// Creates an attendance record.
    async fn create_attendance(&self, new: NewAttendance) -> EngineResult<Attendance>;

    /// Looks up the attendance record for one employee on one day.
    async fn attendance_on(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Option<Attendance>>;

    /// Lists an employee's attendance records ordered by date.
    async fn list_attendance(&self, employee_id: &str) -> EngineResult<Vec<Attendance>>;

    /// Applies a patch to an attendance record.
    async fn update_attendance(&self, id: &str, patch: AttendancePatch)
    -> EngineResult<Attendance>;

    /// Creates a leave request record.
    async fn create_leave_request(&self, new: NewLeaveRequest) -> EngineResult<LeaveRequest>;

    /// Looks up a leave request by record id.
    async fn leave_request(&self, id: &str) -> EngineResult<Option<LeaveRequest>>;

    /// Lists leave requests, newest first, optionally for one employee.
    async fn list_leave_requests(
        &self,
        employee_id: Option<&str>,
    ) -> EngineResult<Vec<LeaveRequest>>;

    /// Applies a patch to a leave request record.
    async fn update_leave_request(
        &self,
        id: &str,
        patch: LeaveRequestPatch,
    ) -> EngineResult<LeaveRequest>;

    /// Creates a leave balance row.
    async fn create_leave_balance(&self, new: NewLeaveBalance) -> EngineResult<LeaveBalance>;

    /// Looks up the balance row for one employee and year.
    async fn leave_balance(
        &self,
        employee_id: &str,
        year: i32,
    ) -> EngineResult<Option<LeaveBalance>>;

    /// Applies a patch to a leave balance row.
    async fn update_leave_balance(
        &self,
        id: &str,
        patch: LeaveBalancePatch,
    ) -> EngineResult<LeaveBalance>;

    /// Creates a salary record.
    async fn create_salary(&self, new: NewSalary) -> EngineResult<Salary>;

    /// Looks up the active salary structure for an employee.
    async fn salary_for(&self, employee_id: &str) -> EngineResult<Option<Salary>>;

    /// Replaces the structure of an existing salary record.
    async fn update_salary(&self, id: &str, structure: SalaryStructure) -> EngineResult<Salary>;

    /// Creates the company record.
    async fn create_company(&self, new: NewCompany) -> EngineResult<Company>;

    /// Looks up the company record.
    async fn company(&self) -> EngineResult<Option<Company>>;

    /// Applies a patch to the company record.
    async fn update_company(&self, id: &str, patch: CompanyPatch) -> EngineResult<Company>;
}

/// The file-upload collaborator.
///
/// The engine treats uploads as opaque: it hands over bytes and keeps
/// only the returned URL (profile pictures, leave attachments, company
/// logos).
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Uploads a file and returns where it is stored.
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> EngineResult<StoredFile>;
}
