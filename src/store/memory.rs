//! In-memory implementation of the store seams.
//!
//! Backs the unit and integration tests and embedded use. One `RwLock`
//! guards all tables, so every read-modify-write sequence (sequence
//! reservation, patch application) is serialized.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Attendance, AttendancePatch, Company, CompanyPatch, Employee, EmployeePatch, EmployeeStatus,
    LeaveBalance, LeaveBalancePatch, LeaveRequest, LeaveRequestPatch, NewAttendance, NewCompany,
    NewEmployee, NewLeaveBalance, NewLeaveRequest, NewSalary, Salary, SalaryStructure,
};

use super::{FileStorage, HrStore, StoredFile};

#[derive(Debug, Default)]
struct Tables {
    employees: Vec<Employee>,
    attendance: Vec<Attendance>,
    leave_requests: Vec<LeaveRequest>,
    leave_balances: Vec<LeaveBalance>,
    salaries: Vec<Salary>,
    companies: Vec<Company>,
    sequences: HashMap<(String, i32), u32>,
    files: HashMap<String, Vec<u8>>,
}

/// An in-memory record store and file store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn new_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

#[async_trait]
impl HrStore for MemoryStore {
    async fn create_employee(&self, new: NewEmployee) -> EngineResult<Employee> {
        let employee = Employee {
            id: new_id("emp"),
            login_id: new.login_id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            role: new.role,
            department: new.department,
            designation: new.designation,
            phone: new.phone,
            profile_picture_url: None,
            date_of_joining: new.date_of_joining,
            status: EmployeeStatus::Active,
            created_at: Utc::now(),
        };
        self.inner.write().await.employees.push(employee.clone());
        Ok(employee)
    }

    async fn employee(&self, id: &str) -> EngineResult<Option<Employee>> {
        let tables = self.inner.read().await;
        Ok(tables.employees.iter().find(|e| e.id == id).cloned())
    }

    async fn employee_by_email(&self, email: &str) -> EngineResult<Option<Employee>> {
        let tables = self.inner.read().await;
        Ok(tables
            .employees
            .iter()
            .find(|e| e.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn list_employees(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.inner.read().await.employees.clone())
    }

    async fn update_employee(&self, id: &str, patch: EmployeePatch) -> EngineResult<Employee> {
        let mut tables = self.inner.write().await;
        let employee = tables
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| EngineError::RecordNotFound {
                entity: "employee",
                id: id.to_string(),
            })?;

        if let Some(department) = patch.department {
            employee.department = Some(department);
        }
        if let Some(designation) = patch.designation {
            employee.designation = Some(designation);
        }
        if let Some(phone) = patch.phone {
            employee.phone = Some(phone);
        }
        if let Some(url) = patch.profile_picture_url {
            employee.profile_picture_url = Some(url);
        }
        if let Some(status) = patch.status {
            employee.status = status;
        }
        Ok(employee.clone())
    }

    async fn count_privileged(&self) -> EngineResult<u32> {
        let tables = self.inner.read().await;
        Ok(tables
            .employees
            .iter()
            .filter(|e| e.role.is_privileged())
            .count() as u32)
    }

    async fn next_employee_sequence(&self, company_code: &str, year: i32) -> EngineResult<u32> {
        let mut tables = self.inner.write().await;
        let seed = tables
            .employees
            .iter()
            .filter(|e| e.date_of_joining.year() == year)
            .count() as u32;
        let counter = tables
            .sequences
            .entry((company_code.to_uppercase(), year))
            .or_insert(seed);
        *counter += 1;
        Ok(*counter)
    }

    async fn create_attendance(&self, new: NewAttendance) -> EngineResult<Attendance> {
        let record = Attendance {
            id: new_id("att"),
            employee_id: new.employee_id,
            date: new.date,
            check_in: new.check_in,
            check_out: None,
            work_hours: None,
            extra_hours: None,
            status: new.status,
            notes: new.notes,
            created_at: Utc::now(),
        };
        self.inner.write().await.attendance.push(record.clone());
        Ok(record)
    }

    async fn attendance_on(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Option<Attendance>> {
        let tables = self.inner.read().await;
        Ok(tables
            .attendance
            .iter()
            .find(|a| a.employee_id == employee_id && a.date == date)
            .cloned())
    }

    async fn list_attendance(&self, employee_id: &str) -> EngineResult<Vec<Attendance>> {
        let tables = self.inner.read().await;
        let mut records: Vec<Attendance> = tables
            .attendance
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .cloned()
            .collect();
        records.sort_by_key(|a| a.date);
        Ok(records)
    }

    async fn update_attendance(
        &self,
        id: &str,
        patch: AttendancePatch,
    ) -> EngineResult<Attendance> {
        let mut tables = self.inner.write().await;
        let record = tables
            .attendance
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| EngineError::RecordNotFound {
                entity: "attendance",
                id: id.to_string(),
            })?;

        if let Some(check_out) = patch.check_out {
            record.check_out = Some(check_out);
        }
        if let Some(work_hours) = patch.work_hours {
            record.work_hours = Some(work_hours);
        }
        if let Some(extra_hours) = patch.extra_hours {
            record.extra_hours = Some(extra_hours);
        }
        if let Some(status) = patch.status {
            record.status = status;
        }
        Ok(record.clone())
    }

    async fn create_leave_request(&self, new: NewLeaveRequest) -> EngineResult<LeaveRequest> {
        let request = LeaveRequest {
            id: new_id("req"),
            employee_id: new.employee_id,
            leave_type: new.leave_type,
            start_date: new.start_date,
            end_date: new.end_date,
            total_days: new.total_days,
            reason: new.reason,
            attachment_url: new.attachment_url,
            status: new.status,
            admin_remarks: None,
            reviewed_by: None,
            reviewed_at: None,
            created_at: Utc::now(),
        };
        self.inner
            .write()
            .await
            .leave_requests
            .push(request.clone());
        Ok(request)
    }

    async fn leave_request(&self, id: &str) -> EngineResult<Option<LeaveRequest>> {
        let tables = self.inner.read().await;
        Ok(tables.leave_requests.iter().find(|r| r.id == id).cloned())
    }

    async fn list_leave_requests(
        &self,
        employee_id: Option<&str>,
    ) -> EngineResult<Vec<LeaveRequest>> {
        let tables = self.inner.read().await;
        let mut requests: Vec<LeaveRequest> = tables
            .leave_requests
            .iter()
            .filter(|r| employee_id.is_none_or(|id| r.employee_id == id))
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(requests)
    }

    async fn update_leave_request(
        &self,
        id: &str,
        patch: LeaveRequestPatch,
    ) -> EngineResult<LeaveRequest> {
        let mut tables = self.inner.write().await;
        let request = tables
            .leave_requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| EngineError::RecordNotFound {
                entity: "leave request",
                id: id.to_string(),
            })?;

        if let Some(status) = patch.status {
            request.status = status;
        }
        if let Some(remarks) = patch.admin_remarks {
            request.admin_remarks = Some(remarks);
        }
        if let Some(reviewer) = patch.reviewed_by {
            request.reviewed_by = Some(reviewer);
        }
        if let Some(reviewed_at) = patch.reviewed_at {
            request.reviewed_at = Some(reviewed_at);
        }
        Ok(request.clone())
    }

    async fn create_leave_balance(&self, new: NewLeaveBalance) -> EngineResult<LeaveBalance> {
        let balance = LeaveBalance {
            id: new_id("bal"),
            employee_id: new.employee_id,
            year: new.year,
            paid_leave_total: new.paid_leave_total,
            paid_leave_used: 0,
            sick_leave_total: new.sick_leave_total,
            sick_leave_used: 0,
            unpaid_leave_used: 0,
            created_at: Utc::now(),
        };
        self.inner
            .write()
            .await
            .leave_balances
            .push(balance.clone());
        Ok(balance)
    }

    async fn leave_balance(
        &self,
        employee_id: &str,
        year: i32,
    ) -> EngineResult<Option<LeaveBalance>> {
        let tables = self.inner.read().await;
        Ok(tables
            .leave_balances
            .iter()
            .find(|b| b.employee_id == employee_id && b.year == year)
            .cloned())
    }

    async fn update_leave_balance(
        &self,
        id: &str,
        patch: LeaveBalancePatch,
    ) -> EngineResult<LeaveBalance> {
        let mut tables = self.inner.write().await;
        let balance = tables
            .leave_balances
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| EngineError::RecordNotFound {
                entity: "leave balance",
                id: id.to_string(),
            })?;

        if let Some(used) = patch.paid_leave_used {
            balance.paid_leave_used = used;
        }
        if let Some(used) = patch.sick_leave_used {
            balance.sick_leave_used = used;
        }
        if let Some(used) = patch.unpaid_leave_used {
            balance.unpaid_leave_used = used;
        }
        Ok(balance.clone())
    }

    async fn create_salary(&self, new: NewSalary) -> EngineResult<Salary> {
        let salary = Salary {
            id: new_id("sal"),
            employee_id: new.employee_id,
            structure: new.structure,
            created_at: Utc::now(),
        };
        self.inner.write().await.salaries.push(salary.clone());
        Ok(salary)
    }

    async fn salary_for(&self, employee_id: &str) -> EngineResult<Option<Salary>> {
        let tables = self.inner.read().await;
        Ok(tables
            .salaries
            .iter()
            .find(|s| s.employee_id == employee_id)
            .cloned())
    }

    async fn update_salary(&self, id: &str, structure: SalaryStructure) -> EngineResult<Salary> {
        let mut tables = self.inner.write().await;
        let salary = tables
            .salaries
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| EngineError::RecordNotFound {
                entity: "salary",
                id: id.to_string(),
            })?;

        salary.structure = structure;
        Ok(salary.clone())
    }

    async fn create_company(&self, new: NewCompany) -> EngineResult<Company> {
        let company = Company {
            id: new_id("com"),
            name: new.name,
            code: new.code,
            logo_url: new.logo_url,
            admin_count: 0,
            created_at: Utc::now(),
        };
        self.inner.write().await.companies.push(company.clone());
        Ok(company)
    }

    async fn company(&self) -> EngineResult<Option<Company>> {
        let tables = self.inner.read().await;
        Ok(tables.companies.first().cloned())
    }

    async fn update_company(&self, id: &str, patch: CompanyPatch) -> EngineResult<Company> {
        let mut tables = self.inner.write().await;
        let company = tables
            .companies
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| EngineError::RecordNotFound {
                entity: "company",
                id: id.to_string(),
            })?;

        if let Some(logo_url) = patch.logo_url {
            company.logo_url = Some(logo_url);
        }
        if let Some(admin_count) = patch.admin_count {
            company.admin_count = admin_count;
        }
        Ok(company.clone())
    }
}

#[async_trait]
impl FileStorage for MemoryStore {
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> EngineResult<StoredFile> {
        if file_name.trim().is_empty() {
            return Err(EngineError::UploadFailed {
                message: "file name must not be empty".to_string(),
            });
        }

        let url = format!("memory://files/{}/{}", Uuid::new_v4().simple(), file_name);
        self.inner.write().await.files.insert(url.clone(), bytes);
        Ok(StoredFile { url })
    }
}
