//! Request types for the HR operations engine API.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{
    EmployeeRole, LeaveType, NewCompany, SalaryComponent, SalaryStructure, WageType,
};
use crate::workflow::{LeaveSubmission, NewHire};

/// Body of `POST /setup`: the company record plus its first admin.
#[derive(Debug, Clone, Deserialize)]
pub struct SetupRequest {
    /// The company to create.
    pub company: CompanyPayload,
    /// The first admin account to create.
    pub admin: HirePayload,
}

/// Company fields accepted over the API.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyPayload {
    /// Company display name.
    pub name: String,
    /// Short code used in login identifiers.
    pub code: String,
    /// URL of an already-uploaded logo.
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl From<CompanyPayload> for NewCompany {
    fn from(payload: CompanyPayload) -> Self {
        Self {
            name: payload.name,
            code: payload.code,
            logo_url: payload.logo_url,
        }
    }
}

/// Body of `POST /employees`.
#[derive(Debug, Clone, Deserialize)]
pub struct HirePayload {
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
    /// The date the employee joins.
    pub date_of_joining: NaiveDate,
}

impl From<HirePayload> for NewHire {
    fn from(payload: HirePayload) -> Self {
        Self {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            role: payload.role,
            department: payload.department,
            designation: payload.designation,
            phone: payload.phone,
            date_of_joining: payload.date_of_joining,
        }
    }
}

/// Body of `POST /attendance/check-in` and `/attendance/check-out`.
///
/// Without a timestamp the current instant is used.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckInRequest {
    /// The employee checking in or out.
    pub employee_id: String,
    /// The instant of the event; defaults to now.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Body of `POST /leave-requests`.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveSubmitRequest {
    /// The requesting employee.
    pub employee_id: String,
    /// The category of leave requested.
    pub leave_type: LeaveType,
    /// First day of leave.
    pub start_date: NaiveDate,
    /// Last day of leave, inclusive.
    pub end_date: NaiveDate,
    /// The stated reason.
    pub reason: String,
    /// URL of an already-uploaded supporting document.
    #[serde(default)]
    pub attachment_url: Option<String>,
}

impl From<LeaveSubmitRequest> for LeaveSubmission {
    fn from(request: LeaveSubmitRequest) -> Self {
        Self {
            employee_id: request.employee_id,
            leave_type: request.leave_type,
            start_date: request.start_date,
            end_date: request.end_date,
            reason: request.reason,
            attachment_url: request.attachment_url,
        }
    }
}

/// Body of `POST /leave-requests/:id/approve` and `/reject`.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveDecisionRequest {
    /// The reviewing admin or HR officer.
    pub reviewer_id: String,
    /// Remarks to record with the decision.
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Body of `POST /salaries`.
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryRequest {
    /// The employee the structure belongs to.
    pub employee_id: String,
    /// Whether the base wage is fixed or hourly.
    pub wage_type: WageType,
    /// The base wage figure.
    pub base_wage: Decimal,
    /// Basic pay component.
    pub basic: SalaryComponent,
    /// House rent allowance component.
    pub hra: SalaryComponent,
    /// Standard allowance component.
    pub standard_allowance: SalaryComponent,
    /// Performance bonus component.
    pub performance_bonus: SalaryComponent,
    /// Leave travel allowance component.
    pub lta: SalaryComponent,
    /// Fixed allowance component.
    pub fixed_allowance: SalaryComponent,
    /// The date the structure takes effect.
    pub effective_from: NaiveDate,
}

impl SalaryRequest {
    /// Extracts the salary structure from the request.
    pub fn structure(&self) -> SalaryStructure {
        SalaryStructure {
            wage_type: self.wage_type,
            base_wage: self.base_wage,
            basic: self.basic,
            hra: self.hra,
            standard_allowance: self.standard_allowance,
            performance_bonus: self.performance_bonus,
            lta: self.lta,
            fixed_allowance: self.fixed_allowance,
            effective_from: self.effective_from,
        }
    }
}

/// Query parameters of `POST /files`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadParams {
    /// The name of the file being uploaded.
    pub name: String,
}

/// Query parameters of `GET /leave-requests`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaveListParams {
    /// Restrict the listing to one employee.
    #[serde(default)]
    pub employee_id: Option<String>,
}
