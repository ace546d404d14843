//! Company setup and employee hiring.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::info;

use crate::calculation::format_login_id;
use crate::config::HrPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{Company, CompanyPatch, Employee, EmployeeRole, NewCompany, NewEmployee};
use crate::store::HrStore;

use super::BalanceLedger;

/// The fields supplied when hiring an employee.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHire {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Unique email address.
    pub email: String,
    /// The access role to grant.
    pub role: EmployeeRole,
    /// Department the employee belongs to.
    pub department: Option<String>,
    /// Job title or designation.
    pub designation: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// The date the employee joins.
    pub date_of_joining: NaiveDate,
}

/// Creates the company record and employee accounts.
///
/// Hiring synthesizes the login identifier from the company code, the
/// employee's initials, the joining year, and the store's atomic
/// per-(company, year) sequence, then provisions the joining year's
/// leave balance.
#[derive(Clone)]
pub struct Onboarding {
    store: Arc<dyn HrStore>,
    ledger: BalanceLedger,
    policy: HrPolicy,
}

impl Onboarding {
    /// Creates an onboarding coordinator over the given store and policy.
    pub fn new(store: Arc<dyn HrStore>, policy: HrPolicy) -> Self {
        let ledger = BalanceLedger::new(store.clone(), policy.clone());
        Self {
            store,
            ledger,
            policy,
        }
    }

    /// One-time company setup: creates the company record and its first
    /// admin account. Fails once a company already exists.
    pub async fn setup(
        &self,
        company: NewCompany,
        first_admin: NewHire,
    ) -> EngineResult<(Company, Employee)> {
        if self.store.company().await?.is_some() {
            return Err(EngineError::PolicyViolation {
                message: "company is already configured".to_string(),
            });
        }
        validate_company_code(&company.code)?;

        info!(company = %company.name, code = %company.code, "creating company");
        let company = self.store.create_company(company).await?;
        let admin = self.hire(first_admin).await?;

        // hire() bumped the privileged-account mirror; return the fresh view.
        let company = self
            .store
            .company()
            .await?
            .ok_or_else(|| EngineError::RecordNotFound {
                entity: "company",
                id: company.id,
            })?;
        Ok((company, admin))
    }

    /// Hires an employee: validates the email, enforces the
    /// privileged-account limit, synthesizes the login identifier, and
    /// provisions the joining year's leave balance.
    pub async fn hire(&self, hire: NewHire) -> EngineResult<Employee> {
        let company = self
            .store
            .company()
            .await?
            .ok_or_else(|| EngineError::RecordNotFound {
                entity: "company",
                id: "default".to_string(),
            })?;

        let email = hire.email.trim().to_string();
        if !email.contains('@') {
            return Err(EngineError::Validation {
                field: "email".to_string(),
                message: "must be a valid email address".to_string(),
            });
        }
        if self.store.employee_by_email(&email).await?.is_some() {
            return Err(EngineError::Validation {
                field: "email".to_string(),
                message: format!("{email} is already registered"),
            });
        }

        if hire.role.is_privileged() {
            let privileged = self.store.count_privileged().await?;
            if privileged >= self.policy.accounts.max_privileged {
                return Err(EngineError::PolicyViolation {
                    message: format!(
                        "at most {} admin or HR officer accounts are allowed",
                        self.policy.accounts.max_privileged
                    ),
                });
            }
        }

        let year = hire.date_of_joining.year();
        let sequence = self.store.next_employee_sequence(&company.code, year).await?;
        let login_id = format_login_id(
            &company.code,
            &hire.first_name,
            &hire.last_name,
            year,
            sequence,
        )?;

        let employee = self
            .store
            .create_employee(NewEmployee {
                login_id,
                first_name: hire.first_name,
                last_name: hire.last_name,
                email,
                role: hire.role,
                department: hire.department,
                designation: hire.designation,
                phone: hire.phone,
                date_of_joining: hire.date_of_joining,
            })
            .await?;

        self.ledger.initialize(&employee.id, year).await?;

        if employee.role.is_privileged() {
            // The mirror is recomputed from the employee table, not
            // incremented from the earlier read.
            let privileged = self.store.count_privileged().await?;
            self.store
                .update_company(
                    &company.id,
                    CompanyPatch {
                        admin_count: Some(privileged),
                        ..Default::default()
                    },
                )
                .await?;
        }

        info!(
            employee_id = %employee.id,
            login_id = %employee.login_id,
            role = ?employee.role,
            "employee hired"
        );
        Ok(employee)
    }
}

fn validate_company_code(code: &str) -> EngineResult<()> {
    let trimmed = code.trim();
    if !(2..=4).contains(&trimmed.len()) || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(EngineError::Validation {
            field: "company_code".to_string(),
            message: "must be 2-4 alphanumeric characters".to_string(),
        });
    }
    Ok(())
}
