//! Policy loading from YAML files.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{EngineError, EngineResult};

use super::types::{HrPolicy, LeaveFile, PolicyFile};

impl HrPolicy {
    /// Loads the policy from the specified directory.
    ///
    /// # Directory Structure
    ///
    /// ```text
    /// config/hr/
    /// ├── policy.yaml   # attendance thresholds, account rules
    /// └── leave.yaml    # annual leave entitlement defaults
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when a file is missing and
    /// [`EngineError::ConfigParseError`] when one fails to parse.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hrflow_engine::config::HrPolicy;
    ///
    /// let policy = HrPolicy::load("./config/hr")?;
    /// assert_eq!(policy.entitlements.paid_leave_total, 12);
    /// # Ok::<(), hrflow_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy: PolicyFile = read_yaml(&path.join("policy.yaml"))?;
        let leave: LeaveFile = read_yaml(&path.join("leave.yaml"))?;

        Ok(Self {
            attendance: policy.attendance,
            accounts: policy.accounts,
            entitlements: leave.entitlements,
        })
    }
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path.display().to_string(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_load_shipped_policy() {
        let policy = HrPolicy::load("./config/hr").unwrap();
        assert_eq!(policy.attendance.full_day_hours, Decimal::new(8, 0));
        assert_eq!(policy.attendance.half_day_hours, Decimal::new(4, 0));
        assert_eq!(policy.accounts.max_privileged, 2);
        assert_eq!(policy.entitlements.paid_leave_total, 12);
        assert_eq!(policy.entitlements.sick_leave_total, 6);
    }

    #[test]
    fn test_shipped_policy_matches_defaults() {
        let loaded = HrPolicy::load("./config/hr").unwrap();
        let defaults = HrPolicy::default();
        assert_eq!(
            loaded.attendance.full_day_hours,
            defaults.attendance.full_day_hours
        );
        assert_eq!(loaded.accounts.max_privileged, defaults.accounts.max_privileged);
        assert_eq!(
            loaded.entitlements.sick_leave_total,
            defaults.entitlements.sick_leave_total
        );
    }

    #[test]
    fn test_missing_directory_reports_config_not_found() {
        let error = HrPolicy::load("./config/nonexistent").unwrap_err();
        assert!(matches!(error, EngineError::ConfigNotFound { .. }));
    }
}
