//! Error types for the HR operations engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions surfaced by the engine. Store failures are
//! propagated as-is and never retried; no error here is fatal to the
//! process.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::LeaveStatus;

/// The main error type for the HR operations engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use hrflow_engine::error::EngineError;
///
/// let error = EngineError::Validation {
///     field: "end_date".to_string(),
///     message: "must not be before start_date".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid end_date: must not be before start_date"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed input caught before any write.
    #[error("Invalid {field}: {message}")]
    Validation {
        /// The input field that failed validation.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A business rule rejected the operation.
    #[error("Policy violation: {message}")]
    PolicyViolation {
        /// A description of the rule that was violated.
        message: String,
    },

    /// A leave request was asked to leave a terminal state.
    #[error("Leave request '{request_id}' was already decided: {status}")]
    InvalidTransition {
        /// The identifier of the request.
        request_id: String,
        /// The terminal status the request already holds.
        status: LeaveStatus,
    },

    /// The resolved salary components exceed the employee's base wage.
    #[error("Salary components total {total} exceeds base wage {base_wage}")]
    SalaryExceedsBaseWage {
        /// The sum of all resolved component amounts.
        total: Decimal,
        /// The base wage the total was checked against.
        base_wage: Decimal,
    },

    /// A record the operation depends on does not exist in the store.
    #[error("{entity} not found: {id}")]
    RecordNotFound {
        /// The entity type that was looked up.
        entity: &'static str,
        /// The identifier that was not found.
        id: String,
    },

    /// The record store failed or was unreachable.
    #[error("Record store failure: {message}")]
    StoreUnavailable {
        /// A description of the store failure.
        message: String,
    },

    /// The file-storage collaborator failed or was unreachable.
    #[error("Upload failed: {message}")]
    UploadFailed {
        /// A description of the upload failure.
        message: String,
    },

    /// Policy configuration file was not found at the specified path.
    #[error("Policy file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy configuration file could not be parsed.
    #[error("Failed to parse policy file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_displays_field_and_message() {
        let error = EngineError::Validation {
            field: "email".to_string(),
            message: "already registered".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid email: already registered");
    }

    #[test]
    fn test_policy_violation_displays_message() {
        let error = EngineError::PolicyViolation {
            message: "at most 2 privileged accounts".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Policy violation: at most 2 privileged accounts"
        );
    }

    #[test]
    fn test_invalid_transition_displays_request_and_status() {
        let error = EngineError::InvalidTransition {
            request_id: "req_001".to_string(),
            status: LeaveStatus::Approved,
        };
        assert_eq!(
            error.to_string(),
            "Leave request 'req_001' was already decided: approved"
        );
    }

    #[test]
    fn test_salary_cap_displays_both_amounts() {
        let error = EngineError::SalaryExceedsBaseWage {
            total: Decimal::new(13000, 0),
            base_wage: Decimal::new(10000, 0),
        };
        assert_eq!(
            error.to_string(),
            "Salary components total 13000 exceeds base wage 10000"
        );
    }

    #[test]
    fn test_record_not_found_displays_entity_and_id() {
        let error = EngineError::RecordNotFound {
            entity: "employee",
            id: "emp_404".to_string(),
        };
        assert_eq!(error.to_string(), "employee not found: emp_404");
    }

    #[test]
    fn test_store_unavailable_displays_message() {
        let error = EngineError::StoreUnavailable {
            message: "connection refused".to_string(),
        };
        assert_eq!(error.to_string(), "Record store failure: connection refused");
    }

    #[test]
    fn test_config_errors_display_path() {
        let not_found = EngineError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            not_found.to_string(),
            "Policy file not found: /missing/policy.yaml"
        );

        let parse = EngineError::ConfigParseError {
            path: "/config/hr/policy.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            parse.to_string(),
            "Failed to parse policy file '/config/hr/policy.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::RecordNotFound {
                entity: "company",
                id: "missing".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
