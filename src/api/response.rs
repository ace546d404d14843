//! Response types for the HR operations engine API.
//!
//! This module defines the error response structures, the mapping from
//! engine errors to HTTP statuses, and the composite success bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::SalaryBreakdown;
use crate::error::EngineError;
use crate::models::{Company, Employee, Salary};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let (status, code) = match &error {
            EngineError::Validation { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            EngineError::SalaryExceedsBaseWage { .. } => {
                (StatusCode::BAD_REQUEST, "SALARY_EXCEEDS_BASE_WAGE")
            }
            EngineError::PolicyViolation { .. } => (StatusCode::CONFLICT, "POLICY_VIOLATION"),
            EngineError::InvalidTransition { .. } => (StatusCode::CONFLICT, "INVALID_TRANSITION"),
            EngineError::RecordNotFound { .. } => (StatusCode::NOT_FOUND, "RECORD_NOT_FOUND"),
            EngineError::StoreUnavailable { .. } => (StatusCode::BAD_GATEWAY, "STORE_UNAVAILABLE"),
            EngineError::UploadFailed { .. } => (StatusCode::BAD_GATEWAY, "UPLOAD_FAILED"),
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
        };

        Self {
            status,
            error: ApiError::new(code, error.to_string()),
        }
    }
}

/// Body of a successful `POST /setup`.
#[derive(Debug, Clone, Serialize)]
pub struct SetupResponse {
    /// The created company.
    pub company: Company,
    /// The created first admin account.
    pub admin: Employee,
}

/// Body of a successful `POST /salaries`.
#[derive(Debug, Clone, Serialize)]
pub struct SalaryResponse {
    /// The persisted salary record.
    pub salary: Salary,
    /// The resolved component amounts for display.
    pub breakdown: SalaryBreakdown,
}
