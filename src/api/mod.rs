//! HTTP API module for the HR operations engine.
//!
//! This module provides the REST endpoints the HR pages call: company
//! setup, hiring, attendance check-in/check-out, the leave request
//! lifecycle, salary assignment, and file upload.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CheckInRequest, CompanyPayload, HirePayload, LeaveDecisionRequest, LeaveSubmitRequest,
    SalaryRequest, SetupRequest,
};
pub use response::{ApiError, SalaryResponse, SetupResponse};
pub use state::AppState;
