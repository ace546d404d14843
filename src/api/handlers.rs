//! HTTP request handlers for the HR operations engine API.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use chrono::Utc;
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::resolve_breakdown;
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeePatch, NewSalary, Salary};

use super::request::{
    CheckInRequest, HirePayload, LeaveDecisionRequest, LeaveListParams, LeaveSubmitRequest,
    SalaryRequest, SetupRequest, UploadParams,
};
use super::response::{ApiError, ApiErrorResponse, SalaryResponse, SetupResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/setup", post(setup_handler))
        .route("/employees", post(hire_handler))
        .route("/employees/:id", patch(update_employee_handler))
        .route("/employees/:id/attendance", get(list_attendance_handler))
        .route(
            "/employees/:id/leave-balance/:year",
            get(leave_balance_handler),
        )
        .route("/attendance/check-in", post(check_in_handler))
        .route("/attendance/check-out", post(check_out_handler))
        .route(
            "/leave-requests",
            post(submit_leave_handler).get(list_leave_handler),
        )
        .route("/leave-requests/:id/approve", post(approve_leave_handler))
        .route("/leave-requests/:id/reject", post(reject_leave_handler))
        .route("/salaries", post(salary_handler))
        .route("/employees/:id/salary", get(get_salary_handler))
        .route("/files", post(upload_handler))
        .with_state(state)
}

/// Unwraps a JSON body, turning extractor rejections into the structured
/// error body.
fn parse_json<T: DeserializeOwned>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "rejected request body"
            );
            let error = match rejection {
                JsonRejection::JsonDataError(_) if body_text.contains("missing field") => {
                    ApiError::new("VALIDATION_ERROR", body_text)
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json(body_text),
            };
            Err((StatusCode::BAD_REQUEST, Json(error)).into_response())
        }
    }
}

/// Logs a failed operation and renders its error body.
fn fail(correlation_id: Uuid, operation: &str, error: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        operation,
        error = %error,
        "request failed"
    );
    ApiErrorResponse::from(error).into_response()
}

/// Handler for POST /setup: company creation plus the first admin.
async fn setup_handler(
    State(state): State<AppState>,
    payload: Result<Json<SetupRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state
        .onboarding()
        .setup(request.company.into(), request.admin.into())
        .await
    {
        Ok((company, admin)) => {
            info!(
                correlation_id = %correlation_id,
                company_id = %company.id,
                admin_id = %admin.id,
                "company setup completed"
            );
            (StatusCode::CREATED, Json(SetupResponse { company, admin })).into_response()
        }
        Err(error) => fail(correlation_id, "setup", error),
    }
}

/// Handler for POST /employees.
async fn hire_handler(
    State(state): State<AppState>,
    payload: Result<Json<HirePayload>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.onboarding().hire(request.into()).await {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                login_id = %employee.login_id,
                "employee hired"
            );
            (StatusCode::CREATED, Json(employee)).into_response()
        }
        Err(error) => fail(correlation_id, "hire", error),
    }
}

/// Handler for PATCH /employees/:id.
async fn update_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeePatch>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let patch = match parse_json(payload, correlation_id) {
        Ok(patch) => patch,
        Err(response) => return response,
    };

    match state.store().update_employee(&id, patch).await {
        Ok(employee) => (StatusCode::OK, Json(employee)).into_response(),
        Err(error) => fail(correlation_id, "update_employee", error),
    }
}

/// Handler for GET /employees/:id/attendance.
async fn list_attendance_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.store().list_attendance(&id).await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(error) => fail(correlation_id, "list_attendance", error),
    }
}

/// Handler for GET /employees/:id/leave-balance/:year.
async fn leave_balance_handler(
    State(state): State<AppState>,
    Path((id, year)): Path<(String, i32)>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = state.store().leave_balance(&id, year).await;
    match result {
        Ok(Some(balance)) => (StatusCode::OK, Json(balance)).into_response(),
        Ok(None) => fail(
            correlation_id,
            "leave_balance",
            EngineError::RecordNotFound {
                entity: "leave balance",
                id: format!("{id}/{year}"),
            },
        ),
        Err(error) => fail(correlation_id, "leave_balance", error),
    }
}

/// Handler for POST /attendance/check-in.
async fn check_in_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckInRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let at = request.timestamp.unwrap_or_else(Utc::now);
    match state.attendance().check_in(&request.employee_id, at).await {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %record.employee_id,
                date = %record.date,
                "checked in"
            );
            (StatusCode::CREATED, Json(record)).into_response()
        }
        Err(error) => fail(correlation_id, "check_in", error),
    }
}

/// Handler for POST /attendance/check-out.
async fn check_out_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckInRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let at = request.timestamp.unwrap_or_else(Utc::now);
    match state.attendance().check_out(&request.employee_id, at).await {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %record.employee_id,
                date = %record.date,
                work_hours = ?record.work_hours,
                "checked out"
            );
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(error) => fail(correlation_id, "check_out", error),
    }
}

/// Handler for POST /leave-requests.
async fn submit_leave_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveSubmitRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.leave().submit(request.into()).await {
        Ok(created) => {
            info!(
                correlation_id = %correlation_id,
                request_id = %created.id,
                total_days = created.total_days,
                "leave request submitted"
            );
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(error) => fail(correlation_id, "submit_leave", error),
    }
}

/// Handler for GET /leave-requests.
async fn list_leave_handler(
    State(state): State<AppState>,
    Query(params): Query<LeaveListParams>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state
        .store()
        .list_leave_requests(params.employee_id.as_deref())
        .await
    {
        Ok(requests) => (StatusCode::OK, Json(requests)).into_response(),
        Err(error) => fail(correlation_id, "list_leave", error),
    }
}

/// Handler for POST /leave-requests/:id/approve.
async fn approve_leave_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<LeaveDecisionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state
        .leave()
        .approve(&id, &request.reviewer_id, request.remarks)
        .await
    {
        Ok(approved) => {
            info!(
                correlation_id = %correlation_id,
                request_id = %approved.id,
                reviewer_id = ?approved.reviewed_by,
                "leave request approved"
            );
            (StatusCode::OK, Json(approved)).into_response()
        }
        Err(error) => fail(correlation_id, "approve_leave", error),
    }
}

/// Handler for POST /leave-requests/:id/reject.
async fn reject_leave_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<LeaveDecisionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state
        .leave()
        .reject(&id, &request.reviewer_id, request.remarks)
        .await
    {
        Ok(rejected) => (StatusCode::OK, Json(rejected)).into_response(),
        Err(error) => fail(correlation_id, "reject_leave", error),
    }
}

/// Handler for POST /salaries.
///
/// Resolves the structure first; a structure whose component total
/// exceeds the base wage is rejected before anything is persisted. An
/// existing record for the employee is replaced, keeping one active
/// structure per employee.
async fn salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match assign_salary(&state, &request).await {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %response.salary.employee_id,
                total = %response.breakdown.total,
                "salary assigned"
            );
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(error) => fail(correlation_id, "assign_salary", error),
    }
}

async fn assign_salary(state: &AppState, request: &SalaryRequest) -> EngineResult<SalaryResponse> {
    let structure = request.structure();
    let breakdown = resolve_breakdown(&structure)?;

    let store = state.store();
    let employee = store
        .employee(&request.employee_id)
        .await?
        .ok_or_else(|| EngineError::RecordNotFound {
            entity: "employee",
            id: request.employee_id.clone(),
        })?;

    let salary: Salary = match store.salary_for(&employee.id).await? {
        Some(existing) => store.update_salary(&existing.id, structure).await?,
        None => {
            store
                .create_salary(NewSalary {
                    employee_id: employee.id,
                    structure,
                })
                .await?
        }
    };

    Ok(SalaryResponse { salary, breakdown })
}

/// Handler for GET /employees/:id/salary.
async fn get_salary_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.store().salary_for(&id).await {
        Ok(Some(salary)) => (StatusCode::OK, Json(salary)).into_response(),
        Ok(None) => fail(
            correlation_id,
            "get_salary",
            EngineError::RecordNotFound {
                entity: "salary",
                id,
            },
        ),
        Err(error) => fail(correlation_id, "get_salary", error),
    }
}

/// Handler for POST /files: raw body upload named by the `name` query
/// parameter, returning the stored URL.
async fn upload_handler(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.files().upload(&params.name, body.to_vec()).await {
        Ok(stored) => {
            info!(
                correlation_id = %correlation_id,
                url = %stored.url,
                "file uploaded"
            );
            (StatusCode::CREATED, Json(stored)).into_response()
        }
        Err(error) => fail(correlation_id, "upload", error),
    }
}
