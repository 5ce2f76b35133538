use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        employee::{EmployeeDto, LoginDto},
    },
    server::{
        error::AppError, middleware::session::AuthSession, service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping employee endpoints in OpenAPI documentation
pub static EMPLOYEE_TAG: &str = "employee";

/// Log an employee in.
///
/// Verifies the credentials and stores the employee id in the session so that
/// subsequent requests pass the login gate.
///
/// # Returns
/// - `200 OK` - Logged in, returns the employee
/// - `400 Bad Request` - Unknown username or wrong password
/// - `403 Forbidden` - Account disabled
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/employee/login",
    tag = EMPLOYEE_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<EmployeeDto>),
        (status = 400, description = "Login failed", body = ErrorDto),
        (status = 403, description = "Account disabled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    let employee = service.login(&payload.username, &payload.password).await?;

    AuthSession::new(&session)
        .set_employee_id(employee.id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(employee.into_dto()))))
}

/// Log the current employee out.
///
/// Clears the session. Always succeeds, even without an active login.
#[utoipa::path(
    post,
    path = "/employee/logout",
    tag = EMPLOYEE_TAG,
    responses(
        (status = 200, description = "Logged out", body = ApiResponse<String>)
    ),
)]
pub async fn logout(session: Session) -> impl IntoResponse {
    if let Err(e) = AuthSession::new(&session).clear().await {
        tracing::warn!("Failed to clear session on logout: {}", e);
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success("logged out".to_string())),
    )
}
