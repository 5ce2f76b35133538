use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Message clients look for to redirect to the login page.
pub const NOT_LOGGED_IN_MSG: &str = "NOTLOGIN";

#[derive(Error, Debug)]
pub enum AuthError {
    /// No employee id is stored in the session.
    ///
    /// Raised by the login gate for every non-exempt request without a session marker.
    #[error("Request without a logged-in employee")]
    NotLoggedIn,

    /// Unknown username or wrong password.
    ///
    /// Both cases share one error so the response does not reveal which usernames exist.
    #[error("Login failed for username '{0}'")]
    LoginFailed(String),

    /// Credentials were valid but the account has been disabled.
    #[error("Employee {0} attempted to log in while disabled")]
    AccountDisabled(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// - `NotLoggedIn` → 401 Unauthorized with `NOTLOGIN`
/// - `LoginFailed` → 400 Bad Request with "login failed"
/// - `AccountDisabled` → 403 Forbidden with "account disabled"
///
/// Login failures are logged at debug level with the detailed message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotLoggedIn => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new(NOT_LOGGED_IN_MSG)),
            )
                .into_response(),
            Self::LoginFailed(_) => {
                tracing::debug!("{}", self);

                (StatusCode::BAD_REQUEST, Json(ErrorDto::new("login failed"))).into_response()
            }
            Self::AccountDisabled(_) => {
                tracing::debug!("{}", self);

                (StatusCode::FORBIDDEN, Json(ErrorDto::new("account disabled"))).into_response()
            }
        }
    }
}
