use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of dish and combo write operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A base or child write touched no rows.
    ///
    /// Results in 400 Bad Request carrying the message.
    #[error("{0}")]
    WriteFailed(String),

    /// Deletion targeted items that are still on sale.
    ///
    /// Results in 409 Conflict naming every offending item.
    #[error("Cannot delete items that are on sale: {}", names.join(", "))]
    OnSale { names: Vec<String> },
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::WriteFailed(_) => StatusCode::BAD_REQUEST,
            Self::OnSale { .. } => StatusCode::CONFLICT,
        };

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
