//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use usuarios_core::{ErrorResponse, UsuariosError};

/// Application error type for Axum.
///
/// `NotFound` is surfaced as a bare 404 with an empty body; nothing is
/// translated or wrapped for that outcome. Everything else becomes a
/// generic server error with a JSON body.
#[derive(Debug)]
pub struct AppError(pub UsuariosError);

impl From<UsuariosError> for AppError {
    fn from(err: UsuariosError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.0.is_not_found() {
            return StatusCode::NOT_FOUND.into_response();
        }

        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(ErrorResponse::from_error(&self.0));

        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success (200) response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}
