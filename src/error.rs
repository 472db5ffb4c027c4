use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Every failure a handler can answer with. The response body is always
/// `{"error": "<message>"}` and never carries storage details.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("nombre y email son requeridos")]
    Validation,

    #[error("Email ya existe")]
    EmailTaken,

    #[error("Usuario no encontrado")]
    NotFound,

    /// Storage failure; carries the fixed message for the failing operation.
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation => StatusCode::BAD_REQUEST,
            ApiError::EmailTaken => StatusCode::CONFLICT,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
