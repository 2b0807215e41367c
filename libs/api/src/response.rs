use axum::{http::StatusCode, response::IntoResponse, Json};
use extractor::ExtractResult;
use tracing::error;

use crate::{parse::response::ErrorResponse, ApiError};

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, detail) = match self {
            ApiError::ClientError(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Unprocessable(message) => {
                (StatusCode::UNPROCESSABLE_ENTITY, message)
            }
        };
        (status_code, Json(ErrorResponse { detail })).into_response()
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, context: &str) -> ApiResponse<T>;
}

/// Every pipeline failure reaches the caller as a 400; the error kind only
/// shows up in the log.
impl<T> IntoApiResponse<T> for ExtractResult<T> {
    fn into_response(self, context: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!(task = context, kind = e.kind(), error = %e);
            ApiError::ClientError(format!("{context}: {e}"))
        })
    }
}
