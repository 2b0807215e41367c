use axum::{http::StatusCode, Json};

use crate::parse::response::ErrorResponse;

pub(super) async fn get_404() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            detail: "Not Found".to_string(),
        }),
    )
}
