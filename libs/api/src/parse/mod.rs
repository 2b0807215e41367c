use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use extractor::{extract_event, Completer};

pub mod request;
pub mod response;

use crate::response::{ApiResponse, IntoApiResponse};
use crate::{ApiError, ApiState};

use self::{
    request::EventInput,
    response::{ErrorResponse, EventOutput},
};

/// Extract calendar event fields from free text
#[utoipa::path(
    post,
    path = "/parse-text",
    tag = "events",
    request_body = EventInput,
    responses(
        (status = 200, description = "Event fields extracted", body = EventOutput),
        (status = 400, description = "Prompt, model runtime or model output failure", body = ErrorResponse),
        (status = 422, description = "Body is not a valid EventInput", body = ErrorResponse)
    )
)]
pub async fn parse_text<C>(
    State(state): State<ApiState<C>>,
    payload: Result<Json<EventInput>, JsonRejection>,
) -> ApiResponse<Json<EventOutput>>
where
    C: Completer + Clone + Send + Sync + 'static,
{
    let Json(input) =
        payload.map_err(|e| ApiError::Unprocessable(e.body_text()))?;

    let event = extract_event(&state.completer, &input.text, &state.prompt_file)
        .await
        .into_response("Error parsing text")?;

    Ok(Json(event))
}
