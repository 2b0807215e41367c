use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct EventInput {
    #[schema(example = "Meeting with John on 2024-10-25 at 2:00 PM at the Office.")]
    pub text: String,
}
