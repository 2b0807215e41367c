use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use extractor::EventOutput;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
