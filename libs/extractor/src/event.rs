use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_TITLE: &str = "Untitled Event";

/// Calendar fields extracted from free text. Only the title is guaranteed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventOutput {
    #[schema(example = "Meeting with John")]
    pub title: String,
    #[schema(example = "2024-10-25")]
    pub date: Option<String>,
    #[schema(example = "2:00 PM")]
    pub time: Option<String>,
    #[schema(example = "Office")]
    pub location: Option<String>,
    pub description: Option<String>,
}

impl Default for EventOutput {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            date: None,
            time: None,
            location: None,
            description: None,
        }
    }
}
