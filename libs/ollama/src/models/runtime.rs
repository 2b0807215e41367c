pub mod implementation;

use serde::Deserialize;

static VERSION_PATH: &str = "api/version";
static TAGS_PATH: &str = "api/tags";

/// Introspection of the runtime process itself.
pub trait Runtime {
    fn version(
        &self,
    ) -> impl std::future::Future<Output = anyhow::Result<VersionResponse>> + Send;

    fn tags(
        &self,
    ) -> impl std::future::Future<Output = anyhow::Result<TagsResponse>> + Send;
}

#[derive(Debug, Deserialize)]
pub struct VersionResponse {
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct TagsResponse {
    pub models: Vec<LocalModel>,
}

#[derive(Debug, Deserialize)]
pub struct LocalModel {
    pub name: String,
    #[serde(default)]
    pub size: u64,
    pub modified_at: Option<String>,
}

impl TagsResponse {
    /// Ollama tags carry an implicit `:latest`, so `llama3.1` matches
    /// `llama3.1:latest`.
    pub fn contains(&self, model: &str) -> bool {
        self.models.iter().any(|m| {
            m.name == model
                || (!model.contains(':') && m.name == format!("{model}:latest"))
        })
    }
}
