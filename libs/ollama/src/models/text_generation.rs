pub mod implementation;

use serde::{Deserialize, Serialize};

static GENERATE_PATH: &str = "api/generate";

pub trait TextGeneration {
    fn generate(
        &self,
        request: GenerateRequest,
    ) -> impl std::future::Future<Output = anyhow::Result<GenerateResponse>> + Send;
}

#[derive(Debug, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerateOptions>,
}

#[derive(Debug, Serialize)]
pub struct GenerateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub model: String,
    pub response: String,
    #[serde(default)]
    pub done: bool,
    pub total_duration: Option<u64>,
}

impl GenerateRequest {
    /// A non-streaming request; the runtime answers once with the whole
    /// completion.
    pub fn new(model: &str, prompt: String) -> Self {
        Self {
            model: model.to_string(),
            prompt,
            stream: false,
            options: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.options = Some(GenerateOptions {
            temperature: Some(temperature),
        });
        self
    }
}
