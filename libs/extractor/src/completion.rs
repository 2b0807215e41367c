use std::time::Duration;

use anyhow::Context;
use ollama::models::{
    text_generation::{GenerateRequest, TextGeneration},
    Models,
};

/// Text in, completion out. The seam between the pipeline and whichever
/// runtime produces completions.
pub trait Completer {
    fn complete(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = anyhow::Result<String>> + Send;
}

#[derive(Debug, Clone)]
pub struct OllamaCompleter {
    models: Models,
    model: String,
    temperature: f32,
}

impl OllamaCompleter {
    pub fn new(models: Models, model: &str, temperature: f32) -> Self {
        Self {
            models,
            model: model.to_string(),
            temperature,
        }
    }

    pub fn from_config(config: &util::config::Ollama) -> anyhow::Result<Self> {
        let models = Models::new(
            &config.base_url,
            config.timeout_secs.map(Duration::from_secs),
        )?;

        Ok(Self::new(models, &config.model, config.temperature))
    }

    pub fn models(&self) -> &Models {
        &self.models
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Completer for OllamaCompleter {
    async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        let request = GenerateRequest::new(&self.model, prompt.to_string())
            .with_temperature(self.temperature);

        let response = self
            .models
            .generate(request)
            .await
            .with_context(|| format!("model {}", self.model))?;

        Ok(response.response)
    }
}
