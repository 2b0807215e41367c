use tracing::debug;

use crate::models::Models;

use super::{GenerateRequest, GenerateResponse, TextGeneration, GENERATE_PATH};

impl TextGeneration for Models {
    async fn generate(
        &self,
        request: GenerateRequest,
    ) -> anyhow::Result<GenerateResponse> {
        let response: GenerateResponse =
            self.post_json(GENERATE_PATH, &request).await?;

        debug!(
            task = "generate",
            model = %response.model,
            done = response.done,
            total_duration = response.total_duration,
        );

        Ok(response)
    }
}
