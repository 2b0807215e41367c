use std::time::Duration;

use ollama::models::{
    self,
    runtime::Runtime,
    text_generation::{GenerateRequest, TextGeneration},
};
use util::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    let models = models::Models::new(
        &config.ollama.base_url,
        config.ollama.timeout_secs.map(Duration::from_secs),
    )?;

    println!("{:?}", models.version().await?);

    let result = models
        .generate(
            GenerateRequest::new(&config.ollama.model, "Hello, world!".into())
                .with_temperature(config.ollama.temperature),
        )
        .await?;

    println!("{:?}", result);

    Ok(())
}
