use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    routing::post,
    Router,
};
use extractor::{Completer, OllamaCompleter};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use util::Config;

pub mod not_found;
pub mod openapi;
pub mod parse;
pub mod probe;
mod response;

pub use openapi::openapi;
pub use response::{ApiResponse, IntoApiResponse};

pub enum ApiError {
    ClientError(String),
    Unprocessable(String),
}

#[derive(Clone, Debug)]
pub struct ApiState<C> {
    completer: C,
    prompt_file: Arc<PathBuf>,
}

impl<C> ApiState<C> {
    pub fn new(completer: C, prompt_file: PathBuf) -> Self {
        Self {
            completer,
            prompt_file: Arc::new(prompt_file),
        }
    }
}

pub async fn serve(config: &Config) -> anyhow::Result<Router> {
    info!(task = "start api serving");

    let completer = OllamaCompleter::from_config(&config.ollama)?;
    probe::probe_runtime(&completer).await;

    let state = ApiState::new(completer, config.prompt.file.clone());

    router(state, &config.server.cors_origins)
}

pub fn router<C>(state: ApiState<C>, cors_origins: &[String]) -> anyhow::Result<Router>
where
    C: Completer + Clone + Send + Sync + 'static,
{
    let router = Router::new()
        .route("/parse-text", post(parse::parse_text::<C>))
        .with_state(state)
        .fallback(not_found::get_404)
        .layer(TraceLayer::new_for_http());

    if cors_origins.is_empty() {
        return Ok(router);
    }

    let origins = cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid cors origin: {origin}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    // `content-type: application/json` is not safelisted, so browsers
    // preflight every call.
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(router.layer(cors))
}
