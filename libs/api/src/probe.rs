use std::time::Duration;

use extractor::OllamaCompleter;
use ollama::models::runtime::Runtime;
use tokio::time::timeout;
use tracing::{info, warn};

/// Per-call bound; the completion client itself may run without a timeout.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Logs whether the runtime answers and has the configured model. Never
/// fails: requests report their own errors if the runtime is still down.
pub async fn probe_runtime(completer: &OllamaCompleter) {
    probe_runtime_within(completer, PROBE_TIMEOUT).await
}

pub async fn probe_runtime_within(completer: &OllamaCompleter, bound: Duration) {
    let models = completer.models();

    match timeout(bound, models.version()).await {
        Ok(Ok(version)) => info!(
            task = "probe runtime",
            base_url = models.base_url(),
            version = %version.version,
        ),
        Ok(Err(e)) => {
            warn!(
                task = "probe runtime",
                base_url = models.base_url(),
                error = format!("{e:#}"),
                "runtime is not reachable"
            );
            return;
        }
        Err(_) => {
            warn!(
                task = "probe runtime",
                base_url = models.base_url(),
                timeout_ms = bound.as_millis() as u64,
                "runtime did not answer in time"
            );
            return;
        }
    }

    match timeout(bound, models.tags()).await {
        Ok(Ok(tags)) if tags.contains(completer.model()) => {
            info!(task = "probe runtime", model = completer.model(), "model is installed")
        }
        Ok(Ok(tags)) => warn!(
            task = "probe runtime",
            model = completer.model(),
            installed = ?tags.models.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(),
            "model is not installed, pull it before sending requests"
        ),
        Ok(Err(e)) => warn!(
            task = "probe runtime",
            error = format!("{e:#}"),
            "failed to list installed models"
        ),
        Err(_) => warn!(
            task = "probe runtime",
            timeout_ms = bound.as_millis() as u64,
            "listing installed models did not answer in time"
        ),
    }
}

#[cfg(test)]
mod test {
    use std::time::{Duration, Instant};

    use serde_json::json;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use extractor::OllamaCompleter;

    use super::{probe_runtime, probe_runtime_within};

    #[tokio::test]
    async fn test_probe_queries_runtime() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/version"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "version": "0.4.0" })),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "models": [] })),
            )
            .expect(1)
            .mount(&server)
            .await;
        let config = util::config::Ollama {
            base_url: server.uri(),
            ..Default::default()
        };
        let completer = OllamaCompleter::from_config(&config).unwrap();

        // Act
        probe_runtime(&completer).await;

        // Assert
        server.verify().await;
    }

    #[tokio::test]
    async fn test_probe_skips_tags_when_unreachable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/version"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let config = util::config::Ollama {
            base_url: server.uri(),
            ..Default::default()
        };
        let completer = OllamaCompleter::from_config(&config).unwrap();

        probe_runtime(&completer).await;

        server.verify().await;
    }

    #[tokio::test]
    async fn test_gives_up_on_silent_runtime() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/version"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "version": "0.4.0" }))
                    .set_delay(Duration::from_secs(30)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let config = util::config::Ollama {
            base_url: server.uri(),
            ..Default::default()
        };
        let completer = OllamaCompleter::from_config(&config).unwrap();
        let started = Instant::now();

        // Act
        probe_runtime_within(&completer, Duration::from_millis(200)).await;

        // Assert
        assert!(started.elapsed() < Duration::from_secs(10));
        server.verify().await;
    }
}
