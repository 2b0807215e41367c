use std::time::Duration;

use anyhow::{ensure, Context};
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client, Response,
};
use serde::{de::DeserializeOwned, Serialize};

pub mod runtime;
pub mod text_generation;

#[derive(Debug, Clone)]
pub struct Models {
    base_url: String,
    client: Client,
}

impl Models {
    /// `timeout` of `None` leaves requests unbounded; inference on a local
    /// model can take minutes.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));

        let mut builder = reqwest::ClientBuilder::new().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("failed to build http client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<R: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        request: &R,
    ) -> anyhow::Result<T> {
        let body =
            serde_json::to_string(request).context("failed to serialize body")?;

        let response = self
            .client
            .post(format!("{}/{}", self.base_url, path))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .with_context(|| format!("failed to reach {}", self.base_url))?;

        read_json(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, path))
            .send()
            .await
            .with_context(|| format!("failed to reach {}", self.base_url))?;

        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> anyhow::Result<T> {
    let status_code = response.status();
    let text = response
        .text()
        .await
        .context("failed to read response body")?;

    ensure!(
        status_code.is_success(),
        "status code: {}, response: {}",
        status_code,
        text
    );

    serde_json::from_str(&text).context("failed to parse response")
}

#[cfg(test)]
mod test {
    use super::Models;

    #[test]
    fn test_trailing_slash() {
        let models = Models::new("http://localhost:11434/", None).unwrap();

        assert_eq!(models.base_url(), "http://localhost:11434");
    }
}
