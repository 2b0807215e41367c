use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use tracing::info;

pub const CONFIG_PATH_ENV: &str = "EVENT_PARSER_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "Config.toml";

/// Service configuration. Every field has a default, so an empty or missing
/// config file yields a working local setup.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: Server,
    pub ollama: Ollama,
    pub prompt: Prompt,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Server {
    pub host: IpAddr,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Ollama {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    /// Unset means the runtime call may take as long as inference takes.
    pub timeout_secs: Option<u64>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Prompt {
    pub file: PathBuf,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            cors_origins: vec![],
        }
    }
}

impl Default for Ollama {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3.1".to_string(),
            temperature: 0.0,
            timeout_secs: None,
        }
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self {
            file: PathBuf::from("prompt.txt"),
        }
    }
}

impl Server {
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Config {
    /// Loads the file named by `EVENT_PARSER_CONFIG` (or `Config.toml`), then
    /// applies environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let path = env::var(CONFIG_PATH_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config = Self::from_file(&path)?;
        config.apply_env(|key| env::var(key).ok())?;

        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(
                task = "load config",
                path = %path.display(),
                "config file not found, using defaults"
            );
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        Self::from_toml(&text)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str::<Self>(text)?)
    }

    pub fn apply_env<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("EVENT_PARSER_HOST") {
            self.server.host = host
                .parse()
                .with_context(|| format!("invalid EVENT_PARSER_HOST: {host}"))?;
        }
        if let Some(port) = lookup("EVENT_PARSER_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("invalid EVENT_PARSER_PORT: {port}"))?;
        }
        if let Some(base_url) = lookup("OLLAMA_BASE_URL") {
            self.ollama.base_url = base_url;
        }
        if let Some(model) = lookup("OLLAMA_MODEL") {
            self.ollama.model = model;
        }
        if let Some(file) = lookup("PROMPT_FILE") {
            self.prompt.file = PathBuf::from(file);
        }

        Ok(())
    }
}
