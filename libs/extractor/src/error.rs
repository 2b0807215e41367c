use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read prompt file {}: {source}", path.display())]
    Prompt {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid prompt template: {0}")]
    Template(String),

    #[error("LLM runtime call failed: {0:#}")]
    Runtime(anyhow::Error),

    #[error("LLM output parsing failed: {0}")]
    Interpretation(#[from] InterpretError),
}

/// Why a completion could not be read as an event.
#[derive(Debug, Error)]
pub enum InterpretError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("field `{field}` must be a string or null")]
    FieldType { field: &'static str },
}

impl ExtractError {
    /// Stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractError::Prompt { .. } => "prompt",
            ExtractError::Template(_) => "template",
            ExtractError::Runtime(_) => "runtime",
            ExtractError::Interpretation(_) => "interpretation",
        }
    }
}

pub type ExtractResult<T> = Result<T, ExtractError>;
