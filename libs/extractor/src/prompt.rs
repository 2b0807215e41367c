use std::path::Path;

use crate::error::{ExtractError, ExtractResult};

/// Reads the prompt template verbatim. Called on every request so edits to
/// the file apply without a restart.
pub async fn load_prompt(path: impl AsRef<Path>) -> ExtractResult<String> {
    let path = path.as_ref();
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ExtractError::Prompt {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::load_prompt;

    #[tokio::test]
    async fn test_load_prompt() {
        // Arrange
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Extract the event.\n{{text}}\n").unwrap();

        // Act
        let prompt = load_prompt(file.path()).await.unwrap();

        // Assert
        assert_eq!(prompt, "Extract the event.\n{text}\n");
    }

    #[tokio::test]
    async fn test_missing_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompt.txt");

        let err = load_prompt(&path).await.unwrap_err();

        assert_eq!(err.kind(), "prompt");
        assert!(err.to_string().contains("prompt.txt"));
    }
}
