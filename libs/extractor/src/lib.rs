use std::path::Path;

use tracing::{debug, info, warn};

pub mod completion;
pub mod error;
pub mod event;
pub mod interpreter;
pub mod prompt;
pub mod template;

pub use completion::{Completer, OllamaCompleter};
pub use error::{ExtractError, ExtractResult, InterpretError};
pub use event::EventOutput;

use crate::{prompt::load_prompt, template::PromptTemplate};

/// Loads the template from `prompt_file`, fills in `text` and returns the
/// raw completion. The template is read from disk on every call.
pub async fn request_completion<C: Completer>(
    completer: &C,
    text: &str,
    prompt_file: &Path,
) -> ExtractResult<String> {
    let prompt_template = PromptTemplate::parse(&load_prompt(prompt_file).await?)?;
    if !prompt_template.input_variables().contains(&template::TEXT_VARIABLE) {
        warn!(
            task = "render prompt",
            prompt_file = %prompt_file.display(),
            "template has no {{text}} slot, input is dropped"
        );
    }
    let prompt = prompt_template.render(text)?;

    info!(task = "request completion", bytes = prompt.len());
    let completion = completer
        .complete(&prompt)
        .await
        .map_err(ExtractError::Runtime)?;
    debug!(task = "request completion", %completion);

    Ok(completion)
}

pub async fn extract_event<C: Completer>(
    completer: &C,
    text: &str,
    prompt_file: &Path,
) -> ExtractResult<EventOutput> {
    let completion = request_completion(completer, text, prompt_file).await?;

    interpreter::interpret(&completion)
}

#[cfg(test)]
mod test {
    use std::{
        fs,
        path::Path,
        sync::{Arc, Mutex},
    };

    use anyhow::anyhow;
    use util::workspace_dir;

    use super::{extract_event, request_completion, Completer};

    /// Records every prompt and answers with a fixed completion.
    #[derive(Clone, Default)]
    struct StubCompleter {
        completion: String,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl StubCompleter {
        fn new(completion: &str) -> Self {
            Self {
                completion: completion.to_string(),
                ..Default::default()
            }
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    impl Completer for StubCompleter {
        async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.completion.clone())
        }
    }

    struct UnreachableCompleter;

    impl Completer for UnreachableCompleter {
        async fn complete(&self, _prompt: &str) -> anyhow::Result<String> {
            Err(anyhow!("connection refused"))
        }
    }

    fn write_prompt(dir: &Path, template: &str) -> std::path::PathBuf {
        let path = dir.join("prompt.txt");
        fs::write(&path, template).unwrap();
        path
    }

    #[tokio::test]
    async fn test_extract_event() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let prompt_file = write_prompt(dir.path(), "Extract: {text}");
        let completer = StubCompleter::new(
            r#"{"title": "Meeting with John", "date": "2024-10-25", "time": "2:00 PM", "location": "Office"}"#,
        );
        let text = "Meeting with John on 2024-10-25 at 2:00 PM at the Office.";

        // Act
        let event = extract_event(&completer, text, &prompt_file).await.unwrap();

        // Assert
        assert_eq!(event.date.as_deref(), Some("2024-10-25"));
        assert_eq!(event.time.as_deref(), Some("2:00 PM"));
        assert_eq!(event.location.as_deref(), Some("Office"));
        assert_eq!(event.description, None);
        assert_eq!(completer.prompts(), vec![format!("Extract: {text}")]);
    }

    #[tokio::test]
    async fn test_prompt_file_is_read_per_call() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let prompt_file = write_prompt(dir.path(), "first: {text}");
        let completer = StubCompleter::new("{}");

        // Act
        request_completion(&completer, "lunch", &prompt_file)
            .await
            .unwrap();
        write_prompt(dir.path(), "second: {text}");
        request_completion(&completer, "lunch", &prompt_file)
            .await
            .unwrap();

        // Assert
        assert_eq!(completer.prompts(), vec!["first: lunch", "second: lunch"]);
    }

    #[tokio::test]
    async fn test_missing_prompt_file() {
        let dir = tempfile::tempdir().unwrap();
        let completer = StubCompleter::new("{}");

        let err = extract_event(&completer, "x", &dir.path().join("absent.txt"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "prompt");
        assert!(completer.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_runtime_failure() {
        let dir = tempfile::tempdir().unwrap();
        let prompt_file = write_prompt(dir.path(), "{text}");

        let err = extract_event(&UnreachableCompleter, "x", &prompt_file)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "runtime");
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_unparseable_completion() {
        let dir = tempfile::tempdir().unwrap();
        let prompt_file = write_prompt(dir.path(), "{text}");
        let completer = StubCompleter::new("I could not find an event.");

        let err = extract_event(&completer, "hello", &prompt_file)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "interpretation");
    }

    #[tokio::test]
    async fn test_bundled_prompt_renders() {
        // Arrange
        let prompt_file = workspace_dir().join("prompt.txt");
        let completer = StubCompleter::new("{}");

        // Act
        request_completion(&completer, "Dentist friday 3pm", &prompt_file)
            .await
            .unwrap();

        // Assert
        let prompts = completer.prompts();
        assert!(prompts[0].contains("Dentist friday 3pm"));
        assert!(prompts[0].contains("\"title\""));
        assert!(!prompts[0].contains("{text}"));
    }
}
