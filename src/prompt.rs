use inquire::{Confirm, InquireError, Text};
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("Prompt was canceled")]
    #[diagnostic(code(sprout::prompt::canceled))]
    Canceled,

    #[error("Unable to read from the terminal")]
    #[diagnostic(
        code(sprout::prompt::terminal),
        help("Interactive mode needs a TTY; use `sprout build <input>` instead")
    )]
    Terminal(#[source] InquireError),
}
impl From<InquireError> for PromptError {
    fn from(error: InquireError) -> Self {
        match error {
            InquireError::OperationCanceled | InquireError::OperationInterrupted => {
                PromptError::Canceled
            }
            other => PromptError::Terminal(other),
        }
    }
}

/// Strips whitespace and the quotes file managers add when a path is pasted.
pub fn clean_input_path(raw: &str) -> PathBuf {
    PathBuf::from(raw.trim().trim_matches(|c| c == '"' || c == '\''))
}

/// Asks for the structure document to process.
pub fn get_input_path() -> Result<PathBuf, PromptError> {
    let answer = Text::new("TXT file directory:")
        .with_help_message("Path to a structure document (root name, tree, contents)")
        .prompt()?;

    Ok(clean_input_path(&answer))
}

/// Asks whether the previewed structure should be written to disk.
pub fn apply_changes() -> Result<bool, PromptError> {
    let answer = Confirm::new("Create these directories and files?")
        .with_default(true)
        .prompt()?;

    Ok(answer)
}
