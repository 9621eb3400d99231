use thiserror::Error;

use crate::config::ConfigError;

/// Custom error types for the Poeme Assistant
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid rhyme scheme '{scheme}': {reason}")]
    InvalidRhymeScheme { scheme: String, reason: String },

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Unsupported generation mode: {0}")]
    UnsupportedMode(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type specific to Poeme Assistant operations
pub type AssistantResult<T> = Result<T, AssistantError>;

impl AssistantError {
    /// Whether the error was caused by something the user typed
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AssistantError::InvalidInput(_)
                | AssistantError::InvalidRhymeScheme { .. }
                | AssistantError::UnsupportedLanguage(_)
                | AssistantError::UnsupportedMode(_)
        )
    }
}
