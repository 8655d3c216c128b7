//! Error types for the mnemonic completion tool

use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("invalid length of '{0}', accepted values: 12, 15, 18, 21, 24")]
    InvalidLength(usize),

    #[error("no words found in '{0}'")]
    EmptyPhrase(String),

    #[error("word '{word}' at position {position} is not in the word list")]
    UnknownWord { word: String, position: usize },

    #[error("invalid entropy length of {0} bytes, accepted values: 16, 20, 24, 28, 32")]
    InvalidEntropyLength(usize),

    #[error("mnemonic checksum does not verify")]
    ChecksumMismatch,

    #[error("BIP39 error: {0}")]
    Bip39(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CompletionError {
    /// True for errors caused by caller input rather than internal failure.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CompletionError::InvalidLength(_)
                | CompletionError::EmptyPhrase(_)
                | CompletionError::UnknownWord { .. }
                | CompletionError::ChecksumMismatch
        )
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CompletionError>;
