use thiserror::Error;

use randomizer_core::ValidationError;

/// Errors raised while loading a dictionary source.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {uid}: {source}")]
    Unreadable {
        uid: String,
        #[source]
        source: std::io::Error,
    },
    #[error("dictionary {uid} contains no words")]
    Empty { uid: String },
}

impl DictionaryError {
    pub fn uid(&self) -> &str {
        match self {
            DictionaryError::Unreadable { uid, .. } | DictionaryError::Empty { uid } => uid,
        }
    }

    /// Maps the load failure onto the validation taxonomy shown to users.
    pub fn to_validation_error(&self) -> ValidationError {
        match self {
            DictionaryError::Unreadable { uid, source } => ValidationError::DictionaryUnreadable {
                uid: uid.clone(),
                reason: source.to_string(),
            },
            DictionaryError::Empty { uid } => ValidationError::DictionaryEmpty { uid: uid.clone() },
        }
    }
}

/// Errors emitted by the generators.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The combined dictionaries hold no word of an allowed length.
    #[error("no words with length in {min}..={max}")]
    NoWordsInRange { min: u32, max: u32 },
    #[error("dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),
    #[error("invalid constraints: {0}")]
    InvalidConstraints(#[from] ValidationError),
}
