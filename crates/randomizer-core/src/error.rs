use thiserror::Error;

/// Lookup errors raised by the core registries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// No capitalization mode carries the requested name.
    #[error("unknown capitalization mode: {0}")]
    UnknownCapitalizationMode(String),
    /// No symbol set carries the requested name.
    #[error("unknown symbol set: {0}")]
    UnknownSymbolSet(String),
}

/// Convenience alias for results returned by the core registries.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a constraints value is rejected before it reaches a generator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A ranged field has its minimum above its maximum.
    #[error("{field}: minimum ({min}) must not exceed maximum ({max})")]
    RangeInverted {
        field: &'static str,
        min: String,
        max: String,
    },
    #[error("base must be in 2..=36, got {0}")]
    BaseOutOfRange(u8),
    #[error("array count must be at least 1")]
    ArrayCountTooSmall,
    /// String generation may produce characters but no symbol set is active.
    #[error("at least one symbol set must be selected")]
    EmptyAlphabet,
    #[error("at least one dictionary must be selected")]
    EmptyDictionarySelection,
    #[error("dictionary {uid} contains no words")]
    DictionaryEmpty { uid: String },
    #[error("dictionary {uid} cannot be read: {reason}")]
    DictionaryUnreadable { uid: String, reason: String },
    #[error("dictionary {name} is selected more than once")]
    DuplicateDictionaryName { name: String },
    /// No word in the selected dictionaries fits the requested length range.
    #[error("no word with length in {min}..={max} exists in the selected dictionaries")]
    WordRangeUnsatisfiable { min: u32, max: u32 },
}
