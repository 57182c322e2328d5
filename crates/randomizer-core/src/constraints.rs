use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::capitalization::CapitalizationMode;
use crate::symbols::SymbolSetId;

/// Bundled dictionary used when no other dictionary is configured.
pub const DEFAULT_BUNDLED_DICTIONARY: &str = "simple.dic";

const DEFAULT_ENCLOSURE: &str = "\"";

/// Description of a single random-value request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationConstraints {
    Integer(IntegerConstraints),
    Decimal(DecimalConstraints),
    String(StringConstraints),
    Word(WordConstraints),
    Uuid(UuidConstraints),
}

impl GenerationConstraints {
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationConstraints::Integer(_) => "integer",
            GenerationConstraints::Decimal(_) => "decimal",
            GenerationConstraints::String(_) => "string",
            GenerationConstraints::Word(_) => "word",
            GenerationConstraints::Uuid(_) => "uuid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct IntegerConstraints {
    pub min: i64,
    pub max: i64,
    /// Radix in `2..=36`.
    pub base: u8,
    /// Only honoured in base 10.
    pub grouping_separator: Option<char>,
}

impl Default for IntegerConstraints {
    fn default() -> Self {
        Self {
            min: 0,
            max: 1000,
            base: 10,
            grouping_separator: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DecimalConstraints {
    pub min: f64,
    pub max: f64,
    pub decimal_count: u32,
    pub grouping_separator: Option<char>,
    /// `None` concatenates the integer and fractional digits.
    pub decimal_separator: Option<char>,
}

impl Default for DecimalConstraints {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1000.0,
            decimal_count: 2,
            grouping_separator: None,
            decimal_separator: Some('.'),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct StringConstraints {
    pub min_length: u32,
    pub max_length: u32,
    pub enclosure: String,
    pub active_symbol_sets: BTreeSet<SymbolSetId>,
    pub capitalization: CapitalizationMode,
}

impl Default for StringConstraints {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 8,
            enclosure: DEFAULT_ENCLOSURE.to_string(),
            active_symbol_sets: [
                SymbolSetId::Uppercase,
                SymbolSetId::Lowercase,
                SymbolSetId::Digits,
            ]
            .into_iter()
            .collect(),
            capitalization: CapitalizationMode::Retain,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WordConstraints {
    pub min_length: u32,
    pub max_length: u32,
    pub enclosure: String,
    pub capitalization: CapitalizationMode,
    pub active_dictionaries: Vec<DictionaryRef>,
}

impl Default for WordConstraints {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 8,
            enclosure: DEFAULT_ENCLOSURE.to_string(),
            capitalization: CapitalizationMode::Retain,
            active_dictionaries: vec![DictionaryRef::bundled(DEFAULT_BUNDLED_DICTIONARY)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct UuidConstraints {
    pub enclosure: String,
}

impl Default for UuidConstraints {
    fn default() -> Self {
        Self {
            enclosure: DEFAULT_ENCLOSURE.to_string(),
        }
    }
}

/// Reference to a word source selected for word generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DictionaryRef {
    /// A word list embedded in the binary, addressed by resource path.
    Bundled { path: String },
    /// A newline-delimited word file on disk.
    User { path: PathBuf },
}

impl DictionaryRef {
    pub fn bundled(path: impl Into<String>) -> Self {
        DictionaryRef::Bundled { path: path.into() }
    }

    pub fn user(path: impl Into<PathBuf>) -> Self {
        DictionaryRef::User { path: path.into() }
    }

    /// Source identity used as the cache key.
    pub fn uid(&self) -> String {
        match self {
            DictionaryRef::Bundled { path } => path.clone(),
            DictionaryRef::User { path } => path.display().to_string(),
        }
    }

    /// Short display name: the file name without its extension.
    pub fn name(&self) -> String {
        let path = match self {
            DictionaryRef::Bundled { path } => Path::new(path.as_str()),
            DictionaryRef::User { path } => path.as_path(),
        };
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.uid())
    }
}

impl fmt::Display for DictionaryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryRef::Bundled { path } => write!(f, "bundled:{path}"),
            DictionaryRef::User { path } => write!(f, "user:{}", path.display()),
        }
    }
}

/// Opening and closing characters wrapped around an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Brackets {
    pub open: char,
    pub close: char,
}

impl Brackets {
    pub const fn new(open: char, close: char) -> Self {
        Self { open, close }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ArrayConstraints {
    /// Number of values the caller generates before composing them.
    pub count: u32,
    pub separator: String,
    pub space_after_separator: bool,
    /// `None` leaves the values unwrapped.
    pub brackets: Option<Brackets>,
}

impl Default for ArrayConstraints {
    fn default() -> Self {
        Self {
            count: 5,
            separator: ",".to_string(),
            space_after_separator: true,
            brackets: Some(Brackets::new('[', ']')),
        }
    }
}
