//! Word dictionaries: loading, caching, combination and length queries.

mod cache;
mod source;

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use randomizer_core::{
    DictionaryRef, GenerationConstraints, ValidationError, WordConstraints, validate_constraints,
};

use crate::errors::DictionaryError;

pub use cache::{DictionaryCache, global_cache};
pub use source::{DictionarySource, InlineSource, bundled_paths};

/// An immutable, named set of words.
///
/// Equality and hashing only consider the `uid`, never the words.
#[derive(Clone)]
pub struct Dictionary {
    uid: String,
    words: Arc<BTreeSet<String>>,
}

impl Dictionary {
    /// Builds a dictionary from raw lines, trimming them and skipping blanks.
    pub fn from_lines(
        uid: impl Into<String>,
        lines: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, DictionaryError> {
        let uid = uid.into();
        let words: BTreeSet<String> = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        if words.is_empty() {
            return Err(DictionaryError::Empty { uid });
        }
        Ok(Self {
            uid,
            words: Arc::new(words),
        })
    }

    /// Reads every line of `source`, bypassing any cache.
    pub fn load(source: &dyn DictionarySource) -> Result<Self, DictionaryError> {
        let uid = source.uid();
        let lines = source
            .read_lines()
            .map_err(|source| DictionaryError::Unreadable {
                uid: uid.clone(),
                source,
            })?;
        let dictionary = Self::from_lines(uid, lines)?;
        tracing::debug!(
            event = "dictionary_loaded",
            uid = %dictionary.uid,
            words = dictionary.len()
        );
        Ok(dictionary)
    }

    /// Union of the words of all `dictionaries`.
    ///
    /// The result carries a synthetic uid derived from the inputs; it is never
    /// used as a cache key.
    pub fn combine<'a>(dictionaries: impl IntoIterator<Item = &'a Dictionary>) -> Dictionary {
        let mut uids = Vec::new();
        let mut words = BTreeSet::new();
        for dictionary in dictionaries {
            uids.push(dictionary.uid.as_str());
            words.extend(dictionary.words.iter().cloned());
        }
        Dictionary {
            uid: format!("combined[{}]", uids.join(", ")),
            words: Arc::new(words),
        }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words whose character count lies in `min_length..=max_length`.
    ///
    /// Inverted or entirely negative ranges simply match nothing.
    pub fn words_with_length_in_range(&self, min_length: i64, max_length: i64) -> BTreeSet<String> {
        if min_length > max_length || max_length < 0 {
            return BTreeSet::new();
        }
        self.words
            .iter()
            .filter(|word| {
                let len = word.chars().count() as i64;
                min_length <= len && len <= max_length
            })
            .cloned()
            .collect()
    }
}

impl PartialEq for Dictionary {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl Eq for Dictionary {}

impl Hash for Dictionary {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uid.hash(state);
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("uid", &self.uid)
            .field("words", &self.words.len())
            .finish()
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uid)
    }
}

/// Checks that a dictionary source exists and yields at least one word.
///
/// The source is reloaded from scratch and the fresh copy replaces any cached
/// one, so a file edited since the last load is seen as it is now.
pub fn validate(source: &dyn DictionarySource, cache: &DictionaryCache) -> Option<ValidationError> {
    let uid = source.uid();
    if !source.exists() {
        return Some(ValidationError::DictionaryUnreadable {
            uid,
            reason: "source does not exist".to_string(),
        });
    }
    match cache.get_or_load(source, false) {
        Ok(_) => None,
        Err(err) => Some(err.to_validation_error()),
    }
}

/// Full validation of word constraints, including the selected dictionaries.
///
/// Checks run in order: static constraint checks, each dictionary on its own,
/// then whether the combined dictionaries hold a word of an allowed length.
pub fn validate_word_constraints(
    constraints: &WordConstraints,
    cache: &DictionaryCache,
) -> Result<(), ValidationError> {
    validate_constraints(&GenerationConstraints::Word(constraints.clone()))?;

    let mut dictionaries = Vec::with_capacity(constraints.active_dictionaries.len());
    for reference in &constraints.active_dictionaries {
        if let Some(error) = validate(reference, cache) {
            return Err(error);
        }
        let dictionary = cache
            .get_or_load(reference, true)
            .map_err(|err| err.to_validation_error())?;
        dictionaries.push(dictionary);
    }

    let combined = Dictionary::combine(dictionaries.iter().map(Arc::as_ref));
    let matching = combined.words_with_length_in_range(
        i64::from(constraints.min_length),
        i64::from(constraints.max_length),
    );
    if matching.is_empty() {
        return Err(ValidationError::WordRangeUnsatisfiable {
            min: constraints.min_length,
            max: constraints.max_length,
        });
    }
    Ok(())
}

/// Resolves every selected dictionary through the cache.
pub(crate) fn load_selection(
    references: &[DictionaryRef],
    cache: &DictionaryCache,
) -> Result<Vec<Arc<Dictionary>>, DictionaryError> {
    references
        .iter()
        .map(|reference| cache.get_or_load(reference, true))
        .collect()
}
