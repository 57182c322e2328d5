use std::collections::BTreeSet;

use crate::constraints::{
    ArrayConstraints, DecimalConstraints, DictionaryRef, GenerationConstraints,
    IntegerConstraints, StringConstraints, WordConstraints,
};
use crate::error::ValidationError;

/// Validate the parts of a constraints value that need no external source.
///
/// This checks:
/// - every range has `min <= max`
/// - integer bases are in `2..=36`
/// - strings that may be non-empty have at least one symbol set
/// - words that may be non-empty have at least one dictionary, none twice
///
/// Whether the selected dictionaries can be read and contain a word of a
/// suitable length is checked by the generation crate, which owns loading.
pub fn validate_constraints(constraints: &GenerationConstraints) -> Result<(), ValidationError> {
    match constraints {
        GenerationConstraints::Integer(integer) => validate_integer(integer),
        GenerationConstraints::Decimal(decimal) => validate_decimal(decimal),
        GenerationConstraints::String(string) => validate_string(string),
        GenerationConstraints::Word(word) => validate_word(word),
        GenerationConstraints::Uuid(_) => Ok(()),
    }
}

pub fn validate_array_constraints(array: &ArrayConstraints) -> Result<(), ValidationError> {
    if array.count < 1 {
        return Err(ValidationError::ArrayCountTooSmall);
    }
    Ok(())
}

fn validate_integer(integer: &IntegerConstraints) -> Result<(), ValidationError> {
    if integer.min > integer.max {
        return Err(inverted("integer", integer.min, integer.max));
    }
    if !(2..=36).contains(&integer.base) {
        return Err(ValidationError::BaseOutOfRange(integer.base));
    }
    Ok(())
}

fn validate_decimal(decimal: &DecimalConstraints) -> Result<(), ValidationError> {
    // Written this way round so NaN bounds are rejected too.
    if !(decimal.min <= decimal.max) {
        return Err(inverted("decimal", decimal.min, decimal.max));
    }
    Ok(())
}

fn validate_string(string: &StringConstraints) -> Result<(), ValidationError> {
    if string.min_length > string.max_length {
        return Err(inverted("string length", string.min_length, string.max_length));
    }
    if string.max_length > 0 && string.active_symbol_sets.is_empty() {
        return Err(ValidationError::EmptyAlphabet);
    }
    Ok(())
}

fn validate_word(word: &WordConstraints) -> Result<(), ValidationError> {
    if word.min_length > word.max_length {
        return Err(inverted("word length", word.min_length, word.max_length));
    }
    if word.max_length > 0 && word.active_dictionaries.is_empty() {
        return Err(ValidationError::EmptyDictionarySelection);
    }
    validate_unique_dictionaries(&word.active_dictionaries)
}

/// Rejects selections naming the same dictionary source twice.
pub fn validate_unique_dictionaries(dictionaries: &[DictionaryRef]) -> Result<(), ValidationError> {
    let mut seen = BTreeSet::new();
    for dictionary in dictionaries {
        if !seen.insert(dictionary.uid()) {
            return Err(ValidationError::DuplicateDictionaryName {
                name: dictionary.name(),
            });
        }
    }
    Ok(())
}

fn inverted(field: &'static str, min: impl ToString, max: impl ToString) -> ValidationError {
    ValidationError::RangeInverted {
        field,
        min: min.to_string(),
        max: max.to_string(),
    }
}
