//! Core contracts and helpers for the randomizer.
//!
//! This crate defines the constraint data model, the fixed symbol sets,
//! capitalization transforms and number formatting shared by the generation
//! engine and its callers. Nothing here touches the filesystem.

pub mod capitalization;
pub mod constraints;
pub mod error;
pub mod number;
pub mod symbols;
pub mod validation;

pub use capitalization::CapitalizationMode;
pub use constraints::{
    ArrayConstraints, Brackets, DecimalConstraints, DictionaryRef, GenerationConstraints,
    IntegerConstraints, StringConstraints, UuidConstraints, WordConstraints,
};
pub use error::{Error, Result, ValidationError};
pub use number::{format_decimal, format_integer};
pub use symbols::{SymbolSet, SymbolSetId};
pub use validation::{
    validate_array_constraints, validate_constraints, validate_unique_dictionaries,
};
