//! Constrained random value generation.
//!
//! Turns a validated `GenerationConstraints` value into text: integers and
//! decimals rendered through the core number formatter, strings sampled from
//! symbol sets, words drawn from cached dictionaries, and UUIDs. Repeated
//! results can be composed into a single array value.

pub mod array;
pub mod dictionary;
pub mod engine;
pub mod errors;
pub mod generators;

pub use array::arrayify;
pub use dictionary::{
    Dictionary, DictionaryCache, DictionarySource, global_cache, validate_word_constraints,
};
pub use engine::GenerationEngine;
pub use errors::{DictionaryError, GenerationError};
pub use generators::{Generator, generate};
