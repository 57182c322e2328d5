//! One generator per value kind, dispatched from [`generate`].

mod decimal;
mod integer;
mod string;
mod uuid_v4;
mod word;

use rand::RngCore;

use randomizer_core::GenerationConstraints;

use crate::dictionary::DictionaryCache;
use crate::errors::GenerationError;

pub use decimal::sample_decimal;
pub(crate) use word::WordCandidates;

/// Shared state a generator may read while producing a value.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorContext<'a> {
    pub dictionaries: &'a DictionaryCache,
}

impl<'a> GeneratorContext<'a> {
    pub fn new(dictionaries: &'a DictionaryCache) -> Self {
        Self { dictionaries }
    }
}

/// Produces the text of one random value.
///
/// Implemented by every constraints type. Generators assume their constraints
/// passed validation and only re-check what validation cannot guarantee.
pub trait Generator {
    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError>;
}

impl Generator for GenerationConstraints {
    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        match self {
            GenerationConstraints::Integer(integer) => integer.generate(ctx, rng),
            GenerationConstraints::Decimal(decimal) => decimal.generate(ctx, rng),
            GenerationConstraints::String(string) => string.generate(ctx, rng),
            GenerationConstraints::Word(word) => word.generate(ctx, rng),
            GenerationConstraints::Uuid(uuid) => uuid.generate(ctx, rng),
        }
    }
}

/// Generates one value for `constraints`.
pub fn generate(
    constraints: &GenerationConstraints,
    dictionaries: &DictionaryCache,
    rng: &mut dyn RngCore,
) -> Result<String, GenerationError> {
    constraints.generate(&GeneratorContext::new(dictionaries), rng)
}

fn enclose(enclosure: &str, value: &str) -> String {
    let mut out = String::with_capacity(value.len() + enclosure.len() * 2);
    out.push_str(enclosure);
    out.push_str(value);
    out.push_str(enclosure);
    out
}
