use std::sync::Arc;
use std::time::Instant;

use rand::RngCore;

use randomizer_core::{
    ArrayConstraints, GenerationConstraints, ValidationError, validate_array_constraints,
    validate_constraints,
};

use crate::array::arrayify;
use crate::dictionary::{DictionaryCache, global_cache, validate_word_constraints};
use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorContext, WordCandidates};

/// Entry point for callers: validates constraints and produces values.
///
/// The engine holds no constraints of its own; each call receives them.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    dictionaries: Arc<DictionaryCache>,
}

impl GenerationEngine {
    pub fn new(dictionaries: Arc<DictionaryCache>) -> Self {
        Self { dictionaries }
    }

    /// Engine backed by the process-wide dictionary cache.
    pub fn with_global_cache() -> Self {
        Self::new(global_cache())
    }

    pub fn dictionaries(&self) -> &Arc<DictionaryCache> {
        &self.dictionaries
    }

    /// Full validation, including reading the selected dictionaries.
    pub fn validate(&self, constraints: &GenerationConstraints) -> Result<(), ValidationError> {
        match constraints {
            GenerationConstraints::Word(word) => validate_word_constraints(word, &self.dictionaries),
            other => validate_constraints(other),
        }
    }

    /// Forgets every cached dictionary, e.g. after dictionary settings changed.
    pub fn invalidate_dictionaries(&self) {
        self.dictionaries.clear();
    }

    pub fn generate(
        &self,
        constraints: &GenerationConstraints,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        constraints.generate(&GeneratorContext::new(&self.dictionaries), rng)
    }

    /// Generates `count` independent values, e.g. one per insertion point.
    pub fn generate_batch(
        &self,
        constraints: &GenerationConstraints,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<String>, GenerationError> {
        let started = Instant::now();
        let values = match constraints {
            GenerationConstraints::Word(word) if count > 0 => {
                let candidates = WordCandidates::collect(word, &self.dictionaries)?;
                (0..count)
                    .map(|_| candidates.pick(word, rng))
                    .collect::<Vec<_>>()
            }
            other => {
                let ctx = GeneratorContext::new(&self.dictionaries);
                (0..count)
                    .map(|_| other.generate(&ctx, rng))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };
        tracing::debug!(
            event = "values_generated",
            kind = constraints.kind(),
            count = count,
            duration_us = started.elapsed().as_micros() as u64
        );
        Ok(values)
    }

    /// Generates `array.count` values and composes them into one array value.
    pub fn generate_array(
        &self,
        constraints: &GenerationConstraints,
        array: &ArrayConstraints,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        validate_array_constraints(array)?;
        let values = self.generate_batch(constraints, array.count as usize, rng)?;
        Ok(arrayify(values.as_slice(), array))
    }

    /// Generates `count` array values, each holding `array.count` values.
    pub fn generate_array_batch(
        &self,
        constraints: &GenerationConstraints,
        array: &ArrayConstraints,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<String>, GenerationError> {
        validate_array_constraints(array)?;
        let per_array = array.count as usize;
        let values = self.generate_batch(constraints, count.saturating_mul(per_array), rng)?;
        Ok(values
            .chunks(per_array)
            .map(|chunk| arrayify(chunk, array))
            .collect())
    }
}

impl Default for GenerationEngine {
    fn default() -> Self {
        Self::new(Arc::new(DictionaryCache::new()))
    }
}
