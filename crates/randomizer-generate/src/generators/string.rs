use rand::{Rng, RngCore};

use randomizer_core::symbols::concatenate;
use randomizer_core::{StringConstraints, ValidationError};

use super::{Generator, GeneratorContext, enclose};
use crate::errors::GenerationError;

impl Generator for StringConstraints {
    fn generate(
        &self,
        _ctx: &GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        if self.min_length > self.max_length {
            return Err(GenerationError::InvalidConstraints(
                ValidationError::RangeInverted {
                    field: "string length",
                    min: self.min_length.to_string(),
                    max: self.max_length.to_string(),
                },
            ));
        }
        let length = rng.random_range(self.min_length..=self.max_length) as usize;
        if length == 0 {
            return Ok(enclose(&self.enclosure, ""));
        }

        let alphabet: Vec<char> = concatenate(&self.active_symbol_sets).chars().collect();
        if alphabet.is_empty() {
            return Err(GenerationError::InvalidConstraints(
                ValidationError::EmptyAlphabet,
            ));
        }

        let mut value = String::with_capacity(length);
        for _ in 0..length {
            value.push(alphabet[rng.random_range(0..alphabet.len())]);
        }
        let value = self.capitalization.apply(&value, rng);
        Ok(enclose(&self.enclosure, &value))
    }
}
