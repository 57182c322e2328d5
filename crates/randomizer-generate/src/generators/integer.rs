use rand::{Rng, RngCore};

use randomizer_core::{IntegerConstraints, ValidationError, format_integer};

use super::{Generator, GeneratorContext};
use crate::errors::GenerationError;

impl Generator for IntegerConstraints {
    fn generate(
        &self,
        _ctx: &GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        if self.min > self.max {
            return Err(GenerationError::InvalidConstraints(
                ValidationError::RangeInverted {
                    field: "integer",
                    min: self.min.to_string(),
                    max: self.max.to_string(),
                },
            ));
        }
        if !(2..=36).contains(&self.base) {
            return Err(GenerationError::InvalidConstraints(
                ValidationError::BaseOutOfRange(self.base),
            ));
        }
        let value = rng.random_range(self.min..=self.max);
        Ok(format_integer(value, self.base, self.grouping_separator))
    }
}
