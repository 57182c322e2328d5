use rand::{Rng, RngCore};

use randomizer_core::number::next_up;
use randomizer_core::{DecimalConstraints, ValidationError, format_decimal};

use super::{Generator, GeneratorContext};
use crate::errors::GenerationError;

impl Generator for DecimalConstraints {
    fn generate(
        &self,
        _ctx: &GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        if !(self.min <= self.max) {
            return Err(GenerationError::InvalidConstraints(
                ValidationError::RangeInverted {
                    field: "decimal",
                    min: self.min.to_string(),
                    max: self.max.to_string(),
                },
            ));
        }
        let value = sample_decimal(self.min, self.max, rng);
        Ok(format_decimal(
            value,
            self.decimal_count,
            self.grouping_separator,
            self.decimal_separator,
        ))
    }
}

/// Draws uniformly from `[min, next_up(max))`, so `max` itself can come up.
///
/// The caller rounds afterwards, which may render a value one unit in the
/// last displayed digit above `max`.
pub fn sample_decimal(min: f64, max: f64, rng: &mut dyn RngCore) -> f64 {
    let upper = next_up(max);
    let upper = if upper.is_finite() { upper } else { max };
    let fraction: f64 = rng.random();
    let span = upper - min;
    if span.is_finite() {
        min + fraction * span
    } else {
        // Interpolate without forming the overflowing span.
        min * (1.0 - fraction) + upper * fraction
    }
}
