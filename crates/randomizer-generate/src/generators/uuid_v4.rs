use rand::RngCore;
use uuid::Builder;

use randomizer_core::UuidConstraints;

use super::{Generator, GeneratorContext, enclose};
use crate::errors::GenerationError;

impl Generator for UuidConstraints {
    fn generate(
        &self,
        _ctx: &GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let mut bytes = [0_u8; 16];
        rng.fill_bytes(&mut bytes);
        let uuid = Builder::from_random_bytes(bytes).into_uuid();
        Ok(enclose(&self.enclosure, &uuid.hyphenated().to_string()))
    }
}
