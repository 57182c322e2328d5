use rand::{Rng, RngCore};

use randomizer_core::WordConstraints;

use super::{Generator, GeneratorContext, enclose};
use crate::dictionary::{Dictionary, DictionaryCache, load_selection};
use crate::errors::GenerationError;

impl Generator for WordConstraints {
    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        Ok(WordCandidates::collect(self, ctx.dictionaries)?.pick(self, rng))
    }
}

/// Words of the combined selection whose length is allowed, in sorted order.
///
/// Collected once and reused for every value of a batch.
pub(crate) struct WordCandidates {
    words: Vec<String>,
}

impl WordCandidates {
    pub(crate) fn collect(
        constraints: &WordConstraints,
        cache: &DictionaryCache,
    ) -> Result<Self, GenerationError> {
        let dictionaries = load_selection(&constraints.active_dictionaries, cache)?;
        let combined = Dictionary::combine(dictionaries.iter().map(|dictionary| &**dictionary));
        let words: Vec<String> = combined
            .words_with_length_in_range(
                i64::from(constraints.min_length),
                i64::from(constraints.max_length),
            )
            .into_iter()
            .collect();
        if words.is_empty() {
            return Err(GenerationError::NoWordsInRange {
                min: constraints.min_length,
                max: constraints.max_length,
            });
        }
        Ok(Self { words })
    }

    pub(crate) fn pick(&self, constraints: &WordConstraints, rng: &mut dyn RngCore) -> String {
        let word = &self.words[rng.random_range(0..self.words.len())];
        let word = constraints.capitalization.apply(word, rng);
        enclose(&constraints.enclosure, &word)
    }
}
