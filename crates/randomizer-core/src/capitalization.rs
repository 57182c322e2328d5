use std::fmt;
use std::str::FromStr;

use rand::{Rng, RngCore};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Capitalization applied to generated strings and words.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CapitalizationMode {
    #[default]
    Retain,
    Sentence,
    Upper,
    Lower,
    FirstLetter,
    /// Each character is independently upper- or lowercased.
    Random,
}

const ALL_MODES: &[CapitalizationMode] = &[
    CapitalizationMode::Retain,
    CapitalizationMode::Sentence,
    CapitalizationMode::Upper,
    CapitalizationMode::Lower,
    CapitalizationMode::FirstLetter,
    CapitalizationMode::Random,
];

impl CapitalizationMode {
    pub fn all() -> &'static [CapitalizationMode] {
        ALL_MODES
    }

    pub fn display_name(self) -> &'static str {
        match self {
            CapitalizationMode::Retain => "retain",
            CapitalizationMode::Sentence => "sentence",
            CapitalizationMode::Upper => "upper",
            CapitalizationMode::Lower => "lower",
            CapitalizationMode::FirstLetter => "first letter",
            CapitalizationMode::Random => "random",
        }
    }

    /// Applies the transform. Only [`CapitalizationMode::Random`] draws from `rng`.
    pub fn apply(self, text: &str, rng: &mut dyn RngCore) -> String {
        match self {
            CapitalizationMode::Retain => text.to_string(),
            CapitalizationMode::Sentence => to_sentence_case(text),
            CapitalizationMode::Upper => text.to_uppercase(),
            CapitalizationMode::Lower => text.to_lowercase(),
            CapitalizationMode::FirstLetter => text
                .split(' ')
                .map(to_sentence_case)
                .collect::<Vec<_>>()
                .join(" "),
            CapitalizationMode::Random => to_random_case(text, rng),
        }
    }
}

impl fmt::Display for CapitalizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for CapitalizationMode {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        let normalized = name.trim().to_lowercase().replace(['_', '-'], " ");
        ALL_MODES
            .iter()
            .copied()
            .find(|mode| mode.display_name() == normalized)
            .ok_or_else(|| Error::UnknownCapitalizationMode(name.to_string()))
    }
}

fn to_sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(text.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

fn to_random_case(text: &str, rng: &mut dyn RngCore) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if rng.random_bool(0.5) {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}
