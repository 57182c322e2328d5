use std::collections::BTreeSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use randomizer_core::error::Error;
use randomizer_core::symbols::{concatenate, concatenate_named};
use randomizer_core::{CapitalizationMode, SymbolSetId};

fn apply(mode: CapitalizationMode, text: &str) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    mode.apply(text, &mut rng)
}

#[test]
fn first_letter_capitalizes_each_word() {
    assert_eq!(
        apply(CapitalizationMode::FirstLetter, "bgiOP SMQpR"),
        "Bgiop Smqpr"
    );
    assert_eq!(apply(CapitalizationMode::FirstLetter, "a  b"), "A  B");
    assert_eq!(apply(CapitalizationMode::FirstLetter, ""), "");
}

#[test]
fn sentence_upper_lower_and_retain() {
    assert_eq!(apply(CapitalizationMode::Sentence, "hELLO wORLD"), "Hello world");
    assert_eq!(apply(CapitalizationMode::Sentence, ""), "");
    assert_eq!(apply(CapitalizationMode::Upper, "MiXeD 42"), "MIXED 42");
    assert_eq!(apply(CapitalizationMode::Lower, "MiXeD 42"), "mixed 42");
    assert_eq!(apply(CapitalizationMode::Retain, "MiXeD 42"), "MiXeD 42");
}

#[test]
fn random_is_reproducible_under_a_fixed_seed() {
    let text = "abcdefghijklmnopqrstuvwxyz";
    let first = apply(CapitalizationMode::Random, text);
    let second = apply(CapitalizationMode::Random, text);
    assert_eq!(first, second);
    assert_eq!(first.to_lowercase(), text);
    assert!(first.chars().any(|ch| ch.is_uppercase()));
    assert!(first.chars().any(|ch| ch.is_lowercase()));
}

#[test]
fn modes_parse_by_name() {
    assert_eq!(
        "first letter".parse::<CapitalizationMode>(),
        Ok(CapitalizationMode::FirstLetter)
    );
    assert_eq!(
        "FIRST_LETTER".parse::<CapitalizationMode>(),
        Ok(CapitalizationMode::FirstLetter)
    );
    assert_eq!(" Random ".parse::<CapitalizationMode>(), Ok(CapitalizationMode::Random));
    assert_eq!(
        "shouting".parse::<CapitalizationMode>(),
        Err(Error::UnknownCapitalizationMode("shouting".to_string()))
    );
    for mode in CapitalizationMode::all() {
        assert_eq!(mode.to_string().parse::<CapitalizationMode>(), Ok(*mode));
    }
}

#[test]
fn concatenation_follows_declaration_order_without_dedup() {
    let sets: BTreeSet<_> = [SymbolSetId::Hexadecimal, SymbolSetId::Digits]
        .into_iter()
        .collect();
    assert_eq!(concatenate(&sets), "01234567890123456789ABCDEF");

    let sets: BTreeSet<_> = [SymbolSetId::Minus, SymbolSetId::Uppercase]
        .into_iter()
        .collect();
    assert_eq!(concatenate(&sets), "ABCDEFGHIJKLMNOPQRSTUVWXYZ-");

    assert_eq!(concatenate(&BTreeSet::new()), "");
}

#[test]
fn symbol_sets_resolve_by_display_name() {
    assert_eq!(
        concatenate_named(["underscore", "Space"]),
        Ok("_ ".to_string())
    );
    assert_eq!(
        concatenate_named(["digits", "emoji"]),
        Err(Error::UnknownSymbolSet("emoji".to_string()))
    );
    let names: Vec<_> = SymbolSetId::all().map(|id| id.display_name()).collect();
    assert_eq!(names.len(), 9);
    assert_eq!(names[0], "Uppercase");
}
