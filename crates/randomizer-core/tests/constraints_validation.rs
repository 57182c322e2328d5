use std::collections::BTreeSet;

use randomizer_core::{
    ArrayConstraints, DecimalConstraints, DictionaryRef, GenerationConstraints,
    IntegerConstraints, StringConstraints, UuidConstraints, ValidationError, WordConstraints,
    validate_array_constraints, validate_constraints,
};

#[test]
fn defaults_are_valid() {
    let all = [
        GenerationConstraints::Integer(IntegerConstraints::default()),
        GenerationConstraints::Decimal(DecimalConstraints::default()),
        GenerationConstraints::String(StringConstraints::default()),
        GenerationConstraints::Word(WordConstraints::default()),
        GenerationConstraints::Uuid(UuidConstraints::default()),
    ];
    for constraints in &all {
        assert_eq!(validate_constraints(constraints), Ok(()), "{}", constraints.kind());
    }
    assert_eq!(validate_array_constraints(&ArrayConstraints::default()), Ok(()));
}

#[test]
fn inverted_ranges_are_rejected() {
    let integer = GenerationConstraints::Integer(IntegerConstraints {
        min: 10,
        max: 1,
        ..IntegerConstraints::default()
    });
    assert!(matches!(
        validate_constraints(&integer),
        Err(ValidationError::RangeInverted { field: "integer", .. })
    ));

    let decimal = GenerationConstraints::Decimal(DecimalConstraints {
        min: f64::NAN,
        ..DecimalConstraints::default()
    });
    assert!(matches!(
        validate_constraints(&decimal),
        Err(ValidationError::RangeInverted { .. })
    ));

    let word = GenerationConstraints::Word(WordConstraints {
        min_length: 9,
        max_length: 2,
        ..WordConstraints::default()
    });
    assert!(matches!(
        validate_constraints(&word),
        Err(ValidationError::RangeInverted { field: "word length", .. })
    ));
}

#[test]
fn base_must_be_in_range() {
    for base in [0, 1, 37] {
        let constraints = GenerationConstraints::Integer(IntegerConstraints {
            base,
            ..IntegerConstraints::default()
        });
        assert_eq!(
            validate_constraints(&constraints),
            Err(ValidationError::BaseOutOfRange(base))
        );
    }
}

#[test]
fn empty_alphabet_only_matters_for_non_empty_strings() {
    let empty_sets = StringConstraints {
        active_symbol_sets: BTreeSet::new(),
        ..StringConstraints::default()
    };
    assert_eq!(
        validate_constraints(&GenerationConstraints::String(empty_sets.clone())),
        Err(ValidationError::EmptyAlphabet)
    );

    let zero_length = StringConstraints {
        min_length: 0,
        max_length: 0,
        ..empty_sets
    };
    assert_eq!(
        validate_constraints(&GenerationConstraints::String(zero_length)),
        Ok(())
    );
}

#[test]
fn dictionary_selection_must_be_non_empty_and_unique() {
    let none = WordConstraints {
        active_dictionaries: Vec::new(),
        ..WordConstraints::default()
    };
    assert_eq!(
        validate_constraints(&GenerationConstraints::Word(none)),
        Err(ValidationError::EmptyDictionarySelection)
    );

    let twice = WordConstraints {
        active_dictionaries: vec![
            DictionaryRef::bundled("simple.dic"),
            DictionaryRef::user("/tmp/words.dic"),
            DictionaryRef::bundled("simple.dic"),
        ],
        ..WordConstraints::default()
    };
    assert_eq!(
        validate_constraints(&GenerationConstraints::Word(twice)),
        Err(ValidationError::DuplicateDictionaryName {
            name: "simple".to_string()
        })
    );
}

#[test]
fn array_count_must_be_positive() {
    let array = ArrayConstraints {
        count: 0,
        ..ArrayConstraints::default()
    };
    assert_eq!(
        validate_array_constraints(&array),
        Err(ValidationError::ArrayCountTooSmall)
    );
}

#[test]
fn constraints_round_trip_through_json_with_kind_tag() {
    let constraints = GenerationConstraints::Word(WordConstraints::default());
    let encoded = serde_json::to_value(&constraints).expect("serialize");
    assert_eq!(encoded["kind"], "word");
    assert_eq!(encoded["active_dictionaries"][0]["kind"], "bundled");
    assert_eq!(encoded["active_dictionaries"][0]["path"], "simple.dic");

    let decoded: GenerationConstraints = serde_json::from_value(encoded).expect("deserialize");
    assert_eq!(decoded, constraints);
}

#[test]
fn partial_toml_falls_back_to_defaults() {
    let string: StringConstraints = toml::from_str(
        r#"
        max_length = 12
        active_symbol_sets = ["digits", "minus"]
        capitalization = "upper"
        "#,
    )
    .expect("parse");
    assert_eq!(string.min_length, 3);
    assert_eq!(string.max_length, 12);
    assert_eq!(string.enclosure, "\"");
    assert_eq!(string.active_symbol_sets.len(), 2);

    let array: ArrayConstraints = toml::from_str(
        r#"
        count = 3
        brackets = { open = "{", close = "}" }
        "#,
    )
    .expect("parse");
    assert_eq!(array.count, 3);
    assert_eq!(array.brackets.map(|b| (b.open, b.close)), Some(('{', '}')));
    assert_eq!(array.separator, ",");
}
