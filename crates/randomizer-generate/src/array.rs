use randomizer_core::ArrayConstraints;

/// Joins already generated values into one array-like string.
///
/// `constraints.count` is not consulted here; the caller decides how many
/// values to generate.
pub fn arrayify<S: AsRef<str>>(values: &[S], constraints: &ArrayConstraints) -> String {
    let mut separator = constraints.separator.clone();
    if constraints.space_after_separator {
        separator.push(' ');
    }

    let mut out = String::new();
    if let Some(brackets) = constraints.brackets {
        out.push(brackets.open);
    }
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            out.push_str(&separator);
        }
        out.push_str(value.as_ref());
    }
    if let Some(brackets) = constraints.brackets {
        out.push(brackets.close);
    }
    out
}

#[cfg(test)]
mod tests {
    use randomizer_core::Brackets;

    use super::*;

    #[test]
    fn single_value_has_no_separator() {
        let constraints = ArrayConstraints {
            count: 1,
            brackets: Some(Brackets::new('(', ')')),
            separator: ";".to_string(),
            space_after_separator: true,
        };
        assert_eq!(arrayify(&["42"], &constraints), "(42)");
    }
}
