use randomizer_core::number::next_up;
use randomizer_core::{format_decimal, format_integer};

#[test]
fn decimal_uses_configured_separators() {
    assert_eq!(format_decimal(4.2, 2, Some('.'), Some(',')), "4,20");
    assert_eq!(
        format_decimal(67575.845, 3, Some('.'), Some(',')),
        "67.575,845"
    );
}

#[test]
fn decimal_rounds_half_up() {
    assert_eq!(format_decimal(2.675, 2, None, Some('.')), "2.68");
    assert_eq!(format_decimal(0.5, 0, None, Some('.')), "1");
    assert_eq!(format_decimal(1.5, 0, None, Some('.')), "2");
    assert_eq!(format_decimal(2.5, 0, None, Some('.')), "3");
    assert_eq!(format_decimal(-2.5, 0, None, Some('.')), "-3");
    assert_eq!(format_decimal(0.125, 2, None, Some('.')), "0.13");
    assert_eq!(format_decimal(9.995, 2, None, Some('.')), "10.00");
}

#[test]
fn decimal_pads_trailing_zeros() {
    assert_eq!(format_decimal(3.0, 4, None, Some('.')), "3.0000");
    assert_eq!(format_decimal(12.0, 0, Some(','), Some('.')), "12");
}

#[test]
fn decimal_groups_integer_part_only() {
    assert_eq!(
        format_decimal(1234567.891, 2, Some(','), Some('.')),
        "1,234,567.89"
    );
    assert_eq!(format_decimal(-1234.5, 1, Some(' '), Some(',')), "-1 234,5");
    assert_eq!(format_decimal(0.123456, 6, Some(','), Some('.')), "0.123456");
}

#[test]
fn decimal_separators_may_match_or_be_absent() {
    assert_eq!(format_decimal(1234.5, 1, Some('.'), Some('.')), "1.234.5");
    assert_eq!(format_decimal(1234.5, 1, None, None), "12345");
}

#[test]
fn decimal_never_renders_negative_zero() {
    assert_eq!(format_decimal(-0.0001, 2, None, Some('.')), "0.00");
    assert_eq!(format_decimal(-0.0, 0, None, Some('.')), "0");
}

#[test]
fn decimal_outside_exact_range_uses_shortest_digits() {
    assert_eq!(
        format_decimal(1e30, 1, None, Some('.')),
        "1000000000000000000000000000000.0"
    );
    assert_eq!(
        format_decimal(1e30, 0, Some(','), Some('.')),
        "1,000,000,000,000,000,000,000,000,000,000"
    );
    assert_eq!(
        format_decimal(-1.25e29, 0, None, Some('.')),
        "-125000000000000000000000000000"
    );
}

#[test]
fn decimal_beyond_exact_scale_keeps_small_digits() {
    assert_eq!(
        format_decimal(1.5e-29, 30, None, Some('.')),
        "0.000000000000000000000000000015"
    );
    assert_eq!(
        format_decimal(1.5e-29, 29, None, Some('.')),
        "0.00000000000000000000000000002"
    );
    assert_eq!(format_decimal(-1.5e-29, 2, None, Some('.')), "0.00");
}

#[test]
fn integer_in_other_bases_ignores_grouping() {
    assert_eq!(format_integer(48345, 11, Some('.')), "33360");
    assert_eq!(format_integer(255, 16, Some(',')), "ff");
    assert_eq!(format_integer(-5, 2, None), "-101");
    assert_eq!(format_integer(35, 36, None), "z");
    assert_eq!(format_integer(0, 7, None), "0");
}

#[test]
fn integer_in_base_ten_groups_digits() {
    assert_eq!(format_integer(1234567, 10, Some(',')), "1,234,567");
    assert_eq!(format_integer(-1234567, 10, Some('.')), "-1.234.567");
    assert_eq!(format_integer(999, 10, Some(',')), "999");
    assert_eq!(format_integer(-100, 10, Some(',')), "-100");
    assert_eq!(format_integer(1234567, 10, None), "1234567");
}

#[test]
fn integer_handles_extremes() {
    assert_eq!(format_integer(i64::MIN, 10, None), i64::MIN.to_string());
    assert_eq!(format_integer(i64::MAX, 10, None), i64::MAX.to_string());
    assert_eq!(
        format_integer(i64::MIN, 16, None),
        "-8000000000000000"
    );
}

#[test]
fn next_up_makes_max_reachable() {
    let max = 10.0;
    assert!(next_up(max) > max);
    assert!(next_up(max) - max < 1e-14);
}
