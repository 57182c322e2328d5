//! Integer and decimal rendering with configurable base and separators.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Renders `value` in `base` using the digit alphabet `0-9a-z`.
///
/// Grouping only applies to base 10; any other base ignores
/// `grouping_separator`. Bases outside `2..=36` are clamped into that range;
/// generators reject them before formatting.
pub fn format_integer(value: i64, base: u8, grouping_separator: Option<char>) -> String {
    let base = u64::from(base.clamp(2, 36));
    let mut magnitude = value.unsigned_abs();

    let mut digits = Vec::new();
    loop {
        digits.push(DIGITS[(magnitude % base) as usize]);
        magnitude /= base;
        if magnitude == 0 {
            break;
        }
    }
    digits.reverse();
    // The digit alphabet is ASCII.
    let digits: String = digits.into_iter().map(char::from).collect();

    let digits = match grouping_separator {
        Some(separator) if base == 10 => group_digits(&digits, separator),
        _ => digits,
    };

    if value < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Renders `value` with exactly `decimal_count` fractional digits.
///
/// Rounding is half-up (ties away from zero) on the shortest decimal
/// representation of `value`, so `2.675` renders as `2.68` with two decimals.
/// The grouping separator applies to the integer part only. When
/// `decimal_separator` is `None` the fractional digits directly follow the
/// integer part.
pub fn format_decimal(
    value: f64,
    decimal_count: u32,
    grouping_separator: Option<char>,
    decimal_separator: Option<char>,
) -> String {
    let rounded = round_half_up(value, decimal_count);

    let (negative, unsigned) = match rounded.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, rounded.as_str()),
    };
    let (integer_part, fraction_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut fraction: String = fraction_part
        .chars()
        .take(decimal_count as usize)
        .collect();
    while fraction.len() < decimal_count as usize {
        fraction.push('0');
    }

    let is_zero = integer_part.chars().chain(fraction.chars()).all(|ch| ch == '0');

    let mut out = String::with_capacity(unsigned.len() + 8);
    if negative && !is_zero {
        out.push('-');
    }
    match grouping_separator {
        Some(separator) => out.push_str(&group_digits(integer_part, separator)),
        None => out.push_str(integer_part),
    }
    if decimal_count > 0 {
        if let Some(separator) = decimal_separator {
            out.push(separator);
        }
        out.push_str(&fraction);
    }
    out
}

/// Returns the smallest `f64` strictly greater than `value`.
///
/// NaN and positive infinity are returned unchanged.
pub fn next_up(value: f64) -> f64 {
    if value.is_nan() || value == f64::INFINITY {
        return value;
    }
    if value == 0.0 {
        return f64::from_bits(1);
    }
    let bits = value.to_bits();
    if value > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// Digits `Decimal` holds exactly; longer representations would be rounded on
/// parse.
const EXACT_DECIMAL_DIGITS: usize = 28;

fn round_half_up(value: f64, decimal_count: u32) -> String {
    // `Display` for f64 is the shortest round-trip form and never uses an
    // exponent.
    let repr = value.to_string();
    if !value.is_finite() {
        return repr;
    }
    let digit_count = repr.chars().filter(char::is_ascii_digit).count();
    if digit_count <= EXACT_DECIMAL_DIGITS
        && let Ok(mut decimal) = Decimal::from_str(&repr)
    {
        decimal =
            decimal.round_dp_with_strategy(decimal_count, RoundingStrategy::MidpointAwayFromZero);
        if decimal.is_zero() {
            decimal.set_sign_positive(true);
        }
        return decimal.to_string();
    }
    round_digits_half_up(&repr, decimal_count as usize)
}

/// Half-up rounding carried out on the digits of a plain decimal string.
fn round_digits_half_up(repr: &str, decimal_count: usize) -> String {
    let (negative, unsigned) = match repr.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, repr),
    };
    let (integer_part, fraction_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if fraction_part.len() <= decimal_count {
        return repr.to_string();
    }

    let mut digits: Vec<u8> = integer_part
        .bytes()
        .chain(fraction_part.bytes().take(decimal_count))
        .collect();
    if fraction_part.as_bytes()[decimal_count] >= b'5' {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - decimal_count;
    let mut out = String::with_capacity(digits.len() + 2);
    if negative {
        out.push('-');
    }
    // Only ASCII digits were collected.
    out.extend(digits[..split].iter().map(|&digit| char::from(digit)));
    if decimal_count > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|&digit| char::from(digit)));
    }
    out
}

/// Inserts `separator` every three digits counting from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_from_the_right() {
        assert_eq!(group_digits("1", ','), "1");
        assert_eq!(group_digits("123", ','), "123");
        assert_eq!(group_digits("1234", ','), "1,234");
        assert_eq!(group_digits("1234567", '.'), "1.234.567");
    }

    #[test]
    fn next_up_steps_one_ulp() {
        assert!(next_up(1.0) > 1.0);
        assert_eq!(next_up(1.0), 1.0 + f64::EPSILON);
        assert!(next_up(-1.0) > -1.0);
        assert_eq!(next_up(0.0), f64::from_bits(1));
        assert_eq!(next_up(-0.0), f64::from_bits(1));
        assert_eq!(next_up(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn digit_rounding_carries_through_nines() {
        assert_eq!(round_digits_half_up("9.995", 2), "10.00");
        assert_eq!(round_digits_half_up("-0.125", 2), "-0.13");
        assert_eq!(round_digits_half_up("99.5", 0), "100");
        assert_eq!(round_digits_half_up("1.2344", 3), "1.234");
        assert_eq!(round_digits_half_up("7.5", 4), "7.5");
    }
}
