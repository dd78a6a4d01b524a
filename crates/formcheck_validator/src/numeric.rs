//! Numeric rules and the number readers they rely on.
//!
//! Both rules follow browser number coercion rather than Rust's parsers.
//! `int` reads the whole value the way a numeric conversion does
//! (surrounding whitespace, sign, `0x`/`0o`/`0b` prefixes) and accepts any
//! integral result that also starts with a decimal digit. `nonZero` reads
//! the longest numeric prefix of the value.

use formcheck_core::ValidationContext;
use regex::Regex;
use std::sync::LazyLock;

static FLOAT_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(Infinity|([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?)")
        .expect("valid regex")
});

static DECIMAL_LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(Infinity|([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?)$")
        .expect("valid regex")
});

static EXPONENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)[eE]").expect("valid regex")
});

/// Integers at or above this magnitude print in exponent form and no
/// longer survive a print-then-read round trip.
const EXACT_PRINT_LIMIT: f64 = 1e21;

/// Fails on a non-empty value that does not read as an integer.
///
/// Accepted: `"42"`, `"007"`, `"+5"`, `" 12"`, `"1.0"`, `"-0"`, `"0x10"`
/// and integers far beyond `i64`. Rejected: fractions, text, infinities,
/// whitespace-only values and exponent notation such as `"1e3"`.
pub fn int(value: &str, _context: &ValidationContext) -> bool {
    if value.is_empty() {
        return false;
    }
    let Some(number) = coerce_number(value) else {
        return true;
    };
    !survives_print_round_trip(number)
        || !starts_with_decimal_digit(value)
        || EXPONENT_RE.is_match(value.trim())
}

/// Fails on an empty value, or when the value reads as zero.
///
/// Text with no readable number is not zero and passes.
pub fn non_zero(value: &str, _context: &ValidationContext) -> bool {
    value.is_empty() || loose_float(value) == Some(0.0)
}

/// Converts the whole value to a number, or `None` when it is not one.
///
/// Surrounding whitespace is ignored and an empty result reads as zero.
/// Accepts decimal literals (with optional sign, fraction, exponent or
/// `Infinity`) and unsigned `0x`, `0o` and `0b` literals.
pub fn coerce_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return Some(digits.chars().filter_map(|c| c.to_digit(radix)).fold(
            0.0,
            |acc, d| acc * f64::from(radix) + f64::from(d),
        ));
    }

    if !DECIMAL_LITERAL_RE.is_match(trimmed) {
        return None;
    }
    trimmed.parse().ok()
}

/// Whether printing the number and reading back its integer part gives
/// the same number.
fn survives_print_round_trip(number: f64) -> bool {
    number.is_finite() && number.fract() == 0.0 && number.abs() < EXACT_PRINT_LIMIT
}

/// Whether a base-10 integer can be read from the start of the value,
/// after leading whitespace and an optional sign.
fn starts_with_decimal_digit(value: &str) -> bool {
    let rest = value.trim_start();
    let rest = rest.strip_prefix(['+', '-']).unwrap_or(rest);
    rest.starts_with(|c: char| c.is_ascii_digit())
}

/// Reads the longest leading decimal number, after leading whitespace.
///
/// Trailing garbage is ignored: `"3abc"` reads as `3.0`. Returns `None`
/// when no digit can be read.
pub fn loose_float(value: &str) -> Option<f64> {
    let found = FLOAT_PREFIX_RE.find(value.trim_start())?;
    found.as_str().parse().ok()
}

/// Reads the longest leading integer, after leading whitespace and an
/// optional sign. A `0x`/`0X` prefix switches to hexadecimal.
///
/// Returns `None` when no digit can be read. Magnitudes beyond `i64`
/// saturate.
pub fn loose_int(value: &str) -> Option<i64> {
    let rest = value.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut digits = rest.chars().map_while(|c| c.to_digit(radix)).peekable();
    digits.peek()?;
    let magnitude = digits.fold(0i64, |acc, d| {
        acc.saturating_mul(i64::from(radix))
            .saturating_add(i64::from(d))
    });

    Some(if negative { -magnitude } else { magnitude })
}
