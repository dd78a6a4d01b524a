//! Text-shape rules.
//!
//! This module holds the built-in rules that only look at the characters
//! of the value:
//! - required: value must not be empty
//! - email, password: format checks that skip empty values
//! - bankAccount, bic, iban: banking identifiers, empty values fail
//! - max11chars, max7chars: length caps in UTF-16 code units
//!
//! Every check returns `true` when the value violates the rule.

use formcheck_core::ValidationContext;
use regex::Regex;
use std::sync::LazyLock;

/// Local part (plain dotted atoms or a quoted string) `@` either a
/// bracketed IPv4 literal or dotted labels ending in a 2+ letter TLD.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("valid regex")
});

static PASSWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-zA-Z]{8,}$").expect("valid regex"));

static BANK_ACCOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\sa-zA-Z0-9]+$").expect("valid regex"));

static BIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9]{4}[a-zA-Z]{2}[a-zA-Z0-9]{2}([a-zA-Z0-9]{3})?$").expect("valid regex")
});

// Fixed 22-character layout, not the per-country IBAN grammar.
static IBAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z]{2}[0-9]{2}[a-zA-Z0-9]{4}[0-9]{14}$").expect("valid regex")
});

/// Fails on an empty value.
pub fn required(value: &str, _context: &ValidationContext) -> bool {
    value.is_empty()
}

/// Fails on a non-empty value that is not an email address.
pub fn email(value: &str, _context: &ValidationContext) -> bool {
    !value.is_empty() && !EMAIL_RE.is_match(value)
}

/// Fails on a non-empty value that is not at least 8 ASCII letters or digits.
pub fn password(value: &str, _context: &ValidationContext) -> bool {
    !value.is_empty() && !PASSWORD_RE.is_match(value)
}

/// Fails unless the value is one or more letters, digits or whitespace.
pub fn bank_account(value: &str, _context: &ValidationContext) -> bool {
    !BANK_ACCOUNT_RE.is_match(value)
}

/// Fails unless the value is an 8 or 11 character BIC.
pub fn bic(value: &str, _context: &ValidationContext) -> bool {
    !BIC_RE.is_match(value)
}

/// Fails unless the value is a 22 character IBAN.
pub fn iban(value: &str, _context: &ValidationContext) -> bool {
    !IBAN_RE.is_match(value)
}

/// Fails when the value is longer than 11 UTF-16 code units.
pub fn max11chars(value: &str, _context: &ValidationContext) -> bool {
    exceeds(value, 11)
}

/// Fails when the value is longer than 7 UTF-16 code units.
pub fn max7chars(value: &str, _context: &ValidationContext) -> bool {
    exceeds(value, 7)
}

/// Length in UTF-16 code units, as a browser form counts it.
fn exceeds(value: &str, max: usize) -> bool {
    value.encode_utf16().count() > max
}
