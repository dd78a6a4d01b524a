//! Mobile phone number rule.
//!
//! Accepts ten-unit numbers whose first three units read as an operator
//! prefix in `83..=89`, followed by a subscriber part read from the fifth
//! unit on. Lengths and offsets are counted in UTF-16 code units, as a
//! browser form reports them.
//!
//! Before the check runs the engine removes the first space only, through
//! [`strip_first_space`]. Other whitespace is kept and counts towards the
//! length, and later rules of the field see the stripped value.

use crate::numeric::loose_int;
use formcheck_core::ValidationContext;
use std::ops::RangeInclusive;

const NUMBER_LEN: usize = 10;
const PREFIX_LEN: usize = 3;
const SUBSCRIBER_START: usize = 4;
const PREFIX_RANGE: RangeInclusive<i64> = 83..=89;

/// Removes the first space of the value.
pub fn strip_first_space(value: &str) -> String {
    value.replacen(' ', "", 1)
}

/// Fails on a non-empty value that is not a mobile number.
///
/// Expects the value already passed through [`strip_first_space`].
pub fn mobile(value: &str, _context: &ValidationContext) -> bool {
    if value.is_empty() {
        return false;
    }
    let units: Vec<u16> = value.encode_utf16().collect();
    if units.len() != NUMBER_LEN {
        return true;
    }

    let prefix = String::from_utf16_lossy(&units[..PREFIX_LEN]);
    let subscriber = String::from_utf16_lossy(&units[SUBSCRIBER_START..]);

    match loose_int(&prefix) {
        Some(p) if PREFIX_RANGE.contains(&p) => loose_int(&subscriber).is_none(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Strips then checks, as the engine does.
    fn fails(value: &str) -> bool {
        mobile(&strip_first_space(value), &ValidationContext::new())
    }

    #[test]
    fn test_mobile_valid() {
        for value in ["0831234567", "083 1234567", "0891234567", "85x1234567", ""] {
            assert!(!fails(value), "expected valid: {value:?}");
        }
    }

    #[test]
    fn test_mobile_check_does_not_strip() {
        assert!(mobile("083 1234567", &ValidationContext::new()));
    }

    #[test]
    fn test_strip_first_space() {
        assert_eq!(strip_first_space("083 123 4567"), "083123 4567");
        assert_eq!(strip_first_space(" "), "");
        assert_eq!(strip_first_space("0831234567"), "0831234567");
        assert_eq!(strip_first_space("083\t1234567"), "083\t1234567");
    }

    #[test]
    fn test_mobile_wrong_length() {
        assert!(fails("083123456"));
        assert!(fails("08312345678"));
        // only the first space is removed
        assert!(fails("083 123 4567"));
    }

    #[test]
    fn test_mobile_length_in_utf16_units() {
        // one astral character is two units
        assert!(!fails("08312345😀"));
        assert!(!fails("0831234😀5"));
        assert!(fails("083123456😀"));
    }

    #[test]
    fn test_mobile_prefix_out_of_range() {
        assert!(fails("0821234567"));
        assert!(fails("0901234567"));
        assert!(fails("8312345678"));
        assert!(fails("ab12345678"));
    }

    #[test]
    fn test_mobile_subscriber_must_read_as_number() {
        assert!(fails("0831abcdef"));
        // the fourth unit is never inspected
        assert!(!fails("083x123456"));
    }

    #[test]
    fn test_mobile_single_space_only_value() {
        assert!(!fails(" "));
    }
}
