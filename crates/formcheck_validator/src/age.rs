//! Date-of-birth rule.

use chrono::{Months, NaiveDate};
use formcheck_core::ValidationContext;
use regex::Regex;
use std::sync::LazyLock;

/// Strict `DD/MM/YYYY`: two-digit day and month, four-digit year.
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("valid regex"));

const ADULT_AGE_MONTHS: u32 = 18 * 12;

/// Fails unless the value is a `DD/MM/YYYY` date at least 18 years before
/// the context's reference date.
///
/// The threshold is clamped to the end of the month, so someone born on
/// 29 February turns 18 on 28 February in non-leap years.
pub fn over18(value: &str, context: &ValidationContext) -> bool {
    let Some(born) = parse_strict_date(value) else {
        return true;
    };
    match context.today.checked_sub_months(Months::new(ADULT_AGE_MONTHS)) {
        Some(limit) => born > limit,
        None => true,
    }
}

/// Parses a strict `DD/MM/YYYY` date, rejecting short fields and
/// impossible dates.
pub fn parse_strict_date(value: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%d/%m/%Y").ok()
}
