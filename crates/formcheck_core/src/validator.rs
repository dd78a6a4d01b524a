//! Validation context and report types.
//!
//! The context carries the per-call options of a validation run; the
//! report carries the validated field together with what happened while
//! producing it.

use crate::Field;
use chrono::{Local, NaiveDate};

/// Options for a single validation run.
///
/// `today` is the reference date for date-relative rules such as `over18`.
/// [`ValidationContext::new`] captures the local current date; tests and
/// batch callers pin it with [`ValidationContext::with_today`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationContext {
    /// Skip validation of fields that have not been touched
    pub check_touched: bool,

    /// Reference date for date-relative rules
    pub today: NaiveDate,
}

impl ValidationContext {
    /// Creates a context that respects the touched flag and uses today's date.
    pub fn new() -> Self {
        Self {
            check_touched: true,
            today: Local::now().date_naive(),
        }
    }

    /// Sets whether untouched fields are skipped.
    pub fn with_check_touched(mut self, check_touched: bool) -> Self {
        self.check_touched = check_touched;
        self
    }

    /// Sets the reference date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldReport {
    /// The replacement field record
    pub field: Field,

    /// Name of the rule that failed, if any
    pub failed_rule: Option<String>,

    /// Number of enabled rules that were evaluated
    pub rules_evaluated: usize,

    /// Non-fatal diagnostics raised during evaluation
    pub warnings: Vec<String>,
}

impl FieldReport {
    /// Creates a report for a field that passed or was skipped.
    pub fn clean(field: Field) -> Self {
        Self {
            field,
            failed_rule: None,
            rules_evaluated: 0,
            warnings: Vec::new(),
        }
    }

    /// Whether the field passed.
    pub fn passed(&self) -> bool {
        !self.field.has_error()
    }

    /// Adds a warning to the report.
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}
