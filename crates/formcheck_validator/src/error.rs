//! Error types for validation operations.

use formcheck_core::BoxError;
use thiserror::Error;

/// Errors that can occur during validation.
///
/// Rule failures are not errors: they are reported on the returned field.
/// This type only covers faults raised by caller-supplied rules.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A custom rule returned an error instead of an outcome
    #[error("Custom rule '{rule}' failed to evaluate: {source}")]
    CustomRule {
        rule: String,
        #[source]
        source: BoxError,
    },
}

impl ValidationError {
    /// Creates a new custom rule error.
    pub fn custom_rule(rule: impl Into<String>, source: BoxError) -> Self {
        Self::CustomRule {
            rule: rule.into(),
            source,
        }
    }

    /// Name of the rule that raised the error.
    pub fn rule(&self) -> &str {
        match self {
            Self::CustomRule { rule, .. } => rule,
        }
    }
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;
