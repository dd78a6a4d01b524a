//! The field record and its error state.

use crate::Validations;
use serde::{Deserialize, Serialize};

/// Kind of error a field can be in.
///
/// There is a single kind; what went wrong is carried by the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// The field failed one of its rules
    Error,
}

/// A form field: its current value, interaction state, rules, and the
/// outcome of the last validation.
///
/// Validation never edits a `Field` in place. It builds a replacement with
/// [`Field::cleared`] or [`Field::failed`], which copy every attribute and
/// override only the validation state.
///
/// # Example
///
/// ```rust
/// use formcheck_core::Field;
///
/// let field = Field::new("abc@def");
/// let failed = field.failed(Some("Invalid email".to_string()));
///
/// assert!(failed.has_error());
/// assert!(failed.touched);
/// assert!(!field.has_error());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Current input value
    #[serde(default)]
    pub value: String,

    /// Whether the user has interacted with the field
    #[serde(default)]
    pub touched: bool,

    /// Rules to check, in precedence order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validations: Option<Validations>,

    /// Set when the last validation failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,

    /// Message reported by the failing rule, if it had one
    #[serde(
        default,
        rename = "errorMsg",
        skip_serializing_if = "Option::is_none"
    )]
    pub error_msg: Option<String>,
}

impl Field {
    /// Creates an untouched field without rules.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    /// Whether the field is in the error state.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Copy of this field with the error state removed.
    pub fn cleared(&self) -> Self {
        Self {
            error: None,
            error_msg: None,
            ..self.clone()
        }
    }

    /// Copy of this field marked as failed and touched.
    pub fn failed(&self, message: Option<String>) -> Self {
        Self {
            touched: true,
            error: Some(ErrorKind::Error),
            error_msg: message,
            ..self.clone()
        }
    }
}
