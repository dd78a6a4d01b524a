//! Builder pattern for creating fields.
//!
//! This module provides an ergonomic builder for constructing a field and
//! its ordered rule set with a fluent API.

use crate::{CustomOutcome, CustomRule, Field, RuleSpec, Validations};

/// Builder for creating a `Field`.
///
/// Rules are evaluated in the order they are added.
///
/// # Example
///
/// ```rust
/// use formcheck_core::FieldBuilder;
///
/// let field = FieldBuilder::new("")
///     .touched(true)
///     .enabled("required")
///     .message("email", "Invalid email")
///     .custom("notAdmin", |value: &str| value != "admin")
///     .build();
///
/// let names: Vec<&str> = field
///     .validations
///     .as_ref()
///     .unwrap()
///     .keys()
///     .map(String::as_str)
///     .collect();
/// assert_eq!(names, ["required", "email", "notAdmin"]);
/// ```
#[derive(Debug, Default)]
pub struct FieldBuilder {
    value: String,
    touched: bool,
    validations: Option<Validations>,
}

impl FieldBuilder {
    /// Creates a new field builder with the given value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    /// Sets whether the field has been touched.
    pub fn touched(mut self, touched: bool) -> Self {
        self.touched = touched;
        self
    }

    /// Adds a rule with an explicit spec.
    ///
    /// Re-adding a name replaces its spec but keeps its original position.
    pub fn rule(mut self, name: impl Into<String>, spec: impl Into<RuleSpec>) -> Self {
        self.validations
            .get_or_insert_with(Validations::new)
            .insert(name.into(), spec.into());
        self
    }

    /// Adds an enabled rule that fails without a message.
    pub fn enabled(self, name: impl Into<String>) -> Self {
        self.rule(name, RuleSpec::Enabled)
    }

    /// Adds a rule that reports `message` when it fails.
    pub fn message(self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.rule(name, RuleSpec::message(message))
    }

    /// Adds a rule that is present but switched off.
    pub fn disabled(self, name: impl Into<String>) -> Self {
        self.rule(name, RuleSpec::Disabled)
    }

    /// Adds a custom rule from an infallible closure.
    pub fn custom<F, O>(self, name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&str) -> O + Send + Sync + 'static,
        O: Into<CustomOutcome>,
    {
        self.rule(name, CustomRule::infallible(check))
    }

    /// Adds a prebuilt custom rule, which may be fallible.
    pub fn custom_rule(self, name: impl Into<String>, rule: CustomRule) -> Self {
        self.rule(name, rule)
    }

    /// Builds the field, with no error state.
    pub fn build(self) -> Field {
        Field {
            value: self.value,
            touched: self.touched,
            validations: self.validations,
            error: None,
            error_msg: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_builder_minimal() {
        let field = FieldBuilder::new("hello").build();

        assert_eq!(field.value, "hello");
        assert!(!field.touched);
        assert!(field.validations.is_none());
        assert!(field.error.is_none());
        assert!(field.error_msg.is_none());
    }

    #[test]
    fn test_field_builder_full() {
        let field = FieldBuilder::new("abc")
            .touched(true)
            .enabled("required")
            .message("email", "Invalid email")
            .disabled("int")
            .custom("short", |value: &str| value.len() < 5)
            .build();

        assert!(field.touched);
        let validations = field.validations.unwrap();
        assert_eq!(validations.len(), 4);
        assert_eq!(validations["required"], RuleSpec::Enabled);
        assert_eq!(
            validations["email"],
            RuleSpec::Message("Invalid email".to_string())
        );
        assert_eq!(validations["int"], RuleSpec::Disabled);
        assert!(validations["short"].as_custom().is_some());
    }

    #[test]
    fn test_field_builder_replaces_in_place() {
        let field = FieldBuilder::new("")
            .enabled("required")
            .enabled("email")
            .message("required", "Required")
            .build();

        let validations = field.validations.unwrap();
        let names: Vec<&str> = validations.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["required", "email"]);
        assert_eq!(
            validations["required"],
            RuleSpec::Message("Required".to_string())
        );
    }

    #[test]
    fn test_field_builder_empty_message_disables() {
        let field = FieldBuilder::new("").message("required", "").build();
        assert_eq!(field.validations.unwrap()["required"], RuleSpec::Disabled);
    }

    #[test]
    fn test_field_builder_custom_rule_is_shared() {
        let rule = CustomRule::predicate(|value| value.starts_with('+'));
        let field = FieldBuilder::new("+1")
            .custom_rule("plus", rule.clone())
            .build();

        assert_eq!(
            field.validations.unwrap()["plus"],
            RuleSpec::Custom(rule)
        );
    }
}
