//! Main validation engine.
//!
//! This module provides the `FieldValidator` that walks a field's rules in
//! order and produces the replacement field record.

use crate::{Result, RuleRegistry, ValidationError};
use formcheck_core::{CustomOutcome, Field, FieldReport, RuleSpec, ValidationContext};
use tracing::{debug, warn};

/// Validation engine for a single field.
///
/// Rules are evaluated in the order of the field's `validations` map and
/// evaluation stops at the first failure. Rule names found in the registry
/// run the registered check; any other name must carry a custom rule, and
/// is otherwise reported as unrecognized and skipped.
///
/// Rules see a working copy of the value. A registered rule with a
/// rewrite replaces that copy for every rule after it; the returned field
/// always keeps its original value.
///
/// # Example
///
/// ```rust
/// use formcheck_core::{FieldBuilder, ValidationContext};
/// use formcheck_validator::FieldValidator;
///
/// let field = FieldBuilder::new("abc@def")
///     .touched(true)
///     .message("email", "Invalid email")
///     .build();
///
/// let validator = FieldValidator::new();
/// let validated = validator
///     .validate(&field, &ValidationContext::new())
///     .unwrap();
///
/// assert!(validated.has_error());
/// assert_eq!(validated.error_msg.as_deref(), Some("Invalid email"));
/// ```
#[derive(Debug, Clone)]
pub struct FieldValidator {
    registry: RuleRegistry,
}

impl FieldValidator {
    /// Creates a validator with the built-in rules.
    pub fn new() -> Self {
        Self::with_registry(RuleRegistry::builtin())
    }

    /// Creates a validator with a caller-assembled registry.
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// The rules this validator knows by name.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Validates a field and returns its replacement.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::CustomRule` when a custom rule fails to
    /// evaluate. Rule violations are not errors.
    pub fn validate(&self, field: &Field, context: &ValidationContext) -> Result<Field> {
        self.validate_with_report(field, context)
            .map(|report| report.field)
    }

    /// Validates a field and reports which rule failed, how many rules ran,
    /// and any diagnostics raised on the way.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::CustomRule` when a custom rule fails to
    /// evaluate.
    pub fn validate_with_report(
        &self,
        field: &Field,
        context: &ValidationContext,
    ) -> Result<FieldReport> {
        let Some(validations) = &field.validations else {
            return Ok(FieldReport::clean(field.cleared()));
        };

        if context.check_touched && !field.touched {
            debug!("Skipping validation of untouched field");
            return Ok(FieldReport::clean(field.cleared()));
        }

        let mut report = FieldReport::clean(field.cleared());
        let mut value = field.value.clone();

        for (name, spec) in validations {
            if !spec.is_enabled() {
                continue;
            }
            report.rules_evaluated += 1;

            if let Some(message) = self.evaluate(name, spec, &mut value, context, &mut report)? {
                debug!("Rule '{}' failed", name);
                report.field = field.failed(message);
                report.failed_rule = Some(name.clone());
                return Ok(report);
            }
        }

        Ok(report)
    }

    /// Runs one enabled rule. `Some(message)` means the rule failed.
    fn evaluate(
        &self,
        name: &str,
        spec: &RuleSpec,
        value: &mut String,
        context: &ValidationContext,
        report: &mut FieldReport,
    ) -> Result<Option<Option<String>>> {
        if let Some(rule) = self.registry.get(name) {
            if let Some(rewrite) = rule.rewrite {
                *value = rewrite(value);
            }
            let failed = (rule.check)(value, context);
            return Ok(failed.then(|| spec.override_message().map(str::to_owned)));
        }

        match spec {
            RuleSpec::Custom(rule) => {
                let outcome = rule
                    .evaluate(value)
                    .map_err(|source| ValidationError::custom_rule(name, source))?;
                Ok(match outcome {
                    CustomOutcome::Pass => None,
                    CustomOutcome::Fail => Some(None),
                    CustomOutcome::FailWith(message) => {
                        Some(Some(message).filter(|m| !m.is_empty()))
                    }
                })
            }
            _ => {
                warn!("Validation '{}' not recognized", name);
                report.add_warning(format!("Validation '{}' not recognized", name));
                Ok(None)
            }
        }
    }
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates a field with the built-in rules and today's date.
///
/// When `check_touched` is true, untouched fields are returned cleared
/// without running any rule.
///
/// # Errors
///
/// Returns `ValidationError::CustomRule` when a custom rule fails to
/// evaluate.
pub fn validate(field: &Field, check_touched: bool) -> Result<Field> {
    let context = ValidationContext::new().with_check_touched(check_touched);
    FieldValidator::new().validate(field, &context)
}
