//! Rule registry.
//!
//! Built-in rules are plain functions looked up by name. The registry is
//! data: callers can add rules of their own or override a built-in before
//! handing the registry to a [`FieldValidator`](crate::FieldValidator).
//!
//! A rule may also rewrite the value before checking it. The rewritten
//! value is what every later rule of the same field sees.

use crate::{age, mobile, numeric, text};
use formcheck_core::ValidationContext;
use std::collections::HashMap;

/// A built-in check. Returns `true` when the value violates the rule.
pub type RuleCheck = fn(&str, &ValidationContext) -> bool;

/// Rewrites the working value before a check runs.
pub type ValueRewrite = fn(&str) -> String;

/// A registered rule: its check and an optional value rewrite.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub check: RuleCheck,
    pub rewrite: Option<ValueRewrite>,
}

impl Rule {
    /// A rule that checks the value as it is.
    pub const fn new(check: RuleCheck) -> Self {
        Self {
            check,
            rewrite: None,
        }
    }

    /// A rule that rewrites the value, then checks the rewritten value.
    pub const fn rewriting(rewrite: ValueRewrite, check: RuleCheck) -> Self {
        Self {
            check,
            rewrite: Some(rewrite),
        }
    }
}

/// Names and definitions of the built-in rules.
pub const BUILTIN_RULES: [(&str, Rule); 12] = [
    ("required", Rule::new(text::required)),
    ("email", Rule::new(text::email)),
    ("password", Rule::new(text::password)),
    ("int", Rule::new(numeric::int)),
    ("nonZero", Rule::new(numeric::non_zero)),
    ("bankAccount", Rule::new(text::bank_account)),
    ("bic", Rule::new(text::bic)),
    ("iban", Rule::new(text::iban)),
    ("mobile", Rule::rewriting(mobile::strip_first_space, mobile::mobile)),
    ("over18", Rule::new(age::over18)),
    ("max11chars", Rule::new(text::max11chars)),
    ("max7chars", Rule::new(text::max7chars)),
];

/// Maps rule names to rules.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Rule>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in rule.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (name, rule) in BUILTIN_RULES {
            registry.register_rule(name, rule);
        }
        registry
    }

    /// Registers a plain check under `name`, returning the rule it replaced.
    pub fn register(&mut self, name: impl Into<String>, check: RuleCheck) -> Option<Rule> {
        self.register_rule(name, Rule::new(check))
    }

    /// Registers a rule under `name`, returning the one it replaced.
    pub fn register_rule(&mut self, name: impl Into<String>, rule: Rule) -> Option<Rule> {
        self.rules.insert(name.into(), rule)
    }

    /// Looks up the rule registered under `name`.
    pub fn get(&self, name: &str) -> Option<Rule> {
        self.rules.get(name).copied()
    }

    /// Whether a check is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
