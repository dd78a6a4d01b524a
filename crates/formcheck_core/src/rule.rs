//! Rule specifications attached to a field.
//!
//! A field carries an ordered map from rule name to [`RuleSpec`]. The
//! spec says whether the rule is enabled and, optionally, which message to
//! report when it fails. Custom rules carry their own predicate.

use indexmap::IndexMap;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Error type returned by custom rule predicates.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Ordered map of rule name to rule specification.
///
/// Insertion order is rule precedence: the first failing rule wins.
pub type Validations = IndexMap<String, RuleSpec>;

/// Result of evaluating a custom rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomOutcome {
    /// The value satisfies the rule
    Pass,
    /// The value violates the rule, no message
    Fail,
    /// The value violates the rule, with the message to report
    FailWith(String),
}

impl From<bool> for CustomOutcome {
    fn from(valid: bool) -> Self {
        if valid { Self::Pass } else { Self::Fail }
    }
}

impl From<String> for CustomOutcome {
    fn from(message: String) -> Self {
        Self::FailWith(message)
    }
}

impl From<&str> for CustomOutcome {
    fn from(message: &str) -> Self {
        Self::FailWith(message.to_string())
    }
}

type CustomFn = dyn Fn(&str) -> Result<CustomOutcome, BoxError> + Send + Sync;

/// A caller-supplied validation predicate.
///
/// Cloning shares the underlying closure.
///
/// # Example
///
/// ```rust
/// use formcheck_core::{CustomOutcome, CustomRule};
///
/// let even_length = CustomRule::predicate(|value| value.len() % 2 == 0);
/// assert_eq!(even_length.evaluate("ab").unwrap(), CustomOutcome::Pass);
/// assert_eq!(even_length.evaluate("abc").unwrap(), CustomOutcome::Fail);
/// ```
#[derive(Clone)]
pub struct CustomRule(Arc<CustomFn>);

impl CustomRule {
    /// Wraps a fallible closure. An `Err` is surfaced to the caller of the
    /// validator untouched.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&str) -> Result<CustomOutcome, BoxError> + Send + Sync + 'static,
    {
        Self(Arc::new(check))
    }

    /// Wraps an infallible closure returning anything convertible into a
    /// [`CustomOutcome`] (`bool`, `String`, `&str` or the outcome itself).
    pub fn infallible<F, O>(check: F) -> Self
    where
        F: Fn(&str) -> O + Send + Sync + 'static,
        O: Into<CustomOutcome>,
    {
        Self::new(move |value| Ok(check(value).into()))
    }

    /// Wraps a boolean predicate: `true` passes, `false` fails without a message.
    pub fn predicate<F>(check: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::infallible(check)
    }

    /// Runs the rule against a value.
    pub fn evaluate(&self, value: &str) -> Result<CustomOutcome, BoxError> {
        (self.0)(value)
    }
}

impl fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomRule(<fn>)")
    }
}

impl PartialEq for CustomRule {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Configuration attached to a rule name.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RuleSpec {
    /// Rule is present but switched off
    #[default]
    Disabled,
    /// Rule is on, failures carry no message
    Enabled,
    /// Rule is on, failures report this message
    Message(String),
    /// Caller-supplied predicate
    Custom(CustomRule),
}

impl RuleSpec {
    /// Creates a message spec. An empty message disables the rule.
    pub fn message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            Self::Disabled
        } else {
            Self::Message(message)
        }
    }

    /// Creates a custom spec from an infallible closure.
    pub fn custom<F, O>(check: F) -> Self
    where
        F: Fn(&str) -> O + Send + Sync + 'static,
        O: Into<CustomOutcome>,
    {
        Self::Custom(CustomRule::infallible(check))
    }

    /// Whether the rule takes part in evaluation.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Override message configured on the spec itself.
    pub fn override_message(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(message),
            _ => None,
        }
    }

    /// The custom predicate, if this is a custom spec.
    pub fn as_custom(&self) -> Option<&CustomRule> {
        match self {
            Self::Custom(rule) => Some(rule),
            _ => None,
        }
    }
}

impl From<bool> for RuleSpec {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

impl From<&str> for RuleSpec {
    fn from(message: &str) -> Self {
        Self::message(message)
    }
}

impl From<String> for RuleSpec {
    fn from(message: String) -> Self {
        Self::message(message)
    }
}

impl From<CustomRule> for RuleSpec {
    fn from(rule: CustomRule) -> Self {
        Self::Custom(rule)
    }
}

impl Serialize for RuleSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Disabled => serializer.serialize_bool(false),
            Self::Enabled => serializer.serialize_bool(true),
            Self::Message(message) => serializer.serialize_str(message),
            Self::Custom(_) => Err(ser::Error::custom(
                "custom rules cannot be serialized",
            )),
        }
    }
}

/// Accepts `true`, a string, or any other scalar (treated as disabled).
/// Maps and sequences are rejected.
struct RuleSpecVisitor;

impl<'de> Visitor<'de> for RuleSpecVisitor {
    type Value = RuleSpec;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean, a message string, or null")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<RuleSpec, E> {
        Ok(RuleSpec::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RuleSpec, E> {
        Ok(RuleSpec::message(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<RuleSpec, E> {
        Ok(RuleSpec::message(v))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<RuleSpec, E> {
        Ok(RuleSpec::Disabled)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<RuleSpec, E> {
        Ok(RuleSpec::Disabled)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<RuleSpec, E> {
        Ok(RuleSpec::Disabled)
    }

    fn visit_unit<E: de::Error>(self) -> Result<RuleSpec, E> {
        Ok(RuleSpec::Disabled)
    }

    fn visit_none<E: de::Error>(self) -> Result<RuleSpec, E> {
        Ok(RuleSpec::Disabled)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<RuleSpec, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _: A) -> Result<RuleSpec, A::Error> {
        Err(de::Error::invalid_type(de::Unexpected::Seq, &self))
    }

    fn visit_map<A: MapAccess<'de>>(self, _: A) -> Result<RuleSpec, A::Error> {
        Err(de::Error::invalid_type(de::Unexpected::Map, &self))
    }
}

impl<'de> Deserialize<'de> for RuleSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RuleSpecVisitor)
    }
}
