//! # Formcheck Core
//!
//! Core data structures and types for validating form fields.
//!
//! This crate provides the building blocks shared by the parser, the
//! validator and the CLI: the field record, the rule specifications
//! attached to it, and the context and report types of a validation run.
//!
//! ## Key Concepts
//!
//! - **Field**: a form value plus its touched flag, rules, and error state
//! - **Rule spec**: the configuration attached to a rule name (on, off,
//!   override message, or custom predicate)
//! - **Validations**: the ordered rule map; order is precedence
//!
//! ## Example
//!
//! ```rust
//! use formcheck_core::{FieldBuilder, RuleSpec};
//!
//! let field = FieldBuilder::new("abc@def")
//!     .touched(true)
//!     .message("email", "Invalid email")
//!     .build();
//!
//! let validations = field.validations.as_ref().unwrap();
//! assert_eq!(validations["email"], RuleSpec::Message("Invalid email".to_string()));
//! ```

pub mod builder;
pub mod field;
pub mod rule;
pub mod validator;

pub use builder::*;
pub use field::*;
pub use rule::*;
pub use validator::*;
