//! # Formcheck Validator
//!
//! Rule evaluation engine for form fields. This crate checks one field at a
//! time against its ordered rule map and returns the replacement record:
//!
//! - Built-in rules looked up by name in a [`RuleRegistry`]
//! - Custom rules carried on the field itself
//! - First-failure short circuit, in rule order
//! - Diagnostics for unrecognized rule names
//!
//! ## Example
//!
//! ```rust
//! use formcheck_core::FieldBuilder;
//! use formcheck_validator::validate;
//!
//! let field = FieldBuilder::new("")
//!     .touched(true)
//!     .message("required", "This field is required.")
//!     .build();
//!
//! let validated = validate(&field, true).unwrap();
//!
//! assert!(validated.has_error());
//! assert_eq!(validated.error_msg.as_deref(), Some("This field is required."));
//! assert!(!field.has_error());
//! ```

pub mod age;
mod engine;
mod error;
pub mod mobile;
pub mod numeric;
mod rules;
pub mod text;

pub use engine::*;
pub use error::*;
pub use rules::*;
