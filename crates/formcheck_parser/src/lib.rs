//! Parser for form field definitions (YAML/TOML/JSON formats).
//!
//! This module loads a field, its value and its ordered rule map, from a
//! definition file into the strongly-typed `Field` structure. Rule order in
//! the file is preserved, since it decides which failure is reported.
//!
//! # Example
//!
//! ```rust
//! use formcheck_parser::parse_yaml;
//!
//! let yaml = r#"
//! value: "abc@def"
//! touched: true
//! validations:
//!   required: true
//!   email: Invalid email
//! "#;
//!
//! let field = parse_yaml(yaml).expect("Failed to parse field");
//! assert_eq!(field.value, "abc@def");
//! assert_eq!(field.validations.unwrap().len(), 2);
//! ```

use formcheck_core::Field;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during field definition parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported field definition file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Parse a field from a YAML string.
pub fn parse_yaml(content: &str) -> Result<Field> {
    let field: Field = serde_yaml_ng::from_str(content)?;
    Ok(field)
}

/// Parse a field from a TOML string.
///
/// # Example
///
/// ```rust
/// use formcheck_parser::parse_toml;
///
/// let toml = r#"
/// value = "12345678"
/// touched = true
///
/// [validations]
/// password = "Weak password"
/// "#;
///
/// let field = parse_toml(toml).unwrap();
/// assert!(field.touched);
/// ```
pub fn parse_toml(content: &str) -> Result<Field> {
    let field: Field =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(field)
}

/// Parse a field from a JSON string.
///
/// JSON uses the same shape a form state container would hold, including
/// `error` and `errorMsg` when present.
pub fn parse_json(content: &str) -> Result<Field> {
    let field: Field = serde_json::from_str(content)?;
    Ok(field)
}

/// Detect the definition format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `FieldFormat::Yaml`
/// * `.toml` → `FieldFormat::Toml`
/// * `.json` → `FieldFormat::Json`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<FieldFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(FieldFormat::Yaml),
        "toml" => Ok(FieldFormat::Toml),
        "json" => Ok(FieldFormat::Json),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a field from a file with automatic format detection.
///
/// # Example
///
/// ```no_run
/// use formcheck_parser::parse_file;
/// use std::path::Path;
///
/// let field = parse_file(Path::new("fields/email.yml")).unwrap();
/// println!("Loaded field with value: {}", field.value);
/// ```
pub fn parse_file(path: &Path) -> Result<Field> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        FieldFormat::Yaml => parse_yaml(&content),
        FieldFormat::Toml => parse_toml(&content),
        FieldFormat::Json => parse_json(&content),
    }
}
