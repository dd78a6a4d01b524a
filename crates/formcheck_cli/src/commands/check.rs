use anyhow::{Context, Result};
use formcheck_core::RuleSpec;
use formcheck_parser::parse_file;
use formcheck_validator::RuleRegistry;
use serde_json::json;
use std::path::Path;
use tracing::info;

use crate::output;

/// How a rule entry will be treated by the validator.
fn rule_status(name: &str, spec: &RuleSpec, registry: &RuleRegistry) -> &'static str {
    match spec {
        RuleSpec::Disabled => "disabled",
        _ if registry.contains(name) => "built-in",
        RuleSpec::Custom(_) => "custom",
        _ => "unknown",
    }
}

pub fn execute(field_path: &str, format: &str) -> Result<()> {
    info!("Checking field definition: {}", field_path);

    // Parse the field definition
    let path = Path::new(field_path);
    let field = parse_file(path)
        .with_context(|| format!("Failed to parse field file: {}", field_path))?;

    let registry = RuleRegistry::builtin();
    let rules: Vec<(&str, &RuleSpec, &str)> = field
        .validations
        .iter()
        .flatten()
        .map(|(name, spec)| (name.as_str(), spec, rule_status(name, spec, &registry)))
        .collect();

    if format == "json" {
        let output = json!({
            "value": field.value,
            "touched": field.touched,
            "rules": rules
                .iter()
                .map(|(name, spec, status)| json!({
                    "name": name,
                    "status": status,
                    "message": spec.override_message(),
                }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    output::print_success("Field definition is valid");

    println!("\nField Summary:");
    println!("  Value:   {:?}", field.value);
    println!("  Touched: {}", field.touched);
    println!("  Rules:   {}", rules.len());

    if !rules.is_empty() {
        println!("\nRules (in evaluation order):");
        for (i, (name, spec, status)) in rules.iter().enumerate() {
            match spec.override_message() {
                Some(message) => println!("  {}. {} [{}] \"{}\"", i + 1, name, status, message),
                None => println!("  {}. {} [{}]", i + 1, name, status),
            }
        }
    }

    let unknown = rules.iter().filter(|(_, _, s)| *s == "unknown").count();
    if unknown > 0 {
        output::print_warning(&format!(
            "{} rule(s) not recognized; they will be skipped",
            unknown
        ));
    }

    Ok(())
}
