use anyhow::{Context, Result};
use chrono::NaiveDate;
use formcheck_core::ValidationContext;
use formcheck_parser::parse_file;
use formcheck_validator::FieldValidator;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(
    field_path: &str,
    ignore_touched: bool,
    today: Option<NaiveDate>,
    format: &str,
) -> Result<()> {
    info!("Validating field: {}", field_path);
    info!("Check touched: {}", !ignore_touched);

    // Parse the field definition
    let path = Path::new(field_path);
    let field = parse_file(path)
        .with_context(|| format!("Failed to parse field file: {}", field_path))?;

    let mut context = ValidationContext::new().with_check_touched(!ignore_touched);
    if let Some(today) = today {
        info!("Reference date: {}", today);
        context = context.with_today(today);
    }

    let report = FieldValidator::new()
        .validate_with_report(&field, &context)
        .with_context(|| format!("Failed to validate field: {}", field_path))?;

    output::print_field_report(&report, format)?;

    if !report.passed() {
        std::process::exit(1);
    }

    Ok(())
}
