use anyhow::Result;
use colored::*;
use formcheck_core::FieldReport;
use serde_json::json;

pub fn print_field_report(report: &FieldReport, format: &str) -> Result<()> {
    match format {
        "json" => print_json_report(report),
        _ => {
            print_text_report(report);
            Ok(())
        }
    }
}

fn print_text_report(report: &FieldReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
        if let Some(rule) = &report.failed_rule {
            println!("  Failed rule: {}", rule.red());
        }
        match &report.field.error_msg {
            Some(message) => println!("  Message:     {}", message.red()),
            None => println!("  Message:     {}", "(none)".dimmed()),
        }
    }

    if !report.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for (i, warning) in report.warnings.iter().enumerate() {
            println!("  {}. {}", i + 1, warning.yellow());
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Value:           {:?}", report.field.value);
    println!("  Touched:         {}", report.field.touched);
    println!("  Rules evaluated: {}", report.rules_evaluated);
    println!("  Total warnings:  {}", report.warnings.len());
    println!("{}", "═".repeat(60));
}

fn print_json_report(report: &FieldReport) -> Result<()> {
    let output = json!({
        "passed": report.passed(),
        "field": serde_json::to_value(&report.field)?,
        "failed_rule": report.failed_rule,
        "warnings": report.warnings,
        "summary": {
            "rules_evaluated": report.rules_evaluated,
            "warning_count": report.warnings.len(),
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message.yellow());
}
