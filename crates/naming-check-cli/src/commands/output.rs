//! Shared output formatting for check results.

use anyhow::{Context, Result};
use naming_check_core::{FileReport, ScanReport, WarningDiagnostic};

use crate::OutputFormat;

/// Print check results in the specified format.
pub fn print(report: &ScanReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Compact => print_compact(report),
        OutputFormat::Json => return print_json(report),
        OutputFormat::Pretty => return print_pretty(report),
    }
    Ok(())
}

fn print_text(report: &ScanReport) {
    let with_headers = report.files_checked() > 1;
    for file in reported_files(report) {
        if with_headers {
            println!("{}:", file.path.display());
        }
        for line in file.lines() {
            println!("{line}");
        }
    }
}

fn print_compact(report: &ScanReport) {
    for (file, warning) in report.warnings() {
        println!(
            "{}:{}: {} [{}] {}",
            file.path.display(),
            warning.line,
            warning.severity.tag(),
            warning.rule.code(),
            warning.message,
        );
    }
}

fn print_json(report: &ScanReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}

fn print_pretty(report: &ScanReport) -> Result<()> {
    for file in reported_files(report) {
        let content = std::fs::read_to_string(&file.path)
            .with_context(|| format!("Failed to read {}", file.path.display()))?;
        for warning in &file.warnings {
            let diagnostic = WarningDiagnostic::new(&file.path, &content, warning);
            println!("{:?}", miette::Report::new(diagnostic));
        }
    }

    let (errors, warnings, infos) = report.count_by_severity();
    println!(
        "Found {} error(s), {} warning(s), {} info(s) in {} file(s)",
        errors,
        warnings,
        infos,
        report.files_checked()
    );
    Ok(())
}

fn reported_files(report: &ScanReport) -> impl Iterator<Item = &FileReport> {
    report.files.iter().filter(|f| !f.warnings.is_empty())
}
