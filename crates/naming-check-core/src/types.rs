//! Core types for warnings and scan results.

use crate::rule::{Language, RuleId};
use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message.
    Info,
    /// Style problem that should be addressed.
    #[serde(alias = "warn")]
    Warning,
    /// Style problem that must be fixed.
    Error,
}

impl Severity {
    /// Upper-case tag used in report lines (`WARN`, `ERROR`, `INFO`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARN",
            Self::Error => "ERROR",
        }
    }

}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A style warning found on one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Line number (1-indexed).
    pub line: usize,
    /// Rule that produced the warning.
    pub rule: RuleId,
    /// Severity of this warning.
    pub severity: Severity,
    /// Fixed catalog message of the rule.
    pub message: String,
}

impl Warning {
    /// Creates a warning for `rule` at `line` with the rule's default severity.
    #[must_use]
    pub fn new(line: usize, rule: RuleId) -> Self {
        Self {
            line,
            rule,
            severity: rule.default_severity(),
            message: rule.message().to_string(),
        }
    }

    /// Overrides the severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

/// Renders `"WARN: [<line>] <message>"`.
impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: [{}] {}", self.severity.tag(), self.line, self.message)
    }
}

/// Warning rendered as a miette diagnostic over the file contents.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct WarningDiagnostic {
    message: String,
    #[source_code]
    source_code: NamedSource<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
    #[help]
    help: Option<String>,
}

impl WarningDiagnostic {
    /// Builds a diagnostic whose label covers the warning's line in `content`.
    #[must_use]
    pub fn new(path: &std::path::Path, content: &str, warning: &Warning) -> Self {
        let (offset, length) = line_span(content, warning.line);
        Self {
            message: format!("[{}] {}", warning.rule.code(), warning.message),
            source_code: NamedSource::new(path.display().to_string(), content.to_string()),
            span: SourceSpan::from((offset, length)),
            label_message: warning.rule.name().to_string(),
            help: Some(warning.rule.description().to_string()),
        }
    }
}

/// Byte offset and length of the trimmed text of a 1-indexed line.
fn line_span(content: &str, line: usize) -> (usize, usize) {
    let mut offset = 0;
    for (i, text) in content.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            let body = text.trim_end_matches(['\n', '\r']);
            let indent = body.len() - body.trim_start().len();
            return (offset + indent, body.trim().len());
        }
        offset += text.len();
    }
    (offset, 0)
}

/// Warnings found in one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// Path of the checked file.
    pub path: PathBuf,
    /// Language the file was checked as.
    pub language: Language,
    /// Warnings in discovery order.
    pub warnings: Vec<Warning>,
}

impl FileReport {
    /// Creates a report.
    #[must_use]
    pub fn new(path: PathBuf, language: Language, warnings: Vec<Warning>) -> Self {
        Self {
            path,
            language,
            warnings,
        }
    }

    /// Report lines in the `"WARN: [<line>] <message>"` form.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

/// Result of checking a set of files.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Per-file results, in path order.
    pub files: Vec<FileReport>,
}

impl ScanReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files checked.
    #[must_use]
    pub fn files_checked(&self) -> usize {
        self.files.len()
    }

    /// Total number of warnings across all files.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.files.iter().map(|f| f.warnings.len()).sum()
    }

    /// Iterates over every warning with the file it belongs to.
    pub fn warnings(&self) -> impl Iterator<Item = (&FileReport, &Warning)> {
        self.files
            .iter()
            .flat_map(|f| f.warnings.iter().map(move |w| (f, w)))
    }

    /// Counts warnings by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |severity| {
            self.warnings()
                .filter(|(_, w)| w.severity == severity)
                .count()
        };
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// Checks if any warning meets or exceeds the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.warnings().any(|(_, w)| w.severity >= severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(severities: &[Severity]) -> ScanReport {
        let warnings = severities
            .iter()
            .enumerate()
            .map(|(i, s)| Warning::new(i + 1, RuleId::VariableMinLength).with_severity(*s))
            .collect();
        ScanReport {
            files: vec![FileReport::new(
                PathBuf::from("main.c"),
                Language::C,
                warnings,
            )],
        }
    }

    #[test]
    fn warning_display_matches_report_format() {
        let w = Warning::new(12, RuleId::FunctionLowerCase);
        assert_eq!(
            w.to_string(),
            "WARN: [12] Functions names should be declared in snake case."
        );
    }

    #[test]
    fn overridden_severity_changes_tag() {
        let w = Warning::new(3, RuleId::ConstantUpperCase).with_severity(Severity::Error);
        assert_eq!(
            w.to_string(),
            "ERROR: [3] All constants should be declared in uppercase."
        );
    }

    #[test]
    fn has_violations_at_threshold() {
        let report = report_with(&[Severity::Warning, Severity::Info]);
        assert!(!report.has_violations_at(Severity::Error));
        assert!(report.has_violations_at(Severity::Warning));
        assert_eq!(report.count_by_severity(), (0, 1, 1));
        assert_eq!(report.warning_count(), 2);
    }

    #[test]
    fn line_span_skips_indentation() {
        let content = "int a;\n    int B;\n";
        assert_eq!(line_span(content, 1), (0, 6));
        assert_eq!(line_span(content, 2), (11, 6));
    }

    #[test]
    fn warning_serializes_rule_name() {
        let json = serde_json::to_string(&Warning::new(1, RuleId::EnumPascalCase))
            .expect("serialize");
        insta::assert_snapshot!(
            json,
            @r#"{"line":1,"rule":"enum-pascal-case","severity":"warning","message":"Enums declaration should be in pascal case."}"#
        );
    }
}
