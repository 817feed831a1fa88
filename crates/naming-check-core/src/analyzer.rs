//! Analyzer that discovers files, dispatches them to a ruleset and
//! collects the reports.

use crate::config::Config;
use crate::rule::{Language, RuleFilter, Ruleset};
use crate::source::SourceLine;
use crate::types::{FileReport, ScanReport, Warning};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading a file or directory.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// File whose extension selects no ruleset.
    #[error("Unsupported file type: {path} (expected a .c, .h or .py file)")]
    UnsupportedFile {
        /// Path of the rejected file.
        path: PathBuf,
    },

    /// Directory walk error.
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rulesets: Vec<Ruleset>,
    exclude_patterns: Vec<String>,
    only: Option<RuleFilter>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a language ruleset. A later ruleset for the same
    /// language replaces the earlier one.
    #[must_use]
    pub fn ruleset(mut self, ruleset: Ruleset) -> Self {
        self.rulesets.retain(|r| r.language != ruleset.language);
        self.rulesets.push(ruleset);
        self
    }

    /// Registers several rulesets.
    #[must_use]
    pub fn rulesets<I: IntoIterator<Item = Ruleset>>(self, rulesets: I) -> Self {
        rulesets.into_iter().fold(self, Self::ruleset)
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Restricts the run to the given rules (on top of configuration).
    #[must_use]
    pub fn only_rules(mut self, filter: RuleFilter) -> Self {
        self.only = Some(filter);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if an exclude pattern is not a valid glob.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.clone());
        let excludes = exclude_patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        let mut filter = config.rule_filter();
        if let Some(only) = &self.only {
            filter = filter.intersect(only);
        }

        Ok(Analyzer {
            rulesets: self.rulesets,
            excludes,
            filter,
            config,
        })
    }
}

/// The main analyzer that orchestrates per-file scans.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    rulesets: Vec<Ruleset>,
    excludes: Vec<glob::Pattern>,
    filter: RuleFilter,
    config: Config,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the configuration in effect.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the rules every scan evaluates.
    #[must_use]
    pub fn rule_filter(&self) -> &RuleFilter {
        &self.filter
    }

    /// Returns the ruleset registered for `language`.
    #[must_use]
    pub fn ruleset_for(&self, language: Language) -> Option<&Ruleset> {
        self.rulesets.iter().find(|r| r.language == language)
    }

    fn language_of(&self, path: &Path) -> Option<Language> {
        Language::from_path(path).filter(|l| self.ruleset_for(*l).is_some())
    }

    /// Checks already loaded source text. The ruleset is chosen by
    /// the extension of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::UnsupportedFile`] if no ruleset handles
    /// the file's extension.
    pub fn check_source(&self, path: &Path, content: &str) -> Result<FileReport, AnalyzerError> {
        let (language, ruleset) = self
            .language_of(path)
            .and_then(|l| self.ruleset_for(l).map(|r| (l, r)))
            .ok_or_else(|| AnalyzerError::UnsupportedFile {
                path: path.to_path_buf(),
            })?;

        debug!("Checking {} as {}", path.display(), language);
        let lines = SourceLine::from_source(content);
        let warnings = ruleset.scan(&lines, &self.filter);
        let warnings = self.apply_severity_override(warnings);

        Ok(FileReport::new(path.to_path_buf(), language, warnings))
    }

    /// Reads and checks a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or has an unsupported
    /// extension.
    pub fn check_file(&self, path: &Path) -> Result<FileReport, AnalyzerError> {
        if self.language_of(path).is_none() {
            return Err(AnalyzerError::UnsupportedFile {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| AnalyzerError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.check_source(path, &content)
    }

    /// Checks files and directories.
    ///
    /// Files are checked directly; directories are walked for supported
    /// sources. Results are ordered by path.
    ///
    /// # Errors
    ///
    /// Returns an error if a path is missing or unreadable, or if an
    /// explicitly named file has an unsupported extension.
    pub fn check_paths(&self, paths: &[PathBuf]) -> Result<ScanReport, AnalyzerError> {
        let mut files = Vec::new();
        for path in paths {
            if path.is_dir() {
                files.extend(self.discover_files(path)?);
            } else {
                files.push(path.clone());
            }
        }
        files.sort();
        files.dedup();

        info!("Found {} files to check", files.len());

        let mut report = ScanReport::new();
        for file in &files {
            report.files.push(self.check_file(file)?);
        }

        info!(
            "Check complete: {} warnings in {} files",
            report.warning_count(),
            report.files_checked()
        );

        Ok(report)
    }

    /// Discovers supported source files below `root`.
    fn discover_files(&self, root: &Path) -> Result<Vec<PathBuf>, AnalyzerError> {
        let respect = self.config.analyzer.respect_gitignore;
        let walker = ignore::WalkBuilder::new(root)
            .git_ignore(respect)
            .git_exclude(respect)
            .git_global(respect)
            .require_git(false)
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.path();
            if self.language_of(path).is_none() {
                continue;
            }
            if self.should_exclude(path, root) {
                debug!("Excluding: {}", path.display());
                continue;
            }
            files.push(path.to_path_buf());
        }

        Ok(files)
    }

    /// Checks if a path matches an exclude pattern, either as given or
    /// relative to the walk root.
    fn should_exclude(&self, path: &Path, root: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        self.excludes
            .iter()
            .any(|p| p.matches_path(path) || p.matches_path(relative))
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(&self, mut warnings: Vec<Warning>) -> Vec<Warning> {
        for w in &mut warnings {
            if let Some(severity) = self.config.rule_severity(w.rule) {
                w.severity = severity;
            }
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleId;
    use crate::types::Severity;

    /// Flags every line containing "bad" under the struct rule.
    fn flag_bad(lines: &[SourceLine<'_>], filter: &RuleFilter) -> Vec<Warning> {
        lines
            .iter()
            .filter(|l| filter.is_enabled(RuleId::StructLowerCase) && l.text.contains("bad"))
            .map(|l| Warning::new(l.number, RuleId::StructLowerCase))
            .collect()
    }

    fn analyzer(config: Config) -> Analyzer {
        Analyzer::builder()
            .ruleset(Ruleset::new(Language::C, flag_bad))
            .config(config)
            .build()
            .expect("Failed to build analyzer")
    }

    #[test]
    fn test_check_source_dispatches_by_extension() {
        let report = analyzer(Config::default())
            .check_source(Path::new("a.c"), "ok\nbad\n")
            .expect("supported");
        assert_eq!(report.language, Language::C);
        assert_eq!(
            report.lines(),
            vec!["WARN: [2] Structs should be declared in lower case."]
        );
    }

    #[test]
    fn test_unregistered_language_is_unsupported() {
        let err = analyzer(Config::default())
            .check_source(Path::new("a.py"), "bad")
            .unwrap_err();
        assert!(matches!(err, AnalyzerError::UnsupportedFile { .. }));
    }

    #[test]
    fn test_severity_override_and_disable() {
        let config = Config::parse("[rules.struct-lower-case]\nseverity = \"error\"\n")
            .expect("valid config");
        let report = analyzer(config)
            .check_source(Path::new("a.c"), "bad")
            .expect("supported");
        assert_eq!(report.warnings[0].severity, Severity::Error);

        let config =
            Config::parse("[rules.NC001]\nenabled = false\n").expect("valid config");
        let report = analyzer(config)
            .check_source(Path::new("a.c"), "bad")
            .expect("supported");
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_only_rules_narrows_filter() {
        let analyzer = Analyzer::builder()
            .ruleset(Ruleset::new(Language::C, flag_bad))
            .only_rules(RuleFilter::only([RuleId::EnumPascalCase]))
            .build()
            .expect("Failed to build analyzer");
        assert!(!analyzer.rule_filter().is_enabled(RuleId::StructLowerCase));
        assert!(analyzer.rule_filter().is_enabled(RuleId::EnumPascalCase));
    }

    #[test]
    fn test_invalid_exclude_pattern() {
        let result = Analyzer::builder().exclude("[").build();
        assert!(matches!(result, Err(AnalyzerError::Glob(_))));
    }

    #[test]
    fn test_exclude_patterns() {
        let analyzer = Analyzer::builder()
            .exclude("**/vendor/**")
            .exclude("generated_*.c")
            .build()
            .expect("Failed to build analyzer");
        let root = Path::new("/proj");

        assert!(analyzer.should_exclude(Path::new("/proj/vendor/lib.c"), root));
        assert!(analyzer.should_exclude(Path::new("/proj/generated_tables.c"), root));
        assert!(!analyzer.should_exclude(Path::new("/proj/src/main.c"), root));
    }
}
