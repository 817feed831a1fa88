//! # naming-check-core
//!
//! Core framework for the naming-check lexical style checker.
//!
//! The checker never builds a syntax tree: each language ruleset classifies
//! physical lines with heuristics and applies a catalog of independent
//! naming rules to what it recognized. This crate provides the pieces the
//! rulesets and the CLI share:
//!
//! - [`SourceLine`] for numbered input lines
//! - [`RuleId`] with the fixed rule catalog (names, codes, messages)
//! - [`Ruleset`] bundling a language with its scan function
//! - [`Warning`] and [`ScanReport`] for findings
//! - [`Analyzer`] for file discovery, extension dispatch and configuration
//!
//! ## Example
//!
//! ```ignore
//! use naming_check_core::{Analyzer, Config};
//!
//! let analyzer = Analyzer::builder()
//!     .rulesets(naming_check_rules::builtin_rulesets())
//!     .config(Config::default())
//!     .build()?;
//!
//! let report = analyzer.check_paths(&["src".into()])?;
//! for (file, warning) in report.warnings() {
//!     println!("{}: {warning}", file.path.display());
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod rule;
mod source;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use rule::{Language, RuleFilter, RuleId, Ruleset, ScanFn};
pub use source::SourceLine;
pub use types::{FileReport, ScanReport, Severity, Warning, WarningDiagnostic};
