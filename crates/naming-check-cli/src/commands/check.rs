//! Check command implementation.

use anyhow::{Context, Result};
use naming_check_core::{Analyzer, Config, RuleFilter, RuleId};
use naming_check_rules::builtin_rulesets;
use std::path::{Path, PathBuf};

use crate::config_resolver::{self, ConfigSource};
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    paths: &[PathBuf],
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    explicit_config: Option<&Path>,
) -> Result<()> {
    let source = config_resolver::resolve(project_dir(paths), explicit_config);
    let config = load_config(&source)?;
    let fail_on = config.fail_on();

    let mut builder = Analyzer::builder()
        .rulesets(builtin_rulesets())
        .excludes(exclude)
        .config(config);

    if let Some(filter) = rules_filter {
        let names: Vec<&str> = filter.split(',').map(str::trim).collect();
        builder = builder.only_rules(parse_rule_filter(&names));
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!(
        "Checking {} path(s) with {} rule(s)",
        paths.len(),
        analyzer.rule_filter().iter().count()
    );

    let report = analyzer.check_paths(paths).context("Check failed")?;

    super::output::print(&report, format)?;

    if report.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}

/// Directory searched for a project config: the first directory argument,
/// else the parent of the first file, else the working directory.
fn project_dir(paths: &[PathBuf]) -> &Path {
    paths
        .iter()
        .find(|p| p.is_dir())
        .map(PathBuf::as_path)
        .or_else(|| paths.first().and_then(|p| p.parent()))
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

fn parse_rule_filter(names: &[&str]) -> RuleFilter {
    let mut rules = Vec::new();
    for name in names.iter().filter(|n| !n.is_empty()) {
        match RuleId::parse(name) {
            Some(rule) => rules.push(rule),
            None => tracing::warn!("Unknown rule: {}", name),
        }
    }
    RuleFilter::only(rules)
}
