//! Python ruleset.
//!
//! Same pipeline shape as the C ruleset with a much smaller classifier:
//! assignment lines and `def` lines, each recognized by one pattern.

use naming_check_core::{Language, RuleFilter, RuleId, Ruleset, SourceLine, Warning};
use regex::Regex;
use std::sync::LazyLock;

/// The Python strategy bundle.
pub const PYTHON_RULESET: Ruleset = Ruleset::new(Language::Python, scan);

struct Patterns {
    assignment: Regex,
    definition: Regex,
    snake_case: Regex,
}

#[allow(clippy::expect_used)] // literal patterns
static PATTERNS: LazyLock<Patterns> = LazyLock::new(|| Patterns {
    assignment: Regex::new(r"^([a-zA-Z_][a-zA-Z0-9_]*)\s*=\s*[^=]").expect("Invalid regex"),
    definition: Regex::new(r"^def\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*\(.*\)\s*:")
        .expect("Invalid regex"),
    snake_case: Regex::new(r"^[a-z]+(_[a-z0-9]+)*$").expect("Invalid regex"),
});

/// Stateful comment filter: `#` lines, docstring delimiter lines and
/// everything between two delimiter lines.
#[derive(Debug, Clone, Default)]
pub struct CommentFilter {
    in_docstring: bool,
}

impl CommentFilter {
    /// Creates a filter outside any docstring.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while between docstring delimiters.
    #[must_use]
    pub fn in_docstring(&self) -> bool {
        self.in_docstring
    }

    /// Classifies `line`, toggling the docstring state on delimiter lines.
    pub fn is_comment(&mut self, line: &SourceLine<'_>) -> bool {
        let code = line.code();
        if code.starts_with('#') {
            return true;
        }
        if code.contains("\"\"\"") || code.contains("'''") {
            self.in_docstring = !self.in_docstring;
            return true;
        }
        self.in_docstring
    }
}

/// Target of a simple assignment (`name = value`), not a comparison.
#[must_use]
pub fn assigned_name<'a>(line: &SourceLine<'a>) -> Option<&'a str> {
    PATTERNS
        .assignment
        .captures(line.code())
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Name of a `def name(...):` line.
#[must_use]
pub fn defined_function<'a>(line: &SourceLine<'a>) -> Option<&'a str> {
    PATTERNS
        .definition
        .captures(line.code())
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Single-character names comply only on lines starting with `for`.
#[must_use]
pub fn name_longer_than_one(name: &str, line: &SourceLine<'_>) -> bool {
    name.chars().count() != 1 || line.code().starts_with("for")
}

/// Name matches `snake_case`.
#[must_use]
pub fn is_snake_case(name: &str) -> bool {
    PATTERNS.snake_case.is_match(name)
}

/// Scans one file's lines with a fresh comment filter.
#[must_use]
pub fn scan(lines: &[SourceLine<'_>], filter: &RuleFilter) -> Vec<Warning> {
    let mut comments = CommentFilter::new();
    let mut warnings = Vec::new();
    let mut check = |line: usize, rule: RuleId, passes: bool| {
        if filter.is_enabled(rule) && !passes {
            warnings.push(Warning::new(line, rule));
        }
    };

    for line in lines {
        if comments.is_comment(line) {
            continue;
        }
        if let Some(name) = assigned_name(line) {
            check(
                line.number,
                RuleId::PyVariableSnakeCase,
                is_snake_case(name),
            );
            check(
                line.number,
                RuleId::PyVariableMinLength,
                name_longer_than_one(name, line),
            );
        }
        if let Some(name) = defined_function(line) {
            check(line.number, RuleId::PyFunctionSnakeCase, is_snake_case(name));
        }
    }
    warnings
}

/// Scans newline-stripped lines with the default rules and returns the
/// `"WARN: [<line>] <message>"` report lines.
#[must_use]
pub fn scan_lines(lines: &[&str]) -> Vec<String> {
    let lines = SourceLine::number(lines.iter().copied());
    scan(&lines, &RuleFilter::defaults())
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> SourceLine<'_> {
        SourceLine::new(1, text)
    }

    #[test]
    fn assignment_excludes_comparisons() {
        assert_eq!(assigned_name(&line("x = 1")), Some("x"));
        assert_eq!(assigned_name(&line("    total=x+1")), Some("total"));
        assert_eq!(assigned_name(&line("x == 1")), None);
        assert_eq!(assigned_name(&line("x += 1")), None);
        assert_eq!(assigned_name(&line("obj.x = 1")), None);
    }

    #[test]
    fn definitions() {
        assert_eq!(defined_function(&line("def parse_line(text):")), Some("parse_line"));
        assert_eq!(defined_function(&line("    def Run(self) :")), Some("Run"));
        assert_eq!(defined_function(&line("def broken(")), None);
    }

    #[test]
    fn docstrings_toggle() {
        let mut filter = CommentFilter::new();
        assert!(filter.is_comment(&line("# x = 1")));
        assert!(filter.is_comment(&line("\"\"\"")));
        assert!(filter.in_docstring());
        assert!(filter.is_comment(&line("x = 1")));
        assert!(filter.is_comment(&line("'''")));
        assert!(!filter.in_docstring());
        assert!(!filter.is_comment(&line("x = 1")));
        assert!(filter.is_comment(&line("\"\"\"One-line docstring.\"\"\"")));
        assert!(filter.in_docstring());
    }

    #[test]
    fn only_length_rule_is_active_by_default() {
        assert_eq!(
            scan_lines(&["x = 1", "itemCount = 2", "def Run():", "ab = 3"]),
            vec!["WARN: [1] Variables names should have length greater than one."]
        );
    }

    #[test]
    fn for_lines_are_exempt() {
        assert!(name_longer_than_one("i", &line("for_i = 0")));
        assert!(!name_longer_than_one("i", &line("i = 0")));
        assert!(name_longer_than_one("ab", &line("ab = 0")));
    }

    #[test]
    fn all_rules() {
        let lines = SourceLine::number(["itemCount = 2", "def Run():", "y = 1"]);
        let found: Vec<_> = scan(&lines, &RuleFilter::all())
            .into_iter()
            .map(|w| (w.line, w.rule))
            .collect();
        assert_eq!(
            found,
            vec![
                (1, RuleId::PyVariableSnakeCase),
                (2, RuleId::PyFunctionSnakeCase),
                (3, RuleId::PyVariableMinLength),
            ]
        );
    }
}
