//! C ruleset: comment filter, line classifier, struct context tracker and
//! rule catalog, driven one line at a time.
//!
//! Per non-comment line the driver evaluates, in order: the typedef body
//! close, enum, constant, struct declaration, function declaration and
//! variable declaration. Categories are independent; every match adds its
//! own warnings.

pub mod classify;
pub mod comment;
pub mod lexicon;
pub mod rules;
pub mod structs;

use classify::{
    is_constant_definition, is_enum_line, is_function_declaration, is_struct_declaration,
    is_variable_declaration, struct_head, StructHead,
};
use naming_check_core::{Language, RuleFilter, RuleId, Ruleset, SourceLine, Warning};
use structs::{StructTracker, StructTypeRegistry};
use tracing::debug;

/// The C strategy bundle.
pub const C_RULESET: Ruleset = Ruleset::new(Language::C, scan);

/// Mutable state of one file scan.
#[derive(Debug, Default)]
pub struct ScanState {
    line: usize,
    tracker: StructTracker,
    registry: StructTypeRegistry,
    warnings: Vec<Warning>,
}

impl ScanState {
    /// Fresh state for a new file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Struct names registered so far.
    #[must_use]
    pub fn registry(&self) -> &StructTypeRegistry {
        &self.registry
    }

    /// Whether a typedef struct body is open.
    #[must_use]
    pub fn inside_struct_body(&self) -> bool {
        self.tracker.is_watching()
    }

    /// Consumes the state, yielding the final report.
    #[must_use]
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

/// Line-by-line C scanner.
#[derive(Debug)]
pub struct CScanner<'f> {
    filter: &'f RuleFilter,
    state: ScanState,
}

impl<'f> CScanner<'f> {
    /// Creates a scanner evaluating the rules in `filter`.
    #[must_use]
    pub fn new(filter: &'f RuleFilter) -> Self {
        Self {
            filter,
            state: ScanState::new(),
        }
    }

    /// Current scan state.
    #[must_use]
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Processes the next line.
    pub fn feed(&mut self, line: &SourceLine<'_>) {
        self.state.line = line.number;

        if comment::is_comment(line) {
            return;
        }
        if self.state.tracker.is_watching() {
            self.typedef_close(line);
        }
        if is_enum_line(line) {
            self.check(RuleId::EnumPascalCase, || rules::enum_is_pascal_case(line));
        }
        if is_constant_definition(line) {
            self.check(RuleId::ConstantUpperCase, || {
                rules::constant_is_upper_case(line)
            });
        }
        if is_struct_declaration(line) {
            self.struct_declaration(line);
        }
        if is_function_declaration(line) {
            self.check(RuleId::FunctionLowerCase, || {
                rules::function_name_is_lower_case(line)
            });
        }
        if is_variable_declaration(line, &self.state.registry) {
            self.variable_declaration(line);
        }
    }

    /// Finishes the scan and returns the warnings.
    #[must_use]
    pub fn finish(self) -> Vec<Warning> {
        self.state.into_warnings()
    }

    fn typedef_close(&mut self, line: &SourceLine<'_>) {
        if let Some(name) = self.state.tracker.close(line) {
            self.state.registry.register(&name);
            self.check(RuleId::StructLowerCase, || {
                rules::struct_name_is_lower_case(&name)
            });
        }
    }

    fn struct_declaration(&mut self, line: &SourceLine<'_>) {
        match struct_head(line) {
            StructHead::Named(name) => {
                self.state.registry.register(name);
                self.check(RuleId::StructLowerCase, || {
                    rules::struct_name_is_lower_case(name)
                });
            }
            StructHead::DeferredTypedef => self.state.tracker.open_body(line),
            StructHead::Anonymous => {
                debug!("Line {}: struct declaration without a name", line.number);
            }
        }
    }

    fn variable_declaration(&mut self, line: &SourceLine<'_>) {
        self.check(RuleId::VariableInitConsistency, || {
            rules::variables_initialized_consistently(line)
        });
        self.check(RuleId::PointerConsistency, || {
            rules::pointers_declared_consistently(line)
        });
        self.check(RuleId::VariableSnakeCase, || {
            rules::variables_are_snake_case(line)
        });
        self.check(RuleId::VariableMinLength, || {
            rules::variables_longer_than_one(line)
        });
    }

    /// Evaluates `passes` if `rule` is enabled and records a warning on
    /// failure.
    fn check(&mut self, rule: RuleId, passes: impl FnOnce() -> bool) {
        if self.filter.is_enabled(rule) && !passes() {
            self.state.warnings.push(Warning::new(self.state.line, rule));
        }
    }
}

/// Scans one file's lines with a fresh [`ScanState`].
#[must_use]
pub fn scan(lines: &[SourceLine<'_>], filter: &RuleFilter) -> Vec<Warning> {
    let mut scanner = CScanner::new(filter);
    for line in lines {
        scanner.feed(line);
    }
    scanner.finish()
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
