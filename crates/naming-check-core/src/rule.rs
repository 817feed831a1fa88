//! Rule catalog metadata and the per-language ruleset bundle.

use crate::source::SourceLine;
use crate::types::{Severity, Warning};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Source language a ruleset applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// C sources (`.c`, `.h`).
    C,
    /// Python sources (`.py`).
    Python,
}

impl Language {
    /// Selects a language from a file extension (without the leading dot).
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "c" | "h" => Some(Self::C),
            "py" => Some(Self::Python),
            _ => None,
        }
    }

    /// Selects a language from a file path's extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::C => write!(f, "c"),
            Self::Python => write!(f, "python"),
        }
    }
}

/// Identity of every built-in rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    /// Struct and typedef names must be lowercase.
    StructLowerCase,
    /// Enum names must be `PascalCase`.
    EnumPascalCase,
    /// `#define` constants must be uppercase.
    ConstantUpperCase,
    /// Function names must be lowercase.
    FunctionLowerCase,
    /// A declaration initializes all of its variables or none.
    VariableInitConsistency,
    /// A declaration does not mix pointers and non-pointers.
    PointerConsistency,
    /// Declared variables are `snake_case`.
    VariableSnakeCase,
    /// Declared variables are longer than one character.
    VariableMinLength,
    /// Python assignment targets are longer than one character.
    PyVariableMinLength,
    /// Python assignment targets are `snake_case`.
    PyVariableSnakeCase,
    /// Python function names are `snake_case`.
    PyFunctionSnakeCase,
}

impl RuleId {
    /// Every rule, in catalog order.
    pub const ALL: [Self; 11] = [
        Self::StructLowerCase,
        Self::EnumPascalCase,
        Self::ConstantUpperCase,
        Self::FunctionLowerCase,
        Self::VariableInitConsistency,
        Self::PointerConsistency,
        Self::VariableSnakeCase,
        Self::VariableMinLength,
        Self::PyVariableMinLength,
        Self::PyVariableSnakeCase,
        Self::PyFunctionSnakeCase,
    ];

    /// Returns the kebab-case name of this rule (e.g., "struct-lower-case").
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::StructLowerCase => "struct-lower-case",
            Self::EnumPascalCase => "enum-pascal-case",
            Self::ConstantUpperCase => "constant-upper-case",
            Self::FunctionLowerCase => "function-lower-case",
            Self::VariableInitConsistency => "variable-init-consistency",
            Self::PointerConsistency => "pointer-consistency",
            Self::VariableSnakeCase => "variable-snake-case",
            Self::VariableMinLength => "variable-min-length",
            Self::PyVariableMinLength => "py-variable-min-length",
            Self::PyVariableSnakeCase => "py-variable-snake-case",
            Self::PyFunctionSnakeCase => "py-function-snake-case",
        }
    }

    /// Returns the rule code (e.g., "NC001").
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::StructLowerCase => "NC001",
            Self::EnumPascalCase => "NC002",
            Self::ConstantUpperCase => "NC003",
            Self::FunctionLowerCase => "NC004",
            Self::VariableInitConsistency => "NC005",
            Self::PointerConsistency => "NC006",
            Self::VariableSnakeCase => "NC007",
            Self::VariableMinLength => "NC008",
            Self::PyVariableMinLength => "NP001",
            Self::PyVariableSnakeCase => "NP002",
            Self::PyFunctionSnakeCase => "NP003",
        }
    }

    /// Language whose ruleset evaluates this rule.
    #[must_use]
    pub fn language(self) -> Language {
        match self {
            Self::PyVariableMinLength | Self::PyVariableSnakeCase | Self::PyFunctionSnakeCase => {
                Language::Python
            }
            _ => Language::C,
        }
    }

    /// The fixed warning message emitted when this rule fails.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::StructLowerCase => "Structs should be declared in lower case.",
            Self::EnumPascalCase => "Enums declaration should be in pascal case.",
            Self::ConstantUpperCase => "All constants should be declared in uppercase.",
            Self::FunctionLowerCase | Self::PyFunctionSnakeCase => {
                "Functions names should be declared in snake case."
            }
            Self::VariableInitConsistency => {
                "If you initialize one variable, you should initialize the others."
            }
            Self::PointerConsistency => {
                "Pointers variables should not be declared with no pointers variables."
            }
            Self::VariableSnakeCase | Self::PyVariableSnakeCase => {
                "Variables names should be declared in snake case."
            }
            Self::VariableMinLength | Self::PyVariableMinLength => {
                "Variables names should have length greater than one."
            }
        }
    }

    /// Returns a brief description of what this rule checks.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::StructLowerCase => "Struct and typedef names must be lowercase",
            Self::EnumPascalCase => "Enum names must be PascalCase",
            Self::ConstantUpperCase => "#define constants must be uppercase",
            Self::FunctionLowerCase => "Function names must be lowercase",
            Self::VariableInitConsistency => {
                "Initialize every variable of a declaration, or none of them"
            }
            Self::PointerConsistency => "Do not mix pointer and plain variables in a declaration",
            Self::VariableSnakeCase => "Variable names must be snake_case",
            Self::VariableMinLength => "Variable names must be longer than one character",
            Self::PyVariableMinLength => {
                "Assigned names must be longer than one character (for-loops excepted)"
            }
            Self::PyVariableSnakeCase => "Assigned names must be snake_case",
            Self::PyFunctionSnakeCase => "def names must be snake_case",
        }
    }

    /// Returns the default severity for warnings from this rule.
    #[must_use]
    pub fn default_severity(self) -> Severity {
        Severity::Warning
    }

    /// Whether the rule runs when configuration says nothing about it.
    #[must_use]
    pub fn enabled_by_default(self) -> bool {
        !matches!(self, Self::PyVariableSnakeCase | Self::PyFunctionSnakeCase)
    }

    /// Looks a rule up by name or code.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.name() == key || r.code().eq_ignore_ascii_case(key))
    }

    /// Rules belonging to one language, in catalog order.
    pub fn for_language(language: Language) -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .filter(move |r| r.language() == language)
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of rules a scan evaluates.
///
/// Disabling a rule only suppresses its check; classification state
/// (such as the struct registry) is maintained regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFilter {
    enabled: BTreeSet<RuleId>,
}

impl Default for RuleFilter {
    fn default() -> Self {
        Self::defaults()
    }
}

impl RuleFilter {
    /// Rules that are enabled by default.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            enabled: RuleId::ALL
                .into_iter()
                .filter(|r| r.enabled_by_default())
                .collect(),
        }
    }

    /// Every rule, including the ones that are off by default.
    #[must_use]
    pub fn all() -> Self {
        Self {
            enabled: RuleId::ALL.into_iter().collect(),
        }
    }

    /// Exactly the given rules.
    #[must_use]
    pub fn only<I: IntoIterator<Item = RuleId>>(rules: I) -> Self {
        Self {
            enabled: rules.into_iter().collect(),
        }
    }

    /// Returns true if `rule` should be evaluated.
    #[must_use]
    pub fn is_enabled(&self, rule: RuleId) -> bool {
        self.enabled.contains(&rule)
    }

    /// Keeps only the rules also present in `other`.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            enabled: self.enabled.intersection(&other.enabled).copied().collect(),
        }
    }

    /// Enabled rules, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.enabled.iter().copied()
    }
}

/// Signature shared by every language scanner.
pub type ScanFn = fn(&[SourceLine<'_>], &RuleFilter) -> Vec<Warning>;

/// A language's classify-then-rule strategy: plain data plus a scan function.
#[derive(Debug, Clone, Copy)]
pub struct Ruleset {
    /// Language this ruleset checks.
    pub language: Language,
    scan: ScanFn,
}

impl Ruleset {
    /// Bundles a scanner with its language.
    #[must_use]
    pub const fn new(language: Language, scan: ScanFn) -> Self {
        Self { language, scan }
    }

    /// Scans one file's lines with a fresh scan state.
    #[must_use]
    pub fn scan(&self, lines: &[SourceLine<'_>], filter: &RuleFilter) -> Vec<Warning> {
        (self.scan)(lines, filter)
    }
}
