//! # naming-check-rules
//!
//! Built-in naming rulesets for naming-check.
//!
//! Each language ships as a [`Ruleset`]: a language tag plus a scan function
//! that turns the ordered lines of one file into ordered warnings.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | NC001 | `struct-lower-case` | Struct and typedef names are lowercase |
//! | NC002 | `enum-pascal-case` | Enum names are `PascalCase` |
//! | NC003 | `constant-upper-case` | `#define` names are uppercase |
//! | NC004 | `function-lower-case` | Function names are lowercase |
//! | NC005 | `variable-init-consistency` | All or none of a declaration's variables are initialized |
//! | NC006 | `pointer-consistency` | All or none of a declaration's variables are pointers |
//! | NC007 | `variable-snake-case` | Variable names are `snake_case` |
//! | NC008 | `variable-min-length` | Variable names are longer than one character |
//! | NP001 | `py-variable-min-length` | Assigned names are longer than one character |
//! | NP002 | `py-variable-snake-case` | Assigned names are `snake_case` (off by default) |
//! | NP003 | `py-function-snake-case` | `def` names are `snake_case` (off by default) |
//!
//! ## Usage
//!
//! ```ignore
//! use naming_check_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .rulesets(naming_check_rules::builtin_rulesets())
//!     .build()?;
//! let report = analyzer.check_paths(&["src".into()])?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod c;
pub mod python;

pub use c::C_RULESET;
pub use python::PYTHON_RULESET;

/// Re-export core types for convenience.
pub use naming_check_core::{Language, RuleFilter, RuleId, Ruleset, Severity, Warning};

/// Every built-in ruleset, one per supported language.
#[must_use]
pub fn builtin_rulesets() -> Vec<Ruleset> {
    vec![C_RULESET, PYTHON_RULESET]
}

/// The built-in ruleset for `language`.
#[must_use]
pub fn ruleset_for(language: Language) -> Ruleset {
    match language {
        Language::C => C_RULESET,
        Language::Python => PYTHON_RULESET,
    }
}
