//! Fixed C keyword sets and compiled patterns shared by the classifier and
//! the rule catalog.

use regex::Regex;
use std::sync::LazyLock;

/// Words that rule a line out as a variable declaration.
pub const RESERVED_WORDS: &[&str] = &[
    "auto", "break", "case", "const", "continue", "default", "do", "define", "else", "enum",
    "extern", "for", "goto", "if", "register", "return", "short", "signed", "sizeof", "static",
    "switch", "typedef", "union", "unsigned", "void", "volatile", "while",
];

/// Return types a function declaration may start with.
pub const FUNCTION_RETURN_TYPES: &[&str] =
    &["int", "char", "float", "double", "long", "struct", "void"];

/// Types a variable declaration may start with (besides registered structs).
pub const VARIABLE_TYPES: &[&str] = &["int", "char", "float", "double", "long", "struct"];

/// Storage/qualifier keywords that may precede a function's return type.
pub const PRE_DECLARATION_KEYWORDS: &[&str] =
    &["extern", "short", "signed", "static", "unsigned", "volatile"];

pub(crate) struct Patterns {
    pub reserved_word: Regex,
    pub struct_keyword: Regex,
    pub declared_variable: Regex,
    pub snake_case: Regex,
    pub pascal_case: Regex,
}

impl Patterns {
    #[allow(clippy::expect_used)] // literal patterns
    fn new() -> Self {
        Self {
            reserved_word: Regex::new(&format!(r"\b(?:{})\b", RESERVED_WORDS.join("|")))
                .expect("Invalid regex"),
            struct_keyword: Regex::new(r"\bstruct\b").expect("Invalid regex"),
            declared_variable: Regex::new(
                r"\b(?:int|float|double|char|long|short|unsigned|signed|void|const)\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*[,=;]",
            )
            .expect("Invalid regex"),
            snake_case: Regex::new(r"^[a-z]+(_[a-z0-9]+)*$").expect("Invalid regex"),
            pascal_case: Regex::new(r"^[A-Z][a-zA-Z0-9]*$").expect("Invalid regex"),
        }
    }
}

pub(crate) static PATTERNS: LazyLock<Patterns> = LazyLock::new(Patterns::new);

/// True when no alphabetic character is uppercase.
pub(crate) fn is_lower_case(name: &str) -> bool {
    !name.chars().any(char::is_uppercase)
}

/// True when no alphabetic character is lowercase.
pub(crate) fn is_upper_case(name: &str) -> bool {
    !name.chars().any(char::is_lowercase)
}
