//! Line classifier.
//!
//! One predicate per category. Each works on a single line with fixed
//! keyword sets; none of them parses C.

use super::lexicon::{
    FUNCTION_RETURN_TYPES, PATTERNS, PRE_DECLARATION_KEYWORDS, VARIABLE_TYPES,
};
use super::structs::StructTypeRegistry;
use naming_check_core::SourceLine;

/// What a struct declaration line says about its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructHead<'a> {
    /// The name is on this line.
    Named(&'a str),
    /// `typedef struct {`: the name follows the closing brace.
    DeferredTypedef,
    /// No name can be resolved from this line.
    Anonymous,
}

/// A line carries the word `struct` and either has no `;` (an opening)
/// or starts with `struct` (a complete one-line form).
#[must_use]
pub fn is_struct_declaration(line: &SourceLine<'_>) -> bool {
    let code = line.code();
    PATTERNS.struct_keyword.is_match(code)
        && (!code.contains(';') || line.word(0) == Some("struct"))
}

/// Resolves the struct or typedef name of a struct declaration line.
#[must_use]
pub fn struct_head<'a>(line: &SourceLine<'a>) -> StructHead<'a> {
    let words: Vec<&'a str> = line.words().collect();
    match words.first().copied() {
        Some("typedef") => match words.get(2).copied().map(clean_name) {
            Some(name) if !name.is_empty() => StructHead::Named(name),
            _ => StructHead::DeferredTypedef,
        },
        Some("struct") => match words.get(1).copied().map(clean_name) {
            Some(name) if !name.is_empty() => StructHead::Named(name),
            _ => StructHead::Anonymous,
        },
        _ => StructHead::Anonymous,
    }
}

fn clean_name(word: &str) -> &str {
    word.trim_end_matches(['{', ';'])
}

/// Line mentions `enum` anywhere.
#[must_use]
pub fn is_enum_line(line: &SourceLine<'_>) -> bool {
    line.text.contains("enum")
}

/// Line contains a `#define` directive.
#[must_use]
pub fn is_constant_definition(line: &SourceLine<'_>) -> bool {
    line.text.contains("#define")
}

/// Return type of a function declaration: base type plus pointer arity,
/// counting stars attached to either the type or the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnType {
    /// Base type keyword.
    pub base: &'static str,
    /// Number of `*` qualifiers.
    pub pointers: usize,
}

impl std::fmt::Display for ReturnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.base, "*".repeat(self.pointers))
    }
}

/// Index of the return type word, skipping one pre-declaration keyword.
fn return_type_index(words: &[&str]) -> usize {
    usize::from(
        words
            .first()
            .is_some_and(|w| PRE_DECLARATION_KEYWORDS.contains(w)),
    )
}

/// Matches a return type word such as `char`, `char*` or `**int` against
/// the recognized base types, with the stars kept on the side they appear.
fn match_return_word(word: &str) -> Option<&'static str> {
    let pointers = word.matches('*').count();
    let leading = word.starts_with('*');
    FUNCTION_RETURN_TYPES.iter().copied().find(|base| {
        let stars = "*".repeat(pointers);
        let expected = if pointers == 0 {
            (*base).to_string()
        } else if leading {
            format!("{stars}{base}")
        } else {
            format!("{base}{stars}")
        };
        word == expected
    })
}

/// Recognizes the return type of a would-be function declaration.
#[must_use]
pub fn return_type(line: &SourceLine<'_>) -> Option<ReturnType> {
    let words: Vec<&str> = line.words().collect();
    let index = return_type_index(&words);
    let word = *words.get(index)?;
    let base = match_return_word(word)?;
    let name_stars = words
        .get(index + 1)
        .map_or(0, |w| w.chars().take_while(|c| *c == '*').count());
    Some(ReturnType {
        base,
        pointers: word.matches('*').count() + name_stars,
    })
}

/// A recognized return type word plus both `(` and `)` on the line.
#[must_use]
pub fn is_function_declaration(line: &SourceLine<'_>) -> bool {
    let code = line.code();
    return_type(line).is_some() && code.contains('(') && code.contains(')')
}

/// Name of the declared function: the word after the return type (after
/// `struct <tag>` for struct returns), without pointer stars or the
/// parameter list.
#[must_use]
pub fn function_name<'a>(line: &SourceLine<'a>) -> Option<&'a str> {
    let words: Vec<&'a str> = line.words().filter(|w| !is_only_stars(w)).collect();
    let index = return_type_index(&words);
    let mut name_index = index + 1;
    if words.get(index).is_some_and(|w| *w == "struct") {
        name_index += 1;
    }
    let word: &'a str = words.get(name_index).copied()?;
    let name = word.split('(').next().unwrap_or_default();
    Some(name.trim_start_matches('*'))
}

fn is_only_stars(word: &str) -> bool {
    word.chars().all(|c| c == '*')
}

/// Heuristic variable declaration check.
///
/// Rejects lines opening a body (`{`) and lines containing any reserved
/// word; the first word must be a variable type or a registered struct
/// name, free of digits, and followed by at least one more word.
#[must_use]
pub fn is_variable_declaration(line: &SourceLine<'_>, struct_types: &StructTypeRegistry) -> bool {
    let code = line.code();
    if code.contains('{') || PATTERNS.reserved_word.is_match(code) {
        return false;
    }
    let mut words = line.words();
    let (Some(ty), Some(_)) = (words.next(), words.next()) else {
        return false;
    };
    (VARIABLE_TYPES.contains(&ty) || struct_types.contains(ty))
        && !ty.contains("return")
        && !ty.chars().any(|c| c.is_ascii_digit())
}
