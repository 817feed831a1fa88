//! Comment filter.
//!
//! Line-local: a block comment whose continuation lines do not start with
//! `*` is not recognized past its first line.

use naming_check_core::SourceLine;

/// Returns true for `//` and `/*` lines and for lines whose trimmed text
/// starts with `*` (block comment continuation or closer).
#[must_use]
pub fn is_comment(line: &SourceLine<'_>) -> bool {
    let code = line.code();
    if code.chars().count() < 2 {
        return false;
    }
    code.starts_with("//") || code.starts_with("/*") || code.starts_with('*')
}
