//! Rule catalog for C.
//!
//! Every rule is a total predicate: `true` means the line complies. Lines a
//! rule cannot interpret comply.

use super::classify::function_name;
use super::lexicon::{is_lower_case, is_upper_case, PATTERNS};
use naming_check_core::SourceLine;

/// Struct and typedef names must not contain uppercase letters.
#[must_use]
pub fn struct_name_is_lower_case(name: &str) -> bool {
    is_lower_case(name)
}

/// The first word after removing `enum` must be `PascalCase`.
#[must_use]
pub fn enum_is_pascal_case(line: &SourceLine<'_>) -> bool {
    let rest = line.text.replace("enum", "");
    rest.split_whitespace()
        .next()
        .map_or(true, |name| PATTERNS.pascal_case.is_match(name))
}

/// The first word after `#define` must not contain lowercase letters.
#[must_use]
pub fn constant_is_upper_case(line: &SourceLine<'_>) -> bool {
    let rest = line.text.replace("#define", "").replace(';', "");
    rest.split_whitespace().next().map_or(true, is_upper_case)
}

/// Function names must not contain uppercase letters.
#[must_use]
pub fn function_name_is_lower_case(line: &SourceLine<'_>) -> bool {
    function_name(line).map_or(true, is_lower_case)
}

/// Comma-separated clauses of a declaration, terminators removed.
fn clauses(line: &SourceLine<'_>) -> Vec<String> {
    line.code()
        .replace(';', "")
        .split(',')
        .map(str::to_string)
        .collect()
}

/// All clauses agree on whether they contain `marker`.
fn uniform(clauses: &[String], marker: char) -> bool {
    let mut flags = clauses.iter().map(|c| c.contains(marker));
    match flags.next() {
        Some(first) => flags.all(|f| f == first),
        None => true,
    }
}

/// Either every declared variable is initialized or none is.
#[must_use]
pub fn variables_initialized_consistently(line: &SourceLine<'_>) -> bool {
    uniform(&clauses(line), '=')
}

/// Either every declared variable is a pointer or none is.
#[must_use]
pub fn pointers_declared_consistently(line: &SourceLine<'_>) -> bool {
    uniform(&clauses(line), '*')
}

/// Every identifier declared after a base type keyword is `snake_case`.
#[must_use]
pub fn variables_are_snake_case(line: &SourceLine<'_>) -> bool {
    PATTERNS
        .declared_variable
        .captures_iter(line.code())
        .filter_map(|c| c.get(1))
        .all(|name| PATTERNS.snake_case.is_match(name.as_str()))
}

/// No declared name is a single character. The first clause is checked by
/// its second word (the word after the type).
#[must_use]
pub fn variables_longer_than_one(line: &SourceLine<'_>) -> bool {
    let mut clauses = clauses(line);
    if let Some(first) = clauses.first_mut() {
        *first = first.split_whitespace().nth(1).unwrap_or_default().to_string();
    }
    clauses
        .iter()
        .all(|c| c.chars().filter(|ch| !ch.is_whitespace()).count() != 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> SourceLine<'_> {
        SourceLine::new(1, text)
    }

    #[test]
    fn struct_names() {
        assert!(struct_name_is_lower_case("node"));
        assert!(struct_name_is_lower_case("point_3d"));
        assert!(!struct_name_is_lower_case("myStruct"));
        assert!(struct_name_is_lower_case(""));
    }

    #[test]
    fn enum_pascal_case() {
        assert!(enum_is_pascal_case(&line("enum Color {")));
        assert!(enum_is_pascal_case(&line("enum HttpStatus2 { OK };")));
        assert!(!enum_is_pascal_case(&line("enum color {")));
        assert!(!enum_is_pascal_case(&line("enum Http_Status {")));
        assert!(!enum_is_pascal_case(&line("typedef enum {")));
        assert!(!enum_is_pascal_case(&line("enum Color{")));
        assert!(enum_is_pascal_case(&line("enum")));
    }

    #[test]
    fn constants_upper_case() {
        assert!(constant_is_upper_case(&line("#define MAX_SIZE 100")));
        assert!(constant_is_upper_case(&line("#define PI_2 6.28;")));
        assert!(!constant_is_upper_case(&line("#define maxSize 100")));
        assert!(constant_is_upper_case(&line("#define")));
    }

    #[test]
    fn function_names_lower_case() {
        assert!(function_name_is_lower_case(&line("int main(void)")));
        assert!(function_name_is_lower_case(&line("static int do_work(int n)")));
        assert!(!function_name_is_lower_case(&line("char* Foo(int n) {")));
        assert!(!function_name_is_lower_case(&line("void doWork(void)")));
    }

    #[test]
    fn initialization_consistency() {
        assert!(!variables_initialized_consistently(&line("int a, b = 1;")));
        assert!(variables_initialized_consistently(&line("int a = 0, b = 1;")));
        assert!(variables_initialized_consistently(&line("int a, b;")));
        assert!(variables_initialized_consistently(&line("int a;")));
    }

    #[test]
    fn pointer_consistency() {
        assert!(!pointers_declared_consistently(&line("int *p, q;")));
        assert!(pointers_declared_consistently(&line("int *p, *q;")));
        assert!(pointers_declared_consistently(&line("int p, q;")));
    }

    #[test]
    fn snake_case_variables() {
        assert!(variables_are_snake_case(&line("int item_count = 0;")));
        assert!(variables_are_snake_case(&line("int a, b;")));
        assert!(!variables_are_snake_case(&line("int itemCount;")));
        assert!(!variables_are_snake_case(&line("float Total = 1.0;")));
        assert!(!variables_are_snake_case(&line("char _hidden;")));
        assert!(variables_are_snake_case(&line("struct Foo bar;")));
    }

    #[test]
    fn minimum_length() {
        assert!(!variables_longer_than_one(&line("int x;")));
        assert!(!variables_longer_than_one(&line("int *p, q;")));
        assert!(!variables_longer_than_one(&line("int ab, c;")));
        assert!(variables_longer_than_one(&line("int ab, c = 1;")));
        assert!(variables_longer_than_one(&line("int ab, y = 2;")));
        assert!(variables_longer_than_one(&line("int *p;")));
        assert!(variables_longer_than_one(&line("int count, total;")));
    }
}
