//! End-to-end scans of C sources through the public ruleset.

use naming_check_rules::c::scan_lines;
use naming_check_rules::{RuleFilter, C_RULESET};
use naming_check_core::SourceLine;

#[test]
fn mixed_initialization_and_function_name() {
    let report = scan_lines(&["int x, y = 2;", "char* Foo(int n) {", "}"]);
    insta::assert_snapshot!(report.join("\n"), @r"
    WARN: [1] If you initialize one variable, you should initialize the others.
    WARN: [1] Variables names should have length greater than one.
    WARN: [2] Functions names should be declared in snake case.
    ");
}

#[test]
fn typedef_struct_flow() {
    let source = [
        "/*",
        " * Geometry helpers.",
        " */",
        "#define max_points 16",
        "typedef struct {",
        "    double x_pos;",
        "    double y_pos;",
        "} Point;",
        "",
        "Point origin, *cursor;",
        "enum shape { CIRCLE, SQUARE };",
        "int count_points(Point *points) {",
        "    int total = 0, i;",
        "    return total;",
        "}",
    ];
    insta::assert_snapshot!(scan_lines(&source).join("\n"), @r"
    WARN: [4] All constants should be declared in uppercase.
    WARN: [8] Structs should be declared in lower case.
    WARN: [10] Pointers variables should not be declared with no pointers variables.
    WARN: [11] Enums declaration should be in pascal case.
    WARN: [13] If you initialize one variable, you should initialize the others.
    WARN: [13] Variables names should have length greater than one.
    ");
}

#[test]
fn compliant_file_is_silent() {
    let source = [
        "#include <stdio.h>",
        "#define BUFFER_SIZE 64",
        "struct node {",
        "    int value;",
        "    struct node *next;",
        "};",
        "enum Color { RED, GREEN };",
        "static int node_count(struct node *head) {",
        "    int count = 0;",
        "    return count;",
        "}",
    ];
    assert!(scan_lines(&source).is_empty());
}

#[test]
fn rescanning_is_idempotent() {
    let source = ["typedef struct {", "} Pair;", "Pair a, b = 1;"];
    let first = scan_lines(&source);
    let second = scan_lines(&source);
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn warnings_are_ordered_by_line() {
    let source = SourceLine::from_source("int X;\nint y, z = 1;\n#define low 1\n");
    let warnings = C_RULESET.scan(&source, &RuleFilter::defaults());
    assert!(warnings.windows(2).all(|w| w[0].line <= w[1].line));
    assert_eq!(warnings.first().map(|w| w.line), Some(1));
    assert_eq!(warnings.last().map(|w| w.line), Some(3));
}

#[test]
fn punctuation_only_lines_are_silent() {
    assert!(scan_lines(&["}", "};", "**", "*", "(", "", "int ,;"]).is_empty());
}

#[test]
fn truncated_lines_never_panic() {
    let source = [
        "", "*", "int", "struct", "typedef", "typedef struct", "}", "};", "#define", "enum",
        "char *", "(", "static", "static int", "int (", "struct {", "**", "int ,;",
    ];
    assert_eq!(
        scan_lines(&source),
        vec![
            "WARN: [11] Variables names should have length greater than one.",
            "WARN: [15] Variables names should have length greater than one.",
        ]
    );
}
