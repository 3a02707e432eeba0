//! Declaration parser integration tests using insta snapshots.
//!
//! Each test parses a top-level declaration and snapshots its debug-printed
//! AST, verifying desugaring and tree shape end to end.

use fl_parser::{parse_decl, TerminationMode};
use insta::assert_snapshot;

fn parse_and_debug(source: &str) -> String {
    match parse_decl(source, TerminationMode::Strict) {
        Ok((decl, _)) => format!("{decl:#?}"),
        Err(err) => format!("error: {err}"),
    }
}

#[test]
fn literal_int_decl() {
    assert_snapshot!(parse_and_debug("answer = 42"));
}

#[test]
fn literal_bool_decl() {
    assert_snapshot!(parse_and_debug("flag = true"));
}

#[test]
fn identity_function_desugars_to_lambda() {
    assert_snapshot!(parse_and_debug("id x = x"));
}

#[test]
fn lambda_literal_form() {
    assert_snapshot!(parse_and_debug("id = lambda x -> x"));
}

#[test]
fn multi_param_desugaring() {
    assert_snapshot!(parse_and_debug("add x y = x + y"));
}

#[test]
fn if_then_else_decl() {
    assert_snapshot!(parse_and_debug("pick = if true then 1 else 0"));
}

#[test]
fn application_decl() {
    assert_snapshot!(parse_and_debug("result = add(1, 2)"));
}

#[test]
fn nested_application_decl() {
    assert_snapshot!(parse_and_debug("result = add(mul(2, 3), 4)"));
}

#[test]
fn parenthesized_grouping() {
    assert_snapshot!(parse_and_debug("x = (1 + 2) * (3 - 4)"));
}

#[test]
fn comparison_operator_decl() {
    assert_snapshot!(parse_and_debug("lt = 1 < 2"));
}

#[test]
fn missing_equals_is_a_parse_error() {
    assert_snapshot!(parse_and_debug("broken 1"));
}

#[test]
fn double_operator_is_a_parse_error() {
    assert_snapshot!(parse_and_debug("broken = 1 + 2 + 3"));
}

#[test]
fn unclosed_paren_is_a_parse_error() {
    assert_snapshot!(parse_and_debug("broken = (1 + 2"));
}

#[test]
fn oversized_integer_literal_is_a_parse_error_not_a_panic() {
    let digits = "9".repeat(40);
    let err = parse_and_debug(&format!("huge = {digits}"));
    assert!(err.starts_with("error:"), "expected a parse error, got: {err}");
}
