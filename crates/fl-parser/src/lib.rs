//! Recursive-descent parser for the microml toolchain.

pub mod ast;
mod parser;

use fl_common::error::CoreError;

pub use ast::{BinOp, Decl, Expr, NodeId};
pub use parser::{Parser, TerminationMode};

/// Lex and parse a single declaration from `source`.
pub fn parse_decl(source: &str, mode: TerminationMode) -> Result<(Decl, u32), CoreError> {
    let tokens = fl_lexer::Lexer::tokenize(source)?;
    let mut parser = Parser::new(source, tokens);
    parser.parse_decl(mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(source: &str) -> Decl {
        parse_decl(source, TerminationMode::Strict)
            .expect("expected successful parse")
            .0
    }

    #[test]
    fn parses_simple_constant_decl() {
        let decl = parse_ok("const = 42");
        assert_eq!(decl.name, "const");
        assert!(matches!(decl.body, Expr::Int { value: 42, .. }));
    }

    #[test]
    fn desugars_params_into_lambda() {
        let decl = parse_ok("add x y = x + y");
        assert_eq!(decl.name, "add");
        match decl.body {
            Expr::Lambda { params, body, .. } => {
                assert_eq!(params, vec!["x".to_string(), "y".to_string()]);
                assert!(matches!(*body, Expr::BinOp { op: BinOp::Add, .. }));
            }
            other => panic!("expected Lambda, got {other:?}"),
        }
    }

    #[test]
    fn identity_function() {
        let decl = parse_ok("id = lambda x -> x");
        match decl.body {
            Expr::Lambda { params, body, .. } => {
                assert_eq!(params, vec!["x".to_string()]);
                assert!(matches!(*body, Expr::Ident { ref name, .. } if name == "x"));
            }
            other => panic!("expected Lambda, got {other:?}"),
        }
    }

    #[test]
    fn application_is_name_only() {
        let decl = parse_ok("result = add(1, 2)");
        match decl.body {
            Expr::App { callee, args, .. } => {
                assert_eq!(callee, "add");
                assert_eq!(args.len(), 2);
            }
            other => panic!("expected App, got {other:?}"),
        }
    }

    #[test]
    fn if_then_else() {
        let decl = parse_ok("choice = if true then 1 else 2");
        assert!(matches!(decl.body, Expr::If { .. }));
    }

    #[test]
    fn binary_expression_is_non_recursive_on_the_right() {
        // "1 + 2 + 3" is not valid: after the first binop, the grammar
        // expects a terminator, not another operator.
        let err = parse_decl("bad = 1 + 2 + 3", TerminationMode::Strict).unwrap_err();
        assert!(err.message.contains("unexpected"));
    }

    #[test]
    fn parenthesized_expression_allows_nesting() {
        let decl = parse_ok("nested = (1 + 2) * (3 - 4)");
        assert!(matches!(decl.body, Expr::BinOp { op: BinOp::Mul, .. }));
    }

    #[test]
    fn strict_mode_rejects_trailing_tokens() {
        let err = parse_decl("f = 1 2", TerminationMode::Strict).unwrap_err();
        assert!(err.message.contains("unexpected"));
    }

    #[test]
    fn interactive_mode_reports_stop_offset_without_erroring() {
        let (decl, stop) = parse_decl("f = 1 g = 2", TerminationMode::Interactive).unwrap();
        assert_eq!(decl.name, "f");
        assert_eq!(stop, 6); // offset of "g" in "f = 1 g = 2"
    }

    #[test]
    fn callee_must_be_a_bare_name() {
        // `(f)(x)` is not valid application syntax: the callee position
        // requires a literal identifier immediately followed by `(`.
        let decl = parse_ok("weird = (f)");
        assert!(matches!(decl.body, Expr::Ident { .. }));
    }
}
