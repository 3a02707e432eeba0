use fl_lexer::Lexer;
use insta::assert_yaml_snapshot;
use serde::Serialize;

/// A human-readable representation of a token for snapshot testing.
#[derive(Serialize)]
struct TokenSnapshot {
    kind: String,
    text: String,
    span: (u32, u32),
}

fn tokenize_snapshot(source: &str) -> Vec<TokenSnapshot> {
    Lexer::tokenize(source)
        .expect("fixture source lexes cleanly")
        .into_iter()
        .map(|tok| {
            let text = if tok.span.start < tok.span.end {
                source[tok.span.start as usize..tok.span.end as usize].to_string()
            } else {
                String::new()
            };
            TokenSnapshot {
                kind: format!("{:?}", tok.kind),
                text,
                span: (tok.span.start, tok.span.end),
            }
        })
        .collect()
}

#[test]
fn test_keywords() {
    let tokens = tokenize_snapshot("if then else true false lambda");
    assert_yaml_snapshot!(tokens);
}

#[test]
fn test_operators() {
    let tokens = tokenize_snapshot("-> != == >= <= < > + - * / =");
    assert_yaml_snapshot!(tokens);
}

#[test]
fn test_numbers() {
    let tokens = tokenize_snapshot("0 7 42 1000");
    assert_yaml_snapshot!(tokens);
}

#[test]
fn test_identifiers() {
    let tokens = tokenize_snapshot("x foo_bar _leading camelCase42");
    assert_yaml_snapshot!(tokens);
}

#[test]
fn test_application_syntax() {
    let tokens = tokenize_snapshot("add(1, 2)");
    assert_yaml_snapshot!(tokens);
}

#[test]
fn test_lambda_expression() {
    let tokens = tokenize_snapshot("lambda x y -> x + y");
    assert_yaml_snapshot!(tokens);
}

#[test]
fn test_declaration_sugar_form() {
    let tokens = tokenize_snapshot("f x y = x + y");
    assert_yaml_snapshot!(tokens);
}

#[test]
fn test_spans_accurate() {
    let tokens = tokenize_snapshot("lambda x -> x");
    assert_yaml_snapshot!(tokens);
}

#[test]
fn test_block_comment_stripped() {
    let tokens = tokenize_snapshot("1 (* a comment *) + 2");
    assert_yaml_snapshot!(tokens);
}

#[test]
fn test_multiline_block_comment_preserves_newline() {
    let tokens = tokenize_snapshot("1 (* line one\nline two *) + 2");
    assert_yaml_snapshot!(tokens);
}

#[test]
fn test_empty_input() {
    let tokens = tokenize_snapshot("");
    assert_yaml_snapshot!(tokens);
}

#[test]
fn test_whitespace_only() {
    let tokens = tokenize_snapshot("   \t\n  ");
    assert_yaml_snapshot!(tokens);
}

#[test]
fn test_unmatched_character_is_a_lexer_error() {
    let err = Lexer::tokenize("x @ y").unwrap_err();
    assert_eq!(err.offset, Some(2));
}

#[test]
fn test_unterminated_block_comment_is_swallowed_not_erroring() {
    // An unterminated block comment blanks the rest of the buffer; this is
    // not itself a lexer error, it just yields no further tokens.
    let tokens = Lexer::tokenize("1 (* never closes").expect("lex ok");
    assert_eq!(tokens.len(), 2); // the leading "1", then Eof
}
