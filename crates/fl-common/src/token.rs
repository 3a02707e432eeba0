use serde::Serialize;

use crate::span::Span;

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, start: u32, end: u32) -> Self {
        Self {
            kind,
            span: Span::new(start, end),
        }
    }
}

/// The complete token vocabulary. Deliberately small and closed: every
/// variant here is load-bearing in the grammar, there is no reserved-word
/// table beyond the six keywords below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    // ── Keywords ───────────────────────────────────────────────────────
    If,
    Then,
    Else,
    True,
    False,
    Lambda,

    // ── Literals and names ────────────────────────────────────────────
    Int,
    Ident,

    // ── Operators ──────────────────────────────────────────────────────
    /// `->`
    Arrow,
    /// `!=`
    NotEq,
    /// `==`
    EqEq,
    /// `>=`
    GtEq,
    /// `<=`
    LtEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `=`
    Eq,

    // ── Delimiters ─────────────────────────────────────────────────────
    LParen,
    RParen,
    Comma,

    Eof,
}

impl TokenKind {
    /// Whether this kind is one of the binary-operator tokens.
    pub fn is_binop(self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::EqEq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
        )
    }

    /// Human-readable name for diagnostics (`expected X, found Y`).
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::If => "'if'",
            TokenKind::Then => "'then'",
            TokenKind::Else => "'else'",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Lambda => "'lambda'",
            TokenKind::Int => "an integer literal",
            TokenKind::Ident => "an identifier",
            TokenKind::Arrow => "'->'",
            TokenKind::NotEq => "'!='",
            TokenKind::EqEq => "'=='",
            TokenKind::GtEq => "'>='",
            TokenKind::LtEq => "'<='",
            TokenKind::Lt => "'<'",
            TokenKind::Gt => "'>'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Eq => "'='",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::Eof => "end of input",
        }
    }
}

/// Look up a keyword by spelling. Checked before the identifier rule wins.
pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
    match s {
        "if" => Some(TokenKind::If),
        "then" => Some(TokenKind::Then),
        "else" => Some(TokenKind::Else),
        "true" => Some(TokenKind::True),
        "false" => Some(TokenKind::False),
        "lambda" => Some(TokenKind::Lambda),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_from_str_recognizes_all_keywords() {
        let keywords = [
            ("if", TokenKind::If),
            ("then", TokenKind::Then),
            ("else", TokenKind::Else),
            ("true", TokenKind::True),
            ("false", TokenKind::False),
            ("lambda", TokenKind::Lambda),
        ];
        for (text, kind) in keywords {
            assert_eq!(keyword_from_str(text), Some(kind));
        }
    }

    #[test]
    fn keyword_from_str_rejects_plain_identifiers() {
        assert_eq!(keyword_from_str("x"), None);
        assert_eq!(keyword_from_str("iffy"), None);
    }

    #[test]
    fn is_binop_covers_exactly_the_ten_operators() {
        let binops = [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::LtEq,
            TokenKind::Gt,
            TokenKind::GtEq,
        ];
        for kind in binops {
            assert!(kind.is_binop());
        }
        assert!(!TokenKind::Arrow.is_binop());
        assert!(!TokenKind::Eq.is_binop());
    }
}
