//! Tokenizer for the microml toolchain.

mod cursor;

use cursor::Cursor;
use fl_common::error::{CoreError, Module};
use fl_common::token::{keyword_from_str, Token, TokenKind};

/// Replace every `(* ... *)` block comment with an equal-length run of
/// spaces, so that downstream token offsets still line up with the
/// original source text. Block comments do not nest.
pub fn strip_block_comments(source: &str) -> String {
    let bytes = source.as_bytes();
    let mut out: Vec<u8> = source.as_bytes().to_vec();
    let mut i = 0usize;
    while i + 1 < bytes.len() {
        if bytes[i] == b'(' && bytes[i + 1] == b'*' {
            let start = i;
            let mut j = i + 2;
            let mut closed = false;
            while j + 1 < bytes.len() {
                if bytes[j] == b'*' && bytes[j + 1] == b')' {
                    j += 2;
                    closed = true;
                    break;
                }
                j += 1;
            }
            let end = if closed { j } else { bytes.len() };
            for b in out.iter_mut().take(end).skip(start) {
                if *b != b'\n' {
                    *b = b' ';
                }
            }
            i = end;
        } else {
            i += 1;
        }
    }
    // Safety: we only ever overwrite ASCII bytes with the ASCII space
    // character, so UTF-8 validity of the original buffer is preserved.
    String::from_utf8(out).expect("comment stripping preserves UTF-8 validity")
}

/// The lexer. Converts preprocessed source text into a stream of tokens.
///
/// Wraps a [`Cursor`] for byte-level iteration and implements
/// `Iterator<Item = Result<Token, CoreError>>` so callers can consume
/// tokens lazily or collect them into a `Vec`.
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    emitted_eof: bool,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer over already block-comment-stripped source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            emitted_eof: false,
        }
    }

    /// Strip block comments and tokenize the entire source into a `Vec<Token>`.
    ///
    /// The returned vector includes the final `Eof` token. Stops and returns
    /// the first lexer error encountered, if any.
    pub fn tokenize(source: &str) -> Result<Vec<Token>, CoreError> {
        let processed = strip_block_comments(source);
        Lexer::new(&processed).collect()
    }

    /// Non-consuming lookahead of exactly one token: save position, read a
    /// token, restore position.
    pub fn peek(&mut self) -> Result<Token, CoreError> {
        let saved = self.cursor.clone();
        let token = self.lex_one();
        self.cursor = saved;
        token
    }

    fn lex_one(&mut self) -> Result<Token, CoreError> {
        self.skip_whitespace();

        let start = self.cursor.pos();

        let Some(c) = self.cursor.peek() else {
            return Ok(Token::new(TokenKind::Eof, start, start));
        };

        match c {
            '(' => Ok(self.single_char_token(TokenKind::LParen, start)),
            ')' => Ok(self.single_char_token(TokenKind::RParen, start)),
            ',' => Ok(self.single_char_token(TokenKind::Comma, start)),

            '-' => Ok(self.lex_minus(start)),
            '!' => self.lex_bang(start),
            '=' => Ok(self.lex_eq(start)),
            '>' => Ok(self.lex_gt(start)),
            '<' => Ok(self.lex_lt(start)),
            '+' => Ok(self.single_char_token(TokenKind::Plus, start)),
            '*' => Ok(self.single_char_token(TokenKind::Star, start)),
            '/' => Ok(self.single_char_token(TokenKind::Slash, start)),

            '0'..='9' => Ok(self.lex_int(start)),

            c if is_ident_start(c) => Ok(self.lex_ident(start)),

            _ => Err(CoreError::new(
                Module::Lexer,
                format!("unexpected character '{c}'"),
                Some(start),
            )),
        }
    }

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(|c| c.is_ascii_whitespace());
    }

    fn single_char_token(&mut self, kind: TokenKind, start: u32) -> Token {
        self.cursor.advance();
        Token::new(kind, start, self.cursor.pos())
    }

    /// `->` is the only valid continuation of `-`; a bare `-` is `Minus`.
    fn lex_minus(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume '-'
        if self.cursor.peek() == Some('>') {
            self.cursor.advance();
            Token::new(TokenKind::Arrow, start, self.cursor.pos())
        } else {
            Token::new(TokenKind::Minus, start, self.cursor.pos())
        }
    }

    /// `!=` is the only valid use of `!`; a bare `!` matches no rule.
    fn lex_bang(&mut self, start: u32) -> Result<Token, CoreError> {
        self.cursor.advance(); // consume '!'
        if self.cursor.peek() == Some('=') {
            self.cursor.advance();
            Ok(Token::new(TokenKind::NotEq, start, self.cursor.pos()))
        } else {
            Err(CoreError::new(
                Module::Lexer,
                "unexpected character '!'".to_string(),
                Some(start),
            ))
        }
    }

    /// `=` -> `Eq`, `==` -> `EqEq`.
    fn lex_eq(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume '='
        if self.cursor.peek() == Some('=') {
            self.cursor.advance();
            Token::new(TokenKind::EqEq, start, self.cursor.pos())
        } else {
            Token::new(TokenKind::Eq, start, self.cursor.pos())
        }
    }

    /// `>` -> `Gt`, `>=` -> `GtEq`.
    fn lex_gt(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume '>'
        if self.cursor.peek() == Some('=') {
            self.cursor.advance();
            Token::new(TokenKind::GtEq, start, self.cursor.pos())
        } else {
            Token::new(TokenKind::Gt, start, self.cursor.pos())
        }
    }

    /// `<` -> `Lt`, `<=` -> `LtEq`.
    fn lex_lt(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume '<'
        if self.cursor.peek() == Some('=') {
            self.cursor.advance();
            Token::new(TokenKind::LtEq, start, self.cursor.pos())
        } else {
            Token::new(TokenKind::Lt, start, self.cursor.pos())
        }
    }

    /// Integers are an unsigned non-empty digit run.
    fn lex_int(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume first digit
        self.cursor.eat_while(|c| c.is_ascii_digit());
        Token::new(TokenKind::Int, start, self.cursor.pos())
    }

    /// Identifiers and keywords. Keywords are checked first per the rule
    /// ordering: a spelling that matches a keyword is never an identifier.
    fn lex_ident(&mut self, start: u32) -> Token {
        self.cursor.advance(); // consume first char
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice(start, self.cursor.pos());
        let kind = keyword_from_str(text).unwrap_or(TokenKind::Ident);
        Token::new(kind, start, self.cursor.pos())
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token, CoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted_eof {
            return None;
        }
        match self.lex_one() {
            Ok(token) => {
                if token.kind == TokenKind::Eof {
                    self.emitted_eof = true;
                }
                Some(Ok(token))
            }
            Err(err) => {
                self.emitted_eof = true;
                Some(Err(err))
            }
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::tokenize(source)
            .expect("lex ok")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn lex_identity_function() {
        assert_eq!(
            kinds("lambda x -> x"),
            vec![
                TokenKind::Lambda,
                TokenKind::Ident,
                TokenKind::Arrow,
                TokenKind::Ident,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn keyword_wins_over_identifier_rule() {
        assert_eq!(
            kinds("if true then 1 else 2"),
            vec![
                TokenKind::If,
                TokenKind::True,
                TokenKind::Then,
                TokenKind::Int,
                TokenKind::Else,
                TokenKind::Int,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn multi_char_operators_win_over_prefixes() {
        assert_eq!(
            kinds("a != b -> c >= d <= e == f"),
            vec![
                TokenKind::Ident,
                TokenKind::NotEq,
                TokenKind::Ident,
                TokenKind::Arrow,
                TokenKind::Ident,
                TokenKind::GtEq,
                TokenKind::Ident,
                TokenKind::LtEq,
                TokenKind::Ident,
                TokenKind::EqEq,
                TokenKind::Ident,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn block_comment_preserves_offsets() {
        let tokens = Lexer::tokenize("1 (* this is dropped *) + 2").expect("lex ok");
        assert_eq!(tokens[0].span, fl_common::Span::new(0, 1));
        let plus = &tokens[1];
        assert_eq!(plus.kind, TokenKind::Plus);
        assert_eq!(plus.span.start, 24);
    }

    #[test]
    fn unmatched_character_is_a_lexer_error() {
        let err = Lexer::tokenize("1 & 2").unwrap_err();
        assert_eq!(err.offset, Some(2));
    }

    #[test]
    fn peek_does_not_consume() {
        let mut lexer = Lexer::new("x y");
        let first = lexer.peek().unwrap();
        assert_eq!(first.kind, TokenKind::Ident);
        let first_again = lexer.peek().unwrap();
        assert_eq!(first_again.span, first.span);
        let consumed = lexer.next().unwrap().unwrap();
        assert_eq!(consumed.span, first.span);
    }

    #[test]
    fn application_tokens() {
        assert_eq!(
            kinds("f(x, y)"),
            vec![
                TokenKind::Ident,
                TokenKind::LParen,
                TokenKind::Ident,
                TokenKind::Comma,
                TokenKind::Ident,
                TokenKind::RParen,
                TokenKind::Eof,
            ]
        );
    }
}
