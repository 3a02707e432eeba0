use fl_common::error::{CoreError, Module};
use fl_common::token::{Token, TokenKind};
use fl_common::Span;

use crate::ast::{BinOp, Decl, Expr, NodeId};

/// Whether a declaration must be the only thing left in the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationMode {
    /// File mode: end-of-input must immediately follow the declaration.
    Strict,
    /// Line mode: stop after the declaration and report where, so the
    /// caller can keep feeding the remaining input.
    Interactive,
}

/// Recursive-descent parser over a pre-lexed token stream.
///
/// The grammar has exactly zero or one binary operator per expression and
/// no precedence to resolve, so this is a direct walk rather than a Pratt
/// parser: each grammar rule is one method.
pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    next_id: NodeId,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            next_id: 0,
        }
    }

    fn fresh_id(&mut self) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn text(&self, span: Span) -> &'src str {
        &self.source[span.start as usize..span.end as usize]
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, CoreError> {
        if self.current_kind() == kind {
            Ok(self.advance())
        } else {
            Err(self.error_expected(kind))
        }
    }

    fn error_expected(&self, expected: TokenKind) -> CoreError {
        let found = self.current();
        CoreError::new(
            Module::Parser,
            format!(
                "expected {}, found {}",
                expected.describe(),
                found.kind.describe()
            ),
            Some(found.span.start),
        )
    }

    /// Parse a single top-level declaration, per `mode`.
    pub fn parse_decl(&mut self, mode: TerminationMode) -> Result<(Decl, u32), CoreError> {
        let decl = self.decl()?;
        let stop_offset = self.current().span.start;
        if mode == TerminationMode::Strict && self.current_kind() != TokenKind::Eof {
            return Err(CoreError::new(
                Module::Parser,
                format!(
                    "unexpected {} after declaration",
                    self.current().kind.describe()
                ),
                Some(stop_offset),
            ));
        }
        Ok((decl, stop_offset))
    }

    /// `decl ::= ID ID* '=' expr`
    fn decl(&mut self) -> Result<Decl, CoreError> {
        let name_tok = self.expect(TokenKind::Ident)?;
        let name = self.text(name_tok.span).to_string();

        let mut params = Vec::new();
        while self.current_kind() == TokenKind::Ident {
            let p = self.advance();
            params.push(self.text(p.span).to_string());
        }

        self.expect(TokenKind::Eq)?;
        let body = self.expr()?;
        let span = name_tok.span.merge(body.span());

        if params.is_empty() {
            Ok(Decl { name, body, span })
        } else {
            let lambda_span = body.span();
            let lambda = Expr::Lambda {
                id: self.fresh_id(),
                params,
                body: Box::new(body),
                span: lambda_span,
            };
            Ok(Decl {
                name,
                body: lambda,
                span,
            })
        }
    }

    /// `expr ::= component (binop component)?` -- exactly zero or one
    /// top-level operator. No precedence or associativity to resolve.
    fn expr(&mut self) -> Result<Expr, CoreError> {
        let lhs = self.component()?;
        if let Some(op) = BinOp::from_token(self.current_kind()) {
            self.advance();
            let rhs = self.component()?;
            let span = lhs.span().merge(rhs.span());
            Ok(Expr::BinOp {
                id: self.fresh_id(),
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
                span,
            })
        } else {
            Ok(lhs)
        }
    }

    fn component(&mut self) -> Result<Expr, CoreError> {
        let tok = self.current().clone();
        match tok.kind {
            TokenKind::Int => {
                self.advance();
                let value: i64 = self.text(tok.span).parse().map_err(|_| {
                    CoreError::new(
                        Module::Parser,
                        format!("integer literal '{}' out of range", self.text(tok.span)),
                        Some(tok.span.start),
                    )
                })?;
                Ok(Expr::Int {
                    id: self.fresh_id(),
                    value,
                    span: tok.span,
                })
            }
            TokenKind::True | TokenKind::False => {
                self.advance();
                Ok(Expr::Bool {
                    id: self.fresh_id(),
                    value: tok.kind == TokenKind::True,
                    span: tok.span,
                })
            }
            TokenKind::Ident => {
                self.advance();
                let name = self.text(tok.span).to_string();
                if self.current_kind() == TokenKind::LParen {
                    self.app(name, tok.span)
                } else {
                    Ok(Expr::Ident {
                        id: self.fresh_id(),
                        name,
                        span: tok.span,
                    })
                }
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::If => self.if_expr(tok.span),
            TokenKind::Lambda => self.lambda_expr(tok.span),
            _ => Err(CoreError::new(
                Module::Parser,
                format!("expected an expression, found {}", tok.kind.describe()),
                Some(tok.span.start),
            )),
        }
    }

    /// `'if' expr 'then' expr 'else' expr`
    fn if_expr(&mut self, start: Span) -> Result<Expr, CoreError> {
        self.advance(); // 'if'
        let cond = self.expr()?;
        self.expect(TokenKind::Then)?;
        let then_branch = self.expr()?;
        self.expect(TokenKind::Else)?;
        let else_branch = self.expr()?;
        let span = start.merge(else_branch.span());
        Ok(Expr::If {
            id: self.fresh_id(),
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
            span,
        })
    }

    /// `'lambda' ID* '->' expr`
    fn lambda_expr(&mut self, start: Span) -> Result<Expr, CoreError> {
        self.advance(); // 'lambda'
        let mut params = Vec::new();
        while self.current_kind() == TokenKind::Ident {
            let p = self.advance();
            params.push(self.text(p.span).to_string());
        }
        self.expect(TokenKind::Arrow)?;
        let body = self.expr()?;
        let span = start.merge(body.span());
        Ok(Expr::Lambda {
            id: self.fresh_id(),
            params,
            body: Box::new(body),
            span,
        })
    }

    /// `ID '(' (expr (',' expr)*)? ')'`. Called once the callee name token
    /// has already been consumed and an `(` has been seen.
    fn app(&mut self, callee: String, callee_span: Span) -> Result<Expr, CoreError> {
        self.expect(TokenKind::LParen)?;
        let mut args = Vec::new();
        if self.current_kind() != TokenKind::RParen {
            args.push(self.expr()?);
            while self.current_kind() == TokenKind::Comma {
                self.advance();
                args.push(self.expr()?);
            }
        }
        let close = self.expect(TokenKind::RParen)?;
        let span = callee_span.merge(close.span);
        Ok(Expr::App {
            id: self.fresh_id(),
            callee,
            args,
            span,
        })
    }
}
