//! The plain AST produced by the parser.
//!
//! Every node carries a [`NodeId`], a monotonically increasing identity
//! assigned at parse time. The type checker never mutates these nodes; it
//! instead builds a parallel `NodeId -> Type` map, so the AST stays an
//! immutable, easily-testable value type end to end.

use fl_common::Span;

pub type NodeId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Neq,
    Lt,
    Leq,
    Gt,
    Geq,
}

impl BinOp {
    /// Whether this operator's result type is `Bool` rather than `Int`.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinOp::Eq | BinOp::Neq | BinOp::Lt | BinOp::Leq | BinOp::Gt | BinOp::Geq
        )
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Eq => "==",
            BinOp::Neq => "!=",
            BinOp::Lt => "<",
            BinOp::Leq => "<=",
            BinOp::Gt => ">",
            BinOp::Geq => ">=",
        }
    }

    pub fn from_token(kind: fl_common::TokenKind) -> Option<Self> {
        use fl_common::TokenKind;
        Some(match kind {
            TokenKind::Plus => BinOp::Add,
            TokenKind::Minus => BinOp::Sub,
            TokenKind::Star => BinOp::Mul,
            TokenKind::Slash => BinOp::Div,
            TokenKind::EqEq => BinOp::Eq,
            TokenKind::NotEq => BinOp::Neq,
            TokenKind::Lt => BinOp::Lt,
            TokenKind::LtEq => BinOp::Leq,
            TokenKind::Gt => BinOp::Gt,
            TokenKind::GtEq => BinOp::Geq,
            _ => return None,
        })
    }
}

/// An expression node. Binary expressions are non-recursive on the right:
/// a `BinOp` node's operands are themselves [`Expr::component`]-level forms,
/// never another `BinOp` — the grammar allows exactly zero or one top-level
/// operator per expression, so nesting only happens through parentheses.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Int {
        id: NodeId,
        value: i64,
        span: Span,
    },
    Bool {
        id: NodeId,
        value: bool,
        span: Span,
    },
    Ident {
        id: NodeId,
        name: String,
        span: Span,
    },
    If {
        id: NodeId,
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
        span: Span,
    },
    /// `lambda x y -> body`. Also the desugared form of `f x y = body`.
    Lambda {
        id: NodeId,
        params: Vec<String>,
        body: Box<Expr>,
        span: Span,
    },
    BinOp {
        id: NodeId,
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        span: Span,
    },
    /// `callee(args...)`. The callee is always a bare name, never a general
    /// expression — the grammar requires an identifier immediately followed
    /// by `(`.
    App {
        id: NodeId,
        callee: String,
        args: Vec<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn id(&self) -> NodeId {
        match self {
            Expr::Int { id, .. }
            | Expr::Bool { id, .. }
            | Expr::Ident { id, .. }
            | Expr::If { id, .. }
            | Expr::Lambda { id, .. }
            | Expr::BinOp { id, .. }
            | Expr::App { id, .. } => *id,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Expr::Int { span, .. }
            | Expr::Bool { span, .. }
            | Expr::Ident { span, .. }
            | Expr::If { span, .. }
            | Expr::Lambda { span, .. }
            | Expr::BinOp { span, .. }
            | Expr::App { span, .. } => *span,
        }
    }
}

/// A top-level declaration: `name = body`. `f x y = body` is parsed as
/// sugar for `f = lambda x y -> body`, so by the time a `Decl` exists its
/// parameter list (if any) has already been folded into a `Lambda` body.
#[derive(Debug, Clone, PartialEq)]
pub struct Decl {
    pub name: String,
    pub body: Expr,
    pub span: Span,
}
