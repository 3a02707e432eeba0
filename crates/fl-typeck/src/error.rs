//! Type errors: unbound names and unification failures.

use std::fmt;

use fl_common::error::{CoreError, Module};
use fl_common::Span;

use crate::ty::{Type, TypeVar};

#[derive(Clone, Debug, PartialEq)]
pub enum TypeError {
    /// An identifier used with no matching name in scope.
    UnboundName { name: String, span: Span },
    /// Unifying `left` and `right` failed -- different constructors, or a
    /// function pair whose argument counts don't match. `span` is the
    /// originating equation's location (see `equations::Equation`).
    Mismatch { left: Type, right: Type, span: Span },
    /// A variable would have to unify with a type that contains itself.
    /// `span` is the originating equation's location.
    InfiniteType { var: TypeVar, ty: Type, span: Span },
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeError::UnboundName { name, .. } => write!(f, "unbound name \"{name}\""),
            TypeError::Mismatch { left, right, .. } => {
                write!(f, "cannot unify {left} with {right}")
            }
            TypeError::InfiniteType { var, ty, .. } => {
                write!(f, "infinite type: {var} occurs in {ty}")
            }
        }
    }
}

impl std::error::Error for TypeError {}

impl From<TypeError> for CoreError {
    fn from(err: TypeError) -> Self {
        let offset = match &err {
            TypeError::UnboundName { span, .. }
            | TypeError::Mismatch { span, .. }
            | TypeError::InfiniteType { span, .. } => Some(span.start),
        };
        CoreError::new(Module::Types, err.to_string(), offset)
    }
}
