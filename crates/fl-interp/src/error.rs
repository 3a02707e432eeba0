//! Run-time evaluation failures.

use std::fmt;

use fl_common::error::{CoreError, Module};

#[derive(Clone, Debug, PartialEq)]
pub enum InterpError {
    /// A name with no binding in the current environment. Type-checking a
    /// program through `fl-driver` rules this out before it ever reaches
    /// the evaluator; this only fires for an expression evaluated on its
    /// own, bypassing the driver.
    UnboundName(String),
    /// A closure or builtin was applied to the wrong number of arguments.
    /// `fl-typeck`'s unifier already rejects this for anything compiled
    /// through a driver, so the check here is a second, independent line
    /// of defense against evaluating a not-actually-well-typed tree.
    ArityMismatch { expected: usize, got: usize },
    /// Integer division by zero.
    DivisionByZero,
    /// Something other than a closure or builtin was applied.
    NotCallable,
}

impl fmt::Display for InterpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpError::UnboundName(name) => write!(f, "unbound name \"{name}\""),
            InterpError::ArityMismatch { expected, got } => write!(
                f,
                "called with {got} argument{}, but expected {expected}",
                if *got == 1 { "" } else { "s" }
            ),
            InterpError::DivisionByZero => write!(f, "division by zero"),
            InterpError::NotCallable => write!(f, "value is not callable"),
        }
    }
}

impl std::error::Error for InterpError {}

impl From<InterpError> for CoreError {
    fn from(err: InterpError) -> Self {
        CoreError::new(Module::Interpretation, err.to_string(), None)
    }
}
