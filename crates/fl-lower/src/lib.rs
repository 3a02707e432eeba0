//! C-text lowering for microml: turns a driver's type-checked declarations
//! into a single compilable C source string.
//!
//! Grounded in `original_source/microml/ast.py`'s per-node `compile`
//! methods and `compiler.py`'s `execute`; see [`codegen`] for the details.

pub mod codegen;

pub use codegen::{lower_program, LowerError, PRELUDE};
