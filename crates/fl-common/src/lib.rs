//! Shared span, token-position, and diagnostic vocabulary for the microml
//! toolchain. Every other crate in the workspace depends on this one.

pub mod error;
pub mod span;
pub mod token;

pub use error::{CoreError, Module};
pub use span::{LineIndex, Span};
pub use token::{keyword_from_str, Token, TokenKind};
