//! Library crate for sigmath.
//!
//! Exposes the hand-written lexer, the precedence-climbing expression parser
//! and the code generation boundary for arithmetic expressions.

#![forbid(unsafe_code)]

pub mod codegen;
pub mod error;
pub mod lexer;
pub mod parser;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use codegen::{CodeGenerator, Evaluator, evaluate};
pub use error::Error;
pub use lexer::{tokenize_with_trivia, tokenize_without_trivia};
pub use parser::{Parser, ast, parse_expression};
