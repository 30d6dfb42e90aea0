//! Helpers for constructing expression nodes and asserting parser errors in
//! tests.
//!
//! These functions reduce boilerplate when asserting over [`Expr`] trees and
//! verifying that failures carry the expected lexeme and description.
//!
//! [`Expr`]: crate::ast::Expr

mod assertions;
mod expressions;

pub use assertions::{assert_lex_error, assert_parse_error, assert_sexpr, parse_ok};
pub use expressions::{add, div, int, mul, nat, neg, pos, rational, rem, sub};

use crate::lexer::{TokenCode, tokenize_without_trivia};

/// Token codes of `src` without comments, ending with
/// [`TokenCode::EndOfFile`].
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use sigmath::lexer::TokenCode;
/// use sigmath::test_util::token_codes;
/// assert_eq!(token_codes("1 + 2").len(), 4);
/// # }
/// ```
///
/// # Panics
/// Panics if `src` does not lex.
#[must_use]
#[track_caller]
pub fn token_codes(src: &str) -> Vec<TokenCode> {
    tokenize_without_trivia(src)
        .unwrap_or_else(|e| panic!("failed to tokenize {src:?}: {e}"))
        .into_iter()
        .map(|t| t.code)
        .collect()
}
