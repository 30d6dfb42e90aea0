//! Assertion helpers for verifying parser results in tests.

use crate::parser::ast::Expr;
use crate::{Error, parse_expression};

/// Parse `src`, panicking with the error text on failure.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "test-support")]
/// # {
/// use sigmath::test_util::{add, int, parse_ok};
/// assert_eq!(parse_ok("1 + 2"), add(int(1), int(2)));
/// # }
/// ```
///
/// # Panics
/// Panics if `src` fails to parse.
#[must_use]
#[track_caller]
pub fn parse_ok(src: &str) -> Expr {
    parse_expression(src).unwrap_or_else(|e| panic!("failed to parse {src:?}: {e}"))
}

/// Assert that `src` parses to a tree rendering as `expected` in S-expression
/// form.
///
/// # Panics
/// Panics if parsing fails or the rendering differs.
#[track_caller]
pub fn assert_sexpr(src: &str, expected: &str) {
    assert_eq!(parse_ok(src).to_sexpr(), expected, "source: {src:?}");
}

/// Assert that parsing `src` fails with an error naming `lexeme` and `what`.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "test-support")]
/// # {
/// use sigmath::test_util::assert_parse_error;
/// assert_parse_error("1 +", "", "operand");
/// # }
/// ```
///
/// # Panics
/// Panics if parsing succeeds or the error differs.
#[track_caller]
pub fn assert_parse_error(src: &str, lexeme: &str, what: &str) {
    match parse_expression(src) {
        Ok(expr) => panic!("expected an error for {src:?}, parsed {expr}"),
        Err(e) => {
            assert_eq!(e.lexeme(), lexeme, "lexeme mismatch for {src:?}: {e}");
            assert_eq!(e.what(), what, "description mismatch for {src:?}: {e}");
        }
    }
}

/// Assert that parsing `src` fails during lexing.
///
/// # Panics
/// Panics unless parsing fails with [`Error::Lex`] naming `lexeme` and `what`.
#[track_caller]
pub fn assert_lex_error(src: &str, lexeme: &str, what: &str) {
    match parse_expression(src) {
        Err(Error::Lex(e)) => {
            assert_eq!(e.lexeme, lexeme, "lexeme mismatch for {src:?}");
            assert_eq!(e.what, what, "description mismatch for {src:?}");
        }
        other => panic!("expected a lexical error for {src:?}, got {other:?}"),
    }
}
