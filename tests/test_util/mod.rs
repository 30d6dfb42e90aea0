//! Shared test utilities for integration tests.
//!
//! These helpers construct AST nodes and assert over parser errors. They mirror
//! a subset of the `sigmath::test_util` module without requiring the
//! `test-support` feature, enabling integration tests to compile against the
//! published library.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use num_rational::BigRational;
use sigmath::{
    Error, parse_expression,
    ast::{BinaryOp, Constant, Expr, UnaryOp},
    lexer::{TokenCode, tokenize_with_trivia},
};

/// Construct a signed integer [`Expr::Constant`].
#[must_use]
pub fn int(n: i64) -> Expr {
    Expr::Constant(Constant::integer(n))
}

/// Construct an unsigned integer [`Expr::Constant`].
#[must_use]
pub fn nat(n: u64) -> Expr {
    Expr::Constant(Constant::natural(n))
}

/// Construct a rational [`Expr::Constant`].
///
/// # Panics
/// Panics if `denom` is zero.
#[must_use]
pub fn rational(numer: i64, denom: i64) -> Expr {
    Expr::Constant(Constant::rational(BigRational::new(numer.into(), denom.into())))
}

#[must_use]
pub fn neg(expr: Expr) -> Expr {
    Expr::unary(UnaryOp::Negative, expr)
}

#[must_use]
pub fn pos(expr: Expr) -> Expr {
    Expr::unary(UnaryOp::Positive, expr)
}

#[must_use]
pub fn bin(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(op, lhs, rhs)
}

/// Parse `src`, panicking with the rendered error on failure.
///
/// # Panics
/// Panics if `src` fails to parse.
#[must_use]
#[track_caller]
pub fn parse_ok(src: &str) -> Expr {
    parse_expression(src).unwrap_or_else(|e| panic!("failed to parse {src:?}: {e}"))
}

/// Parse `src`, panicking if it succeeds.
///
/// # Panics
/// Panics if `src` parses.
#[must_use]
#[track_caller]
pub fn parse_err(src: &str) -> Error {
    match parse_expression(src) {
        Ok(expr) => panic!("expected an error for {src:?}, parsed {expr}"),
        Err(e) => e,
    }
}

/// Assert that parsing `src` fails naming `lexeme` and `what`.
///
/// # Panics
/// Panics if parsing succeeds or the error differs.
#[track_caller]
pub fn assert_parse_error(src: &str, lexeme: &str, what: &str) {
    let e = parse_err(src);
    assert_eq!(e.lexeme(), lexeme, "lexeme mismatch for {src:?}: {e}");
    assert_eq!(e.what(), what, "description mismatch for {src:?}: {e}");
}

/// Token codes of `src` including comments.
///
/// # Panics
/// Panics if `src` does not lex.
#[must_use]
#[track_caller]
pub fn codes_with_trivia(src: &str) -> Vec<TokenCode> {
    tokenize_with_trivia(src)
        .unwrap_or_else(|e| panic!("failed to tokenize {src:?}: {e}"))
        .into_iter()
        .map(|t| t.code)
        .collect()
}
