//! Helpers for constructing expression nodes in tests.

use num_rational::BigRational;

use crate::parser::ast::{BinaryOp, Constant, Expr, UnaryOp};

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

/// Construct a rational [`Expr::Constant`] from `numer / denom`.
///
/// # Panics
/// Panics if `denom` is zero.
#[must_use]
pub fn rational(numer: i64, denom: i64) -> Expr {
    Expr::Constant(Constant::rational(BigRational::new(
        numer.into(),
        denom.into(),
    )))
}

#[must_use]
pub fn pos(expr: Expr) -> Expr {
    Expr::unary(UnaryOp::Positive, expr)
}

#[must_use]
pub fn neg(expr: Expr) -> Expr {
    Expr::unary(UnaryOp::Negative, expr)
}

#[must_use]
pub fn add(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(BinaryOp::Add, lhs, rhs)
}

#[must_use]
pub fn sub(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(BinaryOp::Subtract, lhs, rhs)
}

#[must_use]
pub fn mul(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(BinaryOp::Multiply, lhs, rhs)
}

#[must_use]
pub fn div(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(BinaryOp::Divide, lhs, rhs)
}

#[must_use]
pub fn rem(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(BinaryOp::Modulo, lhs, rhs)
}
