//! Reference generator that folds an expression to a number.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use thiserror::Error;

use super::CodeGenerator;
use crate::parser::ast::Expr;

/// Folded value: an integer until a rational operand is involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Integer(BigInt),
    Rational(BigRational),
}

impl Scalar {
    fn to_rational(&self) -> BigRational {
        match self {
            Self::Integer(i) => BigRational::from_integer(i.clone()),
            Self::Rational(r) => r.clone(),
        }
    }

    fn is_zero(&self) -> bool {
        match self {
            Self::Integer(i) => i.is_zero(),
            Self::Rational(r) => r.is_zero(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Rational(r) if r.is_integer() => write!(f, "{}", r.numer()),
            Self::Rational(r) => write!(f, "{}/{}", r.numer(), r.denom()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Evaluates with truncating integer division and exact rational arithmetic.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

/// Fold `expr` with an [`Evaluator`].
///
/// # Errors
/// Returns [`EvalError::DivisionByZero`] when a divisor evaluates to zero.
///
/// # Examples
///
/// ```rust
/// use sigmath::codegen::evaluate;
/// use sigmath::parse_expression;
///
/// let value = parse_expression("1 / 2 + 2 * 3 - 2")
///     .ok()
///     .and_then(|e| evaluate(&e).ok());
/// assert_eq!(value.map(|v| v.to_string()).as_deref(), Some("4"));
/// ```
pub fn evaluate(expr: &Expr) -> Result<Scalar, EvalError> {
    expr.value(&mut Evaluator)
}

fn combine(
    lhs: &Scalar,
    rhs: &Scalar,
    int_op: impl FnOnce(&BigInt, &BigInt) -> BigInt,
    rat_op: impl FnOnce(&BigRational, &BigRational) -> BigRational,
) -> Scalar {
    match (lhs, rhs) {
        (Scalar::Integer(a), Scalar::Integer(b)) => Scalar::Integer(int_op(a, b)),
        _ => Scalar::Rational(rat_op(&lhs.to_rational(), &rhs.to_rational())),
    }
}

fn checked_divisor(rhs: &Scalar) -> Result<(), EvalError> {
    if rhs.is_zero() {
        Err(EvalError::DivisionByZero)
    } else {
        Ok(())
    }
}

impl Evaluator {
    fn div(lhs: &Scalar, rhs: &Scalar) -> Result<Scalar, EvalError> {
        checked_divisor(rhs)?;
        Ok(combine(lhs, rhs, |a, b| a / b, |a, b| a / b))
    }

    fn rem(lhs: &Scalar, rhs: &Scalar) -> Result<Scalar, EvalError> {
        checked_divisor(rhs)?;
        Ok(combine(lhs, rhs, |a, b| a % b, |a, b| a % b))
    }
}

impl CodeGenerator for Evaluator {
    type Value = Scalar;
    type Error = EvalError;

    fn const_int(
        &mut self,
        _bits: u32,
        value: &BigInt,
        _signed: bool,
    ) -> Result<Scalar, EvalError> {
        Ok(Scalar::Integer(value.clone()))
    }

    fn const_rational(&mut self, _bits: u32, value: &BigRational) -> Result<Scalar, EvalError> {
        Ok(Scalar::Rational(value.clone()))
    }

    fn build_neg(&mut self, value: Scalar) -> Result<Scalar, EvalError> {
        Ok(match value {
            Scalar::Integer(i) => Scalar::Integer(-i),
            Scalar::Rational(r) => Scalar::Rational(-r),
        })
    }

    fn build_add(&mut self, lhs: Scalar, rhs: Scalar) -> Result<Scalar, EvalError> {
        Ok(combine(&lhs, &rhs, |a, b| a + b, |a, b| a + b))
    }

    fn build_sub(&mut self, lhs: Scalar, rhs: Scalar) -> Result<Scalar, EvalError> {
        Ok(combine(&lhs, &rhs, |a, b| a - b, |a, b| a - b))
    }

    fn build_mul(&mut self, lhs: Scalar, rhs: Scalar) -> Result<Scalar, EvalError> {
        Ok(combine(&lhs, &rhs, |a, b| a * b, |a, b| a * b))
    }

    fn build_sdiv(&mut self, lhs: Scalar, rhs: Scalar) -> Result<Scalar, EvalError> {
        Self::div(&lhs, &rhs)
    }

    // Unsigned operands are never negative, so truncation matches.
    fn build_udiv(&mut self, lhs: Scalar, rhs: Scalar) -> Result<Scalar, EvalError> {
        Self::div(&lhs, &rhs)
    }

    fn build_srem(&mut self, lhs: Scalar, rhs: Scalar) -> Result<Scalar, EvalError> {
        Self::rem(&lhs, &rhs)
    }

    fn build_urem(&mut self, lhs: Scalar, rhs: Scalar) -> Result<Scalar, EvalError> {
        Self::rem(&lhs, &rhs)
    }
}
