//! Literal constants held by the expression tree.

use std::cmp::Ordering;
use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;

/// Numeric family of a [`Constant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstantKind {
    /// Signed integer.
    Integer,
    /// Unsigned integer too large for the signed 64-bit range.
    Natural,
    /// Exact fraction, written in the source as a real literal.
    Rational,
}

/// Value carried by a [`Constant`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConstantValue {
    Integer(BigInt),
    Natural(BigUint),
    Rational(BigRational),
}

/// A literal leaf: its value plus the bit width it occupies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constant {
    bits: u32,
    value: ConstantValue,
}

impl Constant {
    /// Signed integer constant; 32 bits wide when the value fits an `i32`.
    #[must_use]
    pub fn integer(value: impl Into<BigInt>) -> Self {
        let value = value.into();
        let bits = if i32::try_from(&value).is_ok() { 32 } else { 64 };
        Self {
            bits,
            value: ConstantValue::Integer(value),
        }
    }

    /// Unsigned integer constant; 32 bits wide when the value fits a `u32`.
    #[must_use]
    pub fn natural(value: impl Into<BigUint>) -> Self {
        let value = value.into();
        let bits = if u32::try_from(&value).is_ok() { 32 } else { 64 };
        Self {
            bits,
            value: ConstantValue::Natural(value),
        }
    }

    /// Rational constant stored as a 64-bit numerator/denominator pair.
    #[must_use]
    pub fn rational(value: BigRational) -> Self {
        Self {
            bits: 64,
            value: ConstantValue::Rational(value),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ConstantKind {
        match self.value {
            ConstantValue::Integer(_) => ConstantKind::Integer,
            ConstantValue::Natural(_) => ConstantKind::Natural,
            ConstantValue::Rational(_) => ConstantKind::Rational,
        }
    }

    #[must_use]
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    #[must_use]
    pub const fn value(&self) -> &ConstantValue {
        &self.value
    }

    /// Whether the constant belongs to a signed family.
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        !matches!(self.value, ConstantValue::Natural(_))
    }

    /// Exact value as a fraction.
    #[must_use]
    pub fn to_rational(&self) -> BigRational {
        match &self.value {
            ConstantValue::Integer(i) => BigRational::from_integer(i.clone()),
            ConstantValue::Natural(n) => BigRational::from_integer(BigInt::from(n.clone())),
            ConstantValue::Rational(r) => r.clone(),
        }
    }

    /// Compare two constants by numeric value, regardless of kind or width.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use sigmath::ast::Constant;
    ///
    /// let three = Constant::integer(3);
    /// let big = Constant::natural(u64::MAX);
    /// assert_eq!(three.cmp_value(&big), Ordering::Less);
    /// ```
    #[must_use]
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        match (&self.value, &other.value) {
            (ConstantValue::Integer(a), ConstantValue::Integer(b)) => a.cmp(b),
            (ConstantValue::Natural(a), ConstantValue::Natural(b)) => a.cmp(b),
            _ => self.to_rational().cmp(&other.to_rational()),
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            ConstantValue::Integer(i) => write!(f, "{i}"),
            ConstantValue::Natural(n) => write!(f, "{n}"),
            ConstantValue::Rational(r) => write!(f, "{}/{}", r.numer(), r.denom()),
        }
    }
}
