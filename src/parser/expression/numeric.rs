//! Numeric literal parsing and validation.
//!
//! Turns the lexeme of an integer or real token into a [`Constant`]. Integers
//! land in the signed family while they fit an `i64` and in the unsigned
//! family up to `u64::MAX`. Reals become exact fractions whose numerator and
//! denominator both fit an `i64`.

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{Zero, pow};
use thiserror::Error;

use crate::lexer::TokenCode;
use crate::parser::ast::Constant;

/// Error returned when a numeric literal fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericLiteralError {
    /// Literal did not include any digits.
    #[error("numeric literal is missing digits")]
    MissingDigits,
    /// Digits were not valid for the radix.
    #[error("invalid digits '{digits}' for radix {radix}")]
    InvalidDigits { digits: String, radix: u32 },
    /// Value does not fit any constant family.
    #[error("value '{digits}' (radix {radix}) is out of range")]
    OutOfRange { digits: String, radix: u32 },
    /// Exponent suffix could not be read.
    #[error("invalid exponent '{0}'")]
    InvalidExponent(String),
    /// The token is not a numeric literal.
    #[error("{0:?} is not a numeric literal")]
    NotNumeric(TokenCode),
}

/// Parse the lexeme of a numeric literal token.
///
/// # Errors
/// Returns a [`NumericLiteralError`] when the digits are malformed for the
/// token's radix or the value cannot be represented.
///
/// # Examples
///
/// ```rust
/// use sigmath::lexer::TokenCode;
/// use sigmath::parser::parse_constant;
///
/// let c = parse_constant(TokenCode::HexInteger, "2A");
/// assert_eq!(c.map(|c| c.to_string()).ok().as_deref(), Some("42"));
/// ```
pub fn parse_constant(code: TokenCode, lexeme: &str) -> Result<Constant, NumericLiteralError> {
    if let Some(radix) = code.radix() {
        return parse_integer(lexeme, radix);
    }
    match code {
        TokenCode::Real | TokenCode::ExpReal => parse_real(lexeme),
        other => Err(NumericLiteralError::NotNumeric(other)),
    }
}

/// Parse unsigned `digits` in `radix` into the narrowest constant family.
///
/// # Errors
/// See [`parse_constant`].
pub fn parse_integer(digits: &str, radix: u32) -> Result<Constant, NumericLiteralError> {
    if digits.is_empty() {
        return Err(NumericLiteralError::MissingDigits);
    }
    let value = BigUint::parse_bytes(digits.as_bytes(), radix).ok_or_else(|| {
        NumericLiteralError::InvalidDigits {
            digits: digits.to_owned(),
            radix,
        }
    })?;
    if let Ok(signed) = i64::try_from(&value) {
        return Ok(Constant::integer(signed));
    }
    if u64::try_from(&value).is_ok() {
        return Ok(Constant::natural(value));
    }
    Err(NumericLiteralError::OutOfRange {
        digits: digits.to_owned(),
        radix,
    })
}

/// Parse a decimal real such as `3.25` or `1.5e-3` into an exact fraction.
///
/// # Errors
/// See [`parse_constant`].
pub fn parse_real(lexeme: &str) -> Result<Constant, NumericLiteralError> {
    let out_of_range = || NumericLiteralError::OutOfRange {
        digits: lexeme.to_owned(),
        radix: 10,
    };

    let (mantissa, exponent) = match lexeme.split_once(['e', 'E']) {
        Some((m, e)) => {
            let exp = e
                .parse::<i64>()
                .map_err(|_| NumericLiteralError::InvalidExponent(e.to_owned()))?;
            (m, exp)
        }
        None => (lexeme, 0),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = format!("{whole}{fraction}");
    if digits.is_empty() {
        return Err(NumericLiteralError::MissingDigits);
    }
    let numer = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(|| {
        NumericLiteralError::InvalidDigits {
            digits: digits.clone(),
            radix: 10,
        }
    })?;
    if numer.is_zero() {
        return Ok(Constant::rational(BigRational::zero()));
    }

    let scale = i64::try_from(fraction.len()).map_err(|_| out_of_range())?;
    let shift = exponent.checked_sub(scale).ok_or_else(out_of_range)?;
    // Anything shifted further than this cannot reduce back into 64 bits.
    let limit = u64::try_from(digits.len()).map_err(|_| out_of_range())? + 64;
    if shift.unsigned_abs() > limit {
        return Err(out_of_range());
    }
    let power = usize::try_from(shift.unsigned_abs()).map_err(|_| out_of_range())?;
    let ten_pow = pow(BigInt::from(10), power);
    let value = if shift >= 0 {
        BigRational::from_integer(numer * ten_pow)
    } else {
        BigRational::new(numer, ten_pow)
    };

    if i64::try_from(value.numer()).is_err() || i64::try_from(value.denom()).is_err() {
        return Err(out_of_range());
    }
    Ok(Constant::rational(value))
}
