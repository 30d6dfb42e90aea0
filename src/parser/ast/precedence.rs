//! Operator precedence table for arithmetic expressions.
//!
//! Ranks are totally ordered and compare directly: a higher rank binds
//! tighter. Unary operators rank above every binary operator so that `-2*3`
//! groups as `(-2)*3`.

use crate::lexer::TokenCode;

use super::{BinaryOp, UnaryOp};

/// Binding rank of an expression node or operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ExpressionPrecedence {
    /// Leaves, which bind nothing.
    None = 0x00,
    BinaryLogical = 0x40,
    BinaryComparison = 0x42,
    BinaryRelational = 0x44,
    BinaryBitwise = 0x48,
    BinaryArithmeticSum = 0x4E,
    BinaryArithmeticProduct = 0x4F,
    UnaryLogical = 0x60,
    UnaryBitwise = 0x62,
    UnaryArithmetic = 0x64,
}

const PREFIX_TABLE: &[(TokenCode, UnaryOp)] = &[
    (TokenCode::Plus, UnaryOp::Positive),
    (TokenCode::Minus, UnaryOp::Negative),
];

const INFIX_TABLE: &[(TokenCode, BinaryOp)] = &[
    (TokenCode::Star, BinaryOp::Multiply),
    (TokenCode::Slash, BinaryOp::Divide),
    (TokenCode::Percent, BinaryOp::Modulo),
    (TokenCode::Plus, BinaryOp::Add),
    (TokenCode::Minus, BinaryOp::Subtract),
];

/// Lookup the [`UnaryOp`] for a prefix operator token.
pub(crate) fn prefix_operator(code: TokenCode) -> Option<UnaryOp> {
    PREFIX_TABLE
        .iter()
        .find_map(|(c, op)| (code == *c).then_some(*op))
}

/// Lookup the [`BinaryOp`] for an infix operator token.
pub(crate) fn infix_operator(code: TokenCode) -> Option<BinaryOp> {
    INFIX_TABLE
        .iter()
        .find_map(|(c, op)| (code == *c).then_some(*op))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_follow_arithmetic_convention() {
        use ExpressionPrecedence as P;
        let ascending = [
            P::None,
            P::BinaryLogical,
            P::BinaryComparison,
            P::BinaryRelational,
            P::BinaryBitwise,
            P::BinaryArithmeticSum,
            P::BinaryArithmeticProduct,
            P::UnaryLogical,
            P::UnaryBitwise,
            P::UnaryArithmetic,
        ];
        assert!(ascending.windows(2).all(|w| matches!(w, [a, b] if a < b)));
    }

    #[test]
    fn product_binds_tighter_than_sum() {
        let mul = infix_operator(TokenCode::Star).map(BinaryOp::precedence);
        let add = infix_operator(TokenCode::Plus).map(BinaryOp::precedence);
        assert!(mul > add);
        assert_eq!(infix_operator(TokenCode::EqEq), None);
        assert_eq!(prefix_operator(TokenCode::Minus), Some(UnaryOp::Negative));
        assert_eq!(prefix_operator(TokenCode::PlusPlus), None);
    }
}
