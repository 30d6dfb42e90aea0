//! Binary operator folding.

use crate::Error;
use crate::lexer::{Source, Token, TokenKind};
use crate::parser::Parser;
use crate::parser::ast::{BinaryOp, Expr, infix_operator};

/// Map an operator token to a supported [`BinaryOp`].
pub(super) fn binary_operator(token: &Token) -> Result<BinaryOp, Error> {
    infix_operator(token.code).ok_or_else(|| Error::syntax(token, "supported binary operator"))
}

impl<S: Source> Parser<S> {
    pub(super) fn parse_binary_expression(
        &mut self,
        op: BinaryOp,
        lhs: Expr,
    ) -> Result<Expr, Error> {
        let rhs = self.parse_right_operand(op)?;
        Ok(Expr::binary(op, lhs, rhs))
    }

    /// Parse the right operand of `op`, absorbing every following operator
    /// that binds strictly tighter than `op`.
    fn parse_right_operand(&mut self, op: BinaryOp) -> Result<Expr, Error> {
        let mut rhs = self.parse_left_operand()?;
        loop {
            let token = self.peek()?;
            if token.kind() != TokenKind::BinaryOperator {
                return Ok(rhs);
            }
            let next = binary_operator(token)?;
            if next.precedence() <= op.precedence() {
                return Ok(rhs);
            }
            self.next()?;
            rhs = self.parse_binary_expression(next, rhs)?;
        }
    }
}
