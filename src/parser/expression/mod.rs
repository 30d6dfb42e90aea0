//! Precedence-climbing grammar for arithmetic expressions.
//!
//! The implementation is split across submodules: [`prefix`] parses left
//! operands (literals and prefix operators) and [`infix`] folds binary
//! operators, climbing into the right operand while a tighter-binding
//! operator follows. [`numeric`] converts literal lexemes into constants.

mod infix;
pub mod numeric;
mod prefix;

use crate::Error;
use crate::lexer::{Source, TokenKind};
use crate::parser::Parser;
use crate::parser::ast::Expr;

impl<S: Source> Parser<S> {
    /// Parse an expression, stopping in front of the first token that cannot
    /// continue it.
    ///
    /// Operators of equal precedence group to the left.
    ///
    /// # Errors
    /// Returns a syntax error when no operand is found, when an operand is
    /// followed by an invalid token, or when an operator is unsupported.
    pub fn parse_expression(&mut self) -> Result<Expr, Error> {
        let mut lhs = self.parse_left_operand()?;
        loop {
            let token = self.peek()?;
            match token.kind() {
                TokenKind::BinaryOperator => {
                    let op = infix::binary_operator(token)?;
                    self.next()?;
                    lhs = self.parse_binary_expression(op, lhs)?;
                }
                TokenKind::Invalid => return Err(Error::syntax(token, "binary operator")),
                TokenKind::TernaryOperator => {
                    return Err(Error::syntax(token, "supported binary operator"));
                }
                TokenKind::Ignored
                | TokenKind::Constant
                | TokenKind::Variable
                | TokenKind::UnaryOperator => return Ok(lhs),
            }
        }
    }
}
