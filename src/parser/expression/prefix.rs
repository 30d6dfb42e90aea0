//! Left operands: literals and prefix operators.

use crate::Error;
use crate::lexer::{Source, Token, TokenKind};
use crate::parser::Parser;
use crate::parser::ast::{Expr, prefix_operator};

use super::numeric::parse_constant;

impl<S: Source> Parser<S> {
    pub(super) fn parse_left_operand(&mut self) -> Result<Expr, Error> {
        let token = self.peek()?;
        match token.code.operand_kind() {
            TokenKind::Constant => {
                let token = self.next()?;
                parse_literal(&token)
            }
            TokenKind::UnaryOperator => {
                let token = self.next()?;
                self.parse_unary_expression(&token)
            }
            _ => Err(Error::syntax(token, "operand")),
        }
    }

    // The operand binds tighter than any binary operator, so it is a single
    // left operand rather than a full expression.
    fn parse_unary_expression(&mut self, token: &Token) -> Result<Expr, Error> {
        let op = prefix_operator(token.code)
            .ok_or_else(|| Error::syntax(token, "prefix operator"))?;
        let operand = self.parse_left_operand()?;
        Ok(Expr::unary(op, operand))
    }
}

fn parse_literal(token: &Token) -> Result<Expr, Error> {
    parse_constant(token.code, &token.lexeme)
        .map(Expr::Constant)
        .map_err(|source| Error::Literal {
            lexeme: token.text().to_owned(),
            source,
        })
}
