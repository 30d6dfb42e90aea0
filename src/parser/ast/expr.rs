//! Expression AST.
//!
//! A closed set of node variants: literal leaves, prefix operators and binary
//! operators. Trees are built once by the parser and never mutated.

use std::fmt;

use super::{Constant, ExpressionPrecedence};

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Positive,
    Negative,
}

impl UnaryOp {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Positive => "+",
            Self::Negative => "-",
        }
    }

    #[must_use]
    pub const fn precedence(self) -> ExpressionPrecedence {
        match self {
            Self::Positive | Self::Negative => ExpressionPrecedence::UnaryArithmetic,
        }
    }
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl BinaryOp {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
            Self::Modulo => "Modulo",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
        }
    }

    #[must_use]
    pub const fn precedence(self) -> ExpressionPrecedence {
        match self {
            Self::Add | Self::Subtract => ExpressionPrecedence::BinaryArithmeticSum,
            Self::Multiply | Self::Divide | Self::Modulo => {
                ExpressionPrecedence::BinaryArithmeticProduct
            }
        }
    }
}

/// Parsed expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Constant(Constant),
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    #[must_use]
    pub fn unary(op: UnaryOp, expr: Self) -> Self {
        Self::Unary {
            op,
            expr: Box::new(expr),
        }
    }

    #[must_use]
    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Rank of the node's operator; [`ExpressionPrecedence::None`] for leaves.
    #[must_use]
    pub const fn precedence(&self) -> ExpressionPrecedence {
        match self {
            Self::Constant(_) => ExpressionPrecedence::None,
            Self::Unary { op, .. } => op.precedence(),
            Self::Binary { op, .. } => op.precedence(),
        }
    }

    /// Display the expression as a simple S-expression for tests.
    #[must_use]
    pub fn to_sexpr(&self) -> String {
        match self {
            Self::Constant(c) => c.to_string(),
            Self::Unary { op, expr } => format!("({} {})", op.symbol(), expr.to_sexpr()),
            Self::Binary { op, lhs, rhs } => format!(
                "({} {} {})",
                op.symbol(),
                lhs.to_sexpr(),
                rhs.to_sexpr()
            ),
        }
    }
}

impl From<Constant> for Expr {
    fn from(c: Constant) -> Self {
        Self::Constant(c)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(c) => write!(f, "{c}"),
            Self::Unary { op, expr } => write!(f, "{}({expr})", op.name()),
            Self::Binary { op, lhs, rhs } => write!(f, "{}({lhs}, {rhs})", op.name()),
        }
    }
}

#[cfg(test)]
mod tests;
