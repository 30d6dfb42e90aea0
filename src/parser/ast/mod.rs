//! Expression tree produced by the parser.
//!
//! [`Expr`] is a closed sum of constant, unary and binary nodes. Each node
//! reports an [`ExpressionPrecedence`] used while parsing; it plays no part in
//! the tree's identity.

mod expr;
mod number;
mod precedence;

pub use expr::{BinaryOp, Expr, UnaryOp};
pub use number::{Constant, ConstantKind, ConstantValue};
pub use precedence::ExpressionPrecedence;
pub(crate) use precedence::{infix_operator, prefix_operator};
