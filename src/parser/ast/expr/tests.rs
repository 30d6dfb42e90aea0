//! Tests for operator naming and tree rendering.

use super::{BinaryOp, Expr, UnaryOp};
use crate::parser::ast::{Constant, ExpressionPrecedence};

fn int(n: i64) -> Expr {
    Expr::Constant(Constant::integer(n))
}

#[test]
fn binary_op_symbols_match_expected() {
    let cases = [
        (BinaryOp::Add, "+", "Add"),
        (BinaryOp::Subtract, "-", "Subtract"),
        (BinaryOp::Multiply, "*", "Multiply"),
        (BinaryOp::Divide, "/", "Divide"),
        (BinaryOp::Modulo, "%", "Modulo"),
    ];

    for (op, symbol, name) in cases {
        assert_eq!(op.symbol(), symbol, "BinaryOp::{op:?} symbol mismatch");
        assert_eq!(op.name(), name, "BinaryOp::{op:?} name mismatch");
    }
}

#[test]
fn unary_op_symbols_match_expected() {
    assert_eq!(UnaryOp::Positive.symbol(), "+");
    assert_eq!(UnaryOp::Negative.symbol(), "-");
    assert_eq!(UnaryOp::Negative.name(), "Negative");
}

#[test]
fn display_uses_operator_names() {
    let tree = Expr::binary(
        BinaryOp::Subtract,
        Expr::binary(
            BinaryOp::Add,
            Expr::binary(BinaryOp::Divide, int(1), int(2)),
            Expr::binary(BinaryOp::Multiply, int(2), int(3)),
        ),
        int(2),
    );
    assert_eq!(
        tree.to_string(),
        "Subtract(Add(Divide(1, 2), Multiply(2, 3)), 2)"
    );
    assert_eq!(tree.to_sexpr(), "(- (+ (/ 1 2) (* 2 3)) 2)");
}

#[test]
fn unary_renders_prefix() {
    let tree = Expr::unary(UnaryOp::Negative, int(5));
    assert_eq!(tree.to_string(), "Negative(5)");
    assert_eq!(tree.to_sexpr(), "(- 5)");
}

#[test]
fn node_precedence() {
    assert_eq!(int(1).precedence(), ExpressionPrecedence::None);
    assert_eq!(
        Expr::unary(UnaryOp::Positive, int(1)).precedence(),
        ExpressionPrecedence::UnaryArithmetic
    );
    assert_eq!(
        Expr::binary(BinaryOp::Modulo, int(1), int(2)).precedence(),
        ExpressionPrecedence::BinaryArithmeticProduct
    );
}
