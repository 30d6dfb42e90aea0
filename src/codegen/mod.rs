//! Emitting expression trees against an opaque generator.
//!
//! A [`CodeGenerator`] supplies constants and arithmetic build operations over
//! its own value handles. [`Expr::value`] walks a tree bottom-up and asks the
//! generator for one value per node. Division and remainder choose the signed
//! or unsigned instruction from the operands (see [`Expr::is_signed`]).

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::parser::ast::{BinaryOp, Constant, ConstantValue, Expr, UnaryOp};

mod evaluator;

pub use evaluator::{EvalError, Evaluator, Scalar, evaluate};

/// Backend that turns expression nodes into values of its own representation.
pub trait CodeGenerator {
    /// Handle for an emitted value.
    type Value;
    type Error;

    /// Emit an integer constant of `bits` width.
    ///
    /// # Errors
    /// Backend specific.
    fn const_int(
        &mut self,
        bits: u32,
        value: &BigInt,
        signed: bool,
    ) -> Result<Self::Value, Self::Error>;

    /// Emit a rational constant of `bits` width.
    ///
    /// # Errors
    /// Backend specific.
    fn const_rational(
        &mut self,
        bits: u32,
        value: &BigRational,
    ) -> Result<Self::Value, Self::Error>;

    /// # Errors
    /// Backend specific.
    fn build_neg(&mut self, value: Self::Value) -> Result<Self::Value, Self::Error>;

    /// # Errors
    /// Backend specific.
    fn build_add(&mut self, lhs: Self::Value, rhs: Self::Value)
    -> Result<Self::Value, Self::Error>;

    /// # Errors
    /// Backend specific.
    fn build_sub(&mut self, lhs: Self::Value, rhs: Self::Value)
    -> Result<Self::Value, Self::Error>;

    /// # Errors
    /// Backend specific.
    fn build_mul(&mut self, lhs: Self::Value, rhs: Self::Value)
    -> Result<Self::Value, Self::Error>;

    /// # Errors
    /// Backend specific.
    fn build_sdiv(
        &mut self,
        lhs: Self::Value,
        rhs: Self::Value,
    ) -> Result<Self::Value, Self::Error>;

    /// # Errors
    /// Backend specific.
    fn build_udiv(
        &mut self,
        lhs: Self::Value,
        rhs: Self::Value,
    ) -> Result<Self::Value, Self::Error>;

    /// # Errors
    /// Backend specific.
    fn build_srem(
        &mut self,
        lhs: Self::Value,
        rhs: Self::Value,
    ) -> Result<Self::Value, Self::Error>;

    /// # Errors
    /// Backend specific.
    fn build_urem(
        &mut self,
        lhs: Self::Value,
        rhs: Self::Value,
    ) -> Result<Self::Value, Self::Error>;
}

fn emit_constant<G: CodeGenerator>(g: &mut G, c: &Constant) -> Result<G::Value, G::Error> {
    match c.value() {
        ConstantValue::Integer(i) => g.const_int(c.bits(), i, true),
        ConstantValue::Natural(n) => g.const_int(c.bits(), &BigInt::from(n.clone()), false),
        ConstantValue::Rational(r) => g.const_rational(c.bits(), r),
    }
}

impl Expr {
    /// Emit the value of this node.
    ///
    /// # Errors
    /// Propagates the first generator error.
    pub fn value<G: CodeGenerator>(&self, g: &mut G) -> Result<G::Value, G::Error> {
        match self {
            Self::Constant(c) => emit_constant(g, c),
            Self::Unary { op, expr } => match op {
                UnaryOp::Positive => expr.value(g),
                UnaryOp::Negative => expr.build_neg(g),
            },
            Self::Binary { op, lhs, rhs } => match op {
                BinaryOp::Add => lhs.build_add(g, rhs),
                BinaryOp::Subtract => lhs.build_sub(g, rhs),
                BinaryOp::Multiply => lhs.build_mul(g, rhs),
                BinaryOp::Divide => lhs.build_div(g, rhs),
                BinaryOp::Modulo => lhs.build_rem(g, rhs),
            },
        }
    }

    /// Whether the node's value belongs to a signed family.
    ///
    /// Signed integer and rational constants are signed, as is any negation
    /// and any node with a signed operand.
    #[must_use]
    pub fn is_signed(&self) -> bool {
        match self {
            Self::Constant(c) => c.is_signed(),
            Self::Unary {
                op: UnaryOp::Negative,
                ..
            } => true,
            Self::Unary { expr, .. } => expr.is_signed(),
            Self::Binary { lhs, rhs, .. } => lhs.is_signed() || rhs.is_signed(),
        }
    }

    /// # Errors
    /// Propagates the first generator error.
    pub fn build_neg<G: CodeGenerator>(&self, g: &mut G) -> Result<G::Value, G::Error> {
        let v = self.value(g)?;
        g.build_neg(v)
    }

    /// # Errors
    /// Propagates the first generator error.
    pub fn build_add<G: CodeGenerator>(
        &self,
        g: &mut G,
        other: &Self,
    ) -> Result<G::Value, G::Error> {
        let (l, r) = self.operands(g, other)?;
        g.build_add(l, r)
    }

    /// # Errors
    /// Propagates the first generator error.
    pub fn build_sub<G: CodeGenerator>(
        &self,
        g: &mut G,
        other: &Self,
    ) -> Result<G::Value, G::Error> {
        let (l, r) = self.operands(g, other)?;
        g.build_sub(l, r)
    }

    /// # Errors
    /// Propagates the first generator error.
    pub fn build_mul<G: CodeGenerator>(
        &self,
        g: &mut G,
        other: &Self,
    ) -> Result<G::Value, G::Error> {
        let (l, r) = self.operands(g, other)?;
        g.build_mul(l, r)
    }

    /// Signed division when either side is signed, unsigned otherwise.
    ///
    /// # Errors
    /// Propagates the first generator error.
    pub fn build_div<G: CodeGenerator>(
        &self,
        g: &mut G,
        other: &Self,
    ) -> Result<G::Value, G::Error> {
        let signed = self.is_signed() || other.is_signed();
        let (l, r) = self.operands(g, other)?;
        if signed {
            g.build_sdiv(l, r)
        } else {
            g.build_udiv(l, r)
        }
    }

    /// Signed remainder when either side is signed, unsigned otherwise.
    ///
    /// # Errors
    /// Propagates the first generator error.
    pub fn build_rem<G: CodeGenerator>(
        &self,
        g: &mut G,
        other: &Self,
    ) -> Result<G::Value, G::Error> {
        let signed = self.is_signed() || other.is_signed();
        let (l, r) = self.operands(g, other)?;
        if signed {
            g.build_srem(l, r)
        } else {
            g.build_urem(l, r)
        }
    }

    // Left operand is emitted first.
    fn operands<G: CodeGenerator>(
        &self,
        g: &mut G,
        other: &Self,
    ) -> Result<(G::Value, G::Value), G::Error> {
        let l = self.value(g)?;
        let r = other.value(g)?;
        Ok((l, r))
    }
}
