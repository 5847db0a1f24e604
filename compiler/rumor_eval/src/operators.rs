//! Operator dispatch for the evaluator.
//!
//! Maps `BinaryOp` / `UnaryOp` nodes onto the `Value` operator methods. The
//! operator set is fixed, so direct enum matching is used instead of trait
//! objects. Coercion rules live with `Value`; this layer only dispatches and
//! reports.

use rumor_value::{BinaryOp, EvalResult, UnaryOp, Value};

/// Evaluate a binary operation.
///
/// Only arithmetic operators can fail; logical and equality operators are
/// total and always return `Ok`.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    let result = match op {
        BinaryOp::Add => left.add(right),
        BinaryOp::Subtract => left.subtract(right),
        BinaryOp::Multiply => left.multiply(right),
        BinaryOp::Divide => left.divide(right),
        BinaryOp::BoolAnd => Ok(left.bool_and(right)),
        BinaryOp::BoolOr => Ok(left.bool_or(right)),
        BinaryOp::BoolXor => Ok(left.bool_xor(right)),
        BinaryOp::Equal => Ok(left.equal_to(right)),
        BinaryOp::NotEqual => Ok(left.not_equal_to(right)),
    };
    match &result {
        Ok(value) => tracing::trace!(?left, %op, ?right, ?value, "binary op"),
        Err(err) => tracing::debug!(?left, %op, ?right, error = %err, "binary op failed"),
    }
    result
}

/// Evaluate a unary operation. Unary operators are total.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> Value {
    let result = match op {
        UnaryOp::Not => value.not(),
    };
    tracing::trace!(%op, ?value, ?result, "unary op");
    result
}
