//! Operator algebra on `Value`.
//!
//! # Coercion Rules
//!
//! Arithmetic (`add`, `subtract`, `multiply`, `divide`):
//! 1. `add` with a string on either side concatenates the `Display` forms.
//! 2. Otherwise, a float on either side promotes the operation to `f32`.
//!    Ints widen, bools and strings count as `0.0`.
//! 3. Otherwise the operation runs on `i32`. Bools and strings count as `0`.
//!
//! Integer arithmetic is checked: overflow and division by zero return an
//! `EvalError`. Float arithmetic follows IEEE-754 and never fails.
//!
//! Logical (`not`, `bool_and`, `bool_or`, `bool_xor`): every operand is read
//! with `as_bool(false)`, so non-bool values are falsy. These are total.

use super::Value;
use crate::errors::{division_by_zero, integer_overflow, EvalResult};

/// Operand pair after numeric promotion.
enum Numeric {
    Int(i32, i32),
    Float(f32, f32),
}

impl Numeric {
    fn promote(left: &Value, right: &Value) -> Self {
        if left.is_float() || right.is_float() {
            Numeric::Float(float_operand(left), float_operand(right))
        } else {
            Numeric::Int(left.as_int(0), right.as_int(0))
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "int to float promotion is the documented script semantics"
)]
fn float_operand(value: &Value) -> f32 {
    match value {
        Value::Float(f) => *f,
        Value::Int(n) => *n as f32,
        Value::Bool(_) | Value::Str(_) => 0.0,
    }
}

/// Checked integer arithmetic; `None` means overflow.
#[inline]
fn checked_arith(result: Option<i32>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

impl Value {
    /// Logical negation.
    ///
    /// Non-bool operands are falsy, so `Int(1).not()` is `Bool(true)`.
    pub fn not(&self) -> Value {
        Value::Bool(!self.as_bool(false))
    }

    /// Addition, or concatenation when either side is a string.
    pub fn add(&self, other: &Value) -> EvalResult {
        if self.is_string() || other.is_string() {
            return Ok(Value::string(format!("{self}{other}")));
        }
        match Numeric::promote(self, other) {
            Numeric::Int(a, b) => checked_arith(a.checked_add(b), "addition"),
            Numeric::Float(a, b) => Ok(Value::Float(a + b)),
        }
    }

    pub fn subtract(&self, other: &Value) -> EvalResult {
        match Numeric::promote(self, other) {
            Numeric::Int(a, b) => checked_arith(a.checked_sub(b), "subtraction"),
            Numeric::Float(a, b) => Ok(Value::Float(a - b)),
        }
    }

    pub fn multiply(&self, other: &Value) -> EvalResult {
        match Numeric::promote(self, other) {
            Numeric::Int(a, b) => checked_arith(a.checked_mul(b), "multiplication"),
            Numeric::Float(a, b) => Ok(Value::Float(a * b)),
        }
    }

    /// Division.
    ///
    /// Integer division truncates toward zero and fails on a zero divisor.
    /// Float division by zero yields infinity or NaN.
    pub fn divide(&self, other: &Value) -> EvalResult {
        match Numeric::promote(self, other) {
            Numeric::Int(_, 0) => Err(division_by_zero()),
            Numeric::Int(a, b) => checked_arith(a.checked_div(b), "division"),
            Numeric::Float(a, b) => Ok(Value::Float(a / b)),
        }
    }

    pub fn bool_and(&self, other: &Value) -> Value {
        Value::Bool(self.as_bool(false) && other.as_bool(false))
    }

    pub fn bool_or(&self, other: &Value) -> Value {
        Value::Bool(self.as_bool(false) || other.as_bool(false))
    }

    /// Exclusive or, defined through `bool_and` and `bool_or`.
    pub fn bool_xor(&self, other: &Value) -> Value {
        let and = self.bool_and(other).as_bool(false);
        let or = self.bool_or(other).as_bool(false);
        Value::Bool(!and && or)
    }

    /// Structural equality as a script value.
    pub fn equal_to(&self, other: &Value) -> Value {
        Value::Bool(self == other)
    }

    pub fn not_equal_to(&self, other: &Value) -> Value {
        Value::Bool(self != other)
    }
}

#[cfg(test)]
mod tests;
