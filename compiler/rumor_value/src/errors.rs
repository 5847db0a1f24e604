//! Error types for value operators.
//!
//! Kind mismatches are resolved by coercion and never reach this module.
//! What remains are arithmetic-domain failures, which the interpreter must
//! see so it can halt the script or substitute a recovery value.

use crate::value::Value;

/// Result of applying a fallible operator.
pub type EvalResult = Result<Value, EvalError>;

/// Arithmetic-domain failure raised by an integer operator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Integer division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// Integer result does not fit in 32 bits.
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
}

/// Integer division by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

/// Integer overflow in the named operation (e.g. `"addition"`).
#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::IntegerOverflow { operation }
}
