#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::errors::EvalError;

mod arithmetic {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn int_add() {
        assert_eq!(Value::Int(5).add(&Value::Int(3)).unwrap(), Value::Int(8));
    }

    #[test]
    fn float_promotion() {
        assert_eq!(
            Value::Float(1.5).add(&Value::Int(2)).unwrap(),
            Value::Float(3.5)
        );
        assert_eq!(
            Value::Int(2).multiply(&Value::Float(0.25)).unwrap(),
            Value::Float(0.5)
        );
    }

    #[test]
    fn int_subtract_multiply_divide() {
        assert_eq!(
            Value::Int(5).subtract(&Value::Int(8)).unwrap(),
            Value::Int(-3)
        );
        assert_eq!(
            Value::Int(6).multiply(&Value::Int(7)).unwrap(),
            Value::Int(42)
        );
        assert_eq!(Value::Int(7).divide(&Value::Int(2)).unwrap(), Value::Int(3));
        assert_eq!(
            Value::Int(-7).divide(&Value::Int(2)).unwrap(),
            Value::Int(-3)
        );
    }

    #[test]
    fn int_divide_by_zero_errors() {
        assert_eq!(
            Value::Int(1).divide(&Value::Int(0)),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn float_divide_by_zero_is_ieee() {
        assert_eq!(
            Value::Float(1.0).divide(&Value::Float(0.0)).unwrap(),
            Value::Float(f32::INFINITY)
        );
        assert_eq!(
            Value::Int(-1).divide(&Value::Float(0.0)).unwrap(),
            Value::Float(f32::NEG_INFINITY)
        );
        let nan = Value::Float(0.0).divide(&Value::Float(0.0)).unwrap();
        assert!(nan.as_float(0.0).is_nan());
    }

    #[test]
    fn int_overflow_errors() {
        assert_eq!(
            Value::Int(i32::MAX).add(&Value::Int(1)),
            Err(EvalError::IntegerOverflow {
                operation: "addition"
            })
        );
        assert_eq!(
            Value::Int(i32::MIN).subtract(&Value::Int(1)),
            Err(EvalError::IntegerOverflow {
                operation: "subtraction"
            })
        );
        assert!(Value::Int(i32::MAX).multiply(&Value::Int(2)).is_err());
        assert_eq!(
            Value::Int(i32::MIN).divide(&Value::Int(-1)),
            Err(EvalError::IntegerOverflow {
                operation: "division"
            })
        );
    }

    #[test]
    fn non_numeric_operands_count_as_zero() {
        assert_eq!(
            Value::Int(5).add(&Value::Bool(true)).unwrap(),
            Value::Int(5)
        );
        assert_eq!(
            Value::Bool(true).subtract(&Value::Int(2)).unwrap(),
            Value::Int(-2)
        );
        assert_eq!(
            Value::string("9").multiply(&Value::Int(3)).unwrap(),
            Value::Int(0)
        );
        assert_eq!(
            Value::Float(2.0).subtract(&Value::Bool(true)).unwrap(),
            Value::Float(2.0)
        );
    }

    #[test]
    fn bool_divisor_is_zero() {
        assert_eq!(
            Value::Int(4).divide(&Value::Bool(true)),
            Err(EvalError::DivisionByZero)
        );
    }
}

mod concatenation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn string_string() {
        assert_eq!(
            Value::string("a").add(&Value::string("b")).unwrap(),
            Value::string("ab")
        );
    }

    #[test]
    fn string_with_other_kinds() {
        assert_eq!(
            Value::string("x=").add(&Value::Int(5)).unwrap(),
            Value::string("x=5")
        );
        assert_eq!(
            Value::Float(1.5).add(&Value::string("!")).unwrap(),
            Value::string("1.5!")
        );
        assert_eq!(
            Value::Bool(false).add(&Value::string("")).unwrap(),
            Value::string("false")
        );
    }

    #[test]
    fn only_add_concatenates() {
        assert_eq!(
            Value::string("ab").subtract(&Value::string("b")).unwrap(),
            Value::Int(0)
        );
    }
}

mod logical {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn not_on_bool() {
        assert_eq!(Value::Bool(true).not(), Value::Bool(false));
        assert_eq!(Value::Bool(false).not(), Value::Bool(true));
    }

    /// Non-bool operands are falsy, so negating them yields true.
    #[test]
    fn not_on_non_bool_is_true() {
        assert_eq!(Value::Int(0).not(), Value::Bool(true));
        assert_eq!(Value::Int(1).not(), Value::Bool(true));
        assert_eq!(Value::Float(1.0).not(), Value::Bool(true));
        assert_eq!(Value::string("true").not(), Value::Bool(true));
    }

    #[test]
    fn and_or() {
        let t = Value::Bool(true);
        let f = Value::Bool(false);
        assert_eq!(t.bool_and(&t), Value::Bool(true));
        assert_eq!(t.bool_and(&f), Value::Bool(false));
        assert_eq!(f.bool_or(&t), Value::Bool(true));
        assert_eq!(f.bool_or(&f), Value::Bool(false));
    }

    #[test]
    fn and_or_coerce_non_bool_to_false() {
        assert_eq!(
            Value::Bool(true).bool_and(&Value::Int(1)),
            Value::Bool(false)
        );
        assert_eq!(
            Value::string("yes").bool_or(&Value::Float(1.0)),
            Value::Bool(false)
        );
        assert_eq!(
            Value::Int(1).bool_or(&Value::Bool(true)),
            Value::Bool(true)
        );
    }

    #[test]
    fn xor_truth_table() {
        let t = Value::Bool(true);
        let f = Value::Bool(false);
        assert_eq!(t.bool_xor(&t), Value::Bool(false));
        assert_eq!(t.bool_xor(&f), Value::Bool(true));
        assert_eq!(f.bool_xor(&t), Value::Bool(true));
        assert_eq!(f.bool_xor(&f), Value::Bool(false));
    }

    #[test]
    fn xor_with_non_bool() {
        assert_eq!(
            Value::Bool(true).bool_xor(&Value::Int(1)),
            Value::Bool(true)
        );
        assert_eq!(
            Value::Int(1).bool_xor(&Value::string("x")),
            Value::Bool(false)
        );
    }
}

mod equality {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn equal_to() {
        assert_eq!(Value::Int(1).equal_to(&Value::Int(1)), Value::Bool(true));
        assert_eq!(
            Value::Int(1).equal_to(&Value::Bool(true)),
            Value::Bool(false)
        );
        assert_eq!(
            Value::string("a").not_equal_to(&Value::string("b")),
            Value::Bool(true)
        );
    }

    #[test]
    fn operators_leave_operands_unchanged() {
        let left = Value::Int(2);
        let right = Value::Int(3);
        let _ = left.add(&right);
        assert_eq!(left, Value::Int(2));
        assert_eq!(right, Value::Int(3));
    }
}
