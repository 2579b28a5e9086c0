//! Binary operator coercion
//!
//! The left operand picks the row, the right operand the column:
//!
//! | left \ right | Number   | Boolean  | String   | Undefined     | NaN       |
//! |--------------|----------|----------|----------|---------------|-----------|
//! | Number       | arith    | arith    | `+` cat  | NaN           | NaN       |
//! | Boolean      | arith    | arith    | `+` cat  | NaN           | NaN       |
//! | String       | `+` cat  | `+` cat  | `+` cat  | `"undefined"` | `"NaN"`   |
//! | Undefined    | NaN      | NaN      | NaN      | NaN           | NaN       |
//! | NaN          | NaN      | NaN      | NaN      | NaN           | NaN       |
//!
//! Booleans take part in arithmetic as 1 and 0. A String row with an
//! Undefined or NaN column concatenates whatever the operator is. Any pairing
//! with no rule yields NaN.

use core_types::{EvalError, RealValue, Value};
use parser::TokenKind;

fn numeric(real: RealValue<'_>) -> Option<f64> {
    match real {
        RealValue::Number(n) => Some(n),
        RealValue::Boolean(b) => Some(if b { 1.0 } else { 0.0 }),
        RealValue::String(_) => None,
    }
}

/// Arithmetic on two numbers
pub fn arithmetic(operator: TokenKind, left: f64, right: f64) -> Result<Value, EvalError> {
    let result = match operator {
        TokenKind::Plus => left + right,
        TokenKind::Dash => left - right,
        TokenKind::Asterisk => left * right,
        TokenKind::Slash => left / right,
        TokenKind::Percent => left % right,
        other => {
            return Err(EvalError::OperatorNotAllowed {
                operator: format!("{:?}", other),
            })
        }
    };
    Ok(Value::Number(result))
}

/// Apply `operator` to two evaluated operands
///
/// ```
/// use core_types::Value;
/// use interpreter::binary_operation;
/// use parser::TokenKind;
///
/// let sum = binary_operation(TokenKind::Plus, &Value::Number(1.0), &Value::Boolean(true));
/// assert_eq!(sum, Ok(Value::Number(2.0)));
///
/// let text = binary_operation(TokenKind::Plus, &Value::String("a".into()), &Value::Number(1.0));
/// assert_eq!(text, Ok(Value::String("a1".into())));
/// ```
pub fn binary_operation(
    operator: TokenKind,
    left: &Value,
    right: &Value,
) -> Result<Value, EvalError> {
    let Some(left_real) = left.as_real() else {
        return Ok(Value::NaN);
    };

    if let RealValue::String(text) = left_real {
        match right {
            Value::Undefined => return Ok(Value::String(format!("{}undefined", text))),
            Value::NaN => return Ok(Value::String(format!("{}NaN", text))),
            _ => {}
        }
    }

    let Some(right_real) = right.as_real() else {
        return Ok(Value::NaN);
    };

    if let (Some(a), Some(b)) = (numeric(left_real), numeric(right_real)) {
        return arithmetic(operator, a, b);
    }

    if operator == TokenKind::Plus {
        return Ok(Value::String(format!("{}{}", left_real, right_real)));
    }

    Ok(Value::NaN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::{Asterisk, Dash, DoubleEquals, Percent, Plus, Slash};

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn text(s: &str) -> Value {
        Value::String(s.to_string())
    }

    #[test]
    fn test_number_arithmetic() {
        assert_eq!(binary_operation(Plus, &num(2.0), &num(3.0)), Ok(num(5.0)));
        assert_eq!(binary_operation(Dash, &num(2.0), &num(3.0)), Ok(num(-1.0)));
        assert_eq!(binary_operation(Asterisk, &num(2.0), &num(3.0)), Ok(num(6.0)));
        assert_eq!(binary_operation(Slash, &num(3.0), &num(2.0)), Ok(num(1.5)));
        assert_eq!(binary_operation(Percent, &num(7.0), &num(4.0)), Ok(num(3.0)));
    }

    #[test]
    fn test_division_by_zero_is_infinite() {
        assert_eq!(
            binary_operation(Slash, &num(1.0), &num(0.0)),
            Ok(num(f64::INFINITY))
        );
    }

    #[test]
    fn test_booleans_count_as_digits() {
        let t = Value::Boolean(true);
        let f = Value::Boolean(false);
        assert_eq!(binary_operation(Plus, &num(1.0), &t), Ok(num(2.0)));
        assert_eq!(binary_operation(Asterisk, &t, &num(5.0)), Ok(num(5.0)));
        assert_eq!(binary_operation(Plus, &t, &t), Ok(num(2.0)));
        assert_eq!(binary_operation(Dash, &f, &t), Ok(num(-1.0)));
    }

    #[test]
    fn test_plus_concatenates_mixed_operands() {
        assert_eq!(binary_operation(Plus, &text("a"), &num(1.0)), Ok(text("a1")));
        assert_eq!(binary_operation(Plus, &num(1.5), &text("a")), Ok(text("1.5a")));
        assert_eq!(
            binary_operation(Plus, &Value::Boolean(true), &text("!")),
            Ok(text("true!"))
        );
        assert_eq!(binary_operation(Plus, &text("a"), &text("b")), Ok(text("ab")));
    }

    #[test]
    fn test_string_with_undefined_or_nan_ignores_operator() {
        assert_eq!(
            binary_operation(Plus, &text("a"), &Value::Undefined),
            Ok(text("aundefined"))
        );
        assert_eq!(
            binary_operation(Dash, &text("a"), &Value::Undefined),
            Ok(text("aundefined"))
        );
        assert_eq!(
            binary_operation(Asterisk, &text("a"), &Value::NaN),
            Ok(text("aNaN"))
        );
    }

    #[test]
    fn test_uncovered_pairings_are_nan() {
        assert_eq!(binary_operation(Plus, &Value::Undefined, &num(1.0)), Ok(Value::NaN));
        assert_eq!(binary_operation(Plus, &num(1.0), &Value::Undefined), Ok(Value::NaN));
        assert_eq!(binary_operation(Plus, &Value::NaN, &text("a")), Ok(Value::NaN));
        assert_eq!(binary_operation(Dash, &text("a"), &num(1.0)), Ok(Value::NaN));
        assert_eq!(binary_operation(Asterisk, &num(2.0), &text("3")), Ok(Value::NaN));
    }

    #[test]
    fn test_non_arithmetic_operator_rejected() {
        assert_eq!(
            binary_operation(DoubleEquals, &num(1.0), &num(1.0)),
            Err(EvalError::OperatorNotAllowed {
                operator: "DoubleEquals".to_string()
            })
        );
    }

    #[test]
    fn test_non_arithmetic_operator_on_strings_is_nan() {
        assert_eq!(
            binary_operation(DoubleEquals, &text("a"), &text("a")),
            Ok(Value::NaN)
        );
    }
}
