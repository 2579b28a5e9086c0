//! Unit tests for Value and RealValue

use core_types::{format_number, RealValue, Value};

#[cfg(test)]
mod value_tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Undefined.type_name(), "Undefined");
        assert_eq!(Value::NaN.type_name(), "NaN");
        assert_eq!(Value::Number(1.0).type_name(), "Number");
        assert_eq!(Value::String(String::new()).type_name(), "String");
        assert_eq!(Value::Boolean(false).type_name(), "Boolean");
    }

    #[test]
    fn test_real_subset() {
        assert!(Value::Number(0.0).is_real());
        assert!(Value::String("".into()).is_real());
        assert!(Value::Boolean(false).is_real());
        assert!(!Value::Undefined.is_real());
        assert!(!Value::NaN.is_real());
    }

    #[test]
    fn test_real_value_display() {
        assert_eq!(RealValue::Number(10.0).to_string(), "10");
        assert_eq!(RealValue::Boolean(false).to_string(), "false");
        assert_eq!(RealValue::String("ab").to_string(), "ab");
    }
}

#[cfg(test)]
mod number_format_tests {
    use super::*;

    #[test]
    fn test_integral_numbers_have_no_fraction() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(-17.0), "-17");
    }

    #[test]
    fn test_fractional_numbers() {
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_special_numbers() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
