//! Contract tests for interpreter API
//!
//! These tests verify the public API behaves as documented.

use core_types::{Error, EvalError, Value};
use interpreter::{run, Environment, Interpreter};
use proptest::prelude::*;

fn text(s: &str) -> Value {
    Value::String(s.to_string())
}

/// Test run() evaluates numbers and booleans arithmetically
#[test]
fn test_run_number_boolean_arithmetic() {
    assert_eq!(run("1 + true"), Ok(Value::Number(2.0)));
    assert_eq!(run("true + true"), Ok(Value::Number(2.0)));
    assert_eq!(run("6 * 7"), Ok(Value::Number(42.0)));
}

/// Test run() concatenates when a string takes part in `+`
#[test]
fn test_run_concatenation() {
    assert_eq!(run("'a' + 1"), Ok(text("a1")));
    assert_eq!(run("1 + 'a'"), Ok(text("1a")));
    assert_eq!(run("false + 'x'"), Ok(text("falsex")));
}

/// Test run() handles undefined on either side
#[test]
fn test_run_undefined_operands() {
    assert_eq!(run("undefined + 1"), Ok(Value::NaN));
    assert_eq!(run("1 + undefined"), Ok(Value::NaN));
    assert_eq!(run("'a' + undefined"), Ok(text("aundefined")));
}

/// Test run() reports unsupported operators
#[test]
fn test_run_operator_not_allowed() {
    assert_eq!(
        run("1 == 1"),
        Err(Error::Eval(EvalError::OperatorNotAllowed {
            operator: "DoubleEquals".to_string()
        }))
    );
}

/// Test run() reports node kinds without an evaluation rule
#[test]
fn test_run_not_implemented() {
    let err = run("if (a) b").unwrap_err();
    assert_eq!(err.to_string(), "Evaluation error: Don't know how to evaluate `IfStatement`");
}

/// Test run() reports missing names
#[test]
fn test_run_unknown_identifier() {
    assert_eq!(
        run("y"),
        Err(Error::Eval(EvalError::UnknownIdentifier {
            name: "y".to_string()
        }))
    );
}

/// Test run() passes parse and lex failures through
#[test]
fn test_run_front_end_errors() {
    assert!(matches!(run("1 +"), Err(Error::Parse(_))));
    assert!(matches!(run("'open"), Err(Error::Lex(_))));
}

/// Test Interpreter evaluates against a prepared environment
#[test]
fn test_interpreter_with_environment() {
    let env = Environment::global();
    env.define("greeting", text("hi "));
    let interpreter = Interpreter::with_environment(env);
    let output = parser::parse("greeting + 'there'").unwrap();
    assert_eq!(interpreter.interpret(&output.ast), Ok(text("hi there")));
}

/// Test number rendering inside concatenation
#[test]
fn test_number_rendering() {
    assert_eq!(run("'' + 3"), Ok(text("3")));
    assert_eq!(run("'' + 2.5"), Ok(text("2.5")));
    assert_eq!(run("'' + 1 / 0"), Ok(text("Infinity")));
}

proptest! {
    #[test]
    fn prop_sum_of_integers(a in 0u32..100_000, b in 0u32..100_000) {
        let source = format!("{} + {}", a, b);
        prop_assert_eq!(run(&source), Ok(Value::Number(a as f64 + b as f64)));
    }

    #[test]
    fn prop_string_plus_number(s in "[a-z]{0,8}", n in 0u32..1000) {
        let source = format!("'{}' + {}", s, n);
        prop_assert_eq!(run(&source), Ok(Value::String(format!("{}{}", s, n))));
    }
}
