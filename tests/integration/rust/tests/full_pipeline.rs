//! Full Pipeline Integration Tests
//!
//! Tests the complete flow: Source -> tokenize -> Parser -> AST -> Interpreter -> Value

use core_types::{Error, EvalError, Value};
use engine::Grammar;
use interpreter::{Environment, Interpreter};
use parser::{parse, tokenize, ParseOptions, Parser};

/// Helper function to execute JavaScript source code stage by stage
fn execute_js(source: &str) -> Result<Value, Error> {
    let tokens = tokenize(source)?;
    let program = Parser::new(tokens, &ParseOptions::default()).produce()?;
    let interpreter = Interpreter::new();
    let mut last = Value::Undefined;
    for statement in &program.body {
        last = interpreter.evaluate(statement, interpreter.global())?;
    }
    Ok(last)
}

/// Test: staged execution agrees with run()
#[test]
fn test_full_pipeline_matches_run() {
    for source in ["42;", "1 + 2", "'a' + true", "undefined + 'x'", "7 % 4"] {
        assert_eq!(execute_js(source), interpreter::run(source), "{}", source);
    }
}

/// Test: number literal
#[test]
fn test_full_pipeline_number() {
    assert_eq!(execute_js("42;"), Ok(Value::Number(42.0)));
}

/// Test: every operator takes the rest of the expression as its right operand
#[test]
fn test_full_pipeline_arithmetic() {
    assert_eq!(execute_js("2 + 3 * 4"), Ok(Value::Number(14.0)));
    assert_eq!(execute_js("2 * 3 + 4"), Ok(Value::Number(14.0)));
    assert_eq!(execute_js("(2 * 3) + 4"), Ok(Value::Number(10.0)));
    assert_eq!(execute_js("(2 + 3) * 4"), Ok(Value::Number(20.0)));
}

/// Test: right-nested chains evaluate right to left
#[test]
fn test_full_pipeline_right_nesting() {
    assert_eq!(execute_js("8 - 4 - 2"), Ok(Value::Number(6.0)));
    assert_eq!(execute_js("8 / 4 / 2"), Ok(Value::Number(4.0)));
}

/// Test: coercion with globals
#[test]
fn test_full_pipeline_globals() {
    assert_eq!(execute_js("true + false"), Ok(Value::Number(1.0)));
    assert_eq!(
        execute_js("'is ' + false"),
        Ok(Value::String("is false".to_string()))
    );
    assert_eq!(execute_js("undefined * 2"), Ok(Value::NaN));
}

/// Test: a string concatenated with NaN keeps the text
#[test]
fn test_full_pipeline_string_nan() {
    let env = Environment::global();
    env.define("n", Value::NaN);
    let output = parse("'x' + n").unwrap();
    let value = Interpreter::with_environment(env).interpret(&output.ast);
    assert_eq!(value, Ok(Value::String("xNaN".to_string())));
}

/// Test: the last statement's value is the program value
#[test]
fn test_full_pipeline_last_value() {
    assert_eq!(
        execute_js("1;\n'two';\n3 + 'three'"),
        Ok(Value::String("3three".to_string()))
    );
}

/// Test: each stage's failure surfaces in the umbrella error
#[test]
fn test_full_pipeline_errors() {
    assert!(matches!(execute_js("'abc"), Err(Error::Lex(_))));
    assert!(matches!(execute_js("let = 1"), Err(Error::Parse(_))));
    assert!(matches!(
        execute_js("a.b"),
        Err(Error::Eval(EvalError::NotImplemented { .. }))
    ));
}
