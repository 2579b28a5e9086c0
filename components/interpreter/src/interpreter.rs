//! Tree-walking evaluator
//!
//! Covers the expression core: statements wrapping expressions, numeric and
//! string literals, identifiers and binary expressions. Every other node kind
//! fails with [`EvalError::NotImplemented`].

use crate::environment::Environment;
use crate::operators::binary_operation;
use core_types::{EvalError, Value};
use parser::{ASTNode, NodeKind};
use std::rc::Rc;

/// Evaluator bound to a global environment
#[derive(Debug)]
pub struct Interpreter {
    global: Rc<Environment>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Interpreter over a fresh [`Environment::global`]
    pub fn new() -> Self {
        Self::with_environment(Environment::global())
    }

    /// Interpreter over a caller-prepared environment
    pub fn with_environment(global: Rc<Environment>) -> Self {
        Self { global }
    }

    /// The global environment
    pub fn global(&self) -> &Rc<Environment> {
        &self.global
    }

    /// Evaluate a `Program` node (or any single node) in the global
    /// environment; a program yields the value of its last statement.
    pub fn interpret(&self, program: &ASTNode) -> Result<Value, EvalError> {
        self.evaluate(program, &self.global)
    }

    /// Evaluate `node` in `env`
    pub fn evaluate(&self, node: &ASTNode, env: &Environment) -> Result<Value, EvalError> {
        tracing::trace!(kind = node.kind.name(), "evaluate");
        match &node.kind {
            NodeKind::Program { body } => {
                let mut last = Value::Undefined;
                for statement in body {
                    last = self.evaluate(statement, env)?;
                }
                Ok(last)
            }
            NodeKind::ExpressionStatement { expression } => self.evaluate(expression, env),
            NodeKind::NumericLiteral { value, .. } => Ok(Value::Number(*value)),
            NodeKind::StringLiteral { value, .. } => Ok(Value::String(value.clone())),
            NodeKind::Identifier { symbol } => env.lookup(symbol),
            NodeKind::BinaryExpression {
                operator,
                left,
                right,
                ..
            } => {
                let left = self.evaluate(left, env)?;
                let right = self.evaluate(right, env)?;
                binary_operation(*operator, &left, &right)
            }
            other => Err(EvalError::NotImplemented {
                kind: other.name().to_string(),
            }),
        }
    }
}
