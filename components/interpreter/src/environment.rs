//! Variable environments
//!
//! Environments form a chain through shared parent links. Lookups walk
//! from the innermost environment outwards; definitions always land in the
//! environment they are made on.

use core_types::{EvalError, Value};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// One scope of named values
#[derive(Debug, Default)]
pub struct Environment {
    parent: Option<Rc<Environment>>,
    variables: RefCell<HashMap<String, Value>>,
}

impl Environment {
    /// Empty root environment
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Root environment seeded with `true`, `false` and `undefined`
    pub fn global() -> Rc<Self> {
        let env = Self::new();
        env.define("true", Value::Boolean(true));
        env.define("false", Value::Boolean(false));
        env.define("undefined", Value::Undefined);
        env
    }

    /// New empty scope whose lookups fall back to `parent`
    pub fn child(parent: &Rc<Self>) -> Rc<Self> {
        Rc::new(Self {
            parent: Some(Rc::clone(parent)),
            variables: RefCell::default(),
        })
    }

    /// Bind `name` in this scope, returning the value it shadowed here
    pub fn define(&self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.variables.borrow_mut().insert(name.into(), value)
    }

    /// Resolve `name` through this scope and its ancestors
    pub fn lookup(&self, name: &str) -> Result<Value, EvalError> {
        if let Some(value) = self.variables.borrow().get(name) {
            return Ok(value.clone());
        }
        match &self.parent {
            Some(parent) => parent.lookup(name),
            None => Err(EvalError::UnknownIdentifier {
                name: name.to_string(),
            }),
        }
    }

    /// True when `name` is bound in this scope itself
    pub fn has_own(&self, name: &str) -> bool {
        self.variables.borrow().contains_key(name)
    }

    /// Enclosing scope, `None` for a root
    pub fn parent(&self) -> Option<&Rc<Environment>> {
        self.parent.as_ref()
    }
}
