//! Tree-walking interpreter for JavaScript expressions
//!
//! This crate evaluates the syntax trees produced by `parser`:
//! - Scoped variable lookup through an [`Environment`] chain
//! - The binary operator coercion rules in [`binary_operation`]
//! - [`run`] for source-to-value in one call
//!
//! # Example
//!
//! ```
//! use core_types::Value;
//!
//! assert_eq!(interpreter::run("1 + true").unwrap(), Value::Number(2.0));
//! assert_eq!(
//!     interpreter::run("'total: ' + 3").unwrap(),
//!     Value::String("total: 3".to_string())
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod environment;
pub mod interpreter;
pub mod operators;

pub use environment::Environment;
pub use interpreter::Interpreter;
pub use operators::{arithmetic, binary_operation};

use core_types::{Error, Value};

/// Parse `source` and evaluate it in a fresh global environment
pub fn run(source: &str) -> Result<Value, Error> {
    let output = parser::parse(source)?;
    let value = Interpreter::new().interpret(&output.ast)?;
    tracing::debug!(value = %value, "evaluated program");
    Ok(value)
}
