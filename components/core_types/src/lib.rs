//! Core value, position and error types.
//!
//! This crate provides the foundational types shared by every stage of the
//! toolkit: source positions and spans for diagnostics, the runtime value
//! model of the interpreter, and the error types of each stage.
//!
//! # Overview
//!
//! - [`SourcePosition`] / [`Span`] - Source code locations
//! - [`Value`] / [`RealValue`] - Runtime values
//! - [`LexError`], [`ParseError`], [`EvalError`] - Per-stage errors
//! - [`Error`] - Umbrella error for whole-pipeline calls
//!
//! # Examples
//!
//! ```
//! use core_types::{EvalError, Value};
//!
//! let num = Value::Number(42.0);
//! assert_eq!(num.to_string(), "42");
//!
//! let error = EvalError::UnknownIdentifier {
//!     name: "x".to_string(),
//! };
//! assert_eq!(error.to_string(), "`x` is not defined");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod source;
mod value;

pub use error::{Error, EvalError, LexError, ParseError};
pub use source::{SourcePosition, Span};
pub use value::{format_number, RealValue, Value};
