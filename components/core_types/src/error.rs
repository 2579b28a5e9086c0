//! Error types shared by the lexer, parser and interpreter.
//!
//! Every stage is fail-fast: the first error aborts the whole call and is
//! handed back to the caller unmodified.

use crate::{SourcePosition, Span};
use std::fmt;
use thiserror::Error;

/// Lexical error raised while turning characters into tokens.
///
/// Only malformed quoted literals are lexical errors; every other stray
/// character becomes an "unknown" token and is left for the parser to
/// reject.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Input ended before the closing quote
    #[error("Unterminated string literal starting at {position}")]
    UnterminatedString {
        /// Position of the opening quote
        position: SourcePosition,
    },
    /// Input ended right after a backslash
    #[error("Expected character after escape at {position}")]
    EscapeAtEnd {
        /// Position of the backslash
        position: SourcePosition,
    },
    /// A character was requested from an exhausted cursor
    #[error("Unexpected end of input at {position}")]
    UnexpectedEnd {
        /// End-of-input position
        position: SourcePosition,
    },
}

impl LexError {
    /// Position the error points at
    pub fn position(&self) -> SourcePosition {
        match self {
            LexError::UnterminatedString { position }
            | LexError::EscapeAtEnd { position }
            | LexError::UnexpectedEnd { position } => *position,
        }
    }
}

/// Syntax error raised at the first grammar violation.
///
/// # Examples
///
/// ```
/// use core_types::ParseError;
///
/// let err = ParseError::new("Expected expression");
/// assert_eq!(err.to_string(), "Expected expression");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ParseError {
    /// Human-readable message supplied by the grammar rule
    pub message: String,
    /// Span of the offending token, `None` when no token was available
    pub span: Option<Span>,
    /// Source text of the offending token
    pub found: Option<String>,
}

impl ParseError {
    /// Create an error without location information
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: None,
            found: None,
        }
    }

    /// Attach the span of the offending token
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach the text of the offending token
    pub fn with_found(mut self, found: impl Into<String>) -> Self {
        self.found = Some(found.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(found) = &self.found {
            write!(f, ", found {:?}", found)?;
        }
        if let Some(span) = &self.span {
            write!(f, " at {}", span.start)?;
        }
        Ok(())
    }
}

/// Evaluation error raised by the interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The node kind has no evaluation rule
    #[error("Don't know how to evaluate `{kind}`")]
    NotImplemented {
        /// Node kind name, e.g. `IfStatement`
        kind: String,
    },
    /// The operator has no arithmetic meaning
    #[error("Operator `{operator}` is not allowed")]
    OperatorNotAllowed {
        /// Operator token kind name, e.g. `DoubleEquals`
        operator: String,
    },
    /// Name not found anywhere in the environment chain
    #[error("`{name}` is not defined")]
    UnknownIdentifier {
        /// The missing name
        name: String,
    },
}

/// Any error produced between source text and runtime value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Tokenization failed
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),
    /// Parsing failed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Evaluation failed
    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}
