//! JavaScript Parser Component
//!
//! Lexer rule, grammar and syntax tree for JavaScript, built on the
//! grammar-agnostic `engine` crate.
//!
//! # Overview
//!
//! - [`tokenize`] - Tokenizes JavaScript source code, whitespace included
//! - [`TokenKind`] - Token kinds: words, literals, operators, punctuation
//! - [`Parser`] - Recursive descent parser producing [`ASTNode`]s
//! - [`NodeKind`] - Syntax tree node variants
//! - [`parse`] / [`parse_with`] - Whole-program parse
//!
//! # Example
//!
//! ```
//! use parser::{parse, NodeKind, SourceType};
//!
//! let output = parse("let x = 42;").unwrap();
//! let NodeKind::Program { body } = &output.ast.kind else {
//!     panic!("expected program");
//! };
//! assert_eq!(body[0].kind.name(), "VariableDeclaration");
//! assert_eq!(output.properties.source_type, SourceType::Cjs);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod ast;
pub mod lexer;
pub mod options;
pub mod parser;

pub use ast::{ASTNode, BinaryKind, NodeKind, SourceType, VariableKind};
pub use lexer::{tokenize, JsLexRule, JsToken, TokenKind};
pub use options::{ParseOptions, ParseOutput, ProgramProperties};
pub use parser::{cook, Parser};

use core_types::{Error, Span};
use engine::{Grammar, Node};

/// Parse a whole program with default options
pub fn parse(source: &str) -> Result<ParseOutput, Error> {
    parse_with(source, &ParseOptions::default())
}

/// Parse a whole program.
///
/// The `Program` node spans from its first statement to its last, or is
/// empty for a source without statements.
pub fn parse_with(source: &str, options: &ParseOptions) -> Result<ParseOutput, Error> {
    let tokens = tokenize(source)?;
    tracing::debug!(tokens = tokens.len(), "tokenized source");
    let program = Parser::new(tokens, options).produce()?;
    let span = match (program.body.first(), program.body.last()) {
        (Some(first), Some(last)) => first.span.to(last.span),
        _ => Span::default(),
    };
    tracing::debug!(
        statements = program.body.len(),
        source_type = ?program.properties.source_type,
        "parsed program"
    );
    Ok(ParseOutput {
        ast: Node::new(NodeKind::Program { body: program.body }, span),
        properties: program.properties,
    })
}
