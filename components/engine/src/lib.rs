//! Grammar-agnostic lexing and recursive-descent parsing engine.
//!
//! A grammar plugs into the engine at two seams:
//!
//! - a [`LexRule`] that reads exactly one token from a [`SourceCursor`],
//!   driven by [`Lexer`] / [`tokenize`];
//! - a [`Grammar`] that parses one top-level construct from a
//!   [`TokenCursor`], driven by [`Grammar::produce`].
//!
//! The engine never knows which grammar it is driving. Whitespace is
//! emitted as ordinary tokens; skipping it is a grammar decision.
//!
//! # Examples
//!
//! ```
//! use engine::{from_fn, tokenize, Lexeme, TokenCursor, TokenTag};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Kind { Digit, Space }
//!
//! let rule = from_fn(|cursor: &mut engine::SourceCursor| {
//!     if cursor.advance()? == ' ' {
//!         Ok(Lexeme::tagged(Kind::Space, TokenTag::WhiteSpace))
//!     } else {
//!         Ok(Lexeme::new(Kind::Digit))
//!     }
//! });
//! let tokens = tokenize(rule, "1 2").unwrap();
//! let mut cursor = TokenCursor::new(tokens, ());
//! assert!(cursor.is(Kind::Digit));
//! let found_two = cursor.look_ahead(|t| {
//!     t.consume().ok();
//!     t.skip_while_tag(TokenTag::WhiteSpace);
//!     t.is(Kind::Digit)
//! });
//! assert!(found_two);
//! assert!(cursor.is(Kind::Digit));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod cursor;
mod lexer;
mod parser;
mod token;

pub use cursor::SourceCursor;
pub use lexer::{from_fn, tokenize, FnRule, LexRule, Lexeme, Lexer};
pub use parser::{Grammar, Mark, Node, Program, TokenCursor};
pub use token::{Token, TokenKind, TokenTag};
