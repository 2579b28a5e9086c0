//! Parser engine - token cursor, backtracking lookahead and node construction
//!
//! Grammars own a [`TokenCursor`] and implement [`Grammar`]; every parse
//! routine is an ordinary method driving the cursor primitives below.

use crate::token::{Token, TokenKind, TokenTag};
use core_types::{ParseError, Span};
use serde::Serialize;
use std::ops::{Deref, DerefMut};

/// Position recorded when a grammar rule begins, consumed by
/// [`TokenCursor::make_node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

/// Tagged syntax node: a grammar-specific kind plus the span of the tokens
/// consumed while building it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node<K> {
    /// Construct-specific payload
    #[serde(flatten)]
    pub kind: K,
    /// Source extent, leading and trailing whitespace excluded
    pub span: Span,
}

impl<K> Node<K> {
    /// Wrap `kind` with an explicit span
    pub fn new(kind: K, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Result of a whole-input parse: top-level nodes in source order plus the
/// properties accumulated while parsing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program<N, P> {
    /// Top-level nodes
    pub body: Vec<N>,
    /// Per-parse grammar properties
    pub properties: P,
}

/// Cursor over a fully materialized token buffer.
///
/// `P` is the grammar's per-parse property record. It lives exactly as long
/// as one parse and is handed back with the result.
#[derive(Debug, Clone)]
pub struct TokenCursor<K, P = ()> {
    tokens: Vec<Token<K>>,
    position: usize,
    properties: P,
}

impl<K: TokenKind, P> TokenCursor<K, P> {
    /// Cursor at the first of `tokens`
    pub fn new(tokens: Vec<Token<K>>, properties: P) -> Self {
        Self {
            tokens,
            position: 0,
            properties,
        }
    }

    /// Current token, `None` at end of stream
    pub fn current(&self) -> Option<&Token<K>> {
        self.tokens.get(self.position)
    }

    /// Token `offset` places ahead of the current one
    pub fn peek(&self, offset: usize) -> Option<&Token<K>> {
        self.tokens.get(self.position + offset)
    }

    /// Kind of the current token
    pub fn current_kind(&self) -> Option<K> {
        self.current().map(|t| t.kind)
    }

    /// True when the current token is of `kind`
    pub fn is(&self, kind: K) -> bool {
        self.current_kind() == Some(kind)
    }

    /// True when the token `offset` places ahead is of `kind`
    pub fn is_at(&self, offset: usize, kind: K) -> bool {
        self.peek(offset).map_or(false, |t| t.kind == kind)
    }

    /// True when the current token is any of `kinds`
    pub fn is_any(&self, kinds: &[K]) -> bool {
        self.current_kind().map_or(false, |k| kinds.contains(&k))
    }

    /// True unless the current token is of `kind`; true at end of stream
    pub fn isnt(&self, kind: K) -> bool {
        !self.is(kind)
    }

    /// True unless the current token is any of `kinds`; true at end of stream
    pub fn isnt_any(&self, kinds: &[K]) -> bool {
        !self.is_any(kinds)
    }

    /// True when the current token carries `tag`
    pub fn has_tag(&self, tag: TokenTag) -> bool {
        self.current().map_or(false, |t| t.has_tag(tag))
    }

    /// True while tokens remain; the guard of every parse loop
    pub fn will_continue(&self) -> bool {
        self.position < self.tokens.len()
    }

    /// Consume the current token
    pub fn consume(&mut self) -> Result<Token<K>, ParseError> {
        let token = self
            .current()
            .cloned()
            .ok_or_else(|| self.error("Unexpected end of input"))?;
        self.position += 1;
        Ok(token)
    }

    /// Consume the current token if it is of `kind`, otherwise fail with `message`
    pub fn expect(&mut self, kind: K, message: &str) -> Result<Token<K>, ParseError> {
        if self.is(kind) {
            self.consume()
        } else {
            Err(self.error(message))
        }
    }

    /// Consume the current token if it carries `tag`, otherwise fail with `message`
    pub fn expect_tag(&mut self, tag: TokenTag, message: &str) -> Result<Token<K>, ParseError> {
        if self.has_tag(tag) {
            self.consume()
        } else {
            Err(self.error(message))
        }
    }

    /// Consume the current token only if it is of `kind`
    pub fn consume_if(&mut self, kind: K) -> Option<Token<K>> {
        if self.is(kind) {
            let token = self.current().cloned();
            self.position += 1;
            token
        } else {
            None
        }
    }

    /// Consume tokens while they carry `tag`; returns how many were skipped
    pub fn skip_while_tag(&mut self, tag: TokenTag) -> usize {
        let start = self.position;
        while self.has_tag(tag) {
            self.position += 1;
        }
        self.position - start
    }

    /// Run `probe` against the upcoming tokens and rewind afterwards.
    ///
    /// The cursor position is restored when the probe returns, when it
    /// returns an error value, and when it unwinds.
    pub fn look_ahead<R>(&mut self, probe: impl FnOnce(&mut Self) -> R) -> R {
        let mut rewind = Rewind {
            position: self.position,
            cursor: self,
        };
        probe(&mut *rewind.cursor)
    }

    /// Record the start of a rule
    pub fn mark(&self) -> Mark {
        Mark(self.position)
    }

    /// Build a node spanning the tokens consumed since `mark`
    pub fn make_node<N>(&self, mark: Mark, kind: N) -> Node<N> {
        Node::new(kind, self.span_since(mark))
    }

    /// Span of the non-whitespace tokens consumed since `mark`.
    ///
    /// Empty at the current token's start when nothing significant was
    /// consumed.
    pub fn span_since(&self, mark: Mark) -> Span {
        let end = self.position.min(self.tokens.len());
        let consumed = &self.tokens[mark.0.min(end)..end];
        let significant = |t: &&Token<K>| !t.has_tag(TokenTag::WhiteSpace);
        match (
            consumed.iter().find(significant),
            consumed.iter().rev().find(significant),
        ) {
            (Some(first), Some(last)) => first.span.to(last.span),
            _ => Span::empty_at(self.here()),
        }
    }

    fn here(&self) -> core_types::SourcePosition {
        match (self.current(), self.tokens.last()) {
            (Some(token), _) => token.span.start,
            (None, Some(last)) => last.span.end,
            (None, None) => core_types::SourcePosition::START,
        }
    }

    /// Parse error pointing at the current token, or at end of input
    pub fn error(&self, message: &str) -> ParseError {
        match self.current() {
            Some(token) => ParseError::new(message)
                .with_span(token.span)
                .with_found(token.text.clone()),
            None => ParseError::new(message).with_span(Span::empty_at(self.here())),
        }
    }

    /// Per-parse properties
    pub fn properties(&self) -> &P {
        &self.properties
    }

    /// Mutable per-parse properties
    pub fn properties_mut(&mut self) -> &mut P {
        &mut self.properties
    }

    /// Give up the cursor, keeping only the accumulated properties
    pub fn into_properties(self) -> P {
        self.properties
    }
}

struct Rewind<'a, K, P> {
    cursor: &'a mut TokenCursor<K, P>,
    position: usize,
}

impl<K, P> Drop for Rewind<'_, K, P> {
    fn drop(&mut self) {
        self.cursor.position = self.position;
    }
}

/// Capability interface a grammar implements to be driven by the engine.
pub trait Grammar: Sized {
    /// Token kind enum
    type Kind: TokenKind;
    /// Per-parse property record
    type Properties;
    /// Node type produced for one top-level construct
    type Node;

    /// Cursor the grammar parses from
    fn cursor(&mut self) -> &mut TokenCursor<Self::Kind, Self::Properties>;

    /// Give up the cursor once parsing is complete
    fn into_cursor(self) -> TokenCursor<Self::Kind, Self::Properties>;

    /// Parse one top-level construct
    fn parse_node(&mut self) -> Result<Self::Node, ParseError>;

    /// Skip whatever the grammar ignores between top-level constructs
    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        Ok(())
    }

    /// Parse top-level constructs until the stream is exhausted
    fn produce(mut self) -> Result<Program<Self::Node, Self::Properties>, ParseError> {
        let mut body = Vec::new();
        self.skip_trivia()?;
        while self.cursor().will_continue() {
            body.push(self.parse_node()?);
            self.skip_trivia()?;
        }
        tracing::trace!(nodes = body.len(), "produced program");
        Ok(Program {
            body,
            properties: self.into_cursor().into_properties(),
        })
    }
}

impl<K, P> Deref for Rewind<'_, K, P> {
    type Target = TokenCursor<K, P>;

    fn deref(&self) -> &Self::Target {
        self.cursor
    }
}

impl<K, P> DerefMut for Rewind<'_, K, P> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.cursor
    }
}
