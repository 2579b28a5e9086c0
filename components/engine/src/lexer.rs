//! Lexer engine - drives a grammar's read-one-token rule over a source cursor

use crate::cursor::SourceCursor;
use crate::token::{Token, TokenKind, TokenTag};
use core_types::{LexError, Span};
use std::collections::VecDeque;
use std::marker::PhantomData;

/// What a rule reports after consuming the characters of one token.
///
/// The engine fills in the text and span from the characters the rule
/// actually consumed, so a rule cannot misreport either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<K> {
    /// Kind of the token just read
    pub kind: K,
    /// Optional classification
    pub tag: Option<TokenTag>,
}

impl<K> Lexeme<K> {
    /// Untagged lexeme
    pub fn new(kind: K) -> Self {
        Self { kind, tag: None }
    }

    /// Lexeme carrying `tag`
    pub fn tagged(kind: K, tag: TokenTag) -> Self {
        Self {
            kind,
            tag: Some(tag),
        }
    }
}

/// Grammar-supplied rule that reads exactly one token.
///
/// The engine calls [`LexRule::read`] only while input remains. The rule
/// inspects the current character, consumes one or more characters and
/// returns the lexeme they form. Rules may keep state between calls (for
/// example template nesting); one rule value serves one tokenization.
pub trait LexRule {
    /// Token kind enum of the grammar
    type Kind: TokenKind;

    /// Consume the characters of the next token
    fn read(&mut self, cursor: &mut SourceCursor) -> Result<Lexeme<Self::Kind>, LexError>;
}

/// Adapter turning a closure into a [`LexRule`].
pub struct FnRule<K, F> {
    read: F,
    _kind: PhantomData<K>,
}

/// Build a rule from a closure
///
/// ```
/// use engine::{from_fn, tokenize, Lexeme};
///
/// let rule = from_fn(|cursor: &mut engine::SourceCursor| {
///     cursor.advance()?;
///     Ok(Lexeme::new(()))
/// });
/// assert_eq!(tokenize(rule, "abc").unwrap().len(), 3);
/// ```
pub fn from_fn<K, F>(read: F) -> FnRule<K, F>
where
    K: TokenKind,
    F: FnMut(&mut SourceCursor) -> Result<Lexeme<K>, LexError>,
{
    FnRule {
        read,
        _kind: PhantomData,
    }
}

impl<K, F> LexRule for FnRule<K, F>
where
    K: TokenKind,
    F: FnMut(&mut SourceCursor) -> Result<Lexeme<K>, LexError>,
{
    type Kind = K;

    fn read(&mut self, cursor: &mut SourceCursor) -> Result<Lexeme<K>, LexError> {
        (self.read)(cursor)
    }
}

/// Generic lexer: materializes tokens on demand with unbounded lookahead.
pub struct Lexer<R: LexRule> {
    rule: R,
    cursor: SourceCursor,
    lookahead: VecDeque<Token<R::Kind>>,
    failed: bool,
}

impl<R: LexRule> Lexer<R> {
    /// Create a lexer running `rule` over `source`
    pub fn new(rule: R, source: &str) -> Self {
        Self {
            rule,
            cursor: SourceCursor::new(source),
            lookahead: VecDeque::new(),
            failed: false,
        }
    }

    fn read(&mut self) -> Result<Option<Token<R::Kind>>, LexError> {
        if self.cursor.is_at_end() {
            return Ok(None);
        }
        let start = self.cursor.position();
        let lexeme = self.rule.read(&mut self.cursor)?;
        if self.cursor.position().offset == start.offset {
            // A rule that consumed nothing would stall the engine forever.
            self.cursor.advance()?;
        }
        let end = self.cursor.position();
        Ok(Some(Token {
            kind: lexeme.kind,
            tag: lexeme.tag,
            text: self.cursor.slice(start.offset, end.offset),
            span: Span::new(start, end),
        }))
    }

    /// Token `offset` places ahead without consuming anything
    pub fn peek(&mut self, offset: usize) -> Result<Option<&Token<R::Kind>>, LexError> {
        while self.lookahead.len() <= offset {
            match self.read()? {
                Some(token) => self.lookahead.push_back(token),
                None => return Ok(None),
            }
        }
        Ok(self.lookahead.get(offset))
    }

    /// Consume the next token, `None` once the input is exhausted
    pub fn next_token(&mut self) -> Result<Option<Token<R::Kind>>, LexError> {
        match self.lookahead.pop_front() {
            Some(token) => Ok(Some(token)),
            None => self.read(),
        }
    }

    /// True once every token has been handed out
    pub fn is_finished(&self) -> bool {
        self.lookahead.is_empty() && self.cursor.is_at_end()
    }
}

impl<R: LexRule> Iterator for Lexer<R> {
    type Item = Result<Token<R::Kind>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Run `rule` over the whole of `source`.
///
/// Either every character ends up in exactly one token, or the first
/// lexical error is returned.
pub fn tokenize<R: LexRule>(rule: R, source: &str) -> Result<Vec<Token<R::Kind>>, LexError> {
    let tokens = Lexer::new(rule, source).collect::<Result<Vec<_>, _>>()?;
    tracing::trace!(tokens = tokens.len(), "tokenized source");
    Ok(tokens)
}
