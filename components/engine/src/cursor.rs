//! Source cursor - character-level read position over the raw input

use core_types::{LexError, SourcePosition};

/// Owns the characters of the source text and a read position.
///
/// The cursor only moves forward. Backtracking is a parser concern and
/// operates on tokens, never on characters.
#[derive(Debug, Clone)]
pub struct SourceCursor {
    chars: Vec<char>,
    position: usize,
    line: u32,
    column: u32,
}

impl SourceCursor {
    /// Create a cursor at the start of `source`
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Character `offset` places ahead of the read position, `None` past the end
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.position + offset).copied()
    }

    /// Current character, `None` at end of input
    pub fn current(&self) -> Option<char> {
        self.peek(0)
    }

    /// True when the current character equals `ch`
    pub fn is(&self, ch: char) -> bool {
        self.current() == Some(ch)
    }

    /// True when the character `offset` places ahead equals `ch`
    pub fn is_at(&self, offset: usize, ch: char) -> bool {
        self.peek(offset) == Some(ch)
    }

    /// True when the current character satisfies `pred`
    pub fn matches(&self, pred: impl Fn(char) -> bool) -> bool {
        self.current().map_or(false, pred)
    }

    /// True once every character has been consumed
    pub fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Consume and return the current character
    pub fn advance(&mut self) -> Result<char, LexError> {
        let ch = self.current().ok_or(LexError::UnexpectedEnd {
            position: self.position(),
        })?;
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Ok(ch)
    }

    /// Consume the current character only if it equals `expected`
    pub fn advance_if(&mut self, expected: char) -> bool {
        if self.is(expected) {
            let _ = self.advance();
            true
        } else {
            false
        }
    }

    /// Consume characters while `pred` holds; returns how many were consumed
    pub fn advance_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let start = self.position;
        while self.matches(&pred) {
            // Cannot fail: `matches` saw a character.
            let _ = self.advance();
        }
        self.position - start
    }

    /// Current read position
    pub fn position(&self) -> SourcePosition {
        SourcePosition {
            line: self.line,
            column: self.column,
            offset: self.position,
        }
    }

    /// Source text between two character offsets
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start.min(self.chars.len())..end.min(self.chars.len())]
            .iter()
            .collect()
    }
}
