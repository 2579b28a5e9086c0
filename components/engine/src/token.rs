//! Token record shared by every grammar

use core_types::Span;
use serde::Serialize;
use std::fmt;

/// Bound for grammar-specific token kind enums.
///
/// Kinds are small closed enums; the engine only copies and compares them.
pub trait TokenKind: Copy + Eq + fmt::Debug {}

impl<T: Copy + Eq + fmt::Debug> TokenKind for T {}

/// Coarse classification orthogonal to the token kind.
///
/// Grammar rules test tags when they care about a class of tokens rather
/// than one exact kind, e.g. "any whitespace" or "any word usable as a
/// property name".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenTag {
    /// Identifier-like run of letters and digits, keywords included
    Word,
    /// Space, tab, line break
    WhiteSpace,
    /// Arithmetic, comparison or assignment operator
    Operator,
    /// Reserved word for grammars that separate keywords from words
    KeyWord,
}

/// One lexical unit: kind, optional tag, exact source text and span.
///
/// Concatenating the `text` of every token of a tokenization reproduces the
/// input exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token<K> {
    /// Grammar-specific kind
    pub kind: K,
    /// Optional cross-cutting classification
    pub tag: Option<TokenTag>,
    /// Source text covered by the token
    pub text: String,
    /// Source extent of the token
    pub span: Span,
}

impl<K: TokenKind> Token<K> {
    /// True when the token is of `kind`
    pub fn is(&self, kind: K) -> bool {
        self.kind == kind
    }

    /// True when the token carries `tag`
    pub fn has_tag(&self, tag: TokenTag) -> bool {
        self.tag == Some(tag)
    }
}

impl<K: TokenKind> fmt::Display for Token<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.text)
    }
}
