//! JavaScript lexer rule
//!
//! One call of [`JsLexRule::read`] produces one token. Whitespace is never
//! skipped here; the grammar trims it.
//!
//! Template literals and comments change how the following characters are
//! read, so the rule tracks a small mode stack:
//!
//! - inside `` `...` `` raw text is read as one [`TokenKind::TemplateText`]
//!   token up to the next `` ` `` or `${`;
//! - inside `${ ... }` ordinary code is read, with `{`/`}` depth counted so
//!   the matching `}` returns to the template;
//! - after `/*` or `//` the comment body is read as one
//!   [`TokenKind::CommentText`] token.

use core_types::LexError;
use engine::{LexRule, Lexeme, SourceCursor, Token, TokenTag};
use serde::Serialize;

/// JavaScript token kinds
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Words
    Identifier,
    As,
    Async,
    Await,
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Default,
    Do,
    Else,
    Export,
    Extends,
    Finally,
    For,
    From,
    Function,
    If,
    Import,
    In,
    InstanceOf,
    Let,
    New,
    Of,
    Return,
    Switch,
    Throw,
    Try,
    TypeOf,
    Using,
    Var,
    Void,
    While,
    With,

    // Literals and text runs
    Number,
    String,
    TemplateText,
    CommentText,

    // Operators
    Ampersand,
    AmpersandEquals,
    Asterisk,
    AsteriskEquals,
    Dash,
    DashEquals,
    DoubleAmpersand,
    DoubleDash,
    DoubleEquals,
    DoublePipe,
    DoublePlus,
    Equals,
    Exclamation,
    LessThan,
    LessThanEqual,
    MoreThan,
    MoreThanEqual,
    NotDoubleEquals,
    NotEquals,
    Percent,
    PercentEquals,
    Pipe,
    PipeEquals,
    Plus,
    PlusEquals,
    Slash,
    SlashEquals,
    TripleEquals,

    // Punctuation
    Arrow,
    AsteriskSlash,
    BackQuote,
    BackSlash,
    CloseBracket,
    CloseParen,
    CloseSquare,
    Colon,
    Comma,
    DoubleSlash,
    Hash,
    OpenBracket,
    OpenParen,
    OpenSquare,
    OpenTemplate,
    Optional,
    Period,
    Question,
    Semicolon,
    SlashAsterisk,
    Spread,

    // Whitespace
    Br,
    CarriageReturn,
    Space,
    Tab,

    /// Any character no other rule accepts
    Unknown,
}

/// Token produced by the JavaScript lexer
pub type JsToken = Token<TokenKind>;

fn keyword(word: &str) -> Option<TokenKind> {
    use TokenKind::*;
    Some(match word {
        "as" => As,
        "async" => Async,
        "await" => Await,
        "break" => Break,
        "case" => Case,
        "catch" => Catch,
        "class" => Class,
        "const" => Const,
        "continue" => Continue,
        "default" => Default,
        "do" => Do,
        "else" => Else,
        "export" => Export,
        "extends" => Extends,
        "finally" => Finally,
        "for" => For,
        "from" => From,
        "function" => Function,
        "if" => If,
        "import" => Import,
        "in" => In,
        "instanceof" => InstanceOf,
        "let" => Let,
        "new" => New,
        "of" => Of,
        "return" => Return,
        "switch" => Switch,
        "throw" => Throw,
        "try" => Try,
        "typeof" => TypeOf,
        "using" => Using,
        "var" => Var,
        "void" => Void,
        "while" => While,
        "with" => With,
        _ => return None,
    })
}

fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '$' || c == '_'
}

fn is_word_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '$' || c == '_'
}

fn op(kind: TokenKind) -> Lexeme<TokenKind> {
    Lexeme::tagged(kind, TokenTag::Operator)
}

fn plain(kind: TokenKind) -> Lexeme<TokenKind> {
    Lexeme::new(kind)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Template,
    Interpolation { depth: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comment {
    Block,
    Line,
}

/// Read-one-token rule for JavaScript source.
///
/// A value carries mode state and serves a single tokenization.
#[derive(Debug, Default)]
pub struct JsLexRule {
    modes: Vec<Mode>,
    comment: Option<Comment>,
}

impl JsLexRule {
    /// Rule positioned at the start of a script
    pub fn new() -> Self {
        Self::default()
    }

    fn read_comment_body(
        &mut self,
        comment: Comment,
        cursor: &mut SourceCursor,
    ) -> Result<Option<Lexeme<TokenKind>>, LexError> {
        match comment {
            Comment::Block => {
                if cursor.is('*') && cursor.is_at(1, '/') {
                    return Ok(None);
                }
                while !cursor.is_at_end() && !(cursor.is('*') && cursor.is_at(1, '/')) {
                    cursor.advance()?;
                }
            }
            Comment::Line => {
                if cursor.is('\n') {
                    return Ok(None);
                }
                cursor.advance_while(|c| c != '\n');
            }
        }
        Ok(Some(plain(TokenKind::CommentText)))
    }

    fn read_template(&mut self, cursor: &mut SourceCursor) -> Result<Lexeme<TokenKind>, LexError> {
        if cursor.advance_if('`') {
            self.modes.pop();
            return Ok(plain(TokenKind::BackQuote));
        }
        if cursor.is('$') && cursor.is_at(1, '{') {
            cursor.advance()?;
            cursor.advance()?;
            self.modes.push(Mode::Interpolation { depth: 0 });
            return Ok(plain(TokenKind::OpenTemplate));
        }
        while !cursor.is_at_end() && !cursor.is('`') && !(cursor.is('$') && cursor.is_at(1, '{'))
        {
            if cursor.advance()? == '\\' && !cursor.is_at_end() {
                cursor.advance()?;
            }
        }
        Ok(plain(TokenKind::TemplateText))
    }

    fn read_string(&mut self, cursor: &mut SourceCursor) -> Result<Lexeme<TokenKind>, LexError> {
        let start = cursor.position();
        let quote = cursor.advance()?;
        loop {
            match cursor.current() {
                None => return Err(LexError::UnterminatedString { position: start }),
                Some(c) if c == quote => {
                    cursor.advance()?;
                    return Ok(plain(TokenKind::String));
                }
                Some('\\') => {
                    let position = cursor.position();
                    cursor.advance()?;
                    if cursor.is_at_end() {
                        return Err(LexError::EscapeAtEnd { position });
                    }
                    cursor.advance()?;
                }
                Some(_) => {
                    cursor.advance()?;
                }
            }
        }
    }

    fn read_code(&mut self, cursor: &mut SourceCursor) -> Result<Lexeme<TokenKind>, LexError> {
        use TokenKind::*;

        if cursor.is('"') || cursor.is('\'') {
            return self.read_string(cursor);
        }

        if cursor.is('$') && cursor.is_at(1, '{') {
            cursor.advance()?;
            cursor.advance()?;
            return Ok(plain(OpenTemplate));
        }

        if cursor.matches(is_word_start) {
            let start = cursor.position().offset;
            cursor.advance_while(is_word_part);
            let word = cursor.slice(start, cursor.position().offset);
            let kind = keyword(&word).unwrap_or(Identifier);
            return Ok(Lexeme::tagged(kind, TokenTag::Word));
        }

        if cursor.matches(|c| c.is_ascii_digit()) {
            cursor.advance_while(|c| c.is_ascii_digit());
            return Ok(plain(Number));
        }

        let ch = cursor.advance()?;
        let lexeme = match ch {
            '.' => {
                if cursor.is('.') && cursor.is_at(1, '.') {
                    cursor.advance()?;
                    cursor.advance()?;
                    plain(Spread)
                } else {
                    plain(Period)
                }
            }
            '/' => {
                if cursor.advance_if('*') {
                    self.comment = Some(Comment::Block);
                    plain(SlashAsterisk)
                } else if cursor.advance_if('/') {
                    self.comment = Some(Comment::Line);
                    plain(DoubleSlash)
                } else if cursor.advance_if('=') {
                    op(SlashEquals)
                } else {
                    op(Slash)
                }
            }
            '?' => {
                if cursor.advance_if('.') {
                    plain(Optional)
                } else {
                    plain(Question)
                }
            }
            '*' => {
                if cursor.advance_if('=') {
                    op(AsteriskEquals)
                } else if cursor.advance_if('/') {
                    plain(AsteriskSlash)
                } else {
                    op(Asterisk)
                }
            }
            '+' => {
                if cursor.advance_if('+') {
                    op(DoublePlus)
                } else if cursor.advance_if('=') {
                    op(PlusEquals)
                } else {
                    op(Plus)
                }
            }
            '-' => {
                if cursor.advance_if('-') {
                    op(DoubleDash)
                } else if cursor.advance_if('=') {
                    op(DashEquals)
                } else {
                    op(Dash)
                }
            }
            '%' => {
                if cursor.advance_if('=') {
                    op(PercentEquals)
                } else {
                    op(Percent)
                }
            }
            '&' => {
                if cursor.advance_if('&') {
                    op(DoubleAmpersand)
                } else if cursor.advance_if('=') {
                    op(AmpersandEquals)
                } else {
                    op(Ampersand)
                }
            }
            '|' => {
                if cursor.advance_if('|') {
                    op(DoublePipe)
                } else if cursor.advance_if('=') {
                    op(PipeEquals)
                } else {
                    op(Pipe)
                }
            }
            '>' => {
                if cursor.advance_if('=') {
                    op(MoreThanEqual)
                } else {
                    op(MoreThan)
                }
            }
            '<' => {
                if cursor.advance_if('=') {
                    op(LessThanEqual)
                } else {
                    op(LessThan)
                }
            }
            '=' => {
                if cursor.advance_if('=') {
                    if cursor.advance_if('=') {
                        op(TripleEquals)
                    } else {
                        op(DoubleEquals)
                    }
                } else if cursor.advance_if('>') {
                    plain(Arrow)
                } else {
                    op(Equals)
                }
            }
            '!' => {
                if cursor.advance_if('=') {
                    if cursor.advance_if('=') {
                        op(NotDoubleEquals)
                    } else {
                        op(NotEquals)
                    }
                } else {
                    op(Exclamation)
                }
            }
            '\n' => Lexeme::tagged(Br, TokenTag::WhiteSpace),
            '\r' => Lexeme::tagged(CarriageReturn, TokenTag::WhiteSpace),
            '\t' => Lexeme::tagged(Tab, TokenTag::WhiteSpace),
            ' ' => Lexeme::tagged(Space, TokenTag::WhiteSpace),
            '`' => {
                self.modes.push(Mode::Template);
                plain(BackQuote)
            }
            '\\' => plain(BackSlash),
            '#' => plain(Hash),
            ';' => plain(Semicolon),
            ':' => plain(Colon),
            ',' => plain(Comma),
            '(' => plain(OpenParen),
            ')' => plain(CloseParen),
            '{' => {
                if let Some(Mode::Interpolation { depth }) = self.modes.last_mut() {
                    *depth += 1;
                }
                plain(OpenBracket)
            }
            '}' => {
                match self.modes.last_mut() {
                    Some(Mode::Interpolation { depth: 0 }) => {
                        self.modes.pop();
                    }
                    Some(Mode::Interpolation { depth }) => *depth -= 1,
                    _ => {}
                }
                plain(CloseBracket)
            }
            '[' => plain(OpenSquare),
            ']' => plain(CloseSquare),
            _ => plain(Unknown),
        };
        Ok(lexeme)
    }
}

impl LexRule for JsLexRule {
    type Kind = TokenKind;

    fn read(&mut self, cursor: &mut SourceCursor) -> Result<Lexeme<TokenKind>, LexError> {
        if let Some(comment) = self.comment.take() {
            if let Some(body) = self.read_comment_body(comment, cursor)? {
                return Ok(body);
            }
        }
        match self.modes.last() {
            Some(Mode::Template) => self.read_template(cursor),
            _ => self.read_code(cursor),
        }
    }
}

/// Tokenize JavaScript source.
///
/// Total over its input: every character lands in exactly one token.
/// Only unterminated strings and escapes at end of input fail.
///
/// # Examples
///
/// ```
/// use parser::{tokenize, TokenKind};
///
/// let tokens = tokenize("a === b").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Identifier,
///         TokenKind::Space,
///         TokenKind::TripleEquals,
///         TokenKind::Space,
///         TokenKind::Identifier,
///     ]
/// );
/// ```
pub fn tokenize(source: &str) -> Result<Vec<JsToken>, LexError> {
    engine::tokenize(JsLexRule::new(), source)
}
