//! Recursive descent parser for JavaScript
//!
//! Every rule trims the whitespace it runs into; the lexer never skips it.
//! Operator layers recurse into [`Parser::parse_expression`] for their right
//! operand, so chains of equal-precedence operators nest to the right:
//! `1 + 2 + 3` is `1 + (2 + 3)`.

use crate::ast::{ASTNode, BinaryKind, Child, NodeKind, SourceType, VariableKind};
use crate::lexer::{JsToken, TokenKind as K};
use crate::options::{ParseOptions, ProgramProperties};
use core_types::ParseError;
use engine::{Grammar, Mark, TokenCursor, TokenTag};
use std::ops::{Deref, DerefMut};

type ParseResult<T> = Result<T, ParseError>;

const ASSIGNMENT_OPERATORS: &[K] = &[
    K::Equals,
    K::PlusEquals,
    K::DashEquals,
    K::PercentEquals,
    K::SlashEquals,
    K::AsteriskEquals,
    K::AmpersandEquals,
    K::PipeEquals,
];

const ADDITIVE_OPERATORS: &[K] = &[K::Dash, K::Plus];

const MULTIPLICATIVE_OPERATORS: &[K] = &[K::Asterisk, K::Slash, K::Percent];

const COMPARATIVE_OPERATORS: &[K] = &[
    K::DoublePipe,
    K::DoubleAmpersand,
    K::DoubleEquals,
    K::TripleEquals,
    K::NotEquals,
    K::NotDoubleEquals,
    K::MoreThanEqual,
    K::MoreThan,
    K::LessThanEqual,
    K::LessThan,
    K::InstanceOf,
    K::In,
];

/// Resolve backslash escapes: `\x` becomes `x`; a lone trailing backslash
/// is kept.
///
/// ```
/// assert_eq!(parser::cook(r"a\'b"), "a'b");
/// assert_eq!(parser::cook(r"a\\"), r"a\");
/// assert_eq!(parser::cook(r"end\"), r"end\");
/// ```
pub fn cook(raw: &str) -> String {
    let mut cooked = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            cooked.push(chars.next().unwrap_or('\\'));
        } else {
            cooked.push(c);
        }
    }
    cooked
}

fn boxed(node: ASTNode) -> Child {
    Box::new(node)
}

/// JavaScript parser state
pub struct Parser {
    cursor: TokenCursor<K, ProgramProperties>,
    /// Cleared while parsing a `for` init clause, where `in` ends the clause
    allow_in: bool,
}

impl Deref for Parser {
    type Target = TokenCursor<K, ProgramProperties>;

    fn deref(&self) -> &Self::Target {
        &self.cursor
    }
}

impl DerefMut for Parser {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.cursor
    }
}

impl Grammar for Parser {
    type Kind = K;
    type Properties = ProgramProperties;
    type Node = ASTNode;

    fn cursor(&mut self) -> &mut TokenCursor<K, ProgramProperties> {
        &mut self.cursor
    }

    fn into_cursor(self) -> TokenCursor<K, ProgramProperties> {
        self.cursor
    }

    fn parse_node(&mut self) -> ParseResult<ASTNode> {
        self.parse_statement()
    }

    fn skip_trivia(&mut self) -> ParseResult<()> {
        self.trim_semicolons();
        Ok(())
    }
}

impl Parser {
    /// Create a parser over an already tokenized source
    pub fn new(tokens: Vec<JsToken>, options: &ParseOptions) -> Self {
        Self {
            cursor: TokenCursor::new(tokens, ProgramProperties::from(options)),
            allow_in: true,
        }
    }

    // ===== TOOLS =====

    fn trim(&mut self) {
        self.skip_while_tag(TokenTag::WhiteSpace);
    }

    fn trim_semicolons(&mut self) {
        self.trim();
        while self.consume_if(K::Semicolon).is_some() {
            self.trim();
        }
    }

    fn eat_trim(&mut self) -> ParseResult<JsToken> {
        let token = self.consume()?;
        self.trim();
        Ok(token)
    }

    fn with_in<T>(
        &mut self,
        allowed: bool,
        parse: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let saved = std::mem::replace(&mut self.allow_in, allowed);
        let result = parse(self);
        self.allow_in = saved;
        result
    }

    fn mark_module(&mut self) {
        if self.properties().source_type != SourceType::Esm {
            tracing::debug!("import/export seen, source type is now esm");
            self.properties_mut().source_type = SourceType::Esm;
        }
    }

    /// True when the token after the current one, whitespace skipped, is `kind`
    fn followed_by(&mut self, kind: K) -> bool {
        self.look_ahead(|tokens| {
            tokens.consume().is_ok() && {
                tokens.skip_while_tag(TokenTag::WhiteSpace);
                tokens.is(kind)
            }
        })
    }

    /// True when the parenthesis at the cursor closes into `=>`
    fn arrow_ahead(&mut self) -> bool {
        self.look_ahead(|tokens| {
            let mut depth = 0usize;
            while let Ok(token) = tokens.consume() {
                match token.kind {
                    K::OpenParen => depth += 1,
                    K::CloseParen if depth <= 1 => {
                        tokens.skip_while_tag(TokenTag::WhiteSpace);
                        return tokens.is(K::Arrow);
                    }
                    K::CloseParen => depth -= 1,
                    _ => {}
                }
            }
            false
        })
    }

    // ===== STATEMENTS =====

    /// Parse one statement and the separators after it
    pub fn parse_statement(&mut self) -> ParseResult<ASTNode> {
        self.trim();
        let statement = match self.current_kind() {
            Some(K::Var | K::Let | K::Const | K::Function | K::Using | K::Class) => {
                self.parse_declaration()?
            }
            Some(K::Async) if self.followed_by(K::Function) => self.parse_declaration()?,
            Some(K::If) => self.parse_if_statement()?,
            Some(K::With) => self.parse_with_statement()?,
            Some(K::Try) => self.parse_try_statement()?,
            Some(K::For) => self.parse_any_for_statement()?,
            Some(K::Do) => self.parse_do_while_statement()?,
            Some(K::While) => self.parse_while_statement()?,
            Some(K::Switch) => self.parse_switch_statement()?,
            Some(K::SlashAsterisk) => self.parse_block_comment()?,
            Some(K::DoubleSlash) => self.parse_line_comment()?,
            Some(K::Import) => {
                self.mark_module();
                self.parse_import_declaration()?
            }
            Some(K::Export) => {
                self.mark_module();
                self.parse_export_declaration()?
            }
            Some(K::Return) => self.parse_return_statement()?,
            Some(K::Throw) => {
                let mark = self.mark();
                self.eat_trim()?;
                let argument = boxed(self.parse_expression()?);
                self.make_node(mark, NodeKind::ThrowStatement { argument })
            }
            Some(K::OpenBracket) => self.parse_block()?,
            Some(K::Await) if self.followed_by(K::Using) => {
                tracing::debug!("await using declaration");
                let mark = self.mark();
                self.eat_trim()?;
                self.parse_using_declaration(mark, true)?
            }
            Some(K::Identifier) if self.followed_by(K::Colon) => self.parse_labeled_statement()?,
            _ => return self.parse_expression_statement(),
        };
        self.trim_semicolons();
        Ok(statement)
    }

    fn parse_expression_statement(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        let expression = boxed(self.parse_expression()?);
        let statement = self.make_node(mark, NodeKind::ExpressionStatement { expression });
        self.trim_semicolons();
        Ok(statement)
    }

    fn parse_block(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.expect(K::OpenBracket, "Expected bracket to open block")?;
        self.trim_semicolons();
        let mut body = Vec::new();
        while self.will_continue() && self.isnt(K::CloseBracket) {
            body.push(self.parse_statement()?);
            self.trim_semicolons();
        }
        self.expect(K::CloseBracket, "Expected bracket to end block")?;
        let block = self.make_node(mark, NodeKind::BlockStatement { body });
        self.trim();
        Ok(block)
    }

    /// Body of a branch or loop: a block, a lone `;`, or one statement
    fn parse_consequent(&mut self) -> ParseResult<ASTNode> {
        if self.is(K::OpenBracket) {
            return self.parse_block();
        }
        let mark = self.mark();
        if self.consume_if(K::Semicolon).is_some() {
            return Ok(self.make_node(mark, NodeKind::EmptyStatement));
        }
        self.parse_statement()
    }

    fn parse_block_comment(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.consume()?;
        let content = self
            .consume_if(K::CommentText)
            .map(|t| t.text)
            .unwrap_or_default();
        self.expect(K::AsteriskSlash, "Expected asterisk slash to end block comment")?;
        let comment = self.make_node(mark, NodeKind::BlockComment { content });
        self.trim();
        Ok(comment)
    }

    fn parse_line_comment(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.consume()?;
        let content = self
            .consume_if(K::CommentText)
            .map(|t| t.text.trim_end_matches('\r').to_string())
            .unwrap_or_default();
        let comment = self.make_node(mark, NodeKind::LineComment { content });
        if self.will_continue() {
            self.expect(K::Br, "Expected line break to end line comment")?;
        }
        self.trim();
        Ok(comment)
    }

    fn parse_return_statement(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.eat_trim()?;
        let argument = if !self.will_continue() || self.is_any(&[K::Semicolon, K::CloseBracket]) {
            None
        } else {
            Some(boxed(self.parse_expression()?))
        };
        Ok(self.make_node(mark, NodeKind::ReturnStatement { argument }))
    }

    fn parse_labeled_statement(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        let label = boxed(self.parse_identifier()?);
        self.trim();
        self.expect(K::Colon, "Expected colon after label")?;
        self.trim();
        let body = boxed(self.parse_statement()?);
        Ok(self.make_node(mark, NodeKind::LabeledStatement { label, body }))
    }

    // ----- Declarations

    fn parse_declaration(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        match self.current_kind() {
            Some(K::Using) => self.parse_using_declaration(mark, false),
            Some(K::Var | K::Let | K::Const) => self.parse_variable_declaration(),
            Some(K::Class) => self.parse_class_declaration(),
            Some(K::Function) => self.parse_function_declaration(mark, false),
            Some(K::Async) => {
                self.eat_trim()?;
                if self.isnt(K::Function) {
                    return Err(self.error("Expected function keyword after async"));
                }
                self.parse_function_declaration(mark, true)
            }
            _ => Err(self.error("Expected declaration")),
        }
    }

    fn parse_using_declaration(&mut self, mark: Mark, is_await: bool) -> ParseResult<ASTNode> {
        self.eat_trim()?;
        let declarators = self.parse_var_declarators("Using")?;
        let declaration = self.make_node(
            mark,
            NodeKind::UsingDeclaration {
                is_await,
                declarators,
            },
        );
        self.trim_semicolons();
        Ok(declaration)
    }

    fn parse_variable_declaration(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        let (kind, keyword) = match self.consume()?.kind {
            K::Var => (VariableKind::Var, "Var"),
            K::Let => (VariableKind::Let, "Let"),
            _ => (VariableKind::Const, "Const"),
        };
        self.trim();
        let declarators = self.parse_var_declarators(keyword)?;
        Ok(self.make_node(mark, NodeKind::VariableDeclaration { kind, declarators }))
    }

    fn declarator_ends(&self) -> bool {
        !self.will_continue()
            || self.is_any(&[K::Semicolon, K::Comma, K::Of, K::CloseBracket])
            || (!self.allow_in && self.is(K::In))
    }

    fn parse_var_declarators(&mut self, keyword: &str) -> ParseResult<Vec<ASTNode>> {
        let mut declarators = Vec::new();
        while self.will_continue() && self.isnt_any(&[K::Comma, K::Semicolon]) {
            let mark = self.mark();
            let id = boxed(self.parse_assignee()?);
            self.trim();
            let init = if self.consume_if(K::Equals).is_some() {
                self.trim();
                Some(boxed(self.parse_expression()?))
            } else if self.declarator_ends() {
                None
            } else {
                let message = format!("Expected Equals after identifier in {} declaration", keyword);
                return Err(self.error(&message));
            };
            declarators.push(self.make_node(mark, NodeKind::VariableDeclarator { id, init }));
            self.trim();
            if self.consume_if(K::Comma).is_none() {
                break;
            }
            self.trim();
        }
        Ok(declarators)
    }

    fn parse_function_declaration(&mut self, mark: Mark, is_async: bool) -> ParseResult<ASTNode> {
        self.eat_trim()?;
        let is_generator = self.consume_if(K::Asterisk).is_some();
        self.trim();
        let id = boxed(self.parse_any_identifier(false)?);
        self.trim();
        self.expect(K::OpenParen, "Expected parenthesis after function identifier")?;
        self.trim();
        let params = self.parse_parameters()?;
        let body = boxed(self.parse_block()?);
        Ok(self.make_node(
            mark,
            NodeKind::FunctionDeclaration {
                id,
                params,
                body,
                is_async,
                is_generator,
            },
        ))
    }

    fn parse_class_declaration(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.eat_trim()?;
        let id = boxed(self.parse_any_identifier(false)?);
        self.trim();
        let extends = self.parse_class_heritage()?;
        let body = boxed(self.parse_class_body()?);
        Ok(self.make_node(mark, NodeKind::ClassDeclaration { id, extends, body }))
    }

    fn parse_class_heritage(&mut self) -> ParseResult<Option<Child>> {
        if self.consume_if(K::Extends).is_none() {
            return Ok(None);
        }
        self.trim();
        let base = self.parse_expression()?;
        self.trim();
        Ok(Some(boxed(base)))
    }

    fn parse_class_body(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.expect(K::OpenBracket, "Expected bracket to open class body")?;
        self.trim_semicolons();
        let mut members = Vec::new();
        while self.will_continue() && self.isnt(K::CloseBracket) {
            let member = self.mark();
            let key = boxed(self.parse_any_identifier(true)?);
            self.trim();
            if self.consume_if(K::OpenParen).is_some() {
                self.trim();
                let params = self.parse_parameters()?;
                let body = boxed(self.parse_block()?);
                members.push(self.make_node(member, NodeKind::ClassMethod { key, params, body }));
            } else {
                let value = if self.consume_if(K::Equals).is_some() {
                    self.trim();
                    Some(boxed(self.parse_expression()?))
                } else {
                    None
                };
                members.push(self.make_node(member, NodeKind::ClassProperty { key, value }));
            }
            self.trim_semicolons();
        }
        self.expect(K::CloseBracket, "Expected bracket to close class body")?;
        let body = self.make_node(mark, NodeKind::ClassBody { members });
        self.trim();
        Ok(body)
    }

    // ----- Modules

    fn parse_module_source(&mut self, message: &str) -> ParseResult<Child> {
        if self.isnt(K::String) {
            return Err(self.error(message));
        }
        Ok(boxed(self.parse_string()?))
    }

    fn parse_import_declaration(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.eat_trim()?;
        if self.is(K::String) {
            let source = boxed(self.parse_string()?);
            return Ok(self.make_node(
                mark,
                NodeKind::ImportDeclaration {
                    specifiers: Vec::new(),
                    source,
                },
            ));
        }
        let specifiers = self.parse_import_specifiers()?;
        self.trim();
        self.expect(K::From, "Expected from after import specifiers")?;
        self.trim();
        let source = self.parse_module_source("Expected string after from")?;
        Ok(self.make_node(mark, NodeKind::ImportDeclaration { specifiers, source }))
    }

    fn parse_import_specifiers(&mut self) -> ParseResult<Vec<ASTNode>> {
        let mut specifiers = Vec::new();
        while self.will_continue() && self.isnt_any(&[K::From, K::Comma]) {
            let mark = self.mark();
            if self.is_any(&[K::Identifier, K::Hash]) {
                let local = boxed(self.parse_any_identifier(false)?);
                specifiers.push(self.make_node(mark, NodeKind::ImportDefaultSpecifier { local }));
                self.trim();
            } else if self.consume_if(K::Asterisk).is_some() {
                self.trim();
                self.expect(K::As, "Expected as for namespace specifier")?;
                self.trim();
                let local = boxed(self.parse_any_identifier(false)?);
                specifiers.push(self.make_node(mark, NodeKind::ImportNamespaceSpecifier { local }));
                self.trim();
            } else {
                self.expect(K::OpenBracket, "Expected bracket to list imports")?;
                self.trim();
                while self.will_continue() && self.isnt(K::CloseBracket) {
                    let specifier = self.mark();
                    let imported = boxed(self.parse_any_identifier(true)?);
                    self.trim();
                    let local = if self.consume_if(K::As).is_some() {
                        self.trim();
                        let local = boxed(self.parse_any_identifier(false)?);
                        self.trim();
                        local
                    } else {
                        imported.clone()
                    };
                    specifiers.push(
                        self.make_node(specifier, NodeKind::ImportSpecifier { imported, local }),
                    );
                    if self.consume_if(K::Comma).is_none() {
                        break;
                    }
                    self.trim();
                }
                self.trim();
                self.expect(K::CloseBracket, "Expected bracket to end import list")?;
                self.trim();
            }
            if self.consume_if(K::Comma).is_none() {
                break;
            }
            self.trim();
        }
        Ok(specifiers)
    }

    fn parse_export_declaration(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.eat_trim()?;
        match self.current_kind() {
            Some(K::Default) => {
                self.eat_trim()?;
                let declaration = boxed(self.parse_expression()?);
                Ok(self.make_node(mark, NodeKind::ExportDefaultDeclaration { declaration }))
            }
            Some(K::Asterisk) => self.parse_export_all_declaration(mark),
            Some(K::OpenBracket) => self.parse_export_list(mark),
            _ => {
                let declaration = Some(boxed(self.parse_declaration()?));
                Ok(self.make_node(
                    mark,
                    NodeKind::ExportNamedDeclaration {
                        declaration,
                        specifiers: Vec::new(),
                        source: None,
                    },
                ))
            }
        }
    }

    fn parse_export_all_declaration(&mut self, mark: Mark) -> ParseResult<ASTNode> {
        self.eat_trim()?;
        let exported = if self.consume_if(K::As).is_some() {
            self.trim();
            let name = boxed(self.parse_any_identifier(true)?);
            self.trim();
            Some(name)
        } else {
            None
        };
        self.expect(K::From, "Expected from in export all declaration")?;
        self.trim();
        let source = self.parse_module_source("Expected string after from")?;
        Ok(self.make_node(mark, NodeKind::ExportAllDeclaration { exported, source }))
    }

    fn parse_export_list(&mut self, mark: Mark) -> ParseResult<ASTNode> {
        self.eat_trim()?;
        let mut specifiers = Vec::new();
        while self.will_continue() && self.isnt(K::CloseBracket) {
            let specifier = self.mark();
            let local = boxed(self.parse_any_identifier(false)?);
            self.trim();
            let exported = if self.consume_if(K::As).is_some() {
                self.trim();
                let exported = boxed(self.parse_any_identifier(true)?);
                self.trim();
                exported
            } else {
                local.clone()
            };
            specifiers.push(self.make_node(specifier, NodeKind::ExportSpecifier { local, exported }));
            if self.consume_if(K::Comma).is_none() {
                break;
            }
            self.trim();
        }
        self.expect(K::CloseBracket, "Expected bracket to end export list")?;
        self.trim();
        let source = if self.consume_if(K::From).is_some() {
            self.trim();
            Some(self.parse_module_source("Expected string after export from")?)
        } else {
            None
        };
        Ok(self.make_node(
            mark,
            NodeKind::ExportNamedDeclaration {
                declaration: None,
                specifiers,
                source,
            },
        ))
    }

    // ----- Control flow

    fn parse_condition(&mut self, open: &str, close: &str) -> ParseResult<Child> {
        self.expect(K::OpenParen, open)?;
        self.trim();
        let test = self.with_in(true, Self::parse_expression)?;
        self.trim();
        self.expect(K::CloseParen, close)?;
        self.trim();
        Ok(boxed(test))
    }

    fn parse_if_statement(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.eat_trim()?;
        let test = self.parse_condition(
            "Expected parenthesis after If keyword",
            "Expected parenthesis after If condition",
        )?;
        let consequent = boxed(self.parse_consequent()?);
        self.trim();
        let alternate = if self.consume_if(K::Else).is_some() {
            self.trim();
            let alternate = if self.is(K::If) {
                self.parse_if_statement()?
            } else {
                self.parse_consequent()?
            };
            Some(boxed(alternate))
        } else {
            None
        };
        Ok(self.make_node(
            mark,
            NodeKind::IfStatement {
                test,
                consequent,
                alternate,
            },
        ))
    }

    fn parse_with_statement(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.eat_trim()?;
        let object = self.parse_condition(
            "Expected parenthesis after with keyword",
            "Expected parenthesis after with namespace",
        )?;
        let body = boxed(self.parse_consequent()?);
        Ok(self.make_node(mark, NodeKind::WithStatement { object, body }))
    }

    fn parse_while_statement(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.eat_trim()?;
        let test = self.parse_condition(
            "Expected parenthesis after while keyword",
            "Expected parenthesis after while condition",
        )?;
        let body = boxed(self.parse_consequent()?);
        Ok(self.make_node(mark, NodeKind::WhileStatement { test, body }))
    }

    fn parse_do_while_statement(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.eat_trim()?;
        let body = boxed(self.parse_block()?);
        self.expect(K::While, "Expected while after do")?;
        self.trim();
        let test = boxed(self.parse_expression()?);
        Ok(self.make_node(mark, NodeKind::DoWhileStatement { body, test }))
    }

    fn parse_try_statement(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.eat_trim()?;
        let block = boxed(self.parse_block()?);
        let handler = if self.is(K::Catch) {
            let clause = self.mark();
            self.eat_trim()?;
            let param = if self.consume_if(K::OpenParen).is_some() {
                self.trim();
                let param = boxed(self.parse_assignee()?);
                self.trim();
                self.expect(K::CloseParen, "Expected close parenthesis after catch")?;
                self.trim();
                Some(param)
            } else {
                None
            };
            let body = boxed(self.parse_block()?);
            Some(boxed(self.make_node(clause, NodeKind::CatchClause { param, body })))
        } else {
            None
        };
        let finalizer = if self.consume_if(K::Finally).is_some() {
            self.trim();
            Some(boxed(self.parse_block()?))
        } else {
            None
        };
        if handler.is_none() && finalizer.is_none() {
            return Err(self.error("Expected catch or finally after try block"));
        }
        Ok(self.make_node(
            mark,
            NodeKind::TryStatement {
                block,
                handler,
                finalizer,
            },
        ))
    }

    fn parse_switch_statement(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.eat_trim()?;
        let discriminant = self.parse_condition(
            "Expected parenthesis after switch keyword",
            "Expected parenthesis after switch discriminant expression",
        )?;
        self.expect(K::OpenBracket, "Expected OpenBracket after switch discriminant")?;
        self.trim();
        let mut cases = Vec::new();
        while self.will_continue() && self.isnt(K::CloseBracket) {
            let case = self.mark();
            let test = if self.consume_if(K::Case).is_some() {
                self.trim();
                let test = boxed(self.parse_expression()?);
                self.expect(K::Colon, "Expected colon after switch case expression")?;
                Some(test)
            } else if self.consume_if(K::Default).is_some() {
                self.trim();
                self.expect(K::Colon, "Expected colon after switch default case")?;
                None
            } else {
                return Err(self.error("Unexpected token inside switch body"));
            };
            self.trim_semicolons();
            let mut consequent = Vec::new();
            while self.will_continue() && self.isnt_any(&[K::Case, K::Default, K::CloseBracket]) {
                consequent.push(self.parse_statement()?);
                self.trim_semicolons();
            }
            cases.push(self.make_node(case, NodeKind::SwitchCase { test, consequent }));
        }
        self.expect(K::CloseBracket, "Expected bracket to end switch body")?;
        Ok(self.make_node(
            mark,
            NodeKind::SwitchStatement {
                discriminant,
                cases,
            },
        ))
    }

    // ----- For loops

    fn parse_any_for_statement(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.eat_trim()?;
        let is_await = self.consume_if(K::Await).is_some();
        self.trim();
        self.expect(K::OpenParen, "Expected parenthesis after 'for'")?;
        self.trim();

        if self.is(K::Semicolon) {
            return self.parse_for_statement(mark, None);
        }

        let init = self.with_in(false, |parser| {
            if parser.is_any(&[K::Const, K::Var, K::Let]) {
                parser.parse_variable_declaration()
            } else {
                parser.parse_expression()
            }
        })?;
        self.trim();

        if is_await || self.is(K::Of) {
            self.parse_for_of_statement(mark, init, is_await)
        } else if self.is(K::In) {
            self.parse_for_in_statement(mark, init)
        } else {
            self.parse_for_statement(mark, Some(boxed(init)))
        }
    }

    fn parse_for_header_end(&mut self) -> ParseResult<()> {
        self.trim();
        self.expect(K::CloseParen, "Expected closing parenthesis in for expression")?;
        self.trim();
        Ok(())
    }

    fn parse_for_of_statement(
        &mut self,
        mark: Mark,
        left: ASTNode,
        is_await: bool,
    ) -> ParseResult<ASTNode> {
        self.expect(K::Of, "Expected of in for await statement")?;
        self.trim();
        let right = boxed(self.parse_expression()?);
        self.parse_for_header_end()?;
        let body = boxed(self.parse_consequent()?);
        Ok(self.make_node(
            mark,
            NodeKind::ForOfStatement {
                left: boxed(left),
                right,
                body,
                is_await,
            },
        ))
    }

    fn parse_for_in_statement(&mut self, mark: Mark, left: ASTNode) -> ParseResult<ASTNode> {
        self.eat_trim()?;
        let right = boxed(self.parse_expression()?);
        self.parse_for_header_end()?;
        let body = boxed(self.parse_consequent()?);
        Ok(self.make_node(
            mark,
            NodeKind::ForInStatement {
                left: boxed(left),
                right,
                body,
            },
        ))
    }

    fn parse_for_statement(&mut self, mark: Mark, init: Option<Child>) -> ParseResult<ASTNode> {
        self.expect(K::Semicolon, "Expected semicolon after 'init'")?;
        self.trim();
        let test = if self.is(K::Semicolon) {
            None
        } else {
            Some(boxed(self.parse_expression()?))
        };
        self.trim();
        self.expect(K::Semicolon, "Expected semicolon after 'test'")?;
        self.trim();
        let update = if self.is(K::CloseParen) {
            None
        } else {
            Some(boxed(self.parse_expression()?))
        };
        self.parse_for_header_end()?;
        let body = boxed(self.parse_consequent()?);
        Ok(self.make_node(
            mark,
            NodeKind::ForStatement {
                init,
                test,
                update,
                body,
            },
        ))
    }

    // ===== EXPRESSIONS =====

    /// Parse one expression, starting at the assignment layer
    pub fn parse_expression(&mut self) -> ParseResult<ASTNode> {
        self.parse_assignment()
    }

    fn parse_assignment(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        let target = self.parse_conditional()?;
        self.trim();
        if self.is_any(ASSIGNMENT_OPERATORS) {
            let operator = self.eat_trim()?.kind;
            let value = self.parse_expression()?;
            self.trim();
            return Ok(self.make_node(
                mark,
                NodeKind::AssignmentExpression {
                    operator,
                    target: boxed(target),
                    value: boxed(value),
                },
            ));
        }
        Ok(target)
    }

    fn parse_conditional(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        let test = self.parse_additive()?;
        self.trim();
        if self.consume_if(K::Question).is_none() {
            return Ok(test);
        }
        self.trim();
        let consequent = self.with_in(true, Self::parse_expression)?;
        self.trim();
        self.expect(K::Colon, "Expected colon to finalize ternary expression")?;
        self.trim();
        let alternate = self.parse_expression()?;
        Ok(self.make_node(
            mark,
            NodeKind::ConditionalExpression {
                test: boxed(test),
                consequent: boxed(consequent),
                alternate: boxed(alternate),
            },
        ))
    }

    fn parse_binary(
        &mut self,
        kind: BinaryKind,
        operators: &[K],
        operand: fn(&mut Self) -> ParseResult<ASTNode>,
    ) -> ParseResult<ASTNode> {
        let mark = self.mark();
        let left = operand(self)?;
        self.trim();
        let matched = self
            .current_kind()
            .map_or(false, |k| operators.contains(&k) && (k != K::In || self.allow_in));
        if !matched {
            return Ok(left);
        }
        let operator = self.eat_trim()?.kind;
        let right = self.parse_expression()?;
        Ok(self.make_node(
            mark,
            NodeKind::BinaryExpression {
                kind,
                operator,
                left: boxed(left),
                right: boxed(right),
            },
        ))
    }

    fn parse_additive(&mut self) -> ParseResult<ASTNode> {
        self.parse_binary(BinaryKind::Add, ADDITIVE_OPERATORS, Self::parse_multiplicative)
    }

    fn parse_multiplicative(&mut self) -> ParseResult<ASTNode> {
        self.parse_binary(BinaryKind::Mul, MULTIPLICATIVE_OPERATORS, Self::parse_comparative)
    }

    fn parse_comparative(&mut self) -> ParseResult<ASTNode> {
        self.parse_binary(BinaryKind::Com, COMPARATIVE_OPERATORS, Self::parse_member_call)
    }

    // ----- Member, call

    fn parse_member_call(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        let mut expression = self.parse_primary()?;
        self.trim();
        loop {
            expression = match self.current_kind() {
                Some(K::Period) => {
                    self.eat_trim()?;
                    self.parse_property_access(mark, expression, false)?
                }
                Some(K::OpenSquare) => self.parse_computed_member(mark, expression, false)?,
                Some(K::OpenParen) => self.parse_call(mark, expression, false)?,
                Some(K::Optional) => {
                    self.eat_trim()?;
                    match self.current_kind() {
                        Some(K::OpenSquare) => self.parse_computed_member(mark, expression, true)?,
                        Some(K::OpenParen) => self.parse_call(mark, expression, true)?,
                        _ => self.parse_property_access(mark, expression, true)?,
                    }
                }
                Some(K::BackQuote) => {
                    let quasi = boxed(self.parse_template()?);
                    self.make_node(
                        mark,
                        NodeKind::TaggedTemplateExpression {
                            tag: boxed(expression),
                            quasi,
                        },
                    )
                }
                _ => break,
            };
            self.trim();
        }
        Ok(expression)
    }

    fn parse_property_access(
        &mut self,
        mark: Mark,
        object: ASTNode,
        optional: bool,
    ) -> ParseResult<ASTNode> {
        let property = boxed(self.parse_any_identifier(true)?);
        Ok(self.make_node(
            mark,
            NodeKind::MemberExpression {
                object: boxed(object),
                property,
                computed: false,
                optional,
            },
        ))
    }

    fn parse_computed_member(
        &mut self,
        mark: Mark,
        object: ASTNode,
        optional: bool,
    ) -> ParseResult<ASTNode> {
        self.eat_trim()?;
        let property = boxed(self.with_in(true, Self::parse_expression)?);
        self.trim();
        self.expect(
            K::CloseSquare,
            "Expected closing square bracket in member expression",
        )?;
        Ok(self.make_node(
            mark,
            NodeKind::MemberExpression {
                object: boxed(object),
                property,
                computed: true,
                optional,
            },
        ))
    }

    fn parse_call(&mut self, mark: Mark, callee: ASTNode, optional: bool) -> ParseResult<ASTNode> {
        self.eat_trim()?;
        let arguments = self.with_in(true, |parser| {
            let mut arguments = Vec::new();
            while parser.will_continue() && parser.isnt(K::CloseParen) {
                arguments.push(parser.parse_argument()?);
                parser.trim();
                if parser.consume_if(K::Comma).is_none() {
                    break;
                }
                parser.trim();
            }
            Ok(arguments)
        })?;
        self.expect(
            K::CloseParen,
            "Expected closing parenthesis to end argument list",
        )?;
        Ok(self.make_node(
            mark,
            NodeKind::CallExpression {
                callee: boxed(callee),
                arguments,
                optional,
            },
        ))
    }

    fn parse_argument(&mut self) -> ParseResult<ASTNode> {
        if self.is(K::Spread) {
            let mark = self.mark();
            self.eat_trim()?;
            let argument = boxed(self.parse_expression()?);
            return Ok(self.make_node(mark, NodeKind::SpreadElement { argument }));
        }
        self.parse_expression()
    }

    // ----- Primary

    fn parse_primary(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        match self.current_kind() {
            Some(K::Async) => {
                self.eat_trim()?;
                if self.is(K::OpenParen) {
                    return self.parse_arrow_function(mark, true);
                }
                if self.is(K::Identifier) && self.followed_by(K::Arrow) {
                    return self.parse_single_param_arrow(mark, true);
                }
                if self.isnt(K::Function) {
                    return Err(self.error("Expected function keyword after async"));
                }
                self.parse_function_expression(mark, true)
            }
            Some(K::Function) => self.parse_function_expression(mark, false),
            Some(K::Class) => self.parse_class_expression(),
            Some(K::DoubleSlash) => self.parse_line_comment(),
            Some(K::String) => self.parse_string(),
            Some(K::BackQuote) => self.parse_template(),
            Some(K::New) => {
                self.eat_trim()?;
                let callee = boxed(self.parse_expression()?);
                Ok(self.make_node(mark, NodeKind::NewExpression { callee }))
            }
            Some(K::Await) => {
                self.eat_trim()?;
                let argument = boxed(self.parse_expression()?);
                Ok(self.make_node(mark, NodeKind::AwaitExpression { argument }))
            }
            Some(K::OpenBracket) => self.parse_object_expression(),
            Some(K::OpenSquare) => self.parse_array_expression(),
            Some(K::OpenParen) => {
                if self.arrow_ahead() {
                    tracing::trace!("parenthesis opens arrow parameters");
                    self.parse_arrow_function(mark, false)
                } else {
                    tracing::trace!("parenthesis opens group");
                    self.with_in(true, |parser| parser.parse_group())
                }
            }
            Some(K::Slash) => self.parse_regexp(),
            Some(K::Number) => self.parse_numeric(),
            Some(K::Break) => {
                let label = self.parse_jump_label()?;
                Ok(self.make_node(mark, NodeKind::BreakStatement { label }))
            }
            Some(K::Continue) => {
                let label = self.parse_jump_label()?;
                Ok(self.make_node(mark, NodeKind::ContinueStatement { label }))
            }
            Some(K::Hash | K::Identifier) => {
                if self.is(K::Identifier) && self.followed_by(K::Arrow) {
                    return self.parse_single_param_arrow(mark, false);
                }
                let argument = boxed(self.parse_any_identifier(false)?);
                self.trim();
                if self.is_any(&[K::DoublePlus, K::DoubleDash]) {
                    let operator = self.consume()?.kind;
                    return Ok(self.make_node(
                        mark,
                        NodeKind::UpdateExpression {
                            operator,
                            argument,
                            prefix: false,
                        },
                    ));
                }
                Ok(*argument)
            }
            Some(K::Plus | K::Exclamation | K::TypeOf | K::Void | K::Dash) => {
                let operator = self.eat_trim()?.kind;
                let argument = boxed(self.parse_expression()?);
                Ok(self.make_node(mark, NodeKind::UnaryExpression { operator, argument }))
            }
            Some(K::DoublePlus | K::DoubleDash) => {
                let operator = self.eat_trim()?.kind;
                let argument = boxed(self.parse_any_identifier(false)?);
                Ok(self.make_node(
                    mark,
                    NodeKind::UpdateExpression {
                        operator,
                        argument,
                        prefix: true,
                    },
                ))
            }
            _ => Err(self.error("Expected expression")),
        }
    }

    fn parse_jump_label(&mut self) -> ParseResult<Option<Child>> {
        self.eat_trim()?;
        if self.is_any(&[K::Hash, K::Identifier]) {
            Ok(Some(boxed(self.parse_any_identifier(false)?)))
        } else {
            Ok(None)
        }
    }

    fn parse_group(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.eat_trim()?;
        let first = self.parse_expression()?;
        self.trim();
        if self.consume_if(K::CloseParen).is_some() {
            return Ok(first);
        }
        self.expect(K::Comma, "Expected comma for sequence")?;
        self.trim();
        let mut expressions = vec![first];
        while self.will_continue() && self.isnt(K::CloseParen) {
            expressions.push(self.parse_expression()?);
            self.trim();
            if self.consume_if(K::Comma).is_none() {
                break;
            }
            self.trim();
        }
        self.expect(
            K::CloseParen,
            "Expected closing parenthesis to end group expression",
        )?;
        Ok(self.make_node(mark, NodeKind::SequenceExpression { expressions }))
    }

    // ----- Functions and classes

    fn parse_arrow_body(&mut self) -> ParseResult<(Child, bool)> {
        if self.is(K::OpenBracket) {
            Ok((boxed(self.parse_block()?), false))
        } else {
            Ok((boxed(self.parse_expression()?), true))
        }
    }

    fn parse_arrow_function(&mut self, mark: Mark, is_async: bool) -> ParseResult<ASTNode> {
        self.expect(K::OpenParen, "Expected parenthesis to open arrow parameters")?;
        self.trim();
        let params = self.parse_parameters()?;
        self.expect(K::Arrow, "Expected arrow after parameters list")?;
        self.trim();
        let (body, expression) = self.parse_arrow_body()?;
        Ok(self.make_node(
            mark,
            NodeKind::ArrowFunctionExpression {
                params,
                body,
                expression,
                is_async,
            },
        ))
    }

    fn parse_single_param_arrow(&mut self, mark: Mark, is_async: bool) -> ParseResult<ASTNode> {
        let param = self.parse_identifier()?;
        self.trim();
        self.expect(K::Arrow, "Expected arrow after parameter")?;
        self.trim();
        let (body, expression) = self.parse_arrow_body()?;
        Ok(self.make_node(
            mark,
            NodeKind::ArrowFunctionExpression {
                params: vec![param],
                body,
                expression,
                is_async,
            },
        ))
    }

    fn parse_function_expression(&mut self, mark: Mark, is_async: bool) -> ParseResult<ASTNode> {
        self.eat_trim()?;
        let is_generator = self.consume_if(K::Asterisk).is_some();
        self.trim();
        let id = if self.is_any(&[K::Identifier, K::Hash]) {
            let id = boxed(self.parse_any_identifier(false)?);
            self.trim();
            Some(id)
        } else {
            None
        };
        self.expect(K::OpenParen, "Expected parenthesis after function identifier")?;
        self.trim();
        let params = self.parse_parameters()?;
        let body = boxed(self.parse_block()?);
        Ok(self.make_node(
            mark,
            NodeKind::FunctionExpression {
                id,
                params,
                body,
                is_async,
                is_generator,
            },
        ))
    }

    fn parse_class_expression(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.eat_trim()?;
        let id = if self.is(K::Identifier) {
            let id = boxed(self.parse_any_identifier(false)?);
            self.trim();
            Some(id)
        } else {
            None
        };
        let extends = self.parse_class_heritage()?;
        let body = boxed(self.parse_class_body()?);
        Ok(self.make_node(mark, NodeKind::ClassExpression { id, extends, body }))
    }

    /// Parameter list after the opening parenthesis, closing parenthesis included
    fn parse_parameters(&mut self) -> ParseResult<Vec<ASTNode>> {
        let mut params = Vec::new();
        while self.will_continue() && self.isnt(K::CloseParen) {
            params.push(self.parse_rest_pattern()?);
            self.trim();
            if self.consume_if(K::Comma).is_none() {
                break;
            }
            self.trim();
        }
        self.expect(K::CloseParen, "Expected parenthesis to close function params")?;
        self.trim();
        Ok(params)
    }

    // ----- Object and array literals

    fn parse_property_key(&mut self) -> ParseResult<(Child, bool)> {
        if self.consume_if(K::OpenSquare).is_some() {
            self.trim();
            let key = boxed(self.parse_expression()?);
            self.trim();
            self.expect(K::CloseSquare, "Expected close square to end computed key")?;
            return Ok((key, true));
        }
        let key = match self.current_kind() {
            Some(K::String) => self.parse_string()?,
            Some(K::Number) => self.parse_numeric()?,
            _ => self.parse_any_identifier(true)?,
        };
        Ok((boxed(key), false))
    }

    fn parse_object_expression(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.eat_trim()?;
        let properties = self.with_in(true, |parser| {
            let mut properties = Vec::new();
            while parser.will_continue() && parser.isnt(K::CloseBracket) {
                properties.push(parser.parse_object_member()?);
                parser.trim();
                if parser.consume_if(K::Comma).is_none() {
                    break;
                }
                parser.trim();
            }
            Ok(properties)
        })?;
        self.trim();
        self.expect(K::CloseBracket, "Expected closing bracket to end Object literal")?;
        Ok(self.make_node(mark, NodeKind::ObjectExpression { properties }))
    }

    fn parse_object_member(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        if self.consume_if(K::Spread).is_some() {
            self.trim();
            let argument = boxed(self.parse_expression()?);
            return Ok(self.make_node(mark, NodeKind::SpreadElement { argument }));
        }
        let (key, computed) = self.parse_property_key()?;
        self.trim();
        if self.consume_if(K::Colon).is_some() {
            self.trim();
            let value = boxed(self.parse_expression()?);
            return Ok(self.make_node(
                mark,
                NodeKind::Property {
                    key,
                    value,
                    shorthand: false,
                    computed,
                },
            ));
        }
        if self.consume_if(K::OpenParen).is_some() {
            self.trim();
            let params = self.parse_parameters()?;
            let body = boxed(self.parse_block()?);
            return Ok(self.make_node(
                mark,
                NodeKind::PropertyMethod {
                    key,
                    params,
                    body,
                    computed,
                },
            ));
        }
        if computed || !key.kind.is_identifier() {
            return Err(self.error("Expected colon after property key"));
        }
        let value = key.clone();
        Ok(self.make_node(
            mark,
            NodeKind::Property {
                key,
                value,
                shorthand: true,
                computed: false,
            },
        ))
    }

    fn parse_array_expression(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.eat_trim()?;
        let elements = self.with_in(true, |parser| {
            let mut elements = Vec::new();
            while parser.will_continue() && parser.isnt(K::CloseSquare) {
                elements.push(parser.parse_argument()?);
                parser.trim();
                if parser.consume_if(K::Comma).is_none() {
                    break;
                }
                parser.trim();
            }
            Ok(elements)
        })?;
        self.expect(
            K::CloseSquare,
            "Expected closing square bracket to end Array literal",
        )?;
        Ok(self.make_node(mark, NodeKind::ArrayExpression { elements }))
    }

    // ----- Patterns

    fn parse_assignee(&mut self) -> ParseResult<ASTNode> {
        match self.current_kind() {
            Some(K::OpenBracket) => self.parse_object_pattern(),
            Some(K::OpenSquare) => self.parse_array_pattern(),
            Some(K::Identifier | K::Hash) => self.parse_any_identifier(false),
            _ => Err(self.error("Expected identifier or pattern")),
        }
    }

    fn parse_rest_pattern(&mut self) -> ParseResult<ASTNode> {
        if self.is(K::Spread) {
            let mark = self.mark();
            self.eat_trim()?;
            let argument = boxed(self.parse_assignee()?);
            return Ok(self.make_node(mark, NodeKind::RestElement { argument }));
        }
        self.parse_assignment_pattern()
    }

    fn parse_assignment_pattern(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        let left = self.parse_assignee()?;
        self.trim();
        self.parse_default_value(mark, left)
    }

    fn parse_default_value(&mut self, mark: Mark, left: ASTNode) -> ParseResult<ASTNode> {
        if self.consume_if(K::Equals).is_none() {
            return Ok(left);
        }
        self.trim();
        let right = boxed(self.parse_expression()?);
        self.trim();
        Ok(self.make_node(
            mark,
            NodeKind::AssignmentPattern {
                left: boxed(left),
                right,
            },
        ))
    }

    fn parse_array_pattern(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.eat_trim()?;
        let mut elements = Vec::new();
        while self.will_continue() && self.isnt(K::CloseSquare) {
            elements.push(self.parse_rest_pattern()?);
            self.trim();
            if self.consume_if(K::Comma).is_none() {
                break;
            }
            self.trim();
        }
        self.expect(
            K::CloseSquare,
            "Expected closing square bracket to end Array pattern",
        )?;
        Ok(self.make_node(mark, NodeKind::ArrayPattern { elements }))
    }

    fn parse_object_pattern(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.eat_trim()?;
        let mut properties = Vec::new();
        while self.will_continue() && self.isnt(K::CloseBracket) {
            properties.push(self.parse_pattern_member()?);
            self.trim();
            if self.consume_if(K::Comma).is_none() {
                break;
            }
            self.trim();
        }
        self.expect(K::CloseBracket, "Expected closing bracket to end Object pattern")?;
        Ok(self.make_node(mark, NodeKind::ObjectPattern { properties }))
    }

    fn parse_pattern_member(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        if self.consume_if(K::Spread).is_some() {
            self.trim();
            let argument = boxed(self.parse_assignee()?);
            return Ok(self.make_node(mark, NodeKind::RestElement { argument }));
        }
        let (key, computed) = self.parse_property_key()?;
        self.trim();
        if self.consume_if(K::Colon).is_some() {
            self.trim();
            let value = boxed(self.parse_assignment_pattern()?);
            return Ok(self.make_node(
                mark,
                NodeKind::PropertyPattern {
                    key,
                    value,
                    shorthand: false,
                    computed,
                },
            ));
        }
        if computed || !key.kind.is_identifier() {
            return Err(self.error("Expected colon after pattern key"));
        }
        let value = boxed(self.parse_default_value(mark, (*key).clone())?);
        Ok(self.make_node(
            mark,
            NodeKind::PropertyPattern {
                key,
                value,
                shorthand: true,
                computed: false,
            },
        ))
    }

    // ----- Identifiers

    fn identifier_text(&mut self, any_word: bool) -> ParseResult<String> {
        let token = if any_word {
            self.expect_tag(TokenTag::Word, "Expected word")?
        } else {
            self.expect(K::Identifier, "Expected identifier")?
        };
        Ok(token.text)
    }

    /// `name` or `#name`; with `any_word`, keywords are accepted as names
    fn parse_any_identifier(&mut self, any_word: bool) -> ParseResult<ASTNode> {
        let mark = self.mark();
        if self.consume_if(K::Hash).is_some() {
            let symbol = self.identifier_text(any_word)?;
            return Ok(self.make_node(mark, NodeKind::PrivateIdentifier { symbol }));
        }
        let symbol = self.identifier_text(any_word)?;
        Ok(self.make_node(mark, NodeKind::Identifier { symbol }))
    }

    fn parse_identifier(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        let symbol = self.identifier_text(false)?;
        Ok(self.make_node(mark, NodeKind::Identifier { symbol }))
    }

    // ----- Literals

    fn parse_string(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        let raw = self.expect(K::String, "Expected string")?.text;
        let mut inner = raw.chars();
        inner.next();
        inner.next_back();
        let value = cook(inner.as_str());
        Ok(self.make_node(mark, NodeKind::StringLiteral { value, raw }))
    }

    fn parse_numeric(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        let mut raw = self.expect(K::Number, "Expected number")?.text;
        let float = self.consume_if(K::Period).is_some();
        if float {
            raw.push('.');
            raw.push_str(&self.expect(K::Number, "Expected number after decimal period")?.text);
        }
        let value = raw
            .parse::<f64>()
            .map_err(|_| self.error("Invalid numeric literal"))?;
        Ok(self.make_node(mark, NodeKind::NumericLiteral { value, raw, float }))
    }

    fn parse_regexp(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.consume()?;
        let mut pattern = String::new();
        let mut closed = false;
        while self.will_continue() && self.isnt(K::Slash) {
            let token = self.consume()?;
            match token.kind {
                // `/a*/` lexes its end as `*/`
                K::AsteriskSlash => {
                    pattern.push('*');
                    closed = true;
                    break;
                }
                K::BackSlash => {
                    pattern.push_str(&token.text);
                    if self.will_continue() {
                        pattern.push_str(&self.consume()?.text);
                    }
                }
                _ => pattern.push_str(&token.text),
            }
        }
        if !closed {
            self.expect(K::Slash, "Expected slash to end regular expression")?;
        }
        let flags = self.consume_if(K::Identifier).map(|t| t.text);
        let raw = format!("/{}/{}", pattern, flags.as_deref().unwrap_or(""));
        Ok(self.make_node(
            mark,
            NodeKind::RegExpLiteral {
                pattern,
                flags,
                raw,
            },
        ))
    }

    fn parse_template(&mut self) -> ParseResult<ASTNode> {
        let mark = self.mark();
        self.expect(K::BackQuote, "Expected back quote to open template")?;
        let mut quasis = Vec::new();
        let mut expressions = Vec::new();
        while self.will_continue() && self.isnt(K::BackQuote) {
            let segment = self.mark();
            if let Some(text) = self.consume_if(K::TemplateText) {
                let tail = self.is(K::BackQuote);
                let cooked = cook(&text.text);
                quasis.push(self.make_node(
                    segment,
                    NodeKind::TemplateElement {
                        raw: text.text,
                        cooked,
                        tail,
                    },
                ));
            } else if self.consume_if(K::OpenTemplate).is_some() {
                self.trim();
                expressions.push(self.with_in(true, Self::parse_expression)?);
                self.trim();
                self.expect(K::CloseBracket, "Expected close bracket to close expression")?;
            } else {
                return Err(self.error("Unexpected token in template literal"));
            }
        }
        self.expect(K::BackQuote, "Expected back quote to end template")?;
        Ok(self.make_node(
            mark,
            NodeKind::TemplateLiteral {
                quasis,
                expressions,
            },
        ))
    }
}
