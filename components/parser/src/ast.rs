//! Abstract Syntax Tree node definitions

use crate::lexer::TokenKind;
use engine::Node;
use serde::{Deserialize, Serialize};

/// AST node: a [`NodeKind`] plus its source span
pub type ASTNode = Node<NodeKind>;

/// Boxed child node
pub type Child = Box<ASTNode>;

/// Module classification discovered while parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Script without import/export
    #[default]
    Cjs,
    /// Module: an import or export was seen
    Esm,
}

/// Variable declaration keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VariableKind {
    /// `var`
    Var,
    /// `let`
    Let,
    /// `const`
    Const,
}

/// Precedence layer a binary expression was parsed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryKind {
    /// `+` `-`
    Add,
    /// `*` `/` `%`
    Mul,
    /// Comparison and logical operators
    Com,
}

/// One variant per syntax construct
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum NodeKind {
    // ===== Program and comments =====
    /// Whole script
    Program {
        /// Top-level statements
        body: Vec<ASTNode>,
    },
    /// `/* ... */`
    BlockComment {
        /// Text between the delimiters
        content: String,
    },
    /// `// ...`
    LineComment {
        /// Text after the delimiter up to the line break
        content: String,
    },

    // ===== Declarations =====
    /// `var`/`let`/`const` declaration
    VariableDeclaration {
        /// Declaration keyword
        kind: VariableKind,
        /// Declarators in source order
        declarators: Vec<ASTNode>,
    },
    /// `using` / `await using` declaration
    UsingDeclaration {
        /// Declared with `await using`
        #[serde(rename = "await")]
        is_await: bool,
        /// Declarators in source order
        declarators: Vec<ASTNode>,
    },
    /// `id = init` inside a declaration
    VariableDeclarator {
        /// Binding target
        id: Child,
        /// Initializer
        init: Option<Child>,
    },
    /// `function name(...) { ... }`
    FunctionDeclaration {
        /// Function name
        id: Child,
        /// Parameter patterns
        params: Vec<ASTNode>,
        /// Function body
        body: Child,
        /// Is async function
        #[serde(rename = "async")]
        is_async: bool,
        /// Is generator function
        #[serde(rename = "generator")]
        is_generator: bool,
    },
    /// `class Name extends Base { ... }`
    ClassDeclaration {
        /// Class name
        id: Child,
        /// Superclass expression
        extends: Option<Child>,
        /// Class body
        body: Child,
    },
    /// `{ ... }` of a class
    ClassBody {
        /// Methods and properties
        members: Vec<ASTNode>,
    },
    /// `name(...) { ... }` inside a class body
    ClassMethod {
        /// Method name
        key: Child,
        /// Parameter patterns
        params: Vec<ASTNode>,
        /// Method body
        body: Child,
    },
    /// `name = value;` inside a class body
    ClassProperty {
        /// Property name
        key: Child,
        /// Initializer
        value: Option<Child>,
    },

    // ===== Modules =====
    /// `import ... from "source"`
    ImportDeclaration {
        /// Imported bindings, empty for a side-effect import
        specifiers: Vec<ASTNode>,
        /// Module specifier
        source: Child,
    },
    /// `{ imported as local }`
    ImportSpecifier {
        /// Exported name in the source module
        imported: Child,
        /// Local binding
        local: Child,
    },
    /// `import local from ...`
    ImportDefaultSpecifier {
        /// Local binding
        local: Child,
    },
    /// `import * as local from ...`
    ImportNamespaceSpecifier {
        /// Local binding
        local: Child,
    },
    /// `export <declaration>` or `export { ... } [from "source"]`
    ExportNamedDeclaration {
        /// Exported declaration
        declaration: Option<Child>,
        /// Export list
        specifiers: Vec<ASTNode>,
        /// Re-export source
        source: Option<Child>,
    },
    /// `{ local as exported }`
    ExportSpecifier {
        /// Local binding
        local: Child,
        /// Name visible to importers
        exported: Child,
    },
    /// `export default <expression>`
    ExportDefaultDeclaration {
        /// Exported value
        declaration: Child,
    },
    /// `export * [as name] from "source"`
    ExportAllDeclaration {
        /// Namespace name
        exported: Option<Child>,
        /// Re-export source
        source: Child,
    },

    // ===== Statements =====
    /// `{ ... }`
    BlockStatement {
        /// Statements in order
        body: Vec<ASTNode>,
    },
    /// Expression in statement position
    ExpressionStatement {
        /// The expression
        expression: Child,
    },
    /// Lone `;` as a loop or branch body
    EmptyStatement,
    /// `if (test) consequent else alternate`
    IfStatement {
        /// Condition
        test: Child,
        /// Taken branch
        consequent: Child,
        /// `else` branch
        alternate: Option<Child>,
    },
    /// `with (object) body`
    WithStatement {
        /// Scope object
        object: Child,
        /// Body
        body: Child,
    },
    /// `try { } catch (param) { } finally { }`
    TryStatement {
        /// Protected block
        block: Child,
        /// `catch` clause
        handler: Option<Child>,
        /// `finally` block
        finalizer: Option<Child>,
    },
    /// `catch (param) { ... }`
    CatchClause {
        /// Bound exception, absent for `catch { }`
        param: Option<Child>,
        /// Handler body
        body: Child,
    },
    /// `switch (discriminant) { ... }`
    SwitchStatement {
        /// Switched-on value
        discriminant: Child,
        /// Cases in order
        cases: Vec<ASTNode>,
    },
    /// `case test:` or `default:` with the statements up to the next case
    SwitchCase {
        /// Case value, `None` for `default`
        test: Option<Child>,
        /// Statements of the case
        consequent: Vec<ASTNode>,
    },
    /// `for (init; test; update) body`
    ForStatement {
        /// Init clause
        init: Option<Child>,
        /// Loop condition
        test: Option<Child>,
        /// Update clause
        update: Option<Child>,
        /// Loop body
        body: Child,
    },
    /// `for (left in right) body`
    ForInStatement {
        /// Iteration binding
        left: Child,
        /// Enumerated object
        right: Child,
        /// Loop body
        body: Child,
    },
    /// `for [await] (left of right) body`
    ForOfStatement {
        /// Iteration binding
        left: Child,
        /// Iterated value
        right: Child,
        /// Loop body
        body: Child,
        /// `for await`
        #[serde(rename = "await")]
        is_await: bool,
    },
    /// `while (test) body`
    WhileStatement {
        /// Loop condition
        test: Child,
        /// Loop body
        body: Child,
    },
    /// `do { body } while test`
    DoWhileStatement {
        /// Loop body
        body: Child,
        /// Loop condition
        test: Child,
    },
    /// `return [argument]`
    ReturnStatement {
        /// Returned value
        argument: Option<Child>,
    },
    /// `throw argument`
    ThrowStatement {
        /// Thrown value
        argument: Child,
    },
    /// `break [label]`
    BreakStatement {
        /// Target label
        label: Option<Child>,
    },
    /// `continue [label]`
    ContinueStatement {
        /// Target label
        label: Option<Child>,
    },
    /// `label: body`
    LabeledStatement {
        /// Label name
        label: Child,
        /// Labeled statement
        body: Child,
    },

    // ===== Expressions =====
    /// `target op= value`
    AssignmentExpression {
        /// Assignment operator
        operator: TokenKind,
        /// Assigned target
        target: Child,
        /// Assigned value
        value: Child,
    },
    /// `test ? consequent : alternate`
    ConditionalExpression {
        /// Condition
        test: Child,
        /// Value when true
        consequent: Child,
        /// Value when false
        alternate: Child,
    },
    /// `left op right`
    BinaryExpression {
        /// Precedence layer
        kind: BinaryKind,
        /// Operator token kind
        operator: TokenKind,
        /// Left operand
        left: Child,
        /// Right operand
        right: Child,
    },
    /// `op argument`
    UnaryExpression {
        /// Operator token kind
        operator: TokenKind,
        /// Operand
        argument: Child,
    },
    /// `++x`, `x--`
    UpdateExpression {
        /// `DoublePlus` or `DoubleDash`
        operator: TokenKind,
        /// Updated identifier
        argument: Child,
        /// Operator precedes the argument
        prefix: bool,
    },
    /// `object.property`, `object[property]`, `object?.property`
    MemberExpression {
        /// Accessed object
        object: Child,
        /// Property name or computed key
        property: Child,
        /// `[...]` access
        computed: bool,
        /// `?.` access
        optional: bool,
    },
    /// `callee(arguments)`
    CallExpression {
        /// Called expression
        callee: Child,
        /// Arguments in order
        arguments: Vec<ASTNode>,
        /// `?.(...)` call
        optional: bool,
    },
    /// ``tag`...` ``
    TaggedTemplateExpression {
        /// Tag function
        tag: Child,
        /// Template literal
        quasi: Child,
    },
    /// `new callee`
    NewExpression {
        /// Constructed expression
        callee: Child,
    },
    /// `await argument`
    AwaitExpression {
        /// Awaited value
        argument: Child,
    },
    /// `(a, b, ...)`
    SequenceExpression {
        /// Expressions in order
        expressions: Vec<ASTNode>,
    },
    /// `(params) => body`
    ArrowFunctionExpression {
        /// Parameter patterns
        params: Vec<ASTNode>,
        /// Block or expression body
        body: Child,
        /// Body is an expression rather than a block
        expression: bool,
        /// Is async function
        #[serde(rename = "async")]
        is_async: bool,
    },
    /// `function [name](...) { ... }` in expression position
    FunctionExpression {
        /// Function name
        id: Option<Child>,
        /// Parameter patterns
        params: Vec<ASTNode>,
        /// Function body
        body: Child,
        /// Is async function
        #[serde(rename = "async")]
        is_async: bool,
        /// Is generator function
        #[serde(rename = "generator")]
        is_generator: bool,
    },
    /// `class [Name] [extends Base] { ... }` in expression position
    ClassExpression {
        /// Class name
        id: Option<Child>,
        /// Superclass expression
        extends: Option<Child>,
        /// Class body
        body: Child,
    },
    /// `{ ... }` literal
    ObjectExpression {
        /// Properties, methods and spreads
        properties: Vec<ASTNode>,
    },
    /// `key: value` or shorthand `key`
    Property {
        /// Property key
        key: Child,
        /// Property value
        value: Child,
        /// Written as `{ key }`
        shorthand: bool,
        /// Written as `[key]: value`
        computed: bool,
    },
    /// `key(...) { ... }` inside an object literal
    PropertyMethod {
        /// Method key
        key: Child,
        /// Parameter patterns
        params: Vec<ASTNode>,
        /// Method body
        body: Child,
        /// Written as `[key](...)`
        computed: bool,
    },
    /// `[ ... ]` literal
    ArrayExpression {
        /// Elements in order
        elements: Vec<ASTNode>,
    },
    /// `...argument` in a literal or call
    SpreadElement {
        /// Spread value
        argument: Child,
    },

    // ===== Patterns =====
    /// `{ ... }` binding pattern
    ObjectPattern {
        /// Property patterns and rest element
        properties: Vec<ASTNode>,
    },
    /// `key: value` inside an object pattern
    PropertyPattern {
        /// Property key
        key: Child,
        /// Binding target
        value: Child,
        /// Written as `{ key }`
        shorthand: bool,
        /// Written as `[key]: value`
        computed: bool,
    },
    /// `[ ... ]` binding pattern
    ArrayPattern {
        /// Element patterns
        elements: Vec<ASTNode>,
    },
    /// `left = right` default binding
    AssignmentPattern {
        /// Binding target
        left: Child,
        /// Default value
        right: Child,
    },
    /// `...argument` in a pattern or parameter list
    RestElement {
        /// Binding target
        argument: Child,
    },

    // ===== Identifiers and literals =====
    /// Plain name
    Identifier {
        /// Name text
        symbol: String,
    },
    /// `#name`
    PrivateIdentifier {
        /// Name text without `#`
        symbol: String,
    },
    /// `42`, `1.5`
    NumericLiteral {
        /// Numeric value
        value: f64,
        /// Source text
        raw: String,
        /// Has a fractional part
        float: bool,
    },
    /// `"..."` or `'...'`
    StringLiteral {
        /// Cooked text between the quotes
        value: String,
        /// Source text including quotes
        raw: String,
    },
    /// `/pattern/flags`
    RegExpLiteral {
        /// Text between the slashes
        pattern: String,
        /// Trailing flags
        flags: Option<String>,
        /// Source text
        raw: String,
    },
    /// `` `...${expr}...` ``
    TemplateLiteral {
        /// Text segments
        quasis: Vec<ASTNode>,
        /// Interpolated expressions
        expressions: Vec<ASTNode>,
    },
    /// One text segment of a template
    TemplateElement {
        /// Exact source text
        raw: String,
        /// Text with escapes resolved
        cooked: String,
        /// Last segment before the closing back quote
        tail: bool,
    },
}

impl NodeKind {
    /// Variant name, e.g. `"BinaryExpression"`
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Program { .. } => "Program",
            NodeKind::BlockComment { .. } => "BlockComment",
            NodeKind::LineComment { .. } => "LineComment",
            NodeKind::VariableDeclaration { .. } => "VariableDeclaration",
            NodeKind::UsingDeclaration { .. } => "UsingDeclaration",
            NodeKind::VariableDeclarator { .. } => "VariableDeclarator",
            NodeKind::FunctionDeclaration { .. } => "FunctionDeclaration",
            NodeKind::ClassDeclaration { .. } => "ClassDeclaration",
            NodeKind::ClassBody { .. } => "ClassBody",
            NodeKind::ClassMethod { .. } => "ClassMethod",
            NodeKind::ClassProperty { .. } => "ClassProperty",
            NodeKind::ImportDeclaration { .. } => "ImportDeclaration",
            NodeKind::ImportSpecifier { .. } => "ImportSpecifier",
            NodeKind::ImportDefaultSpecifier { .. } => "ImportDefaultSpecifier",
            NodeKind::ImportNamespaceSpecifier { .. } => "ImportNamespaceSpecifier",
            NodeKind::ExportNamedDeclaration { .. } => "ExportNamedDeclaration",
            NodeKind::ExportSpecifier { .. } => "ExportSpecifier",
            NodeKind::ExportDefaultDeclaration { .. } => "ExportDefaultDeclaration",
            NodeKind::ExportAllDeclaration { .. } => "ExportAllDeclaration",
            NodeKind::BlockStatement { .. } => "BlockStatement",
            NodeKind::ExpressionStatement { .. } => "ExpressionStatement",
            NodeKind::EmptyStatement => "EmptyStatement",
            NodeKind::IfStatement { .. } => "IfStatement",
            NodeKind::WithStatement { .. } => "WithStatement",
            NodeKind::TryStatement { .. } => "TryStatement",
            NodeKind::CatchClause { .. } => "CatchClause",
            NodeKind::SwitchStatement { .. } => "SwitchStatement",
            NodeKind::SwitchCase { .. } => "SwitchCase",
            NodeKind::ForStatement { .. } => "ForStatement",
            NodeKind::ForInStatement { .. } => "ForInStatement",
            NodeKind::ForOfStatement { .. } => "ForOfStatement",
            NodeKind::WhileStatement { .. } => "WhileStatement",
            NodeKind::DoWhileStatement { .. } => "DoWhileStatement",
            NodeKind::ReturnStatement { .. } => "ReturnStatement",
            NodeKind::ThrowStatement { .. } => "ThrowStatement",
            NodeKind::BreakStatement { .. } => "BreakStatement",
            NodeKind::ContinueStatement { .. } => "ContinueStatement",
            NodeKind::LabeledStatement { .. } => "LabeledStatement",
            NodeKind::AssignmentExpression { .. } => "AssignmentExpression",
            NodeKind::ConditionalExpression { .. } => "ConditionalExpression",
            NodeKind::BinaryExpression { .. } => "BinaryExpression",
            NodeKind::UnaryExpression { .. } => "UnaryExpression",
            NodeKind::UpdateExpression { .. } => "UpdateExpression",
            NodeKind::MemberExpression { .. } => "MemberExpression",
            NodeKind::CallExpression { .. } => "CallExpression",
            NodeKind::TaggedTemplateExpression { .. } => "TaggedTemplateExpression",
            NodeKind::NewExpression { .. } => "NewExpression",
            NodeKind::AwaitExpression { .. } => "AwaitExpression",
            NodeKind::SequenceExpression { .. } => "SequenceExpression",
            NodeKind::ArrowFunctionExpression { .. } => "ArrowFunctionExpression",
            NodeKind::FunctionExpression { .. } => "FunctionExpression",
            NodeKind::ClassExpression { .. } => "ClassExpression",
            NodeKind::ObjectExpression { .. } => "ObjectExpression",
            NodeKind::Property { .. } => "Property",
            NodeKind::PropertyMethod { .. } => "PropertyMethod",
            NodeKind::ArrayExpression { .. } => "ArrayExpression",
            NodeKind::SpreadElement { .. } => "SpreadElement",
            NodeKind::ObjectPattern { .. } => "ObjectPattern",
            NodeKind::PropertyPattern { .. } => "PropertyPattern",
            NodeKind::ArrayPattern { .. } => "ArrayPattern",
            NodeKind::AssignmentPattern { .. } => "AssignmentPattern",
            NodeKind::RestElement { .. } => "RestElement",
            NodeKind::Identifier { .. } => "Identifier",
            NodeKind::PrivateIdentifier { .. } => "PrivateIdentifier",
            NodeKind::NumericLiteral { .. } => "NumericLiteral",
            NodeKind::StringLiteral { .. } => "StringLiteral",
            NodeKind::RegExpLiteral { .. } => "RegExpLiteral",
            NodeKind::TemplateLiteral { .. } => "TemplateLiteral",
            NodeKind::TemplateElement { .. } => "TemplateElement",
        }
    }

    /// True for `Identifier` and `PrivateIdentifier`
    pub fn is_identifier(&self) -> bool {
        matches!(
            self,
            NodeKind::Identifier { .. } | NodeKind::PrivateIdentifier { .. }
        )
    }
}
