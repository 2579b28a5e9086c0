//! Contract tests for parser API
//!
//! These tests verify the parser component implements its contract correctly.

use core_types::{Error, LexError};
use parser::{
    parse, parse_with, tokenize, ASTNode, NodeKind, ParseOptions, SourceType, TokenKind,
    VariableKind,
};
use proptest::prelude::*;

fn body(source: &str) -> Vec<ASTNode> {
    match parse(source).unwrap().ast.kind {
        NodeKind::Program { body } => body,
        other => panic!("expected program, got {:?}", other),
    }
}

fn first(source: &str) -> NodeKind {
    body(source).remove(0).kind
}

fn parse_error(source: &str) -> String {
    match parse(source).unwrap_err() {
        Error::Parse(err) => err.message,
        other => panic!("expected parse error, got {:?}", other),
    }
}

// =============================================================================
// Lexer Contract Tests
// =============================================================================

#[test]
fn test_tokenize_returns_every_character() {
    let tokens = tokenize("let x = 42;").unwrap();
    let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(joined, "let x = 42;");
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Semicolon));
}

#[test]
fn test_tokenize_unterminated_string_fails() {
    let err = tokenize("x = 'abc").unwrap_err();
    assert!(matches!(err, LexError::UnterminatedString { .. }));
    assert_eq!(err.position().offset, 4);
}

#[test]
fn test_parse_surfaces_lex_error() {
    assert!(matches!(parse("\"abc\\"), Err(Error::Lex(LexError::EscapeAtEnd { .. }))));
}

// =============================================================================
// Program Contract Tests
// =============================================================================

#[test]
fn test_empty_source_is_empty_program() {
    let output = parse("  ;; \n").unwrap();
    assert!(matches!(output.ast.kind, NodeKind::Program { ref body } if body.is_empty()));
    assert!(output.ast.span.is_empty());
}

#[test]
fn test_program_span_covers_statements() {
    let output = parse("  a;\n b  ").unwrap();
    assert_eq!(output.ast.span.start.offset, 2);
    assert_eq!(output.ast.span.end.offset, 7);
}

#[test]
fn test_statements_in_order() {
    let names: Vec<&str> = body("let a = 1; a + 2; if (a) {}")
        .iter()
        .map(|n| n.kind.name())
        .collect();
    assert_eq!(
        names,
        vec!["VariableDeclaration", "ExpressionStatement", "IfStatement"]
    );
}

#[test]
fn test_script_stays_cjs() {
    let output = parse("var importance = 1").unwrap();
    assert_eq!(output.properties.source_type, SourceType::Cjs);
}

#[test]
fn test_import_marks_module() {
    let source = "import x, { y as z } from 'mod'";
    assert_eq!(parse(source).unwrap().properties.source_type, SourceType::Esm);
    let NodeKind::ImportDeclaration { specifiers, .. } = first(source) else {
        panic!("expected import");
    };
    let names: Vec<&str> = specifiers.iter().map(|s| s.kind.name()).collect();
    assert_eq!(names, vec!["ImportDefaultSpecifier", "ImportSpecifier"]);
}

#[test]
fn test_esm_option_is_kept() {
    let options = ParseOptions {
        source_type: SourceType::Esm,
    };
    let output = parse_with("1", &options).unwrap();
    assert_eq!(output.properties.source_type, SourceType::Esm);
}

#[test]
fn test_ast_serializes_with_type_tags() {
    let output = parse("x").unwrap();
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["ast"]["type"], "Program");
    assert_eq!(json["ast"]["body"][0]["type"], "ExpressionStatement");
    assert_eq!(json["ast"]["body"][0]["expression"]["symbol"], "x");
    assert_eq!(json["properties"]["source_type"], "cjs");
}

// =============================================================================
// Declaration Contract Tests
// =============================================================================

#[test]
fn test_declarators_with_and_without_init() {
    let NodeKind::VariableDeclaration { kind, declarators } = first("let a = 1, b") else {
        panic!("expected declaration");
    };
    assert_eq!(kind, VariableKind::Let);
    assert_eq!(declarators.len(), 2);
    assert!(matches!(
        declarators[1].kind,
        NodeKind::VariableDeclarator { init: None, .. }
    ));
}

#[test]
fn test_destructuring_declaration() {
    let NodeKind::VariableDeclaration { declarators, .. } =
        first("const { a, b: [c, ...d], e = 1 } = obj")
    else {
        panic!("expected declaration");
    };
    let NodeKind::VariableDeclarator { id, .. } = &declarators[0].kind else {
        panic!("expected declarator");
    };
    let NodeKind::ObjectPattern { properties } = &id.kind else {
        panic!("expected object pattern");
    };
    assert_eq!(properties.len(), 3);
    assert!(matches!(
        &properties[2].kind,
        NodeKind::PropertyPattern { shorthand: true, value, .. }
            if value.kind.name() == "AssignmentPattern"
    ));
}

#[test]
fn test_declaration_without_equals_fails() {
    assert_eq!(
        parse_error("let x 5"),
        "Expected Equals after identifier in Let declaration"
    );
}

#[test]
fn test_declaration_with_missing_value_fails() {
    assert_eq!(parse_error("let x ="), "Expected expression");
}

#[test]
fn test_function_and_class_declarations() {
    let names: Vec<&str> = body(
        "async function* f(a, b = 2, ...rest) { return a }\n\
         class A extends B { x = 1; #y; m(a) { } }",
    )
    .iter()
    .map(|n| n.kind.name())
    .collect();
    assert_eq!(names, vec!["FunctionDeclaration", "ClassDeclaration"]);
}

#[test]
fn test_await_using_declaration() {
    assert!(matches!(
        first("await using res = open()"),
        NodeKind::UsingDeclaration { is_await: true, .. }
    ));
    assert!(matches!(
        first("using res = open()"),
        NodeKind::UsingDeclaration { is_await: false, .. }
    ));
}

// =============================================================================
// Statement Contract Tests
// =============================================================================

#[test]
fn test_return_without_argument() {
    let NodeKind::FunctionDeclaration { body: block, .. } = first("function f() { return; }")
    else {
        panic!("expected function");
    };
    let NodeKind::BlockStatement { body } = block.kind else {
        panic!("expected block");
    };
    assert!(matches!(body[0].kind, NodeKind::ReturnStatement { argument: None }));
}

#[test]
fn test_label_and_ternary_are_distinguished() {
    assert_eq!(first("outer: for (;;) { break outer }").name(), "LabeledStatement");
    let NodeKind::ExpressionStatement { expression } = first("a ? b : c") else {
        panic!("expected expression statement");
    };
    assert_eq!(expression.kind.name(), "ConditionalExpression");
}

#[test]
fn test_switch_cases() {
    let NodeKind::SwitchStatement { cases, .. } =
        first("switch (x) { case 1: a; b; case 2: default: c }")
    else {
        panic!("expected switch");
    };
    assert_eq!(cases.len(), 3);
    let counts: Vec<usize> = cases
        .iter()
        .map(|c| match &c.kind {
            NodeKind::SwitchCase { consequent, .. } => consequent.len(),
            _ => usize::MAX,
        })
        .collect();
    assert_eq!(counts, vec![2, 0, 1]);
    assert!(matches!(cases[2].kind, NodeKind::SwitchCase { test: None, .. }));
}

#[test]
fn test_try_catch_without_binding() {
    let NodeKind::TryStatement { handler, finalizer, .. } = first("try { a } catch { b }") else {
        panic!("expected try");
    };
    assert!(finalizer.is_none());
    assert!(matches!(
        handler.map(|h| h.kind),
        Some(NodeKind::CatchClause { param: None, .. })
    ));
}

#[test]
fn test_try_requires_handler_or_finalizer() {
    assert_eq!(
        parse_error("try { a }"),
        "Expected catch or finally after try block"
    );
}

#[test]
fn test_for_loop_forms() {
    assert_eq!(first("for (let i = 0; i < 3; i++) {}").name(), "ForStatement");
    assert_eq!(first("for (;;) {}").name(), "ForStatement");
    assert_eq!(first("for (const k in obj) {}").name(), "ForInStatement");
    assert!(matches!(
        first("for await (const v of it) {}"),
        NodeKind::ForOfStatement { is_await: true, .. }
    ));
}

#[test]
fn test_if_else_chain() {
    let NodeKind::IfStatement { alternate, .. } = first("if (a) b; else if (c) d; else e") else {
        panic!("expected if");
    };
    let alternate = alternate.map(|a| a.kind);
    assert!(matches!(
        alternate,
        Some(NodeKind::IfStatement { alternate: Some(_), .. })
    ));
}

#[test]
fn test_comments_become_nodes() {
    let nodes = body("/* block */ a // line\nb");
    let NodeKind::BlockComment { content } = &nodes[0].kind else {
        panic!("expected block comment");
    };
    assert_eq!(content, " block ");
    assert_eq!(nodes.len(), 4);
    let NodeKind::LineComment { content } = &nodes[2].kind else {
        panic!("expected line comment");
    };
    assert_eq!(content, " line");
}

// =============================================================================
// Module Contract Tests
// =============================================================================

#[test]
fn test_export_list_local_then_exported() {
    let NodeKind::ExportNamedDeclaration { specifiers, source, .. } =
        first("export { a as default, b } from './m'")
    else {
        panic!("expected export");
    };
    assert!(source.is_some());
    let NodeKind::ExportSpecifier { local, exported } = &specifiers[0].kind else {
        panic!("expected export specifier");
    };
    assert!(matches!(&local.kind, NodeKind::Identifier { symbol } if symbol == "a"));
    assert!(matches!(&exported.kind, NodeKind::Identifier { symbol } if symbol == "default"));
}

#[test]
fn test_export_forms() {
    assert_eq!(first("export default 1 + 2").name(), "ExportDefaultDeclaration");
    assert_eq!(first("export * as ns from 'm'").name(), "ExportAllDeclaration");
    assert!(matches!(
        first("export const a = 1"),
        NodeKind::ExportNamedDeclaration { declaration: Some(_), .. }
    ));
}

#[test]
fn test_side_effect_import() {
    assert!(matches!(
        first("import 'polyfill'"),
        NodeKind::ImportDeclaration { ref specifiers, .. } if specifiers.is_empty()
    ));
}

// =============================================================================
// Expression Contract Tests
// =============================================================================

fn expression(source: &str) -> NodeKind {
    match first(source) {
        NodeKind::ExpressionStatement { expression } => expression.kind,
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_parenthesized_arrow_function() {
    let NodeKind::ArrowFunctionExpression { params, .. } = expression("(a) => a") else {
        panic!("expected arrow function");
    };
    assert_eq!(params.len(), 1);
}

#[test]
fn test_parenthesized_sequence() {
    let NodeKind::SequenceExpression { expressions } = expression("(a, b)") else {
        panic!("expected sequence");
    };
    assert_eq!(expressions.len(), 2);
}

#[test]
fn test_additive_chain_nests_right() {
    let NodeKind::BinaryExpression { left, right, .. } = expression("1 + 2 + 3") else {
        panic!("expected binary expression");
    };
    assert_eq!(left.kind.name(), "NumericLiteral");
    assert_eq!(right.kind.name(), "BinaryExpression");
}

#[test]
fn test_missing_expression_reports_location() {
    let err = match parse("a = )").unwrap_err() {
        Error::Parse(err) => err,
        other => panic!("expected parse error, got {:?}", other),
    };
    assert_eq!(err.message, "Expected expression");
    assert_eq!(err.found.as_deref(), Some(")"));
    assert_eq!(err.span.map(|s| s.start.offset), Some(4));
}

proptest! {
    #[test]
    fn prop_tokens_are_contiguous(source in "[a-z0-9 +*/=(){};.,`$<>!?:#\\[\\]\n-]{0,60}") {
        let tokens = tokenize(&source).unwrap();
        let mut expected = 0;
        for token in &tokens {
            prop_assert_eq!(token.span.start.offset, expected);
            expected = token.span.end.offset;
        }
        prop_assert_eq!(expected, source.chars().count());
    }

    #[test]
    fn prop_relexing_is_stable(source in "[a-z0-9 +*=(){};.,<>!?:\\[\\]-]{0,60}") {
        let tokens = tokenize(&source).unwrap();
        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        let again = tokenize(&joined).unwrap();
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        let kinds_again: Vec<TokenKind> = again.iter().map(|t| t.kind).collect();
        prop_assert_eq!(kinds, kinds_again);
    }

    #[test]
    fn prop_parse_terminates(source in "[a-z0-9 +*=(){};.,<>!?:\\[\\]-]{0,24}") {
        // Either outcome is fine; the parse must return.
        let _ = parse(&source);
    }
}
