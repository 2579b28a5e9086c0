//! Lexer/Parser Integration Tests
//!
//! Drives the JavaScript rule through the generic engine lexer and checks
//! that the grammar sees the tokens the engine produced.

use core_types::{LexError, SourcePosition};
use engine::{Lexer, TokenTag};
use parser::{parse, tokenize, JsLexRule, NodeKind, TokenKind};
use proptest::prelude::*;

#[test]
fn test_streaming_lexer_matches_tokenize() {
    let source = "const s = `a${b}c`; // done";
    let streamed: Vec<_> = Lexer::new(JsLexRule::new(), source)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(streamed, tokenize(source).unwrap());
}

#[test]
fn test_streaming_lexer_peek_does_not_consume() {
    let mut lexer = Lexer::new(JsLexRule::new(), "a => b");
    assert_eq!(lexer.peek(2).unwrap().map(|t| t.kind), Some(TokenKind::Arrow));
    assert_eq!(
        lexer.next_token().unwrap().map(|t| t.kind),
        Some(TokenKind::Identifier)
    );
    assert_eq!(lexer.peek(0).unwrap().map(|t| t.kind), Some(TokenKind::Space));
    assert!(!lexer.is_finished());
}

#[test]
fn test_streaming_lexer_stops_after_error() {
    let mut lexer = Lexer::new(JsLexRule::new(), "x 'y");
    let results: Vec<_> = lexer.by_ref().collect();
    assert_eq!(results.len(), 3);
    assert!(matches!(
        results[2],
        Err(LexError::UnterminatedString { .. })
    ));
    assert!(lexer.next().is_none());
}

#[test]
fn test_token_positions_track_lines() {
    let tokens = tokenize("a\n  bb").unwrap();
    let bb = tokens.iter().find(|t| t.text == "bb").unwrap();
    assert_eq!(
        bb.span.start,
        SourcePosition {
            line: 2,
            column: 3,
            offset: 4
        }
    );
}

#[test]
fn test_quotes_inside_comments_and_templates() {
    let tokens = tokenize("/* it's */ `don't` // 'x").unwrap();
    assert!(tokens.iter().all(|t| t.kind != TokenKind::String));
    let output = parse("/* it's */ `don't` // 'x").unwrap();
    let NodeKind::Program { body } = output.ast.kind else {
        panic!("expected program");
    };
    let names: Vec<&str> = body.iter().map(|n| n.kind.name()).collect();
    assert_eq!(names, vec!["BlockComment", "ExpressionStatement", "LineComment"]);
}

#[test]
fn test_nested_template_interpolation() {
    let output = parse("`a${ `b${ {x: 1}.x }` }c`").unwrap();
    let NodeKind::Program { body } = output.ast.kind else {
        panic!("expected program");
    };
    let NodeKind::ExpressionStatement { expression } = &body[0].kind else {
        panic!("expected expression statement");
    };
    let NodeKind::TemplateLiteral { quasis, expressions } = &expression.kind else {
        panic!("expected template literal");
    };
    assert_eq!(quasis.len(), 2);
    assert_eq!(expressions[0].kind.name(), "TemplateLiteral");
}

#[test]
fn test_operator_tags() {
    let tokens = tokenize("a += b && c").unwrap();
    let operators: Vec<TokenKind> = tokens
        .iter()
        .filter(|t| t.has_tag(TokenTag::Operator))
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        operators,
        vec![TokenKind::PlusEquals, TokenKind::DoubleAmpersand]
    );
}

#[test]
fn test_parse_error_points_into_source() {
    let err = match parse("let a = 1;\nlet b 2") {
        Err(core_types::Error::Parse(err)) => err,
        other => panic!("expected parse error, got {:?}", other),
    };
    let span = err.span.unwrap();
    assert_eq!(span.start.line, 2);
    assert_eq!(span.start.column, 7);
    assert_eq!(err.found.as_deref(), Some("2"));
    assert!(err.to_string().ends_with("at 2:7"));
}

proptest! {
    #[test]
    fn prop_streaming_and_batch_agree(source in "[a-z0-9 +=(){};`$\\[\\]\n]{0,50}") {
        let streamed: Result<Vec<_>, _> = Lexer::new(JsLexRule::new(), &source).collect();
        prop_assert_eq!(streamed, tokenize(&source));
    }
}
