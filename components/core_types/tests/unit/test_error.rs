//! Unit tests for the per-stage error types

use core_types::{Error, EvalError, LexError, ParseError, SourcePosition, Span};

#[cfg(test)]
mod lex_error_tests {
    use super::*;

    #[test]
    fn test_lex_error_position() {
        let position = SourcePosition {
            line: 1,
            column: 5,
            offset: 4,
        };
        let err = LexError::UnterminatedString { position };
        assert_eq!(err.position(), position);
        assert_eq!(
            err.to_string(),
            "Unterminated string literal starting at 1:5"
        );
    }

    #[test]
    fn test_escape_at_end_message() {
        let err = LexError::EscapeAtEnd {
            position: SourcePosition::START,
        };
        assert!(err.to_string().starts_with("Expected character after escape"));
    }
}

#[cfg(test)]
mod parse_error_tests {
    use super::*;

    #[test]
    fn test_parse_error_without_location() {
        let err = ParseError::new("Expected expression");
        assert_eq!(err.span, None);
        assert_eq!(err.found, None);
        assert_eq!(err.to_string(), "Expected expression");
    }

    #[test]
    fn test_parse_error_builder() {
        let err = ParseError::new("Expected Equals")
            .with_span(Span::empty_at(SourcePosition::START))
            .with_found(";");
        assert_eq!(err.found.as_deref(), Some(";"));
        assert!(err.to_string().ends_with("at 1:1"));
    }
}

#[cfg(test)]
mod umbrella_error_tests {
    use super::*;

    #[test]
    fn test_question_mark_conversion() {
        fn fails() -> Result<(), Error> {
            Err(EvalError::UnknownIdentifier {
                name: "y".to_string(),
            })?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert!(matches!(err, Error::Eval(EvalError::UnknownIdentifier { .. })));
        assert_eq!(err.to_string(), "Evaluation error: `y` is not defined");
    }
}
