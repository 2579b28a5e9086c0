//! Unit tests for SourcePosition and Span

use core_types::{SourcePosition, Span};

#[cfg(test)]
mod source_position_tests {
    use super::*;

    #[test]
    fn test_source_position_start() {
        let pos = SourcePosition::START;
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.offset, 0);
        assert_eq!(SourcePosition::default(), pos);
    }

    #[test]
    fn test_source_position_copy_semantics() {
        let pos = SourcePosition {
            line: 4,
            column: 2,
            offset: 30,
        };
        let copy = pos;
        assert_eq!(pos, copy);
    }
}

#[cfg(test)]
mod span_tests {
    use super::*;

    fn pos(offset: usize) -> SourcePosition {
        SourcePosition {
            line: 1,
            column: offset as u32 + 1,
            offset,
        }
    }

    #[test]
    fn test_span_length() {
        let span = Span::new(pos(3), pos(8));
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_inverted_length_saturates() {
        let span = Span::new(pos(8), pos(3));
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_span_to_is_commutative() {
        let a = Span::new(pos(0), pos(1));
        let b = Span::new(pos(10), pos(12));
        assert_eq!(a.to(b), b.to(a));
        assert_eq!(a.to(b).len(), 12);
    }
}
