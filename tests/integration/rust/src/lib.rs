//! Integration test suite for the Dunes lexer/parser toolkit
//!
//! The tests in `tests/` drive several components together across their
//! public boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use core_types;
    pub use engine;
    pub use interpreter;
    pub use parser;
}
