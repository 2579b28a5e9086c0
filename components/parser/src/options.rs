//! Parse configuration and per-parse properties

use crate::ast::{ASTNode, SourceType};
use serde::{Deserialize, Serialize};

/// Caller-supplied parse configuration
///
/// # Examples
///
/// ```
/// use parser::{ParseOptions, SourceType};
///
/// let options: ParseOptions = serde_json::from_str(r#"{"source_type":"esm"}"#).unwrap();
/// assert_eq!(options.source_type, SourceType::Esm);
/// assert_eq!(ParseOptions::default().source_type, SourceType::Cjs);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Classification the parse starts from
    pub source_type: SourceType,
}

/// Properties accumulated while parsing one program.
///
/// `source_type` only ever moves from `cjs` to `esm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ProgramProperties {
    /// Module classification
    pub source_type: SourceType,
}

impl From<&ParseOptions> for ProgramProperties {
    fn from(options: &ParseOptions) -> Self {
        Self {
            source_type: options.source_type,
        }
    }
}

/// Result of [`parse`](crate::parse): the `Program` node and its properties
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutput {
    /// `Program` node holding every top-level statement
    pub ast: ASTNode,
    /// Properties discovered while parsing
    pub properties: ProgramProperties,
}
