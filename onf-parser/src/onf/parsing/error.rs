//! Parse errors
//!
//! Every failure carries the raw text that caused it. There is no recovery: the first error
//! aborts the whole document.

use super::attributes::AttributeKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A body chunk starts with none of the known labels
    #[error("Unrecognized chunk: {chunk}")]
    UnrecognizedChunk { chunk: String },

    /// An attribute block with a label other than prop, coref, name or sense
    #[error("Unrecognized attribute '{label}': {line}")]
    UnrecognizedAttribute { label: String, line: String },

    /// The mandatory content of an attribute does not match its pattern
    #[error("Malformed {kind} attribute ({reason}): {text}")]
    MalformedAttributeContent {
        kind: AttributeKind,
        reason: &'static str,
        text: String,
    },

    /// A chain mention that is not `sentence.start-end text`
    #[error("Malformed mention: {line}")]
    MalformedMention { line: String },

    /// A chain header that is not `<label> <id> (<TYPE>)`
    #[error("Malformed chain header: {header}")]
    MalformedChainHeader { header: String },

    /// A leaves block line that is neither a token header nor an attribute header
    #[error("Expected a token header or an attribute, found: {line}")]
    UnexpectedLeafLine { line: String },

    /// An attribute block that comes before the first token header
    #[error("Attribute before any token header: {line}")]
    AttributeWithoutLeaf { line: String },
}

impl ParseError {
    pub(crate) fn malformed(kind: AttributeKind, reason: &'static str, text: &str) -> Self {
        ParseError::MalformedAttributeContent {
            kind,
            reason,
            text: text.to_string(),
        }
    }
}
