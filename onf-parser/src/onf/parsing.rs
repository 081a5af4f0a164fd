//! Parsing
//!
//!     Builds records from the pieces lexing produced. See [lexing](crate::onf::lexing) for
//!     how the text is cut up.
//!
//! Parsing A Section
//!
//!     1. The body and the chain index are separated at the `=` rule.
//!
//!     2. Each body chunk becomes an event: a dashed rule is a boundary, a field chunk goes
//!        through its field parser. See [fields](fields), and [leaves](leaves) for the token
//!        block, whose attribute blocks are handled in [attributes](attributes).
//!
//!     3. The events are folded into sentences. See [assembler](assembler).
//!
//!     4. The chain index is parsed into chains. See [chains](chains).
//!
//!     A document is parsed by splitting it into sections and parsing each in order. Any
//!     failure aborts the whole document with a [ParseError] carrying the offending text.
//!
//! Leniency
//!
//!     Only the structure is checked. Token ids, ranges and chain references are kept as
//!     written and never cross-checked against the tokens of the sentence.

pub mod assembler;
pub mod attributes;
pub mod chains;
pub mod error;
pub mod fields;
pub mod leaves;
pub mod section;

pub use assembler::{assemble, Assembler, AssemblyEvent, SentenceField};
pub use attributes::{parse_attribute, Attribute, AttributeKind};
pub use chains::{parse_chain_header, parse_chains, parse_mention};
pub use error::ParseError;
pub use fields::{
    parse_plain_sentence, parse_speaker_information, parse_tree, parse_treebanked_sentence,
};
pub use leaves::parse_leaves;
pub use section::{parse_document_text, parse_section_parts, parse_section_text};
