//! Lexing
//!
//!     ONF has no tokenizer-friendly delimiters. Instead it is read as lines, and the shape of
//!     a line (its indentation, a leading number, a `label:` prefix, an arrow) decides what
//!     it is. This module holds everything that looks at raw text without building records.
//!
//! The Lexing Steps
//!
//!     1. Section splitting. See [sections](sections).
//!        The document is cut at the `-` rule that follows each `=` rule. Each piece is a
//!        section: a body of sentence chunks and, after the `=` rule, the chain index.
//!
//!     2. Chunking. See [chunking](chunking).
//!        A section body is cut at blank lines. Each chunk is classified by its leading label
//!        into a [ChunkKind](chunking::ChunkKind).
//!
//!     3. Line classification. See [line_classification](line_classification).
//!        Inside the "Leaves:" chunk and the chain index, each line is classified on its own:
//!        token header, attribute header, argument line, mention line or continuation.
//!
//!     4. Continuations. See [cursor](cursor).
//!        Whether a line continues the previous unit depends on the line that follows, so the
//!        parsers walk lines with a [LineCursor](cursor::LineCursor) that can peek before
//!        consuming.
//!
//!     At this point lexing is complete and the parsing stage builds records.

pub mod chunking;
pub mod cursor;
pub mod line_classification;
pub mod sections;

pub use chunking::{split_blocks, split_chunks, Chunk, ChunkKind};
pub use cursor::LineCursor;
pub use line_classification::{classify_leaf_line, LeafLine};
pub use sections::{
    split_body_and_tail, split_sections, RawSection, SECTION_RULE, SENTENCE_RULE,
};
