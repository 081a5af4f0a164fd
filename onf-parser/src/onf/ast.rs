//! Record definitions for parsed ONF documents
//!
//!     This module holds the typed records the parser produces. They are plain data: every
//!     record is built once, fully, by the parser stage responsible for it and never mutated
//!     afterwards. There is no location tracking; ONF is a fixed-width interchange format and
//!     consumers address content by sentence and token ids, not by byte offsets.
//!
//! Sections and Sentences
//!
//!     An ONF file holds one or more sections. A section is a run of sentence blocks (each
//!     separated by a dashed rule) optionally followed, after a rule of equal signs, by the
//!     coreference chain index for that section.
//!
//!     See [Section](elements::Section) and [Sentence](elements::Sentence).
//!
//! Leaves
//!
//!     The "Leaves:" block of a sentence lists every token with its id, optionally followed by
//!     indented attribute blocks (prop, coref, name, sense). Each token becomes a
//!     [Leaf](elements::Leaf).
//!
//! Soft References
//!
//!     A leaf's [Coref](elements::Coref) names its chain by id. That id is a plain string key
//!     and is never resolved or checked against the section's chain list; dangling references
//!     are valid output. Use [Section::chain](elements::Section::chain) to look one up.

pub mod elements;

pub use elements::{
    Chain, Coref, Leaf, Mention, Name, PlainSentence, Prop, PropArg, Section, Sense, Sentence,
    SpeakerInformation, TokenSpan, Tree, TreebankedSentence,
};
