//! Element records
//!
//!     One file per record family:
//!
//!         - [span]: inclusive token ranges shared by corefs, names and mentions
//!         - [sentence]: the sentence record and its sentence-level fields
//!         - [leaf]: token records and their attribute annotations
//!         - [chain]: coreference chains and mentions
//!         - [section]: the top level record

pub mod chain;
pub mod leaf;
pub mod section;
pub mod sentence;
pub mod span;

pub use chain::{Chain, Mention};
pub use leaf::{Coref, Leaf, Name, Prop, PropArg, Sense};
pub use section::Section;
pub use sentence::{PlainSentence, Sentence, SpeakerInformation, Tree, TreebankedSentence};
pub use span::TokenSpan;
