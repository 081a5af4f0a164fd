//! # onf
//!
//! A parser for OntoNotes Normal Form (`.onf`) files.
//!
//! An ONF file lays out, for every sentence of a document, its plain text, its treebanked
//! tokens, the speaker, the parse tree and a "leaves" block where each token carries its
//! predicate-argument (prop), coreference, named-entity and word-sense annotations. Each
//! section ends with the coreference chains that tie mentions across sentences together.
//!
//! ```rust,ignore
//! use onf_parser::parse_document_text;
//!
//! let sections = parse_document_text(&source)?;
//! for section in &sections {
//!     for sentence in &section.sentences {
//!         println!("{}", sentence);
//!     }
//! }
//! ```
//!
//! File Layout
//!
//!     src/onf
//!       ├── ast          Records (Section, Sentence, Leaf, Chain, ...)
//!       ├── lexing       Section splitting, chunking, line classification
//!       ├── parsing      Field, leaf, attribute and chain parsers, sentence assembly
//!       ├── transforms   Composable pipeline stages
//!       ├── loader       Files and directories
//!       ├── formats      JSON / YAML output
//!       └── testing      Samples and fluent assertions
//!
//! For testing guidelines, see the [testing module](onf::testing).

pub mod onf;

pub use onf::ast::Section;
pub use onf::parsing::{parse_document_text, parse_section_text, ParseError};
