//! OntoNotes Normal Form
//!
//!     The ONF format: one file per document, made of sections, each a run of sentences
//!     (plain text, treebanked text, speaker, parse tree and annotated leaves) followed by an
//!     index of coreference chains.
//!
//!     - [ast]: the records
//!     - [lexing]: cutting text into sections, chunks and classified lines
//!     - [parsing]: building records from those pieces
//!     - [transforms]: the stages as composable pipelines
//!     - [loader]: reading files and directories
//!     - [formats]: JSON and YAML output
//!     - [testing]: sample files and fluent assertions

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod testing;
pub mod transforms;
