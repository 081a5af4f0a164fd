//! Chunking
//!
//!     A section body is a sequence of chunks separated by blank lines. A chunk's first line
//!     says what it is:
//!
//!         ------------------------------------------------ ... (120 dashes)
//!
//!         Plain sentence:
//!         ---------------
//!             The dog barked.
//!
//!         Leaves:
//!         -------
//!             0   The
//!             1   dog
//!
//!     Classification checks a fixed, ordered list of literal prefixes and the first match
//!     wins. A chunk matching none of them is not classified here; the parser reports it.

use super::line_classification::is_blank_line;
use super::sections::SENTENCE_RULE;
use std::fmt;

/// The kinds of chunk a section body may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkKind {
    /// A dashed rule: the boundary between two sentences
    SentenceBreak,
    PlainSentence,
    TreebankedSentence,
    SpeakerInformation,
    Tree,
    Leaves,
}

impl ChunkKind {
    /// Kinds in the order their prefixes are tried.
    pub const ALL: [ChunkKind; 6] = [
        ChunkKind::SentenceBreak,
        ChunkKind::PlainSentence,
        ChunkKind::TreebankedSentence,
        ChunkKind::SpeakerInformation,
        ChunkKind::Tree,
        ChunkKind::Leaves,
    ];

    /// The literal the chunk starts with.
    pub fn prefix(&self) -> &'static str {
        match self {
            ChunkKind::SentenceBreak => SENTENCE_RULE.as_str(),
            ChunkKind::PlainSentence => "Plain sentence:",
            ChunkKind::TreebankedSentence => "Treebanked sentence:",
            ChunkKind::SpeakerInformation => "Speaker information:",
            ChunkKind::Tree => "Tree:",
            ChunkKind::Leaves => "Leaves:",
        }
    }

    pub fn classify(chunk: &str) -> Option<ChunkKind> {
        ChunkKind::ALL
            .into_iter()
            .find(|kind| chunk.starts_with(kind.prefix()))
    }
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChunkKind::SentenceBreak => "SENTENCE_BREAK",
            ChunkKind::PlainSentence => "PLAIN_SENTENCE",
            ChunkKind::TreebankedSentence => "TREEBANKED_SENTENCE",
            ChunkKind::SpeakerInformation => "SPEAKER_INFORMATION",
            ChunkKind::Tree => "TREE",
            ChunkKind::Leaves => "LEAVES",
        };
        write!(f, "{}", name)
    }
}

/// One blank-line delimited block of a section body, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub text: &'a str,
    /// `None` when no prefix matched
    pub kind: Option<ChunkKind>,
}

impl<'a> Chunk<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            kind: ChunkKind::classify(text),
        }
    }
}

/// Cut a body into classified chunks.
pub fn split_chunks(body: &str) -> Vec<Chunk<'_>> {
    split_blocks(body).into_iter().map(Chunk::new).collect()
}

/// Cut text into trimmed blocks at runs of blank lines. Blank runs never produce empty blocks.
pub fn split_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if is_blank_line(line) {
            if let Some(block_start) = start.take() {
                blocks.push(text[block_start..end].trim());
            }
        } else {
            if start.is_none() {
                start = Some(offset);
            }
            end = offset + line.len();
        }
        offset += line.len();
    }
    if let Some(block_start) = start {
        blocks.push(text[block_start..end].trim());
    }

    blocks
}
