//! Sentence-level field parsers
//!
//! Each parser takes one classified chunk and drops its label line and the dashed underline
//! below it. None of them can fail.

use crate::onf::ast::{PlainSentence, SpeakerInformation, Tree, TreebankedSentence};

/// Lines below the label and its underline.
fn content_lines(chunk: &str) -> impl Iterator<Item = &str> {
    chunk.lines().skip(2)
}

fn joined_content(chunk: &str) -> String {
    content_lines(chunk)
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn parse_plain_sentence(chunk: &str) -> PlainSentence {
    PlainSentence::new(joined_content(chunk))
}

pub fn parse_treebanked_sentence(chunk: &str) -> TreebankedSentence {
    TreebankedSentence::from_string(joined_content(chunk))
}

/// Reads `name:`, `start time:` and `stop time:` lines. Anything else is ignored, and an empty
/// value leaves its field unset.
pub fn parse_speaker_information(chunk: &str) -> SpeakerInformation {
    let mut info = SpeakerInformation::default();
    for line in content_lines(chunk).map(str::trim) {
        let (slot, value) = if let Some(value) = line.strip_prefix("name:") {
            (&mut info.name, value)
        } else if let Some(value) = line.strip_prefix("start time:") {
            (&mut info.start_time, value)
        } else if let Some(value) = line.strip_prefix("stop time:") {
            (&mut info.stop_time, value)
        } else {
            continue;
        };
        let value = value.trim();
        if !value.is_empty() {
            *slot = Some(value.to_string());
        }
    }
    info
}

/// Everything after the first run of four spaces, verbatim.
///
/// A tree chunk with no indentation at all falls back to the trimmed text below the label.
pub fn parse_tree(chunk: &str) -> Tree {
    match chunk.find("    ") {
        Some(begin) => Tree::new(&chunk[begin + 4..]),
        None => Tree::new(joined_content(chunk).trim()),
    }
}
