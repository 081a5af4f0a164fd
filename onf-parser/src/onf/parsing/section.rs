//! Section and document parsing
//!
//!     Chunks of the body are dispatched on their [ChunkKind] to the field parsers and turned
//!     into assembly events; the tail, when present, goes to the chain parser.

use super::assembler::{assemble, AssemblyEvent, SentenceField};
use super::chains::parse_chains;
use super::error::ParseError;
use super::fields::{
    parse_plain_sentence, parse_speaker_information, parse_tree, parse_treebanked_sentence,
};
use super::leaves::parse_leaves;
use crate::onf::ast::Section;
use crate::onf::lexing::{split_body_and_tail, split_chunks, split_sections, Chunk, ChunkKind};
use tracing::{debug, trace};

fn chunk_event(chunk: Chunk<'_>) -> Result<AssemblyEvent, ParseError> {
    let Some(kind) = chunk.kind else {
        return Err(ParseError::UnrecognizedChunk {
            chunk: chunk.text.to_string(),
        });
    };
    trace!(%kind, bytes = chunk.text.len(), "chunk");

    let field = match kind {
        ChunkKind::SentenceBreak => return Ok(AssemblyEvent::Boundary),
        ChunkKind::PlainSentence => SentenceField::PlainSentence(parse_plain_sentence(chunk.text)),
        ChunkKind::TreebankedSentence => {
            SentenceField::TreebankedSentence(parse_treebanked_sentence(chunk.text))
        }
        ChunkKind::SpeakerInformation => {
            SentenceField::SpeakerInformation(parse_speaker_information(chunk.text))
        }
        ChunkKind::Tree => SentenceField::Tree(parse_tree(chunk.text)),
        ChunkKind::Leaves => SentenceField::Leaves(parse_leaves(chunk.text)?),
    };
    Ok(AssemblyEvent::Field(field))
}

/// Parse a section already split into its body and optional chain index.
pub fn parse_section_parts(body: &str, tail: Option<&str>) -> Result<Section, ParseError> {
    let events = split_chunks(body)
        .into_iter()
        .map(chunk_event)
        .collect::<Result<Vec<_>, _>>()?;
    let sentences = assemble(events);
    let chains = tail.map(parse_chains).transpose()?;

    debug!(
        sentences = sentences.len(),
        chains = ?chains.as_ref().map(Vec::len),
        "parsed section"
    );
    Ok(Section::new(sentences, chains))
}

/// Parse the text of one section.
pub fn parse_section_text(raw: &str) -> Result<Section, ParseError> {
    let (body, tail) = split_body_and_tail(raw);
    parse_section_parts(body, tail)
}

/// Parse a whole ONF document into its sections, in order. The first error aborts the parse.
pub fn parse_document_text(raw: &str) -> Result<Vec<Section>, ParseError> {
    let sections = split_sections(raw);
    debug!(sections = sections.len(), bytes = raw.len(), "parsing document");
    sections.into_iter().map(parse_section_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onf::lexing::{SECTION_RULE, SENTENCE_RULE};

    #[test]
    fn test_single_plain_sentence() {
        let section = parse_section_text("Plain sentence:\n---------------\n    Hello world .").unwrap();
        assert_eq!(section.sentences.len(), 1);
        assert_eq!(
            section.sentences[0]
                .plain_sentence
                .as_ref()
                .map(|p| p.string.as_str()),
            Some("Hello world .")
        );
        assert_eq!(section.chains, None);
    }

    #[test]
    fn test_unrecognized_chunk() {
        let err = parse_section_text("Plain sentence:\n---\n    Hi .\n\nBogus:\n  x").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnrecognizedChunk {
                chunk: "Bogus:\n  x".to_string()
            }
        );
    }

    #[test]
    fn test_sentences_split_on_rules() {
        let raw = [
            SENTENCE_RULE.as_str(),
            "",
            "Plain sentence:\n---------------\n    One .",
            "",
            SENTENCE_RULE.as_str(),
            "",
            "Plain sentence:\n---------------\n    Two .",
        ]
        .join("\n");
        let section = parse_section_text(&raw).unwrap();
        let texts: Vec<String> = section.sentences.iter().map(|s| s.to_string()).collect();
        assert_eq!(texts, vec!["One .", "Two ."]);
    }

    #[test]
    fn test_tail_is_parsed_into_chains() {
        let raw = [
            "Plain sentence:\n---------------\n    He left .",
            "",
            SECTION_RULE.as_str(),
            "Coreference chains for section 0:\n---------------------------------",
            "",
            "Chain 5 (IDENT)\n               0.0-0               He",
        ]
        .join("\n");
        let section = parse_section_text(&raw).unwrap();
        let chain = section.chain("5").unwrap();
        assert_eq!(chain.chain_type, "IDENT");
        assert_eq!(chain.mentions.len(), 1);
    }

    #[test]
    fn test_empty_tail_gives_empty_chain_list() {
        let raw = format!("Plain sentence:\n---\n    Hi .\n\n{}\n", SECTION_RULE.as_str());
        let section = parse_section_text(&raw).unwrap();
        assert_eq!(section.chains, Some(Vec::new()));
    }

    #[test]
    fn test_empty_document_is_one_empty_section() {
        let sections = parse_document_text("").unwrap();
        assert_eq!(sections, vec![Section::default()]);
    }

    #[test]
    fn test_leaf_errors_propagate() {
        let raw = "Leaves:\n-------\n    0   dog\nstray";
        assert!(matches!(
            parse_section_text(raw),
            Err(ParseError::UnexpectedLeafLine { .. })
        ));
    }
}
