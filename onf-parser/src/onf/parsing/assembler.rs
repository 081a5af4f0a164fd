//! Sentence assembler
//!
//!     Field chunks of one sentence sit between dashed rules. The assembler holds the fields
//!     seen since the last rule; a rule (or the end of the body) closes the sentence if any
//!     field was set. Rules with nothing before them, as at the start of a section, produce
//!     nothing. A field seen twice before a rule keeps the later value.

use crate::onf::ast::{
    Leaf, PlainSentence, Sentence, SpeakerInformation, Tree, TreebankedSentence,
};

/// A parsed field chunk, tagged with the slot it fills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentenceField {
    PlainSentence(PlainSentence),
    TreebankedSentence(TreebankedSentence),
    SpeakerInformation(SpeakerInformation),
    Tree(Tree),
    Leaves(Vec<Leaf>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyEvent {
    /// A sentence rule
    Boundary,
    Field(SentenceField),
}

/// Accumulator threaded through the event fold.
#[derive(Debug, Default)]
pub struct Assembler {
    sentences: Vec<Sentence>,
    current: Sentence,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(mut self, event: AssemblyEvent) -> Self {
        match event {
            AssemblyEvent::Boundary => self.flush(),
            AssemblyEvent::Field(field) => self.set(field),
        }
        self
    }

    /// Close the pending sentence, if any, and return everything assembled.
    pub fn finish(mut self) -> Vec<Sentence> {
        self.flush();
        self.sentences
    }

    fn set(&mut self, field: SentenceField) {
        let current = &mut self.current;
        match field {
            SentenceField::PlainSentence(value) => current.plain_sentence = Some(value),
            SentenceField::TreebankedSentence(value) => current.treebanked_sentence = Some(value),
            SentenceField::SpeakerInformation(value) => current.speaker_information = Some(value),
            SentenceField::Tree(value) => current.tree = Some(value),
            SentenceField::Leaves(value) => current.leaves = Some(value),
        }
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.sentences.push(std::mem::take(&mut self.current));
        }
    }
}

/// Fold a sequence of events into sentences.
pub fn assemble<I>(events: I) -> Vec<Sentence>
where
    I: IntoIterator<Item = AssemblyEvent>,
{
    events
        .into_iter()
        .fold(Assembler::new(), Assembler::apply)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> AssemblyEvent {
        AssemblyEvent::Field(SentenceField::PlainSentence(PlainSentence::new(text)))
    }

    #[test]
    fn test_no_events() {
        assert!(assemble(Vec::new()).is_empty());
    }

    #[test]
    fn test_leading_and_repeated_boundaries_are_ignored() {
        let sentences = assemble(vec![
            AssemblyEvent::Boundary,
            AssemblyEvent::Boundary,
            plain("one ."),
            AssemblyEvent::Boundary,
            AssemblyEvent::Boundary,
        ]);
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].to_string(), "one .");
    }

    #[test]
    fn test_end_of_input_flushes() {
        let sentences = assemble(vec![
            plain("one ."),
            AssemblyEvent::Boundary,
            plain("two ."),
        ]);
        let texts: Vec<String> = sentences.iter().map(|s| s.to_string()).collect();
        assert_eq!(texts, vec!["one .", "two ."]);
    }

    #[test]
    fn test_last_write_wins() {
        let sentences = assemble(vec![plain("first ."), plain("second .")]);
        assert_eq!(sentences.len(), 1);
        assert_eq!(
            sentences[0].plain_sentence,
            Some(PlainSentence::new("second ."))
        );
    }

    #[test]
    fn test_fields_fill_their_own_slots() {
        let sentences = assemble(vec![
            plain("Hi ."),
            AssemblyEvent::Field(SentenceField::Tree(Tree::new("(TOP (S))"))),
            AssemblyEvent::Field(SentenceField::Leaves(vec![Leaf::new(0, "Hi")])),
        ]);
        assert_eq!(
            sentences[0].populated_fields(),
            vec!["plain_sentence", "tree", "leaves"]
        );
    }

    #[test]
    fn test_empty_leaves_still_count_as_a_field() {
        let sentences = assemble(vec![AssemblyEvent::Field(SentenceField::Leaves(
            Vec::new(),
        ))]);
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].leaves, Some(Vec::new()));
    }
}
