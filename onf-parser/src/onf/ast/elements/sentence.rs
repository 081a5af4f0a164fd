//! Sentence element
//!
//! A sentence is the group of chunks between two dashed rules:
//!
//! | Chunk                | Label line               | Record                 |
//! |----------------------|--------------------------|------------------------|
//! | Plain sentence       | `Plain sentence:`        | [PlainSentence]        |
//! | Treebanked sentence  | `Treebanked sentence:`   | [TreebankedSentence]   |
//! | Speaker information  | `Speaker information:`   | [SpeakerInformation]   |
//! | Tree                 | `Tree:`                  | [Tree]                 |
//! | Leaves               | `Leaves:`                | `Vec<Leaf>`            |
//!
//! Every chunk is optional. A sentence is only produced when at least one chunk was present.

use super::leaf::Leaf;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The untokenized sentence text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainSentence {
    pub string: String,
}

impl PlainSentence {
    pub fn new(string: impl Into<String>) -> Self {
        Self {
            string: string.into(),
        }
    }
}

/// The tokenized sentence; `tokens.join(" ") == string` by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreebankedSentence {
    pub string: String,
    pub tokens: Vec<String>,
}

impl TreebankedSentence {
    /// Build from the joined string, splitting on single spaces.
    pub fn from_string(string: impl Into<String>) -> Self {
        let string = string.into();
        let tokens = string.split(' ').map(str::to_string).collect();
        Self { string, tokens }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerInformation {
    pub name: Option<String>,
    pub start_time: Option<String>,
    pub stop_time: Option<String>,
}

/// The bracketed syntax tree, verbatim. It is not parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    pub tree_string: String,
}

impl Tree {
    pub fn new(tree_string: impl Into<String>) -> Self {
        Self {
            tree_string: tree_string.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub plain_sentence: Option<PlainSentence>,
    pub treebanked_sentence: Option<TreebankedSentence>,
    pub speaker_information: Option<SpeakerInformation>,
    pub tree: Option<Tree>,
    pub leaves: Option<Vec<Leaf>>,
}

impl Sentence {
    /// True when no chunk populated this sentence.
    pub fn is_empty(&self) -> bool {
        self.populated_fields().is_empty()
    }

    /// Tokens of the treebanked sentence, empty when the chunk was absent.
    pub fn tokens(&self) -> &[String] {
        self.treebanked_sentence
            .as_ref()
            .map(|t| t.tokens.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter_leaves(&self) -> impl Iterator<Item = &Leaf> {
        self.leaves.iter().flatten()
    }

    /// First leaf carrying `token_id`. Ids come from the source and may repeat.
    pub fn leaf(&self, token_id: usize) -> Option<&Leaf> {
        self.iter_leaves().find(|leaf| leaf.token_id == token_id)
    }

    /// Names of the populated fields, in chunk order.
    pub fn populated_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.plain_sentence.is_some() {
            fields.push("plain_sentence");
        }
        if self.treebanked_sentence.is_some() {
            fields.push("treebanked_sentence");
        }
        if self.speaker_information.is_some() {
            fields.push("speaker_information");
        }
        if self.tree.is_some() {
            fields.push("tree");
        }
        if self.leaves.is_some() {
            fields.push("leaves");
        }
        fields
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.plain_sentence, &self.treebanked_sentence) {
            (Some(plain), _) => write!(f, "{}", plain.string),
            (None, Some(treebanked)) => write!(f, "{}", treebanked.string),
            (None, None) => write!(f, "<sentence: {}>", self.populated_fields().join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_treebanked_tokens_join_back() {
        let sentence = TreebankedSentence::from_string("The dog barked .");
        assert_eq!(sentence.tokens, vec!["The", "dog", "barked", "."]);
        assert_eq!(sentence.tokens.join(" "), sentence.string);
    }

    #[test]
    fn test_display_prefers_plain_text() {
        let sentence = Sentence {
            plain_sentence: Some(PlainSentence::new("The dog barked.")),
            treebanked_sentence: Some(TreebankedSentence::from_string("The dog barked .")),
            ..Default::default()
        };
        assert_eq!(sentence.to_string(), "The dog barked.");
    }

    #[test]
    fn test_display_without_text() {
        let sentence = Sentence {
            tree: Some(Tree::new("(TOP (NP (NN dog)))")),
            ..Default::default()
        };
        assert_eq!(sentence.to_string(), "<sentence: tree>");
        assert!(sentence.tokens().is_empty());
    }
}
