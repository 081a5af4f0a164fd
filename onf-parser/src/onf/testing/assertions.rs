//! Fluent assertion API for parsed sections
//!
//!     Tests describe the records they expect instead of walking them by hand. Every
//!     assertion carries a context path (`sections[0].sentences[2].leaves[5]`) so a failure
//!     says exactly where the records diverge.
//!
//!     ```rust,ignore
//!     assert_sections(&sections)
//!         .section_count(1)
//!         .section(0, |section| {
//!             section
//!                 .sentence_count(2)
//!                 .sentence(0, |sentence| {
//!                     sentence
//!                         .plain("The dog barked .")
//!                         .leaf_count(4)
//!                         .leaf(2, |leaf| {
//!                             leaf.token("barked").prop_label("bark.01");
//!                         });
//!                 })
//!                 .chain("14", |chain| {
//!                     chain.chain_type("IDENT").mention_count(2);
//!                 });
//!         });
//!     ```

use super::matchers::TextMatch;
use crate::onf::ast::{Chain, Leaf, Section, Sentence, TokenSpan};

/// Create an assertion builder for a parsed document
pub fn assert_sections(sections: &[Section]) -> SectionsAssertion<'_> {
    SectionsAssertion { sections }
}

fn span(range: (usize, usize)) -> TokenSpan {
    TokenSpan::from(range)
}

pub struct SectionsAssertion<'a> {
    sections: &'a [Section],
}

impl<'a> SectionsAssertion<'a> {
    pub fn section_count(self, expected: usize) -> Self {
        assert_eq!(
            self.sections.len(),
            expected,
            "Expected {} sections, found {}",
            expected,
            self.sections.len()
        );
        self
    }

    pub fn section<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SectionAssertion<'a>),
    {
        assert!(
            index < self.sections.len(),
            "Section index {} out of bounds (document has {} sections)",
            index,
            self.sections.len()
        );
        assertion(SectionAssertion {
            section: &self.sections[index],
            context: format!("sections[{}]", index),
        });
        self
    }

    /// Total sentences over every section
    pub fn total_sentences(self, expected: usize) -> Self {
        let actual: usize = self.sections.iter().map(|s| s.sentences.len()).sum();
        assert_eq!(
            actual, expected,
            "Expected {} sentences in total, found {}",
            expected, actual
        );
        self
    }
}

pub struct SectionAssertion<'a> {
    section: &'a Section,
    context: String,
}

impl<'a> SectionAssertion<'a> {
    pub fn sentence_count(self, expected: usize) -> Self {
        let actual = self.section.sentences.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} sentences, found {}: [{}]",
            self.context,
            expected,
            actual,
            self.section
                .sentences
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(" | ")
        );
        self
    }

    pub fn sentence<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SentenceAssertion<'a>),
    {
        let context = format!("{}.sentences[{}]", self.context, index);
        let sentence = self
            .section
            .sentence(index)
            .unwrap_or_else(|| panic!("{}: no such sentence", context));
        assertion(SentenceAssertion { sentence, context });
        self
    }

    /// The section has no `=` rule, so no chain index at all.
    pub fn no_chain_index(self) -> Self {
        assert!(
            self.section.chains.is_none(),
            "{}: Expected no chain index, found {:?}",
            self.context,
            self.section.chains
        );
        self
    }

    pub fn chain_count(self, expected: usize) -> Self {
        let chains = self.section.chains.as_ref().unwrap_or_else(|| {
            panic!(
                "{}: Expected {} chains, but the section has no chain index",
                self.context, expected
            )
        });
        assert_eq!(
            chains.len(),
            expected,
            "{}: Expected {} chains, found {}",
            self.context,
            expected,
            chains.len()
        );
        self
    }

    pub fn chain<F>(self, id: &str, assertion: F) -> Self
    where
        F: FnOnce(ChainAssertion<'a>),
    {
        let context = format!("{}.chain({})", self.context, id);
        let chain = self
            .section
            .chain(id)
            .unwrap_or_else(|| panic!("{}: no such chain", context));
        assertion(ChainAssertion { chain, context });
        self
    }
}

pub struct SentenceAssertion<'a> {
    sentence: &'a Sentence,
    context: String,
}

impl<'a> SentenceAssertion<'a> {
    pub fn plain(self, expected: impl Into<TextMatch>) -> Self {
        let plain = self
            .sentence
            .plain_sentence
            .as_ref()
            .unwrap_or_else(|| panic!("{}: Expected a plain sentence", self.context));
        expected
            .into()
            .assert(&plain.string, &format!("{}.plain_sentence", self.context));
        self
    }

    pub fn no_plain(self) -> Self {
        assert!(
            self.sentence.plain_sentence.is_none(),
            "{}: Expected no plain sentence",
            self.context
        );
        self
    }

    pub fn treebanked(self, expected: impl Into<TextMatch>) -> Self {
        let treebanked = self
            .sentence
            .treebanked_sentence
            .as_ref()
            .unwrap_or_else(|| panic!("{}: Expected a treebanked sentence", self.context));
        expected.into().assert(
            &treebanked.string,
            &format!("{}.treebanked_sentence", self.context),
        );
        self
    }

    pub fn tokens(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.sentence.tokens(),
            expected,
            "{}: tokens differ",
            self.context
        );
        self
    }

    pub fn speaker(self, name: &str) -> Self {
        let actual = self
            .sentence
            .speaker_information
            .as_ref()
            .and_then(|info| info.name.as_deref());
        assert_eq!(
            actual,
            Some(name),
            "{}: speaker name differs",
            self.context
        );
        self
    }

    pub fn speaker_times(self, start: Option<&str>, stop: Option<&str>) -> Self {
        let info = self
            .sentence
            .speaker_information
            .as_ref()
            .unwrap_or_else(|| panic!("{}: Expected speaker information", self.context));
        assert_eq!(info.start_time.as_deref(), start, "{}: start time", self.context);
        assert_eq!(info.stop_time.as_deref(), stop, "{}: stop time", self.context);
        self
    }

    pub fn tree(self, expected: impl Into<TextMatch>) -> Self {
        let tree = self
            .sentence
            .tree
            .as_ref()
            .unwrap_or_else(|| panic!("{}: Expected a tree", self.context));
        expected
            .into()
            .assert(&tree.tree_string, &format!("{}.tree", self.context));
        self
    }

    pub fn fields(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.sentence.populated_fields(),
            expected,
            "{}: populated fields differ",
            self.context
        );
        self
    }

    pub fn leaf_count(self, expected: usize) -> Self {
        let leaves = self
            .sentence
            .leaves
            .as_ref()
            .unwrap_or_else(|| panic!("{}: Expected a leaves block", self.context));
        assert_eq!(
            leaves.len(),
            expected,
            "{}: Expected {} leaves, found {}",
            self.context,
            expected,
            leaves.len()
        );
        self
    }

    /// Assert on the leaf at `index` in block order (not by token id).
    pub fn leaf<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(LeafAssertion<'a>),
    {
        let context = format!("{}.leaves[{}]", self.context, index);
        let leaf = self
            .sentence
            .leaves
            .as_ref()
            .and_then(|leaves| leaves.get(index))
            .unwrap_or_else(|| panic!("{}: no such leaf", context));
        assertion(LeafAssertion { leaf, context });
        self
    }
}

pub struct LeafAssertion<'a> {
    leaf: &'a Leaf,
    context: String,
}

impl LeafAssertion<'_> {
    pub fn token_id(self, expected: usize) -> Self {
        assert_eq!(self.leaf.token_id, expected, "{}: token id", self.context);
        self
    }

    pub fn token(self, expected: &str) -> Self {
        assert_eq!(self.leaf.token, expected, "{}: token", self.context);
        self
    }

    /// No attribute at all
    pub fn bare(self) -> Self {
        assert!(
            !self.leaf.is_annotated(),
            "{}: Expected a bare leaf, found {:?}",
            self.context,
            self.leaf
        );
        self
    }

    pub fn sense(self, expected: &str) -> Self {
        let actual = self.leaf.sense.as_ref().map(|s| s.label.as_str());
        assert_eq!(actual, Some(expected), "{}: sense", self.context);
        self
    }

    pub fn prop_label(self, expected: &str) -> Self {
        let actual = self.leaf.prop.as_ref().map(|p| p.label.as_str());
        assert_eq!(actual, Some(expected), "{}: prop label", self.context);
        self
    }

    pub fn prop_roles(self, expected: &[&str]) -> Self {
        let prop = self
            .leaf
            .prop
            .as_ref()
            .unwrap_or_else(|| panic!("{}: Expected a prop", self.context));
        let roles: Vec<&str> = prop.args.keys().map(String::as_str).collect();
        assert_eq!(roles, expected, "{}: prop roles", self.context);
        self
    }

    /// Assert the `index`th argument of `role`: position, height and text lines.
    pub fn prop_arg(
        self,
        role: &str,
        index: usize,
        token_id: usize,
        height: usize,
        tokens: &[&str],
    ) -> Self {
        let context = format!("{}.prop[{}][{}]", self.context, role, index);
        let arg = self
            .leaf
            .prop
            .as_ref()
            .and_then(|prop| prop.role(role).get(index))
            .unwrap_or_else(|| panic!("{}: no such argument", context));
        assert_eq!(
            (arg.token_id, arg.height),
            (token_id, height),
            "{}: pointer",
            context
        );
        assert_eq!(arg.tokens, tokens, "{}: tokens", context);
        self
    }

    pub fn coref(self, coref_type: &str, chain_id: &str, range: (usize, usize)) -> Self {
        let coref = self
            .leaf
            .coref
            .as_ref()
            .unwrap_or_else(|| panic!("{}: Expected a coref", self.context));
        assert_eq!(coref.coref_type, coref_type, "{}: coref type", self.context);
        assert_eq!(coref.chain_id, chain_id, "{}: coref chain", self.context);
        assert_eq!(coref.token_range, span(range), "{}: coref range", self.context);
        self
    }

    pub fn coref_tokens(self, expected: &[&str]) -> Self {
        let coref = self
            .leaf
            .coref
            .as_ref()
            .unwrap_or_else(|| panic!("{}: Expected a coref", self.context));
        assert_eq!(coref.tokens, expected, "{}: coref tokens", self.context);
        self
    }

    pub fn name(self, name_type: &str, range: (usize, usize), tokens: &[&str]) -> Self {
        let name = self
            .leaf
            .name
            .as_ref()
            .unwrap_or_else(|| panic!("{}: Expected a name", self.context));
        assert_eq!(name.name_type, name_type, "{}: name type", self.context);
        assert_eq!(name.token_range, span(range), "{}: name range", self.context);
        assert_eq!(name.tokens, tokens, "{}: name tokens", self.context);
        self
    }
}

pub struct ChainAssertion<'a> {
    chain: &'a Chain,
    context: String,
}

impl ChainAssertion<'_> {
    pub fn chain_type(self, expected: &str) -> Self {
        assert_eq!(self.chain.chain_type, expected, "{}: type", self.context);
        self
    }

    pub fn mention_count(self, expected: usize) -> Self {
        assert_eq!(
            self.chain.mentions.len(),
            expected,
            "{}: Expected {} mentions, found [{}]",
            self.context,
            expected,
            self.chain
                .mentions
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(" | ")
        );
        self
    }

    pub fn mention(
        self,
        index: usize,
        sentence_id: usize,
        range: (usize, usize),
        text: &str,
    ) -> Self {
        let context = format!("{}.mentions[{}]", self.context, index);
        let mention = self
            .chain
            .mentions
            .get(index)
            .unwrap_or_else(|| panic!("{}: no such mention", context));
        assert_eq!(mention.sentence_id, sentence_id, "{}: sentence", context);
        assert_eq!(mention.token_range, span(range), "{}: range", context);
        assert_eq!(mention.tokens.join(" "), text, "{}: text", context);
        self
    }
}
