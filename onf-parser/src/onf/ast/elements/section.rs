//! Section element
//!
//! The top level record. A file holds one or more sections; each owns its sentences and,
//! when the section has an `=` rule, the chain index that follows it. `chains` is `None`
//! when there is no index at all and `Some(vec![])` when the index header has no chains.

use super::chain::Chain;
use super::leaf::Leaf;
use super::sentence::Sentence;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub sentences: Vec<Sentence>,
    pub chains: Option<Vec<Chain>>,
}

impl Section {
    pub fn new(sentences: Vec<Sentence>, chains: Option<Vec<Chain>>) -> Self {
        Self { sentences, chains }
    }

    pub fn sentence(&self, sentence_id: usize) -> Option<&Sentence> {
        self.sentences.get(sentence_id)
    }

    pub fn iter_chains(&self) -> impl Iterator<Item = &Chain> {
        self.chains.iter().flatten()
    }

    /// Resolve a soft chain key. Returns `None` for dangling references.
    pub fn chain(&self, chain_id: &str) -> Option<&Chain> {
        self.iter_chains().find(|chain| chain.id == chain_id)
    }

    /// Every leaf of every sentence, paired with its sentence index.
    pub fn iter_leaves(&self) -> impl Iterator<Item = (usize, &Leaf)> {
        self.sentences
            .iter()
            .enumerate()
            .flat_map(|(i, sentence)| sentence.iter_leaves().map(move |leaf| (i, leaf)))
    }

    /// Chain ids referenced by leaf corefs that have no chain in this section.
    pub fn dangling_chain_refs(&self) -> Vec<&str> {
        let mut dangling: Vec<&str> = self
            .iter_leaves()
            .filter_map(|(_, leaf)| leaf.coref.as_ref())
            .map(|coref| coref.chain_id.as_str())
            .filter(|id| self.chain(id).is_none())
            .collect();
        dangling.sort_unstable();
        dangling.dedup();
        dangling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onf::ast::elements::{Coref, Mention, TokenSpan};

    fn leaf_with_coref(token_id: usize, chain_id: &str) -> Leaf {
        let mut leaf = Leaf::new(token_id, "it");
        leaf.coref = Some(Coref {
            coref_type: "IDENT".to_string(),
            chain_id: chain_id.to_string(),
            token_range: TokenSpan::new(token_id, token_id),
            tokens: vec!["it".to_string()],
        });
        leaf
    }

    #[test]
    fn test_chain_lookup_and_dangling_refs() {
        let sentence = Sentence {
            leaves: Some(vec![leaf_with_coref(0, "14"), leaf_with_coref(1, "99")]),
            ..Default::default()
        };
        let section = Section::new(
            vec![sentence],
            Some(vec![Chain {
                id: "14".to_string(),
                chain_type: "IDENT".to_string(),
                mentions: vec![Mention {
                    sentence_id: 0,
                    token_range: TokenSpan::new(0, 0),
                    tokens: vec!["it".to_string()],
                }],
            }]),
        );

        assert!(section.chain("14").is_some());
        assert!(section.chain("99").is_none());
        assert_eq!(section.dangling_chain_refs(), vec!["99"]);
    }

    #[test]
    fn test_section_without_index() {
        let section = Section::new(Vec::new(), None);
        assert_eq!(section.iter_chains().count(), 0);
        assert!(section.sentence(0).is_none());
    }
}
