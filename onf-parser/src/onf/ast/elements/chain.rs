//! Coreference chain element
//!
//! The chain index follows the `=` rule at the end of a section:
//!
//! ```text
//!     Chain 60 (APPOS)
//!     HEAD       0.5-6               Li Peng
//!     ATTRIB     0.2-4               Chinese Premier
//! ```

use super::span::TokenSpan;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub id: String,
    pub chain_type: String,
    pub mentions: Vec<Mention>,
}

/// One mention of a chain: sentence index within the section plus an inclusive token range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    pub sentence_id: usize,
    pub token_range: TokenSpan,
    pub tokens: Vec<String>,
}

impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} {}",
            self.sentence_id,
            self.token_range,
            self.tokens.join(" ")
        )
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chain {} ({}) [{} mentions]",
            self.id,
            self.chain_type,
            self.mentions.len()
        )
    }
}
