//! Leaf element
//!
//! A leaf is one token of the "Leaves:" block. The header line carries the token id and
//! surface form; the indented blocks under it carry optional annotations:
//!
//! ```text
//!     1   said
//!             sense: say-v.1
//!             prop:  say.01
//!              v          * -> 1:0,  said
//!              ARG0       * -> 0:1,  He
//! ```
//!
//! Each annotation kind appears at most once per leaf. Token ids come verbatim from the
//! header line; gaps and duplicates in malformed input are passed through.

use super::span::TokenSpan;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
    pub token_id: usize,
    pub token: String,
    pub prop: Option<Prop>,
    pub coref: Option<Coref>,
    pub name: Option<Name>,
    pub sense: Option<Sense>,
}

impl Leaf {
    /// A bare leaf with no annotations.
    pub fn new(token_id: usize, token: impl Into<String>) -> Self {
        Self {
            token_id,
            token: token.into(),
            prop: None,
            coref: None,
            name: None,
            sense: None,
        }
    }

    pub fn is_annotated(&self) -> bool {
        self.prop.is_some() || self.coref.is_some() || self.name.is_some() || self.sense.is_some()
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.token_id, self.token)
    }
}

/// Predicate-argument annotation.
///
/// `args` maps a role label (`ARG0`, `ARGM-TMP`, `v`, ...) to every argument filling it, in
/// the order they were written. Roles repeat for coordinated arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prop {
    pub label: String,
    pub args: BTreeMap<String, Vec<PropArg>>,
}

impl Prop {
    pub fn role(&self, role: &str) -> &[PropArg] {
        self.args.get(role).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn arg_count(&self) -> usize {
        self.args.values().map(Vec::len).sum()
    }
}

/// One argument of a [Prop]: the head token offset, the number of levels up the tree to the
/// constituent, and the argument text as written (one entry per physical line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropArg {
    pub token_id: usize,
    pub height: usize,
    pub tokens: Vec<String>,
}

/// Coreference annotation on a token span. `chain_id` is a soft key into the section's chains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coref {
    pub coref_type: String,
    pub chain_id: String,
    pub token_range: TokenSpan,
    pub tokens: Vec<String>,
}

impl Coref {
    /// Apposition corefs carry their role after the type (`APPOS HEAD`, `APPOS ATTRIB`).
    pub fn is_apposition(&self) -> bool {
        self.coref_type.starts_with("APPOS")
    }
}

/// Named-entity annotation on a token span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub name_type: String,
    pub token_range: TokenSpan,
    pub tokens: Vec<String>,
}

/// Word-sense label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub label: String,
}
