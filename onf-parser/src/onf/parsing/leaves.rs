//! Leaf annotation parser
//!
//!     The "Leaves:" chunk lists every token of the sentence, each optionally followed by
//!     attribute blocks:
//!
//!         Leaves:
//!         -------
//!             0   The
//!             1   dog
//!                 sense: 1
//!             2   barked
//!                 prop:  bark.01
//!                  v          * -> 2:0,  barked
//!                  ARG0       * -> 0:1,  The dog
//!
//!     Lines are first grouped into units (a token header, or an attribute header with its
//!     continuation lines), then the units are folded into leaves with a [LeafAccumulator]
//!     that holds the open leaf.

use super::attributes::{parse_attribute, Attribute};
use super::error::ParseError;
use crate::onf::ast::Leaf;
use crate::onf::lexing::line_classification::{
    classify_leaf_line, is_attribute_boundary, is_blank_line, LeafLine,
};
use crate::onf::lexing::LineCursor;
use tracing::trace;

/// One logical line group of a leaves block.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LeafUnit {
    Token(Leaf),
    Attribute { attribute: Attribute, line: String },
}

/// The leaves emitted so far plus the leaf attributes currently attach to.
#[derive(Debug, Default)]
struct LeafAccumulator {
    leaves: Vec<Leaf>,
    open: Option<Leaf>,
}

impl LeafAccumulator {
    fn apply(mut self, unit: LeafUnit) -> Result<Self, ParseError> {
        match unit {
            LeafUnit::Token(leaf) => {
                if let Some(previous) = self.open.replace(leaf) {
                    self.leaves.push(previous);
                }
            }
            LeafUnit::Attribute { attribute, line } => match self.open.as_mut() {
                Some(leaf) => attribute.attach_to(leaf),
                None => return Err(ParseError::AttributeWithoutLeaf { line }),
            },
        }
        Ok(self)
    }

    fn finish(mut self) -> Vec<Leaf> {
        self.leaves.extend(self.open.take());
        self.leaves
    }
}

/// Group the lines of a leaves block into units, parsing attribute blocks as they close.
fn leaf_units(lines: &[&str]) -> Result<Vec<LeafUnit>, ParseError> {
    let mut cursor = LineCursor::new(lines);
    let mut units = Vec::new();

    while let Some(line) = cursor.advance() {
        if is_blank_line(line) {
            continue;
        }
        match classify_leaf_line(line) {
            LeafLine::TokenHeader { token_id, token } => {
                let token_id = token_id
                    .parse()
                    .map_err(|_| ParseError::UnexpectedLeafLine {
                        line: line.to_string(),
                    })?;
                units.push(LeafUnit::Token(Leaf::new(token_id, token)));
            }
            LeafLine::AttributeHeader { label, content } => {
                let continuation = cursor.collect_until(is_attribute_boundary);
                let attribute = parse_attribute(label, content, &continuation, line)?;
                units.push(LeafUnit::Attribute {
                    attribute,
                    line: line.to_string(),
                });
            }
            LeafLine::Continuation(line) => {
                return Err(ParseError::UnexpectedLeafLine {
                    line: line.to_string(),
                })
            }
        }
    }

    Ok(units)
}

/// Parse a "Leaves:" chunk. The label line and its underline are skipped.
pub fn parse_leaves(chunk: &str) -> Result<Vec<Leaf>, ParseError> {
    let lines: Vec<&str> = chunk.lines().skip(2).collect();
    let leaves = leaf_units(&lines)?
        .into_iter()
        .try_fold(LeafAccumulator::default(), LeafAccumulator::apply)?
        .finish();
    trace!(leaves = leaves.len(), "parsed leaves block");
    Ok(leaves)
}
