//! Chain parser
//!
//!     The tail of a section, after the `=` rule, is its coreference chain index:
//!
//!         Coreference chains for section 0:
//!         ---------------------------------
//!
//!         Chain 14 (IDENT)
//!                        0.0-2               The old man
//!                        1.0-0               He
//!
//!         Chain 60 (APPOS)
//!             HEAD       0.5-6               Li Peng
//!             ATTRIB     0.2-4               Chinese Premier of the People's
//!                                            Republic
//!
//!     Blocks are separated by blank lines and the first block is the index header. The
//!     first 15 columns of a mention hold its apposition role, which is not kept. A line
//!     indented by at least 18 spaces continues the mention above it.

use super::error::ParseError;
use crate::onf::ast::{Chain, Mention, TokenSpan};
use crate::onf::lexing::line_classification::is_mention_continuation;
use crate::onf::lexing::{split_blocks, LineCursor};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Columns of a mention line holding the apposition role.
const MENTION_ROLE_WIDTH: usize = 15;

/// `0.5-6               Li Peng`
static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.(\d+)-(\d+)\s+(.+)$").unwrap());

/// Parse the chain index of a section.
pub fn parse_chains(tail: &str) -> Result<Vec<Chain>, ParseError> {
    split_blocks(tail)
        .into_iter()
        .skip(1)
        .map(parse_chain)
        .collect()
}

fn parse_chain(block: &str) -> Result<Chain, ParseError> {
    let lines: Vec<&str> = block.lines().collect();
    let mut cursor = LineCursor::new(&lines);
    let header = cursor.advance().unwrap_or_default();
    let (id, chain_type) = parse_chain_header(header)?;

    let mut mentions = Vec::new();
    while let Some(line) = cursor.advance() {
        let mut mention = line.to_string();
        for continuation in cursor.collect_while(is_mention_continuation) {
            mention.push(' ');
            mention.push_str(continuation);
        }
        mentions.push(parse_mention(&mention)?);
    }
    trace!(chain = id, mentions = mentions.len(), "parsed chain");

    Ok(Chain {
        id: id.to_string(),
        chain_type: chain_type.to_string(),
        mentions,
    })
}

/// Split `Chain 14 (IDENT)` into its id and type.
pub fn parse_chain_header(header: &str) -> Result<(&str, &str), ParseError> {
    let malformed = || ParseError::MalformedChainHeader {
        header: header.to_string(),
    };
    let header = header.trim();
    let fields: Vec<&str> = header.split(' ').collect();
    let &[_, id, chain_type] = fields.as_slice() else {
        return Err(malformed());
    };
    let chain_type = chain_type
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(malformed)?;
    Ok((id, chain_type))
}

/// Parse one assembled mention line, role columns included.
pub fn parse_mention(line: &str) -> Result<Mention, ParseError> {
    let malformed = || ParseError::MalformedMention {
        line: line.to_string(),
    };
    let rest = line
        .char_indices()
        .nth(MENTION_ROLE_WIDTH)
        .map(|(offset, _)| line[offset..].trim())
        .unwrap_or_default();
    let caps = MENTION.captures(rest).ok_or_else(malformed)?;
    let number = |i: usize| caps[i].parse::<usize>().map_err(|_| malformed());

    Ok(Mention {
        sentence_id: number(1)?,
        token_range: TokenSpan::new(number(2)?, number(3)?),
        tokens: caps[4].trim().split(' ').map(str::to_string).collect(),
    })
}
