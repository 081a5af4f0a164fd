//! Attribute sub-parsers
//!
//!     Attribute blocks hang under a token header in the leaves block:
//!
//!         3   saw
//!                 sense: see-v.1
//!                 prop:  see.01
//!                  v          * -> 3:0,  saw
//!                  ARG0       * -> 0:2,  The old man
//!                  ARG1       * -> 4:1,  a dog that was
//!                                        barking loudly
//!                 coref: IDENT        7    0-2    The old man
//!                 name:  PERSON       9-10   John Smith
//!
//!     By the time a sub-parser runs, the leaf parser has already collected the block: the
//!     header content plus every following line that is neither an attribute nor a token
//!     header, trimmed. Each sub-parser decides how to fold those lines into its record.
//!
//! Prop Arguments
//!
//!     After the predicate label, each line is one of:
//!
//!         - `ROLE [* ]-> id:height, text` : first argument for ROLE
//!         - `[* ]-> id:height, text` : another argument for the previous line's role
//!         - anything else : more text for the argument just opened
//!
//!     Whether a text line belongs to the current argument can only be told by peeking at it,
//!     so arguments are walked with a [LineCursor] and the text collector stops, without
//!     consuming, at the first line that starts a new argument.

use super::error::ParseError;
use crate::onf::ast::{Coref, Leaf, Name, Prop, PropArg, Sense, TokenSpan};
use crate::onf::lexing::line_classification::{
    classify_argument_line, is_argument_boundary, ArgumentLine,
};
use crate::onf::lexing::LineCursor;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::trace;

/// `IDENT  14  0-2  The old man`, or with an apposition role, `APPOS HEAD  60  5-6  Li Peng`.
static COREF_CONTENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+(?:\s\w+)?)\s+(\S+)\s+(\d+)-(\d+)\s?(.*)$").unwrap());

/// `PERSON  9-10  John Smith`
static NAME_CONTENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+)\s+(\d+)-(\d+)\s?(.*)$").unwrap());

/// The attribute labels a leaf can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Prop,
    Coref,
    Name,
    Sense,
}

impl AttributeKind {
    pub fn from_label(label: &str) -> Option<AttributeKind> {
        match label {
            "prop" => Some(AttributeKind::Prop),
            "coref" => Some(AttributeKind::Coref),
            "name" => Some(AttributeKind::Name),
            "sense" => Some(AttributeKind::Sense),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttributeKind::Prop => "prop",
            AttributeKind::Coref => "coref",
            AttributeKind::Name => "name",
            AttributeKind::Sense => "sense",
        }
    }

    /// Parse a collected block: the header content followed by its trimmed continuation lines.
    pub fn parse(self, content_lines: &[&str]) -> Result<Attribute, ParseError> {
        match self {
            AttributeKind::Prop => parse_prop(content_lines).map(Attribute::Prop),
            AttributeKind::Coref => parse_coref(content_lines).map(Attribute::Coref),
            AttributeKind::Name => parse_name(content_lines).map(Attribute::Name),
            AttributeKind::Sense => parse_sense(content_lines).map(Attribute::Sense),
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A parsed attribute, ready to be attached to its leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    Prop(Prop),
    Coref(Coref),
    Name(Name),
    Sense(Sense),
}

impl Attribute {
    pub fn kind(&self) -> AttributeKind {
        match self {
            Attribute::Prop(_) => AttributeKind::Prop,
            Attribute::Coref(_) => AttributeKind::Coref,
            Attribute::Name(_) => AttributeKind::Name,
            Attribute::Sense(_) => AttributeKind::Sense,
        }
    }

    /// Set the matching slot of `leaf`. A repeated attribute replaces the earlier one.
    pub fn attach_to(self, leaf: &mut Leaf) {
        match self {
            Attribute::Prop(prop) => leaf.prop = Some(prop),
            Attribute::Coref(coref) => leaf.coref = Some(coref),
            Attribute::Name(name) => leaf.name = Some(name),
            Attribute::Sense(sense) => leaf.sense = Some(sense),
        }
    }
}

/// Dispatch a collected attribute block by label.
///
/// `header` is the raw header line, kept for diagnostics.
pub fn parse_attribute(
    label: &str,
    content: &str,
    continuation: &[&str],
    header: &str,
) -> Result<Attribute, ParseError> {
    let kind =
        AttributeKind::from_label(label).ok_or_else(|| ParseError::UnrecognizedAttribute {
            label: label.to_string(),
            line: header.to_string(),
        })?;
    trace!(%kind, lines = continuation.len() + 1, "attribute");

    let mut content_lines = Vec::with_capacity(continuation.len() + 1);
    content_lines.push(content);
    content_lines.extend_from_slice(continuation);
    kind.parse(&content_lines)
}

fn parse_number(digits: &str, kind: AttributeKind, text: &str) -> Result<usize, ParseError> {
    digits
        .parse()
        .map_err(|_| ParseError::malformed(kind, "number out of range", text))
}

pub fn parse_prop(content_lines: &[&str]) -> Result<Prop, ParseError> {
    let Some((label, argument_lines)) = content_lines.split_first() else {
        return Err(ParseError::malformed(AttributeKind::Prop, "missing label", ""));
    };

    let mut cursor = LineCursor::new(argument_lines);
    let mut args: BTreeMap<String, Vec<PropArg>> = BTreeMap::new();
    let mut current_role: Option<&str> = None;

    while let Some(line) = cursor.advance() {
        let (role, token_id, height, text) = match classify_argument_line(line) {
            ArgumentLine::Role {
                role,
                token_id,
                height,
                text,
            } => (role, token_id, height, text),
            ArgumentLine::Additional {
                token_id,
                height,
                text,
            } => match current_role {
                Some(role) => (role, token_id, height, text),
                None => {
                    return Err(ParseError::malformed(
                        AttributeKind::Prop,
                        "argument without a role",
                        line,
                    ))
                }
            },
            ArgumentLine::Text(_) => {
                return Err(ParseError::malformed(
                    AttributeKind::Prop,
                    "expected `ROLE -> id:height, text`",
                    line,
                ))
            }
        };

        let mut tokens = vec![text.to_string()];
        tokens.extend(
            cursor
                .collect_until(is_argument_boundary)
                .into_iter()
                .map(str::to_string),
        );

        args.entry(role.to_string()).or_default().push(PropArg {
            token_id: parse_number(token_id, AttributeKind::Prop, line)?,
            height: parse_number(height, AttributeKind::Prop, line)?,
            tokens,
        });
        current_role = Some(role);
    }

    Ok(Prop {
        label: label.trim().to_string(),
        args,
    })
}

/// Join the mention text with any extra lines and split it on single spaces.
fn fold_tokens(text: &str, extra_lines: &[&str]) -> Vec<String> {
    let mut cursor = LineCursor::new(extra_lines);
    let extra = cursor.collect_until(is_argument_boundary);
    if !cursor.is_done() {
        trace!(dropped = cursor.remaining().len(), "ignoring lines after mention text");
    }

    let mut joined = text.trim().to_string();
    for line in extra {
        joined.push(' ');
        joined.push_str(line);
    }
    joined.split(' ').map(str::to_string).collect()
}

pub fn parse_coref(content_lines: &[&str]) -> Result<Coref, ParseError> {
    let Some((first, extra_lines)) = content_lines.split_first() else {
        return Err(ParseError::malformed(AttributeKind::Coref, "missing content", ""));
    };
    let header = first.trim();
    let caps = COREF_CONTENT.captures(header).ok_or_else(|| {
        ParseError::malformed(
            AttributeKind::Coref,
            "expected `TYPE CHAIN START-END text`",
            header,
        )
    })?;
    let kind = AttributeKind::Coref;

    Ok(Coref {
        coref_type: caps[1].to_string(),
        chain_id: caps[2].to_string(),
        token_range: TokenSpan::new(
            parse_number(&caps[3], kind, header)?,
            parse_number(&caps[4], kind, header)?,
        ),
        tokens: fold_tokens(&caps[5], extra_lines),
    })
}

pub fn parse_name(content_lines: &[&str]) -> Result<Name, ParseError> {
    let Some((first, extra_lines)) = content_lines.split_first() else {
        return Err(ParseError::malformed(AttributeKind::Name, "missing content", ""));
    };
    let header = first.trim();
    let caps = NAME_CONTENT.captures(header).ok_or_else(|| {
        ParseError::malformed(AttributeKind::Name, "expected `TYPE START-END text`", header)
    })?;
    let kind = AttributeKind::Name;

    Ok(Name {
        name_type: caps[1].to_string(),
        token_range: TokenSpan::new(
            parse_number(&caps[2], kind, header)?,
            parse_number(&caps[3], kind, header)?,
        ),
        tokens: fold_tokens(&caps[4], extra_lines),
    })
}

pub fn parse_sense(content_lines: &[&str]) -> Result<Sense, ParseError> {
    match content_lines {
        [label] => Ok(Sense {
            label: label.trim().to_string(),
        }),
        _ => Err(ParseError::malformed(
            AttributeKind::Sense,
            "expected exactly one line",
            &content_lines.join("\n"),
        )),
    }
}
