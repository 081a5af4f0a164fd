//! Line Classification
//!
//! Decides what a single line is. Every function here is pure; the patterns are compiled
//! once and shared.
//!
//! Order matters where a line could fit two categories. Inside a leaves block a token header
//! is tried before an attribute header, and inside a prop block an additional-argument line
//! (`* -> 3:0, x`) is tried before a role line, since a role line pattern would also accept
//! `*` as a role.

use once_cell::sync::Lazy;
use regex::Regex;

/// `    12   token` : four columns of indentation, the id, then the token text.
static TOKEN_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s{4}(\d+)\s+(\S.*)$").unwrap());

/// `label: content`, optionally emphasized with a leading `*` or `!`.
static ATTRIBUTE_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\s*(?:[*!]\s)?\s*(\w+): (.*)|\s+!\s+(\w+): (.*))").unwrap()
});

/// `ARG0       * -> 0:1,  The dog`
static ROLE_ARGUMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\S+)\s+(?:\* )?-> (\d+):(\d+),\s+(.*)$").unwrap());

/// `* -> 4:1,  and the cat` : another argument for the role of the previous line.
static ADDITIONAL_ARGUMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\* )?-> (\d+):(\d+),\s+(.*)").unwrap());

/// Columns a mention continuation line is indented by, at least.
pub const MENTION_CONTINUATION_INDENT: usize = 18;

/// A line of a leaves block, with its captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafLine<'a> {
    TokenHeader { token_id: &'a str, token: &'a str },
    AttributeHeader { label: &'a str, content: &'a str },
    Continuation(&'a str),
}

/// A content line of a prop block, with its captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentLine<'a> {
    Role {
        role: &'a str,
        token_id: &'a str,
        height: &'a str,
        text: &'a str,
    },
    Additional {
        token_id: &'a str,
        height: &'a str,
        text: &'a str,
    },
    Text(&'a str),
}

pub fn classify_leaf_line(line: &str) -> LeafLine<'_> {
    if let Some(caps) = TOKEN_HEADER.captures(line) {
        if let (Some(token_id), Some(token)) = (caps.get(1), caps.get(2)) {
            return LeafLine::TokenHeader {
                token_id: token_id.as_str(),
                token: token.as_str(),
            };
        }
    }
    if let Some((label, content)) = attribute_header(line) {
        return LeafLine::AttributeHeader { label, content };
    }
    LeafLine::Continuation(line)
}

/// Label and content of an attribute header, with emphasis markers dropped.
pub fn attribute_header(line: &str) -> Option<(&str, &str)> {
    let caps = ATTRIBUTE_HEADER.captures(line)?;
    let label = caps.get(1).or_else(|| caps.get(3))?;
    let content = caps.get(2).or_else(|| caps.get(4))?;
    Some((label.as_str(), content.as_str()))
}

pub fn is_token_header(line: &str) -> bool {
    TOKEN_HEADER.is_match(line)
}

pub fn is_attribute_header(line: &str) -> bool {
    ATTRIBUTE_HEADER.is_match(line)
}

/// A line that ends the content of the current attribute block.
pub fn is_attribute_boundary(line: &str) -> bool {
    is_attribute_header(line) || is_token_header(line)
}

pub fn classify_argument_line(line: &str) -> ArgumentLine<'_> {
    if let Some(caps) = ADDITIONAL_ARGUMENT.captures(line) {
        if let (Some(token_id), Some(height), Some(text)) = (caps.get(1), caps.get(2), caps.get(3))
        {
            return ArgumentLine::Additional {
                token_id: token_id.as_str(),
                height: height.as_str(),
                text: text.as_str(),
            };
        }
    }
    if let Some(caps) = ROLE_ARGUMENT.captures(line) {
        if let (Some(role), Some(token_id), Some(height), Some(text)) =
            (caps.get(1), caps.get(2), caps.get(3), caps.get(4))
        {
            return ArgumentLine::Role {
                role: role.as_str(),
                token_id: token_id.as_str(),
                height: height.as_str(),
                text: text.as_str(),
            };
        }
    }
    ArgumentLine::Text(line)
}

/// A line that starts a new argument (or a new attribute), ending the current argument's text.
pub fn is_argument_boundary(line: &str) -> bool {
    ADDITIONAL_ARGUMENT.is_match(line) || ROLE_ARGUMENT.is_match(line) || is_attribute_header(line)
}

/// A chain block line indented deep enough to continue the previous mention.
pub fn is_mention_continuation(line: &str) -> bool {
    line.len() >= MENTION_CONTINUATION_INDENT
        && line.as_bytes()[..MENTION_CONTINUATION_INDENT]
            .iter()
            .all(|b| *b == b' ')
}

pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_header() {
        assert_eq!(
            classify_leaf_line("    0          Hello"),
            LeafLine::TokenHeader {
                token_id: "0",
                token: "Hello"
            }
        );
        assert_eq!(
            classify_leaf_line("    12   -LRB-"),
            LeafLine::TokenHeader {
                token_id: "12",
                token: "-LRB-"
            }
        );
    }

    #[test]
    fn test_attribute_header() {
        assert_eq!(
            classify_leaf_line("            sense: 1"),
            LeafLine::AttributeHeader {
                label: "sense",
                content: "1"
            }
        );
        assert_eq!(
            classify_leaf_line("            coref: IDENT        14   0-0   Hello"),
            LeafLine::AttributeHeader {
                label: "coref",
                content: "IDENT        14   0-0   Hello"
            }
        );
    }

    #[test]
    fn test_emphasized_attribute_header() {
        assert_eq!(
            attribute_header("          ! name:  PERSON  0-1  John Smith"),
            Some(("name", " PERSON  0-1  John Smith"))
        );
        assert_eq!(
            attribute_header("          * prop:  say.01"),
            Some(("prop", " say.01"))
        );
    }

    #[test]
    fn test_deeply_indented_text_is_continuation() {
        assert_eq!(
            classify_leaf_line("                   store tomorrow"),
            LeafLine::Continuation("                   store tomorrow")
        );
        // A digit past the fourth column is not a token header
        assert!(!is_token_header("            12 13"));
    }

    #[test]
    fn test_argument_lines() {
        assert_eq!(
            classify_argument_line("ARG0       * -> 0:1,  The dog"),
            ArgumentLine::Role {
                role: "ARG0",
                token_id: "0",
                height: "1",
                text: "The dog"
            }
        );
        assert_eq!(
            classify_argument_line("ARGM-TMP -> 5:2, last year"),
            ArgumentLine::Role {
                role: "ARGM-TMP",
                token_id: "5",
                height: "2",
                text: "last year"
            }
        );
        assert_eq!(
            classify_argument_line("* -> 7:0,  and"),
            ArgumentLine::Additional {
                token_id: "7",
                height: "0",
                text: "and"
            }
        );
        assert_eq!(
            classify_argument_line("-> 9:1, the cat"),
            ArgumentLine::Additional {
                token_id: "9",
                height: "1",
                text: "the cat"
            }
        );
        assert_eq!(
            classify_argument_line("store tomorrow"),
            ArgumentLine::Text("store tomorrow")
        );
    }

    #[test]
    fn test_argument_boundary() {
        assert!(is_argument_boundary("ARG1 * -> 2:2, that"));
        assert!(is_argument_boundary("* -> 2:2, that"));
        assert!(is_argument_boundary("sense: 2"));
        assert!(!is_argument_boundary("went home"));
    }

    #[test]
    fn test_mention_continuation() {
        assert!(is_mention_continuation(&format!("{}the rest", " ".repeat(18))));
        assert!(!is_mention_continuation("    HEAD       0.5-6    Li Peng"));
        assert!(!is_mention_continuation("    "));
    }
}
