//! Section splitting
//!
//!     An ONF file is a sequence of sections. Each section ends with a rule of 120 `=`
//!     followed by its coreference chain index; the next section starts at the first rule of
//!     120 `-` after that. The `-` rule is also the sentence separator, so the search for the
//!     section boundary always starts at the `=` rule, never before it.
//!
//!     The boundary `-` rule is kept at the start of the following section, where it acts as
//!     a (harmless) leading sentence separator.

use once_cell::sync::Lazy;

/// Separates a section body from its chain index.
pub static SECTION_RULE: Lazy<String> = Lazy::new(|| "=".repeat(120));

/// Separates sentences, and marks where the next section starts.
pub static SENTENCE_RULE: Lazy<String> = Lazy::new(|| "-".repeat(120));

/// Cut a document into raw sections.
///
/// A document without any `=` rule is a single section. Never fails.
pub fn split_sections(source: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut last_break = 0;

    loop {
        let section_break = source[last_break..]
            .find(SECTION_RULE.as_str())
            .map(|offset| last_break + offset)
            .and_then(|rule| {
                source[rule..]
                    .find(SENTENCE_RULE.as_str())
                    .map(|offset| rule + offset)
            });

        match section_break {
            Some(section_break) => {
                sections.push(&source[last_break..section_break]);
                last_break = section_break;
            }
            None => {
                sections.push(&source[last_break..]);
                break;
            }
        }
    }

    sections
}

/// Split a raw section at its first `=` rule into a trimmed body and, if present, a trimmed
/// tail. Anything after a second `=` rule is dropped.
pub fn split_body_and_tail(section: &str) -> (&str, Option<&str>) {
    let mut pieces = section.split(SECTION_RULE.as_str());
    let body = pieces.next().unwrap_or_default().trim();
    let tail = pieces.next().map(str::trim);
    (body, tail)
}

/// A section cut out of a document, already split at its `=` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection {
    pub body: String,
    /// The chain index, `None` when the section has no `=` rule
    pub tail: Option<String>,
}

impl RawSection {
    pub fn from_text(section: &str) -> Self {
        let (body, tail) = split_body_and_tail(section);
        Self {
            body: body.to_string(),
            tail: tail.map(str::to_string),
        }
    }
}
