//! Standard transform definitions
//!
//! Pre-built transforms for the common paths, as `once_cell::sync::Lazy` statics.

use crate::onf::ast::Section;
use crate::onf::lexing::RawSection;
use crate::onf::transforms::stages::{SectionParsing, SectionSplitting};
use crate::onf::transforms::Transform;
use once_cell::sync::Lazy;

pub type SplittingTransform = Transform<String, Vec<RawSection>>;

pub type SectionsTransform = Transform<String, Vec<Section>>;

/// Section splitting: String → Vec<RawSection>
///
/// ```rust,ignore
/// let raw = SECTION_SPLITTING.run(source)?;
/// assert!(raw.iter().all(|section| section.tail.is_some()));
/// ```
pub static SECTION_SPLITTING: Lazy<SplittingTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(SectionSplitting::new()));

/// Full parse: String → Vec<Section>
///
/// This is the transform behind [`DocumentLoader::parse`](crate::onf::loader::DocumentLoader::parse).
pub static STRING_TO_SECTIONS: Lazy<SectionsTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then_transform(&SECTION_SPLITTING)
        .then(SectionParsing::new())
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onf::parsing::parse_document_text;

    #[test]
    fn test_string_to_sections_matches_direct_parse() {
        let source = "Plain sentence:\n---------------\n    Hello .\n".to_string();
        let via_transform = STRING_TO_SECTIONS.run(source.clone()).unwrap();
        assert_eq!(via_transform, parse_document_text(&source).unwrap());
    }

    #[test]
    fn test_section_splitting_without_rules() {
        let raw = SECTION_SPLITTING.run("Tree:\n-----\n    (TOP)".to_string()).unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].tail, None);
    }
}
