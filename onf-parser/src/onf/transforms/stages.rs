//! Individual transformation stages
//!
//! Each stage implements [`Runnable`] and can be chained into a [`Transform`](super::Transform).

use crate::onf::ast::Section;
use crate::onf::lexing::{split_sections, RawSection};
use crate::onf::parsing::parse_section_parts;
use crate::onf::transforms::{Runnable, TransformError};
use tracing::debug;

/// Cuts a document into raw sections, each split into body and chain index. Never fails.
pub struct SectionSplitting;

impl SectionSplitting {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SectionSplitting {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, Vec<RawSection>> for SectionSplitting {
    fn run(&self, input: String) -> Result<Vec<RawSection>, TransformError> {
        let sections: Vec<RawSection> = split_sections(&input)
            .into_iter()
            .map(RawSection::from_text)
            .collect();
        debug!(sections = sections.len(), "split document");
        Ok(sections)
    }
}

/// Parses raw sections into records. The first failing section aborts the stage.
pub struct SectionParsing;

impl SectionParsing {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SectionParsing {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Vec<RawSection>, Vec<Section>> for SectionParsing {
    fn run(&self, input: Vec<RawSection>) -> Result<Vec<Section>, TransformError> {
        input
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                parse_section_parts(&raw.body, raw.tail.as_deref()).map_err(|err| {
                    TransformError::stage_failed(&format!("section {}", index), err)
                })
            })
            .collect()
    }
}
