//! Testing utilities for section assertions
//!
//!     ONF is easy to get subtly wrong by hand: column offsets matter for mention lines, the
//!     rules must be exactly 120 characters, and attribute continuations depend on
//!     indentation. A test written against a made-up string that is slightly off ends up
//!     tuning the parser to the wrong input. Tests therefore follow two rules:
//!
//!         1. Document-level tests use verified sample files (via [Samples](samples::Samples)).
//!         2. Results are checked with the fluent assertions (via [assert_sections]).
//!
//!     Small inline strings are fine for unit tests of a single line pattern or field parser.
//!
//! Using Samples
//!
//!     ```rust,ignore
//!     use onf_parser::onf::testing::samples::Samples;
//!
//!     let sections = Samples::leaves(2).parse();
//!     let source = Samples::chains(1).source();
//!     let err = Samples::invalid(1).try_parse().unwrap_err();
//!     ```
//!
//!     Categories: `sentences`, `leaves`, `chains`, `documents` and `invalid`.
//!
//! Using assert_sections
//!
//!     ```rust,ignore
//!     use onf_parser::onf::testing::assert_sections;
//!
//!     assert_sections(&sections)
//!         .section(0, |section| {
//!             section.sentence(0, |sentence| {
//!                 sentence
//!                     .plain("Hello world .")
//!                     .leaf(1, |leaf| {
//!                         leaf.token("world").sense("1");
//!                     });
//!             });
//!         });
//!     ```
//!
//!     Failures report the path of the record that differs, e.g.
//!     `sections[0].sentences[1].leaves[3]: sense`.

mod assertions;
mod matchers;
pub mod samples;

pub use assertions::{
    assert_sections, ChainAssertion, LeafAssertion, SectionAssertion, SectionsAssertion,
    SentenceAssertion,
};
pub use matchers::TextMatch;
