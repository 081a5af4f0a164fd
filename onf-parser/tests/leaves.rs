//! Leaves blocks and their attributes over verified samples

use onf_parser::onf::ast::TokenSpan;
use onf_parser::onf::testing::assert_sections;
use onf_parser::onf::testing::samples::Samples;
use onf_parser::parse_document_text;

#[test]
fn test_leaves_01_bare_leaves() {
    let sections = Samples::leaves(1).parse();

    assert_sections(&sections).section(0, |section| {
        section.sentence_count(1).sentence(0, |sentence| {
            sentence
                .fields(&["leaves"])
                .leaf_count(2)
                .leaf(0, |leaf| {
                    leaf.token_id(0).token("Hello").bare();
                })
                .leaf(1, |leaf| {
                    leaf.token_id(1).token("world").bare();
                });
        });
    });
}

#[test]
fn test_leaves_02_annotated_leaves() {
    let sections = Samples::leaves(2).parse();

    assert_sections(&sections).section(0, |section| {
        section.sentence(0, |sentence| {
            sentence
                .leaf_count(13)
                .leaf(0, |leaf| {
                    leaf.token("The")
                        .coref("IDENT", "4", (0, 1))
                        .coref_tokens(&["The", "kids"]);
                })
                .leaf(1, |leaf| {
                    leaf.token("kids").sense("1");
                })
                .leaf(2, |leaf| {
                    leaf.token("ate")
                        .sense("eat-v.1")
                        .prop_label("eat.01")
                        .prop_roles(&["ARG0", "ARG1", "v"])
                        .prop_arg("v", 0, 2, 0, &["ate"])
                        .prop_arg("ARG0", 0, 0, 1, &["The kids"])
                        .prop_arg("ARG1", 0, 3, 0, &["apples"])
                        .prop_arg("ARG1", 1, 5, 0, &["pears"])
                        .prop_arg("ARG1", 2, 7, 2, &["the ripe plums that", "fell"]);
                })
                .leaf(7, |leaf| {
                    leaf.token("the")
                        .coref("IDENT", "9", (7, 10))
                        .coref_tokens(&["the", "ripe", "plums", "that", "fell"]);
                })
                .leaf(11, |leaf| {
                    leaf.token("fell")
                        .prop_label("fall.01")
                        .prop_arg("ARG1", 0, 10, 0, &["that"])
                        .prop_arg("ARG1", 1, 7, 1, &["the ripe plums"]);
                })
                .leaf(12, |leaf| {
                    leaf.token_id(12).token(".").bare();
                });
        });
    });
}

#[test]
fn test_leaves_02_argument_counts() {
    let sections = Samples::leaves(2).parse();
    let sentence = &sections[0].sentences[0];

    let ate = sentence.leaf(2).and_then(|leaf| leaf.prop.as_ref()).unwrap();
    assert_eq!(ate.arg_count(), 5);
    assert_eq!(ate.role("ARG1").len(), 3);
    assert!(ate.role("ARG2").is_empty());

    let annotated: Vec<usize> = sentence
        .iter_leaves()
        .filter(|leaf| leaf.is_annotated())
        .map(|leaf| leaf.token_id)
        .collect();
    assert_eq!(annotated, vec![0, 1, 2, 7, 11]);
}

#[test]
fn test_chains_01_coref_on_leaves() {
    let sections = Samples::chains(1).parse();

    assert_sections(&sections).section(0, |section| {
        section.sentence(0, |sentence| {
            sentence
                .leaf(0, |leaf| {
                    leaf.coref("APPOS HEAD", "3", (0, 1))
                        .name("PERSON", (0, 1), &["Li", "Peng"]);
                })
                .leaf(3, |leaf| {
                    leaf.coref("APPOS ATTRIB", "3", (3, 4))
                        .name("NORP", (3, 3), &["Chinese"]);
                });
        });
    });

    let coref = sections[0].sentences[0].leaves.as_ref().unwrap()[0]
        .coref
        .as_ref()
        .unwrap();
    assert!(coref.is_apposition());
    assert_eq!(coref.token_range, TokenSpan::new(0, 1));
}

#[test]
fn test_name_range_up_to_usize_max() {
    let source = format!(
        "Leaves:\n-------\n    0   x\n            name:  PERSON  0-{}  x\n",
        usize::MAX
    );
    let sections = parse_document_text(&source).unwrap();
    let name = sections[0].sentences[0].leaves.as_ref().unwrap()[0]
        .name
        .as_ref()
        .unwrap();

    assert_eq!(name.token_range, TokenSpan::new(0, usize::MAX));
    assert_eq!(name.token_range.len(), usize::MAX);
}
