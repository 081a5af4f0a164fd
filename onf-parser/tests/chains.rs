//! Coreference chain index over verified samples

use onf_parser::onf::testing::assert_sections;
use onf_parser::onf::testing::samples::Samples;

#[test]
fn test_chains_01_ident_and_appos() {
    let sections = Samples::chains(1).parse();

    assert_sections(&sections).section_count(1).section(0, |section| {
        section
            .sentence_count(2)
            .chain_count(3)
            .chain("3", |chain| {
                chain
                    .chain_type("APPOS")
                    .mention_count(2)
                    .mention(0, 0, (0, 1), "Li Peng")
                    .mention(1, 0, (3, 4), "Chinese Premier");
            })
            .chain("5", |chain| {
                chain
                    .chain_type("IDENT")
                    .mention_count(2)
                    .mention(0, 0, (8, 12), "the capital of the province")
                    .mention(1, 1, (2, 2), "it");
            })
            .chain("7", |chain| {
                chain.mention_count(2).mention(1, 1, (0, 0), "He");
            });
    });
}

#[test]
fn test_chains_01_soft_links_resolve() {
    let sections = Samples::chains(1).parse();
    let section = &sections[0];

    assert!(section.dangling_chain_refs().is_empty());
    for (_, leaf) in section.iter_leaves() {
        if let Some(coref) = &leaf.coref {
            assert!(section.chain(&coref.chain_id).is_some());
        }
    }
    let ids: Vec<&str> = section.iter_chains().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "5", "7"]);
}

#[test]
fn test_chains_02_empty_index() {
    let sections = Samples::chains(2).parse();

    assert_sections(&sections).section(0, |section| {
        section.sentence_count(1).chain_count(0);
    });
    assert_eq!(sections[0].chains, Some(Vec::new()));
}

#[test]
fn test_documents_01_dangling_reference_across_sections() {
    // Chain ids are per section: section 1 reuses id 2 with its own index
    let sections = Samples::documents(1).parse();
    assert!(sections[1].chain("2").is_some());
    assert!(sections[1].chain("1").is_none());
    assert!(sections[1].dangling_chain_refs().is_empty());
}

#[test]
fn test_chains_01_index_summary() {
    let sections = Samples::chains(1).parse();
    let summary: Vec<String> = sections[0]
        .iter_chains()
        .flat_map(|chain| {
            std::iter::once(chain.to_string())
                .chain(chain.mentions.iter().map(|mention| format!("  {mention}")))
        })
        .collect();

    insta::assert_snapshot!(summary.join("\n"), @r"
    Chain 3 (APPOS) [2 mentions]
      0.0-1 Li Peng
      0.3-4 Chinese Premier
    Chain 5 (IDENT) [2 mentions]
      0.8-12 the capital of the province
      1.2-2 it
    Chain 7 (IDENT) [2 mentions]
      0.0-1 Li Peng
      1.0-0 He
    ");
}
