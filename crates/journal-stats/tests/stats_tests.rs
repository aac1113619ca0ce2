//! Frequency aggregator tests on hand-built corpora.

use serde_json::{Value, json};

use journal_stats::models::{FrequencyTable, WorkList, WorkRecord};
use journal_stats::stats::{
    CorpusFrequencies, author_frequencies, institution_frequencies, title_word_frequencies,
};

fn records(items: Vec<Value>) -> Vec<WorkRecord> {
    let page: WorkList =
        serde_json::from_value(json!({"total-results": items.len(), "items": items})).unwrap();
    page.kept_records()
}

fn pairs(table: &FrequencyTable) -> Vec<(&str, u64)> {
    table.iter().collect()
}

// =============================================================================
// Title words
// =============================================================================

#[test]
fn test_title_frequency_scenario() {
    let papers = records(vec![
        json!({"title": ["Deep Learning Methods"]}),
        json!({"title": ["deep learning in practice"]}),
    ]);

    let table = title_word_frequencies(&papers);

    assert_eq!(
        pairs(&table),
        vec![("deep", 2), ("learning", 2), ("methods", 1), ("practice", 1)]
    );
    assert_eq!(table.get("in"), None);
}

#[test]
fn test_title_frequency_uses_first_title_only() {
    let papers = records(vec![json!({"title": ["Primary Title", "Secondary Heading"]})]);

    let table = title_word_frequencies(&papers);

    assert_eq!(table.get("primary"), Some(1));
    assert_eq!(table.get("secondary"), None);
}

#[test]
fn test_untitled_records_never_counted() {
    let papers = records(vec![
        json!({"DOI": "10.1/none", "author": [{"given": "Ghost", "family": "Writer",
               "affiliation": [{"name": "Phantom University"}]}]}),
        json!({"title": ["Visible"]}),
    ]);

    assert_eq!(papers.len(), 1);

    let freqs = CorpusFrequencies::from_papers(&papers);
    assert_eq!(pairs(&freqs.titles), vec![("visible", 1)]);
    assert!(freqs.authors.is_empty());
    assert!(freqs.institutions.is_empty());
}

// =============================================================================
// Authors
// =============================================================================

#[test]
fn test_book_review_authors_counted_separately() {
    let jane = json!({"given": "Jane", "family": "Doe"});
    let papers = records(vec![
        json!({"title": ["Book Review: Foo"], "author": [jane.clone()]}),
        json!({"title": ["A Study of Bar"], "author": [jane.clone()]}),
        json!({"title": ["Another Study"], "author": [jane]}),
    ]);

    let table = author_frequencies(&papers);

    assert_eq!(pairs(&table), vec![("JaneDoe_book_review", 1), ("JaneDoe", 2)]);
}

#[test]
fn test_author_records_without_author_field_skipped() {
    let papers = records(vec![
        json!({"title": ["No Authors Here"]}),
        json!({"title": ["Solo"], "author": [{"family": "Curie"}]}),
        json!({"title": ["Given Only"], "author": [{"given": "Plato"}]}),
        json!({"title": ["Anonymous"], "author": [{"name": "Some Consortium"}]}),
    ]);

    let table = author_frequencies(&papers);

    assert_eq!(pairs(&table), vec![("Curie", 1), ("Plato", 1), ("", 1)]);
}

// =============================================================================
// Institutions
// =============================================================================

#[test]
fn test_institution_scenario() {
    let papers = records(vec![json!({
        "title": ["Physics Paper"],
        "author": [{"given": "A", "family": "B",
                    "affiliation": [{"name": "Dept. of Physics, University of Example, City"}]}]
    })]);

    let table = institution_frequencies(&papers);

    assert_eq!(pairs(&table), vec![("university of example", 1)]);
}

#[test]
fn test_missing_affiliation_list_treated_as_empty() {
    let papers = records(vec![json!({
        "title": ["Mixed Authors"],
        "author": [
            {"given": "No", "family": "Affiliation"},
            {"given": "Null", "family": "Affiliation", "affiliation": null},
            {"given": "Nameless", "family": "Affiliation", "affiliation": [{}]},
            {"given": "Has", "family": "Affiliation", "affiliation": [
                {"name": "MIT"},
                {"name": "School of Law, University of Chicago"}
            ]}
        ]
    })]);

    let table = institution_frequencies(&papers);

    assert_eq!(pairs(&table), vec![("mit", 1), ("university of chicago", 1)]);
}

#[test]
fn test_institutions_accumulate_across_papers() {
    let author = |aff: &str| json!({"given": "X", "family": "Y", "affiliation": [{"name": aff}]});
    let papers = records(vec![
        json!({"title": ["One"], "author": [author("University of Oslo, Norway")]}),
        json!({"title": ["Two"], "author": [author("Institute of Things, University of Oslo")]}),
        json!({"title": ["Three"], "author": [author("CERN")]}),
    ]);

    let table = institution_frequencies(&papers);

    assert_eq!(pairs(&table), vec![("university of oslo", 2), ("cern", 1)]);
}

#[test]
fn test_malformed_affiliations_do_not_drop_authors() {
    let papers = records(vec![json!({
        "title": ["Loose Deposits"],
        "author": [
            {"given": "Jane", "family": "Doe", "affiliation": ["Free text Uni"]},
            {"given": "Raj", "family": "Rao", "affiliation": [{"name": 42}, {"name": "CERN"}]}
        ]
    })]);

    let authors = author_frequencies(&papers);
    let institutions = institution_frequencies(&papers);

    assert_eq!(pairs(&authors), vec![("JaneDoe", 1), ("RajRao", 1)]);
    assert_eq!(pairs(&institutions), vec![("cern", 1)]);
}
