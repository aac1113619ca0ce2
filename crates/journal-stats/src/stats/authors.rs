//! Author byline frequency.

use crate::models::{Author, FrequencyTable, WorkRecord};

/// Appended to author keys on book review papers.
pub const BOOK_REVIEW_SUFFIX: &str = "_book_review";

const BOOK_REVIEW_PREFIX: &str = "book review";

/// Key for one author on one paper.
///
/// Names are joined with all whitespace removed. Book reviewers are counted
/// separately from authors of regular papers.
#[must_use]
pub fn author_key(author: &Author, paper_title: &str) -> String {
    let mut key: String = author.combined_name().chars().filter(|c| !c.is_whitespace()).collect();
    if is_book_review(paper_title) {
        key.push_str(BOOK_REVIEW_SUFFIX);
    }
    key
}

fn is_book_review(title: &str) -> bool {
    title.to_lowercase().starts_with(BOOK_REVIEW_PREFIX)
}

/// Count author bylines across the corpus.
#[must_use]
pub fn author_frequencies(papers: &[WorkRecord]) -> FrequencyTable {
    tracing::info!(papers = papers.len(), "Getting frequency of authors");

    let mut table = FrequencyTable::new();
    for paper in papers.iter().filter(|p| p.has_authors()) {
        let title = paper.title().unwrap_or_default();
        for author in paper.authors() {
            table.increment(author_key(&author, title));
        }
    }
    table
}
