//! Frequency aggregators: title words, authors, institutions.
//!
//! Each routine takes the full kept-record list and builds its own
//! [`FrequencyTable`]; nothing is shared between calls.

mod authors;
mod institutions;
mod titles;

pub use authors::{BOOK_REVIEW_SUFFIX, author_frequencies, author_key};
pub use institutions::{institution_frequencies, institution_key};
pub use titles::{MIN_WORD_LEN, title_words, title_word_frequencies};

use crate::models::FrequencyTable;

/// The three tables derived from one corpus.
#[derive(Debug, Clone, Default)]
pub struct CorpusFrequencies {
    /// Word counts across titles.
    pub titles: FrequencyTable,
    /// Author byline counts.
    pub authors: FrequencyTable,
    /// Institution counts.
    pub institutions: FrequencyTable,
}

impl CorpusFrequencies {
    /// Run all three aggregators over `papers`.
    #[must_use]
    pub fn from_papers(papers: &[crate::models::WorkRecord]) -> Self {
        Self {
            titles: title_word_frequencies(papers),
            authors: author_frequencies(papers),
            institutions: institution_frequencies(papers),
        }
    }
}
