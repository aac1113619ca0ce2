//! Title word frequency.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{FrequencyTable, WorkRecord};

/// Words this short or shorter are dropped ("a", "of", "in", ...).
pub const MIN_WORD_LEN: usize = 2;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// Lower-cased title words longer than [`MIN_WORD_LEN`] characters.
#[must_use]
pub fn title_words(title: &str) -> Vec<String> {
    WORD.find_iter(title)
        .map(|m| m.as_str().to_lowercase())
        .filter(|word| word.chars().count() > MIN_WORD_LEN)
        .collect()
}

/// Count title words across the corpus.
#[must_use]
pub fn title_word_frequencies(papers: &[WorkRecord]) -> FrequencyTable {
    tracing::info!(papers = papers.len(), "Getting frequency of words in titles");

    papers
        .iter()
        .filter_map(WorkRecord::title)
        .flat_map(title_words)
        .collect()
}
