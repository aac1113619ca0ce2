//! Institution frequency.

use crate::models::{FrequencyTable, WorkRecord};

const UNIVERSITY: &str = "university";

/// Normalize a free-text affiliation to an institution key.
///
/// Affiliations list department, school and city around the institution,
/// so the last comma-separated part mentioning a university wins. Without
/// one, the whole lower-cased string is the key.
#[must_use]
pub fn institution_key(affiliation: &str) -> String {
    let lower = affiliation.to_lowercase();
    let chosen = lower.split(',').rfind(|part| part.contains(UNIVERSITY)).unwrap_or(lower.as_str());
    chosen.strip_prefix(' ').unwrap_or(chosen).to_string()
}

/// Count institutions across the corpus.
///
/// Authors without an affiliation list contribute nothing.
#[must_use]
pub fn institution_frequencies(papers: &[WorkRecord]) -> FrequencyTable {
    tracing::info!(papers = papers.len(), "Getting frequency of institutions");

    papers
        .iter()
        .flat_map(WorkRecord::authors)
        .flat_map(|author| author.affiliation.unwrap_or_default())
        .filter_map(|affiliation| affiliation.name)
        .map(|name| institution_key(&name))
        .collect()
}
