//! Data models for Crossref works and derived frequency tables.
//!
//! Crossref uses kebab-case keys (`total-results`, `container-title`), so
//! envelope types use `#[serde(rename_all = "kebab-case")]`.

mod frequency;
mod work;

pub use frequency::FrequencyTable;
pub use work::{Affiliation, Author, WorkList, WorkRecord, WorksResponse};
