//! Work records matching the Crossref `/works` response schema.
//!
//! Works are kept as loose JSON maps rather than typed structs: the CSV dump
//! reproduces whatever Crossref sent for each allow-listed field, and only
//! the handful of fields the frequency tables read get typed accessors.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::config::fields;

/// Top-level `/works` response envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorksResponse {
    /// The page of results.
    pub message: WorkList,
}

/// One page of works.
///
/// Both fields are required: a `message` without them is a malformed
/// response, not an empty journal.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkList {
    /// Total number of works matching the query, across all pages.
    pub total_results: u64,

    /// Raw works on this page.
    pub items: Vec<Map<String, Value>>,
}

impl WorkList {
    /// Filter and project every item on the page, dropping untitled works.
    #[must_use]
    pub fn kept_records(&self) -> Vec<WorkRecord> {
        self.items.iter().filter_map(WorkRecord::from_item).collect()
    }
}

/// A kept work: titled, and projected down to [`fields::KEEP`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkRecord(Map<String, Value>);

impl WorkRecord {
    /// Keep a raw API item if it has a non-empty title, projected to the allow-list.
    #[must_use]
    pub fn from_item(item: &Map<String, Value>) -> Option<Self> {
        if !title_of(item).is_some_and(|t| !t.is_empty()) {
            return None;
        }
        Some(Self::project(item, fields::KEEP))
    }

    /// Copy only the keys present in both `keys` and `item`.
    ///
    /// Absent keys are omitted, never defaulted.
    #[must_use]
    pub fn project(item: &Map<String, Value>, keys: &[&str]) -> Self {
        let projected = keys
            .iter()
            .filter_map(|&key| item.get(key).map(|v| (key.to_string(), v.clone())))
            .collect();
        Self(projected)
    }

    /// Re-project an existing record. Projecting twice is a no-op.
    #[must_use]
    pub fn reproject(&self, keys: &[&str]) -> Self {
        Self::project(&self.0, keys)
    }

    /// Get the work title (first entry of Crossref's `title` array).
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        title_of(&self.0)
    }

    /// Get the DOI if available.
    #[must_use]
    pub fn doi(&self) -> Option<&str> {
        self.0.get("DOI").and_then(Value::as_str)
    }

    /// Check whether the record carries an `author` field at all.
    #[must_use]
    pub fn has_authors(&self) -> bool {
        self.0.contains_key("author")
    }

    /// Decode the `author` list.
    ///
    /// Entries that are not author objects are skipped.
    #[must_use]
    pub fn authors(&self) -> Vec<Author> {
        match self.0.get("author") {
            Some(Value::Array(entries)) => entries
                .iter()
                .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Get a raw field value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Title of a raw item: first string of a `title` array, or a bare string.
fn title_of(item: &Map<String, Value>) -> Option<&str> {
    match item.get("title")? {
        Value::Array(titles) => titles.first()?.as_str(),
        Value::String(title) => Some(title),
        _ => None,
    }
}

/// An author entry on a work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Given name(s).
    #[serde(default)]
    pub given: Option<String>,

    /// Family name.
    #[serde(default)]
    pub family: Option<String>,

    /// Stated affiliations. `None` when Crossref omitted the list.
    ///
    /// Entries that are not affiliation objects are skipped.
    #[serde(default, deserialize_with = "lenient_affiliations")]
    pub affiliation: Option<Vec<Affiliation>>,
}

impl Author {
    /// Given and family name joined with no separator, or whichever exists.
    #[must_use]
    pub fn combined_name(&self) -> String {
        match (&self.given, &self.family) {
            (Some(given), Some(family)) => format!("{given}{family}"),
            (Some(given), None) => given.clone(),
            (None, Some(family)) => family.clone(),
            (None, None) => String::new(),
        }
    }

    /// Stated affiliations; an omitted list reads as empty.
    #[must_use]
    pub fn affiliations(&self) -> &[Affiliation] {
        self.affiliation.as_deref().unwrap_or_default()
    }
}

/// A free-text institutional affiliation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affiliation {
    /// Institution name as deposited.
    #[serde(default)]
    pub name: Option<String>,
}

/// Decode an `affiliation` list, dropping entries that do not decode.
///
/// A value that is not an array reads as an omitted list.
fn lenient_affiliations<'de, D>(deserializer: D) -> Result<Option<Vec<Affiliation>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(entries)) => Some(
            entries.into_iter().filter_map(|entry| serde_json::from_value(entry).ok()).collect(),
        ),
        _ => None,
    })
}
