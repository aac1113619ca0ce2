//! Insertion-ordered frequency counts.

use std::collections::HashMap;

/// Counts per normalized key, iterated in first-seen order.
///
/// Output files list keys in the order they were discovered in the corpus,
/// so the map keeps a `Vec` of entries alongside a key index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `key`.
    pub fn increment(&mut self, key: impl Into<String>) {
        let key = key.into();
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1 += 1;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, 1));
        }
    }

    /// Count for `key`, if it was ever seen.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<u64> {
        self.index.get(key).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterate (key, count) pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }
}

impl<K: Into<String>> FromIterator<K> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.increment(key);
        }
        table
    }
}
