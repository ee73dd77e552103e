//! Frequency tables - text keys mapped to occurrence counts
//!
//! A [`FrequencyTable`] remembers the order in which each key was first
//! inserted. Ranking relies on that order to break ties, so the table is
//! backed by an insertion-ordered map rather than a hash map.

use indexmap::IndexMap;

/// Mapping from text to an occurrence count
///
/// Invariant: every stored count is at least 1. Entries are removed, never
/// zeroed.
///
/// # Examples
///
/// ```
/// use salient_domain::FrequencyTable;
///
/// let mut table = FrequencyTable::new();
/// table.increment("quick fox");
/// table.increment("lazy dog");
/// table.increment("quick fox");
///
/// assert_eq!(table.get("quick fox"), Some(2));
/// assert_eq!(table.total(), 3);
/// assert_eq!(table.keys().collect::<Vec<_>>(), vec!["quick fox", "lazy dog"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: IndexMap<String, usize>,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `key`
    pub fn increment(&mut self, key: impl Into<String>) {
        self.add(key, 1);
    }

    /// Add `count` occurrences of `key`
    ///
    /// A zero count is ignored so the table never holds an empty entry.
    pub fn add(&mut self, key: impl Into<String>, count: usize) {
        if count == 0 {
            return;
        }
        *self.counts.entry(key.into()).or_insert(0) += count;
    }

    /// Count for `key`, if present
    pub fn get(&self, key: &str) -> Option<usize> {
        self.counts.get(key).copied()
    }

    /// Whether `key` is present
    pub fn contains(&self, key: &str) -> bool {
        self.counts.contains_key(key)
    }

    /// Remove `key`, keeping the relative order of the remaining keys
    pub fn remove(&mut self, key: &str) -> Option<usize> {
        self.counts.shift_remove(key)
    }

    /// Keep only the entries for which `keep` returns true
    pub fn retain(&mut self, mut keep: impl FnMut(&str, usize) -> bool) {
        self.counts.retain(|key, count| keep(key.as_str(), *count));
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Keys in first-insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.counts.keys().map(String::as_str)
    }

    /// Entries in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(key, count)| (key.as_str(), *count))
    }
}

impl<K: Into<String>> FromIterator<(K, usize)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (K, usize)>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        table.extend(iter);
        table
    }
}

impl<K: Into<String>> Extend<(K, usize)> for FrequencyTable {
    fn extend<I: IntoIterator<Item = (K, usize)>>(&mut self, iter: I) {
        for (key, count) in iter {
            self.add(key, count);
        }
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (String, usize);
    type IntoIter = indexmap::map::IntoIter<String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}
