//! Ranking policy - ordering frequency tables for presentation

use crate::frequency::FrequencyTable;

/// A single ranked result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    /// Phrase or entity text
    pub key: String,

    /// Number of occurrences
    pub count: usize,
}

/// Results ordered by count, most frequent first
///
/// Entries with equal counts keep the order in which their keys were first
/// inserted into the source table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedList {
    entries: Vec<RankedEntry>,
}

impl RankedList {
    /// Entries in rank order
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    /// Iterate over entries in rank order
    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keep only the `n` highest-ranked entries
    pub fn top(mut self, n: usize) -> Self {
        self.entries.truncate(n);
        self
    }

    /// Keys in rank order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// `(key, count)` pairs in rank order
    pub fn pairs(&self) -> Vec<(&str, usize)> {
        self.entries
            .iter()
            .map(|e| (e.key.as_str(), e.count))
            .collect()
    }

    /// Consume the list into its entries
    pub fn into_entries(self) -> Vec<RankedEntry> {
        self.entries
    }
}

impl IntoIterator for RankedList {
    type Item = RankedEntry;
    type IntoIter = std::vec::IntoIter<RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Order a table by count descending, ties in first-insertion order
///
/// # Examples
///
/// ```
/// use salient_domain::{rank, FrequencyTable};
///
/// let table: FrequencyTable = [("b", 1), ("a", 3), ("c", 1)].into_iter().collect();
/// let ranked = rank(&table);
/// assert_eq!(ranked.pairs(), vec![("a", 3), ("b", 1), ("c", 1)]);
/// ```
pub fn rank(table: &FrequencyTable) -> RankedList {
    let mut entries: Vec<RankedEntry> = table
        .iter()
        .map(|(key, count)| RankedEntry {
            key: key.to_string(),
            count,
        })
        .collect();

    // sort_by is stable: equal counts stay in table order
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    RankedList { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_ranks_empty() {
        let ranked = rank(&FrequencyTable::new());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let table: FrequencyTable = [("z", 2), ("m", 5), ("a", 2), ("q", 2)]
            .into_iter()
            .collect();
        let ranked = rank(&table);
        assert_eq!(ranked.keys().collect::<Vec<_>>(), vec!["m", "z", "a", "q"]);
    }

    #[test]
    fn test_top_truncates() {
        let table: FrequencyTable = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        let ranked = rank(&table).top(2);
        assert_eq!(ranked.pairs(), vec![("c", 3), ("b", 2)]);

        let all = rank(&table).top(10);
        assert_eq!(all.len(), 3);
    }
}
