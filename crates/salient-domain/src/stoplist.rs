//! Boundary stoplists

use rustc_hash::FxHashSet;

/// Set of lower-cased words that may not start or end a phrase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopList {
    words: FxHashSet<String>,
}

impl StopList {
    /// Create an empty stoplist (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a stoplist from words, lower-casing each one
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Add more words to the list
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Whether `token` is a stopword, ignoring case
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(&token.to_lowercase())
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        let stoplist = StopList::from_words(["The", "and"]);
        assert!(stoplist.contains("the"));
        assert!(stoplist.contains("THE"));
        assert!(stoplist.contains("And"));
        assert!(!stoplist.contains("fox"));
    }

    #[test]
    fn test_case_variants_collapse() {
        let mut stoplist = StopList::from_words(["The", "the", "THE"]);
        assert_eq!(stoplist.len(), 1);

        stoplist.extend(["tHe", "of"]);
        assert_eq!(stoplist.len(), 2);
    }

    #[test]
    fn test_empty_filters_nothing() {
        let stoplist = StopList::empty();
        assert!(stoplist.is_empty());
        assert!(!stoplist.contains("the"));
    }
}
