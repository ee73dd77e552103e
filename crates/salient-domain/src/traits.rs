//! Trait definitions for external interactions
//!
//! These traits define the boundary between the extraction engine and the
//! linguistic tooling it relies on. Implementations live in other crates.

use crate::{EntityMention, StopList};

/// Tokenization and named-entity recognition over normalized text
///
/// Implemented by the infrastructure layer (salient-analyzer).
///
/// Loading whatever model backs an analyzer happens when the implementation
/// is constructed, and that is the only place it may fail. The per-call
/// methods below are infallible: an analyzer that has been built can always
/// analyze.
pub trait LinguisticAnalyzer {
    /// Split text into word tokens, dropping punctuation
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Every window of `n` consecutive tokens, in document order
    ///
    /// Yields nothing when `n` is zero or exceeds the token count.
    fn ngrams(&self, text: &str, n: usize) -> Vec<Vec<String>> {
        if n == 0 {
            return Vec::new();
        }
        self.tokenize(text)
            .windows(n)
            .map(|window| window.to_vec())
            .collect()
    }

    /// Named-entity mentions, in document order
    fn entities(&self, text: &str) -> Vec<EntityMention>;

    /// Stopwords appropriate for the analyzer's language
    fn default_stoplist(&self) -> &StopList;
}

impl<A: LinguisticAnalyzer + ?Sized> LinguisticAnalyzer for std::sync::Arc<A> {
    fn tokenize(&self, text: &str) -> Vec<String> {
        (**self).tokenize(text)
    }

    fn ngrams(&self, text: &str, n: usize) -> Vec<Vec<String>> {
        (**self).ngrams(text, n)
    }

    fn entities(&self, text: &str) -> Vec<EntityMention> {
        (**self).entities(text)
    }

    fn default_stoplist(&self) -> &StopList {
        (**self).default_stoplist()
    }
}
