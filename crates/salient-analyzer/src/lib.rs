//! Salient Analyzer Layer
//!
//! Pluggable implementations of the `LinguisticAnalyzer` trait from
//! `salient-domain`.
//!
//! # Architecture
//!
//! The extraction engine never tokenizes or recognizes entities itself. It is
//! handed an analyzer at construction time and calls through the trait. This
//! crate supplies the analyzers that ship with Salient.
//!
//! # Analyzers
//!
//! - `MockAnalyzer`: Deterministic, scripted analyzer for testing
//! - `BasicAnalyzer`: Unicode word tokenization, per-language stoplists and
//!   gazetteer-driven entity recognition
//!
//! # Examples
//!
//! ```
//! use salient_analyzer::MockAnalyzer;
//! use salient_domain::traits::LinguisticAnalyzer;
//!
//! let analyzer = MockAnalyzer::new();
//! assert_eq!(analyzer.tokenize("quick brown fox"), vec!["quick", "brown", "fox"]);
//! ```

#![warn(missing_docs)]

pub mod basic;
pub mod config;
pub mod gazetteer;
pub mod stopwords;

use salient_domain::traits::LinguisticAnalyzer as LinguisticAnalyzerTrait;
use salient_domain::{EntityMention, StopList};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;

pub use basic::BasicAnalyzer;
pub use config::AnalyzerConfig;
pub use gazetteer::{Gazetteer, GazetteerEntry};

/// Errors that can occur while building an analyzer
///
/// Every variant is a configuration problem: once an analyzer exists, its
/// analysis methods cannot fail.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// No stopword resources for the requested language
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Gazetteer file could not be read
    #[error("Gazetteer not available: {0}")]
    GazetteerUnavailable(String),

    /// Gazetteer contents could not be parsed
    #[error("Invalid gazetteer: {0}")]
    InvalidGazetteer(String),
}

/// Mock analyzer for deterministic testing
///
/// Tokenizes on whitespace and returns pre-configured entity mentions without
/// any linguistic processing. N-grams are whitespace windows. Calls are
/// counted so tests can assert that analysis results were memoized.
///
/// # Examples
///
/// ```
/// use salient_analyzer::MockAnalyzer;
/// use salient_domain::traits::LinguisticAnalyzer;
/// use salient_domain::EntityMention;
///
/// let analyzer = MockAnalyzer::new()
///     .with_entities(vec![EntityMention::labeled("Paris", "GPE")])
///     .with_stopwords(["the", "and"]);
///
/// assert_eq!(analyzer.entities("anything").len(), 1);
/// assert!(analyzer.default_stoplist().contains("The"));
/// assert_eq!(analyzer.entity_calls(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockAnalyzer {
    default_entities: Vec<EntityMention>,
    entities_by_text: HashMap<String, Vec<EntityMention>>,
    stoplist: StopList,
    tokenize_calls: Arc<AtomicUsize>,
    ngram_calls: Arc<AtomicUsize>,
    entity_calls: Arc<AtomicUsize>,
}

impl MockAnalyzer {
    /// Create a mock with no entities and an empty stoplist
    pub fn new() -> Self {
        Self::default()
    }

    /// Return these mentions for every text without a specific script
    pub fn with_entities(mut self, mentions: Vec<EntityMention>) -> Self {
        self.default_entities = mentions;
        self
    }

    /// Use these words as the default stoplist
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stoplist = StopList::from_words(words);
        self
    }

    /// Return specific mentions for one exact text
    pub fn add_entities(&mut self, text: impl Into<String>, mentions: Vec<EntityMention>) {
        self.entities_by_text.insert(text.into(), mentions);
    }

    /// Number of times `tokenize` was called
    pub fn tokenize_calls(&self) -> usize {
        self.tokenize_calls.load(Ordering::SeqCst)
    }

    /// Number of times `ngrams` was called
    pub fn ngram_calls(&self) -> usize {
        self.ngram_calls.load(Ordering::SeqCst)
    }

    /// Number of times `entities` was called
    pub fn entity_calls(&self) -> usize {
        self.entity_calls.load(Ordering::SeqCst)
    }

    /// Reset every call counter
    pub fn reset_calls(&self) {
        self.tokenize_calls.store(0, Ordering::SeqCst);
        self.ngram_calls.store(0, Ordering::SeqCst);
        self.entity_calls.store(0, Ordering::SeqCst);
    }
}

impl LinguisticAnalyzerTrait for MockAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenize_calls.fetch_add(1, Ordering::SeqCst);
        text.split_whitespace().map(str::to_string).collect()
    }

    fn ngrams(&self, text: &str, n: usize) -> Vec<Vec<String>> {
        self.ngram_calls.fetch_add(1, Ordering::SeqCst);
        if n == 0 {
            return Vec::new();
        }
        let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        words.windows(n).map(<[String]>::to_vec).collect()
    }

    fn entities(&self, text: &str) -> Vec<EntityMention> {
        self.entity_calls.fetch_add(1, Ordering::SeqCst);
        self.entities_by_text
            .get(text)
            .unwrap_or(&self.default_entities)
            .clone()
    }

    fn default_stoplist(&self) -> &StopList {
        &self.stoplist
    }
}
