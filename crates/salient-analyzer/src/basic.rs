//! Basic Analyzer Implementation
//!
//! A self-contained analyzer that needs no external model:
//!
//! - Tokens are Unicode words (UAX #29), punctuation dropped
//! - The default stoplist comes from the configured language
//! - Entities come from an optional gazetteer
//!
//! # Examples
//!
//! ```
//! use salient_analyzer::{AnalyzerConfig, BasicAnalyzer, GazetteerEntry};
//! use salient_domain::traits::LinguisticAnalyzer;
//!
//! let analyzer = BasicAnalyzer::new(AnalyzerConfig::default())
//!     .unwrap()
//!     .with_entries(vec![GazetteerEntry {
//!         text: "Paris".to_string(),
//!         label: "GPE".to_string(),
//!     }]);
//!
//! assert_eq!(analyzer.tokenize("Hello, Paris!"), vec!["Hello", "Paris"]);
//! assert_eq!(analyzer.entities("Hello, Paris!")[0].text, "Paris");
//! ```

use crate::config::AnalyzerConfig;
use crate::gazetteer::{Gazetteer, GazetteerEntry};
use crate::stopwords::stoplist_for;
use crate::AnalyzerError;
use salient_domain::traits::LinguisticAnalyzer as LinguisticAnalyzerTrait;
use salient_domain::{EntityMention, StopList};
use tracing::{debug, info};
use unicode_segmentation::UnicodeSegmentation;

/// Analyzer backed by Unicode segmentation and a gazetteer
#[derive(Debug, Clone)]
pub struct BasicAnalyzer {
    language: String,
    stoplist: StopList,
    gazetteer: Gazetteer,
    case_insensitive: bool,
}

impl BasicAnalyzer {
    /// Build an analyzer, loading its stoplist and gazetteer
    ///
    /// All resource loading happens here. A failure means the analyzer is
    /// misconfigured and no analysis should be attempted.
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        let stoplist = stoplist_for(&config.language)?;

        let gazetteer = match &config.gazetteer {
            Some(path) => Gazetteer::load(path, config.case_insensitive_entities)?,
            None => Gazetteer::new(Vec::new(), config.case_insensitive_entities),
        };

        info!(
            "Analyzer ready: language '{}', {} stopwords, {} gazetteer entries",
            config.language,
            stoplist.len(),
            gazetteer.len()
        );

        Ok(Self {
            language: config.language,
            stoplist,
            gazetteer,
            case_insensitive: config.case_insensitive_entities,
        })
    }

    /// English analyzer without a gazetteer
    pub fn english() -> Result<Self, AnalyzerError> {
        Self::new(AnalyzerConfig::default())
    }

    /// Replace the gazetteer with in-memory entries
    ///
    /// Matching follows the configured `case_insensitive_entities`.
    pub fn with_entries(mut self, entries: Vec<GazetteerEntry>) -> Self {
        self.gazetteer = Gazetteer::new(entries, self.case_insensitive);
        self
    }

    /// Replace the gazetteer
    pub fn with_gazetteer(mut self, gazetteer: Gazetteer) -> Self {
        self.gazetteer = gazetteer;
        self
    }

    /// The configured language
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl LinguisticAnalyzerTrait for BasicAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let tokens: Vec<String> = text.unicode_words().map(str::to_string).collect();
        debug!("Tokenized {} chars into {} tokens", text.len(), tokens.len());
        tokens
    }

    fn entities(&self, text: &str) -> Vec<EntityMention> {
        self.gazetteer.recognize(text)
    }

    fn default_stoplist(&self) -> &StopList {
        &self.stoplist
    }
}
