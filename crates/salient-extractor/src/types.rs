//! Request and response types for extraction

use salient_domain::RankedList;
use serde::Serialize;

/// Request to extract phrases and entities from text
///
/// Every `Option` left as `None` falls back to the extractor's configuration.
#[derive(Debug, Clone, Default)]
pub struct ExtractionRequest {
    /// Raw text to analyze
    pub text: String,

    /// Source identifier carried into the metadata
    pub source_id: String,

    /// Gram lengths to count
    pub grams: Option<Vec<usize>>,

    /// Boundary stoplist replacing the configured one
    pub stopwords: Option<Vec<String>>,

    /// Entity labels to exclude
    pub exclude_labels: Option<Vec<String>>,

    /// Whether to distill phrases
    pub distill: Option<bool>,
}

impl ExtractionRequest {
    /// Request with every option taken from the configuration
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the source identifier
    pub fn with_source_id(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = source_id.into();
        self
    }

    /// Count these gram lengths
    pub fn with_grams(mut self, grams: impl IntoIterator<Item = usize>) -> Self {
        self.grams = Some(grams.into_iter().collect());
        self
    }

    /// Use exactly these boundary stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Exclude these entity labels
    pub fn excluding<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Keep phrases subsumed by longer ones
    pub fn without_distillation(mut self) -> Self {
        self.distill = Some(false);
        self
    }
}

/// Result of an extraction operation
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Phrases, most frequent first
    pub phrases: RankedList,

    /// Entities, most frequent first
    pub entities: RankedList,

    /// Metadata about the extraction
    pub metadata: ExtractionMetadata,
}

/// Metadata about an extraction operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionMetadata {
    /// Source identifier
    pub source_id: String,

    /// Gram lengths counted, ascending
    pub grams: Vec<usize>,

    /// Tokens in the document
    pub token_count: usize,

    /// Qualifying n-gram windows across all lengths
    pub windows_counted: usize,

    /// Distinct phrases before distillation
    pub phrases_before_distillation: usize,

    /// Distinct phrases after distillation
    pub phrases_after_distillation: usize,

    /// Mentions returned by the analyzer
    pub mentions_seen: usize,

    /// Mentions counted after label exclusion and blank removal
    pub mentions_kept: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
