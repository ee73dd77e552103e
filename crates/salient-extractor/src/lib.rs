//! Salient Extractor
//!
//! Extracts salient multi-word phrases and named-entity frequencies from free
//! text, ranked by importance.
//!
//! # Overview
//!
//! Phrases are counted as n-grams over a configurable set of gram lengths.
//! A window is kept only when neither its first nor its last word is a
//! stopword. Shorter phrases wholly contained in a longer, at least as
//! frequent phrase are then distilled away. Entities are counted per mention,
//! merged across labels, with chosen labels excluded.
//!
//! # Architecture
//!
//! ```text
//! raw text → normalize → Document ─┬─ n-grams → count → distill → rank → phrases
//!                                  └─ mentions → score → rank → entities
//! ```
//!
//! Tokenization and entity recognition are delegated to a
//! `LinguisticAnalyzer` supplied at construction.
//!
//! # Example Usage
//!
//! ```
//! use salient_analyzer::MockAnalyzer;
//! use salient_domain::EntityMention;
//! use salient_extractor::{ExtractionRequest, Extractor, ExtractorConfig};
//!
//! let analyzer = MockAnalyzer::new()
//!     .with_stopwords(["the", "and"])
//!     .with_entities(vec![EntityMention::labeled("Paris", "GPE")]);
//! let extractor = Extractor::new(analyzer, ExtractorConfig::default()).unwrap();
//!
//! let request = ExtractionRequest::new("the quick fox and the quick fox jumped")
//!     .with_grams([2]);
//! let result = extractor.extract(request).unwrap();
//!
//! assert_eq!(result.phrases.pairs()[0], ("quick fox", 2));
//! assert_eq!(result.entities.pairs(), vec![("Paris", 1)]);
//! ```

#![warn(missing_docs)]

mod config;
mod counter;
mod distill;
mod document;
mod entities;
mod error;
mod extractor;
mod normalize;
mod range;
mod types;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use counter::count_ngrams;
pub use distill::{distill, is_contained};
pub use document::{Document, Ngrams};
pub use entities::score_entities;
pub use error::ExtractorError;
pub use extractor::{ordered_ngrams, scored_entities, Extractor};
pub use normalize::{normalize, render, DisplayText, NormalizedText, APOSTROPHE_PLACEHOLDER};
pub use range::{GramRange, MAX_GRAM_LENGTH};
pub use types::{ExtractionMetadata, ExtractionRequest, ExtractionResult};
