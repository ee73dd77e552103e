//! Salient Domain Layer
//!
//! This crate contains the data model shared by every other Salient crate:
//! the vocabulary of entity labels, the frequency tables built while counting,
//! the ranked lists handed back to callers, and the trait boundary behind which
//! the linguistic analyzer lives.
//!
//! ## Key Concepts
//!
//! - **Frequency table**: phrase or entity text mapped to an occurrence count,
//!   remembering the order in which keys were first seen
//! - **Ranked list**: count-descending view of a table, stable for ties
//! - **Entity mention**: a span of text tagged with an [`EntityLabel`]
//! - **Linguistic analyzer**: tokenization and entity recognition, consumed
//!   through [`traits::LinguisticAnalyzer`] and never implemented here
//!
//! ## Architecture
//!
//! - Pure data and algorithms, no I/O
//! - Analyzer implementations live in `salient-analyzer`
//! - The extraction engine lives in `salient-extractor`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod frequency;
pub mod label;
pub mod mention;
pub mod ranking;
pub mod stoplist;
pub mod traits;

// Re-exports for convenience
pub use frequency::FrequencyTable;
pub use label::EntityLabel;
pub use mention::EntityMention;
pub use ranking::{rank, RankedEntry, RankedList};
pub use stoplist::StopList;
pub use traits::LinguisticAnalyzer;
