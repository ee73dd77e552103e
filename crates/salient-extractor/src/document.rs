//! Documents with memoized analysis
//!
//! A [`Document`] owns one normalized text body and a handle to the analyzer.
//! Tokens, n-grams and entity mentions are computed on first access and
//! cached for the lifetime of the document. A document shared between threads
//! still runs each analysis exactly once: the first caller computes,
//! concurrent callers wait for that result.

use crate::normalize::{normalize, render, DisplayText, NormalizedText};
use salient_domain::traits::LinguisticAnalyzer;
use salient_domain::EntityMention;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::debug;

/// N-gram windows for one gram length, shared out of the cache
pub type Ngrams = Arc<Vec<Vec<String>>>;

/// Normalized text plus lazily computed analysis
pub struct Document<A> {
    analyzer: Arc<A>,
    text: NormalizedText,
    rendered: OnceLock<DisplayText>,
    tokens: OnceLock<Vec<String>>,
    ngrams: Mutex<HashMap<usize, Ngrams>>,
    entities: OnceLock<Vec<EntityMention>>,
}

impl<A: LinguisticAnalyzer> Document<A> {
    /// Normalize `raw` and wrap it for analysis
    pub fn new(analyzer: Arc<A>, raw: &str) -> Self {
        Self::from_normalized(analyzer, normalize(raw))
    }

    /// Wrap text that is already normalized
    pub fn from_normalized(analyzer: Arc<A>, text: NormalizedText) -> Self {
        Self {
            analyzer,
            text,
            rendered: OnceLock::new(),
            tokens: OnceLock::new(),
            ngrams: Mutex::new(HashMap::new()),
            entities: OnceLock::new(),
        }
    }

    /// The normalized text
    pub fn text(&self) -> &NormalizedText {
        &self.text
    }

    /// The text in display form
    pub fn rendered_text(&self) -> &DisplayText {
        self.rendered.get_or_init(|| render(self.text.as_str()))
    }

    /// Tokens of the normalized text, placeholders intact
    pub fn tokens(&self) -> &[String] {
        self.tokens.get_or_init(|| {
            let tokens = self.analyzer.tokenize(self.text.as_str());
            debug!("Document tokenized: {} tokens", tokens.len());
            tokens
        })
    }

    /// The analyzer's `n`-grams of the normalized text, in document order
    ///
    /// Each gram length is requested from the analyzer once and cached. The
    /// lock is held while the analyzer runs so concurrent callers asking for
    /// the same length never duplicate the work. Empty when `n` is zero.
    pub fn ngrams(&self, n: usize) -> Ngrams {
        if n == 0 {
            return Arc::new(Vec::new());
        }

        let mut cache = self
            .ngrams
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let grams = cache.entry(n).or_insert_with(|| {
            let grams = self.analyzer.ngrams(self.text.as_str(), n);
            debug!("Document {}-grams: {} windows", n, grams.len());
            Arc::new(grams)
        });
        Arc::clone(grams)
    }

    /// Entity mentions found in the rendered text
    ///
    /// Recognition runs on the display form so mention text carries real
    /// apostrophes rather than the normalization placeholder.
    pub fn entities(&self) -> &[EntityMention] {
        self.entities.get_or_init(|| {
            let mentions = self.analyzer.entities(self.rendered_text().as_str());
            debug!("Document entities: {} mentions", mentions.len());
            mentions
        })
    }
}
