//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::counter::count_ngrams;
use crate::distill::distill;
use crate::document::Document;
use crate::entities::score_entities;
use crate::error::ExtractorError;
use crate::range::GramRange;
use crate::types::{ExtractionMetadata, ExtractionRequest, ExtractionResult};
use rayon::prelude::*;
use salient_analyzer::{AnalyzerConfig, BasicAnalyzer};
use salient_domain::traits::LinguisticAnalyzer;
use salient_domain::{rank, EntityLabel, RankedList, StopList};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// The Extractor turns text into ranked phrases and entities
///
/// The analyzer is supplied once, at construction, and shared by every
/// document the extractor creates. Building the analyzer is where model and
/// resource loading cost is paid; each extraction afterwards is a pure
/// computation over one document.
pub struct Extractor<A: LinguisticAnalyzer> {
    analyzer: Arc<A>,
    config: ExtractorConfig,
    gram_range: GramRange,
    stoplist: StopList,
    exclude_labels: HashSet<EntityLabel>,
}

impl<A: LinguisticAnalyzer> Extractor<A> {
    /// Create a new Extractor
    pub fn new(analyzer: A, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        Self::from_shared(Arc::new(analyzer), config)
    }

    /// Create an Extractor around an analyzer that is shared elsewhere
    pub fn from_shared(analyzer: Arc<A>, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        // Gram errors are caller misuse and keep their own variant
        let gram_range = config.gram_range()?;
        config.validate().map_err(ExtractorError::Config)?;

        let mut stoplist = match &config.stopwords {
            Some(words) => StopList::from_words(words),
            None => analyzer.default_stoplist().clone(),
        };
        stoplist.extend(&config.extra_stopwords);

        let exclude_labels = parse_labels(&config.exclude_labels);

        debug!(
            "Extractor configured: grams [{}], {} stopwords, {} excluded labels",
            gram_range,
            stoplist.len(),
            exclude_labels.len()
        );

        Ok(Self {
            analyzer,
            config,
            gram_range,
            stoplist,
            exclude_labels,
        })
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// The analyzer every document uses
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// The boundary stoplist in effect when a request does not override it
    pub fn stoplist(&self) -> &StopList {
        &self.stoplist
    }

    /// The gram lengths counted when a request does not override them
    pub fn gram_range(&self) -> &GramRange {
        &self.gram_range
    }

    /// Normalize `text` into a document bound to this extractor's analyzer
    pub fn document(&self, text: &str) -> Document<A> {
        Document::new(Arc::clone(&self.analyzer), text)
    }

    /// Extract ranked phrases and entities from text
    pub fn extract(&self, request: ExtractionRequest) -> Result<ExtractionResult, ExtractorError> {
        let start_time = Instant::now();

        // Resolve per-request overrides before touching the text so misuse
        // is reported without analysis work.
        let gram_range = match &request.grams {
            Some(grams) => GramRange::new(grams.iter().copied())?,
            None => self.gram_range.clone(),
        };
        let request_stoplist = request.stopwords.as_ref().map(StopList::from_words);
        let stoplist = request_stoplist.as_ref().unwrap_or(&self.stoplist);
        let request_labels = request.exclude_labels.as_deref().map(parse_labels);
        let exclude_labels = request_labels.as_ref().unwrap_or(&self.exclude_labels);
        let should_distill = request.distill.unwrap_or(self.config.distill);

        info!(
            "Starting extraction for source '{}', text length {}",
            request.source_id,
            request.text.len()
        );

        let document = self.document(&request.text);

        let counted = count_ngrams(&document, &gram_range, stoplist);
        let phrases_before_distillation = counted.len();
        let windows_counted = counted.total();
        let phrases = if should_distill { distill(&counted) } else { counted };
        let phrases_after_distillation = phrases.len();

        let mentions = document.entities();
        let entities = score_entities(mentions, exclude_labels);

        let mut ranked_phrases = rank(&phrases);
        if let Some(limit) = self.config.max_phrases {
            ranked_phrases = ranked_phrases.top(limit);
        }
        let mut ranked_entities = rank(&entities);
        if let Some(limit) = self.config.max_entities {
            ranked_entities = ranked_entities.top(limit);
        }

        let metadata = ExtractionMetadata {
            source_id: request.source_id,
            grams: gram_range.iter().collect(),
            token_count: document.tokens().len(),
            windows_counted,
            phrases_before_distillation,
            phrases_after_distillation,
            mentions_seen: mentions.len(),
            mentions_kept: entities.total(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Extraction complete: {} phrases, {} entities",
            ranked_phrases.len(),
            ranked_entities.len()
        );

        Ok(ExtractionResult {
            phrases: ranked_phrases,
            entities: ranked_entities,
            metadata,
        })
    }

    /// Extract from text with every option taken from the configuration
    pub fn extract_text(&self, text: &str) -> Result<ExtractionResult, ExtractorError> {
        self.extract(ExtractionRequest::new(text))
    }
}

impl<A: LinguisticAnalyzer + Send + Sync> Extractor<A> {
    /// Extract from many texts in parallel
    ///
    /// Each request gets its own document; results come back in request order.
    pub fn extract_batch(
        &self,
        requests: Vec<ExtractionRequest>,
    ) -> Vec<Result<ExtractionResult, ExtractorError>> {
        info!("Starting batch extraction of {} documents", requests.len());
        requests
            .into_par_iter()
            .map(|request| self.extract(request))
            .collect()
    }
}

impl Extractor<BasicAnalyzer> {
    /// Build the bundled analyzer and an extractor around it
    ///
    /// Analyzer construction failures surface here as
    /// [`ExtractorError::Analyzer`], before any text is analyzed.
    pub fn with_basic_analyzer(
        analyzer_config: AnalyzerConfig,
        config: ExtractorConfig,
    ) -> Result<Self, ExtractorError> {
        let analyzer = BasicAnalyzer::new(analyzer_config)?;
        Self::new(analyzer, config)
    }
}

/// Ranked phrases for one document
///
/// Counts every qualifying window for each gram length in `range`, optionally
/// distills, and ranks the result.
pub fn ordered_ngrams<A: LinguisticAnalyzer>(
    document: &Document<A>,
    range: &GramRange,
    stoplist: &StopList,
    should_distill: bool,
) -> RankedList {
    let counted = count_ngrams(document, range, stoplist);
    if should_distill {
        rank(&distill(&counted))
    } else {
        rank(&counted)
    }
}

/// Ranked entities for one document
pub fn scored_entities<A: LinguisticAnalyzer>(
    document: &Document<A>,
    exclude_labels: &HashSet<EntityLabel>,
) -> RankedList {
    rank(&score_entities(document.entities(), exclude_labels))
}

fn parse_labels<S: AsRef<str>>(names: &[S]) -> HashSet<EntityLabel> {
    names
        .iter()
        .map(|name| {
            let label = EntityLabel::parse(name.as_ref());
            if !label.is_known() {
                warn!("Excluded label '{}' is not a known entity label", label);
            }
            label
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use salient_analyzer::MockAnalyzer;
    use salient_domain::EntityMention;

    fn create_test_extractor() -> Extractor<MockAnalyzer> {
        let analyzer = MockAnalyzer::new()
            .with_stopwords(["the", "and"])
            .with_entities(vec![
                EntityMention::labeled("Paris", "GPE"),
                EntityMention::labeled("Paris", "LOC"),
                EntityMention::labeled("John", "PERSON"),
            ]);
        Extractor::new(analyzer, ExtractorConfig::default()).unwrap()
    }

    #[test]
    fn test_extract_empty_text() {
        let extractor = Extractor::new(MockAnalyzer::new(), ExtractorConfig::default()).unwrap();

        let result = extractor.extract_text("").unwrap();
        assert!(result.phrases.is_empty());
        assert!(result.entities.is_empty());
        assert_eq!(result.metadata.token_count, 0);
        assert_eq!(result.metadata.windows_counted, 0);
    }

    #[test]
    fn test_invalid_request_grams() {
        let extractor = create_test_extractor();

        let result = extractor.extract(ExtractionRequest::new("a b c").with_grams([]));
        assert!(matches!(result, Err(ExtractorError::InvalidArgument(_))));

        let result = extractor.extract(ExtractionRequest::new("a b c").with_grams([0]));
        assert!(matches!(result, Err(ExtractorError::InvalidArgument(_))));
    }

    #[test]
    fn test_invalid_gram_config_is_invalid_argument() {
        let mut config = ExtractorConfig::default();
        config.grams = Vec::new();
        let result = Extractor::new(MockAnalyzer::new(), config);
        assert!(matches!(result, Err(ExtractorError::InvalidArgument(_))));

        let zero = ExtractorConfig {
            grams: vec![0, 2],
            ..ExtractorConfig::default()
        };
        let result = Extractor::new(MockAnalyzer::new(), zero);
        assert!(matches!(result, Err(ExtractorError::InvalidArgument(_))));
    }

    #[test]
    fn test_invalid_limits_are_config_errors() {
        let config = ExtractorConfig {
            max_phrases: Some(0),
            ..ExtractorConfig::default()
        };
        let result = Extractor::new(MockAnalyzer::new(), config);
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_configured_stoplist_composition() {
        let analyzer = MockAnalyzer::new().with_stopwords(["the"]);
        let config = ExtractorConfig {
            extra_stopwords: vec!["Jumped".to_string()],
            ..ExtractorConfig::default()
        };
        let extractor = Extractor::new(analyzer, config).unwrap();
        assert!(extractor.stoplist().contains("the"));
        assert!(extractor.stoplist().contains("jumped"));

        let replaced = ExtractorConfig {
            stopwords: Some(vec!["fox".to_string()]),
            ..ExtractorConfig::default()
        };
        let extractor =
            Extractor::new(MockAnalyzer::new().with_stopwords(["the"]), replaced).unwrap();
        assert!(!extractor.stoplist().contains("the"));
        assert!(extractor.stoplist().contains("fox"));
    }

    #[test]
    fn test_request_overrides_configuration() {
        let extractor = create_test_extractor();
        let request = ExtractionRequest::new("the cat and the cat")
            .with_grams([2])
            .with_stopwords(Vec::<String>::new())
            .excluding(["GPE", "LOC"])
            .without_distillation();

        let result = extractor.extract(request).unwrap();
        assert_eq!(
            result.phrases.pairs(),
            vec![("the cat", 2), ("cat and", 1), ("and the", 1)]
        );
        assert_eq!(result.entities.pairs(), vec![("John", 1)]);
    }

    #[test]
    fn test_limits_truncate_ranked_lists() {
        let analyzer = MockAnalyzer::new().with_entities(vec![
            EntityMention::labeled("A", "ORG"),
            EntityMention::labeled("B", "ORG"),
        ]);
        let config = ExtractorConfig {
            grams: vec![1],
            max_phrases: Some(2),
            max_entities: Some(1),
            ..ExtractorConfig::default()
        };
        let extractor = Extractor::new(analyzer, config).unwrap();
        let result = extractor.extract_text("x y z x").unwrap();

        assert_eq!(result.phrases.pairs(), vec![("x", 2), ("y", 1)]);
        assert_eq!(result.entities.pairs(), vec![("A", 1)]);
    }

    #[test]
    fn test_metadata() {
        let extractor = create_test_extractor();
        let request = ExtractionRequest::new("the quick fox and the quick fox jumped")
            .with_source_id("doc_001")
            .with_grams([2])
            .excluding(["PERSON"]);

        let result = extractor.extract(request).unwrap();
        let metadata = &result.metadata;
        assert_eq!(metadata.source_id, "doc_001");
        assert_eq!(metadata.grams, vec![2]);
        assert_eq!(metadata.token_count, 8);
        assert_eq!(metadata.windows_counted, 3);
        assert_eq!(metadata.phrases_before_distillation, 2);
        assert_eq!(metadata.phrases_after_distillation, 2);
        assert_eq!(metadata.mentions_seen, 3);
        assert_eq!(metadata.mentions_kept, 2);
    }

    #[test]
    fn test_free_functions_match_extract() {
        let extractor = create_test_extractor();
        let document = extractor.document("the quick fox and the quick fox jumped");

        let phrases = ordered_ngrams(
            &document,
            extractor.gram_range(),
            extractor.stoplist(),
            true,
        );
        let result = extractor
            .extract_text("the quick fox and the quick fox jumped")
            .unwrap();
        assert_eq!(phrases, result.phrases);

        let entities = scored_entities(&document, &HashSet::new());
        assert_eq!(entities.pairs(), vec![("Paris", 2), ("John", 1)]);
    }

    #[test]
    fn test_batch_preserves_request_order() {
        let extractor = create_test_extractor();
        let requests = vec![
            ExtractionRequest::new("red apple red apple").with_source_id("a"),
            ExtractionRequest::new("x").with_grams([0]).with_source_id("b"),
            ExtractionRequest::new("green pear").with_source_id("c"),
        ];

        let results = extractor.extract_batch(requests);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().metadata.source_id, "a");
        assert!(results[1].is_err());
        assert_eq!(
            results[2].as_ref().unwrap().phrases.pairs(),
            vec![("green pear", 1)]
        );
    }

    #[test]
    fn test_basic_analyzer_failure_is_analyzer_error() {
        let analyzer_config = AnalyzerConfig {
            language: "zz".to_string(),
            ..AnalyzerConfig::default()
        };
        let result = Extractor::with_basic_analyzer(analyzer_config, ExtractorConfig::default());
        assert!(matches!(result, Err(ExtractorError::Analyzer(_))));
    }
}
