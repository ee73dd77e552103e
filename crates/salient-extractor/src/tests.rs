//! Integration tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{distill, ExtractionRequest, Extractor, ExtractorConfig, ExtractorError};
    use salient_analyzer::{AnalyzerConfig, BasicAnalyzer, GazetteerEntry, MockAnalyzer};
    use salient_domain::{rank, EntityMention, FrequencyTable};

    fn entry(text: &str, label: &str) -> GazetteerEntry {
        GazetteerEntry {
            text: text.to_string(),
            label: label.to_string(),
        }
    }

    fn basic_extractor(stopwords: &[&str]) -> Extractor<BasicAnalyzer> {
        let analyzer = BasicAnalyzer::english()
            .unwrap()
            .with_entries(vec![entry("Testew", "PERSON"), entry("Cunard", "PERSON")]);
        let config = ExtractorConfig {
            stopwords: Some(stopwords.iter().map(|w| w.to_string()).collect()),
            ..ExtractorConfig::default()
        };
        Extractor::new(analyzer, config).unwrap()
    }

    #[test]
    fn test_full_extraction_flow() {
        let extractor = basic_extractor(&["the", "and", "of", "for"]);
        let text = "Testew and Cunard left unfinished. The labors of Testew and Cunard, \
                    left unfinished for reasons unknown.";

        let result = extractor
            .extract(ExtractionRequest::new(text).with_source_id("lucky"))
            .unwrap();

        assert_eq!(
            result.phrases.pairs(),
            vec![
                ("Testew and Cunard", 2),
                ("Cunard left unfinished", 2),
                ("reasons unknown", 1),
                ("unfinished The labors", 1),
                ("labors of Testew", 1),
                ("unfinished for reasons", 1),
            ]
        );
        assert_eq!(result.entities.pairs(), vec![("Testew", 2), ("Cunard", 2)]);

        let metadata = &result.metadata;
        assert_eq!(metadata.token_count, 16);
        assert_eq!(metadata.windows_counted, 12);
        assert_eq!(metadata.phrases_before_distillation, 8);
        assert_eq!(metadata.phrases_after_distillation, 6);
    }

    #[test]
    fn test_without_distillation_keeps_subsumed_phrases() {
        let extractor = basic_extractor(&["the", "and", "of", "for"]);
        let text = "Testew and Cunard left unfinished. The labors of Testew and Cunard, \
                    left unfinished for reasons unknown.";

        let result = extractor
            .extract(ExtractionRequest::new(text).without_distillation())
            .unwrap();

        assert_eq!(result.phrases.len(), 8);
        assert_eq!(
            result.phrases.keys().take(4).collect::<Vec<_>>(),
            vec![
                "Cunard left",
                "left unfinished",
                "Testew and Cunard",
                "Cunard left unfinished"
            ]
        );
    }

    #[test]
    fn test_curly_apostrophes_display_straight() {
        let extractor = basic_extractor(&["and"]);
        let request =
            ExtractionRequest::new("Miranda\u{2019}s torment and Miranda's fire").with_grams([2]);

        let result = extractor.extract(request).unwrap();
        assert_eq!(
            result.phrases.pairs(),
            vec![("Miranda's torment", 1), ("Miranda's fire", 1)]
        );
    }

    #[test]
    fn test_quick_fox_scenario() {
        let analyzer = MockAnalyzer::new();
        let extractor = Extractor::new(analyzer, ExtractorConfig::default()).unwrap();
        let request = ExtractionRequest::new("the quick fox and the quick fox jumped")
            .with_grams([2])
            .with_stopwords(["the", "and"]);

        let result = extractor.extract(request).unwrap();
        assert_eq!(result.phrases.pairs(), vec![("quick fox", 2), ("fox jumped", 1)]);
    }

    #[test]
    fn test_new_york_scenario() {
        let table: FrequencyTable = [("New York", 3), ("New York City", 5), ("York", 1)]
            .into_iter()
            .collect();

        let ranked = rank(&distill(&table));
        assert_eq!(ranked.pairs(), vec![("New York City", 5)]);
    }

    #[test]
    fn test_paris_scenario() {
        let analyzer = MockAnalyzer::new().with_entities(vec![
            EntityMention::labeled("Paris", "GPE"),
            EntityMention::labeled("Paris", "LOC"),
            EntityMention::labeled("John", "PERSON"),
        ]);
        let extractor = Extractor::new(analyzer, ExtractorConfig::default()).unwrap();

        let result = extractor
            .extract(ExtractionRequest::new("Paris, Paris. John.").excluding(["PERSON"]))
            .unwrap();
        assert_eq!(result.entities.pairs(), vec![("Paris", 2)]);
    }

    #[test]
    fn test_empty_text_with_real_analyzer() {
        let extractor = basic_extractor(&["the"]);
        let result = extractor.extract_text("").unwrap();
        assert!(result.phrases.is_empty());
        assert!(result.entities.is_empty());
    }

    #[test]
    fn test_document_shorter_than_every_gram() {
        let extractor = basic_extractor(&[]);
        let result = extractor
            .extract(ExtractionRequest::new("Hello").with_grams([2, 3]))
            .unwrap();
        assert!(result.phrases.is_empty());
    }

    #[test]
    fn test_analyzer_configuration_error_is_fatal() {
        let analyzer_config = AnalyzerConfig {
            gazetteer: Some("/nonexistent/entities.toml".into()),
            ..AnalyzerConfig::default()
        };
        let result = Extractor::with_basic_analyzer(analyzer_config, ExtractorConfig::default());
        match result {
            Err(ExtractorError::Analyzer(message)) => assert!(message.contains("Gazetteer")),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("construction should fail"),
        }
    }

    #[test]
    fn test_default_stoplist_comes_from_analyzer() {
        let extractor =
            Extractor::with_basic_analyzer(AnalyzerConfig::default(), ExtractorConfig::default())
                .unwrap();
        let result = extractor
            .extract(ExtractionRequest::new("the quick fox").with_grams([2]))
            .unwrap();

        assert!(result.phrases.keys().all(|k| !k.starts_with("the ")));
    }
}
