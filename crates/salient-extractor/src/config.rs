//! Configuration for the Extractor

use crate::range::GramRange;
use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Gram lengths to count
    #[serde(default = "default_grams")]
    pub grams: Vec<usize>,

    /// Remove phrases subsumed by longer, at least as frequent phrases
    #[serde(default = "default_true")]
    pub distill: bool,

    /// Entity labels never scored
    #[serde(default)]
    pub exclude_labels: Vec<String>,

    /// Replace the analyzer's default stoplist entirely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopwords: Option<Vec<String>>,

    /// Words added to whichever stoplist is in effect
    #[serde(default)]
    pub extra_stopwords: Vec<String>,

    /// Keep only this many phrases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_phrases: Option<usize>,

    /// Keep only this many entities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_entities: Option<usize>,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        GramRange::new(self.grams.iter().copied()).map_err(|e| format!("grams: {}", e))?;
        if self.max_phrases == Some(0) {
            return Err("max_phrases must be greater than 0".to_string());
        }
        if self.max_entities == Some(0) {
            return Err("max_entities must be greater than 0".to_string());
        }
        if self.exclude_labels.iter().any(|l| l.trim().is_empty()) {
            return Err("exclude_labels must not contain blank labels".to_string());
        }
        Ok(())
    }

    /// The configured gram lengths as a range
    pub fn gram_range(&self) -> Result<GramRange, crate::ExtractorError> {
        GramRange::new(self.grams.iter().copied())
    }
}

impl Default for ExtractorConfig {
    /// Bigrams and trigrams, distilled, with the analyzer's stoplist
    fn default() -> Self {
        Self {
            grams: default_grams(),
            distill: true,
            exclude_labels: Vec::new(),
            stopwords: None,
            extra_stopwords: Vec::new(),
            max_phrases: None,
            max_entities: None,
        }
    }
}

impl ExtractorConfig {
    /// Precise preset: longer phrases only, numeric entities excluded
    pub fn precise() -> Self {
        Self {
            grams: vec![2, 3, 4],
            distill: true,
            exclude_labels: ["DATE", "TIME", "PERCENT", "MONEY", "QUANTITY", "ORDINAL", "CARDINAL"]
                .iter()
                .map(|l| l.to_string())
                .collect(),
            max_phrases: Some(20),
            max_entities: Some(20),
            ..Self::default()
        }
    }

    /// Broad preset: single words included, nothing distilled away
    pub fn broad() -> Self {
        Self {
            grams: vec![1, 2, 3],
            distill: false,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

fn default_grams() -> Vec<usize> {
    vec![2, 3]
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grams, vec![2, 3]);
        assert!(config.distill);
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(ExtractorConfig::precise().validate().is_ok());
        assert!(ExtractorConfig::broad().validate().is_ok());
    }

    #[test]
    fn test_invalid_grams() {
        let mut config = ExtractorConfig::default();
        config.grams = Vec::new();
        assert!(config.validate().is_err());

        config.grams = vec![0, 2];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_limits() {
        let mut config = ExtractorConfig::default();
        config.max_phrases = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = ExtractorConfig::from_toml("distill = false").unwrap();
        assert!(!config.distill);
        assert_eq!(config.grams, vec![2, 3]);
        assert!(config.stopwords.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::precise();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config, parsed);
    }
}
