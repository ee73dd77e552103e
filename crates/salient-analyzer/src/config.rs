//! Configuration for the BasicAnalyzer

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for [`BasicAnalyzer`](crate::BasicAnalyzer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Language code or name selecting the default stoplist
    #[serde(default = "default_language")]
    pub language: String,

    /// Optional TOML gazetteer used for entity recognition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gazetteer: Option<PathBuf>,

    /// Match gazetteer entries without regard to case
    #[serde(default)]
    pub case_insensitive_entities: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            gazetteer: None,
            case_insensitive_entities: false,
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

fn default_language() -> String {
    "en".to_string()
}
