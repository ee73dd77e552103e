//! Gazetteer - dictionary-driven entity recognition
//!
//! A gazetteer is a list of known entity names with their labels. Recognition
//! scans the token stream and, at each position, takes the longest entry whose
//! tokens match. Matched tokens are consumed so mentions never overlap.
//!
//! Entries are stored in TOML:
//!
//! ```toml
//! [[entity]]
//! text = "New York City"
//! label = "GPE"
//! ```

use crate::AnalyzerError;
use salient_domain::{EntityLabel, EntityMention};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

/// One known entity name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerEntry {
    /// Surface text, e.g. "New York City"
    pub text: String,

    /// Label name, e.g. "GPE"
    pub label: String,
}

/// On-disk layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct GazetteerFile {
    #[serde(default, rename = "entity")]
    entities: Vec<GazetteerEntry>,
}

/// Entry compiled for matching
#[derive(Debug, Clone)]
struct Pattern {
    tokens: Vec<String>,
    label: EntityLabel,
}

/// Compiled entity dictionary
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    /// Patterns keyed by first token, longest first
    index: HashMap<String, Vec<Pattern>>,
    case_insensitive: bool,
    len: usize,
}

impl Gazetteer {
    /// Compile entries into a gazetteer
    ///
    /// Entries whose text has no word tokens are skipped.
    pub fn new(entries: impl IntoIterator<Item = GazetteerEntry>, case_insensitive: bool) -> Self {
        let mut gazetteer = Self {
            index: HashMap::new(),
            case_insensitive,
            len: 0,
        };

        for entry in entries {
            let tokens: Vec<String> = entry
                .text
                .unicode_words()
                .map(|w| gazetteer.fold(w))
                .collect();
            let Some(first) = tokens.first().cloned() else {
                tracing::warn!("Skipping gazetteer entry without words: {:?}", entry.text);
                continue;
            };
            gazetteer.index.entry(first).or_default().push(Pattern {
                tokens,
                label: EntityLabel::parse(&entry.label),
            });
            gazetteer.len += 1;
        }

        for patterns in gazetteer.index.values_mut() {
            // Stable: among equal lengths the earlier entry wins
            patterns.sort_by(|a, b| b.tokens.len().cmp(&a.tokens.len()));
        }

        gazetteer
    }

    /// Parse a gazetteer from a TOML string
    pub fn from_toml(toml_str: &str, case_insensitive: bool) -> Result<Self, AnalyzerError> {
        let file: GazetteerFile = toml::from_str(toml_str)
            .map_err(|e| AnalyzerError::InvalidGazetteer(e.to_string()))?;
        Ok(Self::new(file.entities, case_insensitive))
    }

    /// Load a gazetteer from a TOML file
    pub fn load(path: &Path, case_insensitive: bool) -> Result<Self, AnalyzerError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AnalyzerError::GazetteerUnavailable(format!("{}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents, case_insensitive)
    }

    /// Number of compiled entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the gazetteer has no entries
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Find entity mentions in `text`, in document order
    ///
    /// Mention text is the exact slice of `text` covering the matched tokens.
    pub fn recognize(&self, text: &str) -> Vec<EntityMention> {
        if self.is_empty() {
            return Vec::new();
        }

        let words: Vec<(usize, &str)> = text.unicode_word_indices().collect();
        let folded: Vec<String> = words.iter().map(|(_, w)| self.fold(w)).collect();

        let mut mentions = Vec::new();
        let mut i = 0;
        while i < words.len() {
            match self.longest_match(&folded[i..]) {
                Some(pattern) => {
                    let (start, _) = words[i];
                    let (last_start, last_word) = words[i + pattern.tokens.len() - 1];
                    let end = last_start + last_word.len();
                    mentions.push(EntityMention::new(&text[start..end], pattern.label.clone()));
                    i += pattern.tokens.len();
                }
                None => i += 1,
            }
        }

        mentions
    }

    fn longest_match(&self, rest: &[String]) -> Option<&Pattern> {
        let candidates = self.index.get(rest.first()?)?;
        candidates.iter().find(|p| {
            p.tokens.len() <= rest.len() && p.tokens.iter().zip(rest).all(|(a, b)| a == b)
        })
    }

    fn fold(&self, word: &str) -> String {
        if self.case_insensitive {
            word.to_lowercase()
        } else {
            word.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str, label: &str) -> GazetteerEntry {
        GazetteerEntry {
            text: text.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_longest_match_wins() {
        let gazetteer = Gazetteer::new(
            vec![entry("New York", "GPE"), entry("New York City", "GPE")],
            false,
        );
        let mentions = gazetteer.recognize("She moved to New York City last May.");
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].text, "New York City");
        assert_eq!(mentions[0].label, EntityLabel::Gpe);
    }

    #[test]
    fn test_mentions_in_document_order() {
        let gazetteer = Gazetteer::new(
            vec![entry("Paris", "GPE"), entry("John", "PERSON")],
            false,
        );
        let mentions = gazetteer.recognize("John flew to Paris, then John left Paris.");
        let texts: Vec<_> = mentions.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["John", "Paris", "John", "Paris"]);
    }

    #[test]
    fn test_case_sensitivity() {
        let entries = vec![entry("Acme", "ORG")];
        let strict = Gazetteer::new(entries.clone(), false);
        let loose = Gazetteer::new(entries, true);

        assert!(strict.recognize("acme rockets").is_empty());
        let mentions = loose.recognize("acme rockets");
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].text, "acme");
    }

    #[test]
    fn test_mention_text_keeps_original_spacing() {
        let gazetteer = Gazetteer::new(vec![entry("Puncher and Wattmann", "ORG")], false);
        let mentions = gazetteer.recognize("works of Puncher  and\nWattmann");
        assert_eq!(mentions[0].text, "Puncher  and\nWattmann");
    }

    #[test]
    fn test_from_toml() {
        let gazetteer = Gazetteer::from_toml(
            r#"
            [[entity]]
            text = "Testew"
            label = "PERSON"

            [[entity]]
            text = "Acacacacademy of Anthropopopometry"
            label = "ORG"
            "#,
            false,
        )
        .unwrap();
        assert_eq!(gazetteer.len(), 2);
    }

    #[test]
    fn test_invalid_toml() {
        let result = Gazetteer::from_toml("[[entity]]\ntext = ", false);
        assert!(matches!(result, Err(AnalyzerError::InvalidGazetteer(_))));
    }

    #[test]
    fn test_entry_without_words_is_skipped() {
        let gazetteer = Gazetteer::new(vec![entry("...", "ORG")], false);
        assert!(gazetteer.is_empty());
        assert!(gazetteer.recognize("...").is_empty());
    }
}
