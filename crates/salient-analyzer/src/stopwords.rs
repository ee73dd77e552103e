//! Per-language stopword lists
//!
//! Backed by the `stop-words` crate. Unlike a lookup that silently falls back
//! to English, an unknown language is reported so that a misconfigured
//! analyzer fails when it is built.

use crate::AnalyzerError;
use salient_domain::StopList;
use stop_words::{get, LANGUAGE};

/// Languages with a bundled stopword list, as accepted by [`stoplist_for`]
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "de", "fr", "es", "it", "pt", "nl", "ru", "sv", "no", "da", "fi", "hu", "tr", "pl",
    "ar",
];

/// Map a language code or English name to a `stop-words` language
fn resolve(language: &str) -> Option<LANGUAGE> {
    let lang = match language.trim().to_lowercase().as_str() {
        "en" | "english" => LANGUAGE::English,
        "de" | "german" => LANGUAGE::German,
        "fr" | "french" => LANGUAGE::French,
        "es" | "spanish" => LANGUAGE::Spanish,
        "it" | "italian" => LANGUAGE::Italian,
        "pt" | "portuguese" => LANGUAGE::Portuguese,
        "nl" | "dutch" => LANGUAGE::Dutch,
        "ru" | "russian" => LANGUAGE::Russian,
        "sv" | "swedish" => LANGUAGE::Swedish,
        "no" | "norwegian" => LANGUAGE::Norwegian,
        "da" | "danish" => LANGUAGE::Danish,
        "fi" | "finnish" => LANGUAGE::Finnish,
        "hu" | "hungarian" => LANGUAGE::Hungarian,
        "tr" | "turkish" => LANGUAGE::Turkish,
        "pl" | "polish" => LANGUAGE::Polish,
        "ar" | "arabic" => LANGUAGE::Arabic,
        _ => return None,
    };
    Some(lang)
}

/// Build the stoplist for a language
///
/// # Errors
///
/// Returns [`AnalyzerError::UnsupportedLanguage`] when no list is bundled.
pub fn stoplist_for(language: &str) -> Result<StopList, AnalyzerError> {
    let lang = resolve(language)
        .ok_or_else(|| AnalyzerError::UnsupportedLanguage(language.to_string()))?;

    Ok(StopList::from_words(get(lang)))
}
