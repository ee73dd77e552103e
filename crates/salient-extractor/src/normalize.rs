//! Punctuation normalization ahead of tokenization
//!
//! Tokenizers split words on curly quotes and apostrophes in ways that vary
//! between implementations. Before analysis every apostrophe variant is
//! replaced by a placeholder made of word characters, which keeps
//! contractions and possessives inside a single token, and curly double
//! quotes are straightened.
//!
//! [`render`] maps the placeholder back to a straight apostrophe. Curly forms
//! are not restored: `’` comes back as `'`.

use std::fmt;

/// Placeholder substituted for every apostrophe variant
pub const APOSTROPHE_PLACEHOLDER: &str = "__APOS__";

const APOSTROPHES: [char; 3] = ['\u{2019}', '\u{2018}', '\''];
const DOUBLE_QUOTES: [char; 2] = ['\u{201C}', '\u{201D}'];

/// Text prepared for the analyzer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalizedText(String);

/// Text in display form, with apostrophes restored
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DisplayText(String);

/// Replace apostrophe variants with the placeholder and straighten double quotes
///
/// # Examples
///
/// ```
/// use salient_extractor::normalize;
///
/// let text = normalize("It\u{2019}s \u{201C}fine\u{201D}");
/// assert_eq!(text.as_str(), "It__APOS__s \"fine\"");
/// ```
pub fn normalize(text: &str) -> NormalizedText {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if APOSTROPHES.contains(&c) {
            out.push_str(APOSTROPHE_PLACEHOLDER);
        } else if DOUBLE_QUOTES.contains(&c) {
            out.push('"');
        } else {
            out.push(c);
        }
    }
    NormalizedText(out)
}

/// Restore the placeholder to a straight apostrophe
///
/// # Examples
///
/// ```
/// use salient_extractor::{normalize, render};
///
/// assert_eq!(render(normalize("don't").as_str()).as_str(), "don't");
/// ```
pub fn render(text: &str) -> DisplayText {
    DisplayText(text.replace(APOSTROPHE_PLACEHOLDER, "'"))
}

macro_rules! text_newtype {
    ($name:ident) => {
        impl $name {
            /// Borrow as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume into the underlying string
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_newtype!(NormalizedText);
text_newtype!(DisplayText);
