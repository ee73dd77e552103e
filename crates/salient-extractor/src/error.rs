//! Error types for the Extractor

use salient_analyzer::AnalyzerError;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Caller misuse, such as an empty gram range or a zero gram length
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The linguistic analyzer could not be initialized
    #[error("Analyzer error: {0}")]
    Analyzer(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<AnalyzerError> for ExtractorError {
    fn from(e: AnalyzerError) -> Self {
        ExtractorError::Analyzer(e.to_string())
    }
}
