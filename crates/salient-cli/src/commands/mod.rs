//! Command implementations.

pub mod analyze;
pub mod config;
pub mod entities;
pub mod phrases;

pub use self::analyze::execute_analyze;
pub use self::config::execute_config;
pub use self::entities::execute_entities;
pub use self::phrases::execute_phrases;

use crate::cli::{EntityOptions, InputArgs, PhraseOptions};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use salient_extractor::{ExtractionRequest, ExtractionResult, Extractor};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read the text to analyze, returning it with a source identifier.
///
/// `None` and `-` read standard input.
pub fn read_input(file: Option<&Path>) -> Result<(String, String)> {
    match file {
        Some(path) if path != Path::new("-") => {
            debug!("Reading input from {}", path.display());
            let text = std::fs::read_to_string(path)?;
            Ok((text, path.display().to_string()))
        }
        _ => {
            debug!("Reading input from stdin");
            let text = read_all(std::io::stdin().lock())?;
            Ok((text, "stdin".to_string()))
        }
    }
}

fn read_all(mut reader: impl Read) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

/// Run one extraction with command-line overrides layered over `config`.
///
/// Analyzer and limit overrides change the configuration the extractor is
/// built from; phrase and entity options ride on the request.
pub fn run_extraction(
    config: &Config,
    input: &InputArgs,
    phrases: Option<&PhraseOptions>,
    entities: Option<&EntityOptions>,
    top: Option<usize>,
) -> Result<ExtractionResult> {
    let (text, source_id) = read_input(input.file.as_deref())?;

    let mut analyzer_config = config.analyzer.clone();
    if let Some(language) = &input.language {
        analyzer_config.language = language.clone();
    }
    if let Some(gazetteer) = &input.gazetteer {
        analyzer_config.gazetteer = Some(gazetteer.clone());
    }

    let mut extractor_config = config.extractor.clone();
    if top.is_some() {
        extractor_config.max_phrases = top;
        extractor_config.max_entities = top;
    }

    let extractor = Extractor::with_basic_analyzer(analyzer_config, extractor_config)?;

    let mut request = ExtractionRequest::new(text).with_source_id(source_id);
    if let Some(options) = phrases {
        if let Some(grams) = &options.grams {
            request = request.with_grams(grams.iter());
        }
        if !options.stopwords.is_empty() {
            request = request.with_stopwords(options.stopwords.iter().cloned());
        }
        if options.no_distill {
            request = request.without_distillation();
        }
    }
    if let Some(options) = entities {
        if !options.exclude.is_empty() {
            request = request.excluding(options.exclude.iter().cloned());
        }
    }

    Ok(extractor.extract(request)?)
}

/// Warning for input that produced no tokens, if any.
pub fn empty_input_warning(result: &ExtractionResult, formatter: &Formatter) -> Option<String> {
    (result.metadata.token_count == 0).then(|| {
        formatter.warning(&format!(
            "No words found in {}; nothing to extract",
            result.metadata.source_id
        ))
    })
}

/// Print [`empty_input_warning`] to stderr.
pub fn warn_if_empty(result: &ExtractionResult, formatter: &Formatter) {
    if let Some(warning) = empty_input_warning(result, formatter) {
        eprintln!("{}", warning);
    }
}
