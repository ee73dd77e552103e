//! Phrases command implementation.

use super::{run_extraction, warn_if_empty};
use crate::cli::PhrasesArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the phrases command.
pub fn execute_phrases(args: PhrasesArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let result = run_extraction(config, &args.input, Some(&args.phrases), None, args.top)?;
    warn_if_empty(&result, formatter);
    println!("{}", formatter.format_phrases(&result.phrases)?);
    Ok(())
}
