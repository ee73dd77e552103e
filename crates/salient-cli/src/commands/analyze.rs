//! Analyze command implementation.

use super::{run_extraction, warn_if_empty};
use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the analyze command.
pub fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let result = run_extraction(
        config,
        &args.input,
        Some(&args.phrases),
        Some(&args.entities),
        args.top,
    )?;
    warn_if_empty(&result, formatter);
    println!("{}", formatter.format_analysis(&result)?);
    Ok(())
}
