//! Entities command implementation.

use super::{run_extraction, warn_if_empty};
use crate::cli::EntitiesArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the entities command.
pub fn execute_entities(args: EntitiesArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let result = run_extraction(config, &args.input, None, Some(&args.entities), args.top)?;
    warn_if_empty(&result, formatter);
    println!("{}", formatter.format_entities(&result.entities)?);
    Ok(())
}
