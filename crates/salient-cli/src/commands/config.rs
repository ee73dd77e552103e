//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs, PresetArg};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::{Path, PathBuf};

/// Execute the config command.
///
/// `path` is the file given with `--config`, if any; otherwise the default
/// location is used.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            println!("{}", formatter.format_config(config)?);
            Ok(())
        }
        ConfigAction::Init { preset, force } => {
            let path = match path {
                Some(path) => path.to_path_buf(),
                None => Config::path()?,
            };
            init_config(&path, preset, force)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote configuration to {}", path.display()))
            );
            Ok(())
        }
    }
}

/// Write a fresh configuration file built from `preset`.
pub fn init_config(path: &Path, preset: PresetArg, force: bool) -> Result<PathBuf> {
    if path.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists; use --force to overwrite",
            path.display()
        )));
    }

    let config = Config {
        extractor: preset.into(),
        ..Config::default()
    };
    config.save_to(path)?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_preset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        init_config(&path, PresetArg::Broad, false).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.extractor, salient_extractor::ExtractorConfig::broad());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        init_config(&path, PresetArg::Default, false).unwrap();

        let again = init_config(&path, PresetArg::Precise, false);
        assert!(matches!(again, Err(CliError::InvalidInput(_))));

        init_config(&path, PresetArg::Precise, true).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.extractor, salient_extractor::ExtractorConfig::precise());
    }
}
