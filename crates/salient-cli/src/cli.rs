//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use salient_extractor::GramRange;
use std::path::PathBuf;

/// Salient - Extract salient phrases and named entities from text.
#[derive(Debug, Parser)]
#[command(name = "salient")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SALIENT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (one key per line)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank the salient phrases of a text
    Phrases(PhrasesArgs),

    /// Rank the named entities of a text
    Entities(EntitiesArgs),

    /// Rank phrases and entities together, with extraction statistics
    Analyze(AnalyzeArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Where the text comes from and how it is analyzed.
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Text file to read; standard input when omitted or "-"
    pub file: Option<PathBuf>,

    /// Language selecting the default stoplist
    #[arg(short, long)]
    pub language: Option<String>,

    /// TOML gazetteer of known entities
    #[arg(short, long)]
    pub gazetteer: Option<PathBuf>,
}

/// Options controlling phrase counting.
#[derive(Debug, Clone, Args)]
pub struct PhraseOptions {
    /// Gram lengths, e.g. "2,3" or "2-4"
    #[arg(short = 'n', long)]
    pub grams: Option<GramRange>,

    /// Boundary stopword (repeatable); replaces the default stoplist
    #[arg(short = 's', long = "stopword")]
    pub stopwords: Vec<String>,

    /// Keep phrases contained in longer, at least as frequent phrases
    #[arg(long)]
    pub no_distill: bool,
}

/// Options controlling entity scoring.
#[derive(Debug, Clone, Args)]
pub struct EntityOptions {
    /// Entity label to exclude (repeatable or comma-separated)
    #[arg(short = 'x', long, value_delimiter = ',')]
    pub exclude: Vec<String>,
}

/// Arguments for the phrases command.
#[derive(Debug, Parser)]
pub struct PhrasesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub phrases: PhraseOptions,

    /// Show only the N most frequent phrases
    #[arg(short, long)]
    pub top: Option<usize>,
}

/// Arguments for the entities command.
#[derive(Debug, Parser)]
pub struct EntitiesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub entities: EntityOptions,

    /// Show only the N most frequent entities
    #[arg(short, long)]
    pub top: Option<usize>,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub phrases: PhraseOptions,

    #[command(flatten)]
    pub entities: EntityOptions,

    /// Show only the N most frequent phrases and entities
    #[arg(short, long)]
    pub top: Option<usize>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a configuration file with default values
    Init {
        /// Preset to start from
        #[arg(short, long, value_enum, default_value = "default")]
        preset: PresetArg,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Extractor configuration presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PresetArg {
    /// Bigrams and trigrams, distilled
    Default,
    /// Longer phrases, numeric entities excluded, short lists
    Precise,
    /// Single words upward, no distillation
    Broad,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<PresetArg> for salient_extractor::ExtractorConfig {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Default => salient_extractor::ExtractorConfig::default(),
            PresetArg::Precise => salient_extractor::ExtractorConfig::precise(),
            PresetArg::Broad => salient_extractor::ExtractorConfig::broad(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrases_command() {
        let cli = Cli::parse_from([
            "salient", "phrases", "book.txt", "--grams", "2-4", "-s", "the", "-s", "of", "--top", "5",
        ]);
        match cli.command {
            Command::Phrases(args) => {
                assert_eq!(args.input.file, Some(PathBuf::from("book.txt")));
                let grams: Vec<usize> = args.phrases.grams.unwrap().iter().collect();
                assert_eq!(grams, vec![2, 3, 4]);
                assert_eq!(args.phrases.stopwords, vec!["the", "of"]);
                assert!(!args.phrases.no_distill);
                assert_eq!(args.top, Some(5));
            }
            _ => panic!("Expected Phrases command"),
        }
    }

    #[test]
    fn test_entities_exclude_list() {
        let cli = Cli::parse_from(["salient", "entities", "--exclude", "DATE,CARDINAL", "-x", "PERSON"]);
        match cli.command {
            Command::Entities(args) => {
                assert!(args.input.file.is_none());
                assert_eq!(args.entities.exclude, vec!["DATE", "CARDINAL", "PERSON"]);
            }
            _ => panic!("Expected Entities command"),
        }
    }

    #[test]
    fn test_invalid_grams_rejected() {
        let result = Cli::try_parse_from(["salient", "phrases", "--grams", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["salient", "analyze", "-", "--format", "json", "-vv", "--no-color"]);
        assert_eq!(cli.format, Some(CliFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Command::Analyze(_)));
    }

    #[test]
    fn test_config_init_preset() {
        let cli = Cli::parse_from(["salient", "config", "init", "--preset", "broad", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { preset, force },
            }) => {
                assert_eq!(preset, PresetArg::Broad);
                assert!(force);
            }
            _ => panic!("Expected Config init command"),
        }
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert_eq!(format, crate::config::OutputFormat::Quiet);
    }
}
