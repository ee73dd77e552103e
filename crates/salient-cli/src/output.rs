//! Output formatting for the CLI.

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use colored::*;
use salient_domain::RankedList;
use salient_extractor::{ExtractionMetadata, ExtractionResult};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format ranked phrases.
    pub fn format_phrases(&self, phrases: &RankedList) -> Result<String> {
        self.format_ranked(phrases, "Phrase", "phrases")
    }

    /// Format ranked entities.
    pub fn format_entities(&self, entities: &RankedList) -> Result<String> {
        self.format_ranked(entities, "Entity", "entities")
    }

    /// Format a full extraction: phrases, entities and statistics.
    pub fn format_analysis(&self, result: &ExtractionResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "phrases": ranked_json(&result.phrases),
                    "entities": ranked_json(&result.entities),
                    "metadata": result.metadata,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => Ok(format!(
                "{}\n{}\n\n{}\n{}\n\n{}",
                self.colorize("Phrases", "cyan"),
                self.ranked_table(&result.phrases, "Phrase", "phrases"),
                self.colorize("Entities", "cyan"),
                self.ranked_table(&result.entities, "Entity", "entities"),
                self.metadata_summary(&result.metadata),
            )),
            OutputFormat::Quiet => {
                let keys: Vec<&str> = result
                    .phrases
                    .keys()
                    .chain(result.entities.keys())
                    .collect();
                Ok(keys.join("\n"))
            }
        }
    }

    /// Format the effective configuration.
    pub fn format_config(&self, config: &Config) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
            OutputFormat::Table | OutputFormat::Quiet => config.to_toml(),
        }
    }

    fn format_ranked(&self, list: &RankedList, column: &str, noun: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&ranked_json(list))?),
            OutputFormat::Table => Ok(self.ranked_table(list, column, noun)),
            OutputFormat::Quiet => Ok(list.keys().collect::<Vec<_>>().join("\n")),
        }
    }

    /// Render a ranked list as a table.
    fn ranked_table(&self, list: &RankedList, column: &str, noun: &str) -> String {
        if list.is_empty() {
            return self.colorize(&format!("No {} found.", noun), "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", column, "Count"]);

        for (position, entry) in list.iter().enumerate() {
            builder.push_record([
                (position + 1).to_string(),
                entry.key.clone(),
                entry.count.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// One-line summary of extraction statistics.
    fn metadata_summary(&self, metadata: &ExtractionMetadata) -> String {
        let grams: Vec<String> = metadata.grams.iter().map(|n| n.to_string()).collect();
        self.info(&format!(
            "{} tokens, grams [{}], {} windows, {} -> {} phrases after distillation, \
             {}/{} mentions kept, {} ms",
            metadata.token_count,
            grams.join(", "),
            metadata.windows_counted,
            metadata.phrases_before_distillation,
            metadata.phrases_after_distillation,
            metadata.mentions_kept,
            metadata.mentions_seen,
            metadata.processing_time_ms,
        ))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn ranked_json(list: &RankedList) -> serde_json::Value {
    list.iter()
        .map(|entry| serde_json::json!({ "text": entry.key, "count": entry.count }))
        .collect()
}
