//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! `OutputFormat` is usable outside the CLI context:
//!
//! ```rust
//! use chatlens::cli::OutputFormat;
//!
//! let format = OutputFormat::Csv;
//! println!("Extension: {}", format.extension()); // "csv"
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Analyze a WhatsApp chat export: message counts, activity histograms,
/// response times, streaks, sentiment, and link rankings.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens _chat.txt
    chatlens _chat.txt --sender Ana --receiver Luis
    chatlens _chat.txt -o analysis.json
    chatlens _chat.txt --format csv -o analysis.csv
    chatlens _chat.txt --participants")]
pub struct Args {
    /// Path to the exported chat text file
    pub input: String,

    /// Participant analyzed as the sender (default: first seen)
    #[arg(short, long, value_name = "NAME")]
    pub sender: Option<String>,

    /// Participant analyzed as the receiver (default: second seen)
    #[arg(short, long, value_name = "NAME")]
    pub receiver: Option<String>,

    /// Path to output file
    #[arg(short, long, default_value = "chat_stats.json")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Hours of silence after which the next message starts a new
    /// conversation
    #[arg(long, value_name = "HOURS", default_value_t = 8)]
    pub gap_hours: i64,

    /// List the participants found in the chat and exit
    #[arg(long)]
    pub participants: bool,
}

/// Output format options.
///
/// - [`Json`](OutputFormat::Json) - The full statistics document, re-loadable
/// - [`Csv`](OutputFormat::Csv) - Flat `section;label;value` rows for spreadsheets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Complete statistics as a JSON document (default)
    #[default]
    Json,

    /// Flat semicolon-delimited summary rows
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "csv"]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::Csv => "text/csv",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}
