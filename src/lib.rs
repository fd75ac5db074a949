//! # Chatlens
//!
//! A Rust library for parsing WhatsApp chat exports and computing rich
//! conversation statistics.
//!
//! ## Overview
//!
//! Chatlens is a two-stage pipeline:
//!
//! 1. **Parsing** — [`parser::ChatParser`] turns the loosely-structured
//!    export text (inconsistent date formats, multi-line messages,
//!    locale-specific attachment markers) into a normalized sequence of
//!    [`MessageRecord`]s plus the participant list.
//! 2. **Statistics** — [`stats::Analyzer`] traverses that sequence and
//!    derives aggregate metrics for a selected pair of participants:
//!    totals, hour/day histograms, a 7×24 activity matrix, word and emoji
//!    frequencies, response latencies, conversation-starter attribution,
//!    streaks, the longest silence, link-domain rankings, and a coarse
//!    keyword sentiment tally.
//!
//! Neither stage ever fails on malformed input: unparseable lines become
//! continuations or are dropped, and the only non-result is the explicit
//! `None` returned for an empty chat or an empty participant name.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let text = "\
//! 12/1/24, 10:30 - Ana: hola, ¿cómo estás?
//! 12/1/24, 10:35 - Luis: muy bien, gracias 😊";
//!
//! let parsed = ChatParser::new().parse(text);
//! let stats = compute_statistics(&parsed.messages, "Ana", "Luis")
//!     .expect("chat is non-empty and both names are set");
//!
//! assert_eq!(stats.total, 2);
//! assert_eq!(stats.conversation_starter, "Ana");
//! ```
//!
//! ## Configuration
//!
//! Everything the pipeline keys on — locale phrases, stop words, sentiment
//! lexicons, the conversation-gap threshold — travels in explicit config
//! structs ([`ParserConfig`](config::ParserConfig),
//! [`AnalysisConfig`](config::AnalysisConfig)), so both stages are pure
//! functions of their inputs and re-entrant across repeated runs.
//!
//! ## Module Structure
//!
//! - [`parser`] — Chat export parsing
//!   - [`ChatParser`](parser::ChatParser) — the line-oriented parser
//!   - [`parse`](parser::parse) — convenience with default config
//! - [`stats`] — Statistics engine
//!   - [`Analyzer`](stats::Analyzer), [`ChatStatistics`](stats::ChatStatistics)
//!   - [`compute_statistics`](stats::compute_statistics), [`format_duration`](stats::format_duration)
//! - [`message`] — Data model ([`MessageRecord`], [`MediaKind`], [`ParseResult`])
//! - [`config`] — Explicit configuration for both stages
//! - [`export`] — JSON / CSV writers for the statistics document
//! - [`cli`] — CLI types (feature `cli`)
//! - [`error`] — Unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
#[cfg(any(feature = "json-export", feature = "csv-export"))]
pub mod export;
pub mod message;
pub mod parser;
pub mod stats;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::{MediaKind, MessageRecord, ParseResult};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Data model
    pub use crate::message::{MediaKind, MessageRecord, ParseResult};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parser::{ChatParser, parse};

    // Statistics
    pub use crate::stats::{
        Analyzer, ChatStatistics, CloudEntry, CountEntry, MediaTally, SentimentBreakdown,
        SentimentTally, compute_statistics, format_duration,
    };

    // Configuration
    pub use crate::config::{AnalysisConfig, ParserConfig};

    // Output
    #[cfg(feature = "csv-export")]
    pub use crate::export::{to_csv, write_csv};
    #[cfg(feature = "json-export")]
    pub use crate::export::{to_json, write_json};

    // CLI types
    #[cfg(feature = "cli")]
    pub use crate::cli::OutputFormat;
}
