//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum covering all error
//! cases in the library, following the pattern used by popular crates like
//! `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! The core pipeline is infallible by design: the parser degrades
//! unparseable lines into continuations, the statistics engine signals the
//! non-computable case with `None`, malformed links are skipped, and unknown
//! media extensions fall back to a generic kind. Errors exist only at the
//! I/O and export boundary, where the filesystem and serializers can fail.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::message::ParseResult;
///
/// fn load(path: &str) -> Result<ParseResult> {
///     let text = std::fs::read_to_string(path)?;
///     Ok(chatlens::parser::ChatParser::new().parse(&text))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error while writing statistics.
    #[cfg(feature = "json-export")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error while exporting statistics.
    #[cfg(feature = "csv-export")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A selected participant name does not appear in the parsed chat.
    #[error("Participant '{name}' not found in chat (available: {available})")]
    UnknownParticipant {
        /// The name that was requested
        name: String,
        /// Comma-joined list of the names the parser actually saw
        available: String,
    },

    /// The chat does not contain enough participants to analyze.
    #[error("Chat has {found} participant(s); analysis needs at least 2")]
    NotEnoughParticipants {
        /// How many distinct senders the parser found
        found: usize,
    },
}

impl ChatlensError {
    /// Creates an unknown-participant error.
    pub fn unknown_participant(name: impl Into<String>, available: &[String]) -> Self {
        ChatlensError::UnknownParticipant {
            name: name.into(),
            available: available.join(", "),
        }
    }

    /// Creates a not-enough-participants error.
    pub fn not_enough_participants(found: usize) -> Self {
        ChatlensError::NotEnoughParticipants { found }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is a participant-selection error.
    pub fn is_participant(&self) -> bool {
        matches!(
            self,
            ChatlensError::UnknownParticipant { .. } | ChatlensError::NotEnoughParticipants { .. }
        )
    }
}
