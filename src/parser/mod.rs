//! Chat export parser.
//!
//! [`ChatParser`] turns the raw text of a conversation export into an
//! ordered sequence of [`MessageRecord`]s plus the set of participants.
//! Parsing never fails: lines that do not open a new message are treated as
//! continuations of the current one, or silently ignored when no message is
//! open.
//!
//! # Pipeline
//!
//! 1. [`line`] classifies each source line (start vs. continuation)
//! 2. [`date`] resolves the ambiguous date ordering and builds a timestamp
//! 3. [`media`] recognizes attachment markers in the start-line content
//! 4. [`links`] extracts URLs, incrementally as continuation lines arrive
//!
//! # Example
//!
//! ```
//! use chatlens::parser::ChatParser;
//!
//! let text = "\
//! 12/1/24, 10:30 - Ana: hola
//! sigo en otra línea
//! 12/1/24, 10:32 - Luis: \u{200E}foto.jpg (archivo adjunto)";
//!
//! let result = ChatParser::new().parse(text);
//! assert_eq!(result.messages[0].content, "hola\nsigo en otra línea");
//! assert!(result.messages[1].is_multimedia);
//! ```

use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::config::ParserConfig;
use crate::message::{MediaKind, MessageRecord, ParseResult};

pub(crate) mod date;
mod line;
mod links;
mod media;

use line::StartLine;
use links::LinkScanner;

/// Parser for WhatsApp-style text exports.
///
/// # Example
///
/// ```rust
/// use chatlens::parser::ChatParser;
///
/// let parser = ChatParser::new();
/// let result = parser.parse("12/1/24, 10:30 - Ana: hola");
/// assert_eq!(result.participants, vec!["Ana"]);
/// ```
#[derive(Debug, Clone)]
pub struct ChatParser {
    config: ParserConfig,
    links: LinkScanner,
}

impl ChatParser {
    /// Creates a parser with the default (Spanish-locale) configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser with a custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            links: LinkScanner::new(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses export text into messages and participants.
    ///
    /// Never fails on malformed input; see the module docs for how
    /// non-conforming lines are handled.
    pub fn parse(&self, text: &str) -> ParseResult {
        let mut messages: Vec<MessageRecord> = Vec::new();
        let mut participants: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut current: Option<MessageBuilder> = None;

        for raw_line in text.lines() {
            if let Some(builder) = self.open_message(raw_line) {
                if let Some(finished) = current.take() {
                    messages.push(finished.finish());
                }
                if seen.insert(builder.sender.clone()) {
                    participants.push(builder.sender.clone());
                }
                current = Some(builder);
            } else if let Some(builder) = current.as_mut() {
                let trimmed = raw_line.trim();
                if !trimmed.is_empty() && !raw_line.contains(&self.config.encryption_notice) {
                    builder.append_continuation(trimmed, &self.links);
                }
            }
        }

        if let Some(finished) = current.take() {
            messages.push(finished.finish());
        }

        // system notices that slipped through classification end up with an
        // empty sender or body; drop them
        messages.retain(|m| !m.sender.is_empty() && !m.content.is_empty());

        ParseResult {
            messages,
            participants,
        }
    }

    /// Tries to open a new message from a line. A line that matches the
    /// start grammar but carries an impossible date or clock is rejected
    /// here, sending it down the continuation path.
    fn open_message(&self, raw_line: &str) -> Option<MessageBuilder> {
        let start = line::classify(raw_line)?;
        let timestamp = date::build_timestamp(start.date, start.time)?;
        Some(MessageBuilder::new(&start, timestamp, &self.config, &self.links))
    }
}

impl Default for ChatParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses export text with the default configuration.
///
/// Convenience wrapper around [`ChatParser::new`] + [`ChatParser::parse`].
pub fn parse(text: &str) -> ParseResult {
    ChatParser::new().parse(text)
}

/// Mutable staging record for the message currently being assembled.
///
/// Continuation lines append to the content; the builder is finalized into
/// an immutable [`MessageRecord`] when the next start line arrives or the
/// input ends.
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    date_text: String,
    time_text: String,
    timestamp: NaiveDateTime,
    sender: String,
    content: String,
    is_multimedia: bool,
    media_kind: Option<MediaKind>,
    media_file_name: Option<String>,
    links: Vec<String>,
}

impl MessageBuilder {
    fn new(
        start: &StartLine<'_>,
        timestamp: NaiveDateTime,
        config: &ParserConfig,
        scanner: &LinkScanner,
    ) -> Self {
        let mut content = start.body.to_string();
        let mut is_multimedia = false;
        let mut media_kind = None;
        let mut media_file_name = None;

        if let Some(detection) = media::detect(&content, config) {
            is_multimedia = true;
            media_kind = Some(detection.kind);
            media_file_name = detection.file_name;
            content = detection.placeholder;
        }

        let mut links = Vec::new();
        scanner.collect_into(&content, &mut links);

        Self {
            date_text: start.date.to_string(),
            time_text: start.time.to_string(),
            timestamp,
            sender: start.sender.trim().to_string(),
            content,
            is_multimedia,
            media_kind,
            media_file_name,
            links,
        }
    }

    /// Appends a continuation line and re-scans the accumulated content for
    /// links split across lines.
    fn append_continuation(&mut self, trimmed_line: &str, scanner: &LinkScanner) {
        self.content.push('\n');
        self.content.push_str(trimmed_line);
        scanner.collect_into(&self.content, &mut self.links);
    }

    /// Finalizes the staging record into an immutable message.
    fn finish(self) -> MessageRecord {
        MessageRecord {
            date_text: self.date_text,
            time_text: self.time_text,
            timestamp: self.timestamp,
            sender: self.sender,
            content: self.content,
            is_multimedia: self.is_multimedia,
            media_kind: self.media_kind,
            media_file_name: self.media_file_name,
            links: self.links,
        }
    }
}
