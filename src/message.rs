//! Normalized message records produced by the chat parser.
//!
//! This module provides [`MessageRecord`], the typed representation of one
//! logical chat entry, plus [`MediaKind`] and [`ParseResult`]. The parser
//! turns loosely-structured export text into an ordered sequence of these
//! records; the statistics engine consumes them without ever touching raw
//! text again.
//!
//! # Overview
//!
//! A record consists of:
//! - **Textual fields**: `date_text` and `time_text` exactly as they appeared
//!   in the export, kept for display and export fidelity
//! - **Temporal field**: `timestamp`, a combined date-time used for all
//!   temporal computations
//! - **Identity**: `sender` (trimmed participant name)
//! - **Body**: `content`, possibly multi-line
//! - **Media**: `is_multimedia`, `media_kind`, `media_file_name`
//! - **Links**: URLs found in the content, de-duplicated per message
//!
//! # Examples
//!
//! ```
//! use chatlens::parser::ChatParser;
//!
//! let parser = ChatParser::new();
//! let result = parser.parse("12/1/24, 10:30 - Ana: hola\n12/1/24, 10:31 - Luis: buenas");
//!
//! assert_eq!(result.messages.len(), 2);
//! assert_eq!(result.messages[0].sender, "Ana");
//! assert_eq!(result.participants, vec!["Ana", "Luis"]);
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Kind of media carried by a multimedia message, classified by the
/// attachment's filename extension.
///
/// A plain-text message has no kind at all (`media_kind: None`); `Omitted`
/// marks an attachment the export mentions but did not include, so it has
/// no filename to classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// jpg / jpeg / png
    Image,
    /// webp
    Sticker,
    /// mp4 / mov
    Video,
    /// opus / m4a / mp3
    Audio,
    /// Any other extension
    File,
    /// Attachment omitted from the export, no filename available
    Omitted,
}

impl MediaKind {
    /// Classifies a filename by its extension.
    ///
    /// Matching is case-insensitive on the part after the last `.`; a file
    /// with no recognized extension falls back to [`MediaKind::File`].
    ///
    /// # Example
    ///
    /// ```
    /// use chatlens::message::MediaKind;
    ///
    /// assert_eq!(MediaKind::from_file_name("photo.JPG"), MediaKind::Image);
    /// assert_eq!(MediaKind::from_file_name("voice.opus"), MediaKind::Audio);
    /// assert_eq!(MediaKind::from_file_name("contract.pdf"), MediaKind::File);
    /// ```
    pub fn from_file_name(name: &str) -> Self {
        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "jpg" | "jpeg" | "png" => MediaKind::Image,
            "webp" => MediaKind::Sticker,
            "mp4" | "mov" => MediaKind::Video,
            "opus" | "m4a" | "mp3" => MediaKind::Audio,
            _ => MediaKind::File,
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MediaKind::Image => "image",
            MediaKind::Sticker => "sticker",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::File => "file",
            MediaKind::Omitted => "omitted",
        };
        write!(f, "{name}")
    }
}

/// One normalized logical chat entry, possibly spanning multiple source lines.
///
/// Records are immutable once parsing completes. During parsing the content
/// grows as continuation lines arrive; see
/// [`MessageBuilder`](crate::parser::MessageBuilder).
///
/// # Fields
///
/// | Field | Description |
/// |-------|-------------|
/// | `date_text` / `time_text` | Original textual fields from the start line |
/// | `timestamp` | Combined date-time, timezone-naive |
/// | `sender` | Trimmed participant name |
/// | `content` | Normalized body, `\n`-joined continuations |
/// | `is_multimedia` | Whether an attachment marker was detected |
/// | `media_kind` | Classification, `None` for plain text |
/// | `media_file_name` | Present iff an attachment was detected with a name |
/// | `links` | URLs found in content, order-preserving, de-duplicated |
///
/// The timestamp is constructed from local-looking date/time fields with no
/// timezone awareness, so it is a [`NaiveDateTime`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Date exactly as written in the export, e.g. `12/1/24`.
    pub date_text: String,

    /// Time exactly as written in the export, e.g. `10:30` or `9:05 PM`.
    pub time_text: String,

    /// Combined date-time used for all temporal computations.
    pub timestamp: NaiveDateTime,

    /// Trimmed participant name.
    pub sender: String,

    /// Message body. Multi-line messages hold their continuation lines
    /// joined with `\n`. Attachment messages hold a canonical placeholder
    /// such as `[Adjunto: foto.jpg]`.
    pub content: String,

    /// Whether an attachment marker was detected in the start line.
    pub is_multimedia: bool,

    /// Media classification; `None` for plain-text messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub media_kind: Option<MediaKind>,

    /// Attachment filename; set only when the attachment was not omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub media_file_name: Option<String>,

    /// URLs found in the content, duplicates suppressed within the message.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub links: Vec<String>,
}

impl MessageRecord {
    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns `true` if this message carries an attachment with a known
    /// kind other than [`MediaKind::Omitted`].
    pub fn has_named_attachment(&self) -> bool {
        self.media_file_name.is_some()
    }

    /// Content length in characters, the unit used for average-length stats.
    pub fn content_chars(&self) -> usize {
        self.content.chars().count()
    }
}

/// Output of [`ChatParser::parse`](crate::parser::ChatParser::parse).
///
/// `participants` holds every distinct sender in first-encountered order.
/// Both collections are owned by the caller and immutable once returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Ordered sequence of normalized messages, source order preserved.
    pub messages: Vec<MessageRecord>,

    /// Distinct sender names in first-seen order.
    pub participants: Vec<String>,
}

impl ParseResult {
    /// Returns `true` if no messages survived parsing.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of retained messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }
}
