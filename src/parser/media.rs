//! Attachment marker detection.
//!
//! Detection runs once per message, on the start-line content only —
//! continuation lines never turn a text message into a multimedia one.
//! Three marker shapes are recognized, in order:
//!
//! 1. `<name> (archivo adjunto)` — current named form, optionally prefixed
//!    with the invisible left-to-right mark (U+200E) some exports insert
//! 2. `<adjunto: name>` — legacy bracket form
//! 3. `(archivo omitido)` — attachment present in the chat but left out of
//!    the export, no filename available
//!
//! The attachment phrases come from [`ParserConfig`]; the legacy bracket
//! form is a fixed historical format and is matched literally.

use crate::config::ParserConfig;
use crate::message::MediaKind;

/// Legacy attachment form, e.g. `<adjunto: foto.jpg>`.
const LEGACY_PREFIX: &str = "<adjunto: ";

/// Result of attachment detection on a start-line content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MediaDetection {
    /// Classified kind; [`MediaKind::Omitted`] when no filename exists.
    pub kind: MediaKind,
    /// Attachment filename, absent for omitted attachments.
    pub file_name: Option<String>,
    /// Canonical content replacing the raw marker text.
    pub placeholder: String,
}

/// Inspects content for an attachment marker.
///
/// Returns `None` for plain-text messages.
pub(crate) fn detect(content: &str, config: &ParserConfig) -> Option<MediaDetection> {
    let stripped = content.strip_prefix('\u{200E}').unwrap_or(content);

    // named form: "<name> (archivo adjunto)", whitespace-separated, anchored
    let attached_suffix = format!("({})", config.attached_phrase);
    if let Some(prefix) = stripped.strip_suffix(&attached_suffix) {
        if prefix.ends_with(char::is_whitespace) {
            return Some(named(prefix.trim()));
        }
    }

    // legacy form: "<adjunto: name>", anywhere in the content
    if let Some(start) = stripped.find(LEGACY_PREFIX) {
        let after = &stripped[start + LEGACY_PREFIX.len()..];
        if let Some(end) = after.find('>') {
            return Some(named(after[..end].trim()));
        }
    }

    // omitted form: bare phrase, anywhere in the content
    let omitted_marker = format!("({})", config.omitted_phrase);
    if stripped.contains(&omitted_marker) {
        return Some(MediaDetection {
            kind: MediaKind::Omitted,
            file_name: None,
            placeholder: "[Multimedia omitido]".to_string(),
        });
    }

    None
}

fn named(file_name: &str) -> MediaDetection {
    MediaDetection {
        kind: MediaKind::from_file_name(file_name),
        file_name: Some(file_name.to_string()),
        placeholder: format!("[Adjunto: {file_name}]"),
    }
}
