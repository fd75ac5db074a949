//! Configuration types for the parser and the statistics engine.
//!
//! Both stages are pure functions of their inputs: everything that was a
//! hard-coded constant in ad-hoc chat analyzers (locale phrases, stop-word
//! lists, sentiment lexicons, the conversation-gap threshold) is carried in
//! an explicit config struct here, so the algorithms can be unit-tested
//! without any environment setup.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::new()
//!     .with_conversation_gap_hours(12)
//!     .with_stop_words(["hola", "adios"]);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Spanish stop words excluded from word-frequency rankings.
const DEFAULT_STOP_WORDS: &[&str] = &[
    "de", "la", "que", "el", "en", "y", "a", "los", "se", "del", "las", "un", "por", "con", "no",
    "una", "su", "para", "es", "al", "lo", "como", "más", "o", "pero", "sus", "le", "ya", "fue",
    "este", "ha", "si", "porque", "esta", "son", "entre", "está", "cuando", "muy", "sin", "sobre",
    "ser", "tiene", "también", "me", "hasta", "hay", "donde", "han", "quien", "están", "estado",
    "desde", "todo", "nos", "durante", "todos", "uno", "les", "ni", "contra", "otros", "fueron",
    "ese", "eso", "había", "ante", "ellos", "e", "esto", "mí", "antes", "algunos", "qué", "unos",
    "yo", "otro", "otras", "otra", "él", "tanto", "esa", "estos", "mucho", "quienes", "nada",
    "muchos", "cual", "sea", "poco", "ella", "estar", "haber", "estas", "estaba", "estamos",
    "algunas", "algo", "nosotros", "te", "tu", "mi", "jaja", "jajaja",
];

/// Keywords whose presence buckets a message as positive.
const DEFAULT_POSITIVE_WORDS: &[&str] = &[
    "gracias", "bien", "bueno", "genial", "excelente", "gusta", "encanta", "amor", "feliz",
    "jaja", "jajaja", "xd", "jiji", "jeje", "👍", "❤️", "😂", "😊", "😍", "🎉",
];

/// Keywords whose presence buckets a message as negative.
const DEFAULT_NEGATIVE_WORDS: &[&str] = &[
    "mal", "triste", "odio", "terrible", "horrible", "asco", "pena", ":(", "😭", "😠", "😡", "👎",
];

/// Configuration for the chat parser.
///
/// Carries the locale-specific phrases the parser recognizes, so a
/// differently-localized export can be handled without touching the
/// parsing algorithms. Defaults match Spanish-locale WhatsApp exports.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
///
/// let config = ParserConfig::new()
///     .with_attached_phrase("attached file");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Phrase marking a system notice about end-to-end encryption;
    /// continuation lines containing it are discarded.
    pub encryption_notice: String,

    /// Suffix phrase of a named attachment line: `<name> (<phrase>)`.
    pub attached_phrase: String,

    /// Phrase marking an attachment that was left out of the export.
    pub omitted_phrase: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            encryption_notice: "cifrados de extremo a extremo".to_string(),
            attached_phrase: "archivo adjunto".to_string(),
            omitted_phrase: "archivo omitido".to_string(),
        }
    }
}

impl ParserConfig {
    /// Creates a configuration with the default Spanish-locale phrases.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the encryption-notice phrase.
    #[must_use]
    pub fn with_encryption_notice(mut self, phrase: impl Into<String>) -> Self {
        self.encryption_notice = phrase.into();
        self
    }

    /// Sets the named-attachment phrase.
    #[must_use]
    pub fn with_attached_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.attached_phrase = phrase.into();
        self
    }

    /// Sets the omitted-attachment phrase.
    #[must_use]
    pub fn with_omitted_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.omitted_phrase = phrase.into();
        self
    }
}

/// Configuration for the statistics engine.
///
/// # Defaults
///
/// | Setting | Default |
/// |---------|---------|
/// | `conversation_gap_hours` | 8 |
/// | `stop_words` | fixed Spanish list |
/// | `positive_words` / `negative_words` | fixed keyword lists |
///
/// Sentiment keywords are matched as substrings against lowercased message
/// content; the positive list is checked before the negative one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Silence, in hours, after which the next message starts a new
    /// conversation.
    pub conversation_gap_hours: i64,

    /// Tokens excluded from word-frequency rankings.
    pub stop_words: HashSet<String>,

    /// Positive sentiment keywords, checked first.
    pub positive_words: Vec<String>,

    /// Negative sentiment keywords, checked when no positive keyword matched.
    pub negative_words: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            conversation_gap_hours: 8,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
            positive_words: DEFAULT_POSITIVE_WORDS.iter().map(|w| (*w).to_string()).collect(),
            negative_words: DEFAULT_NEGATIVE_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the conversation-gap threshold in hours.
    #[must_use]
    pub fn with_conversation_gap_hours(mut self, hours: i64) -> Self {
        self.conversation_gap_hours = hours;
        self
    }

    /// Replaces the stop-word list.
    #[must_use]
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the positive sentiment keywords.
    #[must_use]
    pub fn with_positive_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.positive_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the negative sentiment keywords.
    #[must_use]
    pub fn with_negative_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.negative_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` if the token is a stop word.
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.attached_phrase, "archivo adjunto");
        assert_eq!(config.omitted_phrase, "archivo omitido");
        assert!(config.encryption_notice.contains("extremo"));
    }

    #[test]
    fn test_parser_config_builders() {
        let config = ParserConfig::new()
            .with_attached_phrase("attached file")
            .with_omitted_phrase("file omitted")
            .with_encryption_notice("end-to-end encrypted");
        assert_eq!(config.attached_phrase, "attached file");
        assert_eq!(config.omitted_phrase, "file omitted");
        assert_eq!(config.encryption_notice, "end-to-end encrypted");
    }

    #[test]
    fn test_analysis_config_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.conversation_gap_hours, 8);
        assert!(config.is_stop_word("que"));
        assert!(config.is_stop_word("jajaja"));
        assert!(!config.is_stop_word("pizza"));
        assert!(config.positive_words.iter().any(|w| w == "gracias"));
        assert!(config.negative_words.iter().any(|w| w == "odio"));
    }

    #[test]
    fn test_analysis_config_builders() {
        let config = AnalysisConfig::new()
            .with_conversation_gap_hours(2)
            .with_stop_words(["foo"])
            .with_positive_words(["nice"])
            .with_negative_words(["ugh"]);
        assert_eq!(config.conversation_gap_hours, 2);
        assert!(config.is_stop_word("foo"));
        assert!(!config.is_stop_word("que"));
        assert_eq!(config.positive_words, vec!["nice"]);
        assert_eq!(config.negative_words, vec!["ugh"]);
    }
}
