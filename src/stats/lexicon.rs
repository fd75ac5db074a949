//! Word, emoji, and sentiment scanning.

use regex::Regex;

use crate::config::AnalysisConfig;

/// Codepoint ranges counted as emoji.
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F600, 0x1F64F), // emoticons
    (0x1F300, 0x1F5FF), // symbols & pictographs
    (0x1F680, 0x1F6FF), // transport & map
    (0x1F1E0, 0x1F1FF), // regional indicators
    (0x2600, 0x26FF),   // miscellaneous symbols
    (0x2700, 0x27BF),   // dingbats
    (0x1F900, 0x1F9FF), // supplemental symbols
];

/// Returns `true` if the character falls in one of the emoji ranges.
pub(crate) fn is_emoji(c: char) -> bool {
    let cp = c as u32;
    EMOJI_RANGES.iter().any(|&(lo, hi)| cp >= lo && cp <= hi)
}

/// Builds the token pattern for word-frequency extraction: runs of
/// lowercase Latin letters including the accented Spanish set.
pub(crate) fn word_pattern() -> Regex {
    Regex::new(r"[a-záéíóúñü]+").unwrap()
}

/// Coarse three-way sentiment bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Buckets a message by keyword presence.
///
/// Positive keywords are checked first, so a message containing both kinds
/// classifies as positive. Matching is substring-based against the
/// lowercased content; this is a first-match heuristic, not a scored model.
pub(crate) fn classify_sentiment(content_lower: &str, config: &AnalysisConfig) -> Sentiment {
    if config
        .positive_words
        .iter()
        .any(|w| content_lower.contains(w.as_str()))
    {
        return Sentiment::Positive;
    }
    if config
        .negative_words
        .iter()
        .any(|w| content_lower.contains(w.as_str()))
    {
        return Sentiment::Negative;
    }
    Sentiment::Neutral
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_emoji() {
        assert!(is_emoji('😂'));
        assert!(is_emoji('🎉'));
        assert!(is_emoji('☀'));
        assert!(is_emoji('🚀'));
        assert!(is_emoji('🤔'));
        assert!(!is_emoji('a'));
        assert!(!is_emoji('ñ'));
        assert!(!is_emoji('!'));
    }

    #[test]
    fn test_variation_selector_not_counted() {
        assert!(is_emoji('❤'));
        assert!(!is_emoji('\u{FE0F}'));
    }

    #[test]
    fn test_word_pattern_includes_accented_letters() {
        let re = word_pattern();
        let words: Vec<&str> = re.find_iter("mañana habrá café").map(|m| m.as_str()).collect();
        assert_eq!(words, vec!["mañana", "habrá", "café"]);
    }

    #[test]
    fn test_word_pattern_splits_on_non_letters() {
        let re = word_pattern();
        let words: Vec<&str> = re.find_iter("hola123mundo").map(|m| m.as_str()).collect();
        assert_eq!(words, vec!["hola", "mundo"]);
    }

    #[test]
    fn test_sentiment_positive_first() {
        let config = AnalysisConfig::default();
        assert_eq!(
            classify_sentiment("muchas gracias", &config),
            Sentiment::Positive
        );
        assert_eq!(classify_sentiment("qué mal día", &config), Sentiment::Negative);
        assert_eq!(classify_sentiment("nos vemos mañana", &config), Sentiment::Neutral);
        // both kinds present: positive wins the tie
        assert_eq!(
            classify_sentiment("gracias pero qué mal", &config),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_sentiment_matches_emoji_keywords() {
        let config = AnalysisConfig::default();
        assert_eq!(classify_sentiment("vale 👍", &config), Sentiment::Positive);
        assert_eq!(classify_sentiment("no 👎", &config), Sentiment::Negative);
    }
}
