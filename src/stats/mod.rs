//! Chat statistics engine.
//!
//! [`Analyzer`] consumes the parsed message sequence plus two selected
//! participant names and produces [`ChatStatistics`]: counts, histograms,
//! streak/response/ghosting metrics, word and emoji frequency tables,
//! sentiment tallies, and link-domain rankings.
//!
//! The engine walks the full sequence — not just the two selected
//! participants — maintaining several state machines at once
//! ([`interaction`]). Silence gaps and streak resets consider every
//! author (the 1-to-1 view of a possibly N-party log), while media tallies
//! and response samples are attributed only to the selected pair. That
//! asymmetry is intentional.
//!
//! Every computation degrades instead of failing: zero denominators yield
//! zero averages, malformed links are skipped, and the only non-result is
//! the explicit `None` for an empty chat or an empty participant name.
//!
//! # Example
//!
//! ```
//! use chatlens::parser::ChatParser;
//! use chatlens::stats::Analyzer;
//!
//! let text = "\
//! 12/1/24, 10:30 - Ana: hola, ¿vienes mañana?
//! 12/1/24, 10:35 - Luis: claro, gracias por avisar";
//!
//! let result = ChatParser::new().parse(text);
//! let stats = Analyzer::new().compute(&result.messages, "Ana", "Luis").unwrap();
//!
//! assert_eq!(stats.total, 2);
//! assert_eq!(stats.avg_sender_response, "N/A");
//! assert_eq!(stats.avg_receiver_response, "5 min");
//! ```

use std::collections::HashMap;

use chrono::{Datelike, Timelike};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::message::{MediaKind, MessageRecord};
use crate::parser::date::resolve_date;

mod duration;
mod interaction;
mod lexicon;

pub use duration::format_duration;

use interaction::{GapTracker, Party, ResponseTracker, StreakTracker};
use lexicon::Sentiment;

/// A ranked label with its occurrence count.
///
/// Used for word, emoji, day, and domain rankings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry {
    pub label: String,
    pub value: u64,
}

/// A word-cloud entry: `{text, value}` pairs consumed by cloud renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudEntry {
    pub text: String,
    pub value: u64,
}

/// Per-participant media counts by kind.
///
/// Omitted attachments carry no filename and are not tallied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaTally {
    pub image: u64,
    pub audio: u64,
    pub video: u64,
    pub sticker: u64,
    pub file: u64,
}

impl MediaTally {
    fn bump(&mut self, kind: MediaKind) {
        match kind {
            MediaKind::Image => self.image += 1,
            MediaKind::Audio => self.audio += 1,
            MediaKind::Video => self.video += 1,
            MediaKind::Sticker => self.sticker += 1,
            MediaKind::File => self.file += 1,
            MediaKind::Omitted => {}
        }
    }

    /// Sum over all five kinds.
    pub fn total(&self) -> u64 {
        self.image + self.audio + self.video + self.sticker + self.file
    }
}

/// Three-way sentiment counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentTally {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
}

impl SentimentTally {
    fn bump(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }
}

/// Global and per-participant sentiment tallies.
///
/// The global tally covers every non-multimedia message, including ones
/// from participants outside the selected pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub total: SentimentTally,
    pub sender: SentimentTally,
    pub receiver: SentimentTally,
}

/// The complete statistical summary of a chat for one selected pair.
///
/// Entirely derived: holds no references back to the message sequence, so
/// it can be persisted as a flat JSON document and outlive the raw chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatStatistics {
    // Names
    pub sender_name: String,
    pub receiver_name: String,

    // Overall counts
    pub total: usize,
    pub sender_total: usize,
    pub receiver_total: usize,
    pub total_days: usize,
    pub avg_per_day: u64,
    pub total_links: usize,
    /// Same as `total`; kept as a separate field for header displays.
    pub message_count: usize,

    // Media counts
    pub total_multimedia: u64,
    pub total_images: u64,
    pub total_audios: u64,
    pub total_videos: u64,
    pub total_stickers: u64,
    pub total_files: u64,
    pub sender_media: MediaTally,
    pub receiver_media: MediaTally,

    // Averages
    pub sender_avg_length: u64,
    pub receiver_avg_length: u64,

    // Interaction metrics
    pub avg_sender_response: String,
    pub avg_receiver_response: String,
    pub sender_starts: u64,
    pub receiver_starts: u64,
    pub conversation_starter: String,
    pub starter_percentage: u64,
    pub longest_sender_streak: u64,
    pub longest_receiver_streak: u64,
    pub most_insistent: String,
    pub longest_silence: String,

    // Chart data
    pub top_words: Vec<CountEntry>,
    pub word_cloud: Vec<CloudEntry>,
    pub top_emojis: Vec<CountEntry>,
    pub hour_counts: [u64; 24],
    /// Day-label/count pairs, chronologically sorted for trend display.
    pub day_counts: Vec<CountEntry>,
    /// 7×24 grid indexed by day-of-week (0 = Sunday) × hour.
    pub day_activity_matrix: [[u64; 24]; 7],
    pub top_domains: Vec<CountEntry>,

    // Sentiment
    pub sentiment: SentimentBreakdown,
}

/// Statistics engine over a parsed message sequence.
///
/// Re-entrant by construction: every [`compute`](Analyzer::compute) call
/// builds fresh local accumulators, so repeated runs with different
/// participant pairs never leak state into each other.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
    word_pattern: Regex,
}

impl Analyzer {
    /// Creates an analyzer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }

    /// Creates an analyzer with a custom configuration.
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self {
            config,
            word_pattern: lexicon::word_pattern(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Computes the full statistics for the selected pair.
    ///
    /// Returns `None` — explicitly "not computable" — when the message
    /// sequence is empty or either participant name is empty.
    pub fn compute(
        &self,
        messages: &[MessageRecord],
        sender_name: &str,
        receiver_name: &str,
    ) -> Option<ChatStatistics> {
        if messages.is_empty() || sender_name.is_empty() || receiver_name.is_empty() {
            return None;
        }

        let mut hour_counts = [0u64; 24];
        let mut day_activity_matrix = [[0u64; 24]; 7];
        let mut day_counts: HashMap<String, u64> = HashMap::new();
        let mut word_freq: HashMap<String, u64> = HashMap::new();
        let mut emoji_freq: HashMap<String, u64> = HashMap::new();
        let mut domain_counts: HashMap<String, u64> = HashMap::new();
        let mut total_links = 0usize;

        let mut sender_total = 0usize;
        let mut receiver_total = 0usize;
        let mut sender_length_sum = 0u64;
        let mut receiver_length_sum = 0u64;
        let mut sender_media = MediaTally::default();
        let mut receiver_media = MediaTally::default();

        let mut gaps = GapTracker::new(self.config.conversation_gap_hours);
        let mut responses = ResponseTracker::new();
        let mut streaks = StreakTracker::new();
        let mut sentiment = SentimentBreakdown::default();

        for msg in messages {
            let party = if msg.sender == sender_name {
                Party::Sender
            } else if msg.sender == receiver_name {
                Party::Receiver
            } else {
                Party::Other
            };

            let hour = msg.timestamp.hour() as usize;
            hour_counts[hour] += 1;
            let weekday = msg.timestamp.weekday().num_days_from_sunday() as usize;
            day_activity_matrix[weekday][hour] += 1;
            *day_counts.entry(msg.date_text.clone()).or_insert(0) += 1;
            total_links += msg.links.len();

            if !msg.is_multimedia {
                let lower = msg.content.to_lowercase();
                for token in self.word_pattern.find_iter(&lower) {
                    let word = token.as_str();
                    if word.chars().count() > 2 && !self.config.is_stop_word(word) {
                        *word_freq.entry(word.to_string()).or_insert(0) += 1;
                    }
                }

                let bucket = lexicon::classify_sentiment(&lower, &self.config);
                match party {
                    Party::Sender => sentiment.sender.bump(bucket),
                    Party::Receiver => sentiment.receiver.bump(bucket),
                    Party::Other => {}
                }
                sentiment.total.bump(bucket);
            }

            // emoji counting includes multimedia placeholder text
            for c in msg.content.chars().filter(|c| lexicon::is_emoji(*c)) {
                *emoji_freq.entry(c.to_string()).or_insert(0) += 1;
            }

            match party {
                Party::Sender => {
                    sender_total += 1;
                    sender_length_sum += msg.content_chars() as u64;
                    if let Some(kind) = msg.media_kind {
                        sender_media.bump(kind);
                    }
                }
                Party::Receiver => {
                    receiver_total += 1;
                    receiver_length_sum += msg.content_chars() as u64;
                    if let Some(kind) = msg.media_kind {
                        receiver_media.bump(kind);
                    }
                }
                Party::Other => {}
            }

            gaps.observe(party, msg.timestamp);
            responses.observe(party, msg.timestamp);
            streaks.observe(&msg.sender, party);

            for link in &msg.links {
                if let Some(domain) = domain_of(link) {
                    *domain_counts.entry(domain).or_insert(0) += 1;
                }
            }
        }

        let total = messages.len();
        let total_days = day_counts.len();

        let conversation_starter = if gaps.sender_starts >= gaps.receiver_starts {
            sender_name.to_string()
        } else {
            receiver_name.to_string()
        };
        let starts_sum = gaps.sender_starts + gaps.receiver_starts;
        let starter_percentage = if starts_sum == 0 {
            0
        } else {
            let winner = gaps.sender_starts.max(gaps.receiver_starts);
            (winner as f64 * 100.0 / starts_sum as f64).round() as u64
        };

        let most_insistent = if streaks.longest_sender_streak >= streaks.longest_receiver_streak {
            sender_name.to_string()
        } else {
            receiver_name.to_string()
        };

        let total_images = sender_media.image + receiver_media.image;
        let total_audios = sender_media.audio + receiver_media.audio;
        let total_videos = sender_media.video + receiver_media.video;
        let total_stickers = sender_media.sticker + receiver_media.sticker;
        let total_files = sender_media.file + receiver_media.file;

        Some(ChatStatistics {
            sender_name: sender_name.to_string(),
            receiver_name: receiver_name.to_string(),

            total,
            sender_total,
            receiver_total,
            total_days,
            avg_per_day: rounded_ratio(total as u64, total_days as u64),
            total_links,
            message_count: total,

            total_multimedia: total_images + total_audios + total_videos + total_stickers + total_files,
            total_images,
            total_audios,
            total_videos,
            total_stickers,
            total_files,
            sender_media,
            receiver_media,

            sender_avg_length: rounded_ratio(sender_length_sum, sender_total as u64),
            receiver_avg_length: rounded_ratio(receiver_length_sum, receiver_total as u64),

            avg_sender_response: format_duration(responses.sender_average_ms()),
            avg_receiver_response: format_duration(responses.receiver_average_ms()),
            sender_starts: gaps.sender_starts,
            receiver_starts: gaps.receiver_starts,
            conversation_starter,
            starter_percentage,
            longest_sender_streak: streaks.longest_sender_streak,
            longest_receiver_streak: streaks.longest_receiver_streak,
            most_insistent,
            longest_silence: format_duration(gaps.longest_silence_ms),

            top_words: rank(&word_freq, 10),
            word_cloud: rank(&word_freq, 50)
                .into_iter()
                .map(|e| CloudEntry {
                    text: e.label,
                    value: e.value,
                })
                .collect(),
            top_emojis: rank(&emoji_freq, 10),
            hour_counts,
            day_counts: chronological(day_counts),
            day_activity_matrix,
            top_domains: rank(&domain_counts, 5),

            sentiment,
        })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes statistics with the default configuration.
///
/// Convenience wrapper around [`Analyzer::new`] + [`Analyzer::compute`].
pub fn compute_statistics(
    messages: &[MessageRecord],
    sender_name: &str,
    receiver_name: &str,
) -> Option<ChatStatistics> {
    Analyzer::new().compute(messages, sender_name, receiver_name)
}

/// Rounds `numerator / denominator`, degrading to a denominator of 1.
fn rounded_ratio(numerator: u64, denominator: u64) -> u64 {
    (numerator as f64 / denominator.max(1) as f64).round() as u64
}

/// Ranks a frequency table descending by count, ties broken by label so the
/// output is deterministic across runs.
fn rank(freq: &HashMap<String, u64>, limit: usize) -> Vec<CountEntry> {
    let mut entries: Vec<CountEntry> = freq
        .iter()
        .map(|(label, value)| CountEntry {
            label: label.clone(),
            value: *value,
        })
        .collect();
    entries.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.label.cmp(&b.label)));
    entries.truncate(limit);
    entries
}

/// Sorts day labels as calendar dates. Labels are grouping keys, not parsed
/// dates, so they are resolved here only to obtain a comparable order.
fn chronological(day_counts: HashMap<String, u64>) -> Vec<CountEntry> {
    let mut entries: Vec<CountEntry> = day_counts
        .into_iter()
        .map(|(label, value)| CountEntry { label, value })
        .collect();
    entries.sort_by(|a, b| {
        resolve_date(&a.label)
            .cmp(&resolve_date(&b.label))
            .then_with(|| a.label.cmp(&b.label))
    });
    entries
}

/// Extracts the host of a URL, stripping any leading `www.`.
///
/// Returns `None` for anything that does not look like a well-formed
/// http(s) URL; callers skip those silently.
fn domain_of(url: &str) -> Option<String> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let authority = rest.split(['/', '?', '#']).next()?;
    let host = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    let host = host.split(':').next()?.to_lowercase();
    if host.is_empty() {
        return None;
    }
    Some(host.strip_prefix("www.").unwrap_or(&host).to_string())
}
