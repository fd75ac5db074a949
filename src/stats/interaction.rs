//! Stateful trackers for pairwise interaction metrics.
//!
//! These walk the full chronological sequence once. Gaps, silences and
//! streak resets consider every participant — the 1-to-1 view of a possibly
//! N-party log — while samples and counts are attributed only to the two
//! selected participants.

use chrono::{Duration, NaiveDateTime};

/// Which of the two selected participants (if either) sent a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Party {
    Sender,
    Receiver,
    Other,
}

/// Tracks conversation starts and the longest silence.
///
/// The first message always credits a start to its author; afterwards a
/// message credits one iff the gap since the immediately preceding message
/// (any author) exceeds the configured threshold. The longest silence is
/// the maximum gap between chronologically consecutive messages.
#[derive(Debug)]
pub(crate) struct GapTracker {
    threshold: Duration,
    last_time: Option<NaiveDateTime>,
    pub longest_silence_ms: i64,
    pub sender_starts: u64,
    pub receiver_starts: u64,
}

impl GapTracker {
    pub fn new(gap_hours: i64) -> Self {
        Self {
            threshold: Duration::hours(gap_hours),
            last_time: None,
            longest_silence_ms: 0,
            sender_starts: 0,
            receiver_starts: 0,
        }
    }

    pub fn observe(&mut self, party: Party, timestamp: NaiveDateTime) {
        match self.last_time {
            None => self.credit(party),
            Some(previous) => {
                let gap = timestamp - previous;
                let ms = gap.num_milliseconds();
                if ms > self.longest_silence_ms {
                    self.longest_silence_ms = ms;
                }
                if gap > self.threshold {
                    self.credit(party);
                }
            }
        }
        self.last_time = Some(timestamp);
    }

    fn credit(&mut self, party: Party) {
        match party {
            Party::Sender => self.sender_starts += 1,
            Party::Receiver => self.receiver_starts += 1,
            Party::Other => {}
        }
    }
}

/// Tracks response latencies in both directions.
///
/// A sender message following an un-answered receiver message records one
/// latency sample and clears the pending marker, so a run of consecutive
/// replies contributes a single sample. Symmetric for the receiver.
#[derive(Debug, Default)]
pub(crate) struct ResponseTracker {
    last_sender_time: Option<NaiveDateTime>,
    last_receiver_time: Option<NaiveDateTime>,
    pub sender_samples_ms: Vec<i64>,
    pub receiver_samples_ms: Vec<i64>,
}

impl ResponseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, party: Party, timestamp: NaiveDateTime) {
        match party {
            Party::Sender => {
                if let Some(pending) = self.last_receiver_time.take() {
                    self.sender_samples_ms
                        .push((timestamp - pending).num_milliseconds());
                }
                self.last_sender_time = Some(timestamp);
            }
            Party::Receiver => {
                if let Some(pending) = self.last_sender_time.take() {
                    self.receiver_samples_ms
                        .push((timestamp - pending).num_milliseconds());
                }
                self.last_receiver_time = Some(timestamp);
            }
            Party::Other => {}
        }
    }

    /// Mean of the sender's samples in milliseconds, 0 when there are none.
    pub fn sender_average_ms(&self) -> i64 {
        average(&self.sender_samples_ms)
    }

    /// Mean of the receiver's samples in milliseconds, 0 when there are none.
    pub fn receiver_average_ms(&self) -> i64 {
        average(&self.receiver_samples_ms)
    }
}

fn average(samples: &[i64]) -> i64 {
    if samples.is_empty() {
        return 0;
    }
    let sum: i64 = samples.iter().sum();
    (sum as f64 / samples.len() as f64) as i64
}

/// Tracks the longest same-sender run for each selected participant.
///
/// Runs are keyed by the actual author, so a message from any third
/// participant breaks the current run without updating either maximum.
#[derive(Debug, Default)]
pub(crate) struct StreakTracker {
    current_sender: Option<String>,
    current_len: u64,
    pub longest_sender_streak: u64,
    pub longest_receiver_streak: u64,
}

impl StreakTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, author: &str, party: Party) {
        if self.current_sender.as_deref() == Some(author) {
            self.current_len += 1;
        } else {
            self.current_sender = Some(author.to_string());
            self.current_len = 1;
        }

        match party {
            Party::Sender => {
                if self.current_len > self.longest_sender_streak {
                    self.longest_sender_streak = self.current_len;
                }
            }
            Party::Receiver => {
                if self.current_len > self.longest_receiver_streak {
                    self.longest_receiver_streak = self.current_len;
                }
            }
            Party::Other => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 12)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn at_day(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_first_message_credits_its_author() {
        let mut gaps = GapTracker::new(8);
        gaps.observe(Party::Receiver, at(10, 0));
        assert_eq!(gaps.receiver_starts, 1);
        assert_eq!(gaps.sender_starts, 0);
    }

    #[test]
    fn test_start_credited_after_gap_exceeds_threshold() {
        let mut gaps = GapTracker::new(8);
        gaps.observe(Party::Sender, at_day(1, 10));
        gaps.observe(Party::Receiver, at_day(1, 19)); // 9h > 8h
        gaps.observe(Party::Sender, at_day(1, 20)); // 1h, no credit
        assert_eq!(gaps.sender_starts, 1);
        assert_eq!(gaps.receiver_starts, 1);
    }

    #[test]
    fn test_gap_exactly_at_threshold_does_not_credit() {
        let mut gaps = GapTracker::new(8);
        gaps.observe(Party::Sender, at_day(1, 10));
        gaps.observe(Party::Receiver, at_day(1, 18)); // exactly 8h
        assert_eq!(gaps.receiver_starts, 0);
    }

    #[test]
    fn test_third_party_breaks_silence_without_credit() {
        let mut gaps = GapTracker::new(8);
        gaps.observe(Party::Sender, at_day(1, 10));
        gaps.observe(Party::Other, at_day(2, 10)); // 24h gap, start not tracked
        gaps.observe(Party::Sender, at_day(2, 11));
        assert_eq!(gaps.sender_starts, 1);
        assert_eq!(gaps.longest_silence_ms, 24 * 3_600_000);
    }

    #[test]
    fn test_longest_silence_is_max_gap() {
        let mut gaps = GapTracker::new(8);
        gaps.observe(Party::Sender, at(10, 0));
        gaps.observe(Party::Receiver, at(11, 0)); // 1h
        gaps.observe(Party::Sender, at(21, 0)); // 10h
        assert_eq!(gaps.longest_silence_ms, 10 * 3_600_000);
    }

    #[test]
    fn test_response_sample_recorded_and_cleared() {
        let mut responses = ResponseTracker::new();
        responses.observe(Party::Receiver, at(10, 0));
        responses.observe(Party::Sender, at(10, 5));
        assert_eq!(responses.sender_samples_ms, vec![5 * 60_000]);

        // consecutive sender messages add no further samples
        responses.observe(Party::Sender, at(10, 6));
        responses.observe(Party::Sender, at(10, 7));
        assert_eq!(responses.sender_samples_ms.len(), 1);
    }

    #[test]
    fn test_response_both_directions() {
        let mut responses = ResponseTracker::new();
        responses.observe(Party::Sender, at(10, 0));
        responses.observe(Party::Receiver, at(10, 10));
        responses.observe(Party::Sender, at(10, 12));
        assert_eq!(responses.receiver_samples_ms, vec![10 * 60_000]);
        assert_eq!(responses.sender_samples_ms, vec![2 * 60_000]);
    }

    #[test]
    fn test_response_average_empty_is_zero() {
        let responses = ResponseTracker::new();
        assert_eq!(responses.sender_average_ms(), 0);
        assert_eq!(responses.receiver_average_ms(), 0);
    }

    #[test]
    fn test_response_average() {
        let mut responses = ResponseTracker::new();
        responses.observe(Party::Receiver, at(10, 0));
        responses.observe(Party::Sender, at(10, 2));
        responses.observe(Party::Receiver, at(10, 10));
        responses.observe(Party::Sender, at(10, 14));
        assert_eq!(responses.sender_average_ms(), 3 * 60_000);
    }

    #[test]
    fn test_streak_counts_consecutive_run() {
        let mut streaks = StreakTracker::new();
        for _ in 0..5 {
            streaks.observe("Ana", Party::Sender);
        }
        streaks.observe("Luis", Party::Receiver);
        assert_eq!(streaks.longest_sender_streak, 5);
        assert_eq!(streaks.longest_receiver_streak, 1);
    }

    #[test]
    fn test_streak_broken_by_other_sender() {
        let mut streaks = StreakTracker::new();
        streaks.observe("Ana", Party::Sender);
        streaks.observe("Ana", Party::Sender);
        streaks.observe("Carla", Party::Other);
        streaks.observe("Ana", Party::Sender);
        assert_eq!(streaks.longest_sender_streak, 2);
        assert_eq!(streaks.longest_receiver_streak, 0);
    }

    #[test]
    fn test_third_party_run_updates_neither_maximum() {
        let mut streaks = StreakTracker::new();
        for _ in 0..7 {
            streaks.observe("Carla", Party::Other);
        }
        assert_eq!(streaks.longest_sender_streak, 0);
        assert_eq!(streaks.longest_receiver_streak, 0);
    }
}
