//! Integration tests for the parse → analyze pipeline with real files

use std::fs;
use std::path::Path;
use std::sync::Once;

use chatlens::prelude::*;

static INIT: Once = Once::new();

fn fixtures_dir() -> &'static str {
    "tests/fixtures"
}

fn ensure_fixtures() {
    INIT.call_once(|| {
        let dir = fixtures_dir();
        if !Path::new(dir).exists() {
            fs::create_dir_all(dir).unwrap();
        }

        // Plain two-party chat, dash format, with an encryption notice and
        // a multi-line message
        let basic = "Los mensajes y llamadas están cifrados de extremo a extremo.
12/1/24, 10:30 - Ana: hola Luis
12/1/24, 10:31 - Ana: te escribo un poema
que ocupa dos líneas
12/1/24, 10:45 - Luis: me gusta mucho 😍
12/1/24, 18:00 - Luis: mira https://www.youtube.com/watch?v=abc
13/1/24, 9:00 - Ana: buenos días ☀";
        fs::write(format!("{dir}/basic.txt"), basic).unwrap();

        // Bracketed iOS-style format with seconds and AM/PM
        let bracketed = "[1/15/24, 10:30:00 AM] - Alice: Hello there
[1/15/24, 10:31:12 AM] - Bob: Hi Alice
[1/15/24, 10:32:45 PM] - Alice: How are you?";
        fs::write(format!("{dir}/bracketed.txt"), bracketed).unwrap();

        // Attachments in every form plus a group participant
        let media = "12/1/24, 10:30 - Ana: \u{200E}foto.jpg (archivo adjunto)
12/1/24, 10:31 - Luis: <adjunto: nota.opus>
12/1/24, 10:32 - Ana: (archivo omitido)
12/1/24, 10:33 - Carla: \u{200E}meme.webp (archivo adjunto)
12/1/24, 10:34 - Luis: jajaja muy bueno";
        fs::write(format!("{dir}/media.txt"), media).unwrap();
    });
}

fn load(name: &str) -> ParseResult {
    ensure_fixtures();
    let text = fs::read_to_string(format!("{}/{name}", fixtures_dir())).unwrap();
    ChatParser::new().parse(&text)
}

#[test]
fn test_basic_chat_parses() {
    let result = load("basic.txt");
    assert_eq!(result.messages.len(), 5);
    assert_eq!(result.participants, vec!["Ana", "Luis"]);
    assert_eq!(
        result.messages[1].content,
        "te escribo un poema\nque ocupa dos líneas"
    );
}

#[test]
fn test_encryption_notice_never_becomes_message() {
    let result = load("basic.txt");
    assert!(
        result
            .messages
            .iter()
            .all(|m| !m.content.contains("cifrados"))
    );
}

#[test]
fn test_basic_chat_statistics() {
    let result = load("basic.txt");
    let stats = compute_statistics(&result.messages, "Ana", "Luis").unwrap();

    assert_eq!(stats.total, 5);
    assert_eq!(stats.sender_total, 3);
    assert_eq!(stats.receiver_total, 2);
    assert_eq!(stats.sender_total + stats.receiver_total, stats.total);
    assert_eq!(stats.total_days, 2);
    assert_eq!(stats.avg_per_day, 3); // round(5 / 2)
    assert_eq!(stats.total_links, 1);
    assert_eq!(stats.top_domains[0].label, "youtube.com");

    // Ana opens the chat and the morning after the 15-hour silence
    assert_eq!(stats.conversation_starter, "Ana");
    assert_eq!(stats.sender_starts, 2);
    assert_eq!(stats.longest_silence, "15h 0m");
}

#[test]
fn test_bracketed_format_parses() {
    let result = load("bracketed.txt");
    assert_eq!(result.messages.len(), 3);
    assert_eq!(result.participants, vec!["Alice", "Bob"]);
    assert_eq!(result.messages[0].time_text, "10:30:00 AM");
    // hour taken literally from the clock text
    use chrono::Timelike;
    assert_eq!(result.messages[0].timestamp.hour(), 10);
}

#[test]
fn test_media_fixture_classification() {
    let result = load("media.txt");
    let msgs = &result.messages;
    assert_eq!(msgs[0].media_kind, Some(MediaKind::Image));
    assert_eq!(msgs[1].media_kind, Some(MediaKind::Audio));
    assert_eq!(msgs[1].media_file_name.as_deref(), Some("nota.opus"));
    assert_eq!(msgs[2].media_kind, Some(MediaKind::Omitted));
    assert_eq!(msgs[2].media_file_name, None);
    assert_eq!(msgs[3].media_kind, Some(MediaKind::Sticker));
}

#[test]
fn test_media_totals_scoped_to_selected_pair() {
    let result = load("media.txt");
    let stats = compute_statistics(&result.messages, "Ana", "Luis").unwrap();

    // Carla's sticker is outside the selected pair; Ana's omitted
    // attachment has no kind to tally
    assert_eq!(stats.sender_media.image, 1);
    assert_eq!(stats.receiver_media.audio, 1);
    assert_eq!(stats.total_multimedia, 2);
    assert_eq!(stats.total_stickers, 0);

    // but Carla still counts toward the full-sequence totals
    assert_eq!(stats.total, 5);
    assert!(stats.sender_total + stats.receiver_total < stats.total);
}

#[test]
fn test_statistics_survive_json_roundtrip() {
    let result = load("basic.txt");
    let stats = compute_statistics(&result.messages, "Ana", "Luis").unwrap();
    let json = to_json(&stats).unwrap();
    let reloaded: ChatStatistics = serde_json::from_str(&json).unwrap();
    assert_eq!(stats, reloaded);
}

#[test]
fn test_recompute_with_swapped_pair() {
    // re-running with a different pair must not leak state
    let result = load("basic.txt");
    let forward = compute_statistics(&result.messages, "Ana", "Luis").unwrap();
    let swapped = compute_statistics(&result.messages, "Luis", "Ana").unwrap();

    assert_eq!(forward.sender_total, swapped.receiver_total);
    assert_eq!(forward.receiver_total, swapped.sender_total);
    assert_eq!(forward.longest_silence, swapped.longest_silence);
    assert_eq!(forward.hour_counts, swapped.hour_counts);

    let again = compute_statistics(&result.messages, "Ana", "Luis").unwrap();
    assert_eq!(forward, again);
}

#[test]
fn test_empty_selection_not_computable() {
    let result = load("basic.txt");
    assert!(compute_statistics(&result.messages, "", "Luis").is_none());
    assert!(compute_statistics(&[], "Ana", "Luis").is_none());
}
