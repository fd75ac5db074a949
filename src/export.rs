//! Output writers for computed statistics.
//!
//! Thin serialization layers over [`ChatStatistics`]: the JSON document is
//! the unit persisted as a "saved analysis", and the CSV form is a flat
//! `section;label;value` table for spreadsheet import. Each format has a
//! string converter plus a file writer.

#[cfg(feature = "csv-export")]
use std::fs::File;
#[cfg(feature = "json-export")]
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::stats::ChatStatistics;

/// Converts statistics to a pretty-printed JSON string.
///
/// The document is flat and self-contained, so it can be stored and
/// re-loaded without the original chat.
#[cfg(feature = "json-export")]
pub fn to_json(stats: &ChatStatistics) -> Result<String> {
    Ok(serde_json::to_string_pretty(stats)?)
}

/// Writes statistics to a JSON file.
#[cfg(feature = "json-export")]
pub fn write_json(stats: &ChatStatistics, output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(stats)?;
    let mut file = std::fs::File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts statistics to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `section`, `label`, `value`
/// - Encoding: UTF-8
#[cfg(feature = "csv-export")]
pub fn to_csv(stats: &ChatStatistics) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());
    write_records(&mut writer, stats)?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes statistics to a CSV file with semicolon delimiter.
#[cfg(feature = "csv-export")]
pub fn write_csv(stats: &ChatStatistics, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);
    write_records(&mut writer, stats)?;
    writer.flush()?;
    Ok(())
}

#[cfg(feature = "csv-export")]
fn write_records<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    stats: &ChatStatistics,
) -> Result<()> {
    writer.write_record(["section", "label", "value"])?;

    let totals: [(&str, String); 9] = [
        ("sender_name", stats.sender_name.clone()),
        ("receiver_name", stats.receiver_name.clone()),
        ("total", stats.total.to_string()),
        ("sender_total", stats.sender_total.to_string()),
        ("receiver_total", stats.receiver_total.to_string()),
        ("total_days", stats.total_days.to_string()),
        ("avg_per_day", stats.avg_per_day.to_string()),
        ("total_links", stats.total_links.to_string()),
        ("total_multimedia", stats.total_multimedia.to_string()),
    ];
    for (label, value) in totals {
        writer.write_record(["totals", label, &value])?;
    }

    let interaction: [(&str, String); 8] = [
        ("avg_sender_response", stats.avg_sender_response.clone()),
        ("avg_receiver_response", stats.avg_receiver_response.clone()),
        ("conversation_starter", stats.conversation_starter.clone()),
        ("starter_percentage", stats.starter_percentage.to_string()),
        (
            "longest_sender_streak",
            stats.longest_sender_streak.to_string(),
        ),
        (
            "longest_receiver_streak",
            stats.longest_receiver_streak.to_string(),
        ),
        ("most_insistent", stats.most_insistent.clone()),
        ("longest_silence", stats.longest_silence.clone()),
    ];
    for (label, value) in interaction {
        writer.write_record(["interaction", label, &value])?;
    }

    for entry in &stats.top_words {
        writer.write_record(["top_words", &entry.label, &entry.value.to_string()])?;
    }
    for entry in &stats.top_emojis {
        writer.write_record(["top_emojis", &entry.label, &entry.value.to_string()])?;
    }
    for entry in &stats.top_domains {
        writer.write_record(["top_domains", &entry.label, &entry.value.to_string()])?;
    }
    for (hour, count) in stats.hour_counts.iter().enumerate() {
        writer.write_record(["hour_counts", &hour.to_string(), &count.to_string()])?;
    }
    for entry in &stats.day_counts {
        writer.write_record(["day_counts", &entry.label, &entry.value.to_string()])?;
    }

    let sentiment = [
        ("total_positive", stats.sentiment.total.positive),
        ("total_negative", stats.sentiment.total.negative),
        ("total_neutral", stats.sentiment.total.neutral),
        ("sender_positive", stats.sentiment.sender.positive),
        ("sender_negative", stats.sentiment.sender.negative),
        ("sender_neutral", stats.sentiment.sender.neutral),
        ("receiver_positive", stats.sentiment.receiver.positive),
        ("receiver_negative", stats.sentiment.receiver.negative),
        ("receiver_neutral", stats.sentiment.receiver.neutral),
    ];
    for (label, value) in sentiment {
        writer.write_record(["sentiment", label, &value.to_string()])?;
    }

    Ok(())
}
