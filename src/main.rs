//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::cli::{Args, OutputFormat};
use chatlens::config::{AnalysisConfig, ParserConfig};
use chatlens::export::{write_csv, write_json};
use chatlens::parser::ChatParser;
use chatlens::stats::{Analyzer, ChatStatistics};
use chatlens::{ChatlensError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    println!("🔍 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    if !args.participants {
        println!("💾 Output:  {}", args.output);
        println!("📄 Format:  {}", args.format);
    }
    println!();

    // Step 1: Parse
    println!("⏳ Parsing chat export...");
    let parse_start = Instant::now();
    let text = fs::read_to_string(&args.input)?;
    let parsed = ChatParser::with_config(ParserConfig::default()).parse(&text);
    println!(
        "   Found {} messages from {} participant(s) ({:.2}s)",
        parsed.messages.len(),
        parsed.participants.len(),
        parse_start.elapsed().as_secs_f64()
    );

    if args.participants {
        println!();
        println!("👥 Participants:");
        for (i, name) in parsed.participants.iter().enumerate() {
            println!("   {}. {}", i + 1, name);
        }
        return Ok(());
    }

    // Step 2: Resolve the analyzed pair
    let (sender, receiver) = select_pair(&args, &parsed.participants)?;
    println!("👤 Sender:   {}", sender);
    println!("👤 Receiver: {}", receiver);

    // Step 3: Compute statistics
    println!("📊 Computing statistics...");
    let compute_start = Instant::now();
    let analyzer =
        Analyzer::with_config(AnalysisConfig::new().with_conversation_gap_hours(args.gap_hours));
    let stats = analyzer
        .compute(&parsed.messages, &sender, &receiver)
        .ok_or_else(|| ChatlensError::not_enough_participants(parsed.participants.len()))?;
    println!("   Done ({:.2}s)", compute_start.elapsed().as_secs_f64());

    // Step 4: Write output
    println!("💾 Writing {}...", args.format);
    match args.format {
        OutputFormat::Json => write_json(&stats, &args.output)?,
        OutputFormat::Csv => write_csv(&stats, &args.output)?,
    }

    print_summary(&stats);

    println!();
    println!(
        "✅ Done in {:.2}s! Output saved to {}",
        total_start.elapsed().as_secs_f64(),
        args.output
    );

    Ok(())
}

/// Resolves the analyzed pair from the flags, falling back to the first two
/// participants in first-seen order.
fn select_pair(args: &Args, participants: &[String]) -> Result<(String, String)> {
    let resolve = |requested: &Option<String>, default_index: usize| -> Result<String> {
        match requested {
            Some(name) => {
                if participants.iter().any(|p| p == name) {
                    Ok(name.clone())
                } else {
                    Err(ChatlensError::unknown_participant(name, participants))
                }
            }
            None => participants
                .get(default_index)
                .cloned()
                .ok_or_else(|| ChatlensError::not_enough_participants(participants.len())),
        }
    };

    Ok((resolve(&args.sender, 0)?, resolve(&args.receiver, 1)?))
}

fn print_summary(stats: &ChatStatistics) {
    println!();
    println!("📊 Summary:");
    println!(
        "   Messages:   {} total ({} {} / {} {})",
        stats.total, stats.sender_total, stats.sender_name, stats.receiver_total, stats.receiver_name
    );
    println!(
        "   Activity:   {} day(s), ~{} messages/day",
        stats.total_days, stats.avg_per_day
    );
    println!(
        "   Multimedia: {} ({} links shared)",
        stats.total_multimedia, stats.total_links
    );
    println!(
        "   Starter:    {} ({}% of conversations)",
        stats.conversation_starter, stats.starter_percentage
    );
    println!(
        "   Responses:  {} {} / {} {}",
        stats.sender_name, stats.avg_sender_response, stats.receiver_name, stats.avg_receiver_response
    );
    println!("   Silence:    longest {}", stats.longest_silence);
    if let Some(word) = stats.top_words.first() {
        println!("   Top word:   \"{}\" ({}×)", word.label, word.value);
    }
    if let Some(emoji) = stats.top_emojis.first() {
        println!("   Top emoji:  {} ({}×)", emoji.label, emoji.value);
    }
}
