use chrono::Utc;
use clap::{Parser, Subcommand};
use rust_gs1::ParsedRecord;
use rust_gs1::batch::{decode_batch_with_telemetry, default_min_payload_len};
use rust_gs1::tools::{
    Report, StatusFilter, batch_stats, filter_items, payload_lines, render_text_report,
};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "gs1tool", version, about = "RustGS1 CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a single payload and print its fields
    Parse {
        payload: String,
    },
    /// Decode a file of payloads (one per line) and print a summary
    Batch {
        #[arg(long)]
        input: PathBuf,
        /// Print the full report as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Override the minimum normalized payload length
        #[arg(long)]
        min_len: Option<usize>,
        /// Keep only items containing this text (case-insensitive)
        #[arg(long)]
        filter: Option<String>,
        /// Keep only failed decodes
        #[arg(long)]
        errors_only: bool,
    },
    /// Decode a file of payloads and print a plain-text report
    Report {
        #[arg(long)]
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { payload } => parse_cmd(&payload),
        Command::Batch {
            input,
            json,
            min_len,
            filter,
            errors_only,
        } => batch_cmd(&input, json, min_len, filter.as_deref(), errors_only),
        Command::Report { input } => report_cmd(&input),
    }
}

fn parse_cmd(payload: &str) {
    let record = rust_gs1::parse(payload);
    print_record(&record);
}

fn print_record(record: &ParsedRecord) {
    match &record.error {
        Some(error) => println!("Decode failed: {error}"),
        None => {
            println!("Barcode:       {}", display_field(&record.barcode));
            println!("Serial number: {}", display_field(&record.serial_number));
            println!("Expiry date:   {}", display_field(&record.expiry_date));
            println!("Lot number:    {}", display_field(&record.lot_number));
        }
    }
}

fn display_field(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn batch_cmd(
    input: &Path,
    json: bool,
    min_len: Option<usize>,
    filter: Option<&str>,
    errors_only: bool,
) {
    let Some(lines) = read_payload_lines(input) else {
        return;
    };
    let min_len = min_len.unwrap_or_else(default_min_payload_len);

    let start = Instant::now();
    let (items, telemetry) = decode_batch_with_telemetry(&lines, min_len);
    let elapsed = start.elapsed();

    let status = if errors_only {
        StatusFilter::Error
    } else {
        StatusFilter::All
    };
    let needle = filter.unwrap_or("");
    let selected: Vec<_> = filter_items(&items, needle, status)
        .into_iter()
        .cloned()
        .collect();

    if json {
        let report = Report::new(selected, Utc::now());
        match serde_json::to_string_pretty(&report) {
            Ok(out) => println!("{out}"),
            Err(err) => eprintln!("Failed to serialize report: {err}"),
        }
        return;
    }

    let stats = batch_stats(&selected);
    println!("File: {} ({} lines)", input.display(), lines.len());
    println!(
        "Batch: {} supplied, {} duplicates dropped, {} below minimum length ({:.2?})",
        telemetry.supplied, telemetry.duplicates_dropped, telemetry.below_min_length, elapsed
    );
    println!(
        "Decoded: {} ok, {} errors, {} unique barcodes",
        stats.succeeded, stats.failed, stats.unique_barcodes
    );
    for (index, item) in selected.iter().enumerate() {
        match &item.record.error {
            Some(error) => println!("  {}: error: {} ({})", index + 1, error, item.raw),
            None => println!(
                "  {}: barcode={} serial={} expiry={} lot={}",
                index + 1,
                display_field(&item.record.barcode),
                display_field(&item.record.serial_number),
                display_field(&item.record.expiry_date),
                display_field(&item.record.lot_number)
            ),
        }
    }
}

fn report_cmd(input: &Path) {
    let Some(lines) = read_payload_lines(input) else {
        return;
    };
    let (items, _) = decode_batch_with_telemetry(&lines, default_min_payload_len());
    print!("{}", render_text_report(&items, Utc::now()));
}

fn read_payload_lines(input: &Path) -> Option<Vec<String>> {
    match std::fs::read_to_string(input) {
        Ok(content) => Some(payload_lines(&content)),
        Err(err) => {
            eprintln!("Failed to read {}: {}", input.display(), err);
            None
        }
    }
}
