//! Integration tests for GS1 payload parsing regression testing
//!
//! These tests pin the end-to-end behavior of normalization, AI dispatch,
//! value consumption and batch decoding against known payload shapes seen
//! in the field, so refactors of the segment walk cannot silently change
//! decoded output.

use rust_gs1::tools::{StatusFilter, batch_stats, filter_items, payload_lines, render_text_report};
use rust_gs1::{DecodeError, Parser, parse, parse_batch};

/// Minimal payload: GTIN plus serial, no separators at all
#[test]
fn test_minimal_gtin_serial_payload() {
    let record = parse("010abc1234567890123212345");
    assert_eq!(record.barcode, "abc1234567890");
    assert_eq!(record.serial_number, "2345");
    assert_eq!(record.expiry_date, "");
    assert_eq!(record.lot_number, "");
    assert!(record.is_ok());
}

/// Full four-field payload with a Group Separator after the serial
#[test]
fn test_full_label_with_separator() {
    let record = parse("010123456789012321SER123\u{1D}1730062510LOT99");
    assert_eq!(record.barcode, "1234567890123");
    assert_eq!(record.serial_number, "SER123");
    assert_eq!(record.expiry_date, "25.06.2030");
    assert_eq!(record.lot_number, "LOT99");
}

/// Human-readable label renditions decode the same as raw scanner output
#[test]
fn test_bracketed_label_formats() {
    let plain = parse("010123456789012321SER123\u{1D}1730062510LOT99");
    let bracketed = parse("(010)1234567890123(21)SER123\u{1D}(17)300625(10)LOT99");
    let spaced = parse("010 1234567890123 21 SER123\u{1D}17 300625 10 LOT99");
    let hyphenated = parse("010-1234567890123-21-SER123\u{1D}17-300625-10-LOT99");
    assert_eq!(bracketed, plain);
    assert_eq!(spaced, plain);
    assert_eq!(hyphenated, plain);
}

/// YYMMDD wire order comes out day-first with the fixed 20xx century
#[test]
fn test_expiry_reformat() {
    assert_eq!(parse("0101234567890123417251231").expiry_date, "31.12.2025");
    assert_eq!(parse("17000229").expiry_date, "29.02.2000");
}

/// A payload shorter than the fixed GTIN length keeps what remains
#[test]
fn test_truncated_gtin() {
    let record = parse("0101234");
    assert_eq!(record.barcode, "1234");
    assert!(record.is_ok());

    // Truncated expiry cannot name a date; the field stays empty.
    let record = parse("17251230103");
    assert_eq!(record.expiry_date, "30.12.2025");
    let record = parse("171231");
    assert_eq!(record.expiry_date, "");
}

/// Stray characters between fields are skipped, not fatal
#[test]
fn test_noise_recovery() {
    let record = parse("**0101234567890123!!21SER7");
    assert_eq!(record.barcode, "1234567890123");
    assert_eq!(record.serial_number, "SER7");
    assert!(record.is_ok());
}

/// Serial values stop at any of the four terminator kinds
#[test]
fn test_group_separator_variants() {
    assert_eq!(parse("21ABC\u{1D}10L").serial_number, "ABC");
    assert_eq!(parse("21ABC;10L").serial_number, "ABC");
    assert_eq!(parse("21ABC10L").serial_number, "ABC");
    // A space inside the raw payload is stripped by normalization first,
    // so termination on space only matters for pre-normalized input.
    assert_eq!(parse("21ABCDE").serial_number, "ABCDE");
}

/// The lot field consumes everything to the end, even AI lookalikes
#[test]
fn test_lot_swallows_remainder() {
    let record = parse("10BATCH-21-17");
    assert_eq!(record.lot_number, "BATCH2117");
    assert_eq!(record.serial_number, "");
    assert_eq!(record.expiry_date, "");
}

/// When an AI repeats, the last occurrence wins
#[test]
fn test_repeated_ai_last_wins() {
    let record = parse("21FIRST\u{1D}21SECOND");
    assert_eq!(record.serial_number, "SECOND");
}

/// Empty and artifact-only payloads report EmptyPayload, nothing panics
#[test]
fn test_empty_and_blank_payloads() {
    assert_eq!(parse("").error, Some(DecodeError::EmptyPayload));
    assert_eq!(parse("   \t\n").error, Some(DecodeError::EmptyPayload));
    assert_eq!(parse("()[]{}--").error, Some(DecodeError::EmptyPayload));
}

/// Multi-byte characters pass through the cursor without panicking
#[test]
fn test_non_ascii_input_is_safe() {
    let record = parse("\u{1F9EA}0101234567890123");
    assert_eq!(record.barcode, "1234567890123");

    let record = parse("21\u{DC}R\u{DC}N10L\u{D6}T");
    assert_eq!(record.serial_number, "\u{DC}R\u{DC}N");
    assert_eq!(record.lot_number, "L\u{D6}T");
}

/// Batch decoding dedupes, length-filters and preserves input order
#[test]
fn test_batch_end_to_end() {
    let inputs = vec![
        "010123456789012321SER1".to_string(),
        "010123456789012321SER1".to_string(),
        "21AB".to_string(),
        "(010)9876543210987(10)LOTX".to_string(),
    ];
    let items = parse_batch(&inputs);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].record.serial_number, "SER1");
    assert_eq!(items[1].record.barcode, "9876543210987");
    assert_eq!(items[1].record.lot_number, "LOTX");

    let stats = batch_stats(&items);
    assert_eq!(stats.total, 2);
    assert_eq!(stats.succeeded, 2);
    assert_eq!(stats.unique_barcodes, 2);
}

/// Large batches take the parallel path and still match one-by-one parsing
#[test]
fn test_batch_parallel_matches_sequential() {
    let inputs: Vec<String> = (0..200)
        .map(|i| format!("010{i:013}21S{i}\u{1D}10L{i}"))
        .collect();
    let items = parse_batch(&inputs);
    assert_eq!(items.len(), inputs.len());
    for (item, raw) in items.iter().zip(&inputs) {
        assert_eq!(&item.raw, raw);
        assert_eq!(item.record, parse(raw));
        assert!(item.record.is_ok());
    }
    assert_eq!(items[199].record.serial_number, "S199");
    assert_eq!(items[199].record.lot_number, "L199");
}

/// Parser honors a caller-provided minimum payload length
#[test]
fn test_parser_min_len() {
    let inputs = vec!["21ABC\u{1D}".to_string()];
    assert!(Parser::new().parse_batch(&inputs).is_empty());
    let lax = Parser::with_min_payload_len(3).parse_batch(&inputs);
    assert_eq!(lax.len(), 1);
    assert_eq!(lax[0].record.serial_number, "ABC");
}

/// File-shaped input splits into payload lines and renders a text report
#[test]
fn test_report_end_to_end() {
    let content = "010123456789012321SER1\n\n  (010)9876543210987(10)LOTX  \n";
    let lines = payload_lines(content);
    assert_eq!(lines.len(), 2);

    let items = parse_batch(&lines);
    let report = render_text_report(&items, chrono::Utc::now());
    assert!(report.contains("Total results: 2"));
    assert!(report.contains("Barcode: 1234567890123"));
    assert!(report.contains("Lot number: LOTX"));

    let errors = filter_items(&items, "", StatusFilter::Error);
    assert!(errors.is_empty());
    let hits = filter_items(&items, "lotx", StatusFilter::Success);
    assert_eq!(hits.len(), 1);
}
