//! RustGS1 - GS1 data-carrier payload parsing for pharmaceutical packs
//!
//! A pure Rust library that turns the raw string a 2D barcode scanner emits
//! into structured product data: GTIN barcode, serial number, expiry date
//! and lot number. Built for lenient handling of real-world scanner output:
//! presentation artifacts are stripped up front, stray characters between
//! fields are skipped, and a malformed payload degrades to empty fields
//! instead of an error.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Batch decoding of payload sequences (dedupe, length filter, parallel decode)
pub mod batch;
mod config;
mod debug;
/// Payload decoding modules (AI dispatch table, segment walk, expiry rules)
pub mod decoder;
/// Core data structures (ParsedRecord, DecodeError)
pub mod models;
/// Payload normalization (presentation artifact stripping)
pub mod normalize;
/// Support helpers for reporting and the CLI (statistics, filters, rendering)
pub mod tools;

pub use batch::{BatchItem, BatchTelemetry};
pub use models::{DecodeError, ParsedRecord};

use decoder::segment::SegmentDecoder;

/// Parse one raw payload into a record.
///
/// # Arguments
/// * `raw` - Payload exactly as scanned or transcribed
///
/// # Returns
/// A record with every recognized field populated. Check the record's
/// `error` for outright failures; an absent AI just leaves its field empty.
///
/// # Example
/// ```
/// let record = rust_gs1::parse("(010)1234567890123(21)SER1");
/// assert_eq!(record.barcode, "1234567890123");
/// assert_eq!(record.serial_number, "SER1");
/// ```
pub fn parse(raw: &str) -> ParsedRecord {
    let normalized = normalize::normalize(raw);
    SegmentDecoder::decode(&normalized)
}

/// Parse a sequence of raw payloads with default batch settings.
///
/// # Arguments
/// * `inputs` - Raw payloads in scan order
///
/// # Returns
/// One item per surviving input, in input order. Duplicates and entries
/// below the minimum viable length are dropped before decoding.
pub fn parse_batch(inputs: &[String]) -> Vec<BatchItem> {
    batch::decode_batch(inputs)
}

/// Parser with configuration options
pub struct Parser {
    /// Minimum normalized length for batch entries
    min_payload_len: usize,
}

impl Parser {
    /// Create a parser with default settings
    pub fn new() -> Self {
        Self {
            min_payload_len: batch::default_min_payload_len(),
        }
    }

    /// Create a parser with a specific batch minimum payload length
    pub fn with_min_payload_len(min_payload_len: usize) -> Self {
        Self { min_payload_len }
    }

    /// Parse a single raw payload
    pub fn parse(&self, raw: &str) -> ParsedRecord {
        parse(raw)
    }

    /// Parse a sequence of raw payloads using this parser's settings
    pub fn parse_batch(&self, inputs: &[String]) -> Vec<BatchItem> {
        batch::decode_batch_with_min_len(inputs, self.min_payload_len)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
