//! Batch decoding of raw payload sequences.
//!
//! A scan session or an imported spreadsheet column yields hundreds of
//! payloads at once. The batch pipeline deduplicates them, drops entries too
//! short to be a viable payload, and decodes the rest independently, in
//! parallel above a size threshold since every decode is pure. Output order
//! always matches the order of the surviving inputs.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::debug::debug_enabled;
use crate::decoder::segment::SegmentDecoder;
use crate::models::ParsedRecord;
use crate::normalize::normalize;

/// One batch entry: the payload as supplied, its normalized form, and the
/// decoded record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchItem {
    /// Payload exactly as supplied by the caller
    pub raw: String,
    /// Payload after normalization, which is what the decoder saw
    pub normalized: String,
    /// Decode outcome
    pub record: ParsedRecord,
}

/// Stage-level counters for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchTelemetry {
    /// Entries supplied by the caller
    pub supplied: usize,
    /// Entries dropped as exact duplicates of an earlier entry
    pub duplicates_dropped: usize,
    /// Entries dropped because the normalized form was too short
    pub below_min_length: usize,
    /// Entries decoded without error
    pub decoded: usize,
    /// Entries whose decode produced an error
    pub decode_errors: usize,
}

/// Default minimum normalized length for batch entries.
pub fn default_min_payload_len() -> usize {
    config::min_payload_len()
}

/// Decode a sequence of raw payloads with the default minimum length.
///
/// Duplicates (exact string equality, first occurrence kept) and entries
/// whose normalized form is shorter than the minimum are discarded. The
/// survivors decode independently; output index matches surviving input
/// index.
pub fn decode_batch(inputs: &[String]) -> Vec<BatchItem> {
    decode_batch_with_min_len(inputs, config::min_payload_len())
}

/// Like [`decode_batch`] but with an explicit minimum normalized length.
pub fn decode_batch_with_min_len(inputs: &[String], min_len: usize) -> Vec<BatchItem> {
    decode_batch_with_telemetry(inputs, min_len).0
}

/// Like [`decode_batch_with_min_len`] but also collects stage-level
/// telemetry counters.
pub fn decode_batch_with_telemetry(
    inputs: &[String],
    min_len: usize,
) -> (Vec<BatchItem>, BatchTelemetry) {
    let mut tel = BatchTelemetry {
        supplied: inputs.len(),
        ..BatchTelemetry::default()
    };

    let mut seen = HashSet::new();
    let mut survivors: Vec<(&str, String)> = Vec::new();
    for raw in inputs {
        if !seen.insert(raw.as_str()) {
            tel.duplicates_dropped += 1;
            continue;
        }
        let normalized = normalize(raw);
        // Length in characters, not bytes; payloads are not always ASCII.
        if normalized.chars().count() < min_len {
            tel.below_min_length += 1;
            continue;
        }
        survivors.push((raw.as_str(), normalized));
    }

    if cfg!(debug_assertions) && debug_enabled() {
        eprintln!(
            "BATCH: {} supplied, {} survive dedupe and length filter",
            tel.supplied,
            survivors.len()
        );
    }

    let items: Vec<BatchItem> = if survivors.len() >= config::parallel_threshold() {
        survivors
            .into_par_iter()
            .map(|(raw, normalized)| decode_one(raw, normalized))
            .collect()
    } else {
        survivors
            .into_iter()
            .map(|(raw, normalized)| decode_one(raw, normalized))
            .collect()
    };

    for item in &items {
        if item.record.is_ok() {
            tel.decoded += 1;
        } else {
            tel.decode_errors += 1;
        }
    }

    (items, tel)
}

fn decode_one(raw: &str, normalized: String) -> BatchItem {
    let record = SegmentDecoder::decode(&normalized);
    BatchItem {
        raw: raw.to_string(),
        normalized,
        record,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(raws: &[&str]) -> Vec<String> {
        raws.iter().map(|raw| raw.to_string()).collect()
    }

    #[test]
    fn test_batch_decodes_in_input_order() {
        let batch = inputs(&[
            "010123456789012321SER1",
            "010999888777666552 21ABC",
        ]);
        let items = decode_batch_with_min_len(&batch, 10);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].record.barcode, "1234567890123");
        assert_eq!(items[1].record.barcode, "9998887776665");
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let batch = inputs(&[
            "010123456789012321SER1",
            "010123456789012321SER1",
            "010123456789012321SER1",
        ]);
        let (items, tel) = decode_batch_with_telemetry(&batch, 10);
        assert_eq!(items.len(), 1);
        assert_eq!(tel.supplied, 3);
        assert_eq!(tel.duplicates_dropped, 2);
    }

    #[test]
    fn test_dedupe_is_on_raw_not_normalized() {
        // Same payload with different artifacts: both survive dedupe.
        let batch = inputs(&["(010)1234567890123", "0101234567890123"]);
        let (items, tel) = decode_batch_with_telemetry(&batch, 10);
        assert_eq!(items.len(), 2);
        assert_eq!(tel.duplicates_dropped, 0);
        assert_eq!(items[0].normalized, items[1].normalized);
    }

    #[test]
    fn test_short_entries_dropped_after_normalization() {
        // "(21) AB-1" normalizes to "21AB1", five characters, under ten.
        let batch = inputs(&["(21) AB-1", "010123456789012321SER1"]);
        let (items, tel) = decode_batch_with_telemetry(&batch, 10);
        assert_eq!(items.len(), 1);
        assert_eq!(tel.below_min_length, 1);
        assert_eq!(items[0].record.serial_number, "SER1");
    }

    #[test]
    fn test_exact_minimum_length_survives() {
        let payload = "0101234567"; // exactly ten characters
        let items = decode_batch_with_min_len(&inputs(&[payload]), 10);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].record.barcode, "1234567");
    }

    #[test]
    fn test_telemetry_counts_decode_outcomes() {
        let batch = inputs(&["010123456789012321SER1", "xxxxxxxxxxxx"]);
        let (items, tel) = decode_batch_with_telemetry(&batch, 10);
        assert_eq!(items.len(), 2);
        // Noise-only payloads still decode, just to an empty record.
        assert_eq!(tel.decoded, 2);
        assert_eq!(tel.decode_errors, 0);
    }

    #[test]
    fn test_item_keeps_raw_and_normalized_forms() {
        let batch = inputs(&["(010)1234-5678 90123"]);
        let items = decode_batch_with_min_len(&batch, 10);
        assert_eq!(items[0].raw, "(010)1234-5678 90123");
        assert_eq!(items[0].normalized, "0101234567890123");
    }

    #[test]
    fn test_empty_batch() {
        let (items, tel) = decode_batch_with_telemetry(&[], 10);
        assert!(items.is_empty());
        assert_eq!(tel.supplied, 0);
    }
}
