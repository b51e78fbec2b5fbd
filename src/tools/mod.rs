use crate::batch::BatchItem;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

/// Split file-shaped content into candidate payload lines.
///
/// One payload per line. Surrounding whitespace is trimmed and blank lines
/// are dropped; everything else is kept verbatim, including lines that will
/// later fail the batch length filter. Reading the file itself is the
/// caller's job.
pub fn payload_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Summary statistics for a decoded batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    /// Items in the batch.
    pub total: usize,
    /// Items decoded without error.
    pub succeeded: usize,
    /// Items whose decode produced an error.
    pub failed: usize,
    /// Distinct non-empty barcodes among the successful decodes.
    pub unique_barcodes: usize,
}

/// Compute summary statistics for a decoded batch.
pub fn batch_stats(items: &[BatchItem]) -> BatchStats {
    let mut stats = BatchStats {
        total: items.len(),
        ..BatchStats::default()
    };
    let mut barcodes = HashSet::new();
    for item in items {
        if item.record.is_ok() {
            stats.succeeded += 1;
            if !item.record.barcode.is_empty() {
                barcodes.insert(item.record.barcode.as_str());
            }
        } else {
            stats.failed += 1;
        }
    }
    stats.unique_barcodes = barcodes.len();
    stats
}

/// Decode outcomes a filter keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Keep every item.
    All,
    /// Keep only error-free decodes.
    Success,
    /// Keep only failed decodes.
    Error,
}

/// Filter batch items by outcome and by a case-insensitive needle.
///
/// The needle is matched as a substring against the raw payload, barcode,
/// serial number and lot number. An empty needle matches everything.
pub fn filter_items<'a>(
    items: &'a [BatchItem],
    needle: &str,
    status: StatusFilter,
) -> Vec<&'a BatchItem> {
    let needle = needle.to_lowercase();
    items
        .iter()
        .filter(|item| match status {
            StatusFilter::All => true,
            StatusFilter::Success => item.record.is_ok(),
            StatusFilter::Error => !item.record.is_ok(),
        })
        .filter(|item| needle.is_empty() || matches_needle(item, &needle))
        .collect()
}

fn matches_needle(item: &BatchItem, lowercase_needle: &str) -> bool {
    let record = &item.record;
    item.raw.to_lowercase().contains(lowercase_needle)
        || record.barcode.to_lowercase().contains(lowercase_needle)
        || record.serial_number.to_lowercase().contains(lowercase_needle)
        || record.lot_number.to_lowercase().contains(lowercase_needle)
}

/// Placeholder printed for a field the payload did not carry.
const FIELD_MISSING: &str = "not found";

/// Render a plain-text report for a decoded batch.
///
/// Header with generation time and total count, then one block per item:
/// the raw payload, the decode status, and either the decoded fields or
/// the error message.
pub fn render_text_report(items: &[BatchItem], generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str("GS1 payload decode report\n");
    out.push_str(&format!(
        "Generated: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!("Total results: {}\n", items.len()));
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");

    for (index, item) in items.iter().enumerate() {
        let record = &item.record;
        out.push_str(&format!("{}. Payload: {}\n", index + 1, item.raw));
        match &record.error {
            None => {
                out.push_str("   Status: ok\n");
                out.push_str(&format!("   Barcode: {}\n", or_missing(&record.barcode)));
                out.push_str(&format!(
                    "   Serial number: {}\n",
                    or_missing(&record.serial_number)
                ));
                out.push_str(&format!(
                    "   Expiry date: {}\n",
                    or_missing(&record.expiry_date)
                ));
                out.push_str(&format!(
                    "   Lot number: {}\n",
                    or_missing(&record.lot_number)
                ));
            }
            Some(error) => {
                out.push_str("   Status: error\n");
                out.push_str(&format!("   Error: {error}\n"));
            }
        }
        out.push('\n');
    }

    out
}

fn or_missing(value: &str) -> &str {
    if value.is_empty() { FIELD_MISSING } else { value }
}

/// Serializable report for a decoded batch: statistics plus every item.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Batch summary statistics.
    pub stats: BatchStats,
    /// Decoded items in batch order.
    pub items: Vec<BatchItem>,
}

impl Report {
    /// Build a report from a decoded batch.
    pub fn new(items: Vec<BatchItem>, generated_at: DateTime<Utc>) -> Self {
        let stats = batch_stats(&items);
        Self {
            generated_at,
            stats,
            items,
        }
    }
}
