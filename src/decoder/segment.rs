//! Application Identifier segment walk.
//!
//! A single cursor moves left to right over the normalized payload. At each
//! position the decoder tries to match an AI code (longest first), consumes
//! the value that follows according to the matched entry's rule, and writes
//! it into the output record. Characters that match nothing are skipped one
//! at a time instead of failing the payload: scanner output routinely
//! carries stray bytes between fields, and a decoder that gave up on the
//! first one would throw away everything after it.

use std::any::Any;
use std::panic;

use crate::debug::debug_enabled;
use crate::decoder::expiry::ExpiryDecoder;
use crate::decoder::tables::{Field, ValueRule, match_ai, starts_at_ai_code};
use crate::models::{DecodeError, ParsedRecord};

/// ASCII Group Separator, the GS1 terminator for variable-length fields
pub const GROUP_SEPARATOR: char = '\u{1D}';

/// Segment decoder turning one normalized payload into a record
pub struct SegmentDecoder;

impl SegmentDecoder {
    /// Decode a normalized payload.
    ///
    /// Never panics. An empty payload yields a record carrying
    /// [`DecodeError::EmptyPayload`]; a defect in the walk itself is caught
    /// and surfaced as [`DecodeError::Internal`]. Everything else, however
    /// malformed, degrades to a record with some or all fields empty.
    pub fn decode(normalized: &str) -> ParsedRecord {
        if normalized.is_empty() {
            return ParsedRecord::failed(DecodeError::EmptyPayload);
        }
        match panic::catch_unwind(|| Self::walk(normalized)) {
            Ok(record) => record,
            Err(cause) => ParsedRecord::failed(DecodeError::Internal(panic_message(cause.as_ref()))),
        }
    }

    fn walk(normalized: &str) -> ParsedRecord {
        let chars: Vec<char> = normalized.chars().collect();
        let mut record = ParsedRecord::default();
        let mut cursor = Cursor::new(&chars);

        while !cursor.at_end() {
            let Some(entry) = match_ai(cursor.rest()) else {
                // Stray character between fields; skip it and resync.
                cursor.advance(1);
                continue;
            };
            cursor.advance(entry.code.len());

            let value = match entry.rule {
                ValueRule::Fixed(len) => cursor.take(len),
                ValueRule::Terminated => {
                    let value = cursor.take_until_terminator();
                    // The GS exists only to close this field; consume it.
                    if cursor.peek() == Some(GROUP_SEPARATOR) {
                        cursor.advance(1);
                    }
                    value
                }
                ValueRule::Remainder => cursor.take_rest(),
            };

            if cfg!(debug_assertions) && debug_enabled() {
                eprintln!("SEGMENT: AI {} -> {:?} = {:?}", entry.code, entry.field, value);
            }

            apply_value(&mut record, entry.field, value);

            if entry.rule == ValueRule::Remainder {
                break;
            }
        }

        record
    }
}

/// Write a decoded value into its record field. A repeated AI overwrites:
/// the last occurrence in the payload wins.
fn apply_value(record: &mut ParsedRecord, field: Field, value: String) {
    match field {
        Field::Gtin => record.barcode = value,
        Field::Serial => record.serial_number = value,
        Field::Expiry => {
            let digits: Vec<char> = value.chars().collect();
            if let Some(formatted) = ExpiryDecoder::decode(&digits) {
                record.expiry_date = formatted;
            }
        }
        Field::Lot => record.lot_number = value,
    }
}

fn panic_message(cause: &(dyn Any + Send)) -> String {
    if let Some(message) = cause.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = cause.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

struct Cursor<'a> {
    chars: &'a [char],
    idx: usize,
}

impl<'a> Cursor<'a> {
    fn new(chars: &'a [char]) -> Self {
        Self { chars, idx: 0 }
    }

    fn at_end(&self) -> bool {
        self.idx >= self.chars.len()
    }

    fn rest(&self) -> &'a [char] {
        &self.chars[self.idx..]
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.idx).copied()
    }

    fn advance(&mut self, n: usize) {
        self.idx = (self.idx + n).min(self.chars.len());
    }

    /// Take up to `n` characters, fewer when the payload runs out.
    fn take(&mut self, n: usize) -> String {
        let end = (self.idx + n).min(self.chars.len());
        let value = self.chars[self.idx..end].iter().collect();
        self.idx = end;
        value
    }

    /// Take every remaining character.
    fn take_rest(&mut self) -> String {
        let value = self.chars[self.idx..].iter().collect();
        self.idx = self.chars.len();
        value
    }

    /// Collect characters until a field terminator: the start of another AI
    /// code, a Group Separator, a space, or a semicolon. The terminator is
    /// left unconsumed. The collected span may be empty.
    fn take_until_terminator(&mut self) -> String {
        let start = self.idx;
        while self.idx < self.chars.len() {
            let ch = self.chars[self.idx];
            if ch == GROUP_SEPARATOR || ch == ' ' || ch == ';' {
                break;
            }
            if starts_at_ai_code(&self.chars[self.idx..]) {
                break;
            }
            self.idx += 1;
        }
        self.chars[start..self.idx].iter().collect()
    }
}
