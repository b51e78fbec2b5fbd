use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a payload could not be decoded at all
///
/// Partial decodes are not errors: a payload missing an optional AI simply
/// leaves the matching field empty. `DecodeError` covers the two cases
/// where no field of the record can be trusted.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DecodeError {
    /// Nothing left to decode after normalization stripped the payload
    #[error("payload is empty after normalization")]
    EmptyPayload,
    /// Defect in the segment walk itself, carrying the panic message
    #[error("payload decoding failed: {0}")]
    Internal(String),
}

/// Decoded pharmaceutical data-carrier payload
///
/// Every field the payload did not carry stays an empty string; absence is
/// not an error. Callers distinguish a failed decode from a sparse payload
/// by checking the `error` field, never by field emptiness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecord {
    /// Product barcode (GTIN), at most 13 characters (AI 010)
    pub barcode: String,
    /// Serial number (AI 21)
    pub serial_number: String,
    /// Expiry date formatted `DD.MM.YYYY`, rebuilt from YYMMDD (AI 17)
    pub expiry_date: String,
    /// Lot/batch number (AI 10)
    pub lot_number: String,
    /// Set only when the decode failed outright; all fields are empty then
    pub error: Option<DecodeError>,
}

impl ParsedRecord {
    /// Create a record for a decode that failed before any field was read
    pub fn failed(error: DecodeError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    /// Check whether decoding completed (fields may still be empty)
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
