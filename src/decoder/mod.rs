//! GS1 payload decoding modules
//!
//! Everything between a normalized payload string and a populated record:
//! - Application Identifier dispatch table and value rules
//! - Segment walk (cursor, AI matching, value consumption)
//! - Expiry value reformatting (YYMMDD to DD.MM.YYYY)

/// Expiry date (AI 17) value decoder
pub mod expiry;
/// Segment walk that orchestrates the decode of one payload
pub mod segment;
/// Application Identifier dispatch table and value rules
pub mod tables;
