/// Decoded payload record and decode errors
pub mod record;

pub use record::{DecodeError, ParsedRecord};
