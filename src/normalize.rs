//! Payload normalization, the first stage of every decode.
//!
//! Scanner output and manual transcription wrap GS1 payloads in
//! presentation artifacts: AI brackets like `(01)`, stray whitespace,
//! hyphens, sometimes a UTF-8 BOM pasted in from a file. All of it is
//! stripped before the segment decoder runs. The ASCII Group Separator
//! (0x1D) is not whitespace and must survive normalization: it is the only
//! terminator a variable-length field is guaranteed to have.

/// Bracket characters printers wrap AI codes in on human-readable labels.
const BRACKETS: [char; 6] = ['(', ')', '[', ']', '{', '}'];

/// Strip presentation artifacts from a raw payload.
///
/// Removes all brackets in `()[]{}`, all Unicode whitespace, the U+FEFF
/// byte-order mark, and hyphens. Digits, letters and the Group Separator
/// pass through untouched, so normalization never discards decodable
/// content. Works for any input, including empty, and is idempotent.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        // char::is_whitespace does not cover the BOM; check it explicitly.
        if BRACKETS.contains(&ch) || ch.is_whitespace() || ch == '\u{FEFF}' || ch == '-' {
            continue;
        }
        out.push(ch);
    }
    out
}
