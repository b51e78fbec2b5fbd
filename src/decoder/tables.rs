/// Record field an Application Identifier populates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Product barcode (GTIN)
    Gtin,
    /// Serial number
    Serial,
    /// Expiry date
    Expiry,
    /// Lot/batch number
    Lot,
}

/// How many characters an AI value occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    /// Exactly `n` characters; truncated without error when fewer remain
    Fixed(usize),
    /// Scan until a terminator: another AI code, a Group Separator, a
    /// space, or a semicolon
    Terminated,
    /// Every remaining character; ends the segment walk
    Remainder,
}

/// One Application Identifier the decoder understands
#[derive(Debug, Clone, Copy)]
pub struct AiEntry {
    /// Literal digit prefix, two or three characters
    pub code: &'static str,
    /// Value-consumption rule
    pub rule: ValueRule,
    /// Record field the value lands in
    pub field: Field,
}

// Dispatch order matters: longest codes first so "010" wins over a two-digit
// read of "01", and the Remainder entry last so lot only matches once nothing
// else does. Adding an AI means adding a row; the segment walk never changes.
static AI_TABLE: [AiEntry; 4] = [
    AiEntry {
        code: "010",
        rule: ValueRule::Fixed(13),
        field: Field::Gtin,
    },
    AiEntry {
        code: "21",
        rule: ValueRule::Terminated,
        field: Field::Serial,
    },
    AiEntry {
        code: "17",
        rule: ValueRule::Fixed(6),
        field: Field::Expiry,
    },
    AiEntry {
        code: "10",
        rule: ValueRule::Remainder,
        field: Field::Lot,
    },
];

/// Match an AI code at the start of `rest`, longest prefix first.
pub fn match_ai(rest: &[char]) -> Option<&'static AiEntry> {
    AI_TABLE.iter().find(|entry| starts_with_code(rest, entry.code))
}

/// Check whether `rest` begins with any known AI code. Variable-length
/// values end where the next AI begins, so the terminator scan uses this.
pub fn starts_at_ai_code(rest: &[char]) -> bool {
    match_ai(rest).is_some()
}

fn starts_with_code(rest: &[char], code: &str) -> bool {
    // AI codes are ASCII digits, so byte length equals character count.
    if rest.len() < code.len() {
        return false;
    }
    code.chars().zip(rest).all(|(code_ch, &rest_ch)| code_ch == rest_ch)
}
