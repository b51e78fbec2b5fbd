/// Expiry date (AI 17) value decoder
/// Reformats the six-character YYMMDD wire value into `DD.MM.YYYY`
pub struct ExpiryDecoder;

impl ExpiryDecoder {
    /// Decode a YYMMDD expiry value into `DD.MM.20YY`.
    ///
    /// Returns `None` unless the value is exactly six characters long: a
    /// truncated value cannot name a date and leaves the field empty.
    /// The century is fixed to 20xx; dates outside 2000-2099 cannot be
    /// represented in this two-digit year scheme.
    pub fn decode(value: &[char]) -> Option<String> {
        if value.len() != 6 {
            return None;
        }
        let year: String = value[0..2].iter().collect();
        let month: String = value[2..4].iter().collect();
        let day: String = value[4..6].iter().collect();
        Some(format!("{day}.{month}.20{year}"))
    }
}
