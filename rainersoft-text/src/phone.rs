//! Phone number formatting per locale.

use crate::document::only_digits;
use rainersoft_types::Locale;

/// Formats a phone number using the conventions of `locale`.
///
/// | Locale | Digits | Output |
/// |--------|--------|--------|
/// | pt-BR | 11 | `(11) 98765-4321` |
/// | pt-BR | 10 | `(11) 3456-7890` |
/// | en-US | 10 | `(555) 123-4567` |
/// | en-US | 11, leading `1` | `+1 (555) 123-4567` |
/// | es-ES | 9 | `612 345 678` |
///
/// Any other digit count returns the input unchanged.
#[must_use]
pub fn format_phone(phone: &str, locale: Locale) -> String {
    let digits = only_digits(phone);
    let d = digits.as_str();

    match (locale, d.len()) {
        (Locale::PtBr, 11) => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
        (Locale::PtBr, 10) => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        (Locale::EnUs, 10) => format!("({}) {}-{}", &d[..3], &d[3..6], &d[6..]),
        (Locale::EnUs, 11) if d.starts_with('1') => {
            format!("+1 ({}) {}-{}", &d[1..4], &d[4..7], &d[7..])
        }
        (Locale::EsEs, 9) => format!("{} {} {}", &d[..3], &d[3..6], &d[6..]),
        _ => phone.to_string(),
    }
}
