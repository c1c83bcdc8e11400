//! Status codes for rainersoft-utils.
//!
//! Content and workflow records carry an upper-case status code (`DRAFT`,
//! `PUBLISHED`, `IN_PROGRESS`, ...). This crate turns a code into:
//! - a localized display label ([`translate_status`])
//! - a semantic tone for coloring ([`status_tone`])
//! - a badge variant for component libraries ([`status_variant`])
//!
//! Unknown codes are never an error: translation hands the input back
//! unchanged and classification falls into the neutral bucket.

mod code;
mod tone;

pub use code::StatusCode;
pub use tone::{BadgeVariant, StatusTone};

use rainersoft_types::Locale;
use std::borrow::Cow;

/// Translates a status code for display.
///
/// The code is matched case-insensitively, with `-` or spaces accepted for
/// `_`. Codes outside the known set are returned exactly as given.
#[must_use]
pub fn translate_status(code: &str, locale: Locale) -> Cow<'_, str> {
    match code.parse::<StatusCode>() {
        Ok(status) => Cow::Borrowed(status.label(locale)),
        Err(_) => {
            tracing::debug!(code, %locale, "no translation for status code");
            Cow::Borrowed(code)
        }
    }
}

/// [`translate_status`] for a runtime locale tag; unrecognised tags use pt-BR.
#[must_use]
pub fn translate_status_for_tag<'a>(code: &'a str, tag: &str) -> Cow<'a, str> {
    translate_status(code, Locale::from_tag_lossy(tag))
}

/// Semantic tone for a status code; unknown codes are [`StatusTone::Neutral`].
#[must_use]
pub fn status_tone(code: &str) -> StatusTone {
    code.parse::<StatusCode>()
        .map_or(StatusTone::Neutral, |s| s.tone())
}

/// Badge variant for a status code; unknown codes are [`BadgeVariant::Outline`].
#[must_use]
pub fn status_variant(code: &str) -> BadgeVariant {
    code.parse::<StatusCode>()
        .map_or(BadgeVariant::Outline, |s| s.variant())
}

/// Every known status code, for pickers and filters.
#[must_use]
pub fn all_statuses() -> &'static [StatusCode] {
    &StatusCode::ALL
}
