//! Text helpers for rainersoft-utils.
//!
//! - [`text_to_slug`] and friends for URL-safe identifiers and display text
//! - Brazilian CPF/CNPJ formatting and modulo-11 check-digit validation
//! - Locale-aware phone number formatting
//! - SHA-256 hashing to lowercase hex
//! - Hex/RGB color conversion
//!
//! Every function is pure. Malformed input is passed through unchanged
//! (formatters) or reported as `false` (checksums); only hex color parsing
//! returns an error.

mod color;
mod document;
mod hash;
mod phone;
mod string;

pub use color::{contrast_text_color, darken, hex_to_rgb, lighten, rgb_to_hex, Rgb};
pub use document::{
    cnpj_check_digits, cpf_check_digits, format_cnpj, format_cpf, is_cnpj, is_cpf, only_digits,
};
pub use hash::hash;
pub use phone::format_phone;
pub use string::{
    capitalize, get_initials, remove_accents, strip_html, text_to_slug, truncate,
    truncate_with_suffix, word_count, DEFAULT_TRUNCATE_SUFFIX,
};
