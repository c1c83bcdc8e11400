//! Field validators: email, username, slug, URL, phone, free text, documents.

use rainersoft_text::{is_cnpj, is_cpf, only_digits};
use rainersoft_types::{interpolate, Locale, ValidationResult};
use regex_lite::Regex;
use std::sync::LazyLock;
use url::Url;

pub const USERNAME_MIN_CHARS: usize = 3;
pub const USERNAME_MAX_CHARS: usize = 20;
pub const SLUG_MIN_CHARS: usize = 3;
pub const SLUG_MAX_CHARS: usize = 100;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 1000;

// Syntactic check only: no DNS lookup, no internationalized domains.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex"));
static USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("static regex"));
static SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("static regex"));

fn required(field: &str, locale: Locale) -> ValidationResult {
    ValidationResult::invalid(interpolate(locale.messages().required, &[("field", field)]))
}

/// Checks that `email` looks like `local@domain.tld`.
#[must_use]
pub fn validate_email(email: &str, locale: Locale) -> ValidationResult {
    let m = locale.messages();
    let email = email.trim();
    if email.is_empty() {
        return required(m.field_email, locale);
    }
    if !EMAIL.is_match(email) {
        return ValidationResult::invalid(m.email_invalid);
    }
    ValidationResult::valid()
}

/// Checks username length (3–20) and characters (letters, digits, `_`, `-`).
///
/// Both problems are reported when both apply.
#[must_use]
pub fn validate_username(username: &str, locale: Locale) -> ValidationResult {
    let m = locale.messages();
    if username.is_empty() {
        return required(m.field_username, locale);
    }

    let mut errors = Vec::new();
    let len = username.chars().count();
    if !(USERNAME_MIN_CHARS..=USERNAME_MAX_CHARS).contains(&len) {
        errors.push(bounds_message(m.username_length, USERNAME_MIN_CHARS, USERNAME_MAX_CHARS));
    }
    if !USERNAME.is_match(username) {
        errors.push(m.username_chars.to_string());
    }
    ValidationResult::from_errors(errors)
}

/// Checks slug length (3–100) and shape (`lowercase-words-and-digits`).
#[must_use]
pub fn validate_slug(slug: &str, locale: Locale) -> ValidationResult {
    let m = locale.messages();
    if slug.is_empty() {
        return required(m.field_slug, locale);
    }

    let mut errors = Vec::new();
    let len = slug.chars().count();
    if !(SLUG_MIN_CHARS..=SLUG_MAX_CHARS).contains(&len) {
        errors.push(bounds_message(m.slug_length, SLUG_MIN_CHARS, SLUG_MAX_CHARS));
    }
    if !SLUG.is_match(slug) {
        errors.push(m.slug_chars.to_string());
    }
    ValidationResult::from_errors(errors)
}

fn bounds_message(template: &str, min: usize, max: usize) -> String {
    interpolate(
        template,
        &[("min", min.to_string().as_str()), ("max", max.to_string().as_str())],
    )
}

/// Checks that `url` parses as an absolute URL.
///
/// Parse failures of any kind yield the same "invalid URL" message.
#[must_use]
pub fn validate_url(url: &str, locale: Locale) -> ValidationResult {
    let m = locale.messages();
    let url = url.trim();
    if url.is_empty() {
        return required(m.field_url, locale);
    }
    match Url::parse(url) {
        Ok(_) => ValidationResult::valid(),
        Err(e) => {
            tracing::debug!(error = %e, "URL failed to parse");
            ValidationResult::invalid(m.url_invalid)
        }
    }
}

/// Checks that `phone` has a plausible digit count for `locale`.
///
/// pt-BR accepts 10 or 11 digits (landline or mobile with area code), en-US
/// 10 digits or 11 starting with `1`, es-ES 9 digits.
#[must_use]
pub fn validate_phone(phone: &str, locale: Locale) -> ValidationResult {
    let m = locale.messages();
    if phone.trim().is_empty() {
        return required(m.field_phone, locale);
    }

    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '(' | ')' | '-' | '+' | '.');
    let digits = only_digits(phone);
    let plausible = match locale {
        Locale::PtBr => matches!(digits.len(), 10 | 11),
        Locale::EnUs => digits.len() == 10 || (digits.len() == 11 && digits.starts_with('1')),
        Locale::EsEs => digits.len() == 9,
    };

    if phone.chars().all(allowed) && plausible {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(m.phone_invalid)
    }
}

/// Checks trimmed length bounds for a free-text field.
///
/// `field_name` is inserted into the messages as is, so pass it already
/// localized. With `min == 0` an empty value is accepted.
#[must_use]
pub fn validate_text(
    text: &str,
    min: usize,
    max: usize,
    field_name: &str,
    locale: Locale,
) -> ValidationResult {
    let m = locale.messages();
    let len = text.trim().chars().count();

    if len == 0 && min > 0 {
        return required(field_name, locale);
    }
    if len < min {
        return ValidationResult::invalid(interpolate(
            m.too_short,
            &[("field", field_name), ("min", min.to_string().as_str())],
        ));
    }
    if len > max {
        return ValidationResult::invalid(interpolate(
            m.too_long,
            &[("field", field_name), ("max", max.to_string().as_str())],
        ));
    }
    ValidationResult::valid()
}

/// [`validate_text`] for contact-form messages: 10 to 1000 characters.
#[must_use]
pub fn validate_message(text: &str, locale: Locale) -> ValidationResult {
    validate_text(
        text,
        MESSAGE_MIN_CHARS,
        MESSAGE_MAX_CHARS,
        locale.messages().field_message,
        locale,
    )
}

/// Checks a CPF's length and check digits.
#[must_use]
pub fn validate_cpf(cpf: &str, locale: Locale) -> ValidationResult {
    let m = locale.messages();
    if cpf.trim().is_empty() {
        return required(m.field_cpf, locale);
    }
    if is_cpf(cpf) {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(m.cpf_invalid)
    }
}

/// Checks a CNPJ's length and check digits.
#[must_use]
pub fn validate_cnpj(cnpj: &str, locale: Locale) -> ValidationResult {
    let m = locale.messages();
    if cnpj.trim().is_empty() {
        return required(m.field_cnpj, locale);
    }
    if is_cnpj(cnpj) {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(m.cnpj_invalid)
    }
}
