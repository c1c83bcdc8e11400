use pretty_assertions::assert_eq;
use rainersoft_types::Locale;
use rainersoft_validation::{
    validate_cnpj, validate_cpf, validate_email, validate_message, validate_phone, validate_slug,
    validate_text, validate_url, validate_username,
};

// ── validate_email ───────────────────────────────────────────────

#[test]
fn email_accepts_simple_address() {
    assert!(validate_email("user@example.com", Locale::EnUs).is_valid());
    assert!(validate_email("  first.last+tag@sub.example.co  ", Locale::EnUs).is_valid());
}

#[test]
fn email_rejects_malformed() {
    let r = validate_email("not-an-email", Locale::EnUs);
    assert!(!r.is_valid());
    assert_eq!(r.errors(), ["Invalid email"]);

    for bad in ["a@b", "@example.com", "user@", "us er@example.com", "a@@b.com"] {
        assert!(!validate_email(bad, Locale::EnUs).is_valid(), "{bad}");
    }
}

#[test]
fn email_empty_is_required() {
    let r = validate_email("", Locale::PtBr);
    assert_eq!(r.errors(), ["Email é obrigatório"]);
}

#[test]
fn email_message_is_localized() {
    assert_eq!(validate_email("x", Locale::PtBr).first_error(), Some("Email inválido"));
    assert_eq!(
        validate_email("x", Locale::EsEs).first_error(),
        Some("Correo electrónico no válido")
    );
}

// ── validate_username ────────────────────────────────────────────

#[test]
fn username_valid() {
    assert!(validate_username("john_doe-99", Locale::EnUs).is_valid());
}

#[test]
fn username_too_short() {
    let r = validate_username("ab", Locale::EnUs);
    assert_eq!(r.errors(), ["Username must be between 3 and 20 characters"]);
}

#[test]
fn username_reports_length_and_chars_together() {
    let r = validate_username("a!", Locale::EnUs);
    assert_eq!(r.errors().len(), 2);
}

#[test]
fn username_rejects_spaces() {
    assert!(!validate_username("john doe", Locale::EnUs).is_valid());
}

// ── validate_slug ────────────────────────────────────────────────

#[test]
fn slug_valid() {
    assert!(validate_slug("my-first-post-2024", Locale::EnUs).is_valid());
}

#[test]
fn slug_rejects_bad_shape() {
    for bad in ["Has-Caps", "double--hyphen", "-leading", "trailing-", "under_score"] {
        assert!(!validate_slug(bad, Locale::EnUs).is_valid(), "{bad}");
    }
}

#[test]
fn slug_too_long() {
    let long = "a".repeat(101);
    let r = validate_slug(&long, Locale::EnUs);
    assert_eq!(r.errors(), ["Slug must be between 3 and 100 characters"]);
}

// ── validate_url ─────────────────────────────────────────────────

#[test]
fn url_accepts_absolute() {
    assert!(validate_url("https://example.com/path?q=1", Locale::EnUs).is_valid());
    assert!(validate_url("mailto:someone@example.com", Locale::EnUs).is_valid());
}

#[test]
fn url_rejects_relative_or_garbage() {
    for bad in ["example.com", "/just/a/path", "http://", "ht tp://x"] {
        let r = validate_url(bad, Locale::EnUs);
        assert_eq!(r.errors(), ["Invalid URL"], "{bad}");
    }
}

// ── validate_phone ───────────────────────────────────────────────

#[test]
fn phone_per_locale() {
    assert!(validate_phone("(11) 98765-4321", Locale::PtBr).is_valid());
    assert!(validate_phone("(11) 3456-7890", Locale::PtBr).is_valid());
    assert!(validate_phone("+1 (555) 123-4567", Locale::EnUs).is_valid());
    assert!(validate_phone("612 345 678", Locale::EsEs).is_valid());
}

#[test]
fn phone_rejects_wrong_count_or_letters() {
    assert!(!validate_phone("12345", Locale::PtBr).is_valid());
    assert!(!validate_phone("555-CALL-NOW", Locale::EnUs).is_valid());
    assert!(!validate_phone("25551234567", Locale::EnUs).is_valid());
}

// ── validate_text / validate_message ─────────────────────────────

#[test]
fn text_bounds() {
    assert!(validate_text("hello", 1, 10, "Name", Locale::EnUs).is_valid());
    assert_eq!(
        validate_text("hi", 3, 10, "Name", Locale::EnUs).errors(),
        ["Name must be at least 3 characters"]
    );
    assert_eq!(
        validate_text("hello world", 1, 5, "Name", Locale::EnUs).errors(),
        ["Name must be at most 5 characters"]
    );
}

#[test]
fn text_optional_when_min_zero() {
    assert!(validate_text("   ", 0, 10, "Bio", Locale::EnUs).is_valid());
}

#[test]
fn text_trims_before_measuring() {
    assert_eq!(
        validate_text("   ", 1, 10, "Name", Locale::EnUs).errors(),
        ["Name is required"]
    );
}

#[test]
fn message_uses_preset_bounds_and_localized_field() {
    assert!(validate_message("This is long enough.", Locale::EnUs).is_valid());
    assert_eq!(
        validate_message("short", Locale::PtBr).errors(),
        ["Mensagem deve ter pelo menos 10 caracteres"]
    );
    let long = "x".repeat(1001);
    assert_eq!(
        validate_message(&long, Locale::EnUs).errors(),
        ["Message must be at most 1000 characters"]
    );
}

// ── documents ────────────────────────────────────────────────────

#[test]
fn cpf_and_cnpj_validators() {
    assert!(validate_cpf("529.982.247-25", Locale::PtBr).is_valid());
    assert_eq!(validate_cpf("111.111.111-11", Locale::PtBr).errors(), ["CPF inválido"]);
    assert!(validate_cnpj("11.222.333/0001-81", Locale::PtBr).is_valid());
    assert_eq!(validate_cnpj("", Locale::EnUs).errors(), ["CNPJ is required"]);
}
