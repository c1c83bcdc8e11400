use pretty_assertions::assert_eq;
use rainersoft_status::{
    all_statuses, status_tone, status_variant, translate_status, translate_status_for_tag,
    BadgeVariant, StatusCode, StatusTone,
};
use rainersoft_types::Locale;
use std::borrow::Cow;

// ── translate_status ─────────────────────────────────────────────

#[test]
fn translates_known_codes() {
    assert_eq!(translate_status("DRAFT", Locale::EnUs), "Draft");
    assert_eq!(translate_status("DRAFT", Locale::PtBr), "Rascunho");
    assert_eq!(translate_status("DRAFT", Locale::EsEs), "Borrador");
    assert_eq!(translate_status("IN_PROGRESS", Locale::PtBr), "Em andamento");
}

#[test]
fn translation_is_case_and_separator_insensitive() {
    assert_eq!(translate_status("published", Locale::EnUs), "Published");
    assert_eq!(translate_status("in-progress", Locale::EnUs), "In progress");
}

#[test]
fn unknown_code_passes_through_unchanged() {
    let out = translate_status("UNKNOWN_CODE", Locale::EnUs);
    assert_eq!(out, "UNKNOWN_CODE");
    assert!(matches!(out, Cow::Borrowed(_)));
    assert_eq!(translate_status("", Locale::PtBr), "");
}

#[test]
fn every_code_has_a_label_in_every_locale() {
    for code in all_statuses() {
        for locale in Locale::ALL {
            assert!(!code.label(locale).is_empty(), "{code} {locale}");
        }
    }
}

#[test]
fn runtime_tag_falls_back_to_portuguese() {
    assert_eq!(translate_status_for_tag("ACTIVE", "en"), "Active");
    assert_eq!(translate_status_for_tag("ACTIVE", "es_ES"), "Activo");
    assert_eq!(translate_status_for_tag("ACTIVE", "fr-FR"), "Ativo");
}

// ── classification ───────────────────────────────────────────────

#[test]
fn tones_by_membership() {
    assert_eq!(status_tone("PUBLISHED"), StatusTone::Success);
    assert_eq!(status_tone("FAILED"), StatusTone::Destructive);
    assert_eq!(status_tone("PENDING"), StatusTone::Secondary);
    assert_eq!(status_tone("ARCHIVED"), StatusTone::Neutral);
    assert_eq!(status_tone("whatever"), StatusTone::Neutral);
}

#[test]
fn variants_follow_tone() {
    assert_eq!(status_variant("PAID"), BadgeVariant::Default);
    assert_eq!(status_variant("ERROR"), BadgeVariant::Destructive);
    assert_eq!(status_variant("DRAFT"), BadgeVariant::Secondary);
    assert_eq!(status_variant("REFUNDED"), BadgeVariant::Outline);
    assert_eq!(status_variant("nope"), BadgeVariant::Outline);
}

#[test]
fn css_classes() {
    assert_eq!(StatusTone::Success.css_class(), "text-green-600 bg-green-50");
    assert_eq!(StatusTone::Neutral.css_class(), "text-gray-600 bg-gray-50");
}

// ── serde ────────────────────────────────────────────────────────

#[test]
fn status_code_serializes_as_wire_form() {
    assert_eq!(serde_json::to_string(&StatusCode::InProgress).unwrap(), "\"IN_PROGRESS\"");
    let parsed: StatusCode = serde_json::from_str("\"REFUNDED\"").unwrap();
    assert_eq!(parsed, StatusCode::Refunded);
    assert_eq!(serde_json::to_string(&BadgeVariant::Outline).unwrap(), "\"outline\"");
}

#[test]
fn all_statuses_is_complete_and_unique() {
    let all = all_statuses();
    assert_eq!(all.len(), 21);
    let mut seen = std::collections::HashSet::new();
    assert!(all.iter().all(|c| seen.insert(*c)));
}
