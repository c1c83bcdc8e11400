use pretty_assertions::assert_eq;
use rainersoft_types::Locale;
use rainersoft_validation::{
    password_score, password_strength, validate_password, PasswordRequirements,
    PasswordStrengthLevel,
};

// ── validate_password ────────────────────────────────────────────

#[test]
fn strong_password_passes_defaults() {
    let r = validate_password("Sup3r$ecret", &PasswordRequirements::default(), Locale::EnUs);
    assert!(r.is_valid());
}

#[test]
fn every_unmet_requirement_reported() {
    let r = validate_password("abc", &PasswordRequirements::default(), Locale::EnUs);
    assert_eq!(
        r.errors(),
        [
            "Password must be at least 8 characters",
            "Password must contain at least one uppercase letter",
            "Password must contain at least one number",
            "Password must contain at least one special character",
        ]
    );
}

#[test]
fn disabled_requirements_are_skipped() {
    let reqs = PasswordRequirements {
        min_length: 4,
        require_uppercase: false,
        require_lowercase: true,
        require_number: false,
        require_special: false,
    };
    assert!(validate_password("abcd", &reqs, Locale::EnUs).is_valid());
}

#[test]
fn min_length_counts_chars() {
    let reqs = PasswordRequirements {
        min_length: 4,
        require_uppercase: false,
        require_lowercase: false,
        require_number: false,
        require_special: false,
    };
    assert!(validate_password("ãããã", &reqs, Locale::PtBr).is_valid());
}

#[test]
fn requirements_deserialize_with_defaults() {
    let reqs: PasswordRequirements = serde_json::from_str(r#"{"min_length":12}"#).unwrap();
    assert_eq!(reqs.min_length, 12);
    assert!(reqs.require_special);
}

// ── password_score ───────────────────────────────────────────────

#[test]
fn long_complex_password_is_strong() {
    let pw = "Tr0ub4dor&3-Horse!Zx";
    assert_eq!(pw.chars().count(), 20);
    assert!(password_score(pw) >= 80);
    assert_eq!(password_strength(pw, Locale::EnUs).level, PasswordStrengthLevel::Strong);
}

#[test]
fn numeric_sequence_is_very_weak() {
    assert_eq!(password_score("123456"), 0);
    let s = password_strength("123456", Locale::EnUs);
    assert!(matches!(s.level, PasswordStrengthLevel::VeryWeak | PasswordStrengthLevel::Weak));
}

#[test]
fn common_words_are_penalised_case_insensitively() {
    let clean = password_score("Xylophone#42");
    let weak = password_score("PassWord#42");
    assert!(weak < clean);
    assert_eq!(password_score("Admin#4242"), password_score("Zebra#4242") - 20);
}

#[test]
fn repeated_character_penalised() {
    assert_eq!(password_score("aaaaaaaa"), 0);
}

#[test]
fn empty_password_scores_zero() {
    assert_eq!(password_score(""), 0);
}

#[test]
fn level_breakpoints() {
    assert_eq!(PasswordStrengthLevel::from_score(0), PasswordStrengthLevel::VeryWeak);
    assert_eq!(PasswordStrengthLevel::from_score(19), PasswordStrengthLevel::VeryWeak);
    assert_eq!(PasswordStrengthLevel::from_score(20), PasswordStrengthLevel::Weak);
    assert_eq!(PasswordStrengthLevel::from_score(40), PasswordStrengthLevel::Fair);
    assert_eq!(PasswordStrengthLevel::from_score(60), PasswordStrengthLevel::Good);
    assert_eq!(PasswordStrengthLevel::from_score(79), PasswordStrengthLevel::Good);
    assert_eq!(PasswordStrengthLevel::from_score(80), PasswordStrengthLevel::Strong);
    assert_eq!(PasswordStrengthLevel::from_score(100), PasswordStrengthLevel::Strong);
}

#[test]
fn level_labels_and_colors() {
    assert_eq!(PasswordStrengthLevel::Strong.label(Locale::PtBr), "Forte");
    assert_eq!(PasswordStrengthLevel::Weak.label(Locale::EsEs), "Débil");
    assert_eq!(PasswordStrengthLevel::VeryWeak.color(), "#ef4444");
    assert_eq!(
        serde_json::to_string(&PasswordStrengthLevel::VeryWeak).unwrap(),
        "\"very-weak\""
    );
}

// ── feedback ─────────────────────────────────────────────────────

#[test]
fn feedback_lists_missing_classes() {
    let s = password_strength("abcdefgh", Locale::EnUs);
    assert!(s.feedback.contains(&"Add uppercase letters".to_string()));
    assert!(s.feedback.contains(&"Add numbers".to_string()));
    assert!(s.feedback.contains(&"Add special characters".to_string()));
    assert!(!s.feedback.contains(&"Add lowercase letters".to_string()));
}

#[test]
fn strong_password_has_no_feedback() {
    let s = password_strength("Tr0ub4dor&3-Horse!Zx", Locale::EnUs);
    assert!(s.feedback.is_empty());
}
