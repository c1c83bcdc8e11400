//! Property-based tests for the text helpers.
//!
//! - Slugs are idempotent, lowercase, and never start, end or double up on `-`
//! - Generated CPF/CNPJ numbers always validate
//! - Changing any single digit invalidates, except for mod-11 collisions:
//!   remainders 0 and 1 both give check digit 0, so a changed base digit can
//!   leave both check digits as they were (12345678909 and 22345678909 are
//!   both valid CPFs). Those cases are excluded with `prop_assume!`.

use proptest::prelude::*;
use rainersoft_text::{
    cnpj_check_digits, cpf_check_digits, is_cnpj, is_cpf, text_to_slug, truncate,
};

fn digits_strategy(len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..10, len)
        .prop_map(|ds| ds.into_iter().map(|d| char::from(b'0' + d)).collect())
}

fn not_all_same(s: &str) -> bool {
    let first = s.chars().next();
    s.chars().any(|c| Some(c) != first)
}

fn with_check_digits(base: &str, digits: [u8; 2]) -> String {
    format!("{base}{}{}", digits[0], digits[1])
}

fn bump(c: char) -> char {
    let d = c.to_digit(10).unwrap_or(0);
    char::from_digit((d + 1) % 10, 10).unwrap_or('0')
}

// =============================================================================
// SLUG PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn slug_is_idempotent(text in any::<String>()) {
        let once = text_to_slug(&text);
        prop_assert_eq!(text_to_slug(&once), once);
    }

    #[test]
    fn slug_has_no_edge_or_double_hyphens(text in "\\PC{0,80}") {
        let slug = text_to_slug(&text);
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }

    #[test]
    fn slug_of_ascii_is_lowercase_ascii(text in "[ -~]{0,80}") {
        let slug = text_to_slug(&text);
        prop_assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'));
    }

    #[test]
    fn truncate_respects_budget(text in "\\PC{0,60}", max in 3usize..40) {
        prop_assert!(truncate(&text, max).chars().count() <= max);
    }
}

// =============================================================================
// DOCUMENT PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn generated_cpf_validates(base in digits_strategy(9)) {
        let full = with_check_digits(&base, cpf_check_digits(&base).unwrap());
        prop_assume!(not_all_same(&full));
        prop_assert!(is_cpf(&full));
    }

    #[test]
    fn corrupted_cpf_digit_fails(base in digits_strategy(9), pos in 0usize..11) {
        let full = with_check_digits(&base, cpf_check_digits(&base).unwrap());
        prop_assume!(not_all_same(&full));
        let mut chars: Vec<char> = full.chars().collect();
        chars[pos] = bump(chars[pos]);
        let corrupted: String = chars.into_iter().collect();
        let collides = pos < 9 && cpf_check_digits(&corrupted[..9]) == cpf_check_digits(&base);
        prop_assume!(!collides);
        prop_assert!(!is_cpf(&corrupted));
    }

    #[test]
    fn generated_cnpj_validates(base in digits_strategy(12)) {
        let full = with_check_digits(&base, cnpj_check_digits(&base).unwrap());
        prop_assume!(not_all_same(&full));
        prop_assert!(is_cnpj(&full));
    }

    #[test]
    fn corrupted_cnpj_digit_fails(base in digits_strategy(12), pos in 0usize..14) {
        let full = with_check_digits(&base, cnpj_check_digits(&base).unwrap());
        prop_assume!(not_all_same(&full));
        let mut chars: Vec<char> = full.chars().collect();
        chars[pos] = bump(chars[pos]);
        let corrupted: String = chars.into_iter().collect();
        let original = cnpj_check_digits(&base);
        let collides = pos < 12 && cnpj_check_digits(&corrupted[..12]) == original;
        prop_assume!(!collides);
        prop_assert!(!is_cnpj(&corrupted));
    }

    #[test]
    fn wrong_length_never_validates(s in "[0-9]{0,10}|[0-9]{12,13}|[0-9]{15,20}") {
        prop_assert!(!is_cpf(&s));
        prop_assert!(!is_cnpj(&s));
    }
}
