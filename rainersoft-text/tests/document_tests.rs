use rainersoft_text::{
    cnpj_check_digits, cpf_check_digits, format_cnpj, format_cpf, is_cnpj, is_cpf,
};

const VALID_CPF: &str = "52998224725";
const VALID_CNPJ: &str = "11222333000181";

fn single_digit_substitutions(value: &str) -> Vec<String> {
    let mut out = Vec::new();
    for (i, original) in value.char_indices() {
        for replacement in '0'..='9' {
            if replacement != original {
                let mut s = value.to_string();
                s.replace_range(i..i + 1, &replacement.to_string());
                out.push(s);
            }
        }
    }
    out
}

// ── format_cpf ───────────────────────────────────────────────────

#[test]
fn format_cpf_applies_template() {
    assert_eq!(format_cpf("12345678901"), "123.456.789-01");
}

#[test]
fn format_cpf_strips_existing_punctuation() {
    assert_eq!(format_cpf("123.456.789-01"), "123.456.789-01");
    assert_eq!(format_cpf(" 123 456 789 01 "), "123.456.789-01");
}

#[test]
fn format_cpf_short_input_passes_through_as_digits() {
    assert_eq!(format_cpf("123.456"), "123456");
    assert_eq!(format_cpf(""), "");
}

#[test]
fn format_cpf_long_input_keeps_tail() {
    assert_eq!(format_cpf("123456789012"), "123.456.789-012");
}

// ── format_cnpj ──────────────────────────────────────────────────

#[test]
fn format_cnpj_applies_template() {
    assert_eq!(format_cnpj("12345678000199"), "12.345.678/0001-99");
}

#[test]
fn format_cnpj_short_input_passes_through_as_digits() {
    assert_eq!(format_cnpj("12.345"), "12345");
}

// ── is_cpf ───────────────────────────────────────────────────────

#[test]
fn accepts_valid_cpf_with_and_without_punctuation() {
    assert!(is_cpf(VALID_CPF));
    assert!(is_cpf("529.982.247-25"));
}

#[test]
fn rejects_wrong_length_cpf() {
    assert!(!is_cpf("5299822472"));
    assert!(!is_cpf("529982247250"));
    assert!(!is_cpf(""));
}

#[test]
fn rejects_repeated_digit_cpf() {
    for d in '0'..='9' {
        let cpf: String = std::iter::repeat_n(d, 11).collect();
        assert!(!is_cpf(&cpf), "{cpf} should be rejected");
    }
}

#[test]
fn rejects_cpf_with_wrong_check_digits() {
    assert!(!is_cpf("52998224724"));
    assert!(!is_cpf("52998224735"));
}

#[test]
fn every_single_digit_change_breaks_reference_cpf() {
    for candidate in single_digit_substitutions(VALID_CPF) {
        assert!(!is_cpf(&candidate), "{candidate} unexpectedly valid");
    }
}

#[test]
fn mod_11_is_not_sensitive_to_every_substitution() {
    // Known property of the scheme: both sums can shift between remainders
    // 0 and 1, which map to the same check digit.
    assert!(is_cpf("12345678909"));
    assert!(is_cpf("22345678909"));
}

#[test]
fn check_digit_ten_becomes_zero() {
    // 100000001 → first sum 12 → 11 - 1 = 10 → 0.
    let [first, _] = cpf_check_digits("100000001").unwrap();
    assert_eq!(first, 0);
}

// ── is_cnpj ──────────────────────────────────────────────────────

#[test]
fn accepts_valid_cnpj() {
    assert!(is_cnpj(VALID_CNPJ));
    assert!(is_cnpj("11.222.333/0001-81"));
}

#[test]
fn rejects_wrong_length_or_repeated_cnpj() {
    assert!(!is_cnpj("1122233300018"));
    assert!(!is_cnpj("11111111111111"));
    assert!(!is_cnpj(VALID_CPF));
}

#[test]
fn every_single_digit_change_breaks_reference_cnpj() {
    for candidate in single_digit_substitutions(VALID_CNPJ) {
        assert!(!is_cnpj(&candidate), "{candidate} unexpectedly valid");
    }
}

// ── check digit helpers ──────────────────────────────────────────

#[test]
fn cpf_check_digits_match_reference() {
    assert_eq!(cpf_check_digits("529982247"), Some([2, 5]));
    assert_eq!(cpf_check_digits("529.982.247"), Some([2, 5]));
    assert_eq!(cpf_check_digits("52998224"), None);
}

#[test]
fn cnpj_check_digits_match_reference() {
    assert_eq!(cnpj_check_digits("112223330001"), Some([8, 1]));
    assert_eq!(cnpj_check_digits("1122233300"), None);
}
