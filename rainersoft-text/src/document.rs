//! Brazilian taxpayer identifiers (CPF for people, CNPJ for companies).
//!
//! Both use the modulo-11 scheme: two check digits, each computed as
//! `11 - (Σ digit·weight mod 11)`, where a result of 10 or 11 becomes 0.

use regex_lite::Regex;
use std::sync::LazyLock;

static CPF_TEMPLATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{3})(\d{3})(\d{3})(\d{2})").expect("static regex"));
static CNPJ_TEMPLATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2})(\d{3})(\d{3})(\d{4})(\d{2})").expect("static regex"));

const CPF_LEN: usize = 11;
const CNPJ_LEN: usize = 14;

const CPF_WEIGHTS_FIRST: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const CPF_WEIGHTS_SECOND: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Keeps only ASCII digits.
#[must_use]
pub fn only_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Formats a CPF as `000.000.000-00`.
///
/// Input shorter than 11 digits comes back as its bare digits; nothing is
/// rejected.
#[must_use]
pub fn format_cpf(cpf: &str) -> String {
    let digits = only_digits(cpf);
    if digits.len() != CPF_LEN {
        tracing::trace!(len = digits.len(), "CPF has unexpected length, formatting best-effort");
    }
    CPF_TEMPLATE.replace(&digits, "$1.$2.$3-$4").into_owned()
}

/// Formats a CNPJ as `00.000.000/0000-00`.
///
/// Input shorter than 14 digits comes back as its bare digits; nothing is
/// rejected.
#[must_use]
pub fn format_cnpj(cnpj: &str) -> String {
    let digits = only_digits(cnpj);
    if digits.len() != CNPJ_LEN {
        tracing::trace!(len = digits.len(), "CNPJ has unexpected length, formatting best-effort");
    }
    CNPJ_TEMPLATE.replace(&digits, "$1.$2.$3/$4-$5").into_owned()
}

/// Returns true for a well-formed CPF with correct check digits.
///
/// Punctuation is ignored. Eleven identical digits (`111.111.111-11`) pass the
/// arithmetic but are rejected, as the Receita Federal never issues them.
#[must_use]
pub fn is_cpf(cpf: &str) -> bool {
    let Some(digits) = digit_values(cpf, CPF_LEN) else {
        return false;
    };
    let first = check_digit(&digits[..9], &CPF_WEIGHTS_FIRST);
    let second = check_digit(&digits[..10], &CPF_WEIGHTS_SECOND);
    digits[9] == first && digits[10] == second
}

/// Returns true for a well-formed CNPJ with correct check digits.
#[must_use]
pub fn is_cnpj(cnpj: &str) -> bool {
    let Some(digits) = digit_values(cnpj, CNPJ_LEN) else {
        return false;
    };
    let first = check_digit(&digits[..12], &CNPJ_WEIGHTS_FIRST);
    let second = check_digit(&digits[..13], &CNPJ_WEIGHTS_SECOND);
    digits[12] == first && digits[13] == second
}

/// Computes the two check digits for the first nine digits of a CPF.
///
/// Returns `None` unless `base` holds exactly nine digits.
#[must_use]
pub fn cpf_check_digits(base: &str) -> Option<[u8; 2]> {
    let mut digits = raw_digits(base);
    if digits.len() != 9 {
        return None;
    }
    let first = check_digit(&digits, &CPF_WEIGHTS_FIRST);
    digits.push(first);
    let second = check_digit(&digits, &CPF_WEIGHTS_SECOND);
    Some([first, second])
}

/// Computes the two check digits for the first twelve digits of a CNPJ.
///
/// Returns `None` unless `base` holds exactly twelve digits.
#[must_use]
pub fn cnpj_check_digits(base: &str) -> Option<[u8; 2]> {
    let mut digits = raw_digits(base);
    if digits.len() != 12 {
        return None;
    }
    let first = check_digit(&digits, &CNPJ_WEIGHTS_FIRST);
    digits.push(first);
    let second = check_digit(&digits, &CNPJ_WEIGHTS_SECOND);
    Some([first, second])
}

fn raw_digits(value: &str) -> Vec<u8> {
    value
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// Digit values of `value` when it has `len` digits that are not all equal.
fn digit_values(value: &str, len: usize) -> Option<Vec<u8>> {
    let digits = raw_digits(value);
    if digits.len() != len || digits.iter().all(|d| *d == digits[0]) {
        return None;
    }
    Some(digits)
}

fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(d, w)| u32::from(*d) * w)
        .sum();
    match 11 - (sum % 11) {
        10 | 11 => 0,
        d => d as u8,
    }
}
