//! Number, currency and size formatting.

use num_format::Locale as NumLocale;
use rainersoft_types::{Currency, Locale};

/// Fraction digits used when the caller leaves them open.
const MAX_VARIABLE_DECIMALS: usize = 3;

const COMPACT_STEPS: [f64; 4] = [1e3, 1e6, 1e9, 1e12];

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

fn num_locale(locale: Locale) -> NumLocale {
    match locale {
        Locale::PtBr => NumLocale::pt,
        Locale::EnUs => NumLocale::en,
        Locale::EsEs => NumLocale::es,
    }
}

fn compact_suffixes(locale: Locale) -> [&'static str; 4] {
    match locale {
        Locale::PtBr => [" mil", " mi", " bi", " tri"],
        Locale::EnUs => ["K", "M", "B", "T"],
        Locale::EsEs => [" mil", " M", " mil M", " B"],
    }
}

/// Renders `|value|` with exactly `decimals` fraction digits and locale
/// separators. Returns the digits and whether a minus sign is due.
fn render_abs(value: f64, decimals: usize, locale: Locale) -> (String, bool) {
    let rendered = format!("{:.*}", decimals, value.abs());
    let negative = value.is_sign_negative() && rendered.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));

    let loc = num_locale(locale);
    let grouped = group_digits(int_part, loc.separator());

    let out = if frac_part.is_empty() {
        grouped
    } else {
        format!("{grouped}{}{frac_part}", loc.decimal())
    };
    (out, negative)
}

/// Inserts `separator` between groups of three digits, counted from the right.
fn group_digits(digits: &str, separator: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

fn trim_fraction(s: &str, decimal: &str) -> String {
    match s.rsplit_once(decimal) {
        Some((int_part, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                int_part.to_string()
            } else {
                format!("{int_part}{decimal}{frac}")
            }
        }
        None => s.to_string(),
    }
}

fn signed(body: String, negative: bool) -> String {
    if negative { format!("-{body}") } else { body }
}

/// Formats a plain number.
///
/// With `decimals`, exactly that many fraction digits are shown. Without,
/// up to three are shown and trailing zeros are dropped (`1234.5` →
/// `1,234.5` in en-US, `1.234,5` in pt-BR).
#[must_use]
pub fn format_number(value: f64, decimals: Option<u8>, locale: Locale) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    match decimals {
        Some(d) => {
            let (body, negative) = render_abs(value, usize::from(d), locale);
            signed(body, negative)
        }
        None => {
            let (body, negative) = render_abs(value, MAX_VARIABLE_DECIMALS, locale);
            signed(trim_fraction(&body, num_locale(locale).decimal()), negative)
        }
    }
}

/// Formats a monetary amount in the locale's own currency.
#[must_use]
pub fn format_currency(value: f64, locale: Locale) -> String {
    format_currency_in(value, locale.currency(), locale)
}

/// Formats a monetary amount in `currency` using `locale`'s conventions.
///
/// pt-BR and en-US put the symbol first (`R$ 1.234,56`, `$1,234.56`);
/// es-ES puts it last (`1.234,56 €`). Two fraction digits, always.
#[must_use]
pub fn format_currency_in(value: f64, currency: Currency, locale: Locale) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let (amount, negative) = render_abs(value, 2, locale);
    let symbol = currency.symbol();
    let body = match locale {
        Locale::PtBr => format!("{symbol} {amount}"),
        Locale::EnUs => format!("{symbol}{amount}"),
        Locale::EsEs => format!("{amount} {symbol}"),
    };
    signed(body, negative)
}

/// Formats a number in short form (`1.2K`, `1,2 mil`, `15M`).
///
/// Values below 1000 are left to [`format_number`]. Above that, mantissas
/// under ten keep one decimal, larger ones are rounded to whole units; a
/// trailing zero decimal is dropped. Rounding that reaches 1000 moves up to
/// the next unit.
#[must_use]
pub fn format_compact(value: f64, locale: Locale) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let abs = value.abs();
    let Some(mut step) = COMPACT_STEPS.iter().rposition(|s| abs >= *s) else {
        return format_number(value, None, locale);
    };
    let suffixes = compact_suffixes(locale);
    let decimal = num_locale(locale).decimal();

    loop {
        let mantissa = round_compact(abs / COMPACT_STEPS[step]);
        if mantissa >= 1000.0 && step + 1 < COMPACT_STEPS.len() {
            step += 1;
            continue;
        }

        let decimals = if mantissa < 10.0 { 1 } else { 0 };
        let (digits, negative) = render_abs(mantissa.copysign(value), decimals, locale);
        let digits = trim_fraction(&digits, decimal);
        return signed(format!("{digits}{}", suffixes[step]), negative);
    }
}

fn round_compact(mantissa: f64) -> f64 {
    if mantissa < 10.0 {
        let one_decimal = (mantissa * 10.0).round() / 10.0;
        // 9.96 rounds to 10.0, which then takes the whole-unit path
        if one_decimal >= 10.0 { one_decimal.round() } else { one_decimal }
    } else {
        mantissa.round()
    }
}

/// Formats a ratio as a percentage (`0.256` → `25.6%`).
///
/// es-ES separates the sign with a space (`25,6 %`).
#[must_use]
pub fn format_percentage(ratio: f64, decimals: u8, locale: Locale) -> String {
    let number = format_number(ratio * 100.0, Some(decimals), locale);
    match locale {
        Locale::EsEs => format!("{number} %"),
        Locale::PtBr | Locale::EnUs => format!("{number}%"),
    }
}

/// Formats a byte count with binary (1024) steps and one decimal.
#[must_use]
pub fn format_file_size(bytes: u64, locale: Locale) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{} {}", format_number(value, Some(1), locale), SIZE_UNITS[unit])
}
