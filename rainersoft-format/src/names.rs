//! Month and weekday names.

use rainersoft_types::Locale;

const MONTHS_PT_BR: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho",
    "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
];
const MONTHS_EN_US: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];
const MONTHS_ES_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

// Monday first, matching `Weekday::num_days_from_monday`.
const WEEKDAYS_PT_BR: [&str; 7] = [
    "segunda-feira", "terça-feira", "quarta-feira", "quinta-feira",
    "sexta-feira", "sábado", "domingo",
];
const WEEKDAYS_EN_US: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];
const WEEKDAYS_ES_ES: [&str; 7] = [
    "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
];

/// Month name for a zero-based month index (0 = January).
pub(crate) fn month_name(locale: Locale, month0: u32) -> &'static str {
    let table = match locale {
        Locale::PtBr => &MONTHS_PT_BR,
        Locale::EnUs => &MONTHS_EN_US,
        Locale::EsEs => &MONTHS_ES_ES,
    };
    table[(month0 % 12) as usize]
}

/// Weekday name for a zero-based index from Monday.
pub(crate) fn weekday_name(locale: Locale, from_monday: u32) -> &'static str {
    let table = match locale {
        Locale::PtBr => &WEEKDAYS_PT_BR,
        Locale::EnUs => &WEEKDAYS_EN_US,
        Locale::EsEs => &WEEKDAYS_ES_ES,
    };
    table[(from_monday % 7) as usize]
}
