//! Calendar date formatting.

use crate::names::{month_name, weekday_name};
use chrono::Datelike;
use rainersoft_types::Locale;
use serde::{Deserialize, Serialize};

/// Level of detail for [`format_date`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// Numeric day, two-digit month, numeric year (`15/01/2024`).
    #[default]
    Short,
    /// Day, full month name, year (`15 de janeiro de 2024`).
    Long,
    /// Long form prefixed with the weekday.
    Full,
}

/// Formats the calendar part of `date` for `locale`.
///
/// Works with anything that exposes a date: `NaiveDate`, `NaiveDateTime` or
/// a zoned `DateTime`. The time of day is ignored.
///
/// | Format | pt-BR | en-US | es-ES |
/// |--------|-------|-------|-------|
/// | Short | `05/01/2024` | `01/05/2024` | `05/01/2024` |
/// | Long | `5 de janeiro de 2024` | `January 5, 2024` | `5 de enero de 2024` |
/// | Full | `sexta-feira, 5 de janeiro de 2024` | `Friday, January 5, 2024` | `viernes, 5 de enero de 2024` |
#[must_use]
pub fn format_date<D: Datelike>(date: &D, format: DateFormat, locale: Locale) -> String {
    let day = date.day();
    let year = date.year();

    match format {
        DateFormat::Short => match locale {
            Locale::EnUs => format!("{:02}/{day:02}/{year}", date.month()),
            Locale::PtBr | Locale::EsEs => format!("{day:02}/{:02}/{year}", date.month()),
        },
        DateFormat::Long => long_date(date, locale),
        DateFormat::Full => {
            let weekday = weekday_name(locale, date.weekday().num_days_from_monday());
            format!("{weekday}, {}", long_date(date, locale))
        }
    }
}

fn long_date<D: Datelike>(date: &D, locale: Locale) -> String {
    let month = month_name(locale, date.month0());
    match locale {
        Locale::EnUs => format!("{month} {}, {}", date.day(), date.year()),
        Locale::PtBr | Locale::EsEs => format!("{} de {month} de {}", date.day(), date.year()),
    }
}
