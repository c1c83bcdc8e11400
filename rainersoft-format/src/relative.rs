//! Relative time phrases ("just now", "3 hours ago", "yesterday").

use chrono::{DateTime, TimeZone, Utc};
use rainersoft_types::Locale;

/// Length of a month used for the month band, in days (365.25 / 12).
pub const AVERAGE_MONTH_DAYS: f64 = 30.4375;

const DAYS_PER_YEAR: i64 = 365;

/// The band an elapsed duration falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeTime {
    /// Under 10 seconds.
    JustNow,
    /// Under a minute.
    Now,
    Minutes(i64),
    Hours(i64),
    /// Exactly one whole day.
    Yesterday,
    /// Exactly two whole days.
    DayBeforeYesterday,
    /// Three to 29 days.
    Days(i64),
    /// At least 1, under 12.
    Months(i64),
    Years(i64),
}

impl RelativeTime {
    /// Classifies an elapsed duration. Negative input (a future date) counts
    /// as zero.
    #[must_use]
    pub fn from_elapsed_secs(secs: i64) -> Self {
        let secs = secs.max(0);
        let minutes = secs / 60;
        let hours = minutes / 60;
        let days = hours / 24;

        if secs < 10 {
            Self::JustNow
        } else if secs < 60 {
            Self::Now
        } else if minutes < 60 {
            Self::Minutes(minutes)
        } else if hours < 24 {
            Self::Hours(hours)
        } else if days == 1 {
            Self::Yesterday
        } else if days == 2 {
            Self::DayBeforeYesterday
        } else if days < 30 {
            Self::Days(days)
        } else {
            let months = (days as f64 / AVERAGE_MONTH_DAYS).floor() as i64;
            if months < 12 {
                Self::Months(months.max(1))
            } else {
                Self::Years((days / DAYS_PER_YEAR).max(1))
            }
        }
    }

    /// Renders the band as a phrase in `locale`.
    #[must_use]
    pub fn phrase(&self, locale: Locale) -> String {
        match locale {
            Locale::PtBr => self.phrase_pt_br(),
            Locale::EnUs => self.phrase_en_us(),
            Locale::EsEs => self.phrase_es_es(),
        }
    }

    fn phrase_pt_br(&self) -> String {
        match *self {
            Self::JustNow => "agora mesmo".into(),
            Self::Now => "agora".into(),
            Self::Minutes(n) => format!("há {n} {}", plural(n, "minuto", "minutos")),
            Self::Hours(n) => format!("há {n} {}", plural(n, "hora", "horas")),
            Self::Yesterday => "ontem".into(),
            Self::DayBeforeYesterday => "anteontem".into(),
            Self::Days(n) => format!("há {n} dias"),
            Self::Months(n) => format!("há {n} {}", plural(n, "mês", "meses")),
            Self::Years(n) => format!("há {n} {}", plural(n, "ano", "anos")),
        }
    }

    fn phrase_en_us(&self) -> String {
        match *self {
            Self::JustNow => "just now".into(),
            Self::Now => "now".into(),
            Self::Minutes(n) => format!("{n} {} ago", plural(n, "minute", "minutes")),
            Self::Hours(n) => format!("{n} {} ago", plural(n, "hour", "hours")),
            Self::Yesterday => "yesterday".into(),
            Self::DayBeforeYesterday => "the day before yesterday".into(),
            Self::Days(n) => format!("{n} days ago"),
            Self::Months(n) => format!("{n} {} ago", plural(n, "month", "months")),
            Self::Years(n) => format!("{n} {} ago", plural(n, "year", "years")),
        }
    }

    fn phrase_es_es(&self) -> String {
        match *self {
            Self::JustNow => "justo ahora".into(),
            Self::Now => "ahora".into(),
            Self::Minutes(n) => format!("hace {n} {}", plural(n, "minuto", "minutos")),
            Self::Hours(n) => format!("hace {n} {}", plural(n, "hora", "horas")),
            Self::Yesterday => "ayer".into(),
            Self::DayBeforeYesterday => "anteayer".into(),
            Self::Days(n) => format!("hace {n} días"),
            Self::Months(n) => format!("hace {n} {}", plural(n, "mes", "meses")),
            Self::Years(n) => format!("hace {n} {}", plural(n, "año", "años")),
        }
    }
}

fn plural<'a>(n: i64, one: &'a str, other: &'a str) -> &'a str {
    if n == 1 { one } else { other }
}

/// Phrases the time elapsed between `date` and the current instant.
#[must_use]
pub fn format_relative_date<Tz: TimeZone>(date: &DateTime<Tz>, locale: Locale) -> String {
    format_relative_date_at(date, &Utc::now(), locale)
}

/// Phrases the time elapsed between `date` and `now`.
#[must_use]
pub fn format_relative_date_at<Tz: TimeZone, Tz2: TimeZone>(
    date: &DateTime<Tz>,
    now: &DateTime<Tz2>,
    locale: Locale,
) -> String {
    let elapsed_ms = now.timestamp_millis().saturating_sub(date.timestamp_millis());
    RelativeTime::from_elapsed_secs(elapsed_ms / 1000).phrase(locale)
}
