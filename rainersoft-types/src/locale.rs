//! Locale tags and their currency mapping.

use crate::messages::{self, Messages};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported locale.
///
/// The set is closed: every table in the workspace has exactly one entry per
/// variant, so lookups never miss at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// Brazilian Portuguese.
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// American English.
    #[serde(rename = "en-US")]
    EnUs,
    /// European Spanish.
    #[serde(rename = "es-ES")]
    EsEs,
}

impl Locale {
    /// Every supported locale, in declaration order.
    pub const ALL: [Locale; 3] = [Locale::PtBr, Locale::EnUs, Locale::EsEs];

    /// Returns the BCP-47 tag (`pt-BR`, `en-US`, `es-ES`).
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::EnUs => "en-US",
            Self::EsEs => "es-ES",
        }
    }

    /// Returns the currency amounts are formatted in for this locale.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        match self {
            Self::PtBr => Currency::Brl,
            Self::EnUs => Currency::Usd,
            Self::EsEs => Currency::Eur,
        }
    }

    /// Returns the static translation table for this locale.
    #[must_use]
    pub const fn messages(&self) -> &'static Messages {
        match self {
            Self::PtBr => &messages::PT_BR,
            Self::EnUs => &messages::EN_US,
            Self::EsEs => &messages::ES_ES,
        }
    }

    /// Resolves a loosely written tag, falling back to `pt-BR`.
    ///
    /// Accepts any case, `_` in place of `-`, and bare language subtags
    /// (`pt`, `en`, `es`). Anything else resolves to the default locale.
    #[must_use]
    pub fn from_tag_lossy(tag: &str) -> Self {
        if let Ok(locale) = tag.parse() {
            return locale;
        }

        let lower = tag.trim().to_ascii_lowercase().replace('_', "-");
        let language = lower.split('-').next().unwrap_or_default();
        match language {
            "pt" => Self::PtBr,
            "en" => Self::EnUs,
            "es" => Self::EsEs,
            _ => {
                tracing::debug!(tag, "unrecognised locale tag, falling back to pt-BR");
                Self::default()
            }
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = crate::Error;

    /// Strict parse: only the exact tags (case-insensitive, `_` or `-`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" => Ok(Self::PtBr),
            "en-us" => Ok(Self::EnUs),
            "es-es" => Ok(Self::EsEs),
            _ => Err(crate::Error::UnknownLocale(s.to_string())),
        }
    }
}

/// ISO-4217 currencies used by the supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Brazilian real.
    Brl,
    /// US dollar.
    Usd,
    /// Euro.
    Eur,
}

impl Currency {
    /// Returns the ISO-4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Brl => "BRL",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }

    /// Returns the display symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Brl => "R$",
            Self::Usd => "$",
            Self::Eur => "€",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
