//! Commands behind the `rainersoft` binary.
//!
//! Each command produces a [`Report`] holding both renderings; the binary
//! prints whichever one `--json` selects.

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, NaiveDate};
use clap::{Subcommand, ValueEnum};
use rainersoft_utils::{
    format_cnpj, format_cpf, hash, status_tone, status_variant, text_to_slug, DateFormat, Scored,
    Toolkit, UtilsConfig, ValidationResult,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Turn text into a URL slug
    Slug { text: String },

    /// Format and validate a CPF
    Cpf { value: String },

    /// Format and validate a CNPJ
    Cnpj { value: String },

    /// Validate an email address
    Email { value: String },

    /// Check a password against the configured rules and score it
    Password { value: String },

    /// Format a calendar date given as YYYY-MM-DD
    Date {
        date: NaiveDate,

        #[arg(short, long, value_enum, default_value_t = DateStyle::Short)]
        style: DateStyle,
    },

    /// Describe how long ago an RFC 3339 timestamp was
    Relative { timestamp: DateTime<FixedOffset> },

    /// Format an amount in the locale's currency
    Currency {
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },

    /// Translate and classify a status code
    Status { code: String },

    /// Search a JSON array of records by title, description, content and tags
    Search {
        file: PathBuf,
        query: String,

        /// Rank by similarity instead of substring matches
        #[arg(long, conflicts_with = "ranked")]
        fuzzy: bool,

        /// Rank substring matches by field weight
        #[arg(long)]
        ranked: bool,
    },

    /// SHA-256 of the given text, hex encoded
    Hash { text: String },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    Short,
    Long,
    Full,
}

impl From<DateStyle> for DateFormat {
    fn from(style: DateStyle) -> Self {
        match style {
            DateStyle::Short => DateFormat::Short,
            DateStyle::Long => DateFormat::Long,
            DateStyle::Full => DateFormat::Full,
        }
    }
}

/// Output of one command.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub text: String,
    pub json: Value,
}

impl Report {
    fn new(text: impl Into<String>, json: Value) -> Self {
        Self {
            text: text.into(),
            json,
        }
    }

    /// The selected rendering.
    pub fn render(&self, as_json: bool) -> Result<String> {
        if as_json {
            Ok(serde_json::to_string_pretty(&self.json)?)
        } else {
            Ok(self.text.clone())
        }
    }
}

/// Runs `command` with the settings in `config`.
pub fn run(command: &Command, config: &UtilsConfig) -> Result<Report> {
    let kit = Toolkit::new(config);
    debug!(?command, locale = %kit.locale(), "running command");

    let report = match command {
        Command::Slug { text } => {
            let slug = text_to_slug(text);
            Report::new(slug.clone(), json!({ "slug": slug }))
        }
        Command::Cpf { value } => document_report(format_cpf(value), kit.validate_cpf(value)),
        Command::Cnpj { value } => document_report(format_cnpj(value), kit.validate_cnpj(value)),
        Command::Email { value } => {
            let result = kit.validate_email(value);
            Report::new(verdict(&result), serde_json::to_value(&result)?)
        }
        Command::Password { value } => {
            let result = kit.validate_password(value);
            let strength = kit.password_strength(value);
            let mut lines = vec![format!(
                "{} ({}/100)",
                strength.level.label(kit.locale()),
                strength.score
            )];
            lines.extend(result.errors().iter().cloned());
            lines.extend(strength.feedback.iter().map(|hint| format!("- {hint}")));
            Report::new(
                lines.join("\n"),
                json!({ "validation": result, "strength": strength }),
            )
        }
        Command::Date { date, style } => {
            let formatted = kit.format_date(date, (*style).into());
            Report::new(formatted.clone(), json!({ "date": formatted }))
        }
        Command::Relative { timestamp } => {
            let phrase = kit.format_relative_date(timestamp);
            Report::new(phrase.clone(), json!({ "relative": phrase }))
        }
        Command::Currency { value } => {
            let formatted = kit.format_currency(*value);
            Report::new(formatted.clone(), json!({ "currency": formatted }))
        }
        Command::Status { code } => {
            let label = kit.translate_status(code);
            let tone = status_tone(code);
            Report::new(
                label.to_string(),
                json!({
                    "code": code,
                    "label": label,
                    "tone": tone,
                    "variant": status_variant(code),
                    "class": tone.css_class(),
                }),
            )
        }
        Command::Search {
            file,
            query,
            fuzzy,
            ranked,
        } => search_report(&kit, file, query, *fuzzy, *ranked)?,
        Command::Hash { text } => {
            let digest = hash(text);
            Report::new(digest.clone(), json!({ "sha256": digest }))
        }
    };

    Ok(report)
}

fn verdict(result: &ValidationResult) -> String {
    if result.is_valid() {
        "valid".to_string()
    } else {
        result.errors().join("\n")
    }
}

fn document_report(formatted: String, result: ValidationResult) -> Report {
    let text = format!("{formatted}\t{}", verdict(&result));
    Report::new(
        text,
        json!({ "formatted": formatted, "validation": result }),
    )
}

/// Reads a JSON array of records.
pub fn load_records(path: &Path) -> Result<Vec<Value>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let records: Vec<Value> = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a JSON array of records", path.display()))?;
    Ok(records)
}

#[derive(Serialize)]
struct Hit<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
    item: &'a Value,
}

fn search_report(
    kit: &Toolkit<'_>,
    file: &Path,
    query: &str,
    fuzzy: bool,
    ranked: bool,
) -> Result<Report> {
    let records = load_records(file)?;

    let hits: Vec<Hit<'_>> = if fuzzy {
        scored_hits(kit.fuzzy_search(query, &records))
    } else if ranked {
        let options = kit.search_options(rainersoft_utils::default_fields());
        scored_hits(rainersoft_utils::search_with_score(query, &records, &options))
    } else {
        kit.search(query, &records)
            .into_iter()
            .map(|item| Hit { score: None, item })
            .collect()
    };

    let text = hits
        .iter()
        .map(|hit| match hit.score {
            Some(score) => format!("{score:.2}\t{}", display_title(hit.item)),
            None => display_title(hit.item),
        })
        .collect::<Vec<_>>()
        .join("\n");

    Ok(Report::new(text, serde_json::to_value(&hits)?))
}

fn scored_hits(scored: Vec<Scored<&Value>>) -> Vec<Hit<'_>> {
    scored
        .into_iter()
        .map(|s| Hit {
            score: Some(s.score),
            item: s.item,
        })
        .collect()
}

fn display_title(item: &Value) -> String {
    match item.get("title").and_then(Value::as_str) {
        Some(title) => title.to_string(),
        None => item.to_string(),
    }
}
