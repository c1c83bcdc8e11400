//! Locale-bound view over the free functions.

use crate::config::UtilsConfig;
use chrono::{DateTime, Datelike, TimeZone};
use rainersoft_format::DateFormat;
use rainersoft_search::{FuzzyOptions, Scored, SearchField, SearchOptions, Searchable};
use rainersoft_types::{Locale, ValidationResult};
use rainersoft_validation::PasswordStrength;
use std::borrow::Cow;

/// Borrows a [`UtilsConfig`] and applies its settings to every call.
///
/// Applications keep one config and hand out toolkits by reference instead
/// of mutating a shared "current locale".
#[derive(Debug, Clone, Copy)]
pub struct Toolkit<'c> {
    config: &'c UtilsConfig,
}

impl<'c> Toolkit<'c> {
    #[must_use]
    pub fn new(config: &'c UtilsConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &'c UtilsConfig {
        self.config
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    // ---- Formatting ----

    pub fn format_date<D: Datelike>(&self, date: &D, format: DateFormat) -> String {
        rainersoft_format::format_date(date, format, self.locale())
    }

    pub fn format_relative_date<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String {
        rainersoft_format::format_relative_date(date, self.locale())
    }

    pub fn format_relative_date_at<Tz: TimeZone, Tz2: TimeZone>(
        &self,
        date: &DateTime<Tz>,
        now: &DateTime<Tz2>,
    ) -> String {
        rainersoft_format::format_relative_date_at(date, now, self.locale())
    }

    #[must_use]
    pub fn format_currency(&self, value: f64) -> String {
        rainersoft_format::format_currency(value, self.locale())
    }

    #[must_use]
    pub fn format_number(&self, value: f64, decimals: Option<u8>) -> String {
        rainersoft_format::format_number(value, decimals, self.locale())
    }

    #[must_use]
    pub fn format_compact(&self, value: f64) -> String {
        rainersoft_format::format_compact(value, self.locale())
    }

    #[must_use]
    pub fn format_percentage(&self, ratio: f64, decimals: u8) -> String {
        rainersoft_format::format_percentage(ratio, decimals, self.locale())
    }

    #[must_use]
    pub fn format_file_size(&self, bytes: u64) -> String {
        rainersoft_format::format_file_size(bytes, self.locale())
    }

    #[must_use]
    pub fn format_phone(&self, phone: &str) -> String {
        rainersoft_text::format_phone(phone, self.locale())
    }

    // ---- Validation ----

    #[must_use]
    pub fn validate_email(&self, email: &str) -> ValidationResult {
        rainersoft_validation::validate_email(email, self.locale())
    }

    /// Checks against the configured [`PasswordRequirements`](rainersoft_validation::PasswordRequirements).
    #[must_use]
    pub fn validate_password(&self, password: &str) -> ValidationResult {
        rainersoft_validation::validate_password(password, &self.config.password, self.locale())
    }

    #[must_use]
    pub fn password_strength(&self, password: &str) -> PasswordStrength {
        rainersoft_validation::password_strength(password, self.locale())
    }

    #[must_use]
    pub fn validate_username(&self, username: &str) -> ValidationResult {
        rainersoft_validation::validate_username(username, self.locale())
    }

    #[must_use]
    pub fn validate_slug(&self, slug: &str) -> ValidationResult {
        rainersoft_validation::validate_slug(slug, self.locale())
    }

    #[must_use]
    pub fn validate_url(&self, url: &str) -> ValidationResult {
        rainersoft_validation::validate_url(url, self.locale())
    }

    #[must_use]
    pub fn validate_phone(&self, phone: &str) -> ValidationResult {
        rainersoft_validation::validate_phone(phone, self.locale())
    }

    #[must_use]
    pub fn validate_text(
        &self,
        text: &str,
        min: usize,
        max: usize,
        field_name: &str,
    ) -> ValidationResult {
        rainersoft_validation::validate_text(text, min, max, field_name, self.locale())
    }

    #[must_use]
    pub fn validate_message(&self, text: &str) -> ValidationResult {
        rainersoft_validation::validate_message(text, self.locale())
    }

    #[must_use]
    pub fn validate_cpf(&self, cpf: &str) -> ValidationResult {
        rainersoft_validation::validate_cpf(cpf, self.locale())
    }

    #[must_use]
    pub fn validate_cnpj(&self, cnpj: &str) -> ValidationResult {
        rainersoft_validation::validate_cnpj(cnpj, self.locale())
    }

    // ---- Status ----

    #[must_use]
    pub fn translate_status<'a>(&self, code: &'a str) -> Cow<'a, str> {
        rainersoft_status::translate_status(code, self.locale())
    }

    // ---- Search ----

    /// Search options over `fields` with the configured case sensitivity.
    pub fn search_options<T>(&self, fields: Vec<SearchField<T>>) -> SearchOptions<T> {
        SearchOptions::new(fields).with_case_sensitive(self.config.case_sensitive_search)
    }

    /// Fuzzy options over `fields` with the configured threshold and case
    /// sensitivity.
    pub fn fuzzy_options<T>(&self, fields: Vec<SearchField<T>>) -> FuzzyOptions<T> {
        FuzzyOptions::new(fields)
            .with_threshold(self.config.fuzzy_threshold)
            .with_case_sensitive(self.config.case_sensitive_search)
    }

    /// Substring search over the default fields.
    pub fn search<'i, T: Searchable + 'static>(&self, query: &str, items: &'i [T]) -> Vec<&'i T> {
        let options = self.search_options(rainersoft_search::default_fields());
        rainersoft_search::search_content(query, items, &options)
    }

    /// Fuzzy search over the default fields.
    pub fn fuzzy_search<'i, T: Searchable + 'static>(
        &self,
        query: &str,
        items: &'i [T],
    ) -> Vec<Scored<&'i T>> {
        let options = self.fuzzy_options(rainersoft_search::default_fields());
        rainersoft_search::fuzzy_search(query, items, &options)
    }
}
