//! Slugs, truncation and other display-text transforms.

use regex_lite::Regex;
use std::sync::LazyLock;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Suffix appended by [`truncate`].
pub const DEFAULT_TRUNCATE_SUFFIX: &str = "...";

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("static regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));
static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("static regex"));
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static regex"));

/// Converts free text into a URL slug.
///
/// Accents are decomposed and dropped (`"Ação"` → `"acao"`), anything outside
/// ASCII word characters, whitespace and `-` is removed, whitespace runs become
/// a single `-`, and leading/trailing hyphens are trimmed. The output is
/// always lowercase ASCII and applying the function twice changes nothing.
#[must_use]
pub fn text_to_slug(text: &str) -> String {
    let lowered = remove_accents(&text.to_lowercase());
    let cleaned = NON_SLUG_CHARS.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUN.replace_all(&cleaned, "-");
    let collapsed = HYPHEN_RUN.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_ascii_lowercase()
}

/// Strips combining marks after canonical decomposition (`"é"` → `"e"`).
#[must_use]
pub fn remove_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Shortens `text` to at most `max_chars` characters, ending with `...`.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    truncate_with_suffix(text, max_chars, DEFAULT_TRUNCATE_SUFFIX)
}

/// Shortens `text` to at most `max_chars` characters including `suffix`.
///
/// Text that already fits is returned as is. Trailing whitespace before the
/// suffix is trimmed. When `max_chars` cannot even hold the suffix, the text
/// is cut to `max_chars` characters with no suffix.
#[must_use]
pub fn truncate_with_suffix(text: &str, max_chars: usize, suffix: &str) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let suffix_len = suffix.chars().count();
    if max_chars <= suffix_len {
        return text.chars().take(max_chars).collect();
    }

    let kept: String = text.chars().take(max_chars - suffix_len).collect();
    format!("{}{suffix}", kept.trim_end())
}

/// Returns up to `max` uppercase initials, one per word.
///
/// `get_initials("maria da silva", 2)` is `"MD"`.
#[must_use]
pub fn get_initials(name: &str, max: usize) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(max)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Uppercases the first character and lowercases the rest.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Removes HTML tags, keeping the text between them.
#[must_use]
pub fn strip_html(html: &str) -> String {
    HTML_TAG.replace_all(html, "").trim().to_string()
}

/// Counts whitespace-separated words.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
