//! Password requirements and strength scoring.

use rainersoft_types::{interpolate, Locale, ValidationResult};
use serde::{Deserialize, Serialize};

/// Length thresholds and the bonus each one earns.
const LENGTH_BONUSES: [(usize, u32); 3] = [(8, 20), (12, 10), (16, 10)];
const CLASS_BONUS: u32 = 10;
const ALL_CLASSES_BONUS: u32 = 20;
const WEAK_PATTERN_PENALTY: u32 = 20;
const MAX_SCORE: u32 = 100;

const COMMON_WORDS: [&str; 4] = ["password", "qwerty", "admin", "abc123"];

/// Rules enforced by [`validate_password`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordRequirements {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_number: bool,
    pub require_special: bool,
}

impl Default for PasswordRequirements {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_uppercase: true,
            require_lowercase: true,
            require_number: true,
            require_special: true,
        }
    }
}

fn is_special(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}

/// Which character classes a password contains.
#[derive(Debug, Clone, Copy, Default)]
struct Classes {
    lower: bool,
    upper: bool,
    digit: bool,
    special: bool,
}

impl Classes {
    fn of(password: &str) -> Self {
        password.chars().fold(Self::default(), |acc, c| Self {
            lower: acc.lower || c.is_lowercase(),
            upper: acc.upper || c.is_uppercase(),
            digit: acc.digit || c.is_numeric(),
            special: acc.special || is_special(c),
        })
    }

    fn count(&self) -> u32 {
        [self.lower, self.upper, self.digit, self.special]
            .into_iter()
            .filter(|present| *present)
            .count() as u32
    }
}

/// Checks `password` against `requirements`.
///
/// Every unmet requirement contributes its own message; checks do not stop
/// at the first failure.
#[must_use]
pub fn validate_password(
    password: &str,
    requirements: &PasswordRequirements,
    locale: Locale,
) -> ValidationResult {
    let m = locale.messages();
    let classes = Classes::of(password);
    let mut errors = Vec::new();

    if password.chars().count() < requirements.min_length {
        errors.push(interpolate(
            m.password_min_length,
            &[("min", requirements.min_length.to_string().as_str())],
        ));
    }
    if requirements.require_uppercase && !classes.upper {
        errors.push(m.password_uppercase.to_string());
    }
    if requirements.require_lowercase && !classes.lower {
        errors.push(m.password_lowercase.to_string());
    }
    if requirements.require_number && !classes.digit {
        errors.push(m.password_number.to_string());
    }
    if requirements.require_special && !classes.special {
        errors.push(m.password_special.to_string());
    }

    ValidationResult::from_errors(errors)
}

/// Strength bucket for a password score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PasswordStrengthLevel {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrengthLevel {
    /// Maps a 0–100 score: `<20`, `<40`, `<60`, `<80`, rest.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            0..20 => Self::VeryWeak,
            20..40 => Self::Weak,
            40..60 => Self::Fair,
            60..80 => Self::Good,
            _ => Self::Strong,
        }
    }

    /// Localized label ("Forte", "Strong", "Fuerte").
    #[must_use]
    pub fn label(&self, locale: Locale) -> &'static str {
        let m = locale.messages();
        match self {
            Self::VeryWeak => m.strength_very_weak,
            Self::Weak => m.strength_weak,
            Self::Fair => m.strength_fair,
            Self::Good => m.strength_good,
            Self::Strong => m.strength_strong,
        }
    }

    /// Indicator color as `#rrggbb`, red through green.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Self::VeryWeak => "#ef4444",
            Self::Weak => "#f97316",
            Self::Fair => "#eab308",
            Self::Good => "#22c55e",
            Self::Strong => "#16a34a",
        }
    }
}

/// Score, level and improvement hints for a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    pub score: u8,
    pub level: PasswordStrengthLevel,
    pub feedback: Vec<String>,
}

fn weak_pattern_count(password: &str, classes: &Classes) -> u32 {
    let lower = password.to_lowercase();
    let mut chars = password.chars();
    let repeated = match chars.next() {
        Some(first) => password.chars().count() > 1 && chars.all(|c| c == first),
        None => false,
    };

    let patterns = [
        password.starts_with("123456"),
        COMMON_WORDS.iter().any(|w| lower.contains(w)),
        repeated,
        classes.count() == 1,
    ];
    patterns.into_iter().filter(|hit| *hit).count() as u32
}

/// Scores a password out of 100.
///
/// Length earns up to 40 points (8, 12 and 16 characters), each character
/// class 10, and all four classes together another 20. Each weak pattern
/// (leading `123456`, a common word, one repeated character, a single class)
/// then costs 20, never going below zero.
#[must_use]
pub fn password_score(password: &str) -> u8 {
    let classes = Classes::of(password);
    let len = password.chars().count();

    let length_points: u32 = LENGTH_BONUSES
        .iter()
        .filter(|(threshold, _)| len >= *threshold)
        .map(|(_, points)| points)
        .sum();
    let class_points = classes.count() * CLASS_BONUS;
    let complexity = if classes.count() == 4 { ALL_CLASSES_BONUS } else { 0 };

    let raw = length_points + class_points + complexity;
    let penalty = weak_pattern_count(password, &classes) * WEAK_PATTERN_PENALTY;
    raw.saturating_sub(penalty).min(MAX_SCORE) as u8
}

/// Scores `password` and lists localized hints for raising the score.
#[must_use]
pub fn password_strength(password: &str, locale: Locale) -> PasswordStrength {
    let m = locale.messages();
    let classes = Classes::of(password);
    let score = password_score(password);

    let mut feedback = Vec::new();
    if password.chars().count() < 12 {
        feedback.push(m.hint_length.to_string());
    }
    if !classes.lower {
        feedback.push(m.hint_lowercase.to_string());
    }
    if !classes.upper {
        feedback.push(m.hint_uppercase.to_string());
    }
    if !classes.digit {
        feedback.push(m.hint_number.to_string());
    }
    if !classes.special {
        feedback.push(m.hint_special.to_string());
    }
    if weak_pattern_count(password, &classes) > 0 {
        feedback.push(m.hint_common.to_string());
    }

    PasswordStrength {
        score,
        level: PasswordStrengthLevel::from_score(score),
        feedback,
    }
}
