use serde::{Deserialize, Serialize};

/// Semantic coloring bucket for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Success,
    Destructive,
    Secondary,
    Neutral,
}

impl StatusTone {
    /// Utility classes for text and background.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "text-green-600 bg-green-50",
            Self::Destructive => "text-red-600 bg-red-50",
            Self::Secondary => "text-yellow-600 bg-yellow-50",
            Self::Neutral => "text-gray-600 bg-gray-50",
        }
    }
}

/// Badge variants understood by common component libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
}
