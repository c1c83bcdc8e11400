use crate::field::{default_fields, SearchField, Searchable};

/// Minimum similarity a fuzzy hit needs by default.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.6;

/// Options for [`search_content`](crate::search_content) and
/// [`search_with_score`](crate::search_with_score).
#[derive(Debug)]
pub struct SearchOptions<T> {
    /// Fields to search, most important first.
    pub fields: Vec<SearchField<T>>,
    pub case_sensitive: bool,
    /// Require the whole field to equal the query instead of containing it.
    pub exact_match: bool,
}

impl<T> SearchOptions<T> {
    pub fn new(fields: Vec<SearchField<T>>) -> Self {
        Self {
            fields,
            case_sensitive: false,
            exact_match: false,
        }
    }

    #[must_use]
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    #[must_use]
    pub fn with_exact_match(mut self, exact_match: bool) -> Self {
        self.exact_match = exact_match;
        self
    }
}

impl<T: Searchable + 'static> Default for SearchOptions<T> {
    fn default() -> Self {
        Self::new(default_fields())
    }
}

/// Options for [`fuzzy_search`](crate::fuzzy_search).
#[derive(Debug)]
pub struct FuzzyOptions<T> {
    pub fields: Vec<SearchField<T>>,
    /// Hits scoring below this are dropped. Expected in `0.0..=1.0`.
    pub threshold: f64,
    pub case_sensitive: bool,
}

impl<T> FuzzyOptions<T> {
    pub fn new(fields: Vec<SearchField<T>>) -> Self {
        Self {
            fields,
            threshold: DEFAULT_FUZZY_THRESHOLD,
            case_sensitive: false,
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

impl<T: Searchable + 'static> Default for FuzzyOptions<T> {
    fn default() -> Self {
        Self::new(default_fields())
    }
}
