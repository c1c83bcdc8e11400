//! Field accessors: how the search functions read text out of a record.

use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// Field names searched when a record type has no explicit field list.
pub const DEFAULT_FIELDS: [&str; 4] = ["title", "description", "content", "tags"];

/// The text a record exposes for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    /// Each element is matched on its own.
    List(Vec<Cow<'a, str>>),
    Missing,
}

impl<'a> FieldValue<'a> {
    /// Borrowed text value.
    #[must_use]
    pub fn text(s: &'a str) -> Self {
        Self::Text(Cow::Borrowed(s))
    }

    /// Borrowed list value.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a S>,
        S: AsRef<str> + ?Sized + 'a,
    {
        Self::List(items.into_iter().map(|s| Cow::Borrowed(s.as_ref())).collect())
    }

    /// `Missing` for `None`, `Text` otherwise.
    #[must_use]
    pub fn optional(s: Option<&'a str>) -> Self {
        s.map_or(Self::Missing, Self::text)
    }
}

impl<'a> IntoIterator for FieldValue<'a> {
    type Item = Cow<'a, str>;
    type IntoIter = std::vec::IntoIter<Cow<'a, str>>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::Text(text) => vec![text],
            Self::List(items) => items,
            Self::Missing => Vec::new(),
        }
        .into_iter()
    }
}

type Accessor<T> = dyn for<'a> Fn(&'a T) -> FieldValue<'a> + Send + Sync;

/// A named accessor into records of type `T`.
///
/// The position of a field in an options list sets its weight in
/// [`search_with_score`](crate::search_with_score): earlier fields count more.
pub struct SearchField<T> {
    name: String,
    accessor: Box<Accessor<T>>,
}

impl<T> SearchField<T> {
    pub fn new<F>(name: impl Into<String>, accessor: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> FieldValue<'a> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            accessor: Box::new(accessor),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads this field from `item`.
    pub fn get<'a>(&self, item: &'a T) -> FieldValue<'a> {
        (self.accessor)(item)
    }
}

impl<T: Searchable + 'static> SearchField<T> {
    /// Field looked up by name through [`Searchable`].
    pub fn key(name: impl Into<String>) -> Self {
        let name = name.into();
        let lookup = name.clone();
        Self::new(name, move |item: &T| item.field(&lookup))
    }
}

impl<T> fmt::Debug for SearchField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchField").field("name", &self.name).finish()
    }
}

/// Records that can be read by field name.
pub trait Searchable {
    fn field(&self, name: &str) -> FieldValue<'_>;
}

/// JSON objects are searched by key. Strings match as text, numbers and
/// booleans by their JSON rendering, arrays element by element; `null`,
/// nested objects and absent keys are missing.
impl Searchable for Value {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match self.get(name) {
            Some(Value::Array(items)) => {
                FieldValue::List(items.iter().filter_map(scalar_text).collect())
            }
            Some(value) => scalar_text(value).map_or(FieldValue::Missing, FieldValue::Text),
            None => FieldValue::Missing,
        }
    }
}

fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Searchable fields named in [`DEFAULT_FIELDS`].
pub fn default_fields<T: Searchable + 'static>() -> Vec<SearchField<T>> {
    DEFAULT_FIELDS.into_iter().map(|name| SearchField::key(name)).collect()
}
