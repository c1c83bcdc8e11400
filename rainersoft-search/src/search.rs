//! The three search strategies.

use crate::field::{FieldValue, SearchField};
use crate::options::{FuzzyOptions, SearchOptions};
use crate::similarity::similarity;
use serde::Serialize;
use std::borrow::Cow;

/// A search hit with its score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scored<R> {
    pub item: R,
    pub score: f64,
}

/// Case folding applied to the query and to every field value.
struct Folding {
    case_sensitive: bool,
}

impl Folding {
    fn apply<'v>(&self, value: &'v str) -> Cow<'v, str> {
        if self.case_sensitive {
            Cow::Borrowed(value)
        } else {
            Cow::Owned(value.to_lowercase())
        }
    }
}

fn field_values<'a, T>(
    field: &SearchField<T>,
    item: &'a T,
) -> impl Iterator<Item = Cow<'a, str>> {
    field.get(item).into_iter()
}

/// Items where any field, or any element of a list field, contains the query.
///
/// With `exact_match` the value must equal the query instead. Matches keep
/// their input order. An empty query returns every item.
pub fn search_content<'i, T>(
    query: &str,
    items: &'i [T],
    options: &SearchOptions<T>,
) -> Vec<&'i T> {
    if query.is_empty() {
        return items.iter().collect();
    }

    let folding = Folding {
        case_sensitive: options.case_sensitive,
    };
    let needle = folding.apply(query);
    let matches = |value: Cow<'_, str>| {
        let value = folding.apply(&value);
        if options.exact_match {
            value == needle
        } else {
            value.contains(needle.as_ref())
        }
    };

    let hits: Vec<&T> = items
        .iter()
        .filter(|item| {
            options
                .fields
                .iter()
                .any(|field| field_values(field, *item).any(&matches))
        })
        .collect();

    tracing::debug!(query, items = items.len(), hits = hits.len(), "content search");
    hits
}

/// Ranks items by where and how often the query appears.
///
/// A field's weight is `fields.len() - index`. A list field adds its weight
/// once per matching element. A text field containing the query adds its
/// weight, and three times its weight when it equals the query. Items scoring
/// zero are dropped; the rest are sorted by descending score, ties in input
/// order.
pub fn search_with_score<'i, T>(
    query: &str,
    items: &'i [T],
    options: &SearchOptions<T>,
) -> Vec<Scored<&'i T>> {
    let folding = Folding {
        case_sensitive: options.case_sensitive,
    };
    let needle = folding.apply(query);
    let field_count = options.fields.len();

    let mut scored: Vec<Scored<&T>> = items
        .iter()
        .filter_map(|item| {
            let score: usize = options
                .fields
                .iter()
                .enumerate()
                .map(|(index, field)| {
                    let weight = field_count - index;
                    match field.get(item) {
                        FieldValue::List(values) => {
                            let hits = values
                                .iter()
                                .filter(|v| folding.apply(v).contains(needle.as_ref()))
                                .count();
                            hits * weight
                        }
                        FieldValue::Text(value) => {
                            let value = folding.apply(&value);
                            if value == needle {
                                weight * 3
                            } else if value.contains(needle.as_ref()) {
                                weight
                            } else {
                                0
                            }
                        }
                        FieldValue::Missing => 0,
                    }
                })
                .sum();

            (score > 0).then(|| Scored {
                item,
                score: score as f64,
            })
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    tracing::debug!(query, items = items.len(), hits = scored.len(), "scored search");
    scored
}

/// Items whose best field similarity reaches the threshold.
///
/// Each non-empty field value, and each non-empty element of a list field, is
/// compared with [`similarity`]; the item keeps its highest score. Results are sorted by
/// descending similarity, ties in input order.
pub fn fuzzy_search<'i, T>(
    query: &str,
    items: &'i [T],
    options: &FuzzyOptions<T>,
) -> Vec<Scored<&'i T>> {
    let folding = Folding {
        case_sensitive: options.case_sensitive,
    };
    let needle = folding.apply(query);

    let mut scored: Vec<Scored<&T>> = items
        .iter()
        .filter_map(|item| {
            let best = options
                .fields
                .iter()
                .flat_map(|field| field_values(field, item))
                .filter(|value| !value.is_empty())
                .map(|value| similarity(&needle, &folding.apply(&value)))
                .fold(None, |best: Option<f64>, s| Some(best.map_or(s, |b| b.max(s))))?;

            (best >= options.threshold).then_some(Scored { item, score: best })
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    tracing::debug!(
        query,
        threshold = options.threshold,
        items = items.len(),
        hits = scored.len(),
        "fuzzy search"
    );
    scored
}
