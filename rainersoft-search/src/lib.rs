//! In-memory search over caller-described records.
//!
//! Three strategies share one field model:
//! - [`search_content`]: substring (or exact) filter, input order kept
//! - [`search_with_score`]: weighted ranking, earlier fields count more
//! - [`fuzzy_search`]: best per-field [`similarity`] above a threshold
//!
//! Records are read through [`SearchField`] accessors, so any type can be
//! searched without a schema. Types implementing [`Searchable`] (including
//! `serde_json::Value`) also get the default field list
//! `title`, `description`, `content`, `tags`.
//!
//! ```
//! use rainersoft_search::{search_content, SearchOptions};
//! use serde_json::json;
//!
//! let posts = vec![json!({"title": "Next.js Guide"}), json!({"title": "React Basics"})];
//! let hits = search_content("next", &posts, &SearchOptions::default());
//! assert_eq!(hits, vec![&posts[0]]);
//! ```

mod field;
mod options;
mod search;
mod similarity;

pub use field::{default_fields, FieldValue, SearchField, Searchable, DEFAULT_FIELDS};
pub use options::{FuzzyOptions, SearchOptions, DEFAULT_FUZZY_THRESHOLD};
pub use search::{fuzzy_search, search_content, search_with_score, Scored};
pub use similarity::{highlight, similarity, CONTAINMENT_SCORE};
