//! Rainersoft utilities.
//!
//! One import for the whole toolkit:
//! - text helpers: slugs, truncation, CPF/CNPJ, phone numbers, hashing, colors
//! - locale-aware formatting of dates, relative times, numbers and currency
//! - form validators and password strength
//! - status code labels and badge classification
//! - substring, weighted and fuzzy search
//!
//! Every locale-sensitive function takes a [`Locale`] argument. To avoid
//! threading it through an application, load a [`UtilsConfig`] once and
//! call through a [`Toolkit`]:
//!
//! ```
//! use rainersoft_utils::{Locale, Toolkit, UtilsConfig};
//!
//! let config = UtilsConfig::default().with_locale(Locale::EnUs);
//! let kit = Toolkit::new(&config);
//! assert_eq!(kit.format_currency(1234.56), "$1,234.56");
//! assert_eq!(kit.translate_status("DRAFT"), "Draft");
//! ```

mod config;
mod error;
mod logging;
mod toolkit;

pub use config::UtilsConfig;
pub use error::{UtilsError, UtilsResult};
pub use logging::init_tracing;
pub use toolkit::Toolkit;

pub use rainersoft_format::*;
pub use rainersoft_search::*;
pub use rainersoft_status::*;
pub use rainersoft_text::*;
pub use rainersoft_types::*;
pub use rainersoft_validation::*;

/// Namespaced access to each function group.
pub use rainersoft_format as format;
pub use rainersoft_search as search;
pub use rainersoft_status as status;
pub use rainersoft_text as text;
pub use rainersoft_types as types;
pub use rainersoft_validation as validation;
