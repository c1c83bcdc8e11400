//! Locale-aware formatting for rainersoft-utils.
//!
//! - [`format_date`] renders calendar dates at three detail levels
//! - [`format_relative_date`] phrases elapsed time ("há 3 horas", "yesterday")
//! - [`format_number`], [`format_currency`], [`format_compact`],
//!   [`format_percentage`] and [`format_file_size`] render numbers with the
//!   locale's grouping and decimal separators
//!
//! Month and weekday names, relative-time phrases and number separators are
//! static per-locale tables; nothing is read from the host environment.

mod date;
mod names;
mod number;
mod relative;

pub use date::{format_date, DateFormat};
pub use number::{
    format_compact, format_currency, format_currency_in, format_file_size, format_number,
    format_percentage,
};
pub use relative::{
    format_relative_date, format_relative_date_at, RelativeTime, AVERAGE_MONTH_DAYS,
};
