//! Field formatters shared by all renderers.

mod date;
mod escape;
mod fluency;
mod link;

pub use date::{
    format_date, format_date_range, format_end_date, parse_date, DateStyle, PRESENT,
};
pub use escape::{escape_html, escape_latex, escape_markdown};
pub use fluency::{fluency_level, DEFAULT_LEVEL, MAX_LEVEL};
pub use link::{display_handle, shorten_url};
