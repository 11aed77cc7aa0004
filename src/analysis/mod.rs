//! Post-processing of recognized text.
//!
//! Everything here is pure: no I/O, no shared mutable state beyond the
//! compiled patterns.

mod entities;
mod stats;

pub use entities::{find_emails, find_phone_numbers, find_urls, EntityBundle};
pub use stats::{line_count, word_count};
