//! Pattern-based entity extraction for recognized text.
//!
//! Each category is a pure, total function over a string. The patterns are
//! deliberately lenient: the phone pattern accepts plenty of numeric strings
//! that are not phone numbers, and matches from different categories may
//! overlap in the source text.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Entities detected in a block of text.
///
/// Every collection keeps matches in order of first appearance, duplicates
/// included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityBundle {
    pub emails: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub urls: Vec<String>,
}

impl EntityBundle {
    /// Run every extractor over `text`.
    pub fn from_text(text: &str) -> Self {
        Self {
            emails: find_emails(text),
            phone_numbers: find_phone_numbers(text),
            urls: find_urls(text),
        }
    }

    /// True when no category found anything.
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.phone_numbers.is_empty() && self.urls.is_empty()
    }

    /// Total number of matches across all categories.
    pub fn total(&self) -> usize {
        self.emails.len() + self.phone_numbers.len() + self.urls.len()
    }
}

// The `|` inside the TLD class is literal and intentionally kept.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b")
        .expect("email pattern should compile")
});

// The leading word boundary only guards the bare three-digit form; `+` and `(`
// are not word characters and would never sit on a boundary.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+\d{1,2}\s?)?(?:\(\d{3}\)|\b\d{3})[\s.-]?\d{3}[\s.-]?\d{4}\b")
        .expect("phone pattern should compile")
});

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://\S+|www\.\S+").expect("url pattern should compile")
});

fn find_all(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Find email addresses.
pub fn find_emails(text: &str) -> Vec<String> {
    find_all(&EMAIL_PATTERN, text)
}

/// Find phone numbers, with optional country code and parenthesized area code.
pub fn find_phone_numbers(text: &str) -> Vec<String> {
    find_all(&PHONE_PATTERN, text)
}

/// Find `http://`, `https://` and `www.` tokens up to the next whitespace.
pub fn find_urls(text: &str) -> Vec<String> {
    find_all(&URL_PATTERN, text)
}
