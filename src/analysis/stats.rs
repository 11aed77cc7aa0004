//! Line and word counts.

/// Number of `\n`-separated segments. Empty text still has one line.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Number of maximal non-whitespace runs. The ASCII information separators
/// (U+001C..U+001F) also count as whitespace.
pub fn word_count(text: &str) -> usize {
    text.split(is_word_separator)
        .filter(|word| !word.is_empty())
        .count()
}

fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
