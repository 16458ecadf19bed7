//! Lyrics helpers
//!
//! Stored song text keeps verses separated by a blank line, exactly as the
//! music info provider delivers them. Splitting is purely positional.

/// Delimiter between verses in stored text
const VERSE_DELIMITER: &str = "\n\n";

/// Split song text into its verses
pub fn split_verses(text: &str) -> Vec<&str> {
    text.split(VERSE_DELIMITER).collect()
}

/// Get the verse at a 0-based index, if it exists.
///
/// An index equal to the verse count is out of range, not just one past it.
pub fn verse_at(text: &str, index: usize) -> Option<&str> {
    let verses = split_verses(text);
    if index >= verses.len() {
        return None;
    }
    Some(verses[index])
}
