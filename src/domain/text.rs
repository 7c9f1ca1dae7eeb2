//! Length bounds for name, company and title.

/// Shortest allowed name, company or title.
pub const MIN_TEXT_LEN: usize = 2;

/// Longest allowed name, company or title.
pub const MAX_TEXT_LEN: usize = 100;

/// Length in characters, the unit the bounds are expressed in.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
