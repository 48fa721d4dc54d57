//! String utility functions
//!
//! Utilities for working with strings and text data.

/// Trims trailing null characters from TIFF ASCII text
pub fn trim_trailing_nulls(text: &str) -> &str {
    text.trim_end_matches('\0')
}

/// Renders text for display, escaping NULs and other control characters
pub fn printable(text: &str) -> String {
    text.chars().flat_map(char::escape_default).collect()
}
