//! String utility functions
//!
//! Utilities for working with fixed-width text fields and raw bytes.

/// Trims blank and NUL padding from both ends of a field
pub fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c == ' ' || c == '\0')
}

/// Renders bytes for display, replacing non-printable bytes with '.'
///
/// At most `limit` bytes are rendered; a trailing "..." marks truncation.
pub fn printable_preview(bytes: &[u8], limit: usize) -> String {
    let mut preview: String = bytes
        .iter()
        .take(limit)
        .map(|b| if b.is_ascii_graphic() || *b == b' ' { *b as char } else { '.' })
        .collect();
    if bytes.len() > limit {
        preview.push_str("...");
    }
    preview
}
