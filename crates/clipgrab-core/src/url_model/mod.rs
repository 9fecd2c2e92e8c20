//! URL shape check for clipboard text.
//!
//! This is a syntactic sanity check only: no network access, no
//! canonicalization. The downloader does the real URL handling.

mod validate;

pub use validate::is_valid_url;

/// Trims whitespace around clipboard text; empty text counts as no text.
///
/// Copied URLs often carry a trailing newline (e.g. from a terminal or an
/// editor line copy), which would otherwise fail the anchored match.
pub fn clean_clipboard_text(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
