use once_cell::sync::Lazy;
use regex::Regex;

/// Optional scheme, optional `www.`, dot-separated labels, a lowercase
/// final label of two or more letters, optional port, optional suffix.
static URL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?(www\.)?([a-zA-Z0-9]+(-?[a-zA-Z0-9])*\.)+[a-z]{2,}(:[0-9]+)?(/.*)?$")
        .expect("URL pattern is valid")
});

/// True if `text` looks like a web URL. Never fails; anything else is false.
///
/// # Examples
///
/// - `is_valid_url("https://example.com/video?x=1")` → `true`
/// - `is_valid_url("www.example.co")` → `true`
/// - `is_valid_url("http//missing-colon.com")` → `false`
pub fn is_valid_url(text: &str) -> bool {
    URL_SHAPE.is_match(text)
}
