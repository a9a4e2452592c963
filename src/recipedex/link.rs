//! Link normalization and display helpers.
//!
//! Links are always stored with an explicit scheme; anything the user
//! types without one gets `https://` prepended. For display and for the
//! delete-confirmation message we extract a short domain label: the first
//! label before the first dot, after any scheme or `www.` prefix
//! (`https://www.tastyrecipes.com/pancakes` -> `tastyrecipes`).

use once_cell::sync::Lazy;
use regex::Regex;

static SCHEME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^https?://").expect("valid regex"));

static DOMAIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:https?://)?(?:www\.)?([^./\s]+)\.\S+").expect("valid regex"));

/// True when the value already carries an explicit http/https scheme.
pub fn has_scheme(value: &str) -> bool {
    SCHEME_RE.is_match(value)
}

/// Trim the raw input and make sure it has a scheme. Applied at both
/// create and edit time, before anything reaches storage.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Extract the short domain label, if the link looks like a URL.
pub fn extract_domain(link: &str) -> Option<&str> {
    DOMAIN_RE
        .captures(link)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Domain label with the raw link as fallback, for confirmation messages.
pub fn short_label(link: &str) -> &str {
    extract_domain(link).unwrap_or(link)
}

/// The text shown in place of the full URL on a rendered card.
pub fn display_text(link: &str) -> String {
    match extract_domain(link) {
        Some(domain) => format!("Link to recipe @ {}", domain),
        None => link.to_string(),
    }
}
