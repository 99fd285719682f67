//! Page slug validation and sanitisation.
//!
//! Generated pages carry a URL slug derived from their title. The rules here
//! match what the static page router accepts, so generated slugs are always
//! routable without further cleanup.
//!
//! # Slug Rules
//!
//! - Length between 1 and 64 characters
//! - Lowercase ASCII letters, digits, and hyphens only
//! - No leading, trailing, or consecutive hyphens

/// Maximum allowed length for a page slug.
pub const SLUG_MAX: usize = 64;

/// Validates a page slug against the routing rules.
///
/// # Examples
///
/// ```
/// use mock_data::is_valid_slug;
///
/// assert!(is_valid_slug("getting-started"));
/// assert!(is_valid_slug("lesson2"));
/// assert!(!is_valid_slug("Getting Started")); // uppercase and space
/// assert!(!is_valid_slug("-intro"));          // leading hyphen
/// assert!(!is_valid_slug("a--b"));            // consecutive hyphens
/// ```
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    let length = slug.chars().count();
    if !(1..=SLUG_MAX).contains(&length) {
        return false;
    }
    if slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return false;
    }
    slug.chars().all(is_slug_char)
}

/// Returns `true` if the character is allowed in a slug.
const fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

/// Derives a slug from a raw title.
///
/// Lowercases the title, folds every run of non-alphanumeric characters into
/// a single hyphen, strips boundary hyphens, and truncates to [`SLUG_MAX`].
/// The result is always a valid slug unless the title contains no
/// alphanumeric characters at all.
pub(crate) fn sanitize_slug(raw: &str) -> String {
    let mut slug = String::new();
    let mut pending_hyphen = false;
    for c in raw.chars() {
        if slug.chars().count() >= SLUG_MAX {
            break;
        }
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    // Truncate before trimming so a cut cannot expose a boundary hyphen.
    let mut truncated: String = slug.chars().take(SLUG_MAX).collect();
    while truncated.ends_with('-') {
        truncated.pop();
    }
    truncated
}
