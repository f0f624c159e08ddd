//! Slug normalization.
//!
//! Free-text titles are reduced to lowercase, ASCII, hyphen-separated slugs.
//! Uniqueness probing against live and historical slugs lives in the slug
//! allocation service; this module is the pure text transform plus the
//! enumeration of sluggable content kinds.

use serde::{Deserialize, Serialize};

/// Maximum accepted title length in characters.
pub const MAX_TITLE_LEN: usize = 100;

/// Content kinds that carry slugs.
///
/// List slugs are unique per owner; a future globally-unique kind would add a
/// variant here and its own probe in the allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlugScope {
    /// User-owned media list. Slugs are scoped by the owning user.
    List,
}

impl SlugScope {
    /// Whether slugs of this kind are unique per owner rather than globally.
    #[must_use]
    pub const fn is_per_owner(self) -> bool {
        match self {
            Self::List => true,
        }
    }
}

/// Normalize a title into a URL-safe base slug.
///
/// Lowercases, keeps ASCII alphanumerics, collapses every other run of
/// characters into a single hyphen, and trims leading/trailing hyphens.
/// Returns an empty string when the title has no ASCII alphanumerics at all;
/// callers treat that as a validation failure.
///
/// # Examples
///
/// ```
/// use reelist_common::slugify;
///
/// assert_eq!(slugify("The Matrix"), "the-matrix");
/// assert_eq!(slugify("  Sci-Fi: Top 10!  "), "sci-fi-top-10");
/// ```
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
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

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(slugify("The Matrix"), "the-matrix");
    }

    #[test]
    fn test_punctuation_collapses() {
        assert_eq!(slugify("Best of 2024: Sci-Fi & Fantasy"), "best-of-2024-sci-fi-fantasy");
    }

    #[test]
    fn test_leading_trailing_noise() {
        assert_eq!(slugify("  --Watchlist--  "), "watchlist");
    }

    #[test]
    fn test_non_ascii_dropped() {
        assert_eq!(slugify("Amélie"), "amlie");
        assert_eq!(slugify("千と千尋"), "");
    }

    #[test]
    fn test_already_clean() {
        assert_eq!(slugify("top-10"), "top-10");
    }

    #[test]
    fn test_scope_ownership() {
        assert!(SlugScope::List.is_per_owner());
    }
}
