//! Identity hashing.
//!
//! Raw identity tokens (network addresses) are never stored. They are reduced
//! to a fixed-size SHA-256 digest used only for view deduplication lookups.

use sha2::{Digest, Sha256};

/// Hash a raw identity token into an opaque lowercase hex string.
///
/// Deterministic and one-way: equal inputs always produce equal outputs, and
/// the output is never reversed back into the raw token.
///
/// # Examples
///
/// ```
/// use reelist_common::hash_identity;
///
/// let a = hash_identity("203.0.113.7");
/// let b = hash_identity("203.0.113.7");
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 64);
/// ```
#[must_use]
pub fn hash_identity(raw: &str) -> String {
    let digest = Sha256::digest(raw.as_bytes());
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        assert_eq!(hash_identity("198.51.100.1"), hash_identity("198.51.100.1"));
    }

    #[test]
    fn test_distinct_inputs_differ() {
        assert_ne!(hash_identity("198.51.100.1"), hash_identity("198.51.100.2"));
    }

    #[test]
    fn test_fixed_length_hex() {
        let h = hash_identity("2001:db8::1");
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(h, h.to_lowercase());
    }
}
