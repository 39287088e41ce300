//! Content hashing for template identity and artifact validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 128-bit XXH3 hash over arbitrary bytes.
///
/// Used in three places: deriving a stable compiled-unit identifier from a
/// template name, deriving the cache filename for that template, and
/// checksumming artifact payloads. Hashing absorbs arbitrary input
/// (empty names, path separators, non-ASCII) into a fixed-length,
/// filesystem-safe hex token; collisions are treated as negligible and
/// are not handled.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash([u8; 16]);

impl ContentHash {
    /// Computes the XXH3-128 hash of a byte slice.
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = xxhash_rust::xxh3::xxh3_128(data);
        Self(hash.to_le_bytes())
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({:02x}{:02x}..)", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_across_calls() {
        let a = ContentHash::from_bytes(b"index.html");
        let b = ContentHash::from_bytes(b"index.html");
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_names_distinct_hashes() {
        let a = ContentHash::from_bytes(b"header");
        let b = ContentHash::from_bytes(b"footer");
        assert_ne!(a, b);
    }

    #[test]
    fn empty_input_is_total() {
        let h = ContentHash::from_bytes(b"");
        assert_eq!(format!("{h}").len(), 32);
    }

    #[test]
    fn display_is_lowercase_hex() {
        let h = ContentHash::from_bytes(b"greeting");
        let s = format!("{h}");
        assert_eq!(s.len(), 32);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(s, s.to_lowercase());
    }

    #[test]
    fn debug_abbreviated() {
        let h = ContentHash::from_bytes(b"greeting");
        let s = format!("{h:?}");
        assert!(s.starts_with("ContentHash("));
        assert!(s.ends_with("..)"));
    }

    #[test]
    fn serde_roundtrip() {
        let h = ContentHash::from_bytes(b"serde test");
        let json = serde_json::to_string(&h).unwrap();
        let back: ContentHash = serde_json::from_str(&json).unwrap();
        assert_eq!(h, back);
    }
}
