//! Deterministic naming for compiled units and their cache artifacts.
//!
//! Both mappings are pure functions of the template name: the same name
//! yields the same unit identifier and the same cache filename in every
//! process, so artifacts written by one run are found by the next. The
//! hash absorbs any name, including empty strings and names containing
//! path separators, into a filesystem-safe token.

use std::fmt;
use std::path::{Path, PathBuf};

use weft_common::ContentHash;

/// File extension for cached compiled units.
const ARTIFACT_EXT: &str = "unit";

/// Stable identifier of a compiled template unit.
///
/// Derived one-way from the template name; used as the key in the
/// active-unit registry and the activator's table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitId(String);

impl UnitId {
    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derives the compiled-unit identifier for a template name.
pub fn unit_id_for(name: &str) -> UnitId {
    UnitId(format!(
        "__WeftUnit_{}",
        ContentHash::from_bytes(name.as_bytes())
    ))
}

/// Derives the cache filename (no directory) for a template name.
pub fn cache_file_name(name: &str) -> String {
    format!(
        "weft_{}.{ARTIFACT_EXT}",
        ContentHash::from_bytes(name.as_bytes())
    )
}

/// Derives the full artifact path for a template name under a cache root.
pub fn cache_path_for(root: &Path, name: &str) -> PathBuf {
    root.join(cache_file_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_id_stable() {
        assert_eq!(unit_id_for("greeting"), unit_id_for("greeting"));
    }

    #[test]
    fn unit_id_distinct_per_name() {
        assert_ne!(unit_id_for("a.html"), unit_id_for("b.html"));
    }

    #[test]
    fn unit_id_has_fixed_prefix() {
        assert!(unit_id_for("x").as_str().starts_with("__WeftUnit_"));
    }

    #[test]
    fn empty_name_is_valid() {
        let id = unit_id_for("");
        assert!(id.as_str().len() > "__WeftUnit_".len());
        assert_eq!(cache_file_name(""), cache_file_name(""));
    }

    #[test]
    fn path_unsafe_names_yield_safe_filenames() {
        for name in ["../../etc/passwd", "a/b/c.html", "sp ace", "uni\u{00e9}"] {
            let file = cache_file_name(name);
            assert!(!file.contains('/'));
            assert!(!file.contains(".."));
            assert!(file.starts_with("weft_"));
            assert!(file.ends_with(".unit"));
        }
    }

    #[test]
    fn cache_path_is_directly_under_root() {
        let path = cache_path_for(Path::new("/tmp/cache"), "greeting");
        assert_eq!(path.parent(), Some(Path::new("/tmp/cache")));
    }

    #[test]
    fn id_and_filename_share_the_name_hash() {
        let hash = ContentHash::from_bytes(b"greeting").to_string();
        assert!(unit_id_for("greeting").as_str().contains(&hash));
        assert!(cache_file_name("greeting").contains(&hash));
    }
}
