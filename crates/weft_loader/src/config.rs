//! Cache directory configuration.

use std::path::PathBuf;

use weft_common::ContentHash;

/// Where compiled artifacts are cached, chosen once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheDir {
    /// A per-deployment subdirectory of the system temp directory.
    ///
    /// The directory name embeds a hash of a fixed namespace salt so two
    /// unrelated deployments sharing a temp root are unlikely to collide.
    /// Not recommended for production: distinct projects running the same
    /// weft version still share it.
    Default,

    /// No on-disk cache. Every first load of a template compiles from
    /// source; the active-unit registry still applies within a process.
    Disabled,

    /// A concrete cache directory, created eagerly at construction.
    At(PathBuf),
}

impl CacheDir {
    /// Resolves the configuration to a concrete root, or `None` when the
    /// cache is disabled.
    pub(crate) fn resolve(self) -> Option<PathBuf> {
        match self {
            CacheDir::Disabled => None,
            CacheDir::At(root) => Some(root),
            CacheDir::Default => {
                let salt = ContentHash::from_bytes(
                    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).as_bytes(),
                );
                Some(std::env::temp_dir().join(format!("weft_{salt}")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_resolves_to_none() {
        assert_eq!(CacheDir::Disabled.resolve(), None);
    }

    #[test]
    fn explicit_path_kept_verbatim() {
        let root = PathBuf::from("/var/cache/weft");
        assert_eq!(CacheDir::At(root.clone()).resolve(), Some(root));
    }

    #[test]
    fn default_is_under_temp_dir() {
        let root = CacheDir::Default.resolve().unwrap();
        assert!(root.starts_with(std::env::temp_dir()));
    }

    #[test]
    fn default_is_deterministic() {
        assert_eq!(CacheDir::Default.resolve(), CacheDir::Default.resolve());
    }
}
