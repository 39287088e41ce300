//! Filesystem-backed source provider.

use std::path::{Component, Path, PathBuf};

use crate::error::SourceError;
use crate::provider::{SourceProvider, SourceRecord};

/// Resolves template names as relative paths under one or more root
/// directories.
///
/// Roots are searched in order; the first root containing the name wins.
/// Names are rejected before touching the filesystem if they are absolute
/// or contain `..` components, so a template can never read outside the
/// configured roots.
pub struct DirProvider {
    /// Root directories, searched in order.
    roots: Vec<PathBuf>,
}

impl DirProvider {
    /// Creates a provider with a single root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            roots: vec![root.into()],
        }
    }

    /// Creates a provider that searches the given roots in order.
    pub fn with_roots(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Maps a template name to the first existing file under the roots.
    fn resolve(&self, name: &str) -> Result<PathBuf, SourceError> {
        let relative = Path::new(name);
        let escapes = relative.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes {
            return Err(SourceError::Escapes {
                name: name.to_string(),
            });
        }

        for root in &self.roots {
            let candidate = root.join(relative);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
        Err(SourceError::NotFound {
            name: name.to_string(),
        })
    }
}

impl SourceProvider for DirProvider {
    fn get_source(&self, name: &str) -> Result<SourceRecord, SourceError> {
        let path = self.resolve(name)?;
        let text = std::fs::read_to_string(&path).map_err(|e| SourceError::Io {
            path: path.clone(),
            source: e,
        })?;
        // A filesystem without mtime support degrades to the uncacheable
        // path rather than failing the load.
        let modified_at = std::fs::metadata(&path)
            .and_then(|m| m.modified())
            .ok();
        Ok(SourceRecord { text, modified_at })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(files: &[(&str, &str)]) -> (tempfile::TempDir, DirProvider) {
        let dir = tempfile::tempdir().unwrap();
        for (name, text) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(&path, text).unwrap();
        }
        let provider = DirProvider::new(dir.path());
        (dir, provider)
    }

    #[test]
    fn resolves_file_with_mtime() {
        let (_dir, provider) = fixture(&[("page.html", "<p>hi</p>")]);
        let record = provider.get_source("page.html").unwrap();
        assert_eq!(record.text, "<p>hi</p>");
        assert!(record.modified_at.is_some());
    }

    #[test]
    fn resolves_nested_name() {
        let (_dir, provider) = fixture(&[("partials/nav.html", "<nav/>")]);
        let record = provider.get_source("partials/nav.html").unwrap();
        assert_eq!(record.text, "<nav/>");
    }

    #[test]
    fn missing_name_is_not_found() {
        let (_dir, provider) = fixture(&[]);
        let err = provider.get_source("absent.html").unwrap_err();
        assert!(matches!(err, SourceError::NotFound { name } if name == "absent.html"));
    }

    #[test]
    fn parent_components_rejected() {
        let (_dir, provider) = fixture(&[("page.html", "x")]);
        let err = provider.get_source("../page.html").unwrap_err();
        assert!(matches!(err, SourceError::Escapes { .. }));
    }

    #[test]
    fn absolute_name_rejected() {
        let (_dir, provider) = fixture(&[]);
        let err = provider.get_source("/etc/hostname").unwrap_err();
        assert!(matches!(err, SourceError::Escapes { .. }));
    }

    #[test]
    fn first_root_wins() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        std::fs::write(a.path().join("t.html"), "from a").unwrap();
        std::fs::write(b.path().join("t.html"), "from b").unwrap();
        let provider =
            DirProvider::with_roots(vec![a.path().to_path_buf(), b.path().to_path_buf()]);
        assert_eq!(provider.get_source("t.html").unwrap().text, "from a");
    }

    #[test]
    fn later_root_consulted_on_miss() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        std::fs::write(b.path().join("only-b.html"), "from b").unwrap();
        let provider =
            DirProvider::with_roots(vec![a.path().to_path_buf(), b.path().to_path_buf()]);
        assert_eq!(provider.get_source("only-b.html").unwrap().text, "from b");
    }
}
