//! Error types for source retrieval.

use std::path::PathBuf;

/// Errors that can occur when resolving a template name to source text.
///
/// All variants are fatal to the requesting load: the loader never
/// recovers from a missing or unreadable source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// No provider knows a template with this name.
    #[error("no template source named '{name}'")]
    NotFound {
        /// The template name that failed to resolve.
        name: String,
    },

    /// The template name would resolve outside the provider's roots.
    #[error("template name '{name}' escapes the provider root")]
    Escapes {
        /// The offending template name.
        name: String,
    },

    /// An I/O error occurred while reading a resolved source file.
    #[error("failed to read template at {path}: {source}")]
    Io {
        /// The path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = SourceError::NotFound {
            name: "missing.html".to_string(),
        };
        assert_eq!(format!("{err}"), "no template source named 'missing.html'");
    }

    #[test]
    fn escapes_display() {
        let err = SourceError::Escapes {
            name: "../etc/passwd".to_string(),
        };
        assert!(format!("{err}").contains("escapes the provider root"));
    }

    #[test]
    fn io_display() {
        let err = SourceError::Io {
            path: PathBuf::from("/srv/templates/a.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = format!("{err}");
        assert!(msg.contains("a.html"));
        assert!(msg.contains("denied"));
    }
}
