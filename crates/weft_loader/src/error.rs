//! Error type for template loads.

use std::path::PathBuf;

use weft_cache::{StoreError, WriteError};
use weft_source::SourceError;

use crate::activate::ActivateError;
use crate::compile::CompileError;

/// Errors surfaced by [`Loader::load`](crate::Loader::load).
///
/// Every variant is fatal to the requesting load and leaves the
/// active-unit registry untouched. The one recoverable condition —
/// the artifact store cannot open its target for writing — never appears
/// here; the loader absorbs it by activating the in-memory bytes.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source provider could not resolve the template name.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The compiler rejected the template source.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// A stored artifact could not be read, stat-ed, or validated.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Persisting the artifact failed after the target was opened.
    #[error(transparent)]
    Write(WriteError),

    /// Activation of the compiled unit failed.
    #[error(transparent)]
    Activate(#[from] ActivateError),

    /// The cache root directory could not be created at construction.
    #[error("failed to create cache directory {path}: {source}")]
    Init {
        /// The cache root being created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_passes_through() {
        let err = LoadError::from(SourceError::NotFound {
            name: "gone".to_string(),
        });
        assert_eq!(format!("{err}"), "no template source named 'gone'");
    }

    #[test]
    fn init_display() {
        let err = LoadError::Init {
            path: PathBuf::from("/no/such/root"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = format!("{err}");
        assert!(msg.contains("/no/such/root"));
        assert!(msg.contains("denied"));
    }
}
