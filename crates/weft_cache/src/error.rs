//! Error types for artifact storage.

use std::path::PathBuf;

/// Errors from reading or stat-ing a stored artifact.
///
/// These surface to the caller of a load: a corrupt or vanished artifact
/// is a hard failure at this layer, not a silent cache miss.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No artifact exists at the given path.
    #[error("no cache artifact at {path}")]
    NotFound {
        /// The artifact path that was probed.
        path: PathBuf,
    },

    /// An I/O error occurred while reading or stat-ing the artifact.
    #[error("cache I/O error at {path}: {source}")]
    Io {
        /// The artifact path involved.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The artifact file exists but fails envelope validation.
    #[error("corrupt cache artifact at {path}: {reason}")]
    Corrupt {
        /// The artifact path involved.
        path: PathBuf,
        /// What failed to validate.
        reason: String,
    },
}

/// Errors from persisting an artifact.
///
/// `CannotOpen` is the one recoverable failure in the whole subsystem:
/// the loader falls back to activating the in-memory bytes. The other
/// variants surface to the caller.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The target path could not be opened for writing.
    #[error("cannot open {path} for writing: {source}")]
    CannotOpen {
        /// The artifact path involved.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The target opened but writing the bytes failed.
    #[error("failed to write artifact to {path}: {source}")]
    Io {
        /// The artifact path involved.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The envelope header could not be encoded.
    #[error("failed to encode artifact header: {reason}")]
    Encode {
        /// Description of the encoding failure.
        reason: String,
    },
}
