//! Durable storage for compiled template artifacts.
//!
//! The [`ArtifactStore`] is a thin adapter over a flat cache directory:
//! existence checks, write-time reads, whole-file writes, and validated
//! reads. It never lists the directory and never evicts; callers address
//! artifacts by full path and staleness is decided elsewhere, per entry.

#![warn(missing_docs)]

pub mod error;
pub mod store;

pub use error::{StoreError, WriteError};
pub use store::ArtifactStore;
