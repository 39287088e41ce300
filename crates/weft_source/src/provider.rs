//! The provider contract and the record it returns.

use std::time::SystemTime;

use crate::error::SourceError;

/// Source text for one template, plus its modification marker.
///
/// `modified_at == None` means the source has no meaningful modification
/// time (generated or purely in-memory content). The loader responds by
/// compiling directly and never writing a cache artifact for it.
#[derive(Debug, Clone)]
pub struct SourceRecord {
    /// The full template source text.
    pub text: String,

    /// When the source last changed, if the provider can know.
    pub modified_at: Option<SystemTime>,
}

/// Resolves template names to source text.
///
/// Implementations must fail with [`SourceError::NotFound`] when the name
/// does not resolve; the loader propagates that to its caller unchanged.
pub trait SourceProvider {
    /// Returns the source record for the given template name.
    fn get_source(&self, name: &str) -> Result<SourceRecord, SourceError>;
}
