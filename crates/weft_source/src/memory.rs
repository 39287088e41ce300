//! In-memory source provider.

use std::collections::HashMap;

use crate::error::SourceError;
use crate::provider::{SourceProvider, SourceRecord};

/// Serves template sources from an in-memory map.
///
/// Records always carry `modified_at = None`: in-memory content has no
/// modification time worth comparing against a cache artifact, so the
/// loader compiles these sources directly and never persists them.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    templates: HashMap<String, String>,
}

impl MemoryProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider from `(name, text)` pairs.
    pub fn with_templates<I, K, V>(templates: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            templates: templates
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Adds or replaces a template.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.templates.insert(name.into(), text.into());
    }
}

impl SourceProvider for MemoryProvider {
    fn get_source(&self, name: &str) -> Result<SourceRecord, SourceError> {
        let text = self
            .templates
            .get(name)
            .ok_or_else(|| SourceError::NotFound {
                name: name.to_string(),
            })?;
        Ok(SourceRecord {
            text: text.clone(),
            modified_at: None,
        })
    }
}
