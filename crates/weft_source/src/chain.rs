//! Ordered fallback over multiple providers.

use crate::error::SourceError;
use crate::provider::{SourceProvider, SourceRecord};

/// Consults a list of providers in order and returns the first hit.
///
/// Only `NotFound` causes fall-through to the next provider; every other
/// provider failure (traversal rejection, read error) is surfaced as-is.
#[derive(Default)]
pub struct ChainProvider {
    providers: Vec<Box<dyn SourceProvider>>,
}

impl ChainProvider {
    /// Creates an empty chain. A chain with no providers resolves nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a provider to the end of the chain.
    pub fn push(&mut self, provider: Box<dyn SourceProvider>) {
        self.providers.push(provider);
    }
}

impl SourceProvider for ChainProvider {
    fn get_source(&self, name: &str) -> Result<SourceRecord, SourceError> {
        for provider in &self.providers {
            match provider.get_source(name) {
                Ok(record) => return Ok(record),
                Err(SourceError::NotFound { .. }) => continue,
                Err(other) => return Err(other),
            }
        }
        Err(SourceError::NotFound {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryProvider;

    #[test]
    fn first_provider_wins() {
        let mut chain = ChainProvider::new();
        chain.push(Box::new(MemoryProvider::with_templates([("t", "first")])));
        chain.push(Box::new(MemoryProvider::with_templates([("t", "second")])));
        assert_eq!(chain.get_source("t").unwrap().text, "first");
    }

    #[test]
    fn falls_through_on_not_found() {
        let mut chain = ChainProvider::new();
        chain.push(Box::new(MemoryProvider::new()));
        chain.push(Box::new(MemoryProvider::with_templates([("t", "second")])));
        assert_eq!(chain.get_source("t").unwrap().text, "second");
    }

    #[test]
    fn all_miss_is_not_found() {
        let mut chain = ChainProvider::new();
        chain.push(Box::new(MemoryProvider::new()));
        let err = chain.get_source("t").unwrap_err();
        assert!(matches!(err, SourceError::NotFound { name } if name == "t"));
    }

    #[test]
    fn empty_chain_is_not_found() {
        let chain = ChainProvider::new();
        assert!(chain.get_source("anything").is_err());
    }
}
