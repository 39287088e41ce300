//! Template source retrieval.
//!
//! A [`SourceProvider`] maps a template name to its source text plus a
//! modification marker. The marker drives cache staleness checks in the
//! loader; a provider that reports no marker opts its sources out of
//! on-disk caching entirely.
//!
//! Three providers are included: [`DirProvider`] resolves names inside
//! one or more root directories, [`MemoryProvider`] serves an in-memory
//! map, and [`ChainProvider`] consults a list of providers in order.

#![warn(missing_docs)]

pub mod chain;
pub mod dir;
pub mod error;
pub mod memory;
pub mod provider;

pub use chain::ChainProvider;
pub use dir::DirProvider;
pub use error::SourceError;
pub use memory::MemoryProvider;
pub use provider::{SourceProvider, SourceRecord};
