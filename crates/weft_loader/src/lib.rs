//! Load-and-cache orchestration for compiled templates.
//!
//! Given a template name, [`Loader::load`] produces an activated compiled
//! unit, reusing an on-disk artifact whenever it is still valid, detecting
//! staleness from modification timestamps rather than re-parsing, and
//! degrading to direct in-memory compilation when the cache cannot help
//! (disabled, unwritable, or the source has no modification time).
//!
//! The loader owns policy only. Source retrieval is behind
//! [`weft_source::SourceProvider`], compilation behind [`Compile`], and
//! making a unit callable behind [`Activate`]; durable storage is the
//! [`weft_cache::ArtifactStore`].

#![warn(missing_docs)]

pub mod activate;
pub mod compile;
pub mod config;
pub mod error;
pub mod identity;
pub mod loader;

pub use activate::{Activate, ActivateError, UnitTable};
pub use compile::{Compile, CompileError};
pub use config::CacheDir;
pub use error::LoadError;
pub use identity::{cache_file_name, cache_path_for, unit_id_for, UnitId};
pub use loader::Loader;
