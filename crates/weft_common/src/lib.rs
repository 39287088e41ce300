//! Shared foundational types for the weft template toolchain.
//!
//! This crate provides the content hash used for template identity,
//! cache file naming, and artifact integrity checks.

#![warn(missing_docs)]

pub mod hash;

pub use hash::ContentHash;
