//! The compiler contract.

/// Turns template source text into compiled output.
///
/// The output is opaque to the loader: serializable bytes representing an
/// executable unit addressed by [`unit_id_for`](crate::unit_id_for) of
/// the template name. The loader persists or activates those bytes, never
/// the raw source. Compilation is expected to be deterministic per
/// `(source, name)` pair; the cache's tolerance of concurrent writers
/// rests on that.
pub trait Compile {
    /// Compiles the given source text for the named template.
    fn compile(&self, source: &str, name: &str) -> Result<Vec<u8>, CompileError>;
}

/// The compiler rejected the source.
///
/// Fatal to the requesting load; nothing is cached and nothing is
/// registered as active.
#[derive(Debug, thiserror::Error)]
#[error("failed to compile template '{name}': {message}")]
pub struct CompileError {
    /// The template name that failed to compile.
    pub name: String,
    /// The compiler's diagnostic.
    pub message: String,
}
