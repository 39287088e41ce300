//! The artifact store and its on-disk envelope format.
//!
//! Each artifact is a single file: a 4-byte little-endian header length,
//! a bincode-encoded [`ArtifactHeader`], then the compiled payload. The
//! header carries magic bytes, a format version, and a payload checksum
//! so a truncated or foreign file is detected on read.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use weft_common::ContentHash;

use crate::error::{StoreError, WriteError};

/// Magic bytes identifying a weft cache artifact.
const ARTIFACT_MAGIC: [u8; 4] = *b"WEFT";

/// Current envelope format version. Increment on breaking changes.
const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Header prepended to every stored artifact for validation on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactHeader {
    /// Magic bytes: must be `b"WEFT"`.
    pub magic: [u8; 4],

    /// Envelope format version.
    pub format_version: u32,

    /// Content hash of the payload (for integrity checks).
    pub checksum: ContentHash,
}

/// Adapter over the flat cache directory holding compiled artifacts.
///
/// The store offers exactly the four operations the loader needs:
/// existence check, last-write-time read, whole-file write, and validated
/// read. Writes are plain overwrites with no locking; when two writers
/// race on the same path the last one wins, which is acceptable because
/// compiled output is deterministic per (name, source) and a lost write
/// only costs a future recompile. Partial-write visibility is whatever
/// the underlying filesystem provides.
pub struct ArtifactStore {
    /// The cache root directory. Artifacts live directly under it.
    root: PathBuf,
}

impl ArtifactStore {
    /// Creates a store rooted at the given cache directory.
    ///
    /// The directory is expected to exist already; the loader creates it
    /// eagerly at construction time.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Returns the cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns whether an artifact file exists at the given path.
    pub fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    /// Returns the last write time of the artifact at the given path.
    pub fn last_write_time(&self, path: &Path) -> Result<SystemTime, StoreError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StoreError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                StoreError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        metadata.modified().map_err(|e| StoreError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Writes a compiled payload to the given path, wrapped in the
    /// validation envelope.
    ///
    /// Failure to open the target maps to [`WriteError::CannotOpen`],
    /// which the loader treats as "this cache is unusable right now" and
    /// recovers from. A failure after a successful open surfaces as
    /// [`WriteError::Io`].
    pub fn write(&self, path: &Path, payload: &[u8]) -> Result<(), WriteError> {
        let header = ArtifactHeader {
            magic: ARTIFACT_MAGIC,
            format_version: ARTIFACT_FORMAT_VERSION,
            checksum: ContentHash::from_bytes(payload),
        };
        let header_bytes = bincode::serde::encode_to_vec(&header, bincode::config::standard())
            .map_err(|e| WriteError::Encode {
                reason: e.to_string(),
            })?;

        let mut file = File::create(path).map_err(|e| WriteError::CannotOpen {
            path: path.to_path_buf(),
            source: e,
        })?;

        let header_len = header_bytes.len() as u32;
        let mut output = Vec::with_capacity(4 + header_bytes.len() + payload.len());
        output.extend_from_slice(&header_len.to_le_bytes());
        output.extend_from_slice(&header_bytes);
        output.extend_from_slice(payload);

        file.write_all(&output).map_err(|e| WriteError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Reads and validates the artifact at the given path, returning the
    /// compiled payload.
    ///
    /// A missing file is [`StoreError::NotFound`]; anything that fails
    /// envelope validation (truncation, wrong magic, version mismatch,
    /// checksum mismatch) is [`StoreError::Corrupt`]. Both surface to the
    /// caller: an artifact the loader decided to activate must be intact.
    pub fn read(&self, path: &Path) -> Result<Vec<u8>, StoreError> {
        let raw = std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StoreError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                StoreError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let corrupt = |reason: &str| StoreError::Corrupt {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };

        if raw.len() < 4 {
            return Err(corrupt("truncated before header length"));
        }
        let header_len =
            u32::from_le_bytes(raw[..4].try_into().map_err(|_| corrupt("header length"))?) as usize;
        if raw.len() < 4 + header_len {
            return Err(corrupt("truncated header"));
        }

        let header: ArtifactHeader =
            bincode::serde::decode_from_slice(&raw[4..4 + header_len], bincode::config::standard())
                .map_err(|e| corrupt(&format!("undecodable header: {e}")))?
                .0;

        if header.magic != ARTIFACT_MAGIC {
            return Err(corrupt("bad magic bytes"));
        }
        if header.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(corrupt(&format!(
                "format version {} (expected {ARTIFACT_FORMAT_VERSION})",
                header.format_version
            )));
        }

        let payload = &raw[4 + header_len..];
        if ContentHash::from_bytes(payload) != header.checksum {
            return Err(corrupt("checksum mismatch"));
        }

        Ok(payload.to_vec())
    }
}
