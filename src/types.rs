//! Core types and enums for xor_file.

use std::path::PathBuf;
use thiserror::Error;

/// The caller's declared intent for a file operation.
///
/// The mode only selects how the output path is derived; the byte transform
/// itself is identical in both directions (XOR is its own inverse).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Append ".enc" to the source path (existing output is overwritten).
    Encrypt,
    /// Strip a trailing ".enc" (probing for a free name on collision) or
    /// append ".decrypted".
    Decrypt,
}

/// Successful outcome of a file operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Where the transformed bytes were written.
    pub output_path: PathBuf,
    /// Number of bytes read, transformed, and written. Always equals the
    /// source file's length.
    pub bytes_processed: u64,
}

/// Library error type (no panics for expected failures).
#[derive(Error, Debug)]
pub enum XorFileError {
    /// Source path or key was empty; nothing was read or written.
    #[error("missing input: {0}")]
    MissingInput(&'static str),
    /// The source path does not resolve to a readable file.
    #[error("source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    /// Any other read/write failure. If the write failed partway, the
    /// output file's content is undefined; the source is never touched.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
