//! File orchestration: validation, I/O, and output-path derivation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};

use crate::cipher::xor_transform;
use crate::types::{Mode, ProcessOutcome, XorFileError};

/// Suffix appended to encrypted output files (and stripped on decrypt).
pub const ENC_SUFFIX: &str = ".enc";

/// Suffix appended when decrypting a file that does not end in ".enc".
pub const DECRYPTED_SUFFIX: &str = ".decrypted";

/// Transform one file and write the result to a derived output path.
///
/// Runs the full pipeline: validate inputs, read the source, apply the XOR
/// transform, derive the output path for `mode`, write, and report. The
/// source file is never modified or deleted. Each call is independent; the
/// derived path depends on the filesystem state at call time (see
/// [`decrypt_output_path`]).
///
/// The write is a plain create-or-truncate: if it fails partway, the output
/// file's content is undefined and should be treated as corrupt.
///
/// # Errors
///
/// - [`XorFileError::MissingInput`] if `source` or the key is empty
///   (detected before any filesystem access).
/// - [`XorFileError::SourceNotFound`] if `source` does not exist.
/// - [`XorFileError::Io`] for any other read/write failure.
pub fn process_file(
    source: &Path,
    key: &SecretString,
    mode: Mode,
) -> Result<ProcessOutcome, XorFileError> {
    if source.as_os_str().is_empty() {
        return Err(XorFileError::MissingInput("source path must not be empty"));
    }
    if key.expose_secret().is_empty() {
        return Err(XorFileError::MissingInput("key must not be empty"));
    }

    let data = match fs::read(source) {
        Ok(d) => d,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(XorFileError::SourceNotFound(source.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let transformed = xor_transform(&data, key.expose_secret());

    let output_path = match mode {
        Mode::Encrypt => encrypt_output_path(source),
        Mode::Decrypt => decrypt_output_path(source),
    };

    fs::write(&output_path, &transformed)?;

    Ok(ProcessOutcome {
        output_path,
        bytes_processed: transformed.len() as u64,
    })
}

/// Output path for encryption: the source path with ".enc" appended.
///
/// No collision check is performed; an existing file at the derived path is
/// silently overwritten.
pub fn encrypt_output_path(source: &Path) -> PathBuf {
    append_suffix(source, ENC_SUFFIX)
}

/// Output path for decryption.
///
/// If `source` ends with ".enc" the suffix is stripped. Should a file
/// already exist at the stripped path, it is not overwritten: the candidate
/// is split into (stem, extension) on the last dot of its file name and
/// `stem_decrypted_N<ext>` is probed for N = 1, 2, 3, … until a free name
/// is found. Existence is checked by path only, so a name created between
/// the probe and the write will still be overwritten.
///
/// Sources without ".enc" get ".decrypted" appended with no collision
/// check, mirroring the encrypt side.
pub fn decrypt_output_path(source: &Path) -> PathBuf {
    let s = source.to_string_lossy();
    let Some(base) = s.strip_suffix(ENC_SUFFIX) else {
        return append_suffix(source, DECRYPTED_SUFFIX);
    };

    let candidate = PathBuf::from(base);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, ext) = split_last_dot(base);
    let mut n: u64 = 1;
    loop {
        let probe = PathBuf::from(format!("{stem}_decrypted_{n}{ext}"));
        if !probe.exists() {
            return probe;
        }
        n += 1;
    }
}

/// Append a literal suffix to a path ("a/b.txt" + ".enc" -> "a/b.txt.enc").
fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(suffix);
    PathBuf::from(os)
}

/// Split a path string into (stem, extension) on the last dot of its file
/// name. A dot at the start of the file name does not begin an extension,
/// and a name without a dot has an empty extension. The extension keeps its
/// leading dot.
fn split_last_dot(path: &str) -> (&str, &str) {
    let name_start = path.rfind(['/', '\\']).map_or(0, |i| i + 1);
    let name = &path[name_start..];
    match name.rfind('.') {
        Some(i) if i > 0 => path.split_at(name_start + i),
        _ => (path, ""),
    }
}
