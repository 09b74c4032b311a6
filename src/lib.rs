#![forbid(unsafe_code)]
//! # xor_file — repeating-key XOR transforms for files.
//!
//! `xor_file` is a small Rust library (with a companion CLI) for obscuring
//! files with a symmetric byte-wise XOR cipher. The same transform serves
//! encryption and decryption; the selected mode only decides where the
//! output file is written.
//!
//! ## Features
//! - **Symmetric byte transform**: applying it twice with the same key
//!   restores the original data, for any file content including empty files
//! - **Derived output paths**: encrypting `report.pdf` writes
//!   `report.pdf.enc`; decrypting strips `.enc` again
//! - **Collision avoidance on decrypt**: an existing file at the stripped
//!   path is never overwritten; `report_decrypted_1.pdf`,
//!   `report_decrypted_2.pdf`, … are probed instead
//! - **Source files are never modified**: every operation writes a new file
//!
//! ## Example: transform a byte buffer
//! ```
//! use xor_file::xor_transform;
//!
//! let ct = xor_transform(b"Hello, world!", "mykey");
//! let pt = xor_transform(&ct, "mykey");
//! assert_eq!(pt, b"Hello, world!");
//! ```
//!
//! ## Example: encrypt a file
//! ```no_run
//! use std::path::Path;
//! use secrecy::SecretString;
//! use xor_file::{Mode, process_file};
//!
//! let key = SecretString::new("mykey".into());
//! let outcome = process_file(Path::new("report.pdf"), &key, Mode::Encrypt).unwrap();
//! println!("wrote {} ({} bytes)", outcome.output_path.display(), outcome.bytes_processed);
//! ```
//!
//! Safety notes
//! - A repeating-key XOR is trivially breakable. This crate obscures data;
//!   it does not protect it. Use real authenticated encryption for anything
//!   that matters.

mod cipher;
mod file;
mod types;

// Re-export public API from modules
pub use cipher::xor_transform;
pub use file::{DECRYPTED_SUFFIX, ENC_SUFFIX, decrypt_output_path, encrypt_output_path, process_file};
pub use types::*;
