#![forbid(unsafe_code)]
//! Command-line front end for [`xor_file`].
//!
//! Thin presentation layer: collects a source path and a key, hands them to
//! the library, and prints the outcome. The key is read from an interactive
//! hidden prompt or a key file, never from argv.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use secrecy::SecretString;
use xor_file::{Mode, process_file};

#[derive(Parser, Debug)]
#[command(
    name = "xor-file",
    version,
    about = "Obscure/restore files with a repeating-key XOR transform"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt a file (writes "<input>.enc")
    Enc(OpArgs),
    /// Decrypt a file (strips ".enc" or appends ".decrypted")
    Dec(OpArgs),
}

#[derive(Args, Debug)]
struct OpArgs {
    /// Input file
    #[arg(short = 'i', long = "in")]
    input: PathBuf,

    /// Read key from file instead of interactive prompt
    #[arg(short = 'k', long = "key-file")]
    key_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Enc(a) => run(a, Mode::Encrypt),
        Command::Dec(a) => run(a, Mode::Decrypt),
    }
}

fn read_key(key_file: &Option<PathBuf>, prompt: &str) -> Result<SecretString> {
    if let Some(path) = key_file {
        let mut s = String::new();
        fs::File::open(path)
            .with_context(|| format!("cannot open key file {}", path.display()))?
            .read_to_string(&mut s)?;

        // Trim the trailing newline most editors leave behind, then zero the
        // intermediate string that held the key.
        let secret = SecretString::new(
            s.trim_end_matches(&['\r', '\n'][..]).to_owned().into_boxed_str(),
        );

        use zeroize::Zeroize;
        s.zeroize();
        Ok(secret)
    } else {
        let key = rpassword::prompt_password(prompt)?;
        Ok(SecretString::new(key.into_boxed_str()))
    }
}

fn run(a: OpArgs, mode: Mode) -> Result<()> {
    let key = read_key(&a.key_file, "Key: ")?;
    let outcome = process_file(&a.input, &key, mode).with_context(|| match mode {
        Mode::Encrypt => "encryption failed",
        Mode::Decrypt => "decryption failed",
    })?;

    eprintln!(
        "Wrote {} ({} bytes)",
        outcome.output_path.display(),
        outcome.bytes_processed
    );
    Ok(())
}
