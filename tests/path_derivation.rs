//! Output-path derivation rules, including the decrypt collision probe.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;
use xor_file::{decrypt_output_path, encrypt_output_path};

#[test]
fn encrypt_appends_enc() {
    assert_eq!(
        encrypt_output_path(Path::new("a/b.txt")),
        PathBuf::from("a/b.txt.enc")
    );
}

#[test]
fn encrypt_appends_enc_without_extension() {
    assert_eq!(encrypt_output_path(Path::new("data")), PathBuf::from("data.enc"));
}

#[test]
fn decrypt_strips_enc_when_target_free() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("b.txt.enc");
    assert_eq!(decrypt_output_path(&src), dir.path().join("b.txt"));
}

#[test]
fn decrypt_probes_when_target_exists() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), b"occupied").unwrap();
    let src = dir.path().join("b.txt.enc");
    assert_eq!(
        decrypt_output_path(&src),
        dir.path().join("b_decrypted_1.txt")
    );
}

#[test]
fn decrypt_probe_counter_advances() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), b"").unwrap();
    fs::write(dir.path().join("b_decrypted_1.txt"), b"").unwrap();
    fs::write(dir.path().join("b_decrypted_2.txt"), b"").unwrap();
    let src = dir.path().join("b.txt.enc");
    assert_eq!(
        decrypt_output_path(&src),
        dir.path().join("b_decrypted_3.txt")
    );
}

#[test]
fn decrypt_without_enc_appends_decrypted() {
    assert_eq!(
        decrypt_output_path(Path::new("a/b.txt")),
        PathBuf::from("a/b.txt.decrypted")
    );
}

// The probe splits on the last dot of the file name. Candidates without a
// dot get the counter appended bare.
#[test]
fn probe_with_no_dot_has_no_extension() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data"), b"").unwrap();
    let src = dir.path().join("data.enc");
    assert_eq!(decrypt_output_path(&src), dir.path().join("data_decrypted_1"));
}

#[test]
fn probe_splits_on_last_dot_only() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.tar.gz"), b"").unwrap();
    let src = dir.path().join("b.tar.gz.enc");
    assert_eq!(
        decrypt_output_path(&src),
        dir.path().join("b.tar_decrypted_1.gz")
    );
}

#[test]
fn probe_keeps_leading_dot_in_stem() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".secrets"), b"").unwrap();
    let src = dir.path().join(".secrets.enc");
    assert_eq!(
        decrypt_output_path(&src),
        dir.path().join(".secrets_decrypted_1")
    );
}

#[test]
fn dot_in_directory_is_not_an_extension() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("v1.2");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("data"), b"").unwrap();
    let src = sub.join("data.enc");
    assert_eq!(decrypt_output_path(&src), sub.join("data_decrypted_1"));
}
