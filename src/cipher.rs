//! The symmetric byte transform shared by encryption and decryption.

/// Apply a repeating-key XOR to `data` and return the transformed bytes.
///
/// The key is UTF-8 encoded and repeated across the data, so the output
/// always has the same length as the input (empty in, empty out). One call
/// serves both directions: XOR is its own inverse per byte, so transforming
/// twice with the same key restores the original data.
///
/// # Panics
///
/// Panics if `key` is empty: the repeat index `i % key.len()` is undefined
/// for an empty key. Callers validate the key before invoking (see
/// [`process_file`](crate::process_file)).
pub fn xor_transform(data: &[u8], key: &str) -> Vec<u8> {
    let key = key.as_bytes();
    assert!(!key.is_empty(), "xor_transform requires a non-empty key");
    data.iter()
        .enumerate()
        .map(|(i, &b)| b ^ key[i % key.len()])
        .collect()
}
