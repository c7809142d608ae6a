// File:    vernam.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: XOR-based Vernam cipher over bytes and over character codes.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The key is repeated to the length of the text. With a key shorter than the
//! text this is a repeating-key XOR, not a one-time pad.
//!
//! The output can contain unprintable characters. Callers that need to
//! transport it as text must apply their own binary-to-text encoding.

use crate::{CipherError, Result, TextCipher};

/// Vernam cipher with a cyclically extended key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vernam {
    key: String,
}

impl Vernam {
    /// Creates a Vernam cipher.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] when `key` is empty.
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherError::InvalidKey("Vernam key must not be empty".into()));
        }
        Ok(Self {
            key: key.to_owned(),
        })
    }
}

impl TextCipher for Vernam {
    fn encrypt(&self, text: &str) -> Result<String> {
        xor_chars(text, &self.key)
    }

    /// XOR is its own inverse, so this is the same as encrypting.
    fn decrypt(&self, text: &str) -> Result<String> {
        xor_chars(text, &self.key)
    }
}

/// XORs `data` with `key` repeated to the length of `data`.
///
/// An empty key leaves the data unchanged.
#[must_use]
pub fn xor(data: &[u8], key: &[u8]) -> Vec<u8> {
    if key.is_empty() {
        return data.to_vec();
    }
    data.iter().zip(key.iter().cycle()).map(|(x, y)| x ^ y).collect()
}

/// Encrypts raw bytes.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] when `key` is empty.
pub fn encrypt_bytes(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(CipherError::InvalidKey("Vernam key must not be empty".into()));
    }
    Ok(xor(data, key))
}

/// Decrypts raw bytes; identical to [`encrypt_bytes`].
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] when `key` is empty.
pub fn decrypt_bytes(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    encrypt_bytes(data, key)
}

/// Encrypts text by XOR-ing each character code with the matching key
/// character code.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] when `key` is empty, and
/// [`CipherError::MalformedInput`] when a XOR result is not a valid
/// character. ASCII text with an ASCII key never fails.
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    Vernam::new(key)?.encrypt(text)
}

/// Decrypts text; identical to [`encrypt`].
///
/// # Errors
///
/// Same as [`encrypt`].
pub fn decrypt(text: &str, key: &str) -> Result<String> {
    Vernam::new(key)?.decrypt(text)
}

fn xor_chars(text: &str, key: &str) -> Result<String> {
    text.chars()
        .zip(key.chars().cycle())
        .enumerate()
        .map(|(i, (c, k))| {
            char::from_u32(u32::from(c) ^ u32::from(k)).ok_or_else(|| {
                CipherError::MalformedInput(format!(
                    "character {i} does not XOR to a valid character"
                ))
            })
        })
        .collect()
}
