// File:    key_generator.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Generates random letter keys for the Vernam cipher from the operating system RNG.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use rand::{TryRngCore, rngs::OsRng};

use crate::alphabet::{ALPHABET_LEN, letter};

/// Largest multiple of 26 that fits in a byte; bytes at or above it are
/// rejected so that every letter is equally likely.
const REJECT_FROM: u8 = (u8::MAX / ALPHABET_LEN) * ALPHABET_LEN;
/// Random bytes drawn per round.
const CHUNK: usize = 4096;

/// Generates a random key of `length` uppercase letters.
///
/// A key as long as the message turns the Vernam cipher into a real
/// one-time pad. The key is only returned, never stored.
///
/// # Errors
///
/// This function will return an error if the operating system RNG fails.
pub fn generate_vernam_key(length: usize) -> std::io::Result<String> {
    let mut rng = OsRng;
    let mut key = String::new();
    key.try_reserve_exact(length).map_err(std::io::Error::other)?;
    let mut buffer = vec![0u8; length.clamp(1, CHUNK)];

    while key.len() < length {
        // Use the failable `try_fill_bytes` and map the error to an `io::Error`.
        rng.try_fill_bytes(&mut buffer)
            .map_err(std::io::Error::other)?;
        let missing = length - key.len();
        key.extend(
            buffer
                .iter()
                .filter(|&&b| b < REJECT_FROM)
                .take(missing)
                .map(|&b| letter(b % ALPHABET_LEN, true)),
        );
    }

    Ok(key)
}
