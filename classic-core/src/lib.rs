// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: The main library crate for classic-core, exposing the classical cipher transformations.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Classic Core Library
//!
//! Pure, stateless text transformations for the classical ciphers:
//!
//! - shift and substitution ciphers: [`caesar`], [`affine`], [`vigenere`], [`vernam`]
//! - the digraph cipher [`playfair`]
//! - transposition ciphers: [`rail_fence`], [`route`], [`columnar`]
//! - the matrix cipher [`hill`]
//!
//! All of them are built on two small leaves, [`modular`] arithmetic and
//! [`grid`] layouts. Every call builds its key schedule, grid or matrix from
//! the supplied parameters and discards it on return, so every function here
//! can be called from any number of threads at once.
//!
//! [`params::AlgorithmParams`] selects a cipher by name with its parameters
//! and runs it in either [`params::Mode`].
//!
//! None of these ciphers offer any real security.

/// Alphabet positions and case restoration.
pub mod alphabet;
/// Error type shared by every cipher.
pub mod error;
/// Grid construction and traversal orders.
pub mod grid;
/// Random key generation.
pub mod key_generator;
/// Extended Euclid, modular inverse and modular exponentiation.
pub mod modular;
/// Per-algorithm parameters and uniform dispatch.
pub mod params;

/// The Affine cipher.
pub mod affine;
/// The Caesar shift cipher.
pub mod caesar;
/// The Columnar Transposition cipher.
pub mod columnar;
/// The Hill matrix cipher.
pub mod hill;
/// The Playfair digraph cipher.
pub mod playfair;
/// The Rail Fence transposition cipher.
pub mod rail_fence;
/// The Route (spiral) transposition cipher.
pub mod route;
/// The Vernam XOR cipher.
pub mod vernam;
/// The Vigenère cipher.
pub mod vigenere;

pub use error::{CipherError, Result};
pub use params::{Algorithm, AlgorithmParams, Mode};

/// A reversible transformation over text.
///
/// Implemented by the key type of every cipher in this crate.
pub trait TextCipher {
    /// Encrypts `text`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError`] when the key is unusable.
    fn encrypt(&self, text: &str) -> Result<String>;

    /// Decrypts `text`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError`] when the key is unusable.
    fn decrypt(&self, text: &str) -> Result<String>;
}
