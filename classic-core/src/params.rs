// File:    params.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Closed per-algorithm parameter sets and the uniform encrypt/decrypt entry point.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! A caller picks an [`Algorithm`] and a [`Mode`], gathers the matching
//! [`AlgorithmParams`] from its own transport, and calls
//! [`AlgorithmParams::apply`].
//!
//! The parameters serialize as a flat JSON object tagged by `"algorithm"`:
//!
//! ```
//! use classic_core::{AlgorithmParams, Mode};
//!
//! let params = AlgorithmParams::from_json(r#"{"algorithm":"caesar","shift":3}"#).unwrap();
//! assert_eq!(params.apply(Mode::Encrypt, "ABC").unwrap(), "DEF");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::affine::Affine;
use crate::caesar::Caesar;
use crate::columnar::Columnar;
use crate::hill::Hill;
use crate::modular::gcd;
use crate::playfair::Playfair;
use crate::rail_fence::RailFence;
use crate::route::Route;
use crate::vernam::Vernam;
use crate::vigenere::Vigenere;
use crate::{CipherError, Result, TextCipher};

/// Direction of a transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => write!(f, "encrypt"),
            Self::Decrypt => write!(f, "decrypt"),
        }
    }
}

impl FromStr for Mode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encrypt" => Ok(Self::Encrypt),
            "decrypt" => Ok(Self::Decrypt),
            other => Err(CipherError::InvalidParameter(format!(
                "unknown mode '{other}'"
            ))),
        }
    }
}

/// The supported ciphers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// See [`crate::caesar`].
    Caesar,
    /// See [`crate::rail_fence`].
    RailFence,
    /// See [`crate::vigenere`].
    Vigenere,
    /// See [`crate::vernam`].
    Vernam,
    /// See [`crate::playfair`].
    Playfair,
    /// See [`crate::route`].
    Route,
    /// See [`crate::affine`].
    Affine,
    /// See [`crate::hill`].
    Hill,
    /// See [`crate::columnar`].
    Columnar,
}

impl Algorithm {
    /// Every algorithm, in listing order.
    pub const ALL: [Self; 9] = [
        Self::Caesar,
        Self::RailFence,
        Self::Vigenere,
        Self::Vernam,
        Self::Playfair,
        Self::Route,
        Self::Affine,
        Self::Hill,
        Self::Columnar,
    ];

    /// Machine name, as used in serialized parameters.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Caesar => "caesar",
            Self::RailFence => "rail_fence",
            Self::Vigenere => "vigenere",
            Self::Vernam => "vernam",
            Self::Playfair => "playfair",
            Self::Route => "route",
            Self::Affine => "affine",
            Self::Hill => "hill",
            Self::Columnar => "columnar",
        }
    }

    /// Human readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Caesar => "Caesar Cipher",
            Self::RailFence => "Rail Fence Cipher",
            Self::Vigenere => "Vigenère Cipher",
            Self::Vernam => "Vernam Cipher",
            Self::Playfair => "Playfair Cipher",
            Self::Route => "Route Cipher",
            Self::Affine => "Affine Cipher",
            Self::Hill => "Hill Cipher",
            Self::Columnar => "Columnar Transposition",
        }
    }

    /// Family the cipher belongs to.
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            Self::Caesar | Self::Affine | Self::Vigenere | Self::Vernam => "Shift",
            Self::Playfair => "Digraph",
            Self::RailFence | Self::Route | Self::Columnar => "Transposition",
            Self::Hill => "Matrix",
        }
    }

    /// The parameters the algorithm needs, as a short usage string.
    #[must_use]
    pub const fn parameters(self) -> &'static str {
        match self {
            Self::Caesar => "shift (integer)",
            Self::RailFence => "rails (>= 2)",
            Self::Vigenere | Self::Vernam | Self::Playfair | Self::Columnar => "key (text)",
            Self::Route => "rows (>= 1), cols (>= 1)",
            Self::Affine => "a (1-25, coprime with 26), b (0-25)",
            Self::Hill => "key (text), size (2 or 3)",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = CipherError;

    /// Accepts the machine name in any case, with `-`, `_` or nothing
    /// between words: `rail_fence`, `Rail-Fence` and `railfence` all match.
    fn from_str(s: &str) -> Result<Self> {
        let wanted: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.id().replace('_', "") == wanted)
            .ok_or_else(|| CipherError::InvalidParameter(format!("unknown algorithm '{s}'")))
    }
}

const fn default_hill_size() -> usize {
    2
}

/// Parameters for one algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum AlgorithmParams {
    /// Caesar shift; any integer.
    Caesar {
        /// Letters to shift forward.
        shift: i64,
    },
    /// Rail Fence rail count.
    RailFence {
        /// Number of rails.
        rails: usize,
    },
    /// Vigenère keyword.
    Vigenere {
        /// Keyword; only its letters are used.
        key: String,
    },
    /// Vernam key.
    Vernam {
        /// Key characters, repeated as needed.
        key: String,
    },
    /// Playfair keyword.
    Playfair {
        /// Keyword for the 5x5 square.
        key: String,
    },
    /// Route grid dimensions.
    Route {
        /// Grid height.
        rows: usize,
        /// Grid width.
        cols: usize,
    },
    /// Affine coefficients.
    Affine {
        /// Multiplier, coprime with 26.
        a: i64,
        /// Offset.
        b: i64,
    },
    /// Hill key and block size.
    Hill {
        /// Letters of the key matrix.
        key: String,
        /// Block size, 2 or 3; anything else is treated as 2.
        #[serde(default = "default_hill_size")]
        size: usize,
    },
    /// Columnar keyword.
    Columnar {
        /// Keyword; its letters order the columns.
        key: String,
    },
}

impl AlgorithmParams {
    /// Parses parameters from their JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidParameter`] when the JSON does not
    /// describe a known algorithm with all of its parameters.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CipherError::InvalidParameter(e.to_string()))
    }

    /// Serializes the parameters to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidParameter`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| CipherError::InvalidParameter(e.to_string()))
    }

    /// The algorithm these parameters belong to.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            Self::Caesar { .. } => Algorithm::Caesar,
            Self::RailFence { .. } => Algorithm::RailFence,
            Self::Vigenere { .. } => Algorithm::Vigenere,
            Self::Vernam { .. } => Algorithm::Vernam,
            Self::Playfair { .. } => Algorithm::Playfair,
            Self::Route { .. } => Algorithm::Route,
            Self::Affine { .. } => Algorithm::Affine,
            Self::Hill { .. } => Algorithm::Hill,
            Self::Columnar { .. } => Algorithm::Columnar,
        }
    }

    /// Strict check of every parameter.
    ///
    /// The cipher functions fall back to passing text through for
    /// degenerate values such as a single rail; callers that would rather
    /// report those values run this first. The Hill block size is never
    /// rejected, it is clamped.
    ///
    /// # Errors
    ///
    /// [`CipherError::InvalidParameter`] for out-of-range numbers and
    /// [`CipherError::InvalidKey`] for empty keys or an Affine `a` that is
    /// not coprime with 26.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Caesar { .. } => Ok(()),
            Self::RailFence { rails } => {
                if *rails < 2 {
                    return Err(CipherError::InvalidParameter(format!(
                        "rails must be at least 2, got {rails}"
                    )));
                }
                Ok(())
            }
            Self::Vigenere { key }
            | Self::Vernam { key }
            | Self::Playfair { key }
            | Self::Columnar { key }
            | Self::Hill { key, .. } => {
                if key.is_empty() {
                    return Err(CipherError::InvalidKey(format!(
                        "{} requires a key",
                        self.algorithm().name()
                    )));
                }
                Ok(())
            }
            Self::Route { rows, cols } => {
                if *rows < 1 || *cols < 1 {
                    return Err(CipherError::InvalidParameter(format!(
                        "rows and cols must be at least 1, got {rows}x{cols}"
                    )));
                }
                if rows.checked_mul(*cols).is_none() {
                    return Err(CipherError::InvalidParameter(format!(
                        "a {rows}x{cols} grid has too many cells"
                    )));
                }
                Ok(())
            }
            Self::Affine { a, b } => {
                if !(1..=25).contains(a) || !(0..=25).contains(b) {
                    return Err(CipherError::InvalidParameter(format!(
                        "affine key needs 1 <= a <= 25 and 0 <= b <= 25, got a={a}, b={b}"
                    )));
                }
                if gcd(*a, 26) != 1 {
                    return Err(CipherError::InvalidKey(format!(
                        "'a' = {a} must be coprime to 26"
                    )));
                }
                Ok(())
            }
        }
    }

    /// Builds the cipher described by these parameters.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] when the key cannot be used.
    pub fn cipher(&self) -> Result<Box<dyn TextCipher>> {
        Ok(match self {
            Self::Caesar { shift } => Box::new(Caesar::new(*shift)),
            Self::RailFence { rails } => Box::new(RailFence::new(*rails)),
            Self::Vigenere { key } => Box::new(Vigenere::new(key)?),
            Self::Vernam { key } => Box::new(Vernam::new(key)?),
            Self::Playfair { key } => Box::new(Playfair::new(key)?),
            Self::Route { rows, cols } => Box::new(Route::new(*rows, *cols)),
            Self::Affine { a, b } => Box::new(Affine::new(*a, *b)?),
            Self::Hill { key, size } => Box::new(Hill::new(key, *size)?),
            Self::Columnar { key } => Box::new(Columnar::new(key)?),
        })
    }

    /// Runs the cipher in the given mode.
    ///
    /// # Errors
    ///
    /// Returns the cipher's error; nothing is produced on failure.
    pub fn apply(&self, mode: Mode, text: &str) -> Result<String> {
        let cipher = self.cipher()?;
        match mode {
            Mode::Encrypt => cipher.encrypt(text),
            Mode::Decrypt => cipher.decrypt(text),
        }
    }

    /// Shorthand for [`AlgorithmParams::apply`] with [`Mode::Encrypt`].
    ///
    /// # Errors
    ///
    /// Returns the cipher's error.
    pub fn encrypt(&self, text: &str) -> Result<String> {
        self.apply(Mode::Encrypt, text)
    }

    /// Shorthand for [`AlgorithmParams::apply`] with [`Mode::Decrypt`].
    ///
    /// # Errors
    ///
    /// Returns the cipher's error.
    pub fn decrypt(&self, text: &str) -> Result<String> {
        self.apply(Mode::Decrypt, text)
    }
}
