use log::debug;

use crate::grid::{read_zigzag, unread_zigzag};
use crate::{Result, TextCipher};

/// Rail Fence cipher over a fixed number of rails.
///
/// Fewer than two rails is not an error: the text passes through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailFence {
    /// Number of rails of the zigzag.
    pub rails: usize,
}

impl RailFence {
    /// Creates a Rail Fence cipher.
    #[must_use]
    pub const fn new(rails: usize) -> Self {
        Self { rails }
    }
}

impl TextCipher for RailFence {
    fn encrypt(&self, text: &str) -> Result<String> {
        Ok(encrypt(text, self.rails))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        Ok(decrypt(text, self.rails))
    }
}

/// Writes `text` in a zigzag over `rails` rows and reads the rows in order.
#[must_use]
pub fn encrypt(text: &str, rails: usize) -> String {
    if rails < 2 {
        debug!("rail fence with {rails} rail(s): passing text through");
    }
    read_zigzag(text, rails)
}

/// Reverses [`encrypt`] from the ciphertext length and rail count alone.
#[must_use]
pub fn decrypt(text: &str, rails: usize) -> String {
    if rails < 2 {
        debug!("rail fence with {rails} rail(s): passing text through");
    }
    unread_zigzag(text, rails)
}
