use crate::alphabet::{letter, position, wrap};
use crate::{Result, TextCipher};

/// Caesar cipher with a fixed shift.
///
/// Any shift is accepted; it is reduced mod 26.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    /// Number of positions each letter moves forward.
    pub shift: i64,
}

impl Caesar {
    /// Creates a Caesar cipher with the given shift.
    #[must_use]
    pub const fn new(shift: i64) -> Self {
        Self { shift }
    }
}

impl TextCipher for Caesar {
    fn encrypt(&self, text: &str) -> Result<String> {
        Ok(encrypt(text, self.shift))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        Ok(decrypt(text, self.shift))
    }
}

/// Shifts a single character; non-letters are returned unchanged.
#[must_use]
pub fn shift_char(c: char, shift: i64) -> char {
    position(c).map_or(c, |pos| letter(pos + wrap(shift), c.is_ascii_uppercase()))
}

/// Encrypts `text` by moving every letter `shift` places forward.
///
/// Case is preserved and non-letters stay where they are.
#[must_use]
pub fn encrypt(text: &str, shift: i64) -> String {
    text.chars().map(|c| shift_char(c, shift)).collect()
}

/// Decrypts `text`; the same as encrypting with the negated shift.
#[must_use]
pub fn decrypt(text: &str, shift: i64) -> String {
    encrypt(text, -shift.rem_euclid(26))
}
