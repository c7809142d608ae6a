use crate::alphabet::{ALPHABET_LEN, RestorationPlan, letter_positions};
use crate::{CipherError, Result, TextCipher};

/// Vigenère cipher keyed by the letters of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    shifts: Vec<u8>,
}

impl Vigenere {
    /// Builds the key schedule from the letters of `key`.
    ///
    /// Non-letters in the key are ignored. A key with no letters at all
    /// behaves like `"A"`, i.e. the identity.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] when `key` is empty.
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherError::InvalidKey(
                "Vigenère key must not be empty".into(),
            ));
        }
        let mut shifts = letter_positions(key);
        if shifts.is_empty() {
            shifts.push(0);
        }
        Ok(Self { shifts })
    }

    /// The shift applied by each key letter, in key order.
    #[must_use]
    pub const fn shifts(&self) -> &[u8] {
        self.shifts.as_slice()
    }

    // The key advances only on letters of the text.
    fn apply(&self, text: &str, forward: bool) -> String {
        let plan = RestorationPlan::new(text);
        let out: Vec<u8> = plan
            .letters()
            .iter()
            .zip(self.shifts.iter().cycle())
            .map(|(&x, &k)| {
                if forward {
                    (x + k) % ALPHABET_LEN
                } else {
                    (x + ALPHABET_LEN - k) % ALPHABET_LEN
                }
            })
            .collect();
        plan.restore(&out)
    }
}

impl TextCipher for Vigenere {
    fn encrypt(&self, text: &str) -> Result<String> {
        Ok(self.apply(text, true))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        Ok(self.apply(text, false))
    }
}

/// Encrypts `text` with `E(x) = (x + k) mod 26`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] when `key` is empty.
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    Vigenere::new(key)?.encrypt(text)
}

/// Decrypts `text` with `D(x) = (x - k + 26) mod 26`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] when `key` is empty.
pub fn decrypt(text: &str, key: &str) -> Result<String> {
    Vigenere::new(key)?.decrypt(text)
}
