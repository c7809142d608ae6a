use crate::alphabet::{RestorationPlan, wrap};
use crate::modular::{gcd, mod_inverse};
use crate::{CipherError, Result, TextCipher};

const M: i64 = 26;

/// Affine cipher `E(x) = (a*x + b) mod 26`.
///
/// `a` must be coprime with 26 for the cipher to be reversible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affine {
    /// Multiplier; must be coprime with 26.
    pub a: i64,
    /// Offset.
    pub b: i64,
}

impl Affine {
    /// Creates an Affine cipher, checking that `a` is coprime with 26.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] when `gcd(a, 26) != 1`.
    pub fn new(a: i64, b: i64) -> Result<Self> {
        if gcd(a, M) != 1 {
            return Err(CipherError::InvalidKey(format!(
                "'a' = {a} must be coprime to 26"
            )));
        }
        Ok(Self { a, b })
    }
}

impl TextCipher for Affine {
    fn encrypt(&self, text: &str) -> Result<String> {
        encrypt(text, self.a, self.b)
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        decrypt(text, self.a, self.b)
    }
}

/// Encrypts the letters of `text`, keeping case and non-letters.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] when `a` is not coprime with 26.
pub fn encrypt(text: &str, a: i64, b: i64) -> Result<String> {
    let key = Affine::new(a, b)?;
    let (a, b) = (key.a.rem_euclid(M), key.b.rem_euclid(M));

    let plan = RestorationPlan::new(text);
    let out: Vec<u8> = plan
        .letters()
        .iter()
        .map(|&x| wrap(a * i64::from(x) + b))
        .collect();
    Ok(plan.restore(&out))
}

/// Decrypts with `D(y) = a_inv * (y - b) mod 26`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] when `a` has no inverse mod 26.
pub fn decrypt(text: &str, a: i64, b: i64) -> Result<String> {
    let a_inv = mod_inverse(a, M).ok_or_else(|| {
        CipherError::InvalidKey(format!("'a' = {a} has no modular inverse mod 26"))
    })?;
    let b = b.rem_euclid(M);

    let plan = RestorationPlan::new(text);
    let out: Vec<u8> = plan
        .letters()
        .iter()
        .map(|&y| wrap(a_inv * (i64::from(y) - b)))
        .collect();
    Ok(plan.restore(&out))
}
