//! Columnar Transposition.
//!
//! Letters are written row by row under the key and read column by column,
//! taking the columns in the alphabetical order of the key letters.

use crate::grid::Grid;
use crate::{CipherError, Result, TextCipher};

/// Pad character for the last row.
pub const PAD: char = 'X';

/// Physical column indices in read order.
///
/// Key letters are sorted alphabetically, case-insensitively; equal letters
/// keep their left-to-right order.
#[must_use]
pub fn column_order(key: &str) -> Vec<usize> {
    let letters: Vec<char> = key
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let mut order: Vec<usize> = (0..letters.len()).collect();
    // sort_by_key is stable, which gives the tie-break by position.
    order.sort_by_key(|&i| letters[i]);
    order
}

/// Columnar Transposition keyed by a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columnar {
    order: Vec<usize>,
}

impl Columnar {
    /// Derives the column order from the letters of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] when `key` has no letters.
    pub fn new(key: &str) -> Result<Self> {
        let order = column_order(key);
        if order.is_empty() {
            return Err(CipherError::InvalidKey(
                "Columnar key must contain at least one letter".into(),
            ));
        }
        Ok(Self { order })
    }

    /// Number of columns, the letter count of the key.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.order.len()
    }

    /// Physical column indices in read order.
    #[must_use]
    pub const fn order(&self) -> &[usize] {
        self.order.as_slice()
    }
}

impl TextCipher for Columnar {
    /// Non-letters are dropped. Text with no letters is returned unchanged.
    fn encrypt(&self, text: &str) -> Result<String> {
        let letters: Vec<char> = text.chars().filter(char::is_ascii_alphabetic).collect();
        if letters.is_empty() {
            return Ok(text.to_owned());
        }
        let width = self.width();
        let rows = letters.len().div_ceil(width);
        let grid = Grid::fill_row_major(letters, rows, width, PAD).ok_or_else(|| {
            CipherError::InvalidParameter("text is too long for a columnar grid".into())
        })?;
        Ok(self.order.iter().map(|&col| grid.read_column(col)).collect())
    }

    /// Trailing [`PAD`] letters are trimmed from the result.
    fn decrypt(&self, text: &str) -> Result<String> {
        let letters: Vec<char> = text.chars().filter(char::is_ascii_alphabetic).collect();
        if letters.is_empty() {
            return Ok(text.to_owned());
        }
        let width = self.width();
        let rows = letters.len().div_ceil(width);

        // A short last row leaves the rightmost `excess` columns one shorter.
        let excess = rows * width - letters.len();
        let height = |col: usize| if col >= width - excess { rows - 1 } else { rows };

        let mut columns: Vec<&[char]> = vec![&[][..]; width];
        let mut rest = letters.as_slice();
        for &col in &self.order {
            let (taken, remaining) = rest.split_at(height(col));
            columns[col] = taken;
            rest = remaining;
        }

        let mut out = String::with_capacity(letters.len());
        for row in 0..rows {
            out.extend(columns.iter().filter_map(|column| column.get(row)));
        }
        let kept = out.trim_end_matches(PAD).len();
        out.truncate(kept);
        Ok(out)
    }
}

/// Encrypts the letters of `text` under `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] when `key` has no letters.
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    Columnar::new(key)?.encrypt(text)
}

/// Decrypts `text` under `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] when `key` has no letters.
pub fn decrypt(text: &str, key: &str) -> Result<String> {
    Columnar::new(key)?.decrypt(text)
}
