// File:    hill.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Hill cipher over 2x2 and 3x3 key matrices modulo 26.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use log::debug;

use crate::alphabet::{RestorationPlan, letter_positions, wrap};
use crate::modular::mod_inverse;
use crate::{CipherError, Result, TextCipher};

const M: i64 = 26;
/// Position of the pad letter `X`.
const PAD: u8 = b'X' - b'A';
const MAX_SIZE: usize = 3;

/// Clamps a requested block size to one of the supported sizes.
///
/// Sizes other than 2 and 3 become 2.
#[must_use]
pub fn clamp_size(size: usize) -> usize {
    if size == 2 || size == 3 {
        size
    } else {
        debug!("hill block size {size} is not supported, using 2");
        2
    }
}

/// An `n x n` key matrix over Z/26, `n` being 2 or 3, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HillMatrix {
    size: usize,
    cells: [i64; MAX_SIZE * MAX_SIZE],
}

impl HillMatrix {
    /// Builds a matrix from the letters of `key`.
    ///
    /// The letters are padded with `A` or truncated to `size * size` and
    /// laid out row by row. `size` is clamped with [`clamp_size`].
    #[must_use]
    pub fn from_key(key: &str, size: usize) -> Self {
        let size = clamp_size(size);
        let mut cells = [0; MAX_SIZE * MAX_SIZE];
        for (i, pos) in letter_positions(key).into_iter().take(size * size).enumerate() {
            cells[(i / size) * MAX_SIZE + i % size] = i64::from(pos);
        }
        Self { size, cells }
    }

    /// Builds a matrix from explicit rows, reducing every entry mod 26.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidParameter`] unless `rows` is a 2x2 or
    /// 3x3 square.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self> {
        let size = rows.len();
        if !(size == 2 || size == 3) || rows.iter().any(|row| row.len() != size) {
            return Err(CipherError::InvalidParameter(
                "Hill matrix must be 2x2 or 3x3".into(),
            ));
        }
        let mut matrix = Self {
            size,
            cells: [0; MAX_SIZE * MAX_SIZE],
        };
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                matrix.cells[r * MAX_SIZE + c] = value.rem_euclid(M);
            }
        }
        Ok(matrix)
    }

    /// Side length of the matrix.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Entry at `(row, col)`; indices wrap at the matrix size.
    #[must_use]
    pub const fn at(&self, row: usize, col: usize) -> i64 {
        self.cells[(row % self.size) * MAX_SIZE + col % self.size]
    }

    /// The matrix as a list of rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<i64>> {
        (0..self.size)
            .map(|r| (0..self.size).map(|c| self.at(r, c)).collect())
            .collect()
    }

    /// Signed cofactor of `(row, col)`, not reduced.
    const fn cofactor(&self, row: usize, col: usize) -> i64 {
        if self.size == 2 {
            // Minor of a 2x2 is the opposite corner.
            let sign = if (row + col).is_multiple_of(2) { 1 } else { -1 };
            sign * self.at(row + 1, col + 1)
        } else {
            // Cyclic indexing folds the sign into the 2x2 minor for 3x3.
            self.at(row + 1, col + 1) * self.at(row + 2, col + 2)
                - self.at(row + 1, col + 2) * self.at(row + 2, col + 1)
        }
    }

    /// Determinant reduced to `[0, 26)`.
    #[must_use]
    pub fn determinant(&self) -> i64 {
        (0..self.size)
            .map(|c| self.at(0, c) * self.cofactor(0, c))
            .sum::<i64>()
            .rem_euclid(M)
    }

    /// Inverse matrix mod 26: the adjugate scaled by `det^-1`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] when the determinant shares a
    /// factor with 26.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        let det_inv = mod_inverse(det, M).ok_or_else(|| {
            CipherError::InvalidKey(format!(
                "key matrix determinant {det} is not invertible mod 26"
            ))
        })?;
        let mut inverse = Self {
            size: self.size,
            cells: [0; MAX_SIZE * MAX_SIZE],
        };
        for row in 0..self.size {
            for col in 0..self.size {
                // adj(A)[row][col] = C[col][row]
                inverse.cells[row * MAX_SIZE + col] =
                    (det_inv * self.cofactor(col, row)).rem_euclid(M);
            }
        }
        Ok(inverse)
    }

    /// Multiplies the matrix by a column vector of letter positions, mod 26.
    #[must_use]
    pub fn multiply(&self, vector: &[u8]) -> Vec<u8> {
        (0..self.size)
            .map(|row| {
                let sum: i64 = vector
                    .iter()
                    .enumerate()
                    .map(|(col, &x)| self.at(row, col) * i64::from(x))
                    .sum();
                wrap(sum)
            })
            .collect()
    }

    /// Pads `letters` with `X` to whole blocks and multiplies every block.
    fn transform(&self, letters: &[u8]) -> Vec<u8> {
        let mut padded = letters.to_vec();
        let remainder = padded.len() % self.size;
        if remainder != 0 {
            padded.resize(padded.len() + self.size - remainder, PAD);
        }
        padded
            .chunks_exact(self.size)
            .flat_map(|block| self.multiply(block))
            .collect()
    }
}

/// Hill cipher keyed by a square matrix of letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hill {
    matrix: HillMatrix,
}

impl Hill {
    /// Builds the key matrix from `key` with block size `size`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] when `key` is empty.
    pub fn new(key: &str, size: usize) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherError::InvalidKey("Hill key must not be empty".into()));
        }
        Ok(Self {
            matrix: HillMatrix::from_key(key, size),
        })
    }

    /// The key matrix.
    #[must_use]
    pub const fn matrix(&self) -> &HillMatrix {
        &self.matrix
    }
}

impl TextCipher for Hill {
    /// Letters are encrypted in blocks and written back over the letters of
    /// the original text, keeping their case.
    ///
    /// Letters produced by padding the last block are appended in uppercase.
    /// Text without letters is returned unchanged.
    fn encrypt(&self, text: &str) -> Result<String> {
        let plan = RestorationPlan::new(text);
        if plan.letters().is_empty() {
            return Ok(text.to_owned());
        }
        Ok(plan.restore(&self.matrix.transform(plan.letters())))
    }

    /// Fails before reading the text if the key matrix has no inverse.
    /// Trailing `X` pad letters are trimmed from the result.
    fn decrypt(&self, text: &str) -> Result<String> {
        let inverse = self.matrix.inverse()?;
        let plan = RestorationPlan::new(text);
        if plan.letters().is_empty() {
            return Ok(text.to_owned());
        }
        let mut out = plan.restore(&inverse.transform(plan.letters()));
        let kept = out.trim_end_matches('X').len();
        out.truncate(kept);
        Ok(out)
    }
}

/// Encrypts `text` under the key matrix built from `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] when `key` is empty.
pub fn encrypt(text: &str, key: &str, size: usize) -> Result<String> {
    Hill::new(key, size)?.encrypt(text)
}

/// Decrypts `text` under the key matrix built from `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] when `key` is empty or its matrix is
/// not invertible mod 26.
pub fn decrypt(text: &str, key: &str, size: usize) -> Result<String> {
    Hill::new(key, size)?.decrypt(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_fills_rows_and_pads_with_a() {
        let m = HillMatrix::from_key("hill", 2);
        assert_eq!(m.rows(), vec![vec![7, 8], vec![11, 11]]);
        let m = HillMatrix::from_key("GYB", 3);
        assert_eq!(m.rows(), vec![vec![6, 24, 1], vec![0, 0, 0], vec![0, 0, 0]]);
    }

    #[test]
    fn unsupported_sizes_clamp_to_two() {
        assert_eq!(HillMatrix::from_key("ABCD", 7).size(), 2);
        assert_eq!(HillMatrix::from_key("ABCD", 0).size(), 2);
        assert_eq!(clamp_size(3), 3);
    }

    #[test]
    fn determinant_and_inverse_2x2() {
        let m = HillMatrix::from_rows(&[vec![3, 3], vec![2, 5]]).unwrap();
        assert_eq!(m.determinant(), 9);
        let inv = m.inverse().unwrap();
        assert_eq!(inv.rows(), vec![vec![15, 17], vec![20, 9]]);
    }

    #[test]
    fn inverse_3x3_undoes_multiplication() {
        let m = HillMatrix::from_key("GYBNQKURP", 3);
        assert_eq!(m.determinant(), 25);
        let inv = m.inverse().unwrap();
        assert_eq!(
            inv.rows(),
            vec![vec![8, 5, 10], vec![21, 8, 21], vec![21, 12, 8]]
        );
        let block = [0, 2, 19];
        assert_eq!(inv.multiply(&m.multiply(&block)), block.to_vec());
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let m = HillMatrix::from_rows(&[vec![2, 4], vec![6, 8]]).unwrap();
        assert!(matches!(m.inverse(), Err(CipherError::InvalidKey(_))));
    }
}
