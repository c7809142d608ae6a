//! Playfair digraph cipher over a 5x5 square with J merged into I.
//!
//! Decryption trims every trailing `X` from its output. A plaintext that
//! really ended in `X` loses it; the cipher cannot tell filler from content.

use crate::alphabet::position;
use crate::{CipherError, Result, TextCipher};

const SIDE: usize = 5;
const FILLER: char = 'X';
const ALT_FILLER: char = 'Y';
/// The 25 letters of the square, J omitted.
const SQUARE_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// A 5x5 key square.
///
/// Every letter A-Z except J appears exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairSquare {
    cells: [char; SIDE * SIDE],
    // (row, col) of each letter A-Z; J shares I's entry.
    coords: [(usize, usize); 26],
}

impl PlayfairSquare {
    /// Builds the square from the letters of `key`.
    ///
    /// The key's letters come first, with duplicates removed and J read as
    /// I, followed by the unused letters in alphabetical order.
    #[must_use]
    pub fn new(key: &str) -> Self {
        let mut order: Vec<char> = Vec::with_capacity(SIDE * SIDE);
        let key_letters = key
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(normalize);
        for c in key_letters.chain(SQUARE_ALPHABET.chars()) {
            if !order.contains(&c) {
                order.push(c);
            }
        }

        let mut cells = ['A'; SIDE * SIDE];
        let mut coords = [(0, 0); 26];
        for (i, &c) in order.iter().enumerate() {
            cells[i] = c;
            coords[index(c)] = (i / SIDE, i % SIDE);
        }
        coords[index('J')] = coords[index('I')];
        Self { cells, coords }
    }

    /// The letter at `(row, col)`, both taken mod 5.
    #[must_use]
    pub const fn at(&self, row: usize, col: usize) -> char {
        self.cells[(row % SIDE) * SIDE + col % SIDE]
    }

    /// `(row, col)` of an uppercase letter. J is reported at I's position.
    #[must_use]
    pub fn locate(&self, c: char) -> Option<(usize, usize)> {
        c.is_ascii_uppercase().then(|| self.coords[index(c)])
    }

    /// The square read row by row.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(SIDE)
            .map(|row| row.iter().collect())
            .collect()
    }

    /// Transforms one digraph.
    ///
    /// Letters on the same row move one column (right to encrypt, left to
    /// decrypt), letters in the same column move one row (down to encrypt,
    /// up to decrypt), and otherwise each letter takes its partner's column.
    #[must_use]
    pub fn transform_pair(&self, first: char, second: char, forward: bool) -> (char, char) {
        let (Some((r1, c1)), Some((r2, c2))) = (self.locate(first), self.locate(second)) else {
            return (first, second);
        };
        // Moving back one step is moving forward four on a ring of five.
        let step = if forward { 1 } else { SIDE - 1 };
        if r1 == r2 {
            (self.at(r1, c1 + step), self.at(r2, c2 + step))
        } else if c1 == c2 {
            (self.at(r1 + step, c1), self.at(r2 + step, c2))
        } else {
            (self.at(r1, c2), self.at(r2, c1))
        }
    }
}

const fn normalize(c: char) -> char {
    match c.to_ascii_uppercase() {
        'J' => 'I',
        upper => upper,
    }
}

fn index(c: char) -> usize {
    position(c).map_or(0, usize::from)
}

const fn filler_for(c: char) -> char {
    if c == FILLER { ALT_FILLER } else { FILLER }
}

/// Prepares plaintext as a list of digraphs.
///
/// Keeps only letters, uppercases them and merges J into I.
///
/// Two identical letters of a pair are split by `X`, or by `Y` when the
/// letter is itself `X`. A single letter left over is always padded with
/// `X`, so decryption can trim it.
#[must_use]
pub fn prepare_text(text: &str) -> Vec<(char, char)> {
    let letters: Vec<char> = text
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(normalize)
        .collect();

    let mut pairs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;
    while i < letters.len() {
        let first = letters[i];
        match letters.get(i + 1) {
            Some(&second) if second != first => {
                pairs.push((first, second));
                i += 2;
            }
            Some(_) => {
                pairs.push((first, filler_for(first)));
                i += 1;
            }
            None => {
                pairs.push((first, FILLER));
                i += 1;
            }
        }
    }
    pairs
}

/// Playfair cipher keyed by a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfair {
    square: PlayfairSquare,
}

impl Playfair {
    /// Creates the cipher and its key square.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] when `key` is empty.
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherError::InvalidKey("Playfair key must not be empty".into()));
        }
        Ok(Self {
            square: PlayfairSquare::new(key),
        })
    }

    /// The key square.
    #[must_use]
    pub const fn square(&self) -> &PlayfairSquare {
        &self.square
    }
}

impl TextCipher for Playfair {
    fn encrypt(&self, text: &str) -> Result<String> {
        let mut out = String::with_capacity(text.len() + 2);
        for (a, b) in prepare_text(text) {
            let (x, y) = self.square.transform_pair(a, b, true);
            out.push(x);
            out.push(y);
        }
        Ok(out)
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        let mut letters: Vec<char> = text
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(normalize)
            .collect();
        if !letters.len().is_multiple_of(2) {
            letters.push(FILLER);
        }

        let mut out = String::with_capacity(letters.len());
        for pair in letters.chunks_exact(2) {
            let (x, y) = self.square.transform_pair(pair[0], pair[1], false);
            out.push(x);
            out.push(y);
        }
        let kept = out.trim_end_matches(FILLER).len();
        out.truncate(kept);
        Ok(out)
    }
}

/// Encrypts `text` with a square built from `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] when `key` is empty.
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    Playfair::new(key)?.encrypt(text)
}

/// Decrypts `text` with a square built from `key`, trimming trailing `X`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] when `key` is empty.
pub fn decrypt(text: &str, key: &str) -> Result<String> {
    Playfair::new(key)?.decrypt(text)
}
