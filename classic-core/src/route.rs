use log::debug;

use crate::grid::{Grid, fill_grid};
use crate::{Result, TextCipher};

/// Pad character for short text.
pub const PAD: char = 'X';

/// Route cipher: fill a grid row by row, read it along a clockwise spiral.
///
/// A grid with no rows or no columns leaves the text unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Grid height.
    pub rows: usize,
    /// Grid width.
    pub cols: usize,
}

impl Route {
    /// Creates a Route cipher over a `rows x cols` grid.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl TextCipher for Route {
    fn encrypt(&self, text: &str) -> Result<String> {
        Ok(encrypt(text, self.rows, self.cols))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        Ok(decrypt(text, self.rows, self.cols))
    }
}

/// Places `text` row-major into the grid and reads the spiral.
///
/// Text is padded with [`PAD`] to fill the grid, or truncated to it.
/// Empty text stays empty. A grid with no cells, or too many to hold,
/// passes the text through.
#[must_use]
pub fn encrypt(text: &str, rows: usize, cols: usize) -> String {
    if text.is_empty() {
        return String::new();
    }
    let grid = if rows < 1 || cols < 1 {
        None
    } else {
        fill_grid(text, rows, cols, PAD)
    };
    grid.map_or_else(|| passthrough(text, rows, cols), |grid| grid.read_spiral())
}

/// Places `text` along the spiral and reads the grid row-major, then trims
/// trailing [`PAD`] characters.
#[must_use]
pub fn decrypt(text: &str, rows: usize, cols: usize) -> String {
    let grid = if rows < 1 || cols < 1 {
        None
    } else {
        Grid::fill_spiral(text.chars(), rows, cols, PAD)
    };
    grid.map_or_else(
        || passthrough(text, rows, cols),
        |grid| grid.read_row_major().trim_end_matches(PAD).to_owned(),
    )
}

fn passthrough(text: &str, rows: usize, cols: usize) -> String {
    debug!("route over a {rows}x{cols} grid: passing text through");
    text.to_owned()
}
