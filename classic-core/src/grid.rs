// File:    grid.rs
// Author:  apezoo
// Date:    2026-10-17
//
// Description: Character grids and the traversal orders used by the transposition ciphers.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! A grid is always filled and read by two independent orders. Decryption
//! replays the same path from the grid dimensions alone and swaps the roles
//! of fill and read.

/// Right, down, left, up.
const SPIRAL_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A `rows x cols` block of characters stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Creates a grid with every cell set to `fill`.
    ///
    /// Returns `None` when `rows * cols` overflows or cannot be allocated.
    #[must_use]
    pub fn new(rows: usize, cols: usize, fill: char) -> Option<Self> {
        Self::fill_row_major(std::iter::empty(), rows, cols, fill)
    }

    /// Fills a grid row-major from `chars`.
    ///
    /// The sequence is truncated to `rows * cols` characters, or padded on
    /// the right with `pad` when it is shorter. Returns `None` when the
    /// grid is too large to hold.
    #[must_use]
    pub fn fill_row_major<I>(chars: I, rows: usize, cols: usize, pad: char) -> Option<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let size = rows.checked_mul(cols)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(size).ok()?;
        cells.extend(chars.into_iter().take(size));
        cells.resize(size, pad);
        Some(Self { rows, cols, cells })
    }

    /// Places `chars` along the clockwise spiral, padding with `pad`.
    ///
    /// This is the inverse of [`Grid::read_spiral`]. Returns `None` when the
    /// grid is too large to hold.
    #[must_use]
    pub fn fill_spiral<I>(chars: I, rows: usize, cols: usize, pad: char) -> Option<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let mut grid = Self::new(rows, cols, pad)?;
        for ((row, col), c) in spiral_path(rows, cols).into_iter().zip(chars) {
            grid.set(row, col, c);
        }
        Some(grid)
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the character at `(row, col)`, if it is inside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// Overwrites the character at `(row, col)`. Out-of-range writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, c: char) {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = c;
        }
    }

    /// Reads the grid left to right, top to bottom.
    #[must_use]
    pub fn read_row_major(&self) -> String {
        self.cells.iter().collect()
    }

    /// Reads column `col` top to bottom.
    #[must_use]
    pub fn read_column(&self, col: usize) -> String {
        (0..self.rows).filter_map(|row| self.get(row, col)).collect()
    }

    /// Reads the grid along the clockwise inward spiral from `(0, 0)`.
    ///
    /// Produces exactly `rows * cols` characters.
    #[must_use]
    pub fn read_spiral(&self) -> String {
        spiral_path(self.rows, self.cols)
            .into_iter()
            .filter_map(|(row, col)| self.get(row, col))
            .collect()
    }
}

/// Fills a `rows x cols` grid row-major from `text`; see [`Grid::fill_row_major`].
#[must_use]
pub fn fill_grid(text: &str, rows: usize, cols: usize, pad: char) -> Option<Grid> {
    Grid::fill_row_major(text.chars(), rows, cols, pad)
}

/// The cells of a `rows x cols` grid in clockwise inward spiral order.
///
/// Starts at `(0, 0)` heading right and turns clockwise whenever the next
/// cell would leave the grid or was already visited. The path is empty
/// when the grid has no cells or `rows * cols` overflows.
#[must_use]
pub fn spiral_path(rows: usize, cols: usize) -> Vec<(usize, usize)> {
    let total = rows.checked_mul(cols).unwrap_or(0);
    let mut path = Vec::with_capacity(total);
    if total == 0 {
        return path;
    }

    let mut visited = vec![false; total];
    let (mut row, mut col, mut dir) = (0_usize, 0_usize, 0_usize);
    loop {
        path.push((row, col));
        visited[row * cols + col] = true;
        if path.len() == total {
            break;
        }

        let free = |step: (isize, isize)| {
            step_within(row, col, step, rows, cols).filter(|&(r, c)| !visited[r * cols + c])
        };
        let next = free(SPIRAL_DIRECTIONS[dir]).or_else(|| {
            dir = (dir + 1) % SPIRAL_DIRECTIONS.len();
            free(SPIRAL_DIRECTIONS[dir])
        });
        match next {
            Some((r, c)) => (row, col) = (r, c),
            None => break,
        }
    }
    path
}

fn step_within(
    row: usize,
    col: usize,
    (dr, dc): (isize, isize),
    rows: usize,
    cols: usize,
) -> Option<(usize, usize)> {
    let r = row.checked_add_signed(dr)?;
    let c = col.checked_add_signed(dc)?;
    (r < rows && c < cols).then_some((r, c))
}

/// The rail visited at each of `len` steps of a zigzag over `rails` rows.
///
/// The path starts on rail 0 and changes direction exactly on the first and
/// last rail. With fewer than two rails every step stays on rail 0.
///
/// Rails past the `len`-th are never reached, so `rails` is capped at `len`.
#[must_use]
pub fn zigzag_rails(len: usize, rails: usize) -> Vec<usize> {
    let rails = rails.min(len);
    if rails < 2 {
        return vec![0; len];
    }
    let mut path = Vec::with_capacity(len);
    let mut rail = 0_usize;
    let mut down = true;
    for _ in 0..len {
        path.push(rail);
        if rail == 0 {
            down = true;
        } else if rail == rails - 1 {
            down = false;
        }
        if down {
            rail += 1;
        } else {
            rail -= 1;
        }
    }
    path
}

/// How many of `len` zigzag steps land on each rail.
///
/// Has one entry per rail actually reached, at most `len`.
#[must_use]
pub fn rail_counts(len: usize, rails: usize) -> Vec<usize> {
    let mut counts = vec![0; rails.min(len).max(1)];
    for rail in zigzag_rails(len, rails) {
        counts[rail] += 1;
    }
    counts
}

/// Writes `text` along the zigzag and reads the rails top to bottom.
///
/// Fewer than two rails, or empty text, returns the text unchanged.
#[must_use]
pub fn read_zigzag(text: &str, rails: usize) -> String {
    let len = text.chars().count();
    let rails = rails.min(len);
    if rails < 2 {
        return text.to_owned();
    }
    let mut lines = vec![String::new(); rails];
    for (c, rail) in text.chars().zip(zigzag_rails(len, rails)) {
        lines[rail].push(c);
    }
    lines.concat()
}

/// Inverse of [`read_zigzag`]: rebuilds the text from rail-ordered input.
///
/// Recomputes the rail sizes from the length, slices the input into those
/// rails and replays the zigzag, taking the next character of each rail.
#[must_use]
pub fn unread_zigzag(text: &str, rails: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let rails = rails.min(chars.len());
    if rails < 2 {
        return text.to_owned();
    }
    let mut lines = Vec::with_capacity(rails);
    let mut start = 0;
    for count in rail_counts(chars.len(), rails) {
        lines.push(chars[start..start + count].iter());
        start += count;
    }
    zigzag_rails(chars.len(), rails)
        .into_iter()
        .filter_map(|rail| lines[rail].next())
        .collect()
}
