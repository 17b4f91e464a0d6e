//! The symmetric 5x5 block pattern.
//!
//! A [`Palette`] here is a presence grid, not a color table: a `true` cell
//! is painted with the foreground color.

use std::fmt;

/// Cells per row and per column. Must be odd so the middle column mirrors
/// onto itself.
pub const GRID_SIZE: usize = 5;

/// Distinct columns per row: the left half plus the center column.
pub const MIRROR_COLUMNS: usize = GRID_SIZE / 2 + 1;

/// Digest bytes consumed by [`Palette::mix`].
pub const PATTERN_BYTES: usize = GRID_SIZE * MIRROR_COLUMNS;

/// A horizontally mirror-symmetric 5x5 boolean grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    cells: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl Palette {
    /// Builds the grid from `recipe`, one byte per distinct cell, row-major.
    ///
    /// A cell is filled when its byte is even, and the value is copied to
    /// the mirrored column. Bytes past [`PATTERN_BYTES`] are ignored; a
    /// shorter recipe leaves the remaining cells empty.
    pub fn mix(recipe: &[u8]) -> Self {
        let mut cells = [[false; GRID_SIZE]; GRID_SIZE];

        for (z, byte) in recipe.iter().take(PATTERN_BYTES).enumerate() {
            let (row, col) = (z / MIRROR_COLUMNS, z % MIRROR_COLUMNS);
            let filled = byte % 2 == 0;
            cells[row][col] = filled;
            // Mirror onto the other half.
            cells[row][GRID_SIZE - 1 - col] = filled;
        }

        Self { cells }
    }

    /// Returns whether the cell at `row`, `col` is filled. Out of range
    /// coordinates are reported as empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool; GRID_SIZE]> {
        self.cells.iter()
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| **c).count()
    }

    pub fn is_symmetric(&self) -> bool {
        self.cells
            .iter()
            .all(|row| (0..GRID_SIZE).all(|col| row[col] == row[GRID_SIZE - 1 - col]))
    }
}

impl fmt::Display for Palette {
    /// Draws the grid as `#` (filled) and `.` (empty), one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                f.write_str(if *cell { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}
