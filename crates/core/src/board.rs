//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is either empty or holds
//! the (brightness-scaled) color of a settled mino. Cells live in one flat
//! row-major vector. Coordinates: `(x, y)` with x growing to the right and
//! y growing downward, row 0 at the top.
//!
//! The falling piece is never stored here; it is composited at draw time.

use arrayvec::ArrayVec;

use crate::piece::ActivePiece;
use crate::pieces::color_for;
use crate::types::{Cell, MAX_BOARD_HEIGHT, MAX_BOARD_WIDTH};

/// Completed row indices, ascending.
pub type CompletedRows = ArrayVec<u8, { MAX_BOARD_HEIGHT as usize }>;

/// The game board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Color scale applied to committed minos
    brightness: f32,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board at full brightness
    ///
    /// # Panics
    ///
    /// Panics if a side is zero or exceeds the supported maximum.
    pub fn new(width: u8, height: u8) -> Self {
        assert!(
            width > 0 && width <= MAX_BOARD_WIDTH,
            "board width out of range"
        );
        assert!(
            height > 0 && height <= MAX_BOARD_HEIGHT,
            "board height out of range"
        );
        Self {
            width,
            height,
            brightness: 1.0,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Scale committed colors by `brightness`.
    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied. Anything outside the grid is free.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Borrow one row of cells
    pub fn row(&self, y: u8) -> &[Cell] {
        let width = self.width as usize;
        let start = y as usize * width;
        &self.cells[start..start + width]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: u8) -> bool {
        if y >= self.height {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Write the piece's minos into the grid, colored by kind.
    ///
    /// Minos outside the grid (typically above row 0) are dropped.
    pub fn commit(&mut self, piece: &ActivePiece) {
        let color = color_for(piece.kind).scaled(self.brightness);
        for (x, y) in piece.cells() {
            self.set(x, y, Some(color));
        }
    }

    /// Indices of every completely filled row, top to bottom
    pub fn scan_completed_rows(&self) -> CompletedRows {
        (0..self.height).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Clear a row and shift all rows above it down by one.
    ///
    /// Row 0 is left empty; rows below `y` are untouched. Out of range rows are ignored.
    pub fn clear_row(&mut self, y: u8) {
        if y >= self.height {
            return;
        }

        let width = self.width as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y as usize).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        self.cells[..width].fill(None);
    }

    /// Clear the entire board
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Fill every column of a row except those in `gaps`.
    pub fn fill_row_except(&mut self, y: u8, gaps: &[i8], cell: Cell) {
        for x in 0..self.width as i8 {
            if !gaps.contains(&x) {
                self.set(x, y as i8, cell);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::MATRIX_WIDTH, crate::types::MATRIX_HEIGHT)
    }
}
