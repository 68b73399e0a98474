use core::ops::Range;

use super::{SCREEN_CELLS, SCREEN_COLUMNS};
use crate::keyboard::{COLS, ROWS};

/// Width in cells of one key's colour block.
pub const BLOCK_WIDTH: u16 = 5;
/// One matrix row of blocks is exactly one screen line.
pub const ROW_STRIDE: u16 = COLS as u16 * BLOCK_WIDTH;
/// The grid starts on the third screen line, below the title and a blank line.
pub const LEGEND_BASE: u16 = 2 * SCREEN_COLUMNS;

/// Maps matrix positions to colour cells in raster order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLayout {
    pub base: u16,
}

impl CellLayout {
    pub const fn new(base: u16) -> Self {
        CellLayout { base }
    }

    pub const fn block_offset(&self, row: usize, col: usize) -> u16 {
        self.base + row as u16 * ROW_STRIDE + col as u16 * BLOCK_WIDTH
    }

    pub const fn block_cells(&self, row: usize, col: usize) -> Range<u16> {
        let start = self.block_offset(row, col);
        start..start + BLOCK_WIDTH
    }

    /// Whether the whole grid lands on screen.
    pub const fn fits(&self) -> bool {
        self.base as u32 + (ROWS as u32 * ROW_STRIDE as u32) <= SCREEN_CELLS as u32
    }
}

impl Default for CellLayout {
    fn default() -> Self {
        CellLayout::new(LEGEND_BASE)
    }
}
