use crate::types::{Color, CELLS_PER_BLOCK, CELLS_PER_SIDE};

/// One individual in the pedigree: a fixed 8x8 grid of trait colours.
///
/// A block is a value: constructed once with all 64 cells populated (see
/// `operators::solid` and `operators::inherit`) and never mutated afterwards.
/// Cells are stored row-major, so `(row, col)` lives at index
/// `row * CELLS_PER_SIDE + col`.
///
/// # Why a fixed array instead of a coordinate map?
///
/// A map invites partially-populated individuals and double assignment. With
/// `[Color; 64]` both are unrepresentable: a `Block` either exists with all
/// 64 cells or it does not exist at all, which keeps the inheritance step a
/// pure `(parent_a, parent_b, rng) -> Block` function.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    cells: [Color; CELLS_PER_BLOCK],
}

impl Block {
    pub fn new(cells: [Color; CELLS_PER_BLOCK]) -> Self {
        Self { cells }
    }

    /// Colour at a grid coordinate. Panics if either index is out of the
    /// 8x8 range, which is a caller bug rather than a runtime condition.
    pub fn cell(&self, row: usize, col: usize) -> &Color {
        assert!(row < CELLS_PER_SIDE && col < CELLS_PER_SIDE);
        &self.cells[row * CELLS_PER_SIDE + col]
    }

    /// Colour at a row-major index in `[0, 64)`.
    pub fn cell_at(&self, index: usize) -> &Color {
        &self.cells[index]
    }

    /// All 64 cells in row-major order.
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// True when every cell carries the same colour (founder blocks).
    pub fn is_uniform(&self) -> bool {
        self.cells.iter().all(|c| *c == self.cells[0])
    }
}
