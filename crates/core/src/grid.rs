//! Grid module - fixed-size storage of landed blocks
//!
//! The grid is a 10x20 sparse container: each cell is either empty or holds
//! one [`Block`]. Uses a flat array for cache locality.
//! Coordinates: (column, row) where column ranges 0..9 (left to right), row
//! ranges 0..19 (top to bottom).
//!
//! Every stored block's own `(column, row)` equals the cell it sits in. All
//! mutation goes through [`Grid::set`] or [`Grid::move_block`], which rewrite
//! the block's coordinates on the way in.

use elevatris_types::{NUM_COLUMNS, NUM_ROWS};

use crate::Block;

/// Total number of cells on the grid
pub const GRID_SIZE: usize = (NUM_COLUMNS as usize) * (NUM_ROWS as usize);

/// The landed-block grid - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * COLUMNS + column)
    cells: [Option<Block>; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|_| None),
        }
    }

    /// Calculate flat index from (column, row) coordinates
    #[inline(always)]
    fn index(column: i8, row: i8) -> Option<usize> {
        if column < 0 || column >= NUM_COLUMNS as i8 || row < 0 || row >= NUM_ROWS as i8 {
            return None;
        }
        Some((row as usize) * (NUM_COLUMNS as usize) + (column as usize))
    }

    pub fn columns(&self) -> u8 {
        NUM_COLUMNS
    }

    pub fn rows(&self) -> u8 {
        NUM_ROWS
    }

    pub fn in_bounds(&self, column: i8, row: i8) -> bool {
        Self::index(column, row).is_some()
    }

    /// Block at (column, row), or None when empty or out of bounds
    pub fn get(&self, column: i8, row: i8) -> Option<&Block> {
        Self::index(column, row).and_then(|idx| self.cells[idx].as_ref())
    }

    pub(crate) fn get_mut(&mut self, column: i8, row: i8) -> Option<&mut Block> {
        Self::index(column, row).and_then(|idx| self.cells[idx].as_mut())
    }

    /// Store a block at (column, row), rewriting its coordinates to match.
    ///
    /// Returns the block previously in the cell. Out-of-bounds placements are
    /// refused and hand the block back as `Err`.
    pub fn set(&mut self, column: i8, row: i8, mut block: Block) -> Result<Option<Block>, Block> {
        match Self::index(column, row) {
            Some(idx) => {
                block.column = column;
                block.row = row;
                Ok(self.cells[idx].replace(block))
            }
            None => Err(block),
        }
    }

    /// Remove and return the block at (column, row)
    pub fn take(&mut self, column: i8, row: i8) -> Option<Block> {
        Self::index(column, row).and_then(|idx| self.cells[idx].take())
    }

    /// Empty a single cell
    pub fn clear(&mut self, column: i8, row: i8) {
        let _ = self.take(column, row);
    }

    /// Move the block at `from` into the empty cell `to`.
    ///
    /// Returns false (and changes nothing) if `from` is empty, `to` is
    /// occupied, or either is out of bounds.
    pub fn move_block(&mut self, from: (i8, i8), to: (i8, i8)) -> bool {
        if !self.is_occupied(from.0, from.1) || !self.is_vacant(to.0, to.1) {
            return false;
        }
        match self.take(from.0, from.1) {
            Some(block) => self.set(to.0, to.1, block).is_ok(),
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_vacant(&self, column: i8, row: i8) -> bool {
        matches!(Self::index(column, row), Some(idx) if self.cells[idx].is_none())
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, column: i8, row: i8) -> bool {
        self.get(column, row).is_some()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: i8) -> bool {
        match Self::index(0, row) {
            Some(start) => self.cells[start..start + NUM_COLUMNS as usize]
                .iter()
                .all(Option::is_some),
            None => false,
        }
    }

    /// Check if a row holds no blocks at all
    pub fn row_is_empty(&self, row: i8) -> bool {
        match Self::index(0, row) {
            Some(start) => self.cells[start..start + NUM_COLUMNS as usize]
                .iter()
                .all(Option::is_none),
            None => true,
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate stored blocks in row-major order
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.cells.iter().flatten()
    }

    pub(crate) fn blocks_mut(&mut self) -> impl Iterator<Item = &mut Block> {
        self.cells.iter_mut().flatten()
    }

    /// Empty the whole grid, returning removed blocks grouped by row (top to bottom)
    pub fn clear_all(&mut self) -> Vec<Vec<Block>> {
        let width = NUM_COLUMNS as usize;
        let mut removed = Vec::new();
        for row in self.cells.chunks_mut(width) {
            let blocks: Vec<Block> = row.iter_mut().filter_map(Option::take).collect();
            if !blocks.is_empty() {
                removed.push(blocks);
            }
        }
        removed
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
