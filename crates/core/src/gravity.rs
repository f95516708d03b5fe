//! Gravity module - per-column compaction after removals
//!
//! After blocks are taken out of the grid, every remaining block in an
//! affected column drops by the number of removed cells below it. Columns
//! are independent and the vertical order of blocks within a column never
//! changes. Gaps that existed before the removal are left alone.

use elevatris_types::{NUM_COLUMNS, NUM_ROWS};

use crate::{Block, Grid};

/// Blocks that moved during a compaction, in their new positions, grouped by column
pub type FallenBlocks = Vec<Vec<Block>>;

/// Result of a line-removal pass, consumed by renderers for animation timing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClear {
    /// Removed blocks as they were before removal, one entry per row (bottom to top)
    pub lines_removed: Vec<Vec<Block>>,
    /// Blocks that dropped, one entry per column (left to right, each bottom to top)
    pub fallen_blocks: FallenBlocks,
}

impl LineClear {
    pub fn is_empty(&self) -> bool {
        self.lines_removed.is_empty()
    }

    pub fn lines(&self) -> usize {
        self.lines_removed.len()
    }
}

/// Drop the blocks above the already-emptied `removed` cells.
///
/// Only columns that appear in `removed` are touched.
pub fn compact(grid: &mut Grid, removed: &[(i8, i8)]) -> FallenBlocks {
    let mut fallen = Vec::new();

    for column in 0..NUM_COLUMNS as i8 {
        let mut cleared = [false; NUM_ROWS as usize];
        let mut touched = false;
        for &(c, r) in removed {
            if c == column && (0..NUM_ROWS as i8).contains(&r) {
                cleared[r as usize] = true;
                touched = true;
            }
        }
        if !touched {
            continue;
        }

        // Bottom-up, so every target cell has already been vacated.
        let mut moved = Vec::new();
        let mut shift: i8 = 0;
        for row in (0..NUM_ROWS as i8).rev() {
            if cleared[row as usize] {
                shift += 1;
                continue;
            }
            if shift == 0 || !grid.is_occupied(column, row) {
                continue;
            }
            let target = (column, row + shift);
            if grid.move_block((column, row), target) {
                if let Some(block) = grid.get(target.0, target.1) {
                    moved.push(block.clone());
                }
            }
        }

        if !moved.is_empty() {
            fallen.push(moved);
        }
    }

    fallen
}

#[cfg(test)]
mod tests {
    use super::*;
    use elevatris_types::BlockColor;

    fn put(grid: &mut Grid, column: i8, row: i8, color: BlockColor) {
        grid.set(column, row, Block::new(column, row, color)).unwrap();
    }

    #[test]
    fn test_blocks_drop_by_removed_cells_below() {
        let mut grid = Grid::new();
        put(&mut grid, 0, 15, BlockColor::Red);
        put(&mut grid, 0, 17, BlockColor::Blue);
        // rows 18 and 19 were removed
        let fallen = compact(&mut grid, &[(0, 18), (0, 19)]);

        assert_eq!(grid.get(0, 17).map(|b| b.color), Some(BlockColor::Red));
        assert_eq!(grid.get(0, 19).map(|b| b.color), Some(BlockColor::Blue));
        assert!(grid.get(0, 15).is_none());

        assert_eq!(fallen.len(), 1);
        let rows: Vec<i8> = fallen[0].iter().map(|b| b.row).collect();
        assert_eq!(rows, vec![19, 17]);
    }

    #[test]
    fn test_existing_gaps_survive() {
        let mut grid = Grid::new();
        put(&mut grid, 3, 10, BlockColor::Teal);
        // gap at row 11..=18, removed cell at 19
        let fallen = compact(&mut grid, &[(3, 19)]);

        assert!(grid.is_occupied(3, 11));
        assert_eq!(grid.occupied_count(), 1);
        assert_eq!(fallen[0][0].position(), (3, 11));
    }

    #[test]
    fn test_untouched_columns_stay_put() {
        let mut grid = Grid::new();
        put(&mut grid, 1, 5, BlockColor::Red);
        put(&mut grid, 2, 5, BlockColor::Red);

        let fallen = compact(&mut grid, &[(2, 6)]);
        assert!(grid.is_occupied(1, 5));
        assert!(grid.is_occupied(2, 6));
        assert_eq!(fallen.len(), 1);
    }
}
