//! Connectivity module - 4-directional flood fill over the grid
//!
//! A scan marks every block reachable from a seed through occupied,
//! adjacency-matching neighbours (up, down, left, right), collects the marked
//! set, and clears the marks again. The three steps only run inside
//! [`connected_group`], whose [`MarkScope`] guard unmarks the whole grid on
//! every exit path, so no block is left marked between scans.

use arrayvec::ArrayVec;

use crate::grid::GRID_SIZE;
use crate::{Block, Grid, Rules};

const NEIGHBOURS_4: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Holds the grid for the duration of one scan and clears all marks on drop
struct MarkScope<'a> {
    grid: &'a mut Grid,
}

impl<'a> MarkScope<'a> {
    fn new(grid: &'a mut Grid) -> Self {
        Self { grid }
    }
}

impl Drop for MarkScope<'_> {
    fn drop(&mut self) {
        unmark_all(self.grid);
    }
}

/// Group containing the block at (column, row), if it reaches `rules.min_group_size`.
///
/// Blocks come back in row-major order with their marks cleared, so the same
/// group found from two different seeds compares equal. An empty or
/// out-of-bounds seed yields `None`.
pub fn connected_group(grid: &mut Grid, column: i8, row: i8, rules: &Rules) -> Option<Vec<Block>> {
    let mut scope = MarkScope::new(grid);
    let found = mark_connected_from(&mut *scope.grid, column, row, rules);
    if found == 0 || found < rules.min_group_size {
        return None;
    }
    Some(marked_blocks(&*scope.grid))
}

/// Mark every block connected to the seed; returns how many were marked
fn mark_connected_from(grid: &mut Grid, column: i8, row: i8, rules: &Rules) -> usize {
    let seed_color = match grid.get_mut(column, row) {
        Some(seed) => {
            seed.marked = true;
            seed.color
        }
        None => return 0,
    };

    // Each cell is pushed at most once (it is marked before the push).
    let mut stack: ArrayVec<(i8, i8), GRID_SIZE> = ArrayVec::new();
    stack.push((column, row));
    let mut count = 1;

    while let Some((c, r)) = stack.pop() {
        for (dc, dr) in NEIGHBOURS_4 {
            let (nc, nr) = (c + dc, r + dr);
            if let Some(block) = grid.get_mut(nc, nr) {
                if !block.marked && rules.adjacency.connects(seed_color, block.color) {
                    block.marked = true;
                    count += 1;
                    stack.push((nc, nr));
                }
            }
        }
    }

    count
}

/// Clean copies of every marked block, row-major
fn marked_blocks(grid: &Grid) -> Vec<Block> {
    grid.blocks()
        .filter(|b| b.marked)
        .map(|b| Block::new(b.column, b.row, b.color))
        .collect()
}

fn unmark_all(grid: &mut Grid) {
    for block in grid.blocks_mut() {
        block.marked = false;
    }
}
