//! A single occupied cell.

use elevatris_types::BlockColor;

/// One block: grid position, color and the connectivity scan mark.
///
/// A block belongs to exactly one owner at a time, either the falling shape or
/// the grid. It is deliberately not `Copy`: landing moves blocks out of the
/// shape and into the grid, and removal moves them back out to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block {
    pub column: i8,
    pub row: i8,
    pub color: BlockColor,
    /// Scratch flag owned by connectivity scans; false whenever no scan is running.
    pub(crate) marked: bool,
}

impl Block {
    pub fn new(column: i8, row: i8, color: BlockColor) -> Self {
        Self {
            column,
            row,
            color,
            marked: false,
        }
    }

    pub fn position(&self) -> (i8, i8) {
        (self.column, self.row)
    }

    pub fn is_marked(&self) -> bool {
        self.marked
    }
}
