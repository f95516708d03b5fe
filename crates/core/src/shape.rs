//! Shape module - piece geometry and orientation tables
//!
//! Every variant is described by two pure lookups indexed by orientation:
//!
//! - [`block_offsets`]: `(column_diff, row_diff)` of each block relative to the
//!   shape's pivot `(column, row)`
//! - [`bottom_block_indices`]: which blocks are lowest in their column, the only
//!   ones checked against the grid when testing a fall
//!
//! Rotating or translating a shape rewrites every block from the table, so
//! block positions never drift from the pivot.

use elevatris_types::{BlockColor, Orientation, ShapeKind, NUM_COLUMNS};

use crate::Block;

/// Offset of a single block relative to the shape pivot
pub type BlockOffset = (i8, i8);

const LINE_LEN: usize = NUM_COLUMNS as usize;

/// Get the block offsets for a shape kind and orientation
pub fn block_offsets(kind: ShapeKind, orientation: Orientation) -> &'static [BlockOffset] {
    match kind {
        ShapeKind::Square => &SQUARE,
        ShapeKind::T => t_offsets(orientation),
        ShapeKind::Line => line_offsets(orientation),
        ShapeKind::L => l_offsets(orientation),
        ShapeKind::J => j_offsets(orientation),
        ShapeKind::S => s_offsets(orientation),
        ShapeKind::Z => z_offsets(orientation),
        ShapeKind::FullLine => full_line_offsets(orientation),
    }
}

/// Get the indices of the bottom blocks for a shape kind and orientation
pub fn bottom_block_indices(kind: ShapeKind, orientation: Orientation) -> &'static [usize] {
    use Orientation::*;

    match (kind, orientation) {
        (ShapeKind::Square, _) => &[2, 3],

        (ShapeKind::T, Zero) => &[1, 2, 3],
        (ShapeKind::T, Ninety) => &[0, 3],
        (ShapeKind::T, OneEighty) => &[0, 1, 3],
        (ShapeKind::T, TwoSeventy) => &[0, 3],

        (ShapeKind::Line, Zero | OneEighty) => &[3],
        (ShapeKind::Line, Ninety | TwoSeventy) => &[0, 1, 2, 3],

        (ShapeKind::L, Zero) => &[2, 3],
        (ShapeKind::L, Ninety) => &[0, 1, 3],
        (ShapeKind::L, OneEighty) => &[0, 3],
        (ShapeKind::L, TwoSeventy) => &[0, 1, 2],

        (ShapeKind::J, Zero) => &[2, 3],
        (ShapeKind::J, Ninety) => &[0, 1, 2],
        (ShapeKind::J, OneEighty) => &[0, 3],
        (ShapeKind::J, TwoSeventy) => &[0, 1, 3],

        (ShapeKind::S | ShapeKind::Z, Zero | OneEighty) => &[1, 3],
        (ShapeKind::S | ShapeKind::Z, Ninety | TwoSeventy) => &[0, 2, 3],

        // A vertical full line rests on its last block; a horizontal one on all of them.
        (ShapeKind::FullLine, Zero | OneEighty) => &FULL_LINE_LAST,
        (ShapeKind::FullLine, Ninety | TwoSeventy) => &FULL_LINE_ALL,
    }
}

/// Square shape (same for all orientations)
const SQUARE: [BlockOffset; 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

/// T shapes
fn t_offsets(orientation: Orientation) -> &'static [BlockOffset] {
    match orientation {
        Orientation::Zero => &[(1, 0), (0, 1), (1, 1), (2, 1)],
        Orientation::Ninety => &[(2, 1), (1, 0), (1, 1), (1, 2)],
        Orientation::OneEighty => &[(1, 2), (0, 1), (1, 1), (2, 1)],
        Orientation::TwoSeventy => &[(0, 1), (1, 0), (1, 1), (1, 2)],
    }
}

/// Line shapes: vertical at 0/180, horizontal at 90/270
fn line_offsets(orientation: Orientation) -> &'static [BlockOffset] {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => &[(0, 0), (0, 1), (0, 2), (0, 3)],
        Orientation::Ninety | Orientation::TwoSeventy => &[(-1, 0), (0, 0), (1, 0), (2, 0)],
    }
}

/// L shapes
fn l_offsets(orientation: Orientation) -> &'static [BlockOffset] {
    match orientation {
        Orientation::Zero => &[(0, 0), (0, 1), (0, 2), (1, 2)],
        Orientation::Ninety => &[(1, 1), (0, 1), (-1, 1), (-1, 2)],
        Orientation::OneEighty => &[(0, 2), (0, 1), (0, 0), (-1, 0)],
        Orientation::TwoSeventy => &[(-1, 1), (0, 1), (1, 1), (1, 0)],
    }
}

/// J shapes
fn j_offsets(orientation: Orientation) -> &'static [BlockOffset] {
    match orientation {
        Orientation::Zero => &[(1, 0), (1, 1), (1, 2), (0, 2)],
        Orientation::Ninety => &[(2, 1), (1, 1), (0, 1), (0, 0)],
        Orientation::OneEighty => &[(0, 2), (0, 1), (0, 0), (1, 0)],
        Orientation::TwoSeventy => &[(0, 0), (1, 0), (2, 0), (2, 1)],
    }
}

/// S shapes (two distinct orientations)
fn s_offsets(orientation: Orientation) -> &'static [BlockOffset] {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => &[(0, 0), (0, 1), (1, 1), (1, 2)],
        Orientation::Ninety | Orientation::TwoSeventy => &[(2, 0), (1, 0), (1, 1), (0, 1)],
    }
}

/// Z shapes (two distinct orientations)
fn z_offsets(orientation: Orientation) -> &'static [BlockOffset] {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => &[(1, 0), (1, 1), (0, 1), (0, 2)],
        Orientation::Ninety | Orientation::TwoSeventy => &[(-1, 0), (0, 0), (0, 1), (1, 1)],
    }
}

/// Full line shapes: a vertical line at 0/180, a horizontal line at 90/270
fn full_line_offsets(orientation: Orientation) -> &'static [BlockOffset] {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => &FULL_LINE_VERTICAL,
        Orientation::Ninety | Orientation::TwoSeventy => &FULL_LINE_HORIZONTAL,
    }
}

const FULL_LINE_VERTICAL: [BlockOffset; LINE_LEN] = full_line_table(true);
const FULL_LINE_HORIZONTAL: [BlockOffset; LINE_LEN] = full_line_table(false);
const FULL_LINE_ALL: [usize; LINE_LEN] = full_line_indices();
const FULL_LINE_LAST: [usize; 1] = [LINE_LEN - 1];

const fn full_line_table(vertical: bool) -> [BlockOffset; LINE_LEN] {
    let mut out = [(0, 0); LINE_LEN];
    let mut i = 0;
    while i < LINE_LEN {
        out[i] = if vertical { (0, i as i8) } else { (i as i8, 0) };
        i += 1;
    }
    out
}

const fn full_line_indices() -> [usize; LINE_LEN] {
    let mut out = [0; LINE_LEN];
    let mut i = 0;
    while i < LINE_LEN {
        out[i] = i;
        i += 1;
    }
    out
}

/// A piece: its blocks plus the pivot and orientation they were derived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    kind: ShapeKind,
    orientation: Orientation,
    column: i8,
    row: i8,
    blocks: Vec<Block>,
}

impl Shape {
    /// Create a single-color shape with its pivot at (column, row)
    pub fn new(
        kind: ShapeKind,
        column: i8,
        row: i8,
        orientation: Orientation,
        color: BlockColor,
    ) -> Self {
        let blocks = block_offsets(kind, orientation)
            .iter()
            .map(|&(dc, dr)| Block::new(column + dc, row + dr, color))
            .collect();
        Self {
            kind,
            orientation,
            column,
            row,
            blocks,
        }
    }

    /// Create a horizontal full-width line whose leftmost block sits at (column, row).
    ///
    /// Each block takes its own color, left to right.
    pub fn full_line(column: i8, row: i8, colors: [BlockColor; LINE_LEN]) -> Self {
        let orientation = Orientation::Ninety;
        let blocks = block_offsets(ShapeKind::FullLine, orientation)
            .iter()
            .zip(colors)
            .map(|(&(dc, dr), color)| Block::new(column + dc, row + dr, color))
            .collect();
        Self {
            kind: ShapeKind::FullLine,
            orientation,
            column,
            row,
            blocks,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Pivot column
    pub fn column(&self) -> i8 {
        self.column
    }

    /// Pivot row
    pub fn row(&self) -> i8 {
        self.row
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Blocks that decide whether the shape can fall another row
    pub fn bottom_blocks(&self) -> impl Iterator<Item = &Block> {
        bottom_block_indices(self.kind, self.orientation)
            .iter()
            .map(move |&i| &self.blocks[i])
    }

    /// Hand the blocks over to a new owner (landing)
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    pub fn rotate_clockwise(&mut self) {
        self.rotate_to(self.orientation.rotate_clockwise());
    }

    pub fn rotate_counter_clockwise(&mut self) {
        self.rotate_to(self.orientation.rotate_counter_clockwise());
    }

    fn rotate_to(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.rebuild_positions();
    }

    /// Translate the pivot (and every block with it)
    pub fn shift_by(&mut self, columns: i8, rows: i8) {
        self.column += columns;
        self.row += rows;
        self.rebuild_positions();
    }

    /// Place the pivot at (column, row)
    pub fn move_to(&mut self, column: i8, row: i8) {
        self.column = column;
        self.row = row;
        self.rebuild_positions();
    }

    pub fn lower_by_one_row(&mut self) {
        self.shift_by(0, 1);
    }

    pub fn raise_by_one_row(&mut self) {
        self.shift_by(0, -1);
    }

    fn rebuild_positions(&mut self) {
        let offsets = block_offsets(self.kind, self.orientation);
        for (block, &(dc, dr)) in self.blocks.iter_mut().zip(offsets) {
            block.column = self.column + dc;
            block.row = self.row + dr;
        }
    }
}
