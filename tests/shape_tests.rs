//! Shape geometry tests

use elevatris::core::{block_offsets, bottom_block_indices, Shape};
use elevatris::types::{BlockColor, Orientation, ShapeKind, NUM_COLUMNS};

#[test]
fn test_standard_shapes_have_four_blocks() {
    for kind in ShapeKind::STANDARD {
        for orientation in Orientation::ALL {
            assert_eq!(block_offsets(kind, orientation).len(), 4, "{:?} {:?}", kind, orientation);
        }
    }
}

#[test]
fn test_bottom_blocks_are_lowest_in_their_column() {
    for kind in ShapeKind::STANDARD.iter().copied().chain([ShapeKind::FullLine]) {
        for orientation in Orientation::ALL {
            let offsets = block_offsets(kind, orientation);
            let bottom = bottom_block_indices(kind, orientation);
            assert!(!bottom.is_empty());

            for &(column, row) in offsets {
                let lowest = offsets
                    .iter()
                    .filter(|o| o.0 == column)
                    .map(|o| o.1)
                    .max()
                    .unwrap();
                let is_bottom = bottom.iter().any(|&i| offsets[i] == (column, lowest));
                assert!(is_bottom, "{:?} {:?} column {} row {}", kind, orientation, column, row);
            }
        }
    }
}

#[test]
fn test_full_line_tables() {
    let vertical = block_offsets(ShapeKind::FullLine, Orientation::Zero);
    assert_eq!(vertical.len(), NUM_COLUMNS as usize);
    assert!(vertical.iter().all(|o| o.0 == 0));
    assert_eq!(vertical, block_offsets(ShapeKind::FullLine, Orientation::OneEighty));
    assert_eq!(bottom_block_indices(ShapeKind::FullLine, Orientation::Zero), &[NUM_COLUMNS as usize - 1]);

    let horizontal = block_offsets(ShapeKind::FullLine, Orientation::Ninety);
    assert!(horizontal.iter().all(|o| o.1 == 0));
    assert_eq!(horizontal, block_offsets(ShapeKind::FullLine, Orientation::TwoSeventy));
    assert_eq!(
        bottom_block_indices(ShapeKind::FullLine, Orientation::Ninety).len(),
        NUM_COLUMNS as usize
    );
}

#[test]
fn test_rotation_recomputes_positions_from_pivot() {
    let mut shape = Shape::new(ShapeKind::Line, 4, 2, Orientation::Zero, BlockColor::Teal);
    let vertical: Vec<(i8, i8)> = shape.blocks().iter().map(|b| b.position()).collect();
    assert_eq!(vertical, vec![(4, 2), (4, 3), (4, 4), (4, 5)]);

    shape.rotate_clockwise();
    assert_eq!(shape.orientation(), Orientation::Ninety);
    let horizontal: Vec<(i8, i8)> = shape.blocks().iter().map(|b| b.position()).collect();
    assert_eq!(horizontal, vec![(3, 2), (4, 2), (5, 2), (6, 2)]);

    shape.rotate_counter_clockwise();
    let back: Vec<(i8, i8)> = shape.blocks().iter().map(|b| b.position()).collect();
    assert_eq!(back, vertical);
}

#[test]
fn test_four_rotations_return_home() {
    for kind in ShapeKind::STANDARD {
        let mut shape = Shape::new(kind, 5, 5, Orientation::Zero, BlockColor::Purple);
        let start = shape.blocks().to_vec();
        for _ in 0..4 {
            shape.rotate_clockwise();
        }
        assert_eq!(shape.blocks(), &start[..]);
    }
}

#[test]
fn test_moves_keep_shape_rigid() {
    let mut shape = Shape::new(ShapeKind::T, 4, 0, Orientation::Zero, BlockColor::Red);
    let before: Vec<(i8, i8)> = shape.blocks().iter().map(|b| b.position()).collect();

    shape.lower_by_one_row();
    shape.shift_by(2, 0);
    shape.raise_by_one_row();
    let after: Vec<(i8, i8)> = shape.blocks().iter().map(|b| b.position()).collect();

    for (a, b) in before.iter().zip(&after) {
        assert_eq!((a.0 + 2, a.1), *b);
    }
    assert_eq!((shape.column(), shape.row()), (6, 0));
}

#[test]
fn test_full_line_spans_row() {
    let colors = [BlockColor::Red; NUM_COLUMNS as usize];
    let line = Shape::full_line(0, 19, colors);
    assert_eq!(line.kind(), ShapeKind::FullLine);
    let columns: Vec<i8> = line.blocks().iter().map(|b| b.column).collect();
    assert_eq!(columns, (0..NUM_COLUMNS as i8).collect::<Vec<_>>());
    assert!(line.blocks().iter().all(|b| b.row == 19));
}
