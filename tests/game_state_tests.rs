//! Board engine lifecycle and movement tests

use elevatris::core::{Block, GameState, Shape};
use elevatris::types::{
    BlockColor, GameEvent, GamePhase, Orientation, ShapeKind, NUM_COLUMNS, STARTING_COLUMN,
};

fn playing(seed: u32) -> GameState {
    let mut game = GameState::new(seed);
    game.begin_game();
    game.take_events();
    game
}

fn positions(shape: &Shape) -> Vec<(i8, i8)> {
    shape.blocks().iter().map(Block::position).collect()
}

#[test]
fn test_square_drops_to_floor() {
    let mut game = playing(1);
    let square = Shape::new(ShapeKind::Square, 0, 0, Orientation::Zero, BlockColor::Yellow);
    assert!(game.spawn_shape(square));

    assert!(game.drop_shape());
    assert!(game.falling_shape().is_none());
    assert_eq!(game.grid().occupied_count(), 4);
    let bottom: Vec<i8> = game.grid().blocks().map(|b| b.row).collect();
    assert_eq!(bottom.iter().max(), Some(&19));
    assert_eq!(
        game.grid().blocks().filter(|b| b.row == 19).count(),
        2
    );
    assert!(game.remove_completed_lines().is_empty());
}

#[test]
fn test_line_fills_gap_and_clears_row() {
    let mut game = playing(1);
    for column in 0..NUM_COLUMNS as i8 - 1 {
        game.grid_mut()
            .set(column, 19, Block::new(column, 19, BlockColor::Blue))
            .unwrap();
    }
    for column in 0..4 {
        game.grid_mut()
            .set(column, 18, Block::new(column, 18, BlockColor::Red))
            .unwrap();
    }

    let line = Shape::new(ShapeKind::Line, 0, 0, Orientation::Zero, BlockColor::Teal);
    assert!(game.spawn_shape(line));
    for _ in STARTING_COLUMN..NUM_COLUMNS as i8 - 1 {
        assert!(game.move_shape_right());
    }
    assert!(!game.move_shape_right());
    assert!(game.drop_shape());

    let clear = game.remove_completed_lines();
    assert_eq!(clear.lines(), 1);
    assert!(clear.lines_removed[0].iter().all(|b| b.row == 19));
    assert_eq!(clear.lines_removed[0].len(), NUM_COLUMNS as usize);

    // Everything above moved down by exactly one row
    for column in 0..4 {
        assert_eq!(game.grid().get(column, 19).map(|b| b.color), Some(BlockColor::Red));
        assert!(game.grid().get(column, 18).is_none());
    }
    for row in 17..20 {
        assert_eq!(game.grid().get(9, row).map(|b| b.color), Some(BlockColor::Teal));
    }
    assert!(game.grid().get(9, 16).is_none());
    assert_eq!(game.score(), 10);
}

#[test]
fn test_rejected_rotation_leaves_shape_untouched() {
    let mut game = playing(1);
    let line = Shape::new(ShapeKind::Line, 0, 0, Orientation::Zero, BlockColor::Teal);
    assert!(game.spawn_shape(line));
    while game.move_shape_left() {}
    // Vertical line at column 0: turning horizontal needs column -1
    let before = game.falling_shape().unwrap().clone();
    game.take_events();

    assert!(!game.rotate_shape());
    assert_eq!(game.falling_shape(), Some(&before));
    assert!(game.take_events().is_empty());
}

#[test]
fn test_rotation_blocked_by_landed_block() {
    let mut game = playing(1);
    let line = Shape::new(ShapeKind::Line, 0, 0, Orientation::Zero, BlockColor::Teal);
    assert!(game.spawn_shape(line));
    // Pivot (4, 0); the horizontal form needs (3, 0)
    game.grid_mut().set(3, 0, Block::new(3, 0, BlockColor::Red)).unwrap();

    let before = positions(game.falling_shape().unwrap());
    assert!(!game.rotate_shape());
    assert_eq!(positions(game.falling_shape().unwrap()), before);
    assert_eq!(game.falling_shape().unwrap().orientation(), Orientation::Zero);
}

#[test]
fn test_shape_cycle_events() {
    let mut game = GameState::new(99);
    game.begin_game();
    assert!(game.new_shape());
    assert!(game.let_shape_fall());
    assert!(game.drop_shape());

    assert_eq!(
        game.take_events(),
        vec![
            GameEvent::Began,
            GameEvent::ShapeMoved,
            GameEvent::ShapeDropped,
            GameEvent::ShapeLanded,
        ]
    );
}

#[test]
fn test_same_seed_same_shapes() {
    let mut a = playing(4242);
    let mut b = playing(4242);
    for _ in 0..20 {
        assert!(a.new_shape());
        assert!(b.new_shape());
        assert_eq!(a.falling_shape(), b.falling_shape());
        a.drop_shape();
        b.drop_shape();
        a.remove_completed_lines();
        b.remove_completed_lines();
        if !a.is_playing() {
            break;
        }
    }
    assert_eq!(a.grid(), b.grid());
}

#[test]
fn test_stacking_to_the_top_ends_game() {
    let mut game = playing(5);
    let mut spawned = 0;
    while game.new_shape() {
        game.drop_shape();
        game.remove_completed_lines();
        spawned += 1;
        assert!(spawned < 200, "game never ended");
    }

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert!(game.falling_shape().is_none());
    assert_eq!(game.take_events().last(), Some(&GameEvent::Ended));

    game.remove_all_blocks();
    game.begin_game();
    assert!(game.is_playing());
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 1);
    assert_eq!(game.grid().occupied_count(), 0);
}

#[test]
fn test_elevated_stack_into_falling_shape_ends_game() {
    let mut game = playing(1);
    let square = Shape::new(ShapeKind::Square, 0, 0, Orientation::Zero, BlockColor::Yellow);
    assert!(game.spawn_shape(square));
    // Square covers rows 0-1; a block right under it gets pushed into it
    game.grid_mut().set(4, 2, Block::new(4, 2, BlockColor::Red)).unwrap();

    assert!(game.elevate_blocks());
    game.take_events();
    assert!(!game.let_shape_fall());
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.take_events(), vec![GameEvent::Ended]);
}
