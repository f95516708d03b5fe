//! Line removal and compaction tests

use elevatris::core::{Block, GameState};
use elevatris::types::{BlockColor, GameEvent, NUM_COLUMNS};

fn playing() -> GameState {
    let mut game = GameState::new(1);
    game.begin_game();
    game.take_events();
    game
}

fn fill_row(game: &mut GameState, row: i8, color: BlockColor) {
    for column in 0..NUM_COLUMNS as i8 {
        game.grid_mut()
            .set(column, row, Block::new(column, row, color))
            .unwrap();
    }
}

fn put(game: &mut GameState, column: i8, row: i8, color: BlockColor) {
    game.grid_mut()
        .set(column, row, Block::new(column, row, color))
        .unwrap();
}

#[test]
fn test_no_full_rows_is_noop() {
    let mut game = playing();
    put(&mut game, 0, 19, BlockColor::Red);
    let before = game.grid().clone();

    let clear = game.remove_completed_lines();
    assert!(clear.is_empty());
    assert!(clear.fallen_blocks.is_empty());
    assert_eq!(game.grid(), &before);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_rows_reported_bottom_to_top() {
    let mut game = playing();
    fill_row(&mut game, 19, BlockColor::Red);
    fill_row(&mut game, 17, BlockColor::Blue);
    put(&mut game, 3, 18, BlockColor::Teal);

    let clear = game.remove_completed_lines();
    assert_eq!(clear.lines(), 2);
    assert!(clear.lines_removed[0].iter().all(|b| b.row == 19));
    assert!(clear.lines_removed[1].iter().all(|b| b.row == 17));
    assert_eq!(game.score(), 20);

    // The lone block had one removed row under it
    assert_eq!(game.grid().get(3, 19).map(|b| b.color), Some(BlockColor::Teal));
    assert_eq!(game.grid().occupied_count(), 1);
    assert_eq!(clear.fallen_blocks, vec![vec![Block::new(3, 19, BlockColor::Teal)]]);
}

#[test]
fn test_column_order_is_preserved_and_gaps_stay() {
    let mut game = playing();
    fill_row(&mut game, 19, BlockColor::Red);
    put(&mut game, 6, 18, BlockColor::Yellow);
    // Gap at row 17
    put(&mut game, 6, 16, BlockColor::Purple);
    put(&mut game, 6, 15, BlockColor::Orange);

    let clear = game.remove_completed_lines();
    assert_eq!(clear.lines(), 1);

    let column: Vec<(i8, BlockColor)> = game
        .grid()
        .blocks()
        .filter(|b| b.column == 6)
        .map(|b| (b.row, b.color))
        .collect();
    assert_eq!(
        column,
        vec![
            (16, BlockColor::Orange),
            (17, BlockColor::Purple),
            (19, BlockColor::Yellow),
        ]
    );

    // Fallen blocks for the column, in their new positions, bottom first
    let fallen: Vec<(i8, i8)> = clear.fallen_blocks[0].iter().map(Block::position).collect();
    assert_eq!(fallen, vec![(6, 19), (6, 17), (6, 16)]);
}

#[test]
fn test_block_count_drops_by_width_per_line() {
    let mut game = playing();
    for row in 16..20 {
        fill_row(&mut game, row, BlockColor::Blue);
    }
    put(&mut game, 0, 15, BlockColor::Red);
    put(&mut game, 9, 14, BlockColor::Red);
    let before = game.grid().occupied_count();

    let clear = game.remove_completed_lines();
    assert_eq!(clear.lines(), 4);
    assert_eq!(
        game.grid().occupied_count(),
        before - 4 * NUM_COLUMNS as usize
    );
    assert_eq!(game.grid().get(0, 19).map(|b| b.color), Some(BlockColor::Red));
    assert_eq!(game.grid().get(9, 18).map(|b| b.color), Some(BlockColor::Red));
}

#[test]
fn test_level_threshold_crossed_by_lines() {
    let mut game = playing();
    // 50 lines at level 1 reach the first threshold of 500
    for _ in 0..50 {
        fill_row(&mut game, 19, BlockColor::Blue);
        game.remove_completed_lines();
    }
    assert_eq!(game.score(), 500);
    assert_eq!(game.level(), 2);
    assert_eq!(game.take_events(), vec![GameEvent::LevelUp { level: 2 }]);
}
