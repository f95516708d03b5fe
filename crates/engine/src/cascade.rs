//! Connected-group cascades
//!
//! After a full line is injected, same-color neighbours may form groups. This
//! module walks the whole grid to collect every qualifying group, removes them,
//! and repeats, because each removal drops blocks into new adjacencies.

use elevatris_core::grid::GRID_SIZE;
use elevatris_core::types::{NUM_COLUMNS, NUM_ROWS};
use elevatris_core::{Block, FallenBlocks, GameState};
use serde::Serialize;

/// One removal round of a cascade
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadePass {
    /// Groups removed in this pass
    pub removed: Vec<Vec<Block>>,
    /// Blocks that dropped afterwards, grouped by column
    pub fallen: FallenBlocks,
}

/// Counts for the journal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CascadeSummary {
    pub passes: usize,
    pub groups: usize,
    pub blocks: usize,
}

impl CascadeSummary {
    pub fn from_passes(passes: &[CascadePass]) -> Self {
        Self {
            passes: passes.len(),
            groups: passes.iter().map(|p| p.removed.len()).sum(),
            blocks: passes
                .iter()
                .flat_map(|p| p.removed.iter())
                .map(Vec::len)
                .sum(),
        }
    }
}

/// Every distinct qualifying group currently on the grid.
///
/// Cells are seeded bottom-to-top, right-to-left. A cell that already belongs
/// to a found group is not seeded again, so each group appears once.
pub fn find_connected_groups(game: &mut GameState) -> Vec<Vec<Block>> {
    let width = NUM_COLUMNS as usize;
    let mut claimed = [false; GRID_SIZE];
    let mut groups = Vec::new();

    for row in (0..NUM_ROWS as i8).rev() {
        for column in (0..NUM_COLUMNS as i8).rev() {
            let idx = row as usize * width + column as usize;
            if claimed[idx] || !game.grid().is_occupied(column, row) {
                continue;
            }
            if let Some(group) = game.connected_blocks_from(column, row) {
                for block in &group {
                    claimed[block.row as usize * width + block.column as usize] = true;
                }
                groups.push(group);
            }
        }
    }

    groups
}

/// Remove qualifying groups until none remain.
///
/// Each pass removes every group found on the current grid at once, then
/// rescans the compacted grid.
pub fn resolve_connected_groups(game: &mut GameState) -> Vec<CascadePass> {
    let mut passes = Vec::new();

    loop {
        let groups = find_connected_groups(game);
        if groups.is_empty() {
            break;
        }
        let all: Vec<Block> = groups.iter().flatten().cloned().collect();
        let fallen = game.remove_specific_blocks(&all);
        passes.push(CascadePass {
            removed: groups,
            fallen,
        });
    }

    passes
}

#[cfg(test)]
mod tests {
    use super::*;
    use elevatris_core::types::BlockColor;

    fn put(game: &mut GameState, column: i8, row: i8, color: BlockColor) {
        game.grid_mut()
            .set(column, row, Block::new(column, row, color))
            .unwrap();
    }

    #[test]
    fn test_find_groups_once_each() {
        let mut game = GameState::new(1);
        put(&mut game, 0, 19, BlockColor::Red);
        put(&mut game, 1, 19, BlockColor::Red);
        put(&mut game, 2, 19, BlockColor::Blue);
        put(&mut game, 3, 19, BlockColor::Blue);
        put(&mut game, 3, 18, BlockColor::Blue);
        put(&mut game, 5, 19, BlockColor::Teal);

        let groups = find_connected_groups(&mut game);
        assert_eq!(groups.len(), 2);
        let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![3, 2]);
    }

    #[test]
    fn test_resolve_repeats_until_stable() {
        let mut game = GameState::new(1);
        // Column 0: Yellow on top of a Red pair; the Red pair goes first,
        // then Yellow lands next to the Yellow in column 1.
        put(&mut game, 0, 17, BlockColor::Yellow);
        put(&mut game, 0, 18, BlockColor::Red);
        put(&mut game, 0, 19, BlockColor::Red);
        put(&mut game, 1, 19, BlockColor::Yellow);

        let passes = resolve_connected_groups(&mut game);
        assert_eq!(passes.len(), 2);
        assert_eq!(passes[0].removed, vec![vec![
            Block::new(0, 18, BlockColor::Red),
            Block::new(0, 19, BlockColor::Red),
        ]]);
        assert_eq!(passes[0].fallen, vec![vec![Block::new(0, 19, BlockColor::Yellow)]]);
        assert_eq!(game.grid().occupied_count(), 0);

        let summary = CascadeSummary::from_passes(&passes);
        assert_eq!(summary, CascadeSummary { passes: 2, groups: 2, blocks: 4 });
    }

    #[test]
    fn test_no_groups_no_passes() {
        let mut game = GameState::new(1);
        put(&mut game, 0, 19, BlockColor::Red);
        put(&mut game, 1, 19, BlockColor::Blue);
        assert!(resolve_connected_groups(&mut game).is_empty());
        assert_eq!(game.grid().occupied_count(), 2);
    }
}
