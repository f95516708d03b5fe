//! Game state module - the board engine
//!
//! Ties the grid, the falling and next shapes, the catalog and scoring
//! together. Every public command is a single all-or-nothing transition:
//! a rejected move, rotation or fall leaves the state exactly as it was and
//! returns `false`. Successful transitions queue a [`GameEvent`] which the
//! caller drains with [`GameState::take_events`].

use elevatris_types::{
    GameEvent, GamePhase, INITIAL_LEVEL, NUM_COLUMNS, NUM_ROWS, PREVIEW_COLUMN, PREVIEW_ROW,
    STARTING_COLUMN, STARTING_ROW,
};

use crate::connect::connected_group;
use crate::gravity::{compact, FallenBlocks, LineClear};
use crate::{Block, Grid, Rules, Shape, ShapeCatalog};

/// Complete engine state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    falling: Option<Shape>,
    next: Option<Shape>,
    catalog: ShapeCatalog,
    rules: Rules,
    phase: GamePhase,
    score: u32,
    level: u32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new engine with the given RNG seed and default rules
    pub fn new(seed: u32) -> Self {
        Self::with_rules(seed, Rules::default())
    }

    pub fn with_rules(seed: u32, rules: Rules) -> Self {
        Self {
            grid: Grid::new(),
            falling: None,
            next: None,
            catalog: ShapeCatalog::new(seed),
            rules,
            phase: GamePhase::NotStarted,
            score: 0,
            level: INITIAL_LEVEL,
            events: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access, for callers that lay out puzzles or fixtures
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn falling_shape(&self) -> Option<&Shape> {
        self.falling.as_ref()
    }

    pub fn next_shape(&self) -> Option<&Shape> {
        self.next.as_ref()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.catalog.seed()
    }

    /// Take every event queued since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Reset score and level, empty the grid and prepare the next shape
    pub fn begin_game(&mut self) {
        self.score = 0;
        self.level = INITIAL_LEVEL;
        self.grid.clear_all();
        self.falling = None;
        if self.next.is_none() {
            self.next = Some(self.catalog.random_shape(PREVIEW_COLUMN, PREVIEW_ROW));
        }
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Began);
    }

    /// Promote the pending next shape to falling and generate a new next shape.
    ///
    /// Returns false if not playing, or if the spawned shape collides (which
    /// ends the game).
    pub fn new_shape(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        let shape = match self.next.take() {
            Some(shape) => shape,
            None => self.catalog.random_shape(PREVIEW_COLUMN, PREVIEW_ROW),
        };
        self.next = Some(self.catalog.random_shape(PREVIEW_COLUMN, PREVIEW_ROW));
        self.spawn_shape(shape)
    }

    /// Make `shape` the falling shape, pivot at the start position.
    ///
    /// A shape that overlaps the grid or leaves the board on arrival ends the game.
    pub fn spawn_shape(&mut self, mut shape: Shape) -> bool {
        if !self.is_playing() {
            return false;
        }
        shape.move_to(STARTING_COLUMN, STARTING_ROW);
        if is_illegal_placement(&self.grid, &shape) {
            self.end_game();
            return false;
        }
        self.falling = Some(shape);
        true
    }

    pub fn move_shape_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_shape_right(&mut self) -> bool {
        self.try_shift(1)
    }

    fn try_shift(&mut self, columns: i8) -> bool {
        if !self.is_playing() {
            return false;
        }
        let Some(shape) = self.falling.as_mut() else {
            return false;
        };

        shape.shift_by(columns, 0);
        if is_illegal_placement(&self.grid, shape) {
            shape.shift_by(-columns, 0);
            return false;
        }

        self.events.push(GameEvent::ShapeMoved);
        true
    }

    /// Rotate the falling shape clockwise, unless any block would collide
    pub fn rotate_shape(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        let Some(shape) = self.falling.as_mut() else {
            return false;
        };

        shape.rotate_clockwise();
        if is_illegal_placement(&self.grid, shape) {
            shape.rotate_counter_clockwise();
            return false;
        }

        self.events.push(GameEvent::ShapeMoved);
        true
    }

    /// Lower the falling shape one row, or land it if a bottom block is resting.
    ///
    /// Returns true only when the shape moved.
    pub fn let_shape_fall(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        let Some(shape) = self.falling.as_ref() else {
            return false;
        };

        // Elevation can push landed blocks into the falling shape.
        if is_illegal_placement(&self.grid, shape) {
            self.end_game();
            return false;
        }

        if touches_down(&self.grid, shape) {
            self.settle_shape();
            return false;
        }

        if let Some(shape) = self.falling.as_mut() {
            shape.lower_by_one_row();
        }
        self.events.push(GameEvent::ShapeMoved);
        true
    }

    /// Lower the falling shape until it rests, then land it.
    ///
    /// No move events fire for the intermediate rows.
    pub fn drop_shape(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        let Some(shape) = self.falling.as_mut() else {
            return false;
        };

        if is_illegal_placement(&self.grid, shape) {
            self.end_game();
            return false;
        }

        while !touches_down(&self.grid, shape) {
            shape.lower_by_one_row();
        }

        self.events.push(GameEvent::ShapeDropped);
        self.settle_shape();
        true
    }

    /// Move every block of the falling shape into the grid
    fn settle_shape(&mut self) {
        let Some(shape) = self.falling.take() else {
            return;
        };
        for block in shape.into_blocks() {
            let (column, row) = block.position();
            // Placement was validated before landing; nothing can fall out here.
            let _ = self.grid.set(column, row, block);
        }
        self.events.push(GameEvent::ShapeLanded);
    }

    fn end_game(&mut self) {
        self.phase = GamePhase::GameOver;
        self.falling = None;
        self.events.push(GameEvent::Ended);
    }

    /// Remove every full row, score it, and compact the columns
    pub fn remove_completed_lines(&mut self) -> LineClear {
        let mut lines_removed = Vec::new();
        let mut removed_cells = Vec::new();

        for row in (0..NUM_ROWS as i8).rev() {
            if !self.grid.is_row_full(row) {
                continue;
            }
            let blocks: Vec<Block> = (0..NUM_COLUMNS as i8)
                .filter_map(|column| self.grid.take(column, row))
                .collect();
            removed_cells.extend(blocks.iter().map(Block::position));
            lines_removed.push(blocks);
        }

        if lines_removed.is_empty() {
            return LineClear::default();
        }

        self.award_lines(lines_removed.len() as u32);
        let fallen_blocks = compact(&mut self.grid, &removed_cells);

        LineClear {
            lines_removed,
            fallen_blocks,
        }
    }

    fn award_lines(&mut self, lines: u32) {
        let points = lines * self.rules.points_per_line * self.level;
        self.score = self.score.saturating_add(points);
        if self.score >= self.level * self.rules.level_threshold {
            self.level += 1;
            self.events.push(GameEvent::LevelUp { level: self.level });
        }
    }

    /// Empty the grid, returning the removed blocks grouped by row
    pub fn remove_all_blocks(&mut self) -> Vec<Vec<Block>> {
        self.grid.clear_all()
    }

    /// Shift every landed block up one row to free the bottom row.
    ///
    /// Refused (false, nothing changes) while row 0 holds any block.
    pub fn elevate_blocks(&mut self) -> bool {
        if !self.grid.row_is_empty(0) {
            return false;
        }
        for row in 1..NUM_ROWS as i8 {
            for column in 0..NUM_COLUMNS as i8 {
                self.grid.move_block((column, row), (column, row - 1));
            }
        }
        true
    }

    /// Merge a full-width line of random colors into the bottom row.
    ///
    /// Placement is unconditional; call after a successful
    /// [`GameState::elevate_blocks`]. Returns the placed blocks.
    pub fn new_full_line(&mut self) -> Vec<Block> {
        let line = self.catalog.full_line(NUM_ROWS as i8 - 1);
        let placed = line.blocks().to_vec();
        for block in line.into_blocks() {
            let (column, row) = block.position();
            let _ = self.grid.set(column, row, block);
        }
        placed
    }

    /// Connected group holding the block at (column, row), if it is large enough.
    ///
    /// Marks are set and cleared within the call.
    pub fn connected_blocks_from(&mut self, column: i8, row: i8) -> Option<Vec<Block>> {
        connected_group(&mut self.grid, column, row, &self.rules)
    }

    /// Remove the blocks at the given blocks' positions and compact their columns.
    ///
    /// Positions that are already empty are skipped.
    pub fn remove_specific_blocks(&mut self, blocks: &[Block]) -> FallenBlocks {
        let removed: Vec<(i8, i8)> = blocks
            .iter()
            .filter_map(|b| self.grid.take(b.column, b.row))
            .map(|b| b.position())
            .collect();
        compact(&mut self.grid, &removed)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

/// True if any block is out of bounds or on an occupied cell
fn is_illegal_placement(grid: &Grid, shape: &Shape) -> bool {
    shape
        .blocks()
        .iter()
        .any(|b| !grid.is_vacant(b.column, b.row))
}

/// True if any bottom block rests on the floor or on a landed block
fn touches_down(grid: &Grid, shape: &Shape) -> bool {
    shape
        .bottom_blocks()
        .any(|b| b.row + 1 >= NUM_ROWS as i8 || grid.is_occupied(b.column, b.row + 1))
}
