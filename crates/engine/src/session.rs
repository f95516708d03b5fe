//! Session driver
//!
//! Owns a [`GameState`] and reacts to its events the way a game controller
//! would: landing a shape clears lines and spawns the next one, a level up
//! shortens both timers, and a finished game restarts if configured to.
//! Time is fed in explicitly through [`Session::advance`] so the driver runs
//! the same under a terminal loop, a benchmark or a test.

use elevatris_core::types::{
    GameAction, GameEvent, GamePhase, ELEVATION_LENGTH_LEVEL_ONE_MS, TICK_LENGTH_LEVEL_ONE_MS,
};
use elevatris_core::{Adjacency, Block, GameState, Rules};

use crate::cascade::{resolve_connected_groups, CascadePass, CascadeSummary};
use crate::journal::{EventJournal, JournalRecord};

/// Shortest tick the level curve reaches
pub const MIN_TICK_MS: u32 = 50;

/// Shortest elevation interval the level curve reaches
pub const MIN_ELEVATION_MS: u32 = 300;

/// Session configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub seed: u32,
    pub rules: Rules,
    pub tick_ms: u32,
    pub elevation_ms: u32,
    pub log_path: Option<String>,
    /// Start a new game as soon as one ends
    pub auto_restart: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            rules: Rules::default(),
            tick_ms: TICK_LENGTH_LEVEL_ONE_MS,
            elevation_ms: ELEVATION_LENGTH_LEVEL_ONE_MS,
            log_path: None,
            auto_restart: true,
        }
    }
}

impl SessionConfig {
    /// Create from `ELEVATRIS_*` environment variables.
    ///
    /// Unset or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SessionConfig::from_env`] with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u32>().ok());

        let seed = parsed("ELEVATRIS_SEED").unwrap_or(defaults.seed);
        let tick_ms = parsed("ELEVATRIS_TICK_MS")
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.tick_ms);
        let elevation_ms = parsed("ELEVATRIS_ELEVATION_MS")
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.elevation_ms);

        let min_group_size = parsed("ELEVATRIS_MIN_GROUP")
            .filter(|&n| n > 0)
            .map(|n| n as usize)
            .unwrap_or(defaults.rules.min_group_size);
        let adjacency = lookup("ELEVATRIS_ADJACENCY")
            .and_then(|s| Adjacency::from_str(&s))
            .unwrap_or(defaults.rules.adjacency);

        let log_path = lookup("ELEVATRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let auto_restart = lookup("ELEVATRIS_AUTO_RESTART")
            .and_then(|s| match s.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Some(true),
                "0" | "false" | "no" | "off" => Some(false),
                _ => None,
            })
            .unwrap_or(defaults.auto_restart);

        Self {
            seed,
            rules: Rules {
                min_group_size,
                adjacency,
                ..defaults.rules
            },
            tick_ms,
            elevation_ms,
            log_path,
            auto_restart,
        }
    }
}

/// Outcome of an accepted elevation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Elevation {
    /// The injected bottom line
    pub line: Vec<Block>,
    pub passes: Vec<CascadePass>,
}

/// Running totals across every game in the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub games: u32,
    pub lines_cleared: u32,
    pub groups_removed: u32,
    pub elevations: u32,
    pub refused_elevations: u32,
}

#[derive(Debug)]
pub struct Session {
    game: GameState,
    config: SessionConfig,
    tick_ms: u32,
    elevation_ms: u32,
    since_tick: u32,
    since_elevation: u32,
    paused: bool,
    stats: SessionStats,
    journal: EventJournal,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_journal(config, EventJournal::disabled())
    }

    pub fn with_journal(config: SessionConfig, journal: EventJournal) -> Self {
        Self {
            game: GameState::with_rules(config.seed, config.rules),
            tick_ms: config.tick_ms,
            elevation_ms: config.elevation_ms,
            config,
            since_tick: 0,
            since_elevation: 0,
            paused: false,
            stats: SessionStats::default(),
            journal,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Direct engine access, for fixtures and scripted play
    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    pub fn elevation_ms(&self) -> u32 {
        self.elevation_ms
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn journal(&self) -> &EventJournal {
        &self.journal
    }

    /// Begin the first game and spawn its first shape
    pub fn start(&mut self) {
        self.game.begin_game();
        self.game.new_shape();
        self.process_events();
    }

    /// Clear the board and start over, whatever the current phase
    pub fn restart(&mut self) {
        self.paused = false;
        self.game.remove_all_blocks();
        self.start();
    }

    /// Apply a player action.
    ///
    /// Returns true if the action changed anything. Everything except
    /// `Pause` and `Restart` is ignored while paused.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Restart => {
                self.restart();
                return true;
            }
            GameAction::Pause => {
                if !self.game.is_playing() {
                    return false;
                }
                self.paused = !self.paused;
                return true;
            }
            _ if self.paused => return false,
            _ => {}
        }

        let changed = match action {
            GameAction::Rotate => self.game.rotate_shape(),
            GameAction::MoveLeft => self.game.move_shape_left(),
            GameAction::MoveRight => self.game.move_shape_right(),
            GameAction::Drop => self.game.drop_shape(),
            GameAction::Fall => return self.tick(),
            GameAction::Restart | GameAction::Pause => false,
        };
        self.process_events();
        changed
    }

    /// One gravity step. Landing counts as a change even though the shape
    /// itself did not move.
    pub fn tick(&mut self) -> bool {
        if self.paused || !self.game.is_playing() {
            return false;
        }
        let moved = self.game.let_shape_fall();
        let events = self.game.take_events();
        let landed = events.contains(&GameEvent::ShapeLanded);
        self.dispatch(events);
        self.process_events();
        moved || landed
    }

    /// Raise the stack one row, inject a new bottom line, and resolve groups.
    ///
    /// `None` when paused, not playing, or when the top row is occupied.
    pub fn elevate(&mut self) -> Option<Elevation> {
        if self.paused || !self.game.is_playing() {
            return None;
        }

        if !self.game.elevate_blocks() {
            self.stats.refused_elevations += 1;
            self.journal.record(JournalRecord::Elevation { accepted: false });
            return None;
        }
        self.stats.elevations += 1;
        self.journal.record(JournalRecord::Elevation { accepted: true });

        let line = self.game.new_full_line();
        let passes = resolve_connected_groups(&mut self.game);
        if !passes.is_empty() {
            let summary = CascadeSummary::from_passes(&passes);
            self.stats.groups_removed += summary.groups as u32;
            self.journal.record(JournalRecord::Cascade { summary });
        }

        self.process_events();
        Some(Elevation { line, passes })
    }

    /// Let `elapsed_ms` of game time pass, firing every due tick and elevation
    pub fn advance(&mut self, elapsed_ms: u32) {
        if self.paused || !self.game.is_playing() {
            return;
        }

        self.since_tick = self.since_tick.saturating_add(elapsed_ms);
        self.since_elevation = self.since_elevation.saturating_add(elapsed_ms);

        while self.since_tick >= self.tick_ms && self.game.is_playing() {
            self.since_tick -= self.tick_ms;
            self.tick();
        }

        while self.since_elevation >= self.elevation_ms && self.game.is_playing() {
            self.since_elevation -= self.elevation_ms;
            self.elevate();
        }
    }

    /// Flush the journal, if any
    pub fn flush(&mut self) {
        self.journal.flush();
    }

    fn process_events(&mut self) {
        loop {
            let events = self.game.take_events();
            if events.is_empty() {
                break;
            }
            self.dispatch(events);
        }
    }

    fn dispatch(&mut self, events: Vec<GameEvent>) {
        for event in events {
            self.journal.record(JournalRecord::Event { event });
            match event {
                GameEvent::Began => self.reset_cadence(),
                GameEvent::ShapeLanded => self.on_shape_landed(),
                GameEvent::LevelUp { .. } => self.speed_up(),
                GameEvent::Ended => self.on_game_ended(),
                GameEvent::ShapeMoved | GameEvent::ShapeDropped => {}
            }
        }
    }

    fn on_shape_landed(&mut self) {
        loop {
            let clear = self.game.remove_completed_lines();
            if clear.is_empty() {
                break;
            }
            self.stats.lines_cleared += clear.lines() as u32;
            self.journal.record(JournalRecord::Lines {
                lines: clear.lines(),
                score: self.game.score(),
                level: self.game.level(),
            });
        }
        self.game.new_shape();
    }

    fn on_game_ended(&mut self) {
        self.stats.games += 1;
        if self.config.auto_restart && self.game.phase() == GamePhase::GameOver {
            self.game.remove_all_blocks();
            self.game.begin_game();
            self.game.new_shape();
        }
    }

    fn reset_cadence(&mut self) {
        self.tick_ms = self.config.tick_ms;
        self.elevation_ms = self.config.elevation_ms;
        self.since_tick = 0;
        self.since_elevation = 0;
    }

    /// Shorten both intervals. Values already at or below their floor stay put.
    fn speed_up(&mut self) {
        self.tick_ms = if self.tick_ms > 100 {
            self.tick_ms - 100
        } else if self.tick_ms > MIN_TICK_MS {
            (self.tick_ms - 50).max(MIN_TICK_MS)
        } else {
            self.tick_ms
        };
        self.elevation_ms = if self.elevation_ms >= 700 {
            self.elevation_ms - 100
        } else if self.elevation_ms > MIN_ELEVATION_MS {
            (self.elevation_ms - 50).max(MIN_ELEVATION_MS)
        } else {
            self.elevation_ms
        };
    }
}
