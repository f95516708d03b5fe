//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the board engine: grid storage, shape geometry, collision
//! and landing, line removal, elevation and connected-group detection. It has
//! **zero dependencies** on UI, timing, or I/O:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Synchronous**: Every call runs to completion; callers drive fall and
//!   elevation steps themselves
//! - **All-or-nothing**: Rejected transitions leave state untouched
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 block storage with position synchronization
//! - [`shape`]: Shape variants, orientation tables and rotation
//! - [`catalog`]: Random shape and color selection
//! - [`game_state`]: The engine: lifecycle, movement, landing, lines, elevation
//! - [`connect`]: Flood-fill connected-group scan
//! - [`gravity`]: Per-column compaction after removals
//! - [`rules`]: Tunable thresholds and scoring constants
//!
//! # Example
//!
//! ```
//! use elevatris_core::GameState;
//! use elevatris_core::types::GameEvent;
//!
//! let mut game = GameState::new(12345);
//! game.begin_game();
//! game.new_shape();
//!
//! game.move_shape_right();
//! game.drop_shape();
//!
//! let events = game.take_events();
//! assert_eq!(events.last(), Some(&GameEvent::ShapeLanded));
//! assert!(game.remove_completed_lines().is_empty());
//! ```

pub mod block;
pub mod catalog;
pub mod connect;
pub mod game_state;
pub mod gravity;
pub mod grid;
pub mod rng;
pub mod rules;
pub mod shape;

pub use elevatris_types as types;

// Re-export commonly used types for convenience
pub use block::Block;
pub use catalog::ShapeCatalog;
pub use game_state::GameState;
pub use gravity::{FallenBlocks, LineClear};
pub use grid::Grid;
pub use rng::SimpleRng;
pub use rules::{Adjacency, Rules};
pub use shape::{block_offsets, bottom_block_indices, Shape};
