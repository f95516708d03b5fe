//! Terminal input mapping.
//!
//! Turns `crossterm` key events into [`crate::types::GameAction`] values. The
//! session layer never sees raw keys, so alternative front ends only need
//! their own version of this crate.

pub mod map;

pub use elevatris_types as types;

pub use map::{handle_key_event, should_quit};
