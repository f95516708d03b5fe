//! Terminal front end.
//!
//! Renders a session into a character framebuffer ([`fb`]), lays out the
//! well and side panel ([`game_view`]), and writes changed rows to the
//! terminal through crossterm ([`renderer`]).

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use elevatris_core as core;
pub use elevatris_engine as engine;
pub use elevatris_types as types;

pub use fb::{Cell, FrameBuffer, Style};
pub use game_view::{block_style, GameView, MIN_HEIGHT, MIN_WIDTH};
pub use renderer::{encode_rows_into, TerminalRenderer};
