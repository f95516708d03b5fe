//! Session layer on top of the elevatris board engine.
//!
//! The core crate only knows single transitions. This crate strings them
//! together: timers for gravity and elevation, reactions to landing and
//! game-over, connected-group cascades after each elevation, and an optional
//! JSON-lines journal of everything that happened.
//!
//! ```
//! use elevatris_engine::{Session, SessionConfig};
//! use elevatris_engine::types::GameAction;
//!
//! let mut session = Session::new(SessionConfig::default());
//! session.start();
//! session.apply_action(GameAction::Drop);
//! assert_eq!(session.game().grid().occupied_count(), 4);
//! ```

pub mod cascade;
pub mod journal;
pub mod session;

pub use elevatris_core as core;
pub use elevatris_types as types;

pub use cascade::{find_connected_groups, resolve_connected_groups, CascadePass, CascadeSummary};
pub use journal::{EventJournal, JournalRecord};
pub use session::{Elevation, Session, SessionConfig, SessionStats};
