//! Elevatris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benchmarks share a single import path.

pub mod cli;

pub use elevatris_core as core;
pub use elevatris_engine as engine;
pub use elevatris_input as input;
pub use elevatris_term as term;
pub use elevatris_types as types;
