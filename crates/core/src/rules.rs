//! Tunable rule constants
//!
//! Defaults reproduce the reference behavior. The session driver fills these
//! from environment variables; tests build them directly.

use elevatris_types::{BlockColor, LEVEL_THRESHOLD, MIN_CONNECTED_GROUP, POINTS_PER_LINE};

/// Which neighbours a connectivity scan may walk into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Adjacency {
    /// Only blocks with exactly the seed's color
    #[default]
    SameColor,
    /// Any occupied neighbour, regardless of color
    AnyOccupied,
}

impl Adjacency {
    pub fn connects(&self, seed: BlockColor, other: BlockColor) -> bool {
        match self {
            Adjacency::SameColor => seed == other,
            Adjacency::AnyOccupied => true,
        }
    }

    /// Parse from a config string: "color" or "any"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "color" | "same_color" => Some(Adjacency::SameColor),
            "any" | "any_occupied" => Some(Adjacency::AnyOccupied),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Smallest group returned by a connectivity scan
    pub min_group_size: usize,
    pub adjacency: Adjacency,
    pub points_per_line: u32,
    /// Level `n` ends once the score reaches `n * level_threshold`
    pub level_threshold: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_group_size: MIN_CONNECTED_GROUP,
            adjacency: Adjacency::SameColor,
            points_per_line: POINTS_PER_LINE,
            level_threshold: LEVEL_THRESHOLD,
        }
    }
}
