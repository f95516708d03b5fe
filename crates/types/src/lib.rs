//! Core types module - shared data structures and constants
//!
//! Everything here is plain data: the board geometry, the scoring and cadence
//! constants, and the small enums that flow between the engine, the session
//! driver and the terminal front end.
//!
//! # Board Geometry
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, row 0 is the top)
//! - **Spawn position**: column 4, row 0
//! - **Preview position**: column 12, row 1 (outside the well)
//!
//! # Cadence
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_LENGTH_LEVEL_ONE_MS` | 600 | One fall step at level 1 |
//! | `ELEVATION_LENGTH_LEVEL_ONE_MS` | 3000 | One injected row at level 1 |
//!
//! The engine never reads a clock. These values are consumed by the session
//! driver, which is told how much time elapsed by its caller.
//!
//! # Examples
//!
//! ```
//! use elevatris_types::{BlockColor, Orientation, GameAction, NUM_COLUMNS, NUM_ROWS};
//!
//! assert_eq!(Orientation::Zero.rotate_clockwise(), Orientation::Ninety);
//! assert_eq!(BlockColor::from_str("teal"), Some(BlockColor::Teal));
//! assert_eq!(GameAction::from_str("drop"), Some(GameAction::Drop));
//!
//! assert_eq!(NUM_COLUMNS, 10);
//! assert_eq!(NUM_ROWS, 20);
//! ```

use serde::Serialize;

/// Board width in cells (10 columns)
pub const NUM_COLUMNS: u8 = 10;

/// Board height in cells (20 rows)
pub const NUM_ROWS: u8 = 20;

/// Column where a falling shape's pivot is placed on spawn
pub const STARTING_COLUMN: i8 = 4;

/// Row where a falling shape's pivot is placed on spawn
pub const STARTING_ROW: i8 = 0;

/// Column of the pending next shape (to the right of the well)
pub const PREVIEW_COLUMN: i8 = 12;

/// Row of the pending next shape
pub const PREVIEW_ROW: i8 = 1;

/// Points per removed line, multiplied by the current level
pub const POINTS_PER_LINE: u32 = 10;

/// Score needed per level before the next level-up (`level * LEVEL_THRESHOLD`)
pub const LEVEL_THRESHOLD: u32 = 500;

/// Level every game starts at
pub const INITIAL_LEVEL: u32 = 1;

/// Smallest connected same-color group that qualifies for removal
pub const MIN_CONNECTED_GROUP: usize = 2;

/// Fall interval at level 1
pub const TICK_LENGTH_LEVEL_ONE_MS: u32 = 600;

/// Elevation interval at level 1
pub const ELEVATION_LENGTH_LEVEL_ONE_MS: u32 = 3000;

/// The fixed block palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Blue,
    Orange,
    Purple,
    Red,
    Teal,
    Yellow,
}

impl BlockColor {
    /// Every palette entry, in index order
    pub const ALL: [BlockColor; 6] = [
        BlockColor::Blue,
        BlockColor::Orange,
        BlockColor::Purple,
        BlockColor::Red,
        BlockColor::Teal,
        BlockColor::Yellow,
    ];

    /// Palette entry for an index, wrapping around the palette size
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index as usize) % Self::ALL.len()]
    }

    /// Parse color from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use elevatris_types::BlockColor;
    ///
    /// assert_eq!(BlockColor::from_str("Blue"), Some(BlockColor::Blue));
    /// assert_eq!(BlockColor::from_str("pink"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "blue" => Some(BlockColor::Blue),
            "orange" => Some(BlockColor::Orange),
            "purple" => Some(BlockColor::Purple),
            "red" => Some(BlockColor::Red),
            "teal" => Some(BlockColor::Teal),
            "yellow" => Some(BlockColor::Yellow),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::Blue => "blue",
            BlockColor::Orange => "orange",
            BlockColor::Purple => "purple",
            BlockColor::Red => "red",
            BlockColor::Teal => "teal",
            BlockColor::Yellow => "yellow",
        }
    }
}

/// Shape orientation in clockwise quarter turns
///
/// The rotation cycle goes: Zero → Ninety → OneEighty → TwoSeventy → Zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Zero,
    Ninety,
    OneEighty,
    TwoSeventy,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Zero,
        Orientation::Ninety,
        Orientation::OneEighty,
        Orientation::TwoSeventy,
    ];

    /// Orientation for an index, wrapping every four
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % 4) as usize]
    }

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use elevatris_types::Orientation;
    ///
    /// assert_eq!(Orientation::Zero.rotate_clockwise(), Orientation::Ninety);
    /// assert_eq!(Orientation::TwoSeventy.rotate_clockwise(), Orientation::Zero);
    /// ```
    pub fn rotate_clockwise(&self) -> Self {
        match self {
            Orientation::Zero => Orientation::Ninety,
            Orientation::Ninety => Orientation::OneEighty,
            Orientation::OneEighty => Orientation::TwoSeventy,
            Orientation::TwoSeventy => Orientation::Zero,
        }
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_counter_clockwise(&self) -> Self {
        match self {
            Orientation::Zero => Orientation::TwoSeventy,
            Orientation::Ninety => Orientation::Zero,
            Orientation::OneEighty => Orientation::Ninety,
            Orientation::TwoSeventy => Orientation::OneEighty,
        }
    }
}

/// Shape variants
///
/// The first seven are the standard tetrominoes handed out by ordinary spawns.
/// `FullLine` spans the whole board width and only comes from elevation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    T,
    Line,
    L,
    J,
    S,
    Z,
    FullLine,
}

impl ShapeKind {
    /// Variants eligible for ordinary random spawns
    pub const STANDARD: [ShapeKind; 7] = [
        ShapeKind::Square,
        ShapeKind::T,
        ShapeKind::Line,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    pub fn is_standard(&self) -> bool {
        !matches!(self, ShapeKind::FullLine)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::T => "t",
            ShapeKind::Line => "line",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::FullLine => "full_line",
        }
    }
}

/// Commands accepted from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Rotate the falling shape clockwise
    Rotate,
    /// Move the falling shape one column left
    MoveLeft,
    /// Move the falling shape one column right
    MoveRight,
    /// Drop the falling shape to its landing row
    Drop,
    /// Let the falling shape fall one row (same as a tick)
    Fall,
    /// Start over from an empty board
    Restart,
    /// Toggle pause state
    Pause,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use elevatris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotate" => Some(GameAction::Rotate),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "drop" => Some(GameAction::Drop),
            "fall" => Some(GameAction::Fall),
            "restart" => Some(GameAction::Restart),
            "pause" => Some(GameAction::Pause),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Rotate => "rotate",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Drop => "drop",
            GameAction::Fall => "fall",
            GameAction::Restart => "restart",
            GameAction::Pause => "pause",
        }
    }
}

/// Notification emitted by the engine, one per state transition
///
/// Events queue up on the engine and are drained by the caller after each
/// command returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    Began,
    Ended,
    LevelUp { level: u32 },
    ShapeMoved,
    ShapeDropped,
    ShapeLanded,
}

/// Game lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    Playing,
    GameOver,
}
