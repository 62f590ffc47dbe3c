//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation core, input mapping, terminal view).
//!
//! # Play Field Dimensions
//!
//! The play field is a cube of side `D` voxels. `D` is chosen at construction
//! time; the reference configuration is an 18-cube. Every axis wraps toroidally,
//! so there are no walls: motion past one face reappears at the opposite face.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Fixed simulation step interval |
//!
//! # Cell Glyphs
//!
//! Each projected cell renders as a fixed two-character glyph so the frame
//! keeps a roughly square aspect ratio in typical terminal fonts:
//!
//! - `EMPTY_CELL` - `". "`
//! - `SNAKE_BODY_CELL` - `"@ "`
//! - `FOOD_CELL` - `"0 "`
//!
//! # Examples
//!
//! ```
//! use tui_snake3d_types::{Direction, Side};
//!
//! // Directions know their own opposites.
//! assert!(Direction::Left.is_opposite_of(Direction::Right));
//! assert_eq!(Direction::Up.delta(), (0, -1, 0));
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(Direction::from_str("forward"), Some(Direction::Forward));
//! assert_eq!(Side::from_str("top"), Some(Side::TopYx));
//! ```

/// Reference play field side length (an 18-cube).
pub const DEFAULT_DIMENSION: i16 = 18;

/// Fixed simulation step interval in milliseconds.
pub const TICK_MS: u32 = 100;

/// Number of snake segments at spawn.
pub const INITIAL_SNAKE_LEN: usize = 5;

/// Glyph for an empty projected cell.
pub const EMPTY_CELL: &str = ". ";

/// Glyph for a projected cell covering at least one snake segment.
pub const SNAKE_BODY_CELL: &str = "@ ";

/// Glyph for a projected cell covering the food voxel.
pub const FOOD_CELL: &str = "0 ";

/// State of a single voxel in the play field grid.
///
/// The grid is a derived view: it is recomputed from the snake and food
/// positions for every rendered frame and never drives the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    SnakeBody,
    Food,
}

impl CellState {
    /// The two-character glyph used when rendering this cell.
    pub fn glyph(&self) -> &'static str {
        match self {
            CellState::Empty => EMPTY_CELL,
            CellState::SnakeBody => SNAKE_BODY_CELL,
            CellState::Food => FOOD_CELL,
        }
    }
}

/// An integer coordinate inside the cubic play field.
///
/// All components are in `[0, D)` for a field of side `D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Voxel {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl Voxel {
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }
}

/// The six travel directions through the cube.
///
/// Screen-space up/down map to the y axis (y grows downward, matching the
/// row-major frame layout), left/right to the x axis, and forward/backward to
/// the z axis (depth).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Forward,
    Backward,
}

impl Direction {
    /// Per-axis step for one tick of travel in this direction.
    ///
    /// Returned as `(dx, dy, dz)`.
    pub fn delta(&self) -> (i16, i16, i16) {
        match self {
            Direction::Up => (0, -1, 0),
            Direction::Down => (0, 1, 0),
            Direction::Left => (-1, 0, 0),
            Direction::Right => (1, 0, 0),
            Direction::Forward => (0, 0, 1),
            Direction::Backward => (0, 0, -1),
        }
    }

    /// The direction pointing exactly the other way on the same axis.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Whether `other` is the exact reversal of this direction.
    ///
    /// Reversals are rejected by the play field: a snake of length > 1 turning
    /// straight back would collide with its second segment on the next tick.
    pub fn is_opposite_of(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse a direction from string (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake3d_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("Backward"), Some(Direction::Backward));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "forward" => Some(Direction::Forward),
            "backward" | "back" => Some(Direction::Backward),
            _ => None,
        }
    }

    /// Convert to lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

/// The cube face currently projected onto the 2D frame.
///
/// Each side fixes one axis and renders the remaining two, collapsing the
/// depth axis by occlusion (food over body over empty):
///
/// - `FrontZx`: fixes y - row = y, column = x, z collapsed.
/// - `TopYx`: fixes z - row = z, column = x, y collapsed.
/// - `RightYz`: fixes x - row = x, column = y, z collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    FrontZx,
    TopYx,
    RightYz,
}

impl Side {
    /// Parse a side from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "front" | "frontzx" => Some(Side::FrontZx),
            "top" | "topyx" => Some(Side::TopYx),
            "right" | "rightyz" => Some(Side::RightYz),
            _ => None,
        }
    }

    /// Convert to lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::FrontZx => "front",
            Side::TopYx => "top",
            Side::RightYz => "right",
        }
    }
}

/// Commands the input layer produces for the gameplay driver.
///
/// Quitting is handled separately (see the input crate's `should_quit`), so a
/// command here is always something the driver forwards to the play field or
/// to its own lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Change the snake's travel direction.
    Steer(Direction),
    /// Change the projected cube face.
    Face(Side),
    /// Start a fresh game (new play field instance).
    Restart,
}
