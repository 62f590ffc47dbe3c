//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state for the 3D snake
//! simulation. It has **zero dependencies** on UI, input, or I/O, making it:
//!
//! - **Deterministic**: same dimension and seed produce identical games
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: the cubic voxel field, rebuilt from state for each frame
//! - [`play_field`]: snake movement, growth, collision, and food placement
//! - [`projection`]: 3D-to-2D depth collapse onto a chosen cube face
//! - [`rng`]: seeded LCG for reproducible food placement
//!
//! # Game Rules
//!
//! - The field is a cube of side `D`; every axis wraps toroidally.
//! - The snake advances one voxel per tick and may turn onto any axis except
//!   straight back onto itself.
//! - Eating food grows the snake by one segment; food then reappears on a
//!   free voxel of the mid-depth plane.
//! - A head entering any body voxel ends the game; the flag is terminal and
//!   further ticks are no-ops.
//!
//! # Example
//!
//! ```
//! use tui_snake3d_core::PlayField;
//! use tui_snake3d_types::Direction;
//!
//! let mut field = PlayField::new(18, 12345).unwrap();
//! field.set_direction(Direction::Forward);
//! field.update();
//!
//! let frame = field.render_frame();
//! assert_eq!(frame.lines().count(), 18);
//! ```

pub mod grid;
pub mod play_field;
pub mod projection;
pub mod rng;

pub use tui_snake3d_types as types;

// Re-export commonly used types for convenience
pub use grid::VoxelGrid;
pub use play_field::{InvalidDimension, PlayField};
pub use projection::{project, Frame};
pub use rng::SimpleRng;
