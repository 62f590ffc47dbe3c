//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameCommand`] values the
//! gameplay driver applies to the play field. Steering is edge-triggered (one
//! key press, one turn), so no auto-repeat handling is needed.

pub mod map;

pub use tui_snake3d_types as types;

pub use map::{handle_key_event, should_quit};
