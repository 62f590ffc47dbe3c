//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer for terminal play. The view side
//! ([`GameView`]) is pure text composition and can be unit-tested without a
//! terminal; the renderer side ([`TerminalRenderer`]) owns the raw-mode /
//! alternate-screen lifecycle and flushes composed screens through a buffered
//! command queue.

pub mod game_view;
pub mod renderer;

pub use tui_snake3d_core as core;
pub use tui_snake3d_types as types;

pub use game_view::GameView;
pub use renderer::TerminalRenderer;
