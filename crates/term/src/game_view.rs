//! GameView: composes the visible screen from a `core::PlayField`.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write as _;

use crate::core::PlayField;

const CONTROLS_LINE: &str = "arrows steer | z/x depth | w/s/d face | r restart | q quit";

/// Composes the projected frame plus a status block into one screen string.
pub struct GameView {
    show_debug: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self { show_debug: false }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also show the per-segment coordinate list under the status block.
    pub fn with_debug(mut self, show_debug: bool) -> Self {
        self.show_debug = show_debug;
        self
    }

    /// Build the full screen for the current play field state.
    ///
    /// Layout: the `D`-line projected frame, a blank separator, the status
    /// line, the controls line, then (game over banner and) optional debug
    /// segment list.
    pub fn compose(&self, field: &PlayField) -> String {
        let mut out = field.render_frame();

        out.push('\n');
        let _ = writeln!(
            out,
            "FACE {}   LENGTH {}",
            field.side().as_str(),
            field.snake_len()
        );
        out.push_str(CONTROLS_LINE);
        out.push('\n');

        if field.game_over() {
            out.push('\n');
            out.push_str("GAME OVER\n");
        }

        if self.show_debug {
            out.push('\n');
            out.push_str(&field.snake_report());
        }

        out
    }
}
