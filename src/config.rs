//! CLI options for the gameplay binary.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use tui_snake3d::types::{DEFAULT_DIMENSION, TICK_MS};

#[derive(Debug, Parser)]
#[command(
    name = "tui-snake3d",
    about = "Terminal 3D snake on a toroidal voxel cube",
    version
)]
pub struct Options {
    /// Side length of the cubic play field.
    #[arg(long, default_value_t = DEFAULT_DIMENSION)]
    pub dimension: i16,

    /// Simulation tick interval in milliseconds.
    #[arg(long = "tick-ms", default_value_t = TICK_MS)]
    pub tick_ms: u32,

    /// Food placement seed (defaults to the system clock).
    #[arg(long)]
    pub seed: Option<u32>,

    /// Show the per-segment coordinate list under the frame.
    #[arg(long)]
    pub debug: bool,
}

impl Options {
    /// The configured seed, or one derived from the system clock.
    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.subsec_nanos() ^ elapsed.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}
