//! Terminal 3D snake (workspace facade crate).
//!
//! This package keeps the `tui_snake3d::{core,input,term,types}` public API in
//! one place while the implementation lives in dedicated crates under `crates/`.

pub use tui_snake3d_core as core;
pub use tui_snake3d_input as input;
pub use tui_snake3d_term as term;
pub use tui_snake3d_types as types;
