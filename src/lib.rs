//! Pocket Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `pocket_tetris::{core,input,term,types}` so
//! the binary, integration tests and benchmarks share one import surface.

pub use pocket_tetris_core as core;
pub use pocket_tetris_input as input;
pub use pocket_tetris_term as term;
pub use pocket_tetris_types as types;
