//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events onto the handheld [`crate::types::Button`]s that the
//! session driver understands, the sound setting keys, and the quit chord.

pub mod map;

pub use pocket_tetris_types as types;

pub use map::{handle_key_event, handle_option_key, should_quit};
