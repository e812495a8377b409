//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for the handheld screen.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is diffed and flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Emulate the handheld look: palettes, LCD screen, title/pause/game-over screens
//! - Allow precise control over aspect ratio through the scale option

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod theme;

pub use pocket_tetris_core as core;
pub use pocket_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{cell_width_for_scale, GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use theme::Theme;
