//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and the session driver.
//! It has **no dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Value-based**: Every transition returns a new [`GameState`]; inputs are never mutated
//! - **Testable**: Piece sources are injectable, boards can be built from text
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with the position validator and line clearing
//! - [`pieces`]: The 28-bitmap shape catalog and wall-kick rotation
//! - [`game_state`]: Game state and its transition functions
//! - [`rng`]: Uniform piece selection behind the [`PieceRng`] trait
//! - [`scoring`]: Classic line-clear scoring, level curve and gravity speed
//! - [`snapshot`]: Plain-data view for renderers (piece overlay, next preview)
//! - [`session`]: Title/playing/paused/game-over driver fed by handheld buttons
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every piece is drawn independently from the seven kinds
//! - **Simple kicks**: a failed rotation retries one column left, right, two left, two right
//! - **Classic scoring**: 40/100/300/1200 times the level before the clear
//! - **Levels**: start at 1, up one every 10 lines
//! - **Game over**: the next piece does not fit at its spawn position; the game then freezes
//!
//! # Example
//!
//! ```
//! use pocket_tetris_core::GameState;
//! use pocket_tetris_types::GameAction;
//!
//! let game = GameState::new(12345);
//!
//! let moved = game
//!     .apply_action(GameAction::MoveRight)
//!     .apply_action(GameAction::Rotate);
//! let dropped = moved.apply_action(GameAction::HardDrop);
//!
//! // The original value is untouched.
//! assert_eq!(game.board().filled_count(), 0);
//! assert_eq!(dropped.board().filled_count(), 4);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use pocket_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, Tetromino};
pub use pieces::{get_shape, get_spawn_shape, try_rotate, Shape, SHAPES};
pub use rng::{PieceRng, RandSource, ScriptedPieces, SimpleRng};
pub use scoring::{calculate_level, calculate_line_score, drop_interval_ms};
pub use session::{AudioStatus, Phase, Session};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
