//! Game state module - the complete game state and its transitions
//!
//! This module ties together the board, the shape catalog, the piece source and
//! scoring. Every transition takes `&self` and returns a new [`GameState`]; the
//! input value is never touched, so a driver can keep the previous state around
//! and compare it with the result.
//!
//! Rules the transitions share:
//! - A move or rotation that does not fit returns a state equal to the input.
//! - Once `game_over` is set, every transition except [`GameState::reset`]
//!   returns the input unchanged.
//! - The paused flag is informational; the driver decides whether to withhold
//!   commands while paused.

use crate::board::Board;
use crate::pieces::{get_shape, get_spawn_shape, try_rotate, Shape};
use crate::rng::{PieceRng, SimpleRng};
use crate::scoring::{calculate_level, calculate_line_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Get the bitmap for the current rotation
    pub fn shape(&self) -> &'static Shape {
        get_shape(self.kind, self.rotation)
    }

    /// Check if the piece fits on the board where it is
    pub fn is_valid(&self, board: &Board) -> bool {
        board.is_valid_position(self.shape(), self.x, self.y)
    }

    /// Same piece moved by (dx, dy)
    pub fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..self
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    active: Tetromino,
    next: PieceKind,
    score: u32,
    level: u32,
    lines: u32,
    game_over: bool,
    paused: bool,
    rng: R,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }

    /// Create a new game seeded from entropy
    pub fn from_entropy() -> Self {
        Self::with_rng(SimpleRng::from_entropy())
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: PieceRng + Clone> GameState<R> {
    /// Create a new game drawing pieces from `rng`.
    ///
    /// The first draw becomes the active piece, the second the next piece.
    pub fn with_rng(mut rng: R) -> Self {
        let active = Tetromino::new(rng.next_kind());
        let next = rng.next_kind();
        Self {
            board: Board::new(),
            active,
            next,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            game_over: false,
            paused: false,
            rng,
        }
    }

    /// Replace the board. Scenario setup; nothing is validated.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Replace the active piece. Scenario setup; nothing is validated.
    ///
    /// Any `i8` origin is accepted. Origins far off the board just make every
    /// move and rotation fail; the arithmetic saturates instead of overflowing.
    pub fn with_active(mut self, active: Tetromino) -> Self {
        self.active = active;
        self
    }

    /// Replace the queued next piece.
    pub fn with_next(mut self, next: PieceKind) -> Self {
        self.next = next;
        self
    }

    /// Set the cleared-line total; the level follows from it.
    pub fn with_lines(mut self, lines: u32) -> Self {
        self.lines = lines;
        self.level = calculate_level(lines);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Tetromino {
        self.active
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    /// Bitmap shown in the next-piece preview
    pub fn next_shape(&self) -> &'static Shape {
        get_spawn_shape(self.next)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Row the active piece would land on if hard-dropped
    pub fn landing_y(&self) -> i8 {
        let piece = self.active;
        let mut y = piece.y;
        while self.board.is_valid_position(piece.shape(), piece.x, y.saturating_add(1)) {
            y += 1;
        }
        y
    }

    /// Copy of the current state with the terminal check applied.
    fn when_live(&self, f: impl FnOnce(&mut Self)) -> Self {
        let mut next = self.clone();
        if !next.game_over {
            f(&mut next);
        }
        next
    }

    /// Move the active piece by (dx, dy) if it fits
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let moved = self.active.shifted(dx, dy);
        if moved.is_valid(&self.board) {
            self.active = moved;
            return true;
        }
        false
    }

    /// Shift the active piece one column left
    pub fn move_left(&self) -> Self {
        self.when_live(|s| {
            s.try_move(-1, 0);
        })
    }

    /// Shift the active piece one column right
    pub fn move_right(&self) -> Self {
        self.when_live(|s| {
            s.try_move(1, 0);
        })
    }

    /// Move the active piece down one row, locking it if it has landed
    pub fn soft_drop(&self) -> Self {
        self.when_live(|s| {
            if !s.try_move(0, 1) {
                s.lock_in_place();
            }
        })
    }

    /// Rotate the active piece one step, trying the wall kicks in order
    pub fn rotate(&self) -> Self {
        self.when_live(|s| {
            let piece = s.active;
            let result = try_rotate(piece.kind, piece.rotation, piece.x, piece.y, |shape, x, y| {
                s.board.is_valid_position(shape, x, y)
            });
            if let Some((rotation, dx)) = result {
                s.active = Tetromino {
                    rotation,
                    x: piece.x.saturating_add(dx),
                    ..piece
                };
            }
        })
    }

    /// Drop the active piece to its landing row and lock it
    pub fn hard_drop(&self) -> Self {
        self.when_live(|s| {
            s.active.y = s.landing_y();
            s.lock_in_place();
        })
    }

    /// Lock the active piece where it is, clear lines, score and spawn the next piece
    pub fn lock(&self) -> Self {
        self.when_live(Self::lock_in_place)
    }

    /// Flip the paused flag
    pub fn toggle_pause(&self) -> Self {
        self.when_live(|s| s.paused = !s.paused)
    }

    /// Fresh game that keeps drawing from this game's piece source
    pub fn reset(&self) -> Self {
        Self::with_rng(self.rng.clone())
    }

    fn lock_in_place(&mut self) {
        let piece = self.active;
        self.board
            .lock_piece(piece.shape(), piece.x, piece.y, piece.kind);

        let lines_cleared = self.board.clear_full_rows().len();

        // Pay the clear at the level it was made on, then level up.
        let level_before = self.level;
        self.lines = self.lines.saturating_add(lines_cleared as u32);
        self.level = calculate_level(self.lines);
        self.score = self
            .score
            .saturating_add(calculate_line_score(lines_cleared, level_before));

        self.active = Tetromino::new(self.next);
        self.next = self.rng.next_kind();

        if !self.active.is_valid(&self.board) {
            self.game_over = true;
        }
    }

    /// Apply a game action
    pub fn apply_action(&self, action: GameAction) -> Self {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => self.reset(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = ActiveSnapshot::from(self.active);
        out.next = self.next;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedPieces;

    fn scripted(kinds: &[PieceKind]) -> GameState<ScriptedPieces> {
        GameState::with_rng(ScriptedPieces::new(kinds.to_vec()))
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.game_over);
        assert!(!state.paused);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lines, 0);
        assert_eq!(state.board.filled_count(), 0);
        assert_eq!(state.active.x, SPAWN_X);
        assert_eq!(state.active.y, SPAWN_Y);
        assert_eq!(state.active.rotation, Rotation::North);
    }

    #[test]
    fn test_same_seed_same_game() {
        assert_eq!(GameState::new(42), GameState::new(42));
    }

    #[test]
    fn test_tetromino_new() {
        let piece = Tetromino::new(PieceKind::T);

        assert_eq!(piece.kind, PieceKind::T);
        assert_eq!(piece.rotation, Rotation::North);
        assert_eq!(piece.x, 3);
        assert_eq!(piece.y, 0);
    }

    #[test]
    fn test_transitions_leave_input_untouched() {
        let state = scripted(&[PieceKind::T, PieceKind::I]);
        let before = state.clone();

        let moved = state.move_left();
        assert_eq!(state, before);
        assert_eq!(moved.active.x, 2);

        let dropped = state.hard_drop();
        assert_eq!(state, before);
        assert_eq!(dropped.board.filled_count(), 4);
    }

    #[test]
    fn test_try_move_collision() {
        let state = scripted(&[PieceKind::O]).with_active(Tetromino {
            x: -1,
            ..Tetromino::new(PieceKind::O)
        });
        // O bitmap is 2 wide; x = -1 would put its left column off the board.
        assert!(!state.active.is_valid(&state.board));

        let state = scripted(&[PieceKind::O]).with_active(Tetromino {
            x: 0,
            ..Tetromino::new(PieceKind::O)
        });
        assert_eq!(state.move_left(), state);
    }

    #[test]
    fn test_move_right_stops_at_wall() {
        let mut state = scripted(&[PieceKind::I]);
        for _ in 0..20 {
            state = state.move_right();
        }
        // I north occupies bitmap columns 0..4, so the origin stops at column 6.
        assert_eq!(state.active.x, 6);
    }

    #[test]
    fn test_soft_drop_moves_then_locks() {
        let state = scripted(&[PieceKind::O, PieceKind::T]).with_active(Tetromino {
            y: 17,
            ..Tetromino::new(PieceKind::O)
        });
        let moved = state.soft_drop();
        assert_eq!(moved.active.y, 18);
        assert_eq!(moved.board.filled_count(), 0);

        let locked = moved.soft_drop();
        assert_eq!(locked.board.filled_count(), 4);
        assert_eq!(locked.active.kind, PieceKind::T);
        assert_eq!(locked.board.get(3, 19), Some(Some(PieceKind::O)));
    }

    #[test]
    fn test_rotate_in_place() {
        let state = scripted(&[PieceKind::T]).with_active(Tetromino {
            y: 5,
            ..Tetromino::new(PieceKind::T)
        });
        let rotated = state.rotate();
        assert_eq!(rotated.active.rotation, Rotation::East);
        assert_eq!(rotated.active.x, state.active.x);
        assert_eq!(rotated.active.y, 5);
    }

    #[test]
    fn test_rotate_kicks_off_left_wall() {
        // I west occupies bitmap column 1; at x = -1 it hugs the left wall.
        // Rotating to north needs columns x..x+4, so the +1 kick is the first that fits.
        let state = scripted(&[PieceKind::I]).with_active(Tetromino {
            kind: PieceKind::I,
            rotation: Rotation::West,
            x: -1,
            y: 5,
        });
        assert!(state.active.is_valid(&state.board));

        let rotated = state.rotate();
        assert_eq!(rotated.active.rotation, Rotation::North);
        assert_eq!(rotated.active.x, 0);
    }

    #[test]
    fn test_rotate_kicks_off_right_wall() {
        // I east occupies bitmap column 2; at x = 7 it hugs the right wall.
        // South spans four columns from the origin, so in place (7..=10) fails and -1 fits.
        let state = scripted(&[PieceKind::I]).with_active(Tetromino {
            kind: PieceKind::I,
            rotation: Rotation::East,
            x: 7,
            y: 5,
        });
        let rotated = state.rotate();
        assert_eq!(rotated.active.rotation, Rotation::South);
        assert_eq!(rotated.active.x, 6);
    }

    #[test]
    fn test_rotate_rejected_returns_same_state() {
        // Vertical I in a one-wide well: no horizontal rotation can fit.
        let board = Board::from_rows(&[
            "XXXX.XXXXX",
            "XXXX.XXXXX",
            "XXXX.XXXXX",
            "XXXX.XXXXX",
        ]);
        let state = scripted(&[PieceKind::I])
            .with_board(board)
            .with_active(Tetromino {
                kind: PieceKind::I,
                rotation: Rotation::East,
                x: 2,
                y: 16,
            });
        assert!(state.active.is_valid(&state.board));
        assert_eq!(state.rotate(), state);
    }

    #[test]
    fn test_o_piece_cycles_rotation_index() {
        let state = scripted(&[PieceKind::O]).with_active(Tetromino {
            y: 5,
            ..Tetromino::new(PieceKind::O)
        });
        let once = state.rotate();
        assert_eq!(once.active.rotation, Rotation::East);
        assert_eq!(once.active.shape(), state.active.shape());
        let back = once.rotate().rotate().rotate();
        assert_eq!(back, state);
    }

    #[test]
    fn test_hard_drop_locks_at_floor() {
        let state = scripted(&[PieceKind::T, PieceKind::S]);
        let dropped = state.hard_drop();
        // T north: top row has one mino, second row three; origin lands on row 18.
        assert_eq!(dropped.board.get(4, 18), Some(Some(PieceKind::T)));
        assert_eq!(dropped.board.get(3, 19), Some(Some(PieceKind::T)));
        assert_eq!(dropped.board.get(5, 19), Some(Some(PieceKind::T)));
        assert_eq!(dropped.active.kind, PieceKind::S);
        assert_eq!(dropped.next, PieceKind::T);
    }

    #[test]
    fn test_hard_drop_locks_even_without_moving() {
        let state = scripted(&[PieceKind::O, PieceKind::I]).with_active(Tetromino {
            y: 18,
            ..Tetromino::new(PieceKind::O)
        });
        assert_eq!(state.landing_y(), 18);
        let dropped = state.hard_drop();
        assert_eq!(dropped.board.filled_count(), 4);
        assert_eq!(dropped.active.kind, PieceKind::I);
    }

    #[test]
    fn test_lock_piece_clears_lines() {
        // Bottom row missing one cell at column 9; a vertical I fills it.
        let board = Board::from_rows(&["XXXXXXXXX."]);
        let state = scripted(&[PieceKind::I])
            .with_board(board)
            .with_active(Tetromino {
                kind: PieceKind::I,
                rotation: Rotation::East,
                x: 7,
                y: 0,
            });
        let after = state.hard_drop();
        assert_eq!(after.lines, 1);
        assert_eq!(after.score, 40);
        assert!(!after.board.is_row_full(19));
        // The three upper I cells fell by one row.
        assert_eq!(after.board.get(9, 19), Some(Some(PieceKind::I)));
        assert_eq!(after.board.get(9, 17), Some(Some(PieceKind::I)));
        assert_eq!(after.board.get(9, 16), Some(None));
        assert_eq!(after.board.filled_count(), 3);
    }

    #[test]
    fn test_double_at_level_three_scores_300() {
        let board = Board::from_rows(&["XXXXXXXX..", "XXXXXXXX.."]);
        let state = scripted(&[PieceKind::O])
            .with_board(board)
            .with_lines(20)
            .with_active(Tetromino {
                x: 8,
                ..Tetromino::new(PieceKind::O)
            });
        assert_eq!(state.level, 3);
        let after = state.hard_drop();
        assert_eq!(after.score, 300);
        assert_eq!(after.lines, 22);
        assert_eq!(after.level, 3);
        assert_eq!(after.board.filled_count(), 0);
    }

    #[test]
    fn test_score_uses_level_before_level_up() {
        let board = Board::from_rows(&["XXXXXXXXX."]);
        let state = scripted(&[PieceKind::I])
            .with_board(board)
            .with_lines(9)
            .with_active(Tetromino {
                kind: PieceKind::I,
                rotation: Rotation::East,
                x: 7,
                y: 0,
            });
        let after = state.hard_drop();
        assert_eq!(after.lines, 10);
        assert_eq!(after.level, 2);
        assert_eq!(after.score, 40);
    }

    #[test]
    fn test_game_over_detection() {
        // Rows 1.. are stacked high enough that the spawn rows are blocked.
        let mut board = Board::new();
        for y in 1..20 {
            for x in 0..9 {
                board.set(x, y, Some(PieceKind::Z));
            }
        }
        let state = scripted(&[PieceKind::O])
            .with_board(board)
            .with_active(Tetromino {
                x: 8,
                y: -2,
                ..Tetromino::new(PieceKind::O)
            });
        let over = state.lock();
        assert!(over.game_over);

        // Further transitions are no-ops.
        assert_eq!(over.lock(), over);
        assert_eq!(over.hard_drop(), over);
        assert_eq!(over.soft_drop(), over);
        assert_eq!(over.move_left(), over);
        assert_eq!(over.rotate(), over);
        assert_eq!(over.toggle_pause(), over);
    }

    #[test]
    fn test_pause_toggles_without_blocking_moves() {
        let state = GameState::new(3);
        let paused = state.apply_action(GameAction::Pause);
        assert!(paused.paused);
        let moved = paused.apply_action(GameAction::MoveLeft);
        assert_eq!(moved.active.x, SPAWN_X - 1);
        assert!(!moved.apply_action(GameAction::Pause).paused);
    }

    #[test]
    fn test_apply_action_restart() {
        let state = GameState::new(5).hard_drop().hard_drop().toggle_pause();
        let restarted = state.apply_action(GameAction::Restart);
        assert_eq!(restarted.board.filled_count(), 0);
        assert_eq!(restarted.score, 0);
        assert_eq!(restarted.level, 1);
        assert_eq!(restarted.lines, 0);
        assert!(!restarted.paused);
        assert!(!restarted.game_over);
    }

    #[test]
    fn test_reset_leaves_game_over() {
        let mut state = GameState::new(9);
        while !state.game_over {
            state = state.hard_drop();
        }
        let fresh = state.reset();
        assert!(!fresh.game_over);
        assert_eq!(fresh.board.filled_count(), 0);
    }

    #[test]
    fn test_extreme_origins_reject_moves_without_overflow() {
        for x in [i8::MAX, i8::MIN] {
            let state = scripted(&[PieceKind::I]).with_active(Tetromino {
                kind: PieceKind::I,
                rotation: Rotation::North,
                x,
                y: i8::MAX,
            });
            assert_eq!(state.move_right(), state);
            assert_eq!(state.move_left(), state);
            assert_eq!(state.rotate(), state);
            assert_eq!(state.landing_y(), i8::MAX);
            assert!(state.snapshot().display_grid().iter().flatten().all(|&v| v == 0));
        }
    }

    #[test]
    fn test_snapshot_copies_counters() {
        let state = scripted(&[PieceKind::L, PieceKind::J]).with_lines(12);
        let snap = state.snapshot();
        assert_eq!(snap.level, 2);
        assert_eq!(snap.lines, 12);
        assert_eq!(snap.next, PieceKind::J);
        assert_eq!(snap.active.kind, PieceKind::L);
        assert!(!snap.game_over);
    }
}
