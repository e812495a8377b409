//! Plain-data view of a game for renderers.
//!
//! The board never stores the falling piece; [`GameSnapshot::display_grid`]
//! overlays it on demand.

use crate::game_state::Tetromino;
use crate::pieces::{get_shape, get_spawn_shape, MAX_SHAPE_SIZE};
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Board tag grid: 0 for empty, 1-7 for a piece kind
pub type TagGrid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// 4x4 next-piece preview
pub type PreviewGrid = [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: TagGrid,
    pub active: ActiveSnapshot,
    pub next: PieceKind,
    pub paused: bool,
    pub game_over: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl GameSnapshot {
    /// Board with the active piece's on-board cells overlaid.
    pub fn display_grid(&self) -> TagGrid {
        let mut grid = self.board;
        let active = self.active;
        for &(dx, dy) in get_shape(active.kind, active.rotation).minos().iter() {
            let x = active.x.saturating_add(dx);
            let y = active.y.saturating_add(dy);
            if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                grid[y as usize][x as usize] = active.kind.id();
            }
        }
        grid
    }

    /// Next piece's spawn bitmap centred in a 4x4 box.
    pub fn next_preview(&self) -> PreviewGrid {
        let mut out = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let shape = get_spawn_shape(self.next);
        let offset = (MAX_SHAPE_SIZE - shape.size() as usize) / 2;
        for (dx, dy) in shape.minos() {
            out[offset + dy as usize][offset + dx as usize] = self.next.id();
        }
        out
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot::from(Tetromino::new(PieceKind::I)),
            next: PieceKind::I,
            paused: false,
            game_over: false,
            score: 0,
            level: 1,
            lines: 0,
        }
    }
}
