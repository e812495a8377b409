//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game rules, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn origin**: column 3, row 0, rotation 0
//!
//! # Gravity
//!
//! Gravity starts at one row per second on level 1 and speeds up by 100ms per
//! level down to a 100ms floor:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | 5 | 600ms |
//! | 10+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use pocket_tetris_types::{PieceKind, Rotation, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.id(), 3);
//!
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn column of a freshly promoted piece's bitmap origin.
pub const SPAWN_X: i8 = 3;

/// Spawn row of a freshly promoted piece's bitmap origin.
pub const SPAWN_Y: i8 = 0;

/// Driver tick interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval on level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level
pub const DROP_STEP_MS: u32 = 100;

/// Fastest gravity interval
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Level of a fresh game
pub const START_LEVEL: u32 = 1;

/// Lines needed per level-up
pub const LINES_PER_LEVEL: u32 = 10;

/// Horizontal wall-kick offsets, tried in this order after an in-place rotation fails.
pub const WALL_KICKS: [i8; 4] = [-1, 1, -2, 2];

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N lines simultaneously:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points (Tetris!)
///
/// Points are multiplied by the level in effect before the clear.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven tetromino piece kinds, in catalog order.
///
/// The catalog order doubles as the board's colour tag: `I` is 1, `Z` is 7.
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **L**: Orange, L-shaped
/// - **J**: Blue, J-shaped (mirror of L)
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Zero-based catalog index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Board tag for this kind (1-7, 0 is reserved for empty cells).
    pub fn id(self) -> u8 {
        self as u8 + 1
    }

    /// Kind for a catalog index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..7`; an out-of-catalog index is a programming error.
    pub fn from_index(index: usize) -> Self {
        assert!(index < Self::ALL.len(), "piece index {index} is outside the catalog");
        Self::ALL[index]
    }

    /// Kind for a board tag, `None` for empty (0) or unknown tags.
    ///
    /// ```
    /// use pocket_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_id(7), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_id(0), None);
    /// assert_eq!(PieceKind::from_id(8), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use pocket_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Single uppercase letter, as shown in previews and debug dumps.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// Rotation states (index 0-3)
///
/// - **North**: Spawn orientation (index 0)
/// - **East**: One clockwise turn (index 1)
/// - **South**: Two turns (index 2)
/// - **West**: Three turns (index 3)
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotation for an index, wrapping modulo 4.
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use pocket_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// Game commands that produce a new game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot move
    SoftDrop,
    /// Rotate piece to the next rotation, with wall kicks
    Rotate,
    /// Drop piece to the lowest valid row and lock it
    HardDrop,
    /// Toggle the paused flag
    Pause,
    /// Discard the game and start a fresh one
    Restart,
}

/// Handheld console buttons consumed by the session driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    Start,
    Select,
}

/// Sound settings changed from the keyboard while the game runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionCommand {
    ToggleSound,
    VolumeUp,
    VolumeDown,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by the specified piece kind
pub type Cell = Option<PieceKind>;

/// Screen colour palette. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    /// Green-tinted screen, every block drawn in one dark colour
    #[default]
    Classic,
    BlackWhite,
    Blue,
    Red,
}

impl Palette {
    pub const ALL: [Palette; 4] = [
        Palette::Classic,
        Palette::BlackWhite,
        Palette::Blue,
        Palette::Red,
    ];

    /// Parse palette name (case-insensitive)
    ///
    /// ```
    /// use pocket_tetris_types::Palette;
    ///
    /// assert_eq!(Palette::from_str("classic"), Some(Palette::Classic));
    /// assert_eq!(Palette::from_str("BlackWhite"), Some(Palette::BlackWhite));
    /// assert_eq!(Palette::from_str("green"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Palette::Classic),
            "blackwhite" => Some(Palette::BlackWhite),
            "blue" => Some(Palette::Blue),
            "red" => Some(Palette::Red),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Palette::Classic => "classic",
            Palette::BlackWhite => "blackwhite",
            Palette::Blue => "blue",
            Palette::Red => "red",
        }
    }
}

/// Smallest accepted screen scale, in percent.
pub const SCALE_MIN: u16 = 50;

/// Largest accepted screen scale, in percent.
pub const SCALE_MAX: u16 = 200;

/// Largest volume, in percent.
pub const VOLUME_MAX: u8 = 100;

/// Volume change per [`OptionCommand::VolumeUp`] or [`OptionCommand::VolumeDown`].
pub const VOLUME_STEP: u8 = 10;

/// Display and audio options. None of these affect game rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub palette: Palette,
    /// Screen scale in percent
    pub scale: u16,
    /// Music volume in percent
    pub volume: u8,
    pub sound_enabled: bool,
    /// Piece sequence seed; `None` seeds from entropy
    pub seed: Option<u32>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            palette: Palette::Classic,
            scale: 100,
            volume: 80,
            sound_enabled: true,
            seed: None,
        }
    }
}

impl Options {
    /// Clamp numeric settings into their accepted ranges.
    ///
    /// ```
    /// use pocket_tetris_types::Options;
    ///
    /// let opts = Options { scale: 400, volume: 150, ..Options::default() }.clamped();
    /// assert_eq!(opts.scale, 200);
    /// assert_eq!(opts.volume, 100);
    /// ```
    pub fn clamped(self) -> Self {
        Self {
            scale: self.scale.clamp(SCALE_MIN, SCALE_MAX),
            volume: self.volume.min(VOLUME_MAX),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_ids_follow_catalog_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(kind.id() as usize, i + 1);
            assert_eq!(PieceKind::from_index(i), *kind);
            assert_eq!(PieceKind::from_id(kind.id()), Some(*kind));
        }
    }

    #[test]
    #[should_panic(expected = "outside the catalog")]
    fn from_index_rejects_unknown_kind() {
        let _ = PieceKind::from_index(7);
    }

    #[test]
    fn rotation_index_wraps() {
        assert_eq!(Rotation::from_index(4), Rotation::North);
        assert_eq!(Rotation::from_index(7), Rotation::West);
        for i in 0..4 {
            assert_eq!(Rotation::from_index(i).index(), i);
        }
    }

    #[test]
    fn palette_names_roundtrip() {
        for palette in Palette::ALL {
            assert_eq!(Palette::from_str(palette.as_str()), Some(palette));
        }
    }

    #[test]
    fn options_defaults() {
        let opts = Options::default();
        assert_eq!(opts.palette, Palette::Classic);
        assert_eq!(opts.scale, 100);
        assert_eq!(opts.volume, 80);
        assert!(opts.sound_enabled);
        assert_eq!(opts.seed, None);
        assert_eq!(opts.clamped(), opts);
    }

    #[test]
    fn options_clamp_small_scale() {
        let opts = Options {
            scale: 10,
            ..Options::default()
        }
        .clamped();
        assert_eq!(opts.scale, SCALE_MIN);
    }
}
