//! Pieces module - Tetromino shape catalog and wall-kick rotation
//!
//! Every kind has four rotation states stored as square bitmaps (2x2 for O,
//! 4x4 for I, 3x3 for the rest). The O piece repeats its single bitmap four
//! times so that every kind rotates through the same 0..4 cycle.
//!
//! Rotation uses a fixed list of horizontal kicks instead of per-kind kick
//! tables: in place first, then one column left, one right, two left, two right.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Rotation, WALL_KICKS};

/// Offset of a single mino relative to the bitmap origin (column, row)
pub type MinoOffset = (i8, i8);

/// Largest bitmap edge in the catalog
pub const MAX_SHAPE_SIZE: usize = 4;

/// One rotation of one kind: a `size x size` bitmap of occupied cells.
///
/// Stored in a fixed 4x4 array; cells outside `size` are always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    rows: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from a bitmap.
    ///
    /// # Panics
    ///
    /// Panics if `size` is not 2, 3 or 4, or a cell outside `size` is set.
    pub const fn new(size: u8, rows: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        assert!(size >= 2 && size <= 4, "shape size must be 2, 3 or 4");
        let mut r = 0;
        while r < MAX_SHAPE_SIZE {
            let mut c = 0;
            while c < MAX_SHAPE_SIZE {
                assert!(
                    rows[r][c] == 0 || (r < size as usize && c < size as usize),
                    "shape cell set outside its bitmap"
                );
                c += 1;
            }
            r += 1;
        }
        Self { size, rows }
    }

    /// Edge length of the bitmap
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the bitmap cell at (col, row) is occupied
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        col < MAX_SHAPE_SIZE && row < MAX_SHAPE_SIZE && self.rows[row][col] != 0
    }

    /// Occupied cells as (column, row) offsets, in row-major order
    pub fn minos(&self) -> ArrayVec<MinoOffset, 4> {
        let mut out = ArrayVec::new();
        let size = self.size as usize;
        for row in 0..size {
            for col in 0..size {
                if self.rows[row][col] != 0 {
                    out.push((col as i8, row as i8));
                }
            }
        }
        out
    }

    /// Bitmap rows, `size` cells wide
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let size = self.size as usize;
        self.rows[..size].iter().map(move |row| &row[..size])
    }
}

const fn s2(r: [[u8; 2]; 2]) -> Shape {
    Shape::new(
        2,
        [
            [r[0][0], r[0][1], 0, 0],
            [r[1][0], r[1][1], 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ],
    )
}

const fn s3(r: [[u8; 3]; 3]) -> Shape {
    Shape::new(
        3,
        [
            [r[0][0], r[0][1], r[0][2], 0],
            [r[1][0], r[1][1], r[1][2], 0],
            [r[2][0], r[2][1], r[2][2], 0],
            [0, 0, 0, 0],
        ],
    )
}

const fn s4(r: [[u8; 4]; 4]) -> Shape {
    Shape::new(4, r)
}

const O_SHAPE: Shape = s2([[1, 1], [1, 1]]);

/// All 28 bitmaps, indexed by `[kind.index()][rotation.index()]`
pub const SHAPES: [[Shape; 4]; 7] = [
    // I
    [
        s4([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
        s4([[0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0]]),
        s4([[0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0]]),
        s4([[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]]),
    ],
    // O
    [O_SHAPE, O_SHAPE, O_SHAPE, O_SHAPE],
    // T
    [
        s3([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
        s3([[0, 1, 0], [0, 1, 1], [0, 1, 0]]),
        s3([[0, 0, 0], [1, 1, 1], [0, 1, 0]]),
        s3([[0, 1, 0], [1, 1, 0], [0, 1, 0]]),
    ],
    // L
    [
        s3([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
        s3([[0, 1, 1], [0, 1, 0], [0, 1, 0]]),
        s3([[0, 0, 0], [1, 1, 1], [0, 0, 1]]),
        s3([[0, 1, 0], [0, 1, 0], [1, 1, 0]]),
    ],
    // J
    [
        s3([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
        s3([[0, 1, 0], [0, 1, 0], [0, 1, 1]]),
        s3([[0, 0, 0], [1, 1, 1], [1, 0, 0]]),
        s3([[1, 1, 0], [0, 1, 0], [0, 1, 0]]),
    ],
    // S
    [
        s3([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
        s3([[0, 1, 0], [0, 1, 1], [0, 0, 1]]),
        s3([[0, 0, 0], [0, 1, 1], [1, 1, 0]]),
        s3([[1, 0, 0], [1, 1, 0], [0, 1, 0]]),
    ],
    // Z
    [
        s3([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
        s3([[0, 0, 1], [0, 1, 1], [0, 1, 0]]),
        s3([[0, 0, 0], [1, 1, 0], [0, 1, 1]]),
        s3([[0, 1, 0], [1, 1, 0], [1, 0, 0]]),
    ],
];

/// Get the bitmap for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> &'static Shape {
    &SHAPES[kind.index()][rotation.index()]
}

/// Bitmap of a freshly spawned (or previewed) piece
pub fn get_spawn_shape(kind: PieceKind) -> &'static Shape {
    get_shape(kind, Rotation::North)
}

/// Try to rotate a piece one step clockwise with wall kicks.
///
/// `is_valid(shape, x, y)` decides whether a bitmap fits at an origin.
/// Returns the new rotation and the column offset that made it fit, or `None`
/// if neither the in-place rotation nor any kick validates.
pub fn try_rotate(
    kind: PieceKind,
    rotation: Rotation,
    x: i8,
    y: i8,
    is_valid: impl Fn(&Shape, i8, i8) -> bool,
) -> Option<(Rotation, i8)> {
    let new_rotation = rotation.rotate_cw();
    let new_shape = get_shape(kind, new_rotation);

    std::iter::once(0)
        .chain(WALL_KICKS)
        .find(|&dx| is_valid(new_shape, x.saturating_add(dx), y))
        .map(|dx| (new_rotation, dx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_has_four_minos() {
        for kind in PieceKind::ALL {
            for r in 0..4 {
                let shape = get_shape(kind, Rotation::from_index(r));
                assert_eq!(shape.minos().len(), 4, "{:?} rotation {}", kind, r);
            }
        }
    }

    #[test]
    fn test_shape_sizes() {
        for kind in PieceKind::ALL {
            let expected = match kind {
                PieceKind::I => 4,
                PieceKind::O => 2,
                _ => 3,
            };
            for r in 0..4 {
                assert_eq!(get_shape(kind, Rotation::from_index(r)).size(), expected);
            }
        }
    }

    #[test]
    fn test_t_north_minos() {
        let shape = get_shape(PieceKind::T, Rotation::North);
        assert_eq!(shape.minos().as_slice(), &[(1, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_rows_are_trimmed_to_size() {
        let shape = get_spawn_shape(PieceKind::O);
        let rows: Vec<&[u8]> = shape.rows().collect();
        assert_eq!(rows, vec![&[1u8, 1][..], &[1u8, 1][..]]);
    }

    #[test]
    fn test_kicks_tried_in_order() {
        // Only the +1 and -2 kicks validate; +1 must win because it comes first.
        let result = try_rotate(PieceKind::T, Rotation::North, 4, 5, |_, x, _| {
            x == 5 || x == 2
        });
        assert_eq!(result, Some((Rotation::East, 1)));

        // -1 beats everything else when it validates.
        let result = try_rotate(PieceKind::T, Rotation::North, 4, 5, |_, x, _| x != 4);
        assert_eq!(result, Some((Rotation::East, -1)));
    }

    #[test]
    fn test_rotate_rejected_when_nothing_fits() {
        assert_eq!(
            try_rotate(PieceKind::L, Rotation::West, 4, 5, |_, _, _| false),
            None
        );
    }

    #[test]
    #[should_panic(expected = "shape size must be 2, 3 or 4")]
    fn test_malformed_shape_panics() {
        let _ = Shape::new(5, [[0; 4]; 4]);
    }
}
