//! Pieces module - the tetromino catalog
//!
//! Every kind has a fixed list of rotation states. Each state is four offsets
//! relative to the piece anchor. Rotation indices always wrap modulo the
//! number of states for that kind, so O has one state and I/S/Z have two.

use crate::types::PieceKind;

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

/// Catalog entry for one kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TetrominoDef {
    pub kind: PieceKind,
    /// Rotation states in clockwise order
    pub rotations: &'static [PieceShape],
    /// RGB color tag
    pub color: [u8; 3],
}

const I_ROTATIONS: [PieceShape; 2] = [
    [(-1, 0), (0, 0), (1, 0), (2, 0)],
    [(0, -1), (0, 0), (0, 1), (0, 2)],
];

const O_ROTATIONS: [PieceShape; 1] = [[(0, 0), (1, 0), (0, 1), (1, 1)]];

const T_ROTATIONS: [PieceShape; 4] = [
    [(-1, 0), (0, 0), (1, 0), (0, 1)],
    [(0, -1), (0, 0), (0, 1), (-1, 0)],
    [(1, 0), (0, 0), (-1, 0), (0, -1)],
    [(0, 1), (0, 0), (0, -1), (1, 0)],
];

const S_ROTATIONS: [PieceShape; 2] = [
    [(0, 0), (1, 0), (-1, 1), (0, 1)],
    [(-1, -1), (-1, 0), (0, 0), (0, 1)],
];

const Z_ROTATIONS: [PieceShape; 2] = [
    [(-1, 0), (0, 0), (0, 1), (1, 1)],
    [(0, -1), (0, 0), (-1, 0), (-1, 1)],
];

const J_ROTATIONS: [PieceShape; 4] = [
    [(-1, 0), (0, 0), (1, 0), (1, 1)],
    [(0, -1), (0, 0), (0, 1), (-1, 1)],
    [(1, 0), (0, 0), (-1, 0), (-1, -1)],
    [(0, 1), (0, 0), (0, -1), (1, -1)],
];

const L_ROTATIONS: [PieceShape; 4] = [
    [(-1, 0), (0, 0), (1, 0), (-1, 1)],
    [(0, -1), (0, 0), (0, 1), (-1, -1)],
    [(1, 0), (0, 0), (-1, 0), (1, -1)],
    [(0, 1), (0, 0), (0, -1), (1, 1)],
];

/// The seven tetrominoes, indexed by [`PieceKind::index`]
pub static CATALOG: [TetrominoDef; 7] = [
    TetrominoDef {
        kind: PieceKind::I,
        rotations: &I_ROTATIONS,
        color: [80, 220, 220],
    },
    TetrominoDef {
        kind: PieceKind::O,
        rotations: &O_ROTATIONS,
        color: [240, 220, 80],
    },
    TetrominoDef {
        kind: PieceKind::T,
        rotations: &T_ROTATIONS,
        color: [200, 120, 220],
    },
    TetrominoDef {
        kind: PieceKind::S,
        rotations: &S_ROTATIONS,
        color: [100, 220, 120],
    },
    TetrominoDef {
        kind: PieceKind::Z,
        rotations: &Z_ROTATIONS,
        color: [220, 80, 80],
    },
    TetrominoDef {
        kind: PieceKind::J,
        rotations: &J_ROTATIONS,
        color: [80, 120, 220],
    },
    TetrominoDef {
        kind: PieceKind::L,
        rotations: &L_ROTATIONS,
        color: [255, 165, 0],
    },
];

pub fn tetromino(kind: PieceKind) -> &'static TetrominoDef {
    &CATALOG[kind.index()]
}

/// Number of distinct rotation states for a kind
pub fn rotation_count(kind: PieceKind) -> u8 {
    tetromino(kind).rotations.len() as u8
}

/// Shape for a kind at a rotation index (taken modulo the rotation count)
pub fn get_shape(kind: PieceKind, rotation: u8) -> PieceShape {
    let rotations = tetromino(kind).rotations;
    rotations[rotation as usize % rotations.len()]
}

/// Next rotation index, clockwise or counter-clockwise
pub fn rotate_index(kind: PieceKind, rotation: u8, clockwise: bool) -> u8 {
    let count = rotation_count(kind);
    let current = rotation % count;
    if clockwise {
        (current + 1) % count
    } else {
        (current + count - 1) % count
    }
}

pub fn piece_color(kind: PieceKind) -> [u8; 3] {
    tetromino(kind).color
}
