//! Pieces module tests - catalog shapes and rotation wrapping

use tui_snaketris::core::pieces::{get_shape, piece_color, rotate_index, rotation_count, CATALOG};
use tui_snaketris::core::Tetromino;
use tui_snaketris::types::{PieceKind, Point, SPAWN_POINT};

// ============== Shape Tests ==============

#[test]
fn test_i_piece_shapes() {
    assert_eq!(get_shape(PieceKind::I, 0), [(-1, 0), (0, 0), (1, 0), (2, 0)]);
    assert_eq!(get_shape(PieceKind::I, 1), [(0, -1), (0, 0), (0, 1), (0, 2)]);
}

#[test]
fn test_o_piece_single_state() {
    let shape = get_shape(PieceKind::O, 0);
    assert_eq!(shape, [(0, 0), (1, 0), (0, 1), (1, 1)]);
    for r in 1..8 {
        assert_eq!(get_shape(PieceKind::O, r), shape);
    }
}

#[test]
fn test_s_and_z_have_two_states() {
    for kind in [PieceKind::S, PieceKind::Z] {
        assert_eq!(rotation_count(kind), 2);
        assert_ne!(get_shape(kind, 0), get_shape(kind, 1));
        assert_eq!(get_shape(kind, 2), get_shape(kind, 0));
    }
}

#[test]
fn test_t_j_l_have_four_distinct_states() {
    for kind in [PieceKind::T, PieceKind::J, PieceKind::L] {
        assert_eq!(rotation_count(kind), 4);
        for a in 0..4u8 {
            for b in (a + 1)..4u8 {
                assert_ne!(get_shape(kind, a), get_shape(kind, b), "{:?}", kind);
            }
        }
    }
}

// ============== Rotation Tests ==============

#[test]
fn test_rotate_cw_then_ccw_is_identity() {
    for kind in PieceKind::ALL {
        for r in 0..rotation_count(kind) {
            let cw = rotate_index(kind, r, true);
            assert_eq!(rotate_index(kind, cw, false), r, "{:?} {}", kind, r);
        }
    }
}

#[test]
fn test_full_turn_returns_to_start() {
    for kind in PieceKind::ALL {
        let mut r = 0;
        for _ in 0..rotation_count(kind) {
            r = rotate_index(kind, r, true);
        }
        assert_eq!(r, 0, "{:?}", kind);
    }
}

// ============== Placement ==============

#[test]
fn test_spawn_position() {
    let t = Tetromino::new(PieceKind::T);
    assert_eq!((t.x, t.y), (SPAWN_POINT.x, SPAWN_POINT.y));
    assert_eq!((t.x, t.y), (6, 0));
    assert_eq!(t.rotation, 0);
    assert_eq!(
        t.cells(),
        [
            Point::new(5, 0),
            Point::new(6, 0),
            Point::new(7, 0),
            Point::new(6, 1)
        ]
    );
}

#[test]
fn test_every_kind_spawns_on_empty_board() {
    let grid = tui_snaketris::core::Grid::new();
    for kind in PieceKind::ALL {
        assert!(Tetromino::new(kind).is_placeable(&grid), "{:?}", kind);
    }
}

#[test]
fn test_colors_are_distinct() {
    let colors: Vec<[u8; 3]> = CATALOG.iter().map(|d| d.color).collect();
    for i in 0..colors.len() {
        for j in (i + 1)..colors.len() {
            assert_ne!(colors[i], colors[j]);
        }
    }
    assert_eq!(piece_color(PieceKind::L), [255, 165, 0]);
}
