//! Snapshot module - what a view needs to draw one frame
//!
//! `GameState::snapshot_into` refills a caller-owned `GameSnapshot` each frame,
//! and `fingerprint` lets the renderer skip frames that would look the same.

use crate::game_state::Tetromino;
use crate::pieces::piece_color;
use crate::types::{Cell, GameOverReason, PieceKind, Point, BOARD_COLS, BOARD_ROWS};

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x00000100000001B3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
    pub cells: [Point; 4],
    pub color: [u8; 3],
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            cells: value.cells(),
            color: piece_color(value.kind),
        }
    }
}

/// Read-only copy of everything a view needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub grid: [[Cell; BOARD_COLS as usize]; BOARD_ROWS as usize],
    pub active: ActiveSnapshot,
    pub next: PieceKind,
    /// Head first
    pub snake: Vec<Point>,
    pub apple: Option<Point>,
    pub tetris_score: u32,
    pub snake_score: u32,
    pub game_over: Option<GameOverReason>,
    /// Practice mode
    pub disable_game_over: bool,
}

impl GameSnapshot {
    pub fn total_score(&self) -> u32 {
        self.tetris_score + self.snake_score
    }

    /// FNV-1a 64-bit over everything drawn: grid, pieces, snake, apple,
    /// scores and flags. Equal states hash equal across runs and platforms.
    pub fn fingerprint(&self) -> u64 {
        let mut h = FNV_OFFSET;
        let mut feed = |b: u8| {
            h ^= b as u64;
            h = h.wrapping_mul(FNV_PRIME);
        };

        for row in self.grid.iter() {
            for cell in row.iter() {
                feed(cell.is_solid() as u8);
            }
        }

        feed(self.active.kind.index() as u8);
        feed(self.active.rotation);
        feed(self.active.x as u8);
        feed(self.active.y as u8);
        feed(self.next.index() as u8);

        for p in self.snake.iter() {
            feed(p.x as u8);
            feed(p.y as u8);
        }
        // Separates the snake from what follows
        feed(0xff);

        match self.apple {
            Some(p) => {
                feed(1);
                feed(p.x as u8);
                feed(p.y as u8);
            }
            None => feed(0),
        }

        for b in self
            .tetris_score
            .to_le_bytes()
            .into_iter()
            .chain(self.snake_score.to_le_bytes())
        {
            feed(b);
        }
        feed(self.game_over.is_some() as u8);
        feed(self.disable_game_over as u8);

        h
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[Cell::Empty; BOARD_COLS as usize]; BOARD_ROWS as usize],
            active: ActiveSnapshot::from(Tetromino::new(PieceKind::I)),
            next: PieceKind::I,
            snake: Vec::new(),
            apple: None,
            tetris_score: 0,
            snake_score: 0,
            game_over: None,
            disable_game_over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameState;

    #[test]
    fn fingerprint_is_stable_for_equal_states() {
        let a = GameState::new(42).snapshot();
        let b = GameState::new(42).snapshot();
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn fingerprint_changes_with_grid() {
        let mut snap = GameState::new(42).snapshot();
        let before = snap.fingerprint();
        snap.grid[19][0] = Cell::Solid;
        assert_ne!(snap.fingerprint(), before);
    }

    #[test]
    fn fingerprint_changes_with_snake() {
        let mut snap = GameState::new(42).snapshot();
        let before = snap.fingerprint();
        snap.snake.push(Point::new(2, 10));
        assert_ne!(snap.fingerprint(), before);
    }

    #[test]
    fn fingerprint_changes_with_practice_mode() {
        let mut snap = GameState::new(42).snapshot();
        let before = snap.fingerprint();
        snap.disable_game_over = true;
        assert_ne!(snap.fingerprint(), before);
    }
}
