//! Core types module - shared data structures and constants
//!
//! Pure data types used by the simulation, the terminal view and the input layer.
//! Nothing in here depends on another crate.
//!
//! # Board
//!
//! One shared playfield for both players:
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Piece spawn**: anchor at (6, 0)
//! - **Snake start**: (3, 10), heading right
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Frame interval of the runner (~60 FPS) |
//! | `TETRIS_INTERVAL_MS` | 700 | Gravity step interval |
//! | `SNAKE_INTERVAL_MS` | 150 | Snake step interval |
//!
//! # Examples
//!
//! ```
//! use tui_snaketris_types::{Direction, GameAction, PieceKind, Point, BOARD_COLS, BOARD_ROWS};
//!
//! assert_eq!(PieceKind::T.as_str(), "T");
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert_eq!(Point::new(3, 10).step(Direction::Right), Point::new(4, 10));
//! assert!(GameAction::Restart.allowed_when_over());
//! assert!(!GameAction::Turn(Direction::Left).allowed_when_over());
//! assert_eq!((BOARD_COLS, BOARD_ROWS), (12, 20));
//! ```

/// Board width in cells (12 columns)
pub const BOARD_COLS: u8 = 12;

/// Board height in cells (20 rows)
pub const BOARD_ROWS: u8 = 20;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = BOARD_COLS as usize * BOARD_ROWS as usize;

/// Frame interval of the terminal runner (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval for the falling piece
pub const TETRIS_INTERVAL_MS: u32 = 700;

/// Movement interval for the snake
pub const SNAKE_INTERVAL_MS: u32 = 150;

/// Points per cleared line
pub const LINE_CLEAR_POINTS: u32 = 10;

/// Points per eaten apple
pub const APPLE_POINTS: u32 = 1;

/// Anchor of a freshly spawned piece
pub const SPAWN_POINT: Point = Point::new((BOARD_COLS / 2) as i8, 0);

/// Head position of the snake at the start of an episode
pub const SNAKE_START: Point = Point::new((BOARD_COLS / 4) as i8, (BOARD_ROWS / 2) as i8);

/// Integer board coordinate. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// One cell further in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        self.offset(dx, dy)
    }

    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < BOARD_COLS as i8 && self.y >= 0 && self.y < BOARD_ROWS as i8
    }

    /// Wrap both coordinates onto the board (torus topology).
    pub fn wrapped(self) -> Self {
        Self {
            x: self.x.rem_euclid(BOARD_COLS as i8),
            y: self.y.rem_euclid(BOARD_ROWS as i8),
        }
    }
}

/// Snake heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector for this heading
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// The seven tetromino kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Position in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Upper-case letter shown in the NEXT panel
    ///
    /// ```
    /// use tui_snaketris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::T.as_str(), "T");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Grid cell. Only locked tetromino cells are ever solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Solid,
}

impl Cell {
    pub fn is_solid(&self) -> bool {
        matches!(self, Cell::Solid)
    }
}

/// Player commands for both sub-games
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    RotateCcw,
    Turn(Direction),
    Restart,
    ToggleGameOver,
}

impl GameAction {
    /// Actions still honoured after the game has ended
    pub fn allowed_when_over(&self) -> bool {
        matches!(self, GameAction::Restart | GameAction::ToggleGameOver)
    }
}

/// Why an episode ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    BoardFilled,
    SnakeHitWall,
    SnakeHitTetris,
    SnakeHitSelf,
}

impl GameOverReason {
    /// User-facing message
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverReason::BoardFilled => "Tetris board filled",
            GameOverReason::SnakeHitWall => "Snake hit a wall",
            GameOverReason::SnakeHitTetris => "Snake hit a Tetris piece",
            GameOverReason::SnakeHitSelf => "Snake hit itself",
        }
    }
}

impl std::fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How gravity treats the snake and the apple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GravityRule {
    /// Gravity ignores the snake and the apple.
    Always,
    /// Gravity holds the piece while the row below overlaps the snake or the apple.
    #[default]
    YieldToSnake,
}

impl GravityRule {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "always" | "plain" => Some(GravityRule::Always),
            "yield" | "yield-to-snake" | "yieldtosnake" => Some(GravityRule::YieldToSnake),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GravityRule::Always => "always",
            GravityRule::YieldToSnake => "yield",
        }
    }
}
