//! Game state module - the shared simulation
//!
//! Owns the grid, the falling piece, the snake and the apple, and advances the
//! two sub-games on independent timers. Input handlers and the frame tick both
//! take `&mut GameState`; nothing else holds onto the state.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::pieces::{get_shape, rotate_index, PieceShape};
use crate::rng::{RandomSource, SimpleRng};
use crate::rules::Rules;
use crate::snake::Snake;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Always below `rotation_count(kind)`
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at the spawn anchor
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: SPAWN_POINT.x,
            y: SPAWN_POINT.y,
        }
    }

    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board cells
    pub fn cells(&self) -> [Point; 4] {
        self.shape().map(|(dx, dy)| Point::new(self.x + dx, self.y + dy))
    }

    pub fn occupies(&self, p: Point) -> bool {
        self.cells().contains(&p)
    }

    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn rotated(&self, clockwise: bool) -> Self {
        Self {
            rotation: rotate_index(self.kind, self.rotation, clockwise),
            ..*self
        }
    }

    /// Every cell inside the side walls and above the floor, and no cell on the
    /// board overlapping a solid cell. Cells above the top edge are allowed.
    pub fn is_placeable(&self, grid: &Grid) -> bool {
        self.cells().iter().all(|p| {
            p.x >= 0
                && p.x < BOARD_COLS as i8
                && p.y < BOARD_ROWS as i8
                && (p.y < 0 || !grid.is_solid(p.x, p.y))
        })
    }
}

/// What happened during one tick or action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickEvents {
    pub gravity_fired: bool,
    /// Gravity waited for the snake or the apple
    pub gravity_held: bool,
    pub locked: bool,
    pub lines_cleared: u32,
    pub snake_moved: bool,
    pub apple_eaten: bool,
    pub apple_spawned: Option<Point>,
    /// Set only on the frame the game ends
    pub game_over: Option<GameOverReason>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    grid: Grid,
    active: Tetromino,
    next: PieceKind,
    snake: Snake,
    apple: Option<Point>,
    tetris_score: u32,
    snake_score: u32,
    lines: u32,
    game_over: Option<GameOverReason>,
    rules: Rules,
    tetris_timer_ms: u32,
    snake_timer_ms: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    rng: R,
}

impl GameState<SimpleRng> {
    /// New game with default rules and the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(Rules::default(), SimpleRng::new(seed))
    }

    pub fn with_rules(seed: u32, rules: Rules) -> Self {
        Self::with_rng(rules, SimpleRng::new(seed))
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: RandomSource> GameState<R> {
    /// New game drawing pieces and apples from `rng`
    pub fn with_rng(rules: Rules, mut rng: R) -> Self {
        let active = Tetromino::new(rng.next_piece());
        let next = rng.next_piece();
        let mut state = Self {
            grid: Grid::new(),
            active,
            next,
            snake: Snake::default(),
            apple: None,
            tetris_score: 0,
            snake_score: 0,
            lines: 0,
            game_over: None,
            rules,
            tetris_timer_ms: 0,
            snake_timer_ms: 0,
            episode_id: 0,
            rng,
        };
        state.spawn_apple();
        state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Tetromino {
        self.active
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Option<Point> {
        self.apple
    }

    pub fn tetris_score(&self) -> u32 {
        self.tetris_score
    }

    pub fn snake_score(&self) -> u32 {
        self.snake_score
    }

    pub fn total_score(&self) -> u32 {
        self.tetris_score + self.snake_score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn game_over_disabled(&self) -> bool {
        self.rules.disable_game_over
    }

    pub fn set_game_over_disabled(&mut self, disabled: bool) {
        if self.rules.disable_game_over != disabled {
            log::info!("practice mode {}", if disabled { "on" } else { "off" });
        }
        self.rules.disable_game_over = disabled;
    }

    pub fn set_gravity_rule(&mut self, gravity: GravityRule) {
        self.rules.gravity = gravity;
    }

    /// Apply a player action. Returns whether anything changed.
    ///
    /// After game over only `Restart` and `ToggleGameOver` are honoured.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over.is_some() && !action.allowed_when_over() {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => {
                let mut events = TickEvents::default();
                self.soft_drop(&mut events);
                true
            }
            GameAction::RotateCw => self.try_rotate(true),
            GameAction::RotateCcw => self.try_rotate(false),
            GameAction::Turn(dir) => self.snake.set_direction(dir),
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::ToggleGameOver => {
                let disabled = !self.rules.disable_game_over;
                self.set_game_over_disabled(disabled);
                true
            }
        }
    }

    /// Advance both timers by `elapsed_ms`.
    ///
    /// Each timer fires at most once per call and restarts from zero when it
    /// does. Gravity runs first; if it ends the game the snake stays put.
    pub fn tick(&mut self, elapsed_ms: u32) -> TickEvents {
        let mut events = TickEvents::default();
        if self.game_over.is_some() {
            return events;
        }

        self.tetris_timer_ms = self.tetris_timer_ms.saturating_add(elapsed_ms);
        self.snake_timer_ms = self.snake_timer_ms.saturating_add(elapsed_ms);

        if self.tetris_timer_ms >= self.rules.tetris_interval_ms {
            self.tetris_timer_ms = 0;
            events.gravity_fired = true;
            self.gravity_step(&mut events);
        }

        if self.game_over.is_some() {
            return events;
        }

        if self.snake_timer_ms >= self.rules.snake_interval_ms {
            self.snake_timer_ms = 0;
            self.snake_step(&mut events);
        }

        events
    }

    /// Reset everything except the rules and the random source.
    pub fn restart(&mut self) {
        self.grid.clear();
        self.active = Tetromino::new(self.rng.next_piece());
        self.next = self.rng.next_piece();
        self.snake = Snake::default();
        self.apple = None;
        self.tetris_score = 0;
        self.snake_score = 0;
        self.lines = 0;
        self.game_over = None;
        self.tetris_timer_ms = 0;
        self.snake_timer_ms = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.spawn_apple();
        log::info!("episode {} started", self.episode_id);
    }

    /// Raise a terminal condition unless practice mode suppresses it.
    /// Returns true when the game actually ended.
    fn end_game(&mut self, reason: GameOverReason, events: &mut TickEvents) -> bool {
        if self.rules.disable_game_over {
            log::debug!("suppressed game over: {}", reason);
            return false;
        }
        self.game_over = Some(reason);
        events.game_over = Some(reason);
        log::info!(
            "game over: {} (tetris {}, snake {})",
            reason,
            self.tetris_score,
            self.snake_score
        );
        true
    }

    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let candidate = self.active.moved(dx, dy);
        if candidate.is_placeable(&self.grid) {
            self.active = candidate;
            return true;
        }
        false
    }

    fn try_rotate(&mut self, clockwise: bool) -> bool {
        let candidate = self.active.rotated(clockwise);
        if candidate == self.active {
            return false;
        }
        if candidate.is_placeable(&self.grid) {
            self.active = candidate;
            return true;
        }
        false
    }

    /// One row down, or lock in place when the row below is blocked.
    fn soft_drop(&mut self, events: &mut TickEvents) {
        if !self.try_move(0, 1) {
            self.lock_piece(events);
        }
    }

    fn gravity_step(&mut self, events: &mut TickEvents) {
        let candidate = self.active.moved(0, 1);
        if !candidate.is_placeable(&self.grid) {
            self.lock_piece(events);
            return;
        }

        if self.rules.gravity == GravityRule::YieldToSnake {
            let blocked = candidate
                .cells()
                .iter()
                .any(|&p| self.snake.contains(p) || self.apple == Some(p));
            if blocked {
                events.gravity_held = true;
                return;
            }
        }

        self.active = candidate;
    }

    /// Write the active piece into the grid, clear lines and promote the next piece.
    fn lock_piece(&mut self, events: &mut TickEvents) {
        let cells = self.active.cells();
        self.grid.lock_cells(&cells);
        events.locked = true;

        if let Some(apple) = self.apple {
            if cells.contains(&apple) {
                self.apple = None;
            }
        }

        let cleared = self.grid.clear_full_rows();
        if cleared > 0 {
            self.lines += cleared;
            self.tetris_score += cleared * LINE_CLEAR_POINTS;
            events.lines_cleared += cleared;
            log::debug!("cleared {} line(s), tetris score {}", cleared, self.tetris_score);
        }

        self.active = Tetromino::new(self.next);
        self.next = self.rng.next_piece();

        if !self.active.is_placeable(&self.grid) {
            self.end_game(GameOverReason::BoardFilled, events);
        }
    }

    fn snake_step(&mut self, events: &mut TickEvents) {
        let mut head = self.snake.next_head();

        if !head.in_bounds() {
            if self.end_game(GameOverReason::SnakeHitWall, events) {
                return;
            }
            head = head.wrapped();
        }

        if self.grid.is_solid_at(head) && self.end_game(GameOverReason::SnakeHitTetris, events) {
            return;
        }

        if self.snake.contains(head) && self.end_game(GameOverReason::SnakeHitSelf, events) {
            return;
        }

        let eats = self.apple == Some(head);
        self.snake.advance(head, eats);
        events.snake_moved = true;

        if eats {
            self.apple = None;
            self.snake_score += APPLE_POINTS;
            events.apple_eaten = true;
        }

        if self.apple.is_none() {
            events.apple_spawned = self.spawn_apple();
        }
    }

    /// Place the apple uniformly among cells that are empty and free of the
    /// snake and the active piece. Leaves it absent when no such cell exists.
    pub fn spawn_apple(&mut self) -> Option<Point> {
        let piece = self.active.cells();
        let mut candidates: ArrayVec<Point, BOARD_CELLS> = ArrayVec::new();
        for y in 0..BOARD_ROWS as i8 {
            for x in 0..BOARD_COLS as i8 {
                let p = Point::new(x, y);
                if self.grid.is_empty_at(p) && !self.snake.contains(p) && !piece.contains(&p) {
                    candidates.push(p);
                }
            }
        }

        self.apple = if candidates.is_empty() {
            None
        } else {
            let idx = self.rng.next_range(candidates.len() as u32) as usize;
            Some(candidates[idx])
        };
        if let Some(p) = self.apple {
            log::debug!("apple at ({}, {})", p.x, p.y);
        }
        self.apple
    }

    /// Copy the drawable state into `out`, reusing its snake buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_rows(&mut out.grid);
        out.active = ActiveSnapshot::from(self.active);
        out.next = self.next;
        out.snake.clear();
        out.snake.extend(self.snake.segments());
        out.apple = self.apple;
        out.tetris_score = self.tetris_score;
        out.snake_score = self.snake_score;
        out.game_over = self.game_over;
        out.disable_game_over = self.rules.disable_game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
