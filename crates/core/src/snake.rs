//! Snake module - body segments and heading
//!
//! The body is head-first. A turn is only rejected when it would reverse the
//! heading of the last completed step, so two quick turns between steps can
//! never fold the snake back onto its neck.

use std::collections::VecDeque;

use crate::types::{Direction, Point, BOARD_CELLS, SNAKE_START};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Point>,
    /// Heading used by the next step
    direction: Direction,
    /// Heading of the most recent step
    last_step: Direction,
}

impl Snake {
    /// One-segment snake
    pub fn new(head: Point, direction: Direction) -> Self {
        let mut body = VecDeque::with_capacity(BOARD_CELLS);
        body.push_back(head);
        Self {
            body,
            direction,
            last_step: direction,
        }
    }

    /// Snake from explicit segments (head first). `None` when `segments` is empty.
    pub fn from_segments(segments: &[Point], direction: Direction) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        Some(Self {
            body: segments.iter().copied().collect(),
            direction,
            last_step: direction,
        })
    }

    pub fn head(&self) -> Point {
        // body is never empty
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true: a snake keeps at least its head.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.body.contains(&p)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Request a new heading. Returns false when it reverses the last step.
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        if dir.is_opposite(self.last_step) {
            return false;
        }
        self.direction = dir;
        true
    }

    /// Head position after one step, before bounds handling
    pub fn next_head(&self) -> Point {
        self.head().step(self.direction)
    }

    /// Move the head to `new_head`. The tail is kept when `grow` is set.
    pub fn advance(&mut self, new_head: Point, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
        self.last_step = self.direction;
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new(SNAKE_START, Direction::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snake_starts_at_start_point() {
        let snake = Snake::default();
        assert_eq!(snake.head(), SNAKE_START);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn reversal_is_rejected() {
        let mut snake = Snake::new(Point::new(5, 5), Direction::Right);
        assert!(!snake.set_direction(Direction::Left));
        assert_eq!(snake.direction(), Direction::Right);
        assert!(snake.set_direction(Direction::Up));
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn two_turns_between_steps_cannot_reverse() {
        let mut snake = Snake::from_segments(
            &[Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)],
            Direction::Right,
        )
        .unwrap();
        assert!(snake.set_direction(Direction::Up));
        // Still measured against the last step (right), not the pending heading.
        assert!(!snake.set_direction(Direction::Left));
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn advance_without_growth_keeps_length() {
        let mut snake =
            Snake::from_segments(&[Point::new(5, 5), Point::new(4, 5)], Direction::Right).unwrap();
        let head = snake.next_head();
        snake.advance(head, false);
        assert_eq!(snake.len(), 2);
        assert_eq!(
            snake.segments().collect::<Vec<_>>(),
            vec![Point::new(6, 5), Point::new(5, 5)]
        );
    }

    #[test]
    fn advance_with_growth_keeps_tail() {
        let mut snake = Snake::new(Point::new(5, 5), Direction::Down);
        snake.advance(snake.next_head(), true);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Point::new(5, 6));
        assert!(snake.contains(Point::new(5, 5)));
    }

    #[test]
    fn last_step_updates_after_advance() {
        let mut snake = Snake::new(Point::new(5, 5), Direction::Right);
        assert!(snake.set_direction(Direction::Up));
        snake.advance(snake.next_head(), false);
        assert!(!snake.set_direction(Direction::Down));
        assert!(snake.set_direction(Direction::Left));
    }

    #[test]
    fn empty_segments_are_rejected() {
        assert!(Snake::from_segments(&[], Direction::Up).is_none());
    }
}
