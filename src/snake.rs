use std::collections::VecDeque;

use crate::grid::{Cell, Direction::{self, *}, GridWorld};

const INITIAL_DIRECTION: Direction = Right;

pub struct Snake {
    // Head at the front
    segments: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Option<Direction>,
    last_tail: Option<Cell>,
}

impl Snake {
    pub fn new(grid: &GridWorld) -> Self {
        let mut snake = Snake {
            segments: VecDeque::new(),
            direction: INITIAL_DIRECTION,
            pending_direction: None,
            last_tail: None,
        };
        snake.reset(grid);
        snake
    }

    pub fn reset(&mut self, grid: &GridWorld) {
        self.segments.clear();
        self.segments.push_back(grid.center());
        self.direction = INITIAL_DIRECTION;
        self.pending_direction = None;
        self.last_tail = None;
    }

    /// Queues a turn for the next step. Reversals are dropped; a newer
    /// request replaces an unconsumed one.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.direction) {
            return false;
        }

        self.pending_direction = Some(direction);
        true
    }

    pub fn step(&mut self, grid: &GridWorld) {
        if let Some(dir) = self.pending_direction.take() {
            self.direction = dir;
        }

        let new_head = grid.wrap(self.head(), self.direction);
        debug_assert!(grid.contains(new_head));
        self.segments.push_front(new_head);
        self.last_tail = self.segments.pop_back();
    }

    /// Only meaningful right after `step`, which records the vacated tail.
    pub fn grow(&mut self) {
        debug_assert!(self.last_tail.is_some(), "grow() called before any step()");
        if let Some(tail) = self.last_tail {
            self.segments.push_back(tail);
        }
    }

    pub fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.segments.iter().skip(1).any(|cell| *cell == head)
    }

    pub fn head(&self) -> Cell {
        // Never empty: every mutation keeps at least the head
        self.segments[0]
    }

    pub fn segments(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.segments.iter()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn last_tail(&self) -> Option<Cell> {
        self.last_tail
    }
}
