use std::collections::VecDeque;

use super::types::{Direction, GridPosition};

#[derive(Clone, Debug, PartialEq)]
pub struct Snake {
    body: VecDeque<GridPosition>,
    direction: Direction,
    /// Cells per second.
    pub speed: f64,
}

impl Snake {
    pub fn new(start: GridPosition, direction: Direction, speed: f64) -> Self {
        Self {
            body: VecDeque::from([start]),
            direction,
            speed,
        }
    }

    pub fn head(&self) -> GridPosition {
        // The body is created with one cell and never shrinks below it.
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<GridPosition> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_head(&self) -> GridPosition {
        self.head() + self.direction
    }

    /// Steps one cell forward keeping the length.
    pub fn advance(&mut self) {
        let next_head = self.next_head();
        self.body.push_front(next_head);
        self.body.pop_back();
    }

    /// Steps one cell forward keeping the tail.
    pub fn grow(&mut self) {
        let next_head = self.next_head();
        self.body.push_front(next_head);
    }

    /// Applies a steering request. Reversals are ignored and reported as `false`.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Turns without the reversal guard.
    pub fn face(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn contains(&self, pos: GridPosition) -> bool {
        self.body.contains(&pos)
    }

    pub fn hits_own_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&segment| segment == head)
    }

    #[cfg(test)]
    pub(crate) fn from_body(body: Vec<GridPosition>, direction: Direction, speed: f64) -> Self {
        assert!(!body.is_empty(), "snake body must not be empty");
        Self {
            body: body.into(),
            direction,
            speed,
        }
    }
}
