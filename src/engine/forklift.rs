//! The forklift and its cargo

use super::grid;
use super::types::{Color, Coordinate};

/// Ordered sequence of colours on the forks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cargo {
    items: Vec<Color>,
    capacity: usize,
}

impl Cargo {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn items(&self) -> &[Color] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append in pickup order. Returns false when full.
    pub fn push(&mut self, color: Color) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(color);
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// The player-controlled token
#[derive(Debug, Clone)]
pub struct Forklift {
    position: Coordinate,
    pub cargo: Cargo,
    /// Remaining move budget
    pub moves: u32,
    /// Bumped on every change of cell; deferred zone checks are tied to it
    arrival: u64,
}

impl Forklift {
    pub fn new(position: Coordinate, moves: u32, capacity: usize) -> Self {
        Self {
            position: grid::clamp(position),
            cargo: Cargo::new(capacity),
            moves,
            arrival: 0,
        }
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn arrival(&self) -> u64 {
        self.arrival
    }

    /// Try to drive by `(dx, dy)`
    ///
    /// Returns the new cell if the forklift actually moved. Only a change
    /// of cell spends a move; bumping into a wall is free. The caller is
    /// responsible for checking that the budget is not exhausted.
    pub fn drive(&mut self, dx: i32, dy: i32) -> Option<Coordinate> {
        let target = grid::clamp(self.position.offset(dx, dy));
        if target == self.position {
            return None;
        }
        self.position = target;
        self.moves = self.moves.saturating_sub(1);
        self.arrival += 1;
        Some(target)
    }
}
