//! Core types for the warehouse engine
//!
//! Plain value types shared by every engine component.

use std::fmt;

/// Width and height of the square warehouse floor
pub const GRID_SIZE: i32 = 5;

/// A cell on the warehouse floor
///
/// `y = 0` is the top row (exit and reset zones), `y = 4` the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset saturating at the `i32` range, not clamped to the floor
    pub fn offset(&self, dx: i32, dy: i32) -> Coordinate {
        Coordinate::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    pub fn manhattan(&self, other: &Coordinate) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Item colour. The palette is closed; declaration order is the fixed
/// iteration order used for tie-breaks and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Green,
    Blue,
    Red,
}

impl Color {
    pub const PALETTE: [Color; 3] = [Color::Green, Color::Blue, Color::Red];

    pub fn name(&self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Red => "red",
        }
    }

    /// Single-character glyph for console maps
    pub fn glyph(&self) -> char {
        match self {
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Red => 'R',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of a floor item: colour plus cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId {
    pub color: Color,
    pub position: Coordinate,
}

impl ItemId {
    pub fn new(color: Color, position: Coordinate) -> Self {
        Self { color, position }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.color, self.position.x, self.position.y)
    }
}

/// Movement direction issued by input adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Grid delta; up moves towards the exit row
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A command accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Act,
}

/// Lifecycle of a play-through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Intro,
    Playing,
    Finished,
}

/// Why a command was turned into a no-op
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotPlaying,
    OutOfMoves,
    Cooldown,
    CargoFull,
}

/// Result of a move command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The forklift changed cell and one move was spent
    Moved(Coordinate),
    /// Wall hit: the clamped target equals the current cell, nothing spent
    Blocked,
    Rejected(Rejection),
}

/// Result of an act command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActOutcome {
    PickedUp(ItemId),
    /// No available item under the forklift
    Nothing,
    Rejected(Rejection),
}

/// Rank awarded when the shift ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    Trainee,
    Operator,
    Master,
}

/// Completed orders needed for [`Rank::Master`]
pub const RANK_MASTER_ORDERS: u32 = 3;
/// Completed orders needed for [`Rank::Operator`]
pub const RANK_OPERATOR_ORDERS: u32 = 2;

impl Rank {
    pub fn from_completed(completed_orders: u32) -> Self {
        if completed_orders >= RANK_MASTER_ORDERS {
            Rank::Master
        } else if completed_orders >= RANK_OPERATOR_ORDERS {
            Rank::Operator
        } else {
            Rank::Trainee
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rank::Master => "Master",
            Rank::Operator => "Operator",
            Rank::Trainee => "Trainee",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
