//! Read-only view of a session for rendering adapters

use super::order::Order;
use super::types::{Color, Coordinate, GameStatus, Rank};

/// One floor cell as a renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub coordinate: Coordinate,
    /// Colour of the available item on this cell, if any
    pub item: Option<Color>,
    pub is_exit: bool,
    pub is_reset: bool,
    pub has_forklift: bool,
}

impl CellView {
    /// Console glyph: forklift first, then item, then zone markers
    pub fn glyph(&self) -> char {
        match (self.has_forklift, self.item) {
            (true, Some(_)) => '@',
            (true, None) => 'F',
            (false, Some(color)) => color.glyph(),
            (false, None) if self.is_reset => '~',
            (false, None) if self.is_exit => '^',
            _ => '.',
        }
    }
}

/// Everything the presentation layer may observe
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub status: GameStatus,
    pub time_left: u32,
    pub moves: u32,
    pub money: i32,
    pub completed_orders: u32,
    pub forklift: Coordinate,
    pub cargo: Vec<Color>,
    pub order: Order,
    pub last_delivered: Vec<Color>,
    /// Present only when the session is finished
    pub rank: Option<Rank>,
    /// Rows top to bottom, `cells[y][x]`
    pub cells: Vec<Vec<CellView>>,
}

impl Snapshot {
    pub fn cell(&self, coord: Coordinate) -> Option<&CellView> {
        let row = self.cells.get(usize::try_from(coord.y).ok()?)?;
        row.get(usize::try_from(coord.x).ok()?)
    }
}
