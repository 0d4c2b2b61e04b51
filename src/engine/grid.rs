//! Floor geometry
//!
//! Pure functions over the fixed 5x5 floor. The top row holds the exit
//! zone (x 0..=3) and the reset zone (x = 4).

use super::types::{Coordinate, GRID_SIZE};

/// The single cell that abandons cargo
pub const RESET_CELL: Coordinate = Coordinate::new(GRID_SIZE - 1, 0);

/// Clamp a coordinate onto the floor. There is no wraparound.
pub fn clamp(coord: Coordinate) -> Coordinate {
    Coordinate::new(
        coord.x.clamp(0, GRID_SIZE - 1),
        coord.y.clamp(0, GRID_SIZE - 1),
    )
}

pub fn in_bounds(coord: Coordinate) -> bool {
    (0..GRID_SIZE).contains(&coord.x) && (0..GRID_SIZE).contains(&coord.y)
}

pub fn is_exit(coord: Coordinate) -> bool {
    coord.y == 0 && (0..GRID_SIZE - 1).contains(&coord.x)
}

pub fn is_reset(coord: Coordinate) -> bool {
    coord == RESET_CELL
}

/// Exit cells, left to right
pub fn exit_cells() -> impl Iterator<Item = Coordinate> {
    (0..GRID_SIZE - 1).map(|x| Coordinate::new(x, 0))
}

/// Every floor cell in row-major order
pub fn cells() -> impl Iterator<Item = Coordinate> {
    (0..GRID_SIZE).flat_map(|y| (0..GRID_SIZE).map(move |x| Coordinate::new(x, y)))
}
