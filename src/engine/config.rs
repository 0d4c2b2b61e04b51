//! Tunable constants of a session
//!
//! `GameConfig::default()` carries the documented game rules; tests and the
//! headless driver may shorten delays but the rules themselves are fixed.

use super::types::Coordinate;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Session length in seconds at start
    pub start_time: u32,
    /// Move budget at start
    pub start_moves: u32,
    /// Moves granted per completed order
    pub moves_per_order: u32,
    /// Maximum items on the forks
    pub cargo_capacity: usize,
    /// Where the forklift spawns
    pub start_position: Coordinate,
    /// Window after a pickup during which `act` is ignored
    pub pickup_cooldown_ms: u64,
    /// Delay before cargo is dropped on the reset cell
    pub reset_delay_ms: u64,
    /// Delay before a matching delivery is credited
    pub delivery_delay_ms: u64,
    /// Delay before a mismatched delivery is discarded
    pub mismatch_delay_ms: u64,
    /// Session clock period
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_time: 60,
            start_moves: 20,
            moves_per_order: 10,
            cargo_capacity: 5,
            start_position: Coordinate::new(1, 4),
            pickup_cooldown_ms: 300,
            reset_delay_ms: 200,
            delivery_delay_ms: 300,
            mismatch_delay_ms: 500,
            tick_ms: 1000,
        }
    }
}
