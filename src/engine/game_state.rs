//! Session bookkeeping
//!
//! Tracks the clock, money and completed orders of one play-through and
//! decides the rank when the shift ends.

use super::config::GameConfig;
use super::order::Order;
use super::types::{Color, GameStatus, Rank};

/// Progress and resources of the current play-through
#[derive(Debug, Clone)]
pub struct GameSession {
    pub status: GameStatus,

    /// Session seconds remaining
    pub time_left: u32,

    /// Accumulated reward
    pub money: i32,

    /// Orders delivered in the correct sequence
    pub completed_orders: u32,

    /// Sequence of the most recently completed order, for feedback
    pub last_delivered: Vec<Color>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// A session waiting on the intro screen
    pub fn new() -> Self {
        Self {
            status: GameStatus::Intro,
            time_left: 0,
            money: 0,
            completed_orders: 0,
            last_delivered: Vec::new(),
        }
    }

    /// Fresh playing state; nothing carries over from a previous run
    pub fn start(config: &GameConfig) -> Self {
        Self {
            status: GameStatus::Playing,
            time_left: config.start_time,
            ..Self::new()
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Credit a delivered order. Returns the time bonus granted.
    pub fn complete_order(&mut self, order: &Order) -> u32 {
        let bonus = order.time_bonus();
        self.money += order.reward;
        self.completed_orders += 1;
        self.time_left += bonus;
        self.last_delivered = order.items.clone();
        bonus
    }

    /// One clock second. Returns true if this tick ended the session.
    pub fn tick(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.status = GameStatus::Finished;
            return true;
        }
        false
    }

    /// Rank, only once the shift is over
    pub fn rank(&self) -> Option<Rank> {
        self.is_finished()
            .then(|| Rank::from_completed(self.completed_orders))
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        format!(
            "Status: {:?} | Time: {}s | Money: {} | Orders: {}",
            self.status, self.time_left, self.money, self.completed_orders
        )
    }
}
