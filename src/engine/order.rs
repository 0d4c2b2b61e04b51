//! Orders and the order generator

use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use rand::SeedableRng;

use super::storage::StorageCatalog;
use super::types::Color;

/// Base reward of a generated order
pub const ORDER_BASE_REWARD: i32 = 1500;
/// Extra reward per item in a generated order
pub const ORDER_REWARD_PER_ITEM: i32 = 300;
/// Countdown every order starts with, whatever its length
pub const ORDER_TIME_LEFT: u32 = 20;
/// Reward of the fallback order used when stock is too thin
pub const FALLBACK_REWARD: i32 = 1800;
/// Shortest and longest generated sequence
pub const ORDER_MIN_LEN: usize = 2;
pub const ORDER_MAX_LEN: usize = 5;
/// A colour must have at least this many available items to be ordered
pub const MIN_AVAILABLE_FOR_ORDER: usize = 2;
/// Countdown at or below which an order is shown as urgent
pub const URGENT_TIME_LEFT: u32 = 10;

/// Session seconds granted for completing an order of the given length
pub fn time_bonus_for_len(len: usize) -> u32 {
    match len {
        2 => 20,
        3 => 25,
        4 => 30,
        _ => 35,
    }
}

/// The target sequence the player must replicate in cargo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub items: Vec<Color>,
    pub reward: i32,
    /// Display countdown; reaching zero has no gameplay effect
    pub time_left: u32,
}

impl Order {
    pub fn new(items: Vec<Color>, reward: i32) -> Self {
        Self {
            items,
            reward,
            time_left: ORDER_TIME_LEFT,
        }
    }

    /// The order every session starts with
    pub fn initial() -> Self {
        Self::new(vec![Color::Green, Color::Green, Color::Red], 2100)
    }

    /// Used when no colour has enough stock to build a random order
    pub fn fallback() -> Self {
        Self::new(vec![Color::Green, Color::Green], FALLBACK_REWARD)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn time_bonus(&self) -> u32 {
        time_bonus_for_len(self.items.len())
    }

    /// Exact positional equality with a cargo sequence
    pub fn matches(&self, cargo: &[Color]) -> bool {
        self.items.as_slice() == cargo
    }

    /// Whether cargo can still grow into this order
    pub fn accepts_prefix(&self, cargo: &[Color]) -> bool {
        self.items.starts_with(cargo)
    }

    pub fn is_urgent(&self) -> bool {
        self.time_left <= URGENT_TIME_LEFT
    }

    pub fn tick(&mut self) {
        self.time_left = self.time_left.saturating_sub(1);
    }
}

/// Produces random orders from the colours currently in stock
///
/// Slots are drawn independently from the qualifying colours, so an order
/// may ask for more of a colour than is on the floor.
#[derive(Debug)]
pub struct OrderGenerator {
    /// Optional seeded RNG for reproducible sessions
    rng: Option<StdRng>,
}

impl Default for OrderGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderGenerator {
    pub fn new() -> Self {
        Self { rng: None }
    }

    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    fn random_len(&mut self) -> usize {
        let range = ORDER_MIN_LEN..=ORDER_MAX_LEN;
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    fn choose_color(&mut self, colors: &[Color]) -> Option<Color> {
        match &mut self.rng {
            Some(rng) => colors.choose(rng).copied(),
            None => colors.choose(&mut rand::rng()).copied(),
        }
    }

    /// Build the next order against the catalog's current availability
    pub fn generate(&mut self, catalog: &StorageCatalog) -> Order {
        let qualifying: Vec<Color> = Color::PALETTE
            .iter()
            .copied()
            .filter(|&color| catalog.available_count(color) >= MIN_AVAILABLE_FOR_ORDER)
            .collect();

        if qualifying.is_empty() {
            debug!("No colour has enough stock, issuing fallback order");
            return Order::fallback();
        }

        let len = self.random_len();
        let items: Vec<Color> = (0..len)
            .filter_map(|_| self.choose_color(&qualifying))
            .collect();
        let reward = ORDER_BASE_REWARD + ORDER_REWARD_PER_ITEM * items.len() as i32;

        Order::new(items, reward)
    }
}
