//! Storage catalog
//!
//! Per-colour floor positions plus the collected set. Items are never
//! deleted during a session: picking one up only adds its identity to the
//! collected set, and restocking only appends positions.

use log::debug;
use std::collections::{BTreeMap, BTreeSet};

use super::types::{Color, Coordinate, ItemId};

/// Identities of items currently riding on the forklift
pub type CollectedSet = BTreeSet<ItemId>;

/// Restock triggers when a colour has fewer available items than this
pub const RESTOCK_THRESHOLD: usize = 3;

/// Maximum positions appended to one colour by a single restock
pub const RESTOCK_BATCH: usize = 3;

const fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

const GREEN_LAYOUT: &[Coordinate] = &[c(0, 1), c(0, 2), c(0, 3), c(1, 1), c(1, 2)];
const BLUE_LAYOUT: &[Coordinate] = &[c(2, 1), c(2, 2), c(3, 1)];
const RED_LAYOUT: &[Coordinate] = &[c(4, 1), c(4, 2), c(4, 3), c(3, 2)];

const GREEN_POOL: &[Coordinate] = &[
    c(0, 1),
    c(0, 2),
    c(0, 3),
    c(0, 4),
    c(1, 1),
    c(1, 2),
    c(1, 3),
];
const BLUE_POOL: &[Coordinate] = &[c(2, 1), c(2, 2), c(2, 3), c(2, 4), c(3, 1), c(3, 2)];
const RED_POOL: &[Coordinate] = &[c(4, 1), c(4, 2), c(4, 3), c(4, 4), c(3, 3), c(3, 4)];

/// Positions a colour starts the session with
pub fn initial_layout(color: Color) -> &'static [Coordinate] {
    match color {
        Color::Green => GREEN_LAYOUT,
        Color::Blue => BLUE_LAYOUT,
        Color::Red => RED_LAYOUT,
    }
}

/// Candidate positions a colour may be restocked into
pub fn restock_pool(color: Color) -> &'static [Coordinate] {
    match color {
        Color::Green => GREEN_POOL,
        Color::Blue => BLUE_POOL,
        Color::Red => RED_POOL,
    }
}

/// Per-colour counts appended by one restock pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestockReport {
    pub added: BTreeMap<Color, usize>,
}

impl RestockReport {
    pub fn total_added(&self) -> usize {
        self.added.values().sum()
    }
}

/// Floor inventory for one session
#[derive(Debug, Clone)]
pub struct StorageCatalog {
    items: BTreeMap<Color, Vec<Coordinate>>,
    collected: CollectedSet,
}

impl Default for StorageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageCatalog {
    /// Catalog holding the fixed starting layout and nothing collected
    pub fn new() -> Self {
        let items = Color::PALETTE
            .iter()
            .map(|&color| (color, initial_layout(color).to_vec()))
            .collect();
        Self {
            items,
            collected: CollectedSet::new(),
        }
    }

    /// Every position ever stocked for a colour, collected or not
    pub fn items(&self, color: Color) -> &[Coordinate] {
        self.items.get(&color).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_count(&self, color: Color) -> usize {
        self.items(color).len()
    }

    pub fn collected(&self) -> &CollectedSet {
        &self.collected
    }

    pub fn is_available(&self, item: &ItemId) -> bool {
        self.items(item.color).contains(&item.position) && !self.collected.contains(item)
    }

    pub fn available_count(&self, color: Color) -> usize {
        Self::count_available(&self.items, color, &self.collected)
    }

    fn count_available(
        items: &BTreeMap<Color, Vec<Coordinate>>,
        color: Color,
        collected: &CollectedSet,
    ) -> usize {
        items
            .get(&color)
            .map(|positions| {
                positions
                    .iter()
                    .filter(|&&pos| !collected.contains(&ItemId::new(color, pos)))
                    .count()
            })
            .unwrap_or(0)
    }

    /// Available items of a colour, in stocking order
    pub fn available_items(&self, color: Color) -> impl Iterator<Item = ItemId> + '_ {
        self.items(color)
            .iter()
            .map(move |&pos| ItemId::new(color, pos))
            .filter(move |item| !self.collected.contains(item))
    }

    /// The available item at a cell. Colours are scanned in palette order,
    /// so if two colours ever share a cell the earlier colour wins.
    pub fn available_item_at(&self, coord: Coordinate) -> Option<ItemId> {
        Color::PALETTE
            .iter()
            .map(|&color| ItemId::new(color, coord))
            .find(|item| self.is_available(item))
    }

    pub fn item_at(&self, coord: Coordinate) -> Option<Color> {
        self.available_item_at(coord).map(|item| item.color)
    }

    /// Mark an item as taken off the floor. Returns false if it was not
    /// available.
    pub fn collect(&mut self, item: ItemId) -> bool {
        if !self.is_available(&item) {
            return false;
        }
        self.collected.insert(item)
    }

    /// Put every collected item back on the floor, returning what was held
    pub fn take_collected(&mut self) -> CollectedSet {
        std::mem::take(&mut self.collected)
    }

    /// Refill low-stock colours from their candidate pools
    ///
    /// Availability is judged against `collected`, which is the set of
    /// items that were on the forklift when the delivery happened. For each
    /// colour with fewer than [`RESTOCK_THRESHOLD`] available items, up to
    /// [`RESTOCK_BATCH`] pool positions not already stocked for that colour
    /// are appended in pool order.
    pub fn restock(&mut self, collected: &CollectedSet) -> RestockReport {
        let mut report = RestockReport::default();

        for color in Color::PALETTE {
            let available = Self::count_available(&self.items, color, collected);
            if available >= RESTOCK_THRESHOLD {
                continue;
            }

            let positions = self.items.entry(color).or_default();
            let free: Vec<Coordinate> = restock_pool(color)
                .iter()
                .filter(|pos| !positions.contains(pos))
                .copied()
                .take(RESTOCK_BATCH)
                .collect();

            if free.is_empty() {
                continue;
            }

            debug!(
                "Restocking {}: {} available, adding {} positions",
                color,
                available,
                free.len()
            );
            report.added.insert(color, free.len());
            positions.extend(free);
        }

        report
    }
}
