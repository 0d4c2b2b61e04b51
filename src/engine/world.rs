//! Main engine that ties everything together
//!
//! `WarehouseWorld` owns the whole session aggregate. Input adapters call
//! the command methods (`start_game`, `move_forklift`, `act`), the host
//! advances the virtual clock with `advance`, and renderers read
//! `snapshot`. Every command checks its guards before touching state, so a
//! rejected command never applies partially.

use log::{debug, info};

use super::config::GameConfig;
use super::forklift::Forklift;
use super::game_state::GameSession;
use super::grid;
use super::order::{Order, OrderGenerator};
use super::scheduler::{EventKind, ScheduledEvent, Scheduler};
use super::snapshot::{CellView, Snapshot};
use super::storage::StorageCatalog;
use super::types::{
    ActOutcome, Color, Command, Coordinate, Direction, MoveOutcome, Rejection, GRID_SIZE,
};

/// Result of applying a [`Command`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Move(MoveOutcome),
    Act(ActOutcome),
}

/// How the last exit or reset transaction resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Delivered,
    Mismatched,
    Dropped,
}

/// The warehouse game engine
pub struct WarehouseWorld {
    pub config: GameConfig,

    /// Clock, money and progress
    pub session: GameSession,

    pub forklift: Forklift,

    /// Floor inventory and collected set
    pub storage: StorageCatalog,

    /// The single active order
    pub order: Order,

    orders: OrderGenerator,

    scheduler: Scheduler,

    /// Bumped on every start; queued events from older runs are ignored
    generation: u64,

    /// Pickup debounce
    cooldown_active: bool,

    last_transaction: Option<Transaction>,
}

impl Default for WarehouseWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl WarehouseWorld {
    fn new_internal(config: GameConfig, orders: OrderGenerator) -> Self {
        let forklift = Forklift::new(
            config.start_position,
            config.start_moves,
            config.cargo_capacity,
        );
        Self {
            config,
            session: GameSession::new(),
            forklift,
            storage: StorageCatalog::new(),
            order: Order::initial(),
            orders,
            scheduler: Scheduler::new(),
            generation: 0,
            cooldown_active: false,
            last_transaction: None,
        }
    }

    /// Engine on the intro screen with the default rules
    pub fn new() -> Self {
        Self::new_internal(GameConfig::default(), OrderGenerator::new())
    }

    /// Create an engine whose order generation is reproducible
    pub fn new_with_seed(seed: u64) -> Self {
        Self::new_internal(GameConfig::default(), OrderGenerator::new_with_seed(seed))
    }

    pub fn with_config(config: GameConfig, seed: Option<u64>) -> Self {
        let orders = match seed {
            Some(seed) => OrderGenerator::new_with_seed(seed),
            None => OrderGenerator::new(),
        };
        Self::new_internal(config, orders)
    }

    /// Current instant of the virtual clock in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cooldown_active(&self) -> bool {
        self.cooldown_active
    }

    pub fn last_transaction(&self) -> Option<Transaction> {
        self.last_transaction
    }

    pub fn pending_events(&self) -> usize {
        self.scheduler.len()
    }

    /// Whether a reset or delivery for the forklift's current arrival is
    /// still waiting to fire
    pub fn has_pending_transaction(&self) -> bool {
        let arrival = self.forklift.arrival();
        self.scheduler.any(|kind| match kind {
            EventKind::ResetCargo { arrival: a, .. } | EventKind::Delivery { arrival: a, .. } => {
                *a == arrival
            }
            _ => false,
        })
    }

    /// Full re-initialisation into a fresh playing state
    pub fn start_game(&mut self) {
        self.generation += 1;
        self.scheduler.clear();
        self.session = GameSession::start(&self.config);
        self.forklift = Forklift::new(
            self.config.start_position,
            self.config.start_moves,
            self.config.cargo_capacity,
        );
        self.storage = StorageCatalog::new();
        self.order = Order::initial();
        self.cooldown_active = false;
        self.last_transaction = None;
        self.scheduler
            .schedule(self.config.tick_ms, self.generation, EventKind::ClockTick);

        info!(
            "Shift started (run {}): {}s, {} moves",
            self.generation, self.session.time_left, self.forklift.moves
        );
    }

    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::Move(direction) => CommandOutcome::Move(self.move_forklift(direction)),
            Command::Act => CommandOutcome::Act(self.act()),
        }
    }

    pub fn move_forklift(&mut self, direction: Direction) -> MoveOutcome {
        let (dx, dy) = direction.delta();
        self.move_by(dx, dy)
    }

    /// Drive by an arbitrary delta; the target is clamped to the floor
    pub fn move_by(&mut self, dx: i32, dy: i32) -> MoveOutcome {
        if !self.session.is_playing() {
            return MoveOutcome::Rejected(Rejection::NotPlaying);
        }
        if self.forklift.moves == 0 {
            return MoveOutcome::Rejected(Rejection::OutOfMoves);
        }

        match self.forklift.drive(dx, dy) {
            None => MoveOutcome::Blocked,
            Some(cell) => {
                debug!("Forklift moved to {} ({} moves left)", cell, self.forklift.moves);
                self.on_arrival(cell);
                MoveOutcome::Moved(cell)
            }
        }
    }

    /// Queue the zone transaction for a fresh arrival, if any applies
    fn on_arrival(&mut self, cell: Coordinate) {
        if self.forklift.cargo.is_empty() {
            return;
        }
        let arrival = self.forklift.arrival();

        if grid::is_reset(cell) {
            self.scheduler.schedule(
                self.config.reset_delay_ms,
                self.generation,
                EventKind::ResetCargo { cell, arrival },
            );
        } else if grid::is_exit(cell) {
            let delay = if self.order.matches(self.forklift.cargo.items()) {
                self.config.delivery_delay_ms
            } else {
                self.config.mismatch_delay_ms
            };
            self.scheduler.schedule(
                delay,
                self.generation,
                EventKind::Delivery { cell, arrival },
            );
        }
    }

    /// Pick up the item under the forklift
    pub fn act(&mut self) -> ActOutcome {
        if !self.session.is_playing() {
            return ActOutcome::Rejected(Rejection::NotPlaying);
        }
        if self.cooldown_active {
            return ActOutcome::Rejected(Rejection::Cooldown);
        }
        if self.forklift.cargo.is_full() {
            return ActOutcome::Rejected(Rejection::CargoFull);
        }

        let position = self.forklift.position();
        let Some(item) = self.storage.available_item_at(position) else {
            return ActOutcome::Nothing;
        };

        self.storage.collect(item);
        self.forklift.cargo.push(item.color);
        self.cooldown_active = true;
        self.scheduler.schedule(
            self.config.pickup_cooldown_ms,
            self.generation,
            EventKind::CooldownExpired,
        );

        debug!(
            "Picked up {} (cargo {}/{})",
            item,
            self.forklift.cargo.len(),
            self.forklift.cargo.capacity()
        );
        ActOutcome::PickedUp(item)
    }

    /// Advance the virtual clock, firing every event that falls due
    pub fn advance(&mut self, elapsed_ms: u64) {
        let until = self.scheduler.now_ms().saturating_add(elapsed_ms);
        while let Some(event) = self.scheduler.pop_due(until) {
            self.fire(event);
        }
        self.scheduler.advance_to(until);
    }

    fn fire(&mut self, event: ScheduledEvent) {
        if event.generation != self.generation {
            debug!("Discarding {:?} from run {}", event.kind, event.generation);
            return;
        }

        match event.kind {
            EventKind::CooldownExpired => self.cooldown_active = false,
            kind if !self.session.is_playing() => {
                debug!("Discarding {:?}: session is not playing", kind);
            }
            EventKind::ClockTick => self.clock_tick(),
            EventKind::ResetCargo { cell, arrival } | EventKind::Delivery { cell, arrival }
                if arrival != self.forklift.arrival() =>
            {
                debug!("Forklift left {} before the transaction fired", cell);
            }
            EventKind::ResetCargo { cell, .. } => {
                if let Some(transaction) = self.resolve_reset(cell) {
                    self.last_transaction = Some(transaction);
                }
            }
            EventKind::Delivery { cell, .. } => {
                if let Some(transaction) = self.resolve_delivery(cell) {
                    self.last_transaction = Some(transaction);
                }
            }
        }
    }

    fn clock_tick(&mut self) {
        self.order.tick();
        if self.session.tick() {
            // Stops the clock and cancels anything still pending
            self.scheduler.clear();
            info!(
                "Shift over: {} orders, {} money",
                self.session.completed_orders, self.session.money
            );
            return;
        }
        self.scheduler
            .schedule(self.config.tick_ms, self.generation, EventKind::ClockTick);
    }

    /// Empty the forks and return every held item to the floor
    fn drop_cargo(&mut self) {
        self.forklift.cargo.clear();
        self.storage.take_collected();
    }

    fn resolve_reset(&mut self, cell: Coordinate) -> Option<Transaction> {
        if self.forklift.cargo.is_empty() {
            return None;
        }
        info!(
            "Cargo {:?} dropped at reset cell {}",
            self.forklift.cargo.items(),
            cell
        );
        self.drop_cargo();
        Some(Transaction::Dropped)
    }

    /// Compare cargo with the active order as it stands now, not as it
    /// stood when the arrival was queued
    fn resolve_delivery(&mut self, cell: Coordinate) -> Option<Transaction> {
        if self.forklift.cargo.is_empty() {
            return None;
        }

        if !self.order.matches(self.forklift.cargo.items()) {
            info!(
                "Wrong sequence at {}: cargo {:?}, order {:?}",
                cell,
                self.forklift.cargo.items(),
                self.order.items
            );
            self.drop_cargo();
            return Some(Transaction::Mismatched);
        }

        let bonus = self.session.complete_order(&self.order);
        self.forklift.cargo.clear();
        let delivered = self.storage.take_collected();
        let report = self.storage.restock(&delivered);
        if report.total_added() > 0 {
            debug!("Restocked {:?}", report.added);
        }
        self.forklift.moves += self.config.moves_per_order;

        info!(
            "Order {:?} delivered at {}: +{} money, +{}s, +{} moves",
            self.order.items, cell, self.order.reward, bonus, self.config.moves_per_order
        );

        self.order = self.orders.generate(&self.storage);
        debug!(
            "Next order {:?} for {}",
            self.order.items, self.order.reward
        );
        Some(Transaction::Delivered)
    }

    /// Current state for renderers
    pub fn snapshot(&self) -> Snapshot {
        let position = self.forklift.position();
        let cells = (0..GRID_SIZE)
            .map(|y| {
                (0..GRID_SIZE)
                    .map(|x| {
                        let coordinate = Coordinate::new(x, y);
                        CellView {
                            coordinate,
                            item: self.storage.item_at(coordinate),
                            is_exit: grid::is_exit(coordinate),
                            is_reset: grid::is_reset(coordinate),
                            has_forklift: coordinate == position,
                        }
                    })
                    .collect()
            })
            .collect();

        Snapshot {
            status: self.session.status,
            time_left: self.session.time_left,
            moves: self.forklift.moves,
            money: self.session.money,
            completed_orders: self.session.completed_orders,
            forklift: position,
            cargo: self.forklift.cargo.items().to_vec(),
            order: self.order.clone(),
            last_delivered: self.session.last_delivered.clone(),
            rank: self.session.rank(),
            cells,
        }
    }

    /// Print a summary of the session
    pub fn print_summary(&self) {
        println!("{}", self.session.summary());
        println!(
            "  Forklift: {} | Moves: {} | Cargo: {}",
            self.forklift.position(),
            self.forklift.moves,
            format_colors(self.forklift.cargo.items())
        );
        println!(
            "  Order: {} | Reward: {} | Bonus: +{}s | Countdown: {}s{}",
            format_colors(&self.order.items),
            self.order.reward,
            self.order.time_bonus(),
            self.order.time_left,
            if self.order.is_urgent() { " (urgent)" } else { "" }
        );
        if !self.session.last_delivered.is_empty() {
            println!(
                "  Last delivered: {}",
                format_colors(&self.session.last_delivered)
            );
        }
        if let Some(rank) = self.session.rank() {
            println!("  Rank: {}", rank);
        }
    }

    /// Draw the floor in the terminal
    pub fn draw_map(&self) {
        let snapshot = self.snapshot();

        println!("\n=== Warehouse Floor ===");
        println!("Legend: G/B/R=Item, F=Forklift, @=Forklift on item, ^=Exit, ~=Reset");
        println!();
        for row in &snapshot.cells {
            let line: String = row
                .iter()
                .map(|cell| cell.glyph())
                .flat_map(|glyph| [glyph, ' '])
                .collect();
            println!("{}", line.trim_end());
        }
        println!();
    }
}

fn format_colors(colors: &[Color]) -> String {
    if colors.is_empty() {
        return "-".to_string();
    }
    colors
        .iter()
        .map(|color| color.name())
        .collect::<Vec<_>>()
        .join(", ")
}
