//! Standalone warehouse game engine
//!
//! Grid geometry, storage, orders, the forklift and the session clock,
//! driven by a single-threaded event scheduler. Nothing here knows about
//! rendering or input devices.

mod autopilot;
mod config;
mod forklift;
mod game_state;
pub mod grid;
mod order;
mod scheduler;
mod snapshot;
mod storage;
mod types;
mod world;

// Re-export public types for external use
pub use autopilot::{step_direction, Autopilot, FloorRouter, Goal};
pub use config::GameConfig;
pub use forklift::{Cargo, Forklift};
pub use game_state::GameSession;
pub use order::{
    time_bonus_for_len, Order, OrderGenerator, FALLBACK_REWARD, MIN_AVAILABLE_FOR_ORDER,
    ORDER_BASE_REWARD, ORDER_MAX_LEN, ORDER_MIN_LEN, ORDER_REWARD_PER_ITEM, ORDER_TIME_LEFT,
    URGENT_TIME_LEFT,
};
pub use scheduler::{EventKind, ScheduledEvent, Scheduler};
pub use snapshot::{CellView, Snapshot};
pub use storage::{
    initial_layout, restock_pool, CollectedSet, RestockReport, StorageCatalog, RESTOCK_BATCH,
    RESTOCK_THRESHOLD,
};
pub use types::{
    ActOutcome, Color, Command, Coordinate, Direction, GameStatus, ItemId, MoveOutcome, Rank,
    Rejection, GRID_SIZE, RANK_MASTER_ORDERS, RANK_OPERATOR_ORDERS,
};
pub use world::{CommandOutcome, Transaction, WarehouseWorld};
