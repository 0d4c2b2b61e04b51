//! Scripted player for headless runs
//!
//! Routes over the floor with A* on a petgraph grid graph and chooses one
//! command at a time from the engine's observable state.

use petgraph::algo::astar;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

use super::grid;
use super::types::{Color, Command, Coordinate, Direction};
use super::world::WarehouseWorld;

/// Cost of one step between neighbouring cells
const STEP_COST: u32 = 1;
/// Cost of passing through a zone cell that is not the destination
const ZONE_DETOUR_COST: u32 = 50;

/// 4-neighbour graph of the floor cells
pub struct FloorRouter {
    graph: DiGraph<Coordinate, u32>,
    cell_to_node: HashMap<Coordinate, NodeIndex>,
}

impl Default for FloorRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl FloorRouter {
    pub fn new() -> Self {
        let mut graph = DiGraph::new();
        let mut cell_to_node = HashMap::new();

        for cell in grid::cells() {
            cell_to_node.insert(cell, graph.add_node(cell));
        }

        for cell in grid::cells() {
            for direction in Direction::ALL {
                let (dx, dy) = direction.delta();
                let neighbour = cell.offset(dx, dy);
                if !grid::in_bounds(neighbour) {
                    continue;
                }
                graph.add_edge(cell_to_node[&cell], cell_to_node[&neighbour], STEP_COST);
            }
        }

        Self {
            graph,
            cell_to_node,
        }
    }

    /// Shortest path including both endpoints, or `None` off the floor
    ///
    /// Exit and reset cells other than `to` are avoided, since arriving on
    /// one with cargo queues a transaction.
    pub fn route(&self, from: Coordinate, to: Coordinate) -> Option<Vec<Coordinate>> {
        let start = *self.cell_to_node.get(&from)?;
        let goal = *self.cell_to_node.get(&to)?;

        let (_, path) = astar(
            &self.graph,
            start,
            |node| node == goal,
            |edge| {
                let cell = self.graph[edge.target()];
                let is_zone = grid::is_exit(cell) || grid::is_reset(cell);
                if is_zone && cell != to {
                    ZONE_DETOUR_COST
                } else {
                    *edge.weight()
                }
            },
            |node| self.graph[node].manhattan(&to),
        )?;

        Some(path.into_iter().map(|node| self.graph[node]).collect())
    }

    /// Closest of `targets` by route length; earlier targets win ties
    pub fn nearest(
        &self,
        from: Coordinate,
        targets: impl IntoIterator<Item = Coordinate>,
    ) -> Option<(Coordinate, Vec<Coordinate>)> {
        let mut best: Option<(Coordinate, Vec<Coordinate>)> = None;
        for target in targets {
            let Some(path) = self.route(from, target) else {
                continue;
            };
            let shorter = best
                .as_ref()
                .map_or(true, |(_, best_path)| path.len() < best_path.len());
            if shorter {
                best = Some((target, path));
            }
        }
        best
    }
}

/// Direction of a single step between adjacent cells
pub fn step_direction(from: Coordinate, to: Coordinate) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .find(|direction| {
            let (dx, dy) = direction.delta();
            from.offset(dx, dy) == to
        })
}

/// Whether the floor plus the forks hold enough of every colour the active
/// order asks for. Orders are drawn without checking stock, so one can be
/// impossible until the next delivery restocks.
fn is_collectible(world: &WarehouseWorld) -> bool {
    let cargo = world.forklift.cargo.items();
    Color::PALETTE.iter().all(|&color| {
        let wanted = world.order.items.iter().filter(|&&c| c == color).count();
        let held = cargo.iter().filter(|&&c| c == color).count();
        wanted <= held + world.storage.available_count(color)
    })
}

/// What the autopilot is currently heading for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    /// Fetch the next colour of the order
    Pickup(Coordinate),
    /// Cargo equals the order, head for an exit
    Deliver(Coordinate),
    /// Cargo can no longer become the order, dump it
    Reset,
}

#[derive(Default)]
pub struct Autopilot {
    router: FloorRouter,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the current goal, or `None` when there is nothing useful to do
    pub fn goal(&self, world: &WarehouseWorld) -> Option<Goal> {
        let position = world.forklift.position();
        let cargo = world.forklift.cargo.items();
        let order = &world.order;

        if !order.accepts_prefix(cargo) {
            return Some(Goal::Reset);
        }

        if order.matches(cargo) {
            return self
                .router
                .nearest(position, grid::exit_cells())
                .map(|(cell, _)| Goal::Deliver(cell));
        }

        if !is_collectible(world) {
            return None;
        }

        let needed = order.items[cargo.len()];
        let candidates: Vec<Coordinate> = world
            .storage
            .available_items(needed)
            .map(|item| item.position)
            .collect();

        self.router
            .nearest(position, candidates)
            .map(|(cell, _)| Goal::Pickup(cell))
    }

    /// The next command to issue, if any
    pub fn next_command(&self, world: &WarehouseWorld) -> Option<Command> {
        if !world.session.is_playing() || world.has_pending_transaction() {
            return None;
        }

        let position = world.forklift.position();
        let target = match self.goal(world)? {
            Goal::Pickup(cell) if cell == position => {
                return (!world.cooldown_active()).then_some(Command::Act);
            }
            Goal::Pickup(cell) | Goal::Deliver(cell) => cell,
            Goal::Reset => grid::RESET_CELL,
        };

        if world.forklift.moves == 0 || target == position {
            return None;
        }

        let path = self.router.route(position, target)?;
        let next = *path.get(1)?;
        step_direction(position, next).map(Command::Move)
    }
}
