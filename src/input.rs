//! Input handling
//!
//! Turns raw device events (keys, swipes, taps) into engine commands. The
//! held-key set lives here rather than in the engine so the command
//! handlers stay free of device concerns.

use std::collections::HashSet;

use crate::engine::{Command, CommandOutcome, Coordinate, Direction, WarehouseWorld};

/// Minimum swipe travel, in screen units, on at least one axis
pub const MIN_SWIPE_DISTANCE: f32 = 50.0;

/// Logical keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
}

impl Key {
    pub fn command(&self) -> Command {
        match self {
            Key::ArrowUp => Command::Move(Direction::Up),
            Key::ArrowDown => Command::Move(Direction::Down),
            Key::ArrowLeft => Command::Move(Direction::Left),
            Key::ArrowRight => Command::Move(Direction::Right),
            Key::Space => Command::Act,
        }
    }
}

/// A device event as delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Start (or restart) button
    Start,
    KeyDown(Key),
    KeyUp(Key),
    /// Window lost focus or the page was hidden
    FocusLost,
    Swipe { start: (f32, f32), end: (f32, f32) },
    Tap(Coordinate),
}

/// Classify a swipe gesture. The dominant axis wins; travel below
/// [`MIN_SWIPE_DISTANCE`] on both axes is not a swipe.
pub fn swipe_direction(start: (f32, f32), end: (f32, f32)) -> Option<Direction> {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;

    if dx.abs() < MIN_SWIPE_DISTANCE && dy.abs() < MIN_SWIPE_DISTANCE {
        return None;
    }

    let direction = if dx.abs() > dy.abs() {
        if dx < 0.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    } else if dy < 0.0 {
        Direction::Up
    } else {
        Direction::Down
    };
    Some(direction)
}

/// Held-key tracking for one player
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Key press. Auto-repeat of a key that is already down yields nothing.
    pub fn key_down(&mut self, key: Key) -> Option<Command> {
        self.held.insert(key).then(|| key.command())
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Translate an event into a command without touching the engine
    pub fn translate(&mut self, event: InputEvent, forklift: Coordinate) -> Option<Command> {
        match event {
            InputEvent::Start => {
                self.clear();
                None
            }
            InputEvent::KeyDown(key) => self.key_down(key),
            InputEvent::KeyUp(key) => {
                self.key_up(key);
                None
            }
            InputEvent::FocusLost => {
                self.clear();
                None
            }
            InputEvent::Swipe { start, end } => swipe_direction(start, end).map(Command::Move),
            InputEvent::Tap(cell) => (cell == forklift).then_some(Command::Act),
        }
    }

    /// Feed an event through to the engine
    ///
    /// Events other than `Start` are dropped while the session is not
    /// playing, and held keys are forgotten on every start.
    pub fn dispatch(
        &mut self,
        event: InputEvent,
        world: &mut WarehouseWorld,
    ) -> Option<CommandOutcome> {
        if event == InputEvent::Start {
            self.clear();
            world.start_game();
            return None;
        }
        if !world.session.is_playing() {
            self.clear();
            return None;
        }

        let command = self.translate(event, world.forklift.position())?;
        Some(world.apply(command))
    }
}
