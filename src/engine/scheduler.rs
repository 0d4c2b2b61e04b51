//! Deferred events on a virtual millisecond clock
//!
//! The engine is single threaded: timeouts are queued here and applied one
//! at a time, in due order, when the clock is advanced. Ties fire in the
//! order they were scheduled.

use sorted_vec::SortedVec;
use std::cmp::Ordering;

use super::types::Coordinate;

/// What a deferred event does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// One second of session time
    ClockTick,
    /// Pickup debounce window closed
    CooldownExpired,
    /// Drop cargo on the reset cell
    ResetCargo { cell: Coordinate, arrival: u64 },
    /// Check cargo against the active order on an exit cell
    Delivery { cell: Coordinate, arrival: u64 },
}

/// A queued event
///
/// `generation` ties the event to the play-through that scheduled it; a
/// restart invalidates everything still queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub due_ms: u64,
    pub seq: u64,
    pub generation: u64,
    pub kind: EventKind,
}

impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due_ms
            .cmp(&other.due_ms)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug)]
pub struct Scheduler {
    now_ms: u64,
    next_seq: u64,
    queue: SortedVec<ScheduledEvent>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            queue: SortedVec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Queue `kind` to fire `delay_ms` after the current instant
    pub fn schedule(&mut self, delay_ms: u64, generation: u64, kind: EventKind) {
        let event = ScheduledEvent {
            due_ms: self.now_ms.saturating_add(delay_ms),
            seq: self.next_seq,
            generation,
            kind,
        };
        self.next_seq += 1;
        self.queue.insert(event);
    }

    /// Remove the earliest event due at or before `until_ms`, moving the
    /// clock to its due time
    pub fn pop_due(&mut self, until_ms: u64) -> Option<ScheduledEvent> {
        let due = self.queue.first().map(|event| event.due_ms)?;
        if due > until_ms {
            return None;
        }
        let event = self.queue.remove_index(0);
        self.now_ms = self.now_ms.max(event.due_ms);
        Some(event)
    }

    /// Move the clock forward without firing anything
    pub fn advance_to(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Whether any queued event matches the predicate
    pub fn any(&self, predicate: impl Fn(&EventKind) -> bool) -> bool {
        self.queue.iter().any(|event| predicate(&event.kind))
    }
}
