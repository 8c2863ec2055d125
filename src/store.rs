//! In-memory event store.
//!
//! The store exclusively owns all event records. Events keep insertion order;
//! a `HashMap` id index makes lookup O(1) even when the store is sized in the
//! hundreds of events. The index is repaired on every structural change.

use std::collections::HashMap;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Event, EventId, TimeInterval};

/// Ordered, bounded collection of events keyed by id.
#[derive(Debug, Clone)]
pub struct EventStore {
    events: Vec<Event>,
    index: HashMap<EventId, usize>,
    next_id: u32,
    capacity: usize,
}

impl EventStore {
    /// Create an empty store with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            events: Vec::new(),
            index: HashMap::new(),
            next_id: 1,
            capacity,
        }
    }

    /// Insert a new event and return its id.
    ///
    /// Fails with [`PlannerError::CapacityExceeded`] when the store is full;
    /// the store is left unchanged. Ids increase monotonically and are never
    /// reused, including after removals.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        interval: TimeInterval,
        priority: i32,
    ) -> PlannerResult<EventId> {
        if self.events.len() >= self.capacity {
            return Err(PlannerError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let id = EventId::new(self.next_id);
        self.next_id += 1;

        self.index.insert(id, self.events.len());
        self.events.push(Event::new(id, name, interval, priority));
        Ok(id)
    }

    /// Remove an event by id, returning the removed record.
    ///
    /// The order of the remaining events is preserved and the id index is
    /// repaired for every shifted entry.
    pub fn remove(&mut self, id: EventId) -> PlannerResult<Event> {
        let position = self
            .index
            .remove(&id)
            .ok_or(PlannerError::NotFound { id })?;

        let removed = self.events.remove(position);
        for (offset, event) in self.events[position..].iter().enumerate() {
            self.index.insert(event.id, position + offset);
        }
        Ok(removed)
    }

    /// Look up an event by id.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.index.get(&id).map(|&i| &self.events[i])
    }

    /// Index of an event in insertion order.
    pub fn position(&self, id: EventId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// All events in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Mutable view for the scheduling passes. Callers must not reorder.
    pub fn events_mut(&mut self) -> &mut [Event] {
        &mut self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
