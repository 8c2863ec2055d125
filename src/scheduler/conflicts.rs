//! Conflict graph construction.
//!
//! An undirected graph over the current event set where an edge means two
//! events' intervals overlap. The graph is ephemeral: it holds ids only and
//! is rebuilt from scratch after every store mutation, which is acceptable
//! for the bounded working sets this planner targets.

use std::collections::HashMap;

use crate::models::{Event, EventId};

/// Adjacency relation over overlapping events. Symmetric, no self-loops.
#[derive(Debug, Clone, Default)]
pub struct ConflictGraph {
    adjacency: HashMap<EventId, Vec<EventId>>,
}

impl ConflictGraph {
    /// Build the graph from the current event intervals.
    ///
    /// O(n²) pairwise comparison; a fresh value is returned each time so no
    /// stale edges or degrees can survive a rebuild.
    pub fn build(events: &[Event]) -> Self {
        let mut adjacency: HashMap<EventId, Vec<EventId>> =
            events.iter().map(|e| (e.id, Vec::new())).collect();

        for (i, a) in events.iter().enumerate() {
            for b in &events[i + 1..] {
                if a.interval.overlaps(&b.interval) {
                    if let Some(neighbors) = adjacency.get_mut(&a.id) {
                        neighbors.push(b.id);
                    }
                    if let Some(neighbors) = adjacency.get_mut(&b.id) {
                        neighbors.push(a.id);
                    }
                }
            }
        }

        Self { adjacency }
    }

    /// Events conflicting with the given event, in store order.
    pub fn neighbors(&self, id: EventId) -> &[EventId] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of other events the given event conflicts with.
    pub fn degree(&self, id: EventId) -> usize {
        self.neighbors(id).len()
    }

    /// Total number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeInterval;

    fn event(id: u32, start: u32, duration: u32) -> Event {
        Event::new(
            EventId::new(id),
            format!("event-{id}"),
            TimeInterval::from_start_duration(start, duration).unwrap(),
            1,
        )
    }

    #[test]
    fn test_overlapping_events_are_adjacent_both_ways() {
        let events = vec![event(1, 540, 60), event(2, 570, 60), event(3, 700, 30)];
        let graph = ConflictGraph::build(&events);

        assert_eq!(graph.neighbors(EventId::new(1)), &[EventId::new(2)]);
        assert_eq!(graph.neighbors(EventId::new(2)), &[EventId::new(1)]);
        assert!(graph.neighbors(EventId::new(3)).is_empty());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_degree_matches_adjacency_length() {
        // One long event overlapping two disjoint short ones.
        let events = vec![event(1, 0, 300), event(2, 0, 60), event(3, 120, 60)];
        let graph = ConflictGraph::build(&events);

        assert_eq!(graph.degree(EventId::new(1)), 2);
        assert_eq!(graph.degree(EventId::new(2)), 1);
        assert_eq!(graph.degree(EventId::new(3)), 1);
        for id in 1..=3 {
            let id = EventId::new(id);
            assert_eq!(graph.degree(id), graph.neighbors(id).len());
        }
    }

    #[test]
    fn test_back_to_back_events_are_not_adjacent() {
        let events = vec![event(1, 0, 60), event(2, 60, 60)];
        let graph = ConflictGraph::build(&events);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_unknown_id_has_empty_neighbors() {
        let graph = ConflictGraph::build(&[]);
        assert!(graph.neighbors(EventId::new(9)).is_empty());
        assert_eq!(graph.degree(EventId::new(9)), 0);
    }
}
