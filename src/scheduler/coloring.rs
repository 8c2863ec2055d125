//! Welsh-Powell graph coloring.
//!
//! Assigns each event a "slot color" such that no two conflicting events
//! share a color. Invoked only when admission leaves a shortfall, and only
//! as analysis: the colors land in `slot_hint` as candidate-slot hints, while
//! the relocation pass places events independently.

use std::collections::HashMap;

use crate::models::{Event, EventId};

use super::conflicts::ConflictGraph;

/// Color every event with the Welsh-Powell heuristic.
///
/// Events are visited by conflict degree descending (stable, so equal
/// degrees keep insertion order); each receives the smallest color not used
/// by an already-colored neighbor. The palette is unbounded. Returns the
/// number of distinct colors used.
pub fn colorize(events: &mut [Event], graph: &ConflictGraph) -> usize {
    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by(|&a, &b| graph.degree(events[b].id).cmp(&graph.degree(events[a].id)));

    for event in events.iter_mut() {
        event.slot_hint = None;
    }

    let mut colors: HashMap<EventId, u32> = HashMap::new();
    let mut palette = 0usize;

    for &i in &order {
        let mut used: Vec<u32> = graph
            .neighbors(events[i].id)
            .iter()
            .filter_map(|n| colors.get(n).copied())
            .collect();
        used.sort_unstable();

        let mut color = 0u32;
        for c in used {
            if c == color {
                color += 1;
            } else if c > color {
                break;
            }
        }

        colors.insert(events[i].id, color);
        events[i].slot_hint = Some(color);
        palette = palette.max(color as usize + 1);
    }

    palette
}
