//! The `DayPlanner` facade.
//!
//! Owns the event store and configuration and exposes the operations a front
//! end needs: add, remove, schedule view, conflict graph view, and a manual
//! reschedule. Every successful mutation runs the full pipeline before
//! returning, so the store is always consistent from the caller's
//! perspective.
//!
//! Single-threaded by design: mutations take `&mut self`, so a host that
//! wraps the planner in a server must serialize writers (a mutex or a
//! single-writer actor).

use tracing::info;

use crate::api::{ConflictEntry, ConflictGraphView, RescheduleReport, ScheduleEntry};
use crate::config::PlannerConfig;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{Event, EventId, TimeInterval};
use crate::scheduler::{self, ConflictGraph};
use crate::store::EventStore;

/// Conflict-aware planner for a single day of events.
#[derive(Debug)]
pub struct DayPlanner {
    store: EventStore,
    config: PlannerConfig,
}

impl DayPlanner {
    /// Create an empty planner with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            store: EventStore::new(config.max_events),
            config,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Add an event and run the reschedule pipeline.
    ///
    /// The requested time is validated against the day horizon: events that
    /// would cross it are rejected with [`PlannerError::InvalidEvent`] rather
    /// than silently overflowing past midnight.
    pub fn add_event(
        &mut self,
        name: &str,
        start_hour: u32,
        start_minute: u32,
        duration_minutes: u32,
        priority: i32,
    ) -> PlannerResult<(EventId, RescheduleReport)> {
        let interval =
            self.validate_event(name, start_hour, start_minute, duration_minutes)?;

        let id = self.store.add(name.trim(), interval, priority)?;
        info!(event = %id, name = name.trim(), %interval, priority, "event added");

        let report = scheduler::reschedule(&mut self.store, &self.config);
        Ok((id, report))
    }

    /// Remove an event by id and run the reschedule pipeline.
    pub fn remove_event(&mut self, id: EventId) -> PlannerResult<RescheduleReport> {
        let removed = self.store.remove(id)?;
        info!(event = %id, name = %removed.name, "event removed");

        Ok(scheduler::reschedule(&mut self.store, &self.config))
    }

    /// Manually re-run the full pipeline without a mutation.
    ///
    /// Idempotent: with no intervening mutation, repeated calls produce the
    /// same partition and the same intervals.
    pub fn reschedule(&mut self) -> RescheduleReport {
        scheduler::reschedule(&mut self.store, &self.config)
    }

    /// Current schedule in insertion order.
    pub fn schedule(&self) -> Vec<ScheduleEntry> {
        self.store
            .events()
            .iter()
            .map(|e| ScheduleEntry {
                id: e.id,
                name: e.name.clone(),
                interval: e.interval,
                duration_minutes: e.duration_minutes,
                priority: e.priority,
                scheduled: e.scheduled,
                slot_hint: e.slot_hint,
            })
            .collect()
    }

    /// Conflict graph over current intervals, computed on demand.
    ///
    /// The graph is ephemeral; it is rebuilt here rather than cached so a
    /// caller can never observe edges from before a mutation.
    pub fn conflict_graph(&self) -> ConflictGraphView {
        let graph = ConflictGraph::build(self.store.events());
        let entries = self
            .store
            .events()
            .iter()
            .map(|e| ConflictEntry {
                id: e.id,
                name: e.name.clone(),
                degree: graph.degree(e.id),
                conflicts_with: graph.neighbors(e.id).to_vec(),
            })
            .collect();
        ConflictGraphView { entries }
    }

    /// Raw event records, in insertion order.
    pub fn events(&self) -> &[Event] {
        self.store.events()
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.store.get(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn validate_event(
        &self,
        name: &str,
        start_hour: u32,
        start_minute: u32,
        duration_minutes: u32,
    ) -> PlannerResult<TimeInterval> {
        if name.trim().is_empty() {
            return Err(PlannerError::invalid("event name must not be empty"));
        }
        if start_minute >= 60 {
            return Err(PlannerError::invalid(format!(
                "start minute {start_minute} is out of range"
            )));
        }
        if duration_minutes == 0 {
            return Err(PlannerError::invalid("duration must be positive"));
        }

        let start = start_hour * 60 + start_minute;
        if start >= self.config.day_minutes {
            return Err(PlannerError::invalid(format!(
                "start time {:02}:{:02} is outside the day horizon",
                start_hour, start_minute
            )));
        }
        if start + duration_minutes > self.config.day_minutes {
            return Err(PlannerError::invalid(format!(
                "event would end past the day horizon ({} + {} min)",
                start, duration_minutes
            )));
        }

        TimeInterval::from_start_duration(start, duration_minutes)
            .ok_or_else(|| PlannerError::invalid("start and duration form an empty interval"))
    }
}

impl Default for DayPlanner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
