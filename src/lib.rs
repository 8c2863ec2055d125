//! # Dynamic Event Scheduler
//!
//! Conflict-aware scheduling engine for a single day of events.
//!
//! This crate maintains a small, bounded set of events (start time, duration,
//! priority) and keeps them free of time overlaps. Every mutation runs the
//! full reschedule pipeline: conflict graph construction, priority-greedy
//! admission, Welsh-Powell coloring analysis, and an alternative-slot search
//! that repairs displaced events.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Time intervals, events, and identifier newtypes
//! - [`store`]: Ordered in-memory event store with an O(1) id index
//! - [`scheduler`]: Conflict graph, admission, coloring, and relocation
//! - [`services`]: The [`services::planner::DayPlanner`] facade callers use
//! - [`api`]: Serializable views and the reschedule report
//! - [`config`]: Capacity and slot-granularity configuration
//!
//! ## Example
//!
//! ```
//! use des_rust::config::PlannerConfig;
//! use des_rust::services::planner::DayPlanner;
//!
//! let mut planner = DayPlanner::new(PlannerConfig::default());
//! let (id, report) = planner.add_event("Math Class", 9, 0, 60, 3).unwrap();
//! assert!(report.unplaced.is_empty());
//! assert!(planner.schedule().iter().any(|e| e.id == id && e.scheduled));
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod services;
pub mod store;
