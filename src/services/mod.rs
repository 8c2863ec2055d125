//! High-level planner services.

pub mod planner;

pub use planner::DayPlanner;
