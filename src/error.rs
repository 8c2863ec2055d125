//! Error types for planner operations.
//!
//! A scheduling shortfall is deliberately not represented here: the pipeline
//! always completes and reports unplaced events through
//! [`crate::api::RescheduleReport`].

use crate::models::EventId;

/// Result type for planner operations.
pub type PlannerResult<T> = Result<T, PlannerError>;

/// Error type for planner operations.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// The store is full; the add was rejected with no state change.
    #[error("event capacity reached: store is limited to {capacity} events")]
    CapacityExceeded { capacity: usize },

    /// No event has the requested id; no state change.
    #[error("event {id} not found")]
    NotFound { id: EventId },

    /// Event input failed validation at the API boundary.
    #[error("invalid event: {reason}")]
    InvalidEvent { reason: String },

    /// Configuration file or value error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl PlannerError {
    /// Create an invalid-event error.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidEvent {
            reason: reason.into(),
        }
    }
}
