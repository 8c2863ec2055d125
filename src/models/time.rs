//! Time-of-day intervals and slot arithmetic.
//!
//! All times are stored as minutes since midnight. Intervals are half-open
//! `[start, end)`, so back-to-back events never conflict.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Minutes in a 24-hour day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Half-open time-of-day interval in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    start_minute: u32,
    end_minute: u32,
}

impl TimeInterval {
    /// Create an interval. Returns `None` unless `start < end`.
    pub fn new(start_minute: u32, end_minute: u32) -> Option<Self> {
        if start_minute < end_minute {
            Some(Self {
                start_minute,
                end_minute,
            })
        } else {
            None
        }
    }

    /// Create an interval from a start minute and a duration in minutes.
    pub fn from_start_duration(start_minute: u32, duration_minutes: u32) -> Option<Self> {
        Self::new(start_minute, start_minute + duration_minutes)
    }

    pub fn start_minute(&self) -> u32 {
        self.start_minute
    }

    pub fn end_minute(&self) -> u32 {
        self.end_minute
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_minute - self.start_minute
    }

    /// Check if this interval overlaps another.
    ///
    /// Half-open semantics: an interval ending exactly when another starts
    /// does not overlap it.
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.end_minute <= other.start_minute || other.end_minute <= self.start_minute)
    }

    /// Check if a given minute-of-day lies inside this interval.
    pub fn contains_minute(&self, minute: u32) -> bool {
        self.start_minute <= minute && minute < self.end_minute
    }

    /// Start of the interval as a wall-clock time.
    pub fn start_time(&self) -> NaiveTime {
        minute_to_time(self.start_minute)
    }

    /// End of the interval as a wall-clock time.
    pub fn end_time(&self) -> NaiveTime {
        minute_to_time(self.end_minute)
    }
}

impl std::fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start_time().format("%H:%M"),
            self.end_time().format("%H:%M")
        )
    }
}

fn minute_to_time(minute: u32) -> NaiveTime {
    // Intervals may legitimately end at the 24:00 boundary; chrono has no
    // 24:00, so render it as 00:00.
    let wrapped = minute % MINUTES_PER_DAY;
    NaiveTime::from_hms_opt(wrapped / 60, wrapped % 60, 0).unwrap_or(NaiveTime::MIN)
}

/// Minute-of-day for a wall-clock time.
pub fn time_to_minute(time: NaiveTime) -> u32 {
    use chrono::Timelike;
    time.hour() * 60 + time.minute()
}

/// Discrete slot index containing the given time. Quantization is lossy:
/// 09:10 and 09:20 map to the same 30-minute slot.
pub fn slot_index(hour: u32, minute: u32, slot_minutes: u32) -> u32 {
    (hour * 60 + minute) / slot_minutes
}

/// Interval of the requested duration starting at a slot boundary.
pub fn interval_for_slot(slot: u32, duration_minutes: u32, slot_minutes: u32) -> Option<TimeInterval> {
    TimeInterval::from_start_duration(slot * slot_minutes, duration_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_new_rejects_empty() {
        assert!(TimeInterval::new(60, 60).is_none());
        assert!(TimeInterval::new(120, 60).is_none());
        assert!(TimeInterval::new(60, 61).is_some());
    }

    #[test]
    fn test_from_start_duration() {
        let interval = TimeInterval::from_start_duration(540, 60).unwrap();
        assert_eq!(interval.start_minute(), 540);
        assert_eq!(interval.end_minute(), 600);
        assert_eq!(interval.duration_minutes(), 60);
        assert!(TimeInterval::from_start_duration(540, 0).is_none());
    }

    #[test]
    fn test_overlap_basic() {
        let a = TimeInterval::new(540, 600).unwrap(); // 09:00-10:00
        let b = TimeInterval::new(570, 630).unwrap(); // 09:30-10:30
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_back_to_back_intervals_do_not_overlap() {
        let a = TimeInterval::new(0, 60).unwrap();
        let b = TimeInterval::new(60, 120).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_interval_overlaps_itself() {
        let a = TimeInterval::new(100, 160).unwrap();
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_contains_minute_half_open() {
        let a = TimeInterval::new(540, 600).unwrap();
        assert!(a.contains_minute(540));
        assert!(a.contains_minute(599));
        assert!(!a.contains_minute(600));
    }

    #[test]
    fn test_slot_index_quantizes() {
        assert_eq!(slot_index(9, 0, 30), 18);
        assert_eq!(slot_index(9, 10, 30), 18);
        assert_eq!(slot_index(9, 29, 30), 18);
        assert_eq!(slot_index(9, 30, 30), 19);
    }

    #[test]
    fn test_slot_round_trip_is_slot_quantized() {
        // interval_for_slot(slot_index(h, m), d) starts at the slot boundary,
        // not at (h, m) itself.
        let slot = slot_index(9, 10, 30);
        let interval = interval_for_slot(slot, 60, 30).unwrap();
        assert_eq!(interval.start_minute(), 540);
        assert_eq!(interval.duration_minutes(), 60);
    }

    #[test]
    fn test_display_format() {
        let a = TimeInterval::new(540, 630).unwrap();
        assert_eq!(a.to_string(), "09:00-10:30");
    }

    #[test]
    fn test_time_to_minute() {
        let t = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
        assert_eq!(time_to_minute(t), 870);
    }
}
