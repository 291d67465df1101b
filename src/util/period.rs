//! Inclusive time intervals on the gameplay timeline.
//!
//! Used to describe stretches of a play session where normal input rules do
//! not apply (the lead-in before the first note, beatmap breaks).

/// An inclusive interval `[start, end]` in gameplay milliseconds.
///
/// Endpoints may be infinite; fractional times are fine. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Period {
    start: f64,
    end: f64,
}

impl Period {
    /// Creates a period. `start` must not exceed `end`.
    pub fn new(start: f64, end: f64) -> Self {
        debug_assert!(start <= end, "period start {start} exceeds end {end}");
        Self { start, end }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Whether `time` lies within the period, both endpoints included.
    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time <= self.end
    }
}

/// Answers whether a timestamp falls inside any of a fixed set of periods.
///
/// The set is small (one lead-in plus one period per break), so membership is
/// a linear scan. Stateless after construction.
#[derive(Debug, Clone, Default)]
pub struct PeriodTracker {
    periods: Vec<Period>,
}

impl PeriodTracker {
    pub fn new(periods: Vec<Period>) -> Self {
        Self { periods }
    }

    /// True iff `time` is inside at least one period.
    pub fn is_in_any(&self, time: f64) -> bool {
        self.periods.iter().any(|p| p.contains(time))
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }
}
