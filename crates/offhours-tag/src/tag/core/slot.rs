//! Expanded `(days, hour)` pairs.

use serde::Serialize;

use super::Day;

/// Highest hour accepted in a tag (24-hour clock).
pub const MAX_HOUR: u8 = 23;

/// One expanded `(day-expr, hour)` tuple.
///
/// `days` keeps the order produced by walking the week from the start of the
/// range, so `F-T` yields Friday, Saturday, Sunday, Monday, Tuesday.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TimeSlot {
    pub days: Vec<Day>,
    pub hour: u8,
}

/// The fully expanded value of an `on` or `off` clause.
///
/// Slots are kept in source order and never merged, even when they overlap.
pub type HourSet = Vec<TimeSlot>;

impl TimeSlot {
    #[must_use]
    pub fn new(days: Vec<Day>, hour: u8) -> Self {
        Self { days, hour }
    }

    /// Returns true if the slot has at least one day and an hour within `0..=23`.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.days.is_empty() && self.hour <= MAX_HOUR
    }

    /// Flattens the slot into one `(day, hour)` pair per day.
    pub fn occurrences(&self) -> impl Iterator<Item = (Day, u8)> + '_ {
        self.days.iter().map(move |day| (*day, self.hour))
    }
}
