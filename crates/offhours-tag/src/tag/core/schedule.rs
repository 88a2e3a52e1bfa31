//! The parsed schedule.

use std::fmt;

use serde::Serialize;

use super::{Day, HourSet, TimeSlot};
use crate::tag::build::serialize;
use crate::tag::timezone::TimezoneId;

/// A validated off-hours schedule.
///
/// `off` and `on` are either both present or both absent; a schedule that
/// only names a timezone is valid. Instances come out of the parser already
/// validated and are not modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub off: Option<HourSet>,
    pub on: Option<HourSet>,
    pub tz: TimezoneId,
}

impl Schedule {
    /// Returns true if the schedule carries custom on/off hours.
    #[must_use]
    pub fn has_hours(&self) -> bool {
        self.off.is_some() && self.on.is_some()
    }

    /// Every `(day, hour)` at which the schedule switches off, in tag order.
    #[must_use]
    pub fn off_occurrences(&self) -> Vec<(Day, u8)> {
        flatten(self.off.as_deref())
    }

    /// Every `(day, hour)` at which the schedule switches on, in tag order.
    #[must_use]
    pub fn on_occurrences(&self) -> Vec<(Day, u8)> {
        flatten(self.on.as_deref())
    }
}

fn flatten(hours: Option<&[TimeSlot]>) -> Vec<(Day, u8)> {
    hours
        .unwrap_or_default()
        .iter()
        .flat_map(TimeSlot::occurrences)
        .collect()
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}
