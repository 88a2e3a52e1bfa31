//! Core schedule types.

mod day;
mod schedule;
mod slot;

pub use day::Day;
pub use schedule::Schedule;
pub use slot::{HourSet, MAX_HOUR, TimeSlot};
