//! Parser and validator for off-hours schedule tags.
//!
//! A tag such as `off=[(M-F,19),(S,9)];on=(M-F,7);tz=pst` describes when a
//! resource should switch off and back on each week. Parsing is
//! all-or-nothing: a tag either yields a complete [`Schedule`] or is rejected.
//!
//! ```rust
//! use offhours_tag::{Day, ScheduleParser};
//!
//! let parser = ScheduleParser::default();
//! let schedule = parser.parse("off=(M-F,19);on=(M-F,7);tz=pst").unwrap();
//!
//! assert_eq!(schedule.tz.as_str(), "America/Los_Angeles");
//! assert_eq!(schedule.off_occurrences()[0], (Day::Monday, 19));
//! assert!(parser.parse("off=(M-F,19)").is_none());
//! ```

pub mod cache;
pub mod error;
pub mod parser;
pub mod tag;

pub use cache::ScheduleCache;
pub use error::{TagError, TagResult};
pub use parser::ScheduleParser;
pub use tag::{Day, HourSet, Schedule, TimeSlot, TimezoneId};
