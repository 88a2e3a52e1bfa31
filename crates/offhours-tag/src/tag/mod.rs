//! Off-hours schedule tags.
//!
//! A tag is a `;`-separated list of `key=value` clauses:
//!
//! ```text
//! off=[(M-F,19),(S,9)];on=(M-F,7);tz=pst
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Schedule types (`Day`, `TimeSlot`, `Schedule`)
//! - [`parse`] - Clause splitting, time expressions and the parse pipeline
//! - [`validation`] - Schedule invariants
//! - [`timezone`] - Alias resolution
//! - [`build`] - Canonical serialization

pub mod build;
pub mod core;
pub mod parse;
pub mod timezone;
pub mod validation;

pub use build::serialize;
pub use self::core::{Day, HourSet, Schedule, TimeSlot};
pub use parse::{ParseError, ParseErrorKind, ParseOptions, ParseResult, parse_tag};
pub use timezone::{TimezoneId, TimezoneResolver};
