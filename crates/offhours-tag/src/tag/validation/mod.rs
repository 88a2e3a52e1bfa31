//! Schedule invariants.
//!
//! Checked after all clauses are parsed:
//! - `off` and `on` are both present or both absent
//! - present hour sets are non-empty
//! - every slot has at least one day and an hour within `0..=23`

use crate::tag::core::{Schedule, TimeSlot};
use crate::tag::parse::{ParseError, ParseErrorKind, ParseResult};

/// ## Summary
/// Validates a fully assembled schedule.
///
/// ## Errors
/// Returns `UnpairedHours` if only one of `off`/`on` is present, otherwise
/// the first hour-set error.
pub fn validate_schedule(schedule: &Schedule) -> ParseResult<()> {
    match (&schedule.off, &schedule.on) {
        (Some(off), Some(on)) => {
            validate_hour_set(off).map_err(|e| e.with_context("off"))?;
            validate_hour_set(on).map_err(|e| e.with_context("on"))?;
            Ok(())
        }
        (None, None) => Ok(()),
        (Some(_), None) => {
            Err(ParseError::new(ParseErrorKind::UnpairedHours).with_context("off without on"))
        }
        (None, Some(_)) => {
            Err(ParseError::new(ParseErrorKind::UnpairedHours).with_context("on without off"))
        }
    }
}

/// ## Summary
/// Validates one `on`/`off` hour set.
///
/// ## Errors
/// Returns `EmptyHours` for an empty set or a slot without days, and
/// `InvalidHour` for a slot whose hour is out of range.
pub fn validate_hour_set(hours: &[TimeSlot]) -> ParseResult<()> {
    if hours.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyHours));
    }

    for slot in hours {
        if slot.days.is_empty() {
            return Err(ParseError::new(ParseErrorKind::EmptyHours));
        }
        if !slot.is_well_formed() {
            return Err(ParseError::new(ParseErrorKind::InvalidHour));
        }
    }

    Ok(())
}
