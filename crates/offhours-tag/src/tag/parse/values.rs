//! Value parsers for `on`/`off` time expressions.
//!
//! A time expression is one `(days,hour)` tuple or a bracketed list of them.
//! Parsing is all-or-nothing: one bad tuple rejects the whole expression.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::tag::core::{Day, HourSet, MAX_HOUR, TimeSlot};

/// Returns true if `hour` is within `0..=23`.
#[must_use]
pub fn is_valid_hour(hour: i64) -> bool {
    (0..=i64::from(MAX_HOUR)).contains(&hour)
}

/// Returns true if `s` is one of the seven single-letter day codes.
#[must_use]
pub fn is_valid_day(s: &str) -> bool {
    Day::from_code(s).is_some()
}

/// Returns true if `s` is a single day code or a `D1-D2` range with
/// distinct endpoints.
#[must_use]
pub fn is_valid_day_range(s: &str) -> bool {
    expand_day_range(s).is_ok()
}

/// Parses a single day code.
///
/// ## Errors
/// Returns `InvalidDay` if `s` is not a known code.
pub fn parse_day(s: &str) -> ParseResult<Day> {
    Day::from_code(s)
        .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidDay).with_context(s.to_string()))
}

/// Expands a day expression into the days it covers.
///
/// A single code yields itself. A range `D1-D2` walks the week forward from
/// `D1` to `D2` inclusive, wrapping from Sunday to Monday, so `F-T` yields
/// `[F, S, U, M, T]`.
///
/// ## Errors
/// Returns `InvalidDay` for an unknown code and `InvalidDayRange` for a range
/// that is not exactly two codes around one `-`, or whose endpoints are equal.
pub fn expand_day_range(s: &str) -> ParseResult<Vec<Day>> {
    if s.chars().count() == 1 {
        return Ok(vec![parse_day(s)?]);
    }

    let invalid_range =
        || ParseError::new(ParseErrorKind::InvalidDayRange).with_context(s.to_string());

    let (start, end) = s.split_once('-').ok_or_else(invalid_range)?;
    if end.contains('-') {
        return Err(invalid_range());
    }

    let start = parse_day(start)?;
    let end = parse_day(end)?;
    if start == end {
        return Err(invalid_range());
    }

    let len = start.distance_to(end) + 1;
    Ok(std::iter::successors(Some(start), |day| Some(day.succ()))
        .take(len)
        .collect())
}

/// Parses an hour literal. Surrounding whitespace is ignored.
///
/// ## Errors
/// Returns `InvalidHour` if `s` is not an integer within `0..=23`.
pub fn parse_hour(s: &str) -> ParseResult<u8> {
    let invalid = || ParseError::new(ParseErrorKind::InvalidHour).with_context(s.to_string());

    let hour: i64 = s.trim().parse().map_err(|_e| invalid())?;
    if !is_valid_hour(hour) {
        return Err(invalid());
    }
    u8::try_from(hour).map_err(|_e| invalid())
}

/// Parses the inside of one `( ... )` group into a time slot.
///
/// ## Errors
/// Returns `MalformedTuple` if the group is not two comma-separated fields,
/// or the day/hour error for a bad field.
pub fn parse_tuple(group: &str) -> ParseResult<TimeSlot> {
    let mut fields = group.split(',');
    let (Some(days), Some(hour), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(ParseError::new(ParseErrorKind::MalformedTuple).with_context(group.to_string()));
    };

    let hour = parse_hour(hour)?;
    let days = expand_day_range(days.trim())?;

    Ok(TimeSlot::new(days, hour))
}

/// Parses an `on`/`off` value into its time slots.
///
/// Brackets are stripped, then every `( ... )` group is parsed in order.
/// Characters between groups are ignored, and a value with no groups yields
/// an empty set (rejected later by validation).
///
/// ## Errors
/// Returns the first tuple error; no partial result is produced.
pub fn parse_time_expression(s: &str) -> ParseResult<HourSet> {
    let stripped: String = s.chars().filter(|c| !matches!(c, '[' | ']')).collect();

    extract_groups(&stripped)
        .into_iter()
        .map(parse_tuple)
        .collect()
}

/// Returns the contents of every `( ... )` group in order.
///
/// A group ends at the first `)` after its `(`; an unterminated `(` ends the scan.
fn extract_groups(s: &str) -> Vec<&str> {
    let mut groups = Vec::new();
    let mut rest = s;

    while let Some(open) = rest.find('(') {
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find(')') else {
            break;
        };
        groups.push(&after_open[..close]);
        rest = &after_open[close + 1..];
    }

    groups
}
