//! Schedule serialization back to tag form.
//!
//! Output is canonical: clauses in `off`, `on`, `tz` order, contiguous day
//! walks compressed back into `D1-D2` ranges, and the timezone written as its
//! primary alias. Parsing the output yields an equal schedule.

use crate::tag::core::{Day, Schedule, TimeSlot};
use crate::tag::timezone::primary_alias;

/// Serializes a schedule to its canonical tag.
#[must_use]
pub fn serialize(schedule: &Schedule) -> String {
    let mut clauses = Vec::with_capacity(3);

    if let Some(off) = &schedule.off {
        clauses.push(format!("off={}", serialize_hours(off)));
    }
    if let Some(on) = &schedule.on {
        clauses.push(format!("on={}", serialize_hours(on)));
    }

    let tz = primary_alias(schedule.tz.as_str()).unwrap_or(schedule.tz.as_str());
    clauses.push(format!("tz={tz}"));

    clauses.join(";")
}

/// Serializes an hour set. A single tuple is written without brackets.
#[must_use]
pub fn serialize_hours(hours: &[TimeSlot]) -> String {
    let tuples: Vec<String> = hours.iter().flat_map(serialize_slot).collect();

    match tuples.as_slice() {
        [single] => single.clone(),
        _ => format!("[{}]", tuples.join(",")),
    }
}

/// Serializes one slot. Days that do not form a single forward walk through
/// the week are written as one tuple per day.
fn serialize_slot(slot: &TimeSlot) -> Vec<String> {
    if let Some(expr) = day_expression(&slot.days) {
        return vec![format!("({expr},{})", slot.hour)];
    }

    slot.days
        .iter()
        .map(|day| format!("({day},{})", slot.hour))
        .collect()
}

/// Compresses days into a day expression if they are one contiguous walk.
fn day_expression(days: &[Day]) -> Option<String> {
    match days {
        [] => None,
        [single] => Some(single.to_string()),
        [first, .., last] => {
            let contiguous = days.len() <= Day::COUNT
                && days.windows(2).all(|pair| pair[0].succ() == pair[1]);
            (contiguous && first != last).then(|| format!("{first}-{last}"))
        }
    }
}
