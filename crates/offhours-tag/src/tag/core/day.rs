//! Days of the week as they appear in schedule tags.

use std::fmt;

use serde::{Serialize, Serializer};

/// A day of the week, identified in tags by a single-letter code.
///
/// Week order starts on Monday and is treated as circular when expanding
/// ranges, so Sunday is followed by Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// Number of days in the week.
    pub const COUNT: usize = 7;

    /// Returns all days in week order (Monday through Sunday).
    #[must_use]
    pub const fn all() -> [Self; Self::COUNT] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }

    /// Returns the single-letter tag code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Monday => 'M',
            Self::Tuesday => 'T',
            Self::Wednesday => 'W',
            Self::Thursday => 'H',
            Self::Friday => 'F',
            Self::Saturday => 'S',
            Self::Sunday => 'U',
        }
    }

    /// Parses a tag code. Codes are case-sensitive and exactly one character.
    #[must_use]
    pub fn from_code(s: &str) -> Option<Self> {
        Some(match s {
            "M" => Self::Monday,
            "T" => Self::Tuesday,
            "W" => Self::Wednesday,
            "H" => Self::Thursday,
            "F" => Self::Friday,
            "S" => Self::Saturday,
            "U" => Self::Sunday,
            _ => return None,
        })
    }

    /// Position in the week, Monday = 0.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Day at `index` modulo 7.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::all()[index % Self::COUNT]
    }

    /// The following day, wrapping Sunday to Monday.
    #[must_use]
    pub const fn succ(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Number of steps walking forward from `self` to `other` (0 when equal).
    #[must_use]
    pub const fn distance_to(self, other: Self) -> usize {
        (other.index() + Self::COUNT - self.index()) % Self::COUNT
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for Day {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.code())
    }
}

impl From<chrono::Weekday> for Day {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

impl From<Day> for chrono::Weekday {
    fn from(day: Day) -> Self {
        match day {
            Day::Monday => Self::Mon,
            Day::Tuesday => Self::Tue,
            Day::Wednesday => Self::Wed,
            Day::Thursday => Self::Thu,
            Day::Friday => Self::Fri,
            Day::Saturday => Self::Sat,
            Day::Sunday => Self::Sun,
        }
    }
}
