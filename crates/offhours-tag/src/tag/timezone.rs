//! Timezone alias resolution for the `tz` clause.
//!
//! Tags carry short, case-sensitive aliases (`pst`, `et`, ...). Each alias maps
//! to an IANA identifier; anything unrecognized falls back to the resolver's
//! default instead of failing the parse.

use std::fmt;
use std::str::FromStr;

use chrono_tz::Tz;
use offhours_core::constants::DEFAULT_TIMEZONE_ALIAS;
use serde::Serialize;

use crate::error::{TagError, TagResult};

const PACIFIC: &str = "America/Los_Angeles";
const MOUNTAIN: &str = "America/Denver";
const CENTRAL: &str = "America/Chicago";
const EASTERN: &str = "America/New_York";
const LONDON: &str = "Europe/London";

/// Alias table. The first alias listed for an identifier is its primary alias.
const ALIASES: &[(&str, &str)] = &[
    ("pt", PACIFIC),
    ("pdt", PACIFIC),
    ("pst", PACIFIC),
    ("mt", MOUNTAIN),
    ("ct", CENTRAL),
    ("cst", CENTRAL),
    ("cdt", CENTRAL),
    ("et", EASTERN),
    ("est", EASTERN),
    ("edt", EASTERN),
    ("gmt", LONDON),
    ("gt", LONDON),
];

/// Canonical timezone identifier attached to a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TimezoneId(String);

impl TimezoneId {
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ## Summary
    /// Converts the identifier into a `chrono_tz::Tz`.
    ///
    /// ## Errors
    /// Returns `TagError::UnknownTimezone` if the identifier is not an IANA name.
    pub fn to_tz(&self) -> TagResult<Tz> {
        Tz::from_str(&self.0).map_err(|_e| TagError::UnknownTimezone(self.0.clone()))
    }
}

impl fmt::Display for TimezoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Looks up the identifier for an alias.
#[must_use]
pub fn lookup_alias(alias: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(known, _)| *known == alias)
        .map(|(_, identifier)| *identifier)
}

/// Returns the primary alias for an identifier, if the table has one.
#[must_use]
pub fn primary_alias(identifier: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(_, known)| *known == identifier)
        .map(|(alias, _)| *alias)
}

/// Resolves `tz` clause values against the alias table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneResolver {
    default: TimezoneId,
}

impl TimezoneResolver {
    /// ## Summary
    /// Creates a resolver whose fallback is `default`, given either as an alias
    /// or as an IANA identifier.
    ///
    /// ## Errors
    /// Returns `TagError::UnknownTimezone` if `default` is neither.
    pub fn new(default: &str) -> TagResult<Self> {
        let default = if let Some(identifier) = lookup_alias(default) {
            TimezoneId::new(identifier)
        } else {
            let tz = Tz::from_str(default)
                .map_err(|_e| TagError::UnknownTimezone(default.to_string()))?;
            TimezoneId::new(tz.name())
        };

        Ok(Self { default })
    }

    /// Resolves an alias, falling back to the default for empty or unknown values.
    #[must_use]
    pub fn resolve(&self, alias: &str) -> TimezoneId {
        if let Some(identifier) = lookup_alias(alias) {
            TimezoneId::new(identifier)
        } else {
            tracing::debug!(alias, default = %self.default, "Unknown timezone alias, using default");
            self.default.clone()
        }
    }

    #[must_use]
    pub fn default_timezone(&self) -> &TimezoneId {
        &self.default
    }
}

impl Default for TimezoneResolver {
    fn default() -> Self {
        Self {
            default: TimezoneId::new(lookup_alias(DEFAULT_TIMEZONE_ALIAS).unwrap_or(EASTERN)),
        }
    }
}
