//! Cached entry point for parsing schedule tags.

use std::sync::Arc;

use offhours_core::config::Settings;

use crate::cache::{CachedOutcome, ScheduleCache};
use crate::error::TagResult;
use crate::tag::core::Schedule;
use crate::tag::parse::{ParseOptions, ParseResult, parse_tag};

/// Parses tags into schedules, memoizing every outcome in a shared cache.
///
/// The cache is injected so several parsers (or tests) can share or isolate it.
#[derive(Debug, Clone, Default)]
pub struct ScheduleParser {
    options: ParseOptions,
    cache: Arc<ScheduleCache>,
}

impl ScheduleParser {
    #[must_use]
    pub fn new(options: ParseOptions, cache: Arc<ScheduleCache>) -> Self {
        Self { options, cache }
    }

    /// ## Summary
    /// Builds a parser from loaded settings.
    ///
    /// ## Errors
    /// Returns an error if the settings fail validation or name an unknown
    /// default timezone.
    pub fn from_settings(settings: &Settings, cache: Arc<ScheduleCache>) -> TagResult<Self> {
        settings.validate()?;
        let options = ParseOptions::from_config(&settings.parser)?;
        Ok(Self::new(options, cache))
    }

    /// Parses `tag`, returning `None` if it is invalid.
    ///
    /// Outcomes are cached by the exact tag string, invalid ones included.
    #[must_use]
    pub fn parse(&self, tag: &str) -> CachedOutcome {
        self.cache.get_or_insert_with(tag, || match self.try_parse(tag) {
            Ok(schedule) => Some(Arc::new(schedule)),
            Err(err) => {
                tracing::debug!(tag, error = %err, "Rejected schedule tag");
                None
            }
        })
    }

    /// ## Summary
    /// Parses `tag` without consulting the cache.
    ///
    /// ## Errors
    /// Returns the reason the tag is invalid.
    pub fn try_parse(&self, tag: &str) -> ParseResult<Schedule> {
        parse_tag(tag, &self.options)
    }

    #[must_use]
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    #[must_use]
    pub fn cache(&self) -> &Arc<ScheduleCache> {
        &self.cache
    }
}
