//! Schedule tag parser.
//!
//! Runs the whole pipeline for one tag: clause splitting, time expressions,
//! timezone resolution and validation.

use offhours_core::config::{ClausePolicy, ParserConfig};

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{Clause, parse_clause, split_clauses};
use super::values::parse_time_expression;
use crate::error::TagResult;
use crate::tag::core::{HourSet, Schedule};
use crate::tag::timezone::TimezoneResolver;
use crate::tag::validation::validate_schedule;

/// Settings that change how a tag is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Handling of clauses without exactly one `=`.
    pub malformed_clause: ClausePolicy,
    /// Alias table lookup and default timezone.
    pub timezones: TimezoneResolver,
}

impl ParseOptions {
    /// ## Summary
    /// Builds options from the `[parser]` config section.
    ///
    /// ## Errors
    /// Returns `TagError::UnknownTimezone` if the configured default timezone
    /// is neither a known alias nor an IANA identifier.
    pub fn from_config(config: &ParserConfig) -> TagResult<Self> {
        Ok(Self {
            malformed_clause: config.malformed_clause,
            timezones: TimezoneResolver::new(&config.default_timezone)?,
        })
    }

    #[must_use]
    pub fn with_clause_policy(mut self, policy: ClausePolicy) -> Self {
        self.malformed_clause = policy;
        self
    }
}

/// Parses a schedule tag.
///
/// Later clauses with the same key replace earlier ones. Unknown keys are
/// ignored. A missing or unrecognized `tz` resolves to the default timezone.
///
/// ## Errors
///
/// Returns an error if any `on`/`off` value is malformed, if the schedule
/// fails validation, or if a clause is malformed under
/// [`ClausePolicy::Strict`].
#[tracing::instrument(skip(tag, options), fields(tag_len = tag.len()))]
pub fn parse_tag(tag: &str, options: &ParseOptions) -> ParseResult<Schedule> {
    tracing::debug!("Parsing schedule tag");

    let mut off: Option<ParseResult<HourSet>> = None;
    let mut on: Option<ParseResult<HourSet>> = None;
    let mut tz = None;

    for (index, raw) in split_clauses(tag).enumerate() {
        let clause_num = index + 1;

        match parse_clause(raw) {
            Clause::Off(value) => {
                off = Some(parse_time_expression(value).map_err(|e| e.at_clause(clause_num)));
            }
            Clause::On(value) => {
                on = Some(parse_time_expression(value).map_err(|e| e.at_clause(clause_num)));
            }
            Clause::Timezone(alias) => tz = Some(options.timezones.resolve(alias)),
            Clause::Other { key, .. } => {
                tracing::trace!(clause = clause_num, key, "Ignoring unknown key");
            }
            Clause::Malformed(raw) => match options.malformed_clause {
                ClausePolicy::Skip => {
                    tracing::debug!(clause = clause_num, raw, "Skipping malformed clause");
                }
                ClausePolicy::Strict => {
                    return Err(ParseError::new(ParseErrorKind::MalformedClause)
                        .at_clause(clause_num)
                        .with_context(raw.to_string()));
                }
            },
        }
    }

    let schedule = Schedule {
        off: off.transpose()?,
        on: on.transpose()?,
        tz: tz.unwrap_or_else(|| options.timezones.default_timezone().clone()),
    };

    validate_schedule(&schedule)?;

    tracing::debug!(tz = %schedule.tz, has_hours = schedule.has_hours(), "Schedule tag parsed");

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::core::Day::{Friday, Monday, Saturday, Sunday, Thursday, Tuesday, Wednesday};
    use crate::tag::core::TimeSlot;

    fn weekdays(hour: u8) -> TimeSlot {
        TimeSlot::new(vec![Monday, Tuesday, Wednesday, Thursday, Friday], hour)
    }

    fn parse(tag: &str) -> ParseResult<Schedule> {
        parse_tag(tag, &ParseOptions::default())
    }

    #[test_log::test]
    fn parses_schedule_with_timezone() {
        let s = parse("off=(M-F,19);on=(M-F,7);tz=pst").expect("valid tag");

        assert_eq!(s.off, Some(vec![weekdays(19)]));
        assert_eq!(s.on, Some(vec![weekdays(7)]));
        assert_eq!(s.tz.as_str(), "America/Los_Angeles");
    }

    #[test_log::test]
    fn parses_default_timezone() {
        let s = parse("off=(M-F,19);on=(M-F,7)").expect("valid tag");

        assert_eq!(s.off, Some(vec![weekdays(19)]));
        assert_eq!(s.on, Some(vec![weekdays(7)]));
        assert_eq!(s.tz.as_str(), "America/New_York");
    }

    #[test]
    fn parses_multiple_hours() {
        let s = parse("off=[(M-F,19),(S,9)];on=[(M-F,7),(S,15)];tz=pst").expect("valid tag");

        assert_eq!(
            s.off,
            Some(vec![weekdays(19), TimeSlot::new(vec![Saturday], 9)])
        );
        assert_eq!(
            s.on,
            Some(vec![weekdays(7), TimeSlot::new(vec![Saturday], 15)])
        );
    }

    #[test]
    fn clause_order_does_not_matter() {
        let a = parse("tz=pt;on=(M-F,7);off=(M-F,19)").expect("valid tag");
        let b = parse("off=(M-F,19);on=(M-F,7);tz=pt").expect("valid tag");
        assert_eq!(a, b);
    }

    #[test]
    fn timezone_only_is_valid() {
        let s = parse("tz=pt").expect("valid tag");
        assert_eq!(s.off, None);
        assert_eq!(s.on, None);
        assert_eq!(s.tz.as_str(), "America/Los_Angeles");

        let empty = parse("").expect("empty tag");
        assert_eq!(empty.tz.as_str(), "America/New_York");
    }

    #[test]
    fn unknown_or_empty_timezone_uses_default() {
        for tag in ["off=(M,1);on=(M,2);tz=foo", "off=(M,1);on=(M,2);tz="] {
            let s = parse(tag).expect("valid tag");
            assert_eq!(s.tz.as_str(), "America/New_York", "{tag}");
        }
    }

    #[test]
    fn wrapping_range_in_tag() {
        let s = parse("off=(F-T,22);on=(F-T,6)").expect("valid tag");
        assert_eq!(
            s.off,
            Some(vec![TimeSlot::new(
                vec![Friday, Saturday, Sunday, Monday, Tuesday],
                22
            )])
        );
    }

    #[test]
    fn off_without_on_is_invalid() {
        let err = parse("off=[(M-F,21),(U,18)]").expect_err("unpaired");
        assert_eq!(err.kind, ParseErrorKind::UnpairedHours);

        let err = parse("tz=pt;on=(M-F,7)").expect_err("unpaired");
        assert_eq!(err.kind, ParseErrorKind::UnpairedHours);
    }

    #[test]
    fn invalid_hour_is_invalid() {
        let err = parse("off=(M-F,asdf);on=(M-F,asdf)").expect_err("bad hour");
        assert_eq!(err.kind, ParseErrorKind::InvalidHour);
        assert_eq!(err.clause, Some(1));
    }

    #[test]
    fn invalid_day_is_invalid() {
        assert!(parse("off=(asdf,19);on=(asdf,7)").is_err());
        assert!(parse("off=[(Foo,19),(S,19)];on=(M-F,7)").is_err());
    }

    #[test]
    fn empty_value_is_invalid() {
        let err = parse("off=;on=(M,7)").expect_err("empty off");
        assert_eq!(err.kind, ParseErrorKind::EmptyHours);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let s = parse("foo=[(M-F,19),(S,19)];off=(M,1);on=(M,2)").expect("valid tag");
        assert_eq!(s.off, Some(vec![TimeSlot::new(vec![Monday], 1)]));
    }

    #[test]
    fn later_clause_replaces_earlier() {
        let s = parse("off=(asdf,1);off=(U,20);on=(U,8);tz=pt;tz=gmt").expect("valid tag");
        assert_eq!(s.off, Some(vec![TimeSlot::new(vec![Sunday], 20)]));
        assert_eq!(s.tz.as_str(), "Europe/London");
    }

    #[test]
    fn malformed_clause_skipped_by_default() {
        let s = parse("off=(M,1);on=(M,2);a=b=c;;junk").expect("valid tag");
        assert!(s.has_hours());
    }

    #[derive(Clone, Default)]
    struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0
                .lock()
                .map_err(|_e| std::io::Error::other("log buffer poisoned"))?
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn skipped_clause_is_logged_at_debug() {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            assert!(parse("off=(M,1);on=(M,2);junk").is_ok());
        });

        let output = String::from_utf8(buffer.0.lock().expect("log buffer").clone())
            .expect("utf-8 log output");
        let line = output
            .lines()
            .find(|line| line.contains("Skipping malformed clause"))
            .expect("skip is logged");
        assert!(line.contains("DEBUG"), "{line}");
        assert!(line.contains("junk"), "{line}");
    }

    #[test]
    fn malformed_clause_rejected_when_strict() {
        let options = ParseOptions::default().with_clause_policy(ClausePolicy::Strict);

        let err = parse_tag("off=(M,1);on=(M,2);a=b=c", &options).expect_err("strict");
        assert_eq!(err.kind, ParseErrorKind::MalformedClause);
        assert_eq!(err.clause, Some(3));

        assert!(parse_tag("off=(M,1);on=(M,2);tz=pt", &options).is_ok());
    }

    #[test]
    fn options_from_config() {
        let config = ParserConfig {
            default_timezone: "pt".to_string(),
            malformed_clause: ClausePolicy::Strict,
        };
        let options = ParseOptions::from_config(&config).expect("valid config");

        let s = parse_tag("off=(M,1);on=(M,2)", &options).expect("valid tag");
        assert_eq!(s.tz.as_str(), "America/Los_Angeles");
        assert!(parse_tag("off=(M,1);on=(M,2);;", &options).is_err());
    }
}
