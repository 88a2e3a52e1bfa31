//! Schedule tag parsing error types.

use std::fmt;

/// Result type for tag parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type for tag parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Kind of error.
    pub kind: ParseErrorKind,
    /// Clause the error occurred in (1-based), if it is tied to one.
    pub clause: Option<usize>,
    /// Additional context about the error.
    pub context: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            clause: None,
            context: None,
        }
    }

    /// Records the clause this error belongs to, unless one is already set.
    #[must_use]
    pub fn at_clause(mut self, clause: usize) -> Self {
        if self.clause.is_none() {
            self.clause = Some(clause);
        }
        self
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(clause) = self.clause {
            write!(f, " in clause {clause}")?;
        }
        if let Some(ref ctx) = self.context {
            write!(f, ": {ctx}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Kinds of parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Clause without exactly one `=` (only an error under the strict policy).
    MalformedClause,
    /// Tuple that does not split into `days,hour`.
    MalformedTuple,
    /// Hour that is not an integer in `0..=23`.
    InvalidHour,
    /// Unknown day code.
    InvalidDay,
    /// Day range that is not `D1-D2` with distinct endpoints.
    InvalidDayRange,
    /// `on` given without `off`, or the other way around.
    UnpairedHours,
    /// `on` or `off` value with no time slots.
    EmptyHours,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedClause => write!(f, "malformed clause"),
            Self::MalformedTuple => write!(f, "malformed tuple"),
            Self::InvalidHour => write!(f, "invalid hour"),
            Self::InvalidDay => write!(f, "invalid day"),
            Self::InvalidDayRange => write!(f, "invalid day range"),
            Self::UnpairedHours => write!(f, "on and off must be given together"),
            Self::EmptyHours => write!(f, "empty hour set"),
        }
    }
}
