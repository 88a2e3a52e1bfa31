//! Tag and clause splitting.

/// A single `;`-delimited clause, classified by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause<'a> {
    /// `off=<time-expression>`
    Off(&'a str),
    /// `on=<time-expression>`
    On(&'a str),
    /// `tz=<alias>`
    Timezone(&'a str),
    /// Any other well-formed `key=value`; ignored by the parser.
    Other { key: &'a str, value: &'a str },
    /// No `=`, or more than one.
    Malformed(&'a str),
}

/// Splits a tag into its clauses.
///
/// Empty clauses (`a=b;;c=d`, a trailing `;`, or an empty tag) are kept as
/// empty strings.
pub fn split_clauses(tag: &str) -> impl Iterator<Item = &str> {
    tag.split(';')
}

/// Splits a clause into key and value. Exactly one `=` is required.
#[must_use]
pub fn split_key_value(clause: &str) -> Option<(&str, &str)> {
    let (key, value) = clause.split_once('=')?;
    if value.contains('=') {
        return None;
    }
    Some((key, value))
}

/// Classifies a raw clause by its key. Keys are matched case-sensitively.
#[must_use]
pub fn parse_clause(raw: &str) -> Clause<'_> {
    match split_key_value(raw) {
        Some(("off", value)) => Clause::Off(value),
        Some(("on", value)) => Clause::On(value),
        Some(("tz", value)) => Clause::Timezone(value),
        Some((key, value)) => Clause::Other { key, value },
        None => Clause::Malformed(raw),
    }
}
