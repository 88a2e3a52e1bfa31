//! Schedule tag parsing.
//!
//! ## Usage
//!
//! ```rust
//! use offhours_tag::tag::parse::{ParseOptions, parse_tag};
//!
//! let schedule = parse_tag("off=(M-F,19);on=(M-F,7);tz=pst", &ParseOptions::default()).unwrap();
//! assert_eq!(schedule.tz.as_str(), "America/Los_Angeles");
//! ```

mod error;
mod lexer;
mod parser;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{Clause, parse_clause, split_clauses, split_key_value};
pub use parser::{ParseOptions, parse_tag};
pub use values::{
    expand_day_range, is_valid_day, is_valid_day_range, is_valid_hour, parse_day, parse_hour,
    parse_time_expression, parse_tuple,
};
