use thiserror::Error;

use crate::tag::parse::ParseError;

/// Tag parsing and configuration errors
#[derive(Error, Debug)]
pub enum TagError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error(transparent)]
    CoreError(#[from] offhours_core::error::CoreError),
}

pub type TagResult<T> = std::result::Result<T, TagError>;
