//! Tracing subscriber setup driven by `[logging]` settings.

use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

use crate::config::LoggingConfig;
use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Builds the log filter for the configured level or directive string
/// (`info`, `offhours_tag=trace,warn`, ...).
///
/// ## Errors
/// Returns `CoreError::ConfigError` if the level is not a valid filter directive.
pub fn build_filter(config: &LoggingConfig) -> CoreResult<EnvFilter> {
    EnvFilter::try_new(config.level.as_str()).map_err(|e| {
        CoreError::ConfigError(format!("invalid logging.level {:?}: {e}", config.level))
    })
}

/// ## Summary
/// Installs a global `fmt` subscriber filtered by `logging.level`.
///
/// ## Errors
/// Returns an error if the level is invalid or a global subscriber is
/// already installed.
pub fn init(config: &LoggingConfig) -> CoreResult<()> {
    let filter = build_filter(config)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| CoreError::ConfigError(format!("logging already initialized: {e}")))?;

    tracing::debug!(level = %config.level, "Logging initialized");
    Ok(())
}
