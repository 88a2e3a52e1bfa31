use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::constants::{
    CONFIG_FILE, DEFAULT_LOG_LEVEL, DEFAULT_TIMEZONE_ALIAS, ENV_PREFIX, ENV_SEPARATOR,
};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// What to do with a clause that does not contain exactly one `=`.
///
/// Config files and environment variables accept the same spellings as
/// [`FromStr`]: `skip` or `strict`, case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ClausePolicy {
    /// Drop the clause and keep parsing the rest of the tag.
    #[default]
    Skip,
    /// Reject the whole tag.
    Strict,
}

impl ClausePolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skip => "skip",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for ClausePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ClausePolicy {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for ClausePolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "strict" => Ok(Self::Strict),
            other => Err(CoreError::InvalidInput(format!(
                "unknown clause policy: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    /// Alias used when a tag has no `tz` clause or names an unknown alias.
    #[serde(default = "default_timezone")]
    pub default_timezone: String,
    #[serde(default)]
    pub malformed_clause: ClausePolicy,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_timezone: default_timezone(),
            malformed_clause: ClausePolicy::default(),
        }
    }
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE_ALIAS.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Settings {
    /// ## Summary
    /// Loads configuration from the optional `offhours.toml` file and `OFFHOURS__*`
    /// environment variables. Environment variables take precedence over the file.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load() -> Result<Self> {
        Self::load_from(
            File::with_name(CONFIG_FILE).required(false),
            environment(),
        )
    }

    /// ## Summary
    /// Layers `env` over `file` and deserializes the result.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load_from<S>(file: S, env: Environment) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Builds settings from an in-memory TOML document.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML, does not match the
    /// settings shape, or fails validation.
    pub fn from_toml(source: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks values that deserialization alone cannot reject.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the default timezone alias is blank.
    pub fn validate(&self) -> CoreResult<()> {
        if self.parser.default_timezone.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "parser.default_timezone must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Environment source for `OFFHOURS__SECTION__KEY` variables.
#[must_use]
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .ignore_empty(true)
        .try_parsing(true)
}

/// ## Summary
/// Loads configuration from environment variables, a `.env` file and `offhours.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(
        default_timezone = %settings.parser.default_timezone,
        malformed_clause = %settings.parser.malformed_clause,
        "Configuration loaded"
    );
    Ok(settings)
}
