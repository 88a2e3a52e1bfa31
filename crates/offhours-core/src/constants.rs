/// Application name, used for the config file name.
pub const APP_NAME: &str = "offhours";

/// Optional TOML config file looked up in the working directory.
pub const CONFIG_FILE: &str = const_str::concat!(APP_NAME, ".toml");

/// Environment variable prefix (`OFFHOURS__PARSER__DEFAULT_TIMEZONE=pt`).
pub const ENV_PREFIX: &str = "OFFHOURS";

/// Separator between the prefix and nested keys in environment variable names.
pub const ENV_SEPARATOR: &str = "__";

/// Timezone alias applied when a tag carries no usable `tz` clause.
pub const DEFAULT_TIMEZONE_ALIAS: &str = "et";

pub const DEFAULT_LOG_LEVEL: &str = "info";
