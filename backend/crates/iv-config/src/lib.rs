mod config;
mod crypto_config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod notification_config;
mod rebind_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use crypto_config::CryptoConfig;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use notification_config::NotificationConfig;
pub use rebind_config::RebindConfig;

const CONFIG_DIR_ENV: &str = "IV_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".idvault";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "identity.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
