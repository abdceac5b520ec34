mod error;
mod log_configuration;
mod log_level;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, ConfigErrorResult};
pub use log_configuration::LogConfiguration;
pub use log_level::LogLevel;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_CONSOLE_ENABLE: bool = true;
/// Rotation threshold in megabytes used when `max_file_size` is 0
pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 100;
/// 0 retains every rotated file
const DEFAULT_MAX_FILE_BACKUP: usize = 0;
const DEFAULT_FILENAME_SUFFIX: &str = "-logwire.log";
