use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CONSOLE_ENABLE, DEFAULT_FILENAME_SUFFIX,
    DEFAULT_MAX_FILE_BACKUP, DEFAULT_MAX_FILE_SIZE_MB, LogLevel,
};

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Declarative description of the process logger.
///
/// Built once by the embedding application and handed to the initializer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfiguration {
    /// Write records to standard error
    pub console_enable: bool,
    /// ANSI colored severity labels (console-only, non-JSON output)
    pub color: bool,
    /// Write records to a size-rotated file
    pub file_enable: bool,
    /// JSON objects instead of tab separated lines
    pub format_json: bool,
    pub level: LogLevel,
    /// Path of the active log file; empty means a temp-dir default
    pub filename: String,
    /// Rotation threshold in megabytes (0 = default)
    pub max_file_size: u64,
    /// Rotated files kept on disk (0 = keep all)
    pub max_file_backup: usize,
}

impl Default for LogConfiguration {
    fn default() -> Self {
        Self {
            console_enable: DEFAULT_CONSOLE_ENABLE,
            color: false,
            file_enable: false,
            format_json: false,
            level: LogLevel::default(),
            filename: String::new(),
            max_file_size: DEFAULT_MAX_FILE_SIZE_MB,
            max_file_backup: DEFAULT_MAX_FILE_BACKUP,
        }
    }
}

impl LogConfiguration {
    /// Load a configuration from a TOML file.
    ///
    /// Missing keys take their defaults. Does NOT validate.
    pub fn load(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> ConfigErrorResult<Self> {
        toml::from_str(contents).map_err(|e| ConfigError::serde(e.to_string()))
    }

    /// True when neither output is enabled; initializing such a configuration is a no-op.
    pub fn is_disabled(&self) -> bool {
        !self.console_enable && !self.file_enable
    }

    /// Color applies only to console-only, non-JSON output with `color` set.
    pub fn colored_output(&self) -> bool {
        !self.file_enable && self.console_enable && !self.format_json && self.color
    }

    /// Rotation threshold in megabytes with the 0 default applied.
    pub fn max_file_size_mb(&self) -> u64 {
        if self.max_file_size == 0 {
            DEFAULT_MAX_FILE_SIZE_MB
        } else {
            self.max_file_size
        }
    }

    /// Path of the active log file.
    ///
    /// An empty `filename` resolves to `<temp dir>/<process name>-logwire.log`.
    pub fn resolved_filename(&self) -> PathBuf {
        if !self.filename.is_empty() {
            return PathBuf::from(&self.filename);
        }

        let process = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .unwrap_or_else(|| String::from("logwire"));

        std::env::temp_dir().join(format!("{process}{DEFAULT_FILENAME_SUFFIX}"))
    }

    /// Check the configuration before handing it to the initializer.
    ///
    /// The initializer never calls this; invalid file paths otherwise surface when
    /// the rotating writer is opened.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.file_enable {
            return Ok(());
        }

        let path = self.resolved_filename();
        if path.is_dir() {
            return Err(ConfigError::logging(format!(
                "filename must name a file, {} is a directory",
                path.display()
            )));
        }

        if path.file_name().is_none() {
            return Err(ConfigError::logging(format!(
                "filename has no file component: {}",
                path.display()
            )));
        }

        Ok(())
    }

    /// Apply `LOGWIRE_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        Self::apply_env_bool("LOGWIRE_CONSOLE_ENABLE", &mut self.console_enable);
        Self::apply_env_bool("LOGWIRE_COLOR", &mut self.color);
        Self::apply_env_bool("LOGWIRE_FILE_ENABLE", &mut self.file_enable);
        Self::apply_env_bool("LOGWIRE_FORMAT_JSON", &mut self.format_json);
        Self::apply_env_parse("LOGWIRE_LEVEL", &mut self.level);
        Self::apply_env_string("LOGWIRE_FILENAME", &mut self.filename);
        Self::apply_env_parse("LOGWIRE_MAX_FILE_SIZE", &mut self.max_file_size);
        Self::apply_env_parse("LOGWIRE_MAX_FILE_BACKUP", &mut self.max_file_backup);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }
}
