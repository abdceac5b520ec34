use crate::CliResult;

use logwire_config::{LogConfiguration, LogLevel};

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "logwire")]
#[command(about = "Initialize the process logger from a configuration and emit sample records")]
#[command(version)]
pub struct Cli {
    /// TOML configuration file (defaults apply when omitted)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Apply LOGWIRE_* environment variable overrides
    #[arg(long)]
    pub env: bool,

    /// Write records to standard error
    #[arg(long, overrides_with = "no_console")]
    pub console: bool,

    /// Do not write records to standard error
    #[arg(long, overrides_with = "console")]
    pub no_console: bool,

    /// Write records to this rotating file
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,

    /// Encode records as JSON
    #[arg(long)]
    pub json: bool,

    /// Color severity labels (console-only text output)
    #[arg(long)]
    pub color: bool,

    /// Minimum severity: debug, info, warn, err, panic (anything else is info)
    #[arg(long)]
    pub level: Option<String>,

    /// Rotation threshold in megabytes
    #[arg(long, value_name = "MB")]
    pub max_file_size: Option<u64>,

    /// Rotated files to keep (0 keeps all)
    #[arg(long, value_name = "N")]
    pub max_file_backup: Option<usize>,

    /// Sample rounds; each round emits one record per severity
    #[arg(long, default_value_t = 1)]
    pub count: usize,
}

impl Cli {
    /// Resolve the configuration: file (or defaults), then env, then flags.
    pub fn configuration(&self) -> CliResult<LogConfiguration> {
        let mut config = match &self.config {
            Some(path) => LogConfiguration::load(path)?,
            None => LogConfiguration::default(),
        };

        if self.env {
            config.apply_env_overrides();
        }

        if self.console {
            config.console_enable = true;
        }
        if self.no_console {
            config.console_enable = false;
        }
        if let Some(file) = &self.file {
            config.file_enable = true;
            config.filename = file.clone();
        }
        if self.json {
            config.format_json = true;
        }
        if self.color {
            config.color = true;
        }
        if let Some(level) = &self.level {
            config.level = LogLevel::resolve(level);
        }
        if let Some(size) = self.max_file_size {
            config.max_file_size = size;
        }
        if let Some(backups) = self.max_file_backup {
            config.max_file_backup = backups;
        }

        Ok(config)
    }
}
