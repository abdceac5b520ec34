use crate::{LoggerError, LoggerResult};

use logwire_config::LogConfiguration;

use std::path::{Path, PathBuf};

use logroller::{LogRoller, LogRollerBuilder, Rotation, RotationSize};

/// Size-based rotation settings for the file sink.
///
/// No age-based rotation and no compression; the active file is replaced once it
/// grows past `max_size_mb` and only `max_backups` rotated files are kept
/// (0 keeps them all).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPolicy {
    pub path: PathBuf,
    pub max_size_mb: u64,
    pub max_backups: usize,
}

impl RotationPolicy {
    pub fn from_config(config: &LogConfiguration) -> Self {
        Self {
            path: config.resolved_filename(),
            max_size_mb: config.max_file_size_mb(),
            max_backups: config.max_file_backup,
        }
    }

    /// Directory holding the active and rotated files.
    pub fn directory(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Open the rotating writer, creating the directory first.
    pub fn open(&self) -> LoggerResult<LogRoller> {
        let directory = self.directory();
        std::fs::create_dir_all(&directory).map_err(|e| self.open_error(e))?;

        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| self.open_error("path has no file name"))?;
        let directory = path_string(&directory);

        let mut builder = LogRollerBuilder::new(directory.as_str(), file_name.as_str())
            .rotation(Rotation::SizeBased(RotationSize::MB(self.max_size_mb)));
        if self.max_backups > 0 {
            builder = builder.max_keep_files(u64::try_from(self.max_backups).unwrap_or(u64::MAX));
        }

        builder.build().map_err(|e| self.open_error(e))
    }

    fn open_error<E: std::fmt::Display>(&self, error: E) -> LoggerError {
        LoggerError::RotatingFile {
            path: self.path.clone(),
            message: error.to_string(),
        }
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
