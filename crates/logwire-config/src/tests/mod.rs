
use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Clear every LOGWIRE_* override so tests start from the file/default values
pub(crate) fn clear_logwire_env() -> Vec<EnvGuard> {
    [
        "LOGWIRE_CONSOLE_ENABLE",
        "LOGWIRE_COLOR",
        "LOGWIRE_FILE_ENABLE",
        "LOGWIRE_FORMAT_JSON",
        "LOGWIRE_LEVEL",
        "LOGWIRE_FILENAME",
        "LOGWIRE_MAX_FILE_SIZE",
        "LOGWIRE_MAX_FILE_BACKUP",
    ]
    .into_iter()
    .map(EnvGuard::remove)
    .collect()
}

/// Write `contents` to `logwire.toml` inside a fresh temp directory
pub(crate) fn write_config_file(contents: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("logwire.toml");
    std::fs::write(&path, contents).unwrap();
    (temp, path)
}
