mod global;

use crate::LogConfiguration;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

/// File-only configuration writing to `app.log` in a fresh temp directory
pub(crate) fn file_config(temp: &TempDir) -> LogConfiguration {
    LogConfiguration {
        console_enable: false,
        file_enable: true,
        filename: log_path(temp).to_string_lossy().into_owned(),
        ..LogConfiguration::default()
    }
}

pub(crate) fn log_path(temp: &TempDir) -> PathBuf {
    temp.path().join("app.log")
}

/// Every regular file in `dir`, active and rotated
pub(crate) fn log_files(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.is_file())
        .collect()
}

/// Concatenated contents of every log file in `dir`
pub(crate) fn read_logs(dir: &Path) -> String {
    log_files(dir)
        .into_iter()
        .map(|path| std::fs::read_to_string(path).unwrap())
        .collect()
}

/// In-memory console writer whose clones share one buffer
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Console + file configuration whose file sits under a regular file, so it cannot be opened
pub(crate) fn blocked_tee_config(temp: &TempDir) -> LogConfiguration {
    let blocker = temp.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    LogConfiguration {
        console_enable: true,
        file_enable: true,
        filename: blocker.join("app.log").to_string_lossy().into_owned(),
        ..LogConfiguration::default()
    }
}
