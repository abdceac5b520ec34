use crate::severity::{passes, record_severity};
use crate::{Encoder, LoggerError, LoggerResult, WriteTarget, timestamp};

use logwire_config::{LogConfiguration, LogLevel};

use std::fmt;
use std::io::Write;

use fern::Dispatch;
use log::{Log, Metadata, Record};

/// A fully built logging core: encoder, write target and severity filter.
///
/// Can be used directly as a `log::Log` (injected where needed) or published
/// with [`install`](crate::install).
pub struct Logger {
    level: LogLevel,
    encoder: Encoder,
    target: WriteTarget,
    file_error: Option<LoggerError>,
    core: Box<dyn Log>,
}

impl Logger {
    /// Build a logger for `config` without publishing it.
    ///
    /// Returns `Ok(None)` when both console and file output are disabled.
    /// With console and file both enabled, a file that cannot be opened leaves a
    /// stderr-only logger; see [`file_error`](Self::file_error).
    pub fn build(config: &LogConfiguration) -> LoggerResult<Option<Self>> {
        Self::build_with_console(config, Box::new(std::io::stderr()))
    }

    pub(crate) fn build_with_console(
        config: &LogConfiguration,
        console: Box<dyn Write + Send>,
    ) -> LoggerResult<Option<Self>> {
        let Some(target) = WriteTarget::select(config) else {
            return Ok(None);
        };
        let level = config.level;
        let encoder = Encoder::select(config);

        let dispatch = Dispatch::new()
            .level(level.level_filter())
            .filter(move |metadata| passes(level, metadata))
            .format(move |out, message, record| {
                let severity = record_severity(record.metadata()).unwrap_or(LogLevel::Debug);
                out.finish(format_args!(
                    "{}",
                    encoder.encode(&timestamp::now(), severity, record, message)
                ))
            });

        let attached = target.attach(dispatch, console)?;
        let (_, core) = attached.dispatch.into_log();

        Ok(Some(Self {
            level,
            encoder,
            target: attached.target,
            file_error: attached.file_error,
            core,
        }))
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn encoder(&self) -> Encoder {
        self.encoder
    }

    pub fn target(&self) -> &WriteTarget {
        &self.target
    }

    /// Why the file half of a console + file configuration was dropped.
    pub fn file_error(&self) -> Option<&LoggerError> {
        self.file_error.as_ref()
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.core.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        self.core.log(record);
    }

    fn flush(&self) {
        self.core.flush();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("encoder", &self.encoder)
            .field("target", &self.target)
            .field("file_error", &self.file_error)
            .finish_non_exhaustive()
    }
}
