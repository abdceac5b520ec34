use crate::{LOGWIRE_TARGET, Logger, LoggerError, LoggerResult};

use logwire_config::LogConfiguration;

use std::sync::{Arc, LazyLock, OnceLock};

use arc_swap::ArcSwapOption;
use log::{Log, Metadata, Record, debug, error};

/// The one `log::Log` registered with the facade; forwards to the current handle.
static GLOBAL: LazyLock<GlobalLogger> = LazyLock::new(|| GlobalLogger {
    current: ArcSwapOption::empty(),
});

/// Whether `GLOBAL` owns the facade. `log::set_logger` succeeds at most once per process.
static REGISTERED: OnceLock<bool> = OnceLock::new();

struct GlobalLogger {
    current: ArcSwapOption<Logger>,
}

impl Log for GlobalLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        match &*self.current.load() {
            Some(logger) => logger.enabled(metadata),
            None => false,
        }
    }

    fn log(&self, record: &Record<'_>) {
        if let Some(logger) = &*self.current.load() {
            logger.log(record);
        }
    }

    fn flush(&self) {
        if let Some(logger) = &*self.current.load() {
            logger.flush();
        }
    }
}

/// Build a logger for `config` and publish it as the process logger.
///
/// A configuration with console and file output both disabled is a no-op:
/// nothing is built and the current logger (if any) stays installed.
/// Otherwise the new logger replaces the current one and is also returned so
/// callers can hold it directly. When console and file are both enabled and the
/// file cannot be opened, the stderr half is still installed and the failure is
/// logged through it.
pub fn initialize(config: &LogConfiguration) -> LoggerResult<Option<Arc<Logger>>> {
    let Some(logger) = Logger::build(config)? else {
        return Ok(None);
    };

    publish(logger).map(Some)
}

/// Install `logger` and report how it was set up.
pub(crate) fn publish(logger: Logger) -> LoggerResult<Arc<Logger>> {
    let logger = install(logger)?;

    debug!(
        target: LOGWIRE_TARGET,
        "Logger initialized: level={}, encoder={}, target={}",
        logger.level(),
        logger.encoder(),
        logger.target()
    );
    if let Some(err) = logger.file_error() {
        error!(target: LOGWIRE_TARGET, "{err}; writing to stderr only");
    }

    Ok(logger)
}

/// Publish a built logger, replacing the current one.
///
/// Fails only when some other `log::Log` implementation was registered with the
/// facade before this crate.
///
/// The handle swap and the facade's max level update are separate steps. Two
/// concurrent installs can leave the max level of the logger that lost the swap.
pub fn install(logger: Logger) -> LoggerResult<Arc<Logger>> {
    let registered = *REGISTERED.get_or_init(|| log::set_logger(&*GLOBAL).is_ok());
    if !registered {
        return Err(LoggerError::Install {
            message: String::from("another logger is already registered with the log facade"),
        });
    }

    let level = logger.level().level_filter();
    let logger = Arc::new(logger);

    if let Some(previous) = GLOBAL.current.swap(Some(Arc::clone(&logger))) {
        previous.flush();
    }
    log::set_max_level(level);

    Ok(logger)
}

/// The currently published logger, if any.
pub fn current() -> Option<Arc<Logger>> {
    GLOBAL.current.load_full()
}
