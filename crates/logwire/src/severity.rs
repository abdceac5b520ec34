use logwire_config::LogLevel;

use log::{Level, Metadata};

/// Reserved target marking an error record as panic severity.
///
/// The `log` facade stops at `Error`; [`dpanic!`](crate::dpanic) emits on this target.
pub const PANIC_TARGET: &str = "logwire::panic";

/// Severity rank of a record, `None` for records below debug (`Level::Trace`).
pub fn record_severity(metadata: &Metadata<'_>) -> Option<LogLevel> {
    match metadata.level() {
        Level::Error if metadata.target() == PANIC_TARGET => Some(LogLevel::Panic),
        Level::Error => Some(LogLevel::Error),
        Level::Warn => Some(LogLevel::Warn),
        Level::Info => Some(LogLevel::Info),
        Level::Debug => Some(LogLevel::Debug),
        Level::Trace => None,
    }
}

pub(crate) fn passes(threshold: LogLevel, metadata: &Metadata<'_>) -> bool {
    record_severity(metadata).is_some_and(|severity| severity >= threshold)
}

/// Log a panic-severity record without panicking.
///
/// Accepts everything `log::error!` accepts except an explicit `target:`.
#[macro_export]
macro_rules! dpanic {
    ($($arg:tt)+) => {
        $crate::__log::error!(target: $crate::PANIC_TARGET, $($arg)+)
    };
}
