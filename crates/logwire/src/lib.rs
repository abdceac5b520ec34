//! Process logger setup.
//!
//! Maps a [`LogConfiguration`] onto a `fern` dispatch (encoder, write target and
//! severity filter), wraps it in a [`Logger`] handle and publishes it behind the
//! `log` facade.
//!
//! ```no_run
//! use logwire::{LogConfiguration, LogLevel};
//!
//! let config = LogConfiguration {
//!     level: LogLevel::Debug,
//!     color: true,
//!     ..LogConfiguration::default()
//! };
//! let logger = logwire::initialize(&config).expect("logger");
//! log::info!("ready");
//! # drop(logger);
//! ```

mod encoder;
mod error;
mod global;
mod logger;
mod rotation;
mod severity;
mod timestamp;
mod write_target;

#[cfg(test)]
mod tests;

pub use encoder::Encoder;
pub use error::{LoggerError, LoggerResult};
pub use global::{current, initialize, install};
pub use logger::Logger;
pub use rotation::RotationPolicy;
pub use severity::{PANIC_TARGET, record_severity};
pub use timestamp::{TIMESTAMP_FORMAT, format_timestamp};
pub use write_target::WriteTarget;

pub use logwire_config::{LogConfiguration, LogLevel};

#[doc(hidden)]
pub use log as __log;

/// Target the initializer reports on once a logger is installed
const LOGWIRE_TARGET: &str = "logwire";
