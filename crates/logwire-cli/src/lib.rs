//! logwire CLI library
//!
//! Argument parsing and the sample-record driver behind the `logwire` binary.

pub(crate) mod cli;
pub(crate) mod error;
pub(crate) mod samples;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use samples::{emit_samples, run};
