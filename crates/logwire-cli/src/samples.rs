use crate::{Cli, CliResult};

use std::sync::Arc;

use log::{debug, error, info, warn};
use logwire::{Logger, dpanic};

/// Resolve, validate and install the configuration, then emit `cli.count` sample rounds.
///
/// Returns the installed logger, or `None` when both outputs are disabled.
pub fn run(cli: &Cli) -> CliResult<Option<Arc<Logger>>> {
    let config = cli.configuration()?;
    config.validate()?;

    let Some(logger) = logwire::initialize(&config)? else {
        return Ok(None);
    };
    emit_samples(cli.count);

    Ok(Some(logger))
}

/// One record per severity per round, through the `log` facade.
pub fn emit_samples(rounds: usize) {
    for round in 1..=rounds {
        debug!(round = round; "sample debug record");
        info!(round = round; "sample info record");
        warn!(round = round; "sample warn record");
        error!(round = round; "sample error record");
        dpanic!(round = round; "sample panic record");
    }
    log::logger().flush();
}
