//! logwire - logger setup driver
//!
//! ```bash
//! # Colored debug output on stderr
//! logwire --level debug --color
//!
//! # JSON to stderr and a rotating file, 10 MB per file, 3 backups
//! logwire --json --file /tmp/app.log --max-file-size 10 --max-file-backup 3
//!
//! # From a TOML file with LOGWIRE_* overrides
//! logwire --config logwire.toml --env --count 100
//! ```

use logwire_cli::{Cli, run};

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(Some(_)) => ExitCode::SUCCESS,
        Ok(None) => {
            eprintln!("Console and file output are both disabled; nothing was installed.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
