
use crate::Cli;

use clap::Parser;

pub(crate) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("logwire").chain(args.iter().copied())).unwrap()
}
