mod cli;

use crate::Cli;

use clap::Parser;

pub(crate) fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["bb"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}
