//! CLI parse and dispatch tests.

use super::{Cli, Outcome};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}
