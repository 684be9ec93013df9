use crate::utils::*;
use anyhow::Context;
use clap::Parser;
use std::ffi::OsString;

mod utils;

/// Sort a fixed list of numbers and print them to stderr.
///
/// Takes no options: every argument, including `--help` and `--version`, is accepted and
/// ignored.
#[derive(Parser)]
#[command(
    name = "dictionary-sort",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    ignored: Vec<OsString>,
}

fn main() {
    setup_logger();

    match Cli::try_parse() {
        Ok(cli) => tracing::debug!(count = cli.ignored.len(), "ignoring arguments"),
        Err(e) => tracing::debug!(error = %e, "ignoring unparsable arguments"),
    }

    let result = dictionary_sort::run().context("could not print the sorted numbers");
    if let Err(e) = result {
        print_error(e);
        std::process::exit(1);
    }
}
