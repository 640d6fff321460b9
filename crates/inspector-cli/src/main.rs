//! Inspector CLI: the `inspector` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    support::init_tracing(cli.verbose);

    match cli.command {
        Commands::Show {
            input,
            indent,
            config,
            max_depth,
            first_match,
            escape_strings,
            json,
        } => commands::show::run(commands::show::Args {
            input,
            indent,
            config,
            max_depth,
            first_match,
            escape_strings,
            json_output: json,
        }),

        Commands::Kinds { universe, json } => commands::kinds::run(universe, json),
    }
}
