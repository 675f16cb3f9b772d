//! htmlprobe CLI
//!
//! Parses a fixed HTML document with html5ever and panics if the parser
//! reports an error.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use htmlprobe_core::{Fixture, Harness, Html5everParser};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let harness = Harness::new(Html5everParser::new());

    match cli.command {
        None => {
            harness.run_or_abort(Fixture::default_fixture());
            Ok(())
        }
        Some(Commands::Run { fixtures, all }) => {
            commands::run::run_fixtures(&harness, &fixtures, all)
        }
        Some(Commands::List) => {
            commands::list::run_list();
            Ok(())
        }
    }
}
