//! CLI argument definitions

use clap::{Parser, Subcommand};

/// htmlprobe - parse compiled-in HTML fixtures with html5ever
#[derive(Parser)]
#[command(name = "htmlprobe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse fixtures (the default fixture when none is named)
    Run {
        /// Fixture names
        #[arg(conflicts_with = "all")]
        fixtures: Vec<String>,

        /// Parse every fixture
        #[arg(long)]
        all: bool,
    },

    /// List available fixtures
    List,
}
