//! Headless driver for the fl_core league engine. No prompts: the focus
//! club runs on the same AI policy as everyone else.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod presets;

use commands::OutputFormat;

#[derive(Parser)]
#[command(name = "fl", version, about = "Multi-season football league simulator")]
struct Cli {
    /// Log engine activity to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate seasons and print the final tables.
    Run {
        /// How many seasons to play.
        #[arg(long, default_value_t = 1)]
        seasons: u32,
        /// Opening season year.
        #[arg(long, default_value_t = 2025)]
        year: i32,
        /// Simulation seed; the same seed replays the same seasons.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Club index under management.
        #[arg(long, default_value_t = 0)]
        focus: usize,
        /// Output format: table or json.
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
    /// Print one season's fixture list without playing it.
    Schedule {
        #[arg(long, default_value_t = 2025)]
        year: i32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    match cli.command {
        Command::Run {
            seasons,
            year,
            seed,
            focus,
            format,
        } => commands::run(seasons, year, seed, focus, format),
        Command::Schedule { year, seed, format } => commands::schedule(year, seed, format),
    }
}
