//! sflash: drill question/answer pairs from a plain text file.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(
    name = "sflash",
    version,
    about = "Simple flashcards: drill question/answer pairs from a text file"
)]
pub struct Cli {
    /// Question file (`-question` lines followed by `+answer` lines)
    pub file: PathBuf,

    /// Jump to a random record before every batch
    #[arg(short = 'r', long, visible_alias = "r", env = "SFLASH_RANDOMIZE")]
    pub randomize: bool,

    /// Start over from the top after the last record
    #[arg(short = 'p', long, env = "SFLASH_PERPETUAL")]
    pub perpetual: bool,

    /// Percentage of answer words required before moving on (0-100)
    #[arg(
        short = 't',
        long = "no-repeat-threshold",
        env = "SFLASH_THRESHOLD",
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub threshold: Option<u8>,

    /// Records loaded per batch
    #[arg(
        short = 'b',
        long,
        env = "SFLASH_BATCH_SIZE",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub batch_size: Option<u64>,

    /// Seed for random positioning
    #[arg(long, env = "SFLASH_SEED")]
    pub seed: Option<u64>,

    /// Validate the file and exit without drilling
    #[arg(long)]
    pub check: bool,

    /// Print the end-of-run report as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let result = if cli.check {
        commands::check::execute(&cli.file)
    } else {
        let policy = config::session_policy(&cli);
        commands::drill::execute(&cli.file, &policy, cli.json)
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
