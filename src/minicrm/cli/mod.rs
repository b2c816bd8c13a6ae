//! # CLI Layer
//!
//! The binary's only jobs: parse flags, install logging, and hand stdin/stdout to a
//! [`Session`]. Menu behavior lives in the library.
//!
//! Logs go to stderr so they never interleave with the menu protocol on stdout.

mod setup;

use clap::Parser;
use minicrm::error::Result;
use minicrm::session::Session;
use setup::Cli;
use std::io;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config();
    tracing::debug!(?config, "starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::from_config(&config, stdin.lock(), stdout.lock())?;
    session.run()
}
