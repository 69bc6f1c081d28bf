#![warn(missing_docs)]

//! Entry point for the `attach-tester` binary.

mod cli;
mod error;
mod rule;
mod scenario;
mod solve;

use std::{io, process};

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, registry};

use crate::{
    cli::{Cli, Commands},
    error::Result,
};

fn main() {
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, and dispatch to the chosen subcommand.
fn run() -> Result<()> {
    let Cli { log, command } = Cli::parse();
    let (capture, logs) = logging::capture::capture();
    registry()
        .with(log.env_filter())
        .with(fmt::layer().with_writer(io::stderr).without_time())
        .with(capture)
        .try_init()
        .ok();

    match command {
        Commands::Solve(args) => solve::run(&args, &logs),
        Commands::Rule(args) => rule::run(&args),
    }
}
