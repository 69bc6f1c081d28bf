//! Command-line interface definitions for attach-tester.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use logging::LogArgs;

/// Command-line interface for the `attach-tester` binary.
#[derive(Parser, Debug)]
#[command(
    name = "attach-tester",
    about = "Solve window attachment scenarios and decode rule values",
    version
)]
pub struct Cli {
    /// Logging controls shared across attach binaries.
    #[command(flatten)]
    pub log: LogArgs,

    /// What to do.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level tester commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Position a window for each scenario file and print the result.
    Solve(SolveArgs),
    /// Decode packed rule values.
    Rule(RuleArgs),
}

/// Arguments for the `solve` subcommand.
#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// One or more scenario files in RON syntax.
    #[arg(value_name = "SCENARIO", num_args = 1.., required = true)]
    pub scenarios: Vec<PathBuf>,

    /// Emit a JSON array instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `rule` subcommand.
#[derive(Args, Debug, Clone)]
pub struct RuleArgs {
    /// Packed rule values, decimal or `0x`-prefixed hex (e.g. `0x1E`).
    #[arg(value_name = "BITS", num_args = 1.., required = true)]
    pub values: Vec<String>,
}
