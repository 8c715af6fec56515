//! envdump - Compiles .env files into a single precomputed artifact.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Compile layered .env files via the shared compiler library.
//! - Serve as the helper endpoint for isolated resolution (`resolve`).
//!
//! Does NOT handle:
//! - Layering rules, isolation, or artifact rendering (see `crates/compiler`).
//!
//! Invariants:
//! - Logging goes to stderr. Stdout is reserved for command output: the
//!   confirmation line for `dump-env`, the variable mapping for `resolve`.
//! - `.env` files are input data for compilation, never configuration for
//!   envdump itself; nothing is loaded into the process environment before
//!   CLI parsing.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            // Print the error message
            eprintln!("{:#}", e);

            // Return structured exit code
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
