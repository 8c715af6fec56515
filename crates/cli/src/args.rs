//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not resolve or render anything (see `envdump-compiler`).

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envdump")]
#[command(about = "envdump - Compile .env files into a single precomputed artifact", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envdump dump-env prod\n  envdump dump prod\n  envdump dump-env dev --empty\n  envdump --path config/.env dump-env staging\n"
)]
pub struct Cli {
    /// Path to the base .env file.
    ///
    /// Can also be set via the ENVDUMP_PATH environment variable.
    #[arg(
        long,
        global = true,
        env = "ENVDUMP_PATH",
        default_value = ".env",
        value_name = "FILE"
    )]
    pub path: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile .env files for an environment into a local artifact
    #[command(visible_alias = "dump")]
    DumpEnv {
        /// The application environment to dump .env files for - e.g. "prod".
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        env: String,

        /// Ignore the content of .env files
        #[arg(long)]
        empty: bool,
    },

    /// Resolve layered .env files inside this process and print the result.
    ///
    /// This is the isolated half of `dump-env`: the parent re-executes the
    /// binary with this subcommand, sends one request line on stdin, and
    /// reads the final variable mapping from stdout.
    #[command(hide = true)]
    Resolve,
}
