//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Resolution, layering, or artifact writing (see `envdump-compiler`).
//!
//! Invariants:
//! - `Resolve` writes nothing to stdout except the serialized variable
//!   mapping (or nothing at all when the loader capability is absent).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::DumpEnv { env, empty } => {
            commands::dump::run(&cli.path, &env, empty)?;
        }
        Commands::Resolve => {
            commands::resolve::run()?;
        }
    }
    Ok(())
}
