//! Resolve command implementation.
//!
//! The in-process half of isolated resolution. The parent re-executes this
//! binary with the `resolve` subcommand, writes one request line to stdin,
//! and reads the final variable mapping back from stdout.

use std::io::Read;

use anyhow::{Context, Result};
use envdump_compiler::loader::{ResolveRequest, UnitOutput, run_unit};

pub fn run() -> Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read the resolution request from stdin")?;

    let request: ResolveRequest =
        serde_json::from_str(input.trim()).context("invalid resolution request")?;

    match run_unit(&request)? {
        UnitOutput::Resolved(vars) => {
            let payload =
                serde_json::to_string(&vars).context("failed to encode the variable mapping")?;
            println!("{payload}");
        }
        // No loader capability. Exit 0 with empty stdout; the parent turns
        // this into the remediation message.
        UnitOutput::CapabilityAbsent => {}
    }

    Ok(())
}
