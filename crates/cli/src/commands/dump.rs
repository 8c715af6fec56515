//! Dump-env command implementation.

use std::path::Path;

use anyhow::Result;
use envdump_compiler::EnvCompiler;
use tracing::info;

pub fn run(base_path: &Path, env: &str, empty: bool) -> Result<()> {
    info!(
        "Compiling .env files at {} for environment {env:?}",
        base_path.display()
    );

    let compiled = EnvCompiler::new().compile(base_path, env, empty)?;
    println!("{}", compiled.confirmation());

    Ok(())
}
