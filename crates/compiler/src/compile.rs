//! Orchestration of one compilation run.
//!
//! Responsibilities:
//! - Decide between empty-mode synthesis and isolated resolution.
//! - Render the artifact and persist it atomically.
//!
//! Does NOT handle:
//! - Layer precedence or parsing (see `layers`, `loader`).
//! - Exit codes or terminal output (the CLI prints the confirmation).
//!
//! Invariants:
//! - The variable set is only read once resolution returns.
//! - Resolution failure writes nothing; a previous artifact stays as it
//!   was.

use std::path::{Path, PathBuf};

use crate::artifact;
use crate::constants::ENV_KEY;
use crate::error::CompileError;
use crate::loader::IsolatedLoader;
use crate::vars::VariableSet;

/// Compiles the layered `.env` files for one environment into the on-disk
/// artifact.
#[derive(Debug, Default)]
pub struct EnvCompiler {
    loader: IsolatedLoader,
}

impl EnvCompiler {
    /// Compiler with default helper discovery.
    pub fn new() -> Self {
        Self {
            loader: IsolatedLoader::new(),
        }
    }

    /// Compiler driving a specific loader.
    pub fn with_loader(loader: IsolatedLoader) -> Self {
        Self { loader }
    }

    /// Compile the `.env` family at `base_path` for `env`.
    ///
    /// With `empty` set, candidate files are ignored and the artifact
    /// carries only the reserved key; the isolated loader is not invoked.
    pub fn compile(
        &self,
        base_path: &Path,
        env: &str,
        empty: bool,
    ) -> Result<Compiled, CompileError> {
        let vars = if empty {
            VariableSet::seeded(ENV_KEY, env)
        } else {
            self.loader.resolve(base_path, env)?
        };

        let content = artifact::render(&vars, env);
        let path = artifact::artifact_path(base_path);
        artifact::write_atomic(&path, &content)?;

        tracing::info!(path = %path.display(), count = vars.len(), "environment compiled");
        Ok(Compiled {
            path,
            count: vars.len(),
        })
    }
}

/// Result of a successful compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiled {
    /// Path of the artifact that was written.
    pub path: PathBuf,
    /// Number of variables in the artifact.
    pub count: usize,
}

impl Compiled {
    /// The one-line confirmation shown to the operator, naming the artifact
    /// by file name.
    pub fn confirmation(&self) -> String {
        let file = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        format!("Successfully dumped .env files in {file}")
    }
}
