//! Isolated resolution of layered `.env` files.
//!
//! Responsibilities:
//! - Spawn a disposable helper process and hand it the resolution request
//!   over stdin.
//! - Pass the caller's environment snapshot explicitly as the helper's
//!   starting state.
//! - Block until the helper exits, then decode its stdout into a
//!   `VariableSet`.
//!
//! Does NOT handle:
//! - The merge itself (see `unit`; it runs inside the helper).
//! - Artifact rendering or persistence (see `artifact`).
//!
//! Invariants:
//! - The caller's live environment is never mutated here.
//! - Empty stdout from a zero-exit helper means the dotenv capability is
//!   absent, never "no variables"; the reserved key makes a real result
//!   non-empty.
//! - No timeout and no retry; a hung helper hangs the compilation.

mod capability;
mod protocol;
mod unit;

pub use capability::LoaderCapability;
pub use protocol::{PROTOCOL_VERSION, RESOLVE_SUBCOMMAND, ResolveRequest};
pub use unit::{UnitError, UnitOutput, run_unit};

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::constants::{ENV_KEY, HELPER_ENV};
use crate::error::CompileError;
use crate::vars::VariableSet;

/// Parent-side driver for the isolated execution unit.
///
/// The helper executable defaults to the current binary, re-entered through
/// the hidden resolve subcommand; `ENVDUMP_HELPER` or [`with_helper`] can
/// point somewhere else (tests inject failure modes this way).
///
/// [`with_helper`]: IsolatedLoader::with_helper
#[derive(Debug, Default)]
pub struct IsolatedLoader {
    helper: Option<PathBuf>,
}

impl IsolatedLoader {
    /// Create a loader using the default helper discovery.
    pub fn new() -> Self {
        Self { helper: None }
    }

    /// Use a specific helper executable instead of discovering one.
    pub fn with_helper(mut self, path: PathBuf) -> Self {
        self.helper = Some(path);
        self
    }

    /// Resolve the layered files under `base_path` for `env` in a helper
    /// process and return the merged set.
    ///
    /// Blocks until the helper exits; there is no timeout. The caller's own
    /// environment is read once as the helper's starting state and never
    /// written.
    pub fn resolve(&self, base_path: &Path, env: &str) -> Result<VariableSet, CompileError> {
        let helper = self.helper_path()?;

        let request = ResolveRequest::new(base_path, env);
        let request_line = serde_json::to_string(&request).map_err(|e| {
            CompileError::ExecutionFailed {
                detail: format!("failed to encode resolution request: {e}"),
            }
        })?;

        let snapshot: Vec<(OsString, OsString)> = std::env::vars_os().collect();

        tracing::debug!(helper = %helper.display(), env, "spawning isolated resolver");
        let mut child = Command::new(&helper)
            .arg(RESOLVE_SUBCOMMAND)
            .env_clear()
            .envs(snapshot)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| CompileError::ExecutionFailed {
                detail: format!("failed to spawn helper {}: {e}", helper.display()),
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| CompileError::ExecutionFailed {
                detail: "helper stdin was not captured".to_string(),
            })?;
        // A helper that exits before reading the request is judged by its
        // status and output below, so a failed write is not itself fatal.
        let _ = writeln!(stdin, "{request_line}");
        drop(stdin);

        let output = child
            .wait_with_output()
            .map_err(|e| CompileError::ExecutionFailed {
                detail: format!("failed waiting for helper: {e}"),
            })?;

        if !output.status.success() {
            tracing::warn!(status = %output.status, "helper exited abnormally");
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = if stderr.trim().is_empty() {
                format!("helper exited with {}", output.status)
            } else {
                format!("helper exited with {}: {}", output.status, stderr.trim())
            };
            return Err(CompileError::ExecutionFailed { detail });
        }

        if output.stdout.is_empty() {
            return Err(CompileError::LoaderUnavailable);
        }

        let vars: VariableSet = serde_json::from_slice(&output.stdout).map_err(|e| {
            CompileError::ExecutionFailed {
                detail: format!("helper output could not be decoded: {e}"),
            }
        })?;

        // Decoding bypasses `insert`, so a repeated name would survive into
        // the artifact as a duplicate assignment. Treat it like any other
        // malformed payload.
        if let Some(name) = vars.first_duplicate() {
            return Err(CompileError::ExecutionFailed {
                detail: format!("helper output repeats the variable {name:?}"),
            });
        }

        match vars.get(ENV_KEY) {
            Some(seeded) if seeded == env => {}
            Some(seeded) => {
                return Err(CompileError::ExecutionFailed {
                    detail: format!(
                        "helper returned {ENV_KEY}=\"{seeded}\" for environment \"{env}\""
                    ),
                });
            }
            None => {
                return Err(CompileError::ExecutionFailed {
                    detail: format!("helper output is missing the {ENV_KEY} seed"),
                });
            }
        }

        tracing::debug!(count = vars.len(), "resolved variable set");
        Ok(vars)
    }

    /// Resolve the helper executable and check it exists. Nothing is
    /// spawned when this fails.
    fn helper_path(&self) -> Result<PathBuf, CompileError> {
        if let Some(path) = &self.helper {
            return Self::checked(path.clone());
        }
        if let Some(path) = std::env::var_os(HELPER_ENV) {
            return Self::checked(PathBuf::from(path));
        }
        let exe = std::env::current_exe().map_err(|e| CompileError::PrecommitMissing {
            detail: format!("cannot locate the current executable: {e}"),
        })?;
        Self::checked(exe)
    }

    fn checked(path: PathBuf) -> Result<PathBuf, CompileError> {
        if path.exists() {
            Ok(path)
        } else {
            Err(CompileError::PrecommitMissing {
                detail: format!("helper executable {} not found", path.display()),
            })
        }
    }
}
