//! Error types for the compilation pipeline.
//!
//! Responsibilities:
//! - Define the terminal error kinds surfaced at the command boundary.
//! - Carry operator-facing remediation in the messages themselves.
//!
//! Does NOT handle:
//! - Failures inside the helper process (see `loader::UnitError`; they reach
//!   the parent as `ExecutionFailed`).
//! - Exit-code mapping (the CLI owns that).
//!
//! Invariants:
//! - Every kind is terminal for the invocation; nothing here is retried.
//! - Messages NEVER include raw env-file line contents or variable values.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while compiling `.env` layers into an artifact.
#[derive(Error, Debug)]
pub enum CompileError {
    /// The install state required before resolving is missing; nothing was
    /// spawned.
    #[error(
        "required setup is missing: {detail}. Reinstall envdump or point ENVDUMP_HELPER at the envdump binary"
    )]
    PrecommitMissing { detail: String },

    /// The helper ran but was built without dotenv parsing support.
    #[error(
        "the dotenv loader is unavailable. Reinstall envdump with the \"dotenv\" feature enabled to load the \".env\" files configuring the application"
    )]
    LoaderUnavailable,

    /// The helper could not be spawned, exited abnormally, or broke the
    /// output protocol.
    #[error("isolated resolution failed: {detail}")]
    ExecutionFailed { detail: String },

    /// The artifact could not be written atomically.
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl CompileError {
    /// Build a `WriteFailed` for `path` from an I/O error.
    pub(crate) fn write_failed(path: &std::path::Path, source: std::io::Error) -> Self {
        CompileError::WriteFailed {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precommit_message_names_remediation() {
        let err = CompileError::PrecommitMissing {
            detail: "helper executable /opt/envdump not found".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("/opt/envdump"));
        assert!(message.contains("ENVDUMP_HELPER"));
    }

    #[test]
    fn test_loader_unavailable_names_the_feature() {
        let message = CompileError::LoaderUnavailable.to_string();
        assert!(message.contains("dotenv"));
        assert!(message.contains("Reinstall"));
    }

    #[test]
    fn test_write_failed_names_path_and_cause() {
        let err = CompileError::write_failed(
            std::path::Path::new("/tmp/.env.local.toml"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains(".env.local.toml"));
        assert!(message.contains("denied"));
    }
}
