//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map CompileError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-5 are reserved for specific error categories.
//! - Every compilation failure is terminal; no code signals "retry the same
//!   invocation".

use envdump_compiler::CompileError;

/// Structured exit codes for envdump.
///
/// These codes enable scripts to distinguish between different failure modes
/// and take appropriate action (reinstall, fix permissions, fail fast, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Precommit failure - the helper executable could not be located.
    ///
    /// Scripts should reinstall envdump or point ENVDUMP_HELPER at a valid
    /// binary.
    PrecommitMissing = 2,

    /// Loader unavailable - the helper was built without the dotenv loader.
    ///
    /// Scripts should reinstall envdump with the "dotenv" feature enabled.
    LoaderUnavailable = 3,

    /// Execution failure - the isolated resolution run failed or produced
    /// undecodable output.
    ExecutionFailed = 4,

    /// Write failure - the artifact could not be written.
    ///
    /// Scripts should fix permissions or free disk space before rerunning.
    WriteFailed = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&CompileError> for ExitCode {
    /// Map CompileError variants to structured exit codes.
    fn from(err: &CompileError) -> Self {
        match err {
            CompileError::PrecommitMissing { .. } => ExitCode::PrecommitMissing,
            CompileError::LoaderUnavailable => ExitCode::LoaderUnavailable,
            CompileError::ExecutionFailed { .. } => ExitCode::ExecutionFailed,
            CompileError::WriteFailed { .. } => ExitCode::WriteFailed,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no CompileError is found in the
    /// error chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(compile_err) = cause.downcast_ref::<CompileError>() {
                return ExitCode::from(compile_err);
            }
        }

        ExitCode::GeneralError
    }
}
