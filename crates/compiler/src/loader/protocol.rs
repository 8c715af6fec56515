//! Wire types crossing the isolation boundary.
//!
//! Responsibilities:
//! - Define the request the parent writes to the helper's stdin.
//! - Pin the protocol version and the helper subcommand name.
//!
//! Does NOT handle:
//! - The response payload shape; that is the `VariableSet` itself,
//!   serialized as-is on the helper's stdout.
//!
//! Invariants:
//! - The request is exactly one JSON line.
//! - `PROTOCOL_VERSION` changes whenever the request or payload shape does.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Version tag carried in every request. The helper refuses versions it does
/// not understand instead of guessing.
pub const PROTOCOL_VERSION: u32 = 1;

/// Subcommand that puts the helper binary into resolution mode.
pub const RESOLVE_SUBCOMMAND: &str = "resolve";

/// Resolution request, parent to helper, one JSON line on stdin.
///
/// The request travels over stdin rather than argv so base paths and
/// environment names never show up in the process table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveRequest {
    pub protocol: u32,
    pub base_path: PathBuf,
    pub env: String,
}

impl ResolveRequest {
    /// Build a current-version request.
    pub fn new(base_path: impl Into<PathBuf>, env: impl Into<String>) -> Self {
        Self {
            protocol: PROTOCOL_VERSION,
            base_path: base_path.into(),
            env: env.into(),
        }
    }
}
