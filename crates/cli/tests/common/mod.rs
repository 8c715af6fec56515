//! Shared test utilities for envdump integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory for integration tests.
//!
//! Invariants / Assumptions:
//! - The binary resolves itself as the resolution helper unless
//!   ENVDUMP_HELPER overrides it, so clearing ENVDUMP_HELPER exercises the
//!   production path.
//! - All layered files live in a per-test temp directory reached through
//!   `current_dir`, never in the repository tree.

use assert_cmd::Command;

/// Returns a hermetic `envdump` command for integration testing.
///
/// It ensures:
/// - `ENVDUMP_HELPER` is cleared so the host cannot redirect resolution.
/// - `ENVDUMP_PATH` is cleared so the default `.env` base path applies.
/// - `RUST_LOG` is cleared so stderr only carries error output.
pub fn envdump_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envdump");

    cmd.env_remove("ENVDUMP_HELPER")
        .env_remove("ENVDUMP_PATH")
        .env_remove("RUST_LOG");

    cmd
}
