//! Capability probe for the dotenv parsing dependency.
//!
//! Responsibilities:
//! - Report whether the isolated unit can resolve `.env` files at all,
//!   before any environment or filesystem work happens.
//!
//! Invariants:
//! - The probe runs once per resolution, at the start, never mid-merge.
//! - `Absent` is an orderly outcome (exit zero, no output); `Incompatible`
//!   is a hard error.

use super::protocol::PROTOCOL_VERSION;

/// Result of probing the resolution capability inside the isolated unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderCapability {
    /// Dotenv parsing is compiled in and the requested protocol matches.
    Available,
    /// The helper was built without the `dotenv` feature. Resolution must
    /// report nothing rather than produce a guessed result.
    Absent,
    /// The caller speaks a protocol this helper does not understand.
    Incompatible { requested: u32 },
}

/// Probe the capability for a request carrying `requested` as its protocol
/// version.
pub fn probe(requested: u32) -> LoaderCapability {
    if requested != PROTOCOL_VERSION {
        return LoaderCapability::Incompatible { requested };
    }
    if cfg!(feature = "dotenv") {
        LoaderCapability::Available
    } else {
        LoaderCapability::Absent
    }
}
