//! Child-side resolution: what runs inside the isolated execution unit.
//!
//! Responsibilities:
//! - Scrub the inherited process environment so ambient values can neither
//!   shadow file values nor leak into the result.
//! - Seed the reserved key, merge the candidate layers, and hand back the
//!   final set for emission.
//!
//! Does NOT handle:
//! - Spawning, stdin/stdout framing, or exit codes (see `IsolatedLoader`
//!   and the CLI's hidden subcommand).
//!
//! Invariants:
//! - Only ever runs inside a disposable helper process; it rewrites the
//!   whole process environment.
//! - The reserved key is seeded before any file is parsed and is never
//!   displaced by file contents.
//! - Error detail names files and positions, never line contents.

use thiserror::Error;

use super::capability::{self, LoaderCapability};
use super::protocol::{PROTOCOL_VERSION, ResolveRequest};
use crate::constants::ENV_KEY;
use crate::vars::VariableSet;

use std::path::PathBuf;

#[cfg(feature = "dotenv")]
use crate::layers;
#[cfg(feature = "dotenv")]
use std::path::Path;

/// Outcome of running the isolated unit.
#[derive(Debug, PartialEq, Eq)]
pub enum UnitOutput {
    /// Resolution ran to completion; the set goes out on stdout.
    Resolved(VariableSet),
    /// Dotenv support is not compiled in; emit nothing and exit zero. The
    /// parent tells this apart from a result by the empty output.
    CapabilityAbsent,
}

/// Failures inside the isolated unit. They surface on the helper's stderr
/// and reach the operator as `ExecutionFailed` in the parent.
#[derive(Error, Debug)]
pub enum UnitError {
    #[error("resolution protocol {requested} is not supported (this helper speaks {expected})")]
    Protocol { requested: u32, expected: u32 },

    /// Parse failure in one layer file.
    ///
    /// SAFETY: only the byte index of the failure is reported, never the
    /// offending line, so secret values cannot leak through error output.
    #[error("failed to parse {path} at position {error_index}")]
    LayerParse { path: PathBuf, error_index: usize },

    /// I/O failure reading a layer file that existed moments earlier.
    #[error("failed to read {path}: {kind}")]
    LayerIo {
        path: PathBuf,
        kind: std::io::ErrorKind,
    },

    /// Unknown dotenv failure (future variants from the dotenvy crate).
    #[error("failed to load {path}")]
    LayerUnknown { path: PathBuf },
}

/// Run resolution inside the current process.
///
/// Callers beware: past the capability probe this scrubs and rewrites the
/// entire process environment. It belongs in a helper process that exists
/// for nothing else.
pub fn run_unit(request: &ResolveRequest) -> Result<UnitOutput, UnitError> {
    match capability::probe(request.protocol) {
        LoaderCapability::Incompatible { requested } => {
            return Err(UnitError::Protocol {
                requested,
                expected: PROTOCOL_VERSION,
            });
        }
        LoaderCapability::Absent => return Ok(UnitOutput::CapabilityAbsent),
        LoaderCapability::Available => {}
    }

    scrub_environment();

    // Seed the reserved key before any layer is parsed: file-provided values
    // must never displace it, and substitution has to see it from the start.
    // SAFETY: the helper process is single-threaded at this point.
    unsafe { std::env::set_var(ENV_KEY, &request.env) };
    let mut vars = VariableSet::seeded(ENV_KEY, request.env.clone());

    merge_layers(request, &mut vars)?;

    tracing::debug!(env = %request.env, count = vars.len(), "layers merged");
    Ok(UnitOutput::Resolved(vars))
}

/// Remove every variable from the process environment. Ambient values would
/// otherwise shadow file values during substitution and leak into the
/// result.
fn scrub_environment() {
    let names: Vec<_> = std::env::vars_os().map(|(name, _)| name).collect();
    for name in names {
        // SAFETY: the helper process is single-threaded at this point.
        unsafe { std::env::remove_var(&name) };
    }
}

#[cfg(feature = "dotenv")]
fn merge_layers(request: &ResolveRequest, vars: &mut VariableSet) -> Result<(), UnitError> {
    for path in layers::existing_layers(&request.base_path, &request.env) {
        apply_layer(&path, vars)?;
    }
    Ok(())
}

#[cfg(not(feature = "dotenv"))]
fn merge_layers(_request: &ResolveRequest, _vars: &mut VariableSet) -> Result<(), UnitError> {
    unreachable!("the capability probe reports Absent before merging")
}

/// Parse one layer and fold it into the running set.
///
/// Every accepted variable is written through to the process environment
/// immediately, so `$VAR` substitution in later lines and later layers
/// resolves against the freshest value.
#[cfg(feature = "dotenv")]
fn apply_layer(path: &Path, vars: &mut VariableSet) -> Result<(), UnitError> {
    tracing::debug!(path = %path.display(), "applying layer");
    let entries = dotenvy::from_path_iter(path).map_err(|e| layer_error(path, e))?;
    for entry in entries {
        let (name, value) = entry.map_err(|e| layer_error(path, e))?;
        if name == ENV_KEY {
            continue;
        }
        // SAFETY: the helper process is single-threaded at this point.
        unsafe { std::env::set_var(&name, &value) };
        vars.insert(name, value);
    }
    Ok(())
}

/// Map a dotenvy failure to a `UnitError` without carrying line contents.
#[cfg(feature = "dotenv")]
fn layer_error(path: &Path, err: dotenvy::Error) -> UnitError {
    match err {
        dotenvy::Error::LineParse(_, index) => UnitError::LayerParse {
            path: path.to_path_buf(),
            error_index: index,
        },
        dotenvy::Error::Io(io_err) => UnitError::LayerIo {
            path: path.to_path_buf(),
            kind: io_err.kind(),
        },
        _ => UnitError::LayerUnknown {
            path: path.to_path_buf(),
        },
    }
}
