//! Artifact rendering and atomic persistence.
//!
//! Responsibilities:
//! - Render a `VariableSet` into the TOML artifact, header comment included.
//! - Write the artifact atomically next to the base path.
//!
//! Does NOT handle:
//! - Producing the variable set (see `loader` and `compile`).
//!
//! Invariants:
//! - Rendering is deterministic: no timestamps, no host data; unchanged
//!   input yields byte-identical output.
//! - The destination only ever holds a complete artifact. The temp file is
//!   created in the destination directory so the rename cannot cross
//!   filesystems.
//! - A consumer materializes the mapping with a single TOML parse.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::constants::ARTIFACT_SUFFIX;
use crate::error::CompileError;
use crate::layers::with_suffix;
use crate::vars::VariableSet;

/// Path of the compiled artifact for `base` (`.env` maps to
/// `.env.local.toml`).
pub fn artifact_path(base: &Path) -> PathBuf {
    with_suffix(base, ARTIFACT_SUFFIX)
}

/// Render the artifact: a generated-by header naming the exact command that
/// recreates it, then one assignment per variable in insertion order.
pub fn render(vars: &VariableSet, env: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "# This file was generated by running \"envdump dump-env {env}\"\n\n"
    ));
    for (name, value) in vars.iter() {
        out.push_str(&format!(
            "{} = {}\n",
            render_key(name),
            toml::Value::from(value)
        ));
    }
    out
}

/// Keys outside TOML's bare-key alphabet (dots would open a table path) are
/// rendered as quoted keys.
fn render_key(name: &str) -> String {
    let bare = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if bare {
        name.to_string()
    } else {
        toml::Value::from(name).to_string()
    }
}

/// Atomically replace the artifact at `path` with `content`.
///
/// The content lands in a temp file in the destination directory first; the
/// rename is the commit point. A reader observes either the previous
/// artifact or the new one, never a partial write.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), CompileError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| CompileError::write_failed(path, e))?;
    temp.write_all(content.as_bytes())
        .map_err(|e| CompileError::write_failed(path, e))?;
    temp.persist(path)
        .map_err(|e| CompileError::write_failed(path, e.error))?;

    tracing::debug!(path = %path.display(), "artifact written atomically");
    Ok(())
}
