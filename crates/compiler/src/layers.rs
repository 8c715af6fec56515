//! Candidate-file rules for layered `.env` resolution.
//!
//! Responsibilities:
//! - Compute the ordered list of layer files that exist for a base path and
//!   environment name.
//!
//! Does NOT handle:
//! - Parsing file contents or merging values (see `loader::unit`).
//!
//! Invariants:
//! - Later candidates override earlier ones key by key.
//! - The `test` environment never receives the base `.local` layer.
//! - Existence is checked at call time, never cached across invocations.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::constants::TEST_ENV;

/// Append a suffix to a path's final component, leaving any existing
/// extension in place (`.env` becomes `.env.dist`, not `.dist`).
pub(crate) fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut os: OsString = base.as_os_str().to_os_string();
    os.push(suffix);
    PathBuf::from(os)
}

/// The ordered layer files that exist on disk for `base` and `env`.
///
/// Order, most general first:
/// 1. `base`, or `base.dist` when `base` is missing. Neither existing is
///    fine; there is no primary layer then.
/// 2. `base.local`, unless `env` is `test`.
/// 3. `base.<env>`.
/// 4. `base.<env>.local`.
///
/// Missing files are skipped silently at every step.
pub fn existing_layers(base: &Path, env: &str) -> Vec<PathBuf> {
    let mut layers = Vec::new();

    if base.exists() {
        layers.push(base.to_path_buf());
    } else {
        let dist = with_suffix(base, ".dist");
        if dist.exists() {
            layers.push(dist);
        }
    }

    if env != TEST_ENV {
        let local = with_suffix(base, ".local");
        if local.exists() {
            layers.push(local);
        }
    }

    let env_file = with_suffix(base, &format!(".{env}"));
    if env_file.exists() {
        layers.push(env_file);
    }

    let env_local = with_suffix(base, &format!(".{env}.local"));
    if env_local.exists() {
        layers.push(env_local);
    }

    layers
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, "").unwrap();
        path
    }

    #[test]
    fn test_with_suffix_keeps_existing_extension() {
        assert_eq!(
            with_suffix(Path::new("/tmp/.env"), ".dist"),
            PathBuf::from("/tmp/.env.dist")
        );
        assert_eq!(
            with_suffix(Path::new("conf/app.env"), ".prod.local"),
            PathBuf::from("conf/app.env.prod.local")
        );
    }

    #[test]
    fn test_all_layers_in_precedence_order() {
        let dir = TempDir::new().unwrap();
        let base = touch(&dir, ".env");
        let local = touch(&dir, ".env.local");
        let env_file = touch(&dir, ".env.prod");
        let env_local = touch(&dir, ".env.prod.local");
        // Present but never a candidate when the base file exists.
        touch(&dir, ".env.dist");

        let layers = existing_layers(&base, "prod");
        assert_eq!(layers, vec![base, local, env_file, env_local]);
    }

    #[test]
    fn test_dist_replaces_missing_base() {
        let dir = TempDir::new().unwrap();
        let dist = touch(&dir, ".env.dist");

        let layers = existing_layers(&dir.path().join(".env"), "dev");
        assert_eq!(layers, vec![dist]);
    }

    #[test]
    fn test_no_primary_when_neither_base_nor_dist_exists() {
        let dir = TempDir::new().unwrap();
        let env_file = touch(&dir, ".env.dev");

        let layers = existing_layers(&dir.path().join(".env"), "dev");
        assert_eq!(layers, vec![env_file]);
    }

    #[test]
    fn test_missing_everything_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(existing_layers(&dir.path().join(".env"), "prod").is_empty());
    }

    #[test]
    fn test_test_env_skips_base_local_but_keeps_test_local() {
        let dir = TempDir::new().unwrap();
        let base = touch(&dir, ".env");
        touch(&dir, ".env.local");
        let test_local = touch(&dir, ".env.test.local");

        let layers = existing_layers(&base, "test");
        assert_eq!(layers, vec![base, test_local]);
    }

    #[test]
    fn test_other_envs_keep_base_local() {
        let dir = TempDir::new().unwrap();
        let base = touch(&dir, ".env");
        let local = touch(&dir, ".env.local");

        let layers = existing_layers(&base, "dev");
        assert_eq!(layers, vec![base, local]);
    }
}
