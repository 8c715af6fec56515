//! Shared constants for the compilation pipeline.

// ============================================================================
// Reserved variable names
// ============================================================================

/// Variable name carrying the active environment identifier. Present in
/// every compiled artifact and recognized by downstream consumers.
pub const ENV_KEY: &str = "APP_ENV";

/// Environment variable overriding the helper executable spawned as the
/// isolated resolver. Defaults to the current executable when unset.
pub const HELPER_ENV: &str = "ENVDUMP_HELPER";

// ============================================================================
// File layout
// ============================================================================

/// Environment name that skips the base `.local` layer.
pub const TEST_ENV: &str = "test";

/// Suffix appended to the base path to form the artifact path.
pub const ARTIFACT_SUFFIX: &str = ".local.toml";
