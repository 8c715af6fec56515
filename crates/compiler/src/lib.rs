//! Compilation of layered `.env` files into a precomputed artifact.
//!
//! This crate holds the pipeline behind the `envdump` command line tool:
//! the candidate-file rules, the isolated loading step that merges layers
//! without touching the caller's environment, and the atomic artifact
//! writer.

pub mod artifact;
pub mod compile;
pub mod constants;
pub mod error;
pub mod layers;
pub mod loader;
pub mod vars;

pub use compile::{Compiled, EnvCompiler};
pub use error::CompileError;
pub use loader::IsolatedLoader;
pub use vars::VariableSet;
