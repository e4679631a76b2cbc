//! Layered configuration resolution.
//!
//! Sources, lowest to highest precedence:
//! 1. **Seed** - interactive prompts or environment variables with
//!    documented fallback defaults; fully populates the tree.
//! 2. **File** - an optional YAML document named by `--config`, deep-merged
//!    over the seed field by field.
//! 3. **Command line** - one `--section.field` flag per declared dotted
//!    path, each defaulting to its derived environment variable.
//!
//! The resolved tree and its provenance map are returned as plain values
//! from [`resolve::resolve`]; nothing lives in global state.

mod args;
mod file;
mod merge;
mod path;
mod provenance;
mod resolve;
mod seed;
mod types;

pub use args::{CONFIG_FILE_ARG, ParseMode, ParsedArgs, parse};
pub use file::merge_config_file;
pub use merge::deep_merge;
pub use path::parse_bool;
pub use provenance::ProvenanceMap;
pub use resolve::{Resolved, resolve};
pub use seed::{collect, default_seed, seed_from_env, seed_from_env_with, seed_interactive};
pub use types::*;
