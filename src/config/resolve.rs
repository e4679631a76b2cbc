//! Resolution engine: orchestrates the collectors in precedence order.
//!
//! Sources, lowest to highest: the caller-supplied seed tree (interactive
//! prompts or environment fallbacks), an optional YAML config file, and the
//! command line. Two passes over the argument list: a lenient discovery pass
//! that only looks for `--strict` and `--config`, then the real pass under
//! the discovered policy. Provenance comes from clap's value sources in the
//! real pass -- a value that arrived via the command line or an environment
//! variable is explicit, a value that never arrived leaves the seed (or
//! file) default in place and stays unmarked.

use super::args::{self, CONFIG_FILE_ARG, ParseMode};
use super::file::merge_config_file;
use super::provenance::ProvenanceMap;
use super::types::Configuration;
use crate::error::ConfigError;
use std::path::Path;
use tracing::info;

/// The outcome of one resolution cycle: the configuration tree and the
/// per-path provenance map, as plain owned values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub config: Configuration,
    pub provenance: ProvenanceMap,
}

impl Resolved {
    /// Whether any source explicitly supplied a value at this path.
    pub fn is_set(&self, path: &str) -> bool {
        self.provenance.is_set(path)
    }
}

/// Resolve a configuration from the seed tree and the argument list.
///
/// `strict` forces strict parsing regardless of what the discovery pass
/// finds; otherwise the policy comes from the parsed `--strict` flag.
/// Resolution is one-shot and idempotent: identical inputs produce an
/// identical tree and provenance map.
pub fn resolve(
    seed: Configuration,
    argv: &[String],
    strict: bool,
) -> Result<Resolved, ConfigError> {
    let mut tree = seed;

    // Discovery pass: only --strict and --config matter here.
    let discovery = args::parse(argv, ParseMode::Lenient)?;
    let strict_mode = strict || discovery.flag("strict");

    if let Some(file_path) = discovery.get(CONFIG_FILE_ARG) {
        if let Some(merged) = merge_config_file(&tree, Path::new(file_path))? {
            info!(path = file_path, "merged configuration file");
            tree = merged;
        }
    }

    // Real pass, under the discovered policy.
    let mode = if strict_mode {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };
    let parsed = args::parse(argv, mode)?;

    // Split the flat record back into the tree: only explicitly-supplied
    // values overwrite, so untouched fields keep their seed/file values.
    let mut provenance = ProvenanceMap::default();
    for (path, raw) in &parsed.values {
        if path == CONFIG_FILE_ARG || !parsed.explicit.contains(path) {
            continue;
        }
        tree.set(path, raw)?;
        provenance.mark(path.clone(), true);
    }

    Ok(Resolved {
        config: tree,
        provenance,
    })
}
