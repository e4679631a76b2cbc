//! Config-file collector.
//!
//! Loads a hierarchical YAML document and deep-merges it over the seeded
//! tree, so file values become new defaults that the command line can still
//! override. A missing file contributes nothing; an existing file that
//! fails to parse (bad YAML, unknown keys, wrong types) is fatal.

use super::merge::deep_merge;
use super::types::Configuration;
use crate::error::ConfigError;
use serde_json::Value;
use std::path::Path;
use tracing::warn;

/// Merge the document at `path` over `tree`.
///
/// Returns `Ok(None)` when no file exists at the path.
pub fn merge_config_file(
    tree: &Configuration,
    path: &Path,
) -> Result<Option<Configuration>, ConfigError> {
    if !path.exists() {
        warn!(path = %path.display(), "config file not found; continuing without it");
        return Ok(None);
    }

    let load_err = |message: String| ConfigError::FileLoad {
        path: path.to_path_buf(),
        message,
    };

    let content = std::fs::read_to_string(path).map_err(|err| load_err(err.to_string()))?;
    let overlay: Value =
        serde_yaml::from_str(&content).map_err(|err| load_err(err.to_string()))?;
    let base = serde_json::to_value(tree).map_err(|err| load_err(err.to_string()))?;
    let merged = deep_merge(base, overlay);
    let config = serde_json::from_value(merged).map_err(|err| load_err(err.to_string()))?;
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::seed::default_seed;
    use crate::config::types::ConfigValue;
    use tempfile::TempDir;

    #[test]
    fn file_values_override_seed_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("miner.yaml");
        std::fs::write(&path, "axon:\n  port: 7000\nnetuid: 5\n").unwrap();

        let merged = merge_config_file(&default_seed(), &path).unwrap().unwrap();
        assert_eq!(merged.get("axon.port"), Some(ConfigValue::Int(7000)));
        assert_eq!(merged.get("netuid"), Some(ConfigValue::Int(5)));
        // Fields the file omits keep their seed values.
        assert_eq!(
            merged.get("axon.ip"),
            Some(ConfigValue::Text("0.0.0.0".to_string()))
        );
    }

    #[test]
    fn missing_file_is_skipped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.yaml");
        assert!(merge_config_file(&default_seed(), &path).unwrap().is_none());
    }

    #[test]
    fn malformed_yaml_is_fatal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.yaml");
        std::fs::write(&path, "axon: [unclosed\n").unwrap();
        assert!(matches!(
            merge_config_file(&default_seed(), &path),
            Err(ConfigError::FileLoad { .. })
        ));
    }

    #[test]
    fn unknown_keys_in_file_are_fatal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("extra.yaml");
        std::fs::write(&path, "axon:\n  warp_drive: true\n").unwrap();
        assert!(matches!(
            merge_config_file(&default_seed(), &path),
            Err(ConfigError::FileLoad { .. })
        ));
    }

    #[test]
    fn empty_file_contributes_nothing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.yaml");
        std::fs::write(&path, "").unwrap();
        let seed = default_seed();
        let merged = merge_config_file(&seed, &path).unwrap().unwrap();
        assert_eq!(merged, seed);
    }
}
