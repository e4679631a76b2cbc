//! Integration tests for the full resolution cycle.
//!
//! These exercise the engine end to end: seed tree, optional config file,
//! two-pass command-line parsing, tree splitting, and provenance tracking.

use miner_config::config::{ConfigValue, default_seed, resolve};
use miner_config::error::ConfigError;
use tempfile::TempDir;

fn argv(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

#[test]
fn cli_overrides_seed_and_marks_provenance() {
    let resolved = resolve(default_seed(), &argv(&["--axon.port", "9999"]), false).unwrap();

    assert_eq!(
        resolved.config.get("axon.port"),
        Some(ConfigValue::Int(9999))
    );
    assert!(resolved.is_set("axon.port"));

    // Untouched sibling keeps the seed value and stays unmarked.
    assert_eq!(
        resolved.config.get("axon.ip"),
        Some(ConfigValue::Text("0.0.0.0".to_string()))
    );
    assert!(!resolved.is_set("axon.ip"));
}

#[test]
fn untouched_paths_keep_seed_defaults() {
    let resolved = resolve(default_seed(), &[], false).unwrap();
    assert_eq!(resolved.config.get("netuid"), Some(ConfigValue::Int(197)));
    assert!(!resolved.is_set("netuid"));
    assert!(!resolved.is_set("wallet.name"));
}

#[test]
fn resolution_is_idempotent() {
    let args = argv(&["--axon.port", "9999", "--wallet.name", "miner1"]);
    let first = resolve(default_seed(), &args, false).unwrap();
    let second = resolve(default_seed(), &args, false).unwrap();
    assert_eq!(first, second);
}

#[test]
fn config_file_overrides_seed() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("miner.yaml");
    std::fs::write(&path, "axon:\n  port: 7000\nsubtensor:\n  network: finney\n").unwrap();

    let resolved = resolve(
        default_seed(),
        &argv(&["--config", path.to_str().unwrap()]),
        false,
    )
    .unwrap();

    assert_eq!(
        resolved.config.get("axon.port"),
        Some(ConfigValue::Int(7000))
    );
    assert_eq!(
        resolved.config.get("subtensor.network"),
        Some(ConfigValue::Text("finney".to_string()))
    );
    // File values are new defaults, not explicit settings.
    assert!(!resolved.is_set("axon.port"));
}

#[test]
fn cli_overrides_config_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("miner.yaml");
    std::fs::write(&path, "axon:\n  port: 7000\n").unwrap();

    let resolved = resolve(
        default_seed(),
        &argv(&["--config", path.to_str().unwrap(), "--axon.port", "9999"]),
        false,
    )
    .unwrap();

    assert_eq!(
        resolved.config.get("axon.port"),
        Some(ConfigValue::Int(9999))
    );
    assert!(resolved.is_set("axon.port"));
}

#[test]
fn missing_config_file_is_skipped() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.yaml");

    let resolved = resolve(
        default_seed(),
        &argv(&["--config", path.to_str().unwrap()]),
        false,
    )
    .unwrap();
    assert_eq!(
        resolved.config.get("axon.port"),
        Some(ConfigValue::Int(8080))
    );
}

#[test]
fn malformed_config_file_aborts_resolution() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.yaml");
    std::fs::write(&path, "axon: [unclosed\n").unwrap();

    let result = resolve(
        default_seed(),
        &argv(&["--config", path.to_str().unwrap()]),
        false,
    );
    assert!(matches!(result, Err(ConfigError::FileLoad { .. })));
}

#[test]
fn discovered_strict_flag_rejects_unknown_flags() {
    let result = resolve(
        default_seed(),
        &argv(&["--strict", "true", "--bogus.flag", "x"]),
        false,
    );
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn caller_strict_flag_rejects_unknown_flags() {
    let result = resolve(default_seed(), &argv(&["--bogus.flag", "x"]), true);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn lenient_mode_tolerates_unknown_flags() {
    let resolved = resolve(
        default_seed(),
        &argv(&["--bogus.flag", "x", "--axon.port", "8000"]),
        false,
    )
    .unwrap();
    assert_eq!(
        resolved.config.get("axon.port"),
        Some(ConfigValue::Int(8000))
    );
}

#[test]
fn bare_boolean_flag_promotes_through_full_cycle() {
    let resolved = resolve(default_seed(), &argv(&["--miner.no_serve"]), false).unwrap();
    assert_eq!(
        resolved.config.get("miner.no_serve"),
        Some(ConfigValue::Bool(true))
    );
    assert!(resolved.is_set("miner.no_serve"));
    assert!(resolved.is_set("miner"));
}

#[test]
fn uncoercible_cli_value_aborts_resolution() {
    let result = resolve(default_seed(), &argv(&["--netuid", "not-a-netuid"]), false);
    match result {
        Err(ConfigError::Coercion { path, .. }) => assert_eq!(path, "netuid"),
        other => panic!("expected coercion error, got {:?}", other),
    }
}
