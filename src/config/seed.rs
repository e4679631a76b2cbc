//! Interactive/environment seed collector.
//!
//! Produces the fully-populated configuration tree that sits beneath every
//! later override: first an interactive y/n offer, then either field-by-field
//! prompts (default shown in brackets) or environment variables with literal
//! fallback defaults. Either way, every declared field ends up set.

use super::types::{Configuration, DECLARED_FIELDS};
use crate::error::ConfigError;
use dialoguer::{Confirm, Input};
use std::path::PathBuf;

/// The documented fallback defaults, fully populated.
///
/// Directory defaults hang off the operator's home directory when one can
/// be determined, mirroring where wallets and miner state live on disk.
pub fn default_seed() -> Configuration {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let bittensor = home.join(".bittensor");

    let mut config = Configuration::default();
    let defaults: &[(&str, String)] = &[
        ("axon.port", "8080".to_string()),
        ("axon.ip", "0.0.0.0".to_string()),
        ("axon.external_ip", "0.0.0.0".to_string()),
        ("axon.external_port", "8080".to_string()),
        ("axon.max_workers", "10".to_string()),
        ("wallet.name", "default".to_string()),
        ("wallet.hotkey", "default".to_string()),
        ("wallet.path", bittensor.join("wallets").display().to_string()),
        ("subtensor.network", "test".to_string()),
        (
            "subtensor.chain_endpoint",
            "wss://test.finney.opentensor.ai:443".to_string(),
        ),
        ("miner.root", bittensor.join("miners").display().to_string()),
        ("miner.name", "miner".to_string()),
        ("miner.blocks_per_epoch", "100".to_string()),
        ("miner.no_serve", "False".to_string()),
        ("miner.no_start_axon", "False".to_string()),
        ("miner.mock_subtensor", "False".to_string()),
        (
            "miner.full_path",
            bittensor.join("miners").join("default").display().to_string(),
        ),
        ("logging.debug", "True".to_string()),
        ("logging.trace", "False".to_string()),
        ("logging.record_log", "True".to_string()),
        (
            "logging.logging_dir",
            bittensor.join("logs").display().to_string(),
        ),
        ("netuid", "197".to_string()),
        ("no_prompt", "False".to_string()),
        ("strict", "False".to_string()),
        ("no_version_checking", "False".to_string()),
    ];
    for (path, raw) in defaults {
        // Paths and literals above are declared and well-typed.
        config
            .set(path, raw)
            .unwrap_or_else(|_| unreachable!("default for declared path {}", path));
    }
    config
}

/// Collect the seed tree.
///
/// Offers the interactive setup unless `no_prompt` is set; a declined offer
/// (or `no_prompt`) falls back to the environment collector.
pub fn collect(no_prompt: bool) -> Result<Configuration, ConfigError> {
    if no_prompt {
        return seed_from_env();
    }
    let configure = Confirm::new()
        .with_prompt("Set up miner configuration interactively?")
        .default(false)
        .interact()
        .map_err(|err| ConfigError::Prompt(err.to_string()))?;
    if configure {
        seed_interactive()
    } else {
        seed_from_env()
    }
}

/// Prompt the operator for every declared field, showing the documented
/// default in brackets. Answers are coerced to the field's declared type;
/// a bad answer is a fatal coercion error, not a silent fallback.
pub fn seed_interactive() -> Result<Configuration, ConfigError> {
    let defaults = default_seed();
    let mut config = Configuration::default();
    for spec in DECLARED_FIELDS {
        let shown = defaults
            .get(spec.path)
            .map(|value| value.to_string())
            .unwrap_or_default();
        let answer: String = Input::new()
            .with_prompt(format!("{} ({})", spec.path, spec.help))
            .default(shown)
            .interact_text()
            .map_err(|err| ConfigError::Prompt(err.to_string()))?;
        config.set(spec.path, &answer)?;
    }
    Ok(config)
}

/// Read every declared field from its environment variable, falling back to
/// the documented default when the variable is absent. A variable holding an
/// untypeable value is a fatal coercion error.
pub fn seed_from_env() -> Result<Configuration, ConfigError> {
    seed_from_env_with(|name| std::env::var(name).ok())
}

/// Environment collector with an injectable lookup, for tests.
pub fn seed_from_env_with(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Configuration, ConfigError> {
    let mut config = default_seed();
    for spec in DECLARED_FIELDS {
        if let Some(raw) = lookup(spec.env) {
            config.set(spec.path, &raw)?;
        }
    }
    Ok(config)
}
