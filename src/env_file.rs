//! Materializer: flattens the resolved tree into `KEY=VALUE` lines.
//!
//! Every resolved scalar becomes one `section_field=value` line, followed by
//! a fixed supplementary block of operational defaults (retry/telemetry
//! settings) that are not sourced from operator input and cannot be
//! overridden through this pathway.

use crate::config::Configuration;
use crate::error::ConfigError;
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Operational environment lines appended verbatim after the resolved
/// fields. None of these names collides with a `section_field` key.
pub const SUPPLEMENTARY_ENV: &[&str] = &[
    "BT_PRIORITY_MAXSIZE=5000",
    "NEURON_DEVICE=cuda:0",
    "NEURON_EPOCH_LENGTH=100",
    "NEURON_EVENTS_RETENTION_SIZE=2147483648",
    "NEURON_DONT_SAVE_EVENTS=False",
    "NEURON_NAME=miner",
    "NEURON_TIMEOUT=10",
    "NEURON_NUM_CONCURRENT_FORWARDS=1",
    "NEURON_SAMPLE_SIZE=50",
    "NEURON_DISABLE_SET_WEIGHTS=False",
    "NEURON_MOVING_AVERAGE_ALPHA=0.1",
    "NEURON_AXON_OFF=False",
    "NEURON_VPERMIT_TAO_LIMIT=4096",
    "MOCK=False",
    "WANDB_OFF=True",
    "WANDB_OFFLINE=False",
    "WANDB_NOTES=",
    "WANDB_PROJECT_NAME=template-miners",
    "WANDB_ENTITY=opentensor-dev",
    "BLACKLIST_FORCE_VALIDATOR_PERMIT=False",
    "BLACKLIST_ALLOW_NON_REGISTERED=False",
];

/// Flatten the resolved tree into environment lines: one per resolved
/// scalar field (section-prefixed), then the supplementary block.
pub fn flatten(config: &Configuration) -> Vec<String> {
    let mut lines = Vec::new();
    if let Ok(Value::Object(sections)) = serde_json::to_value(config) {
        for (key, value) in sections {
            match value {
                Value::Object(fields) => {
                    for (field, scalar) in fields {
                        if let Some(rendered) = render(&scalar) {
                            lines.push(format!("{}_{}={}", key, field, rendered));
                        }
                    }
                }
                scalar => {
                    if let Some(rendered) = render(&scalar) {
                        lines.push(format!("{}={}", key, rendered));
                    }
                }
            }
        }
    }
    lines.extend(SUPPLEMENTARY_ENV.iter().map(|line| line.to_string()));
    lines
}

/// Render a scalar in the artifact's literal style. Booleans use
/// `True`/`False` to match the supplementary block and its consumers.
fn render(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        _ => None,
    }
}

/// Write the flattened lines to a flat text artifact.
pub fn write_env_file(config: &Configuration, path: &Path) -> Result<(), ConfigError> {
    let mut content = flatten(config).join("\n");
    content.push('\n');
    std::fs::write(path, content)?;
    info!(path = %path.display(), "wrote environment file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_seed;
    use std::collections::BTreeSet;

    #[test]
    fn one_line_per_resolved_scalar_plus_supplementary_block() {
        let config = default_seed();
        let lines = flatten(&config);

        // 21 section fields + 4 top-level scalars + the fixed block.
        assert_eq!(lines.len(), 25 + SUPPLEMENTARY_ENV.len());
        assert!(lines.iter().any(|l| l == "axon_port=8080"));
        assert!(lines.iter().any(|l| l == "netuid=197"));
        assert!(lines.iter().any(|l| l == "miner_no_serve=False"));
        assert!(lines.iter().any(|l| l == "WANDB_OFF=True"));
    }

    #[test]
    fn no_duplicate_keys() {
        let lines = flatten(&default_seed());
        let keys: BTreeSet<&str> = lines
            .iter()
            .map(|line| line.split_once('=').map(|(k, _)| k).unwrap_or(line))
            .collect();
        assert_eq!(keys.len(), lines.len());
    }

    #[test]
    fn unset_fields_are_omitted() {
        let mut config = Configuration::default();
        config.set("axon.port", "8080").unwrap();
        let lines = flatten(&config);
        assert!(lines.iter().any(|l| l == "axon_port=8080"));
        assert!(!lines.iter().any(|l| l.starts_with("axon_ip=")));
        assert!(!lines.iter().any(|l| l.starts_with("wallet_")));
    }

    #[test]
    fn write_produces_trailing_newline() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(".env");
        write_env_file(&default_seed(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
        assert_eq!(content.lines().count(), flatten(&default_seed()).len());
    }
}
