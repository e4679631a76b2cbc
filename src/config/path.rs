//! Dotted-path addressing over the configuration tree.
//!
//! Paths split on `.` down to a known section name, then switch to direct
//! field access -- there is no dynamic key creation. `set` auto-creates an
//! empty section when assigning into one that does not exist yet; `get`
//! returns `None` the moment any segment is missing or unset.

use super::types::{
    AxonConfig, ConfigValue, Configuration, LoggingConfig, MinerConfig, SubtensorConfig,
    WalletConfig,
};
use crate::error::ConfigError;
use std::str::FromStr;

/// Coerce a raw string to a boolean.
///
/// Mirrors bool-from-nonempty-string with the falsy literals the environment
/// collectors produce: empty, `0`, `false`/`False`, `none`/`None`, `off`.
pub fn parse_bool(raw: &str) -> bool {
    !matches!(
        raw.trim(),
        "" | "0" | "false" | "False" | "FALSE" | "none" | "None" | "off"
    )
}

/// Coerce a raw string to an integer of the field's native width.
pub(crate) fn parse_int<T: FromStr>(path: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Coercion {
        path: path.to_string(),
        value: raw.to_string(),
        expected: "integer",
    })
}

fn split(path: &str) -> (&str, Option<&str>) {
    match path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    }
}

impl Configuration {
    /// Read the scalar at a dotted path, or `None` if any segment along the
    /// way is missing, unset, or not declared.
    pub fn get(&self, path: &str) -> Option<ConfigValue> {
        match split(path) {
            ("axon", Some(field)) => self.axon.as_ref()?.get(field),
            ("wallet", Some(field)) => self.wallet.as_ref()?.get(field),
            ("subtensor", Some(field)) => self.subtensor.as_ref()?.get(field),
            ("miner", Some(field)) => self.miner.as_ref()?.get(field),
            ("logging", Some(field)) => self.logging.as_ref()?.get(field),
            ("netuid", None) => self.netuid.map(|v| ConfigValue::Int(i64::from(v))),
            ("no_prompt", None) => self.no_prompt.map(ConfigValue::Bool),
            ("strict", None) => self.strict.map(ConfigValue::Bool),
            ("no_version_checking", None) => self.no_version_checking.map(ConfigValue::Bool),
            _ => None,
        }
    }

    /// Coerce a raw string to the field's declared type and assign it,
    /// creating the intermediate section if needed. Unknown segments fail
    /// fast with `UnknownPath`; bad coercions with `Coercion`.
    pub fn set(&mut self, path: &str, raw: &str) -> Result<(), ConfigError> {
        match split(path) {
            ("axon", Some(field)) => self.axon.get_or_insert_default().set(path, field, raw),
            ("wallet", Some(field)) => self.wallet.get_or_insert_default().set(path, field, raw),
            ("subtensor", Some(field)) => {
                self.subtensor.get_or_insert_default().set(path, field, raw)
            }
            ("miner", Some(field)) => self.miner.get_or_insert_default().set(path, field, raw),
            ("logging", Some(field)) => self.logging.get_or_insert_default().set(path, field, raw),
            ("netuid", None) => {
                self.netuid = Some(parse_int(path, raw)?);
                Ok(())
            }
            ("no_prompt", None) => {
                self.no_prompt = Some(parse_bool(raw));
                Ok(())
            }
            ("strict", None) => {
                self.strict = Some(parse_bool(raw));
                Ok(())
            }
            ("no_version_checking", None) => {
                self.no_version_checking = Some(parse_bool(raw));
                Ok(())
            }
            _ => Err(ConfigError::UnknownPath(path.to_string())),
        }
    }
}

impl AxonConfig {
    fn get(&self, field: &str) -> Option<ConfigValue> {
        match field {
            "port" => self.port.map(|v| ConfigValue::Int(i64::from(v))),
            "ip" => self.ip.clone().map(ConfigValue::Text),
            "external_ip" => self.external_ip.clone().map(ConfigValue::Text),
            "external_port" => self.external_port.map(|v| ConfigValue::Int(i64::from(v))),
            "max_workers" => self.max_workers.map(|v| ConfigValue::Int(i64::from(v))),
            _ => None,
        }
    }

    fn set(&mut self, path: &str, field: &str, raw: &str) -> Result<(), ConfigError> {
        match field {
            "port" => self.port = Some(parse_int(path, raw)?),
            "ip" => self.ip = Some(raw.to_string()),
            "external_ip" => self.external_ip = Some(raw.to_string()),
            "external_port" => self.external_port = Some(parse_int(path, raw)?),
            "max_workers" => self.max_workers = Some(parse_int(path, raw)?),
            _ => return Err(ConfigError::UnknownPath(path.to_string())),
        }
        Ok(())
    }
}

impl WalletConfig {
    fn get(&self, field: &str) -> Option<ConfigValue> {
        match field {
            "name" => self.name.clone().map(ConfigValue::Text),
            "hotkey" => self.hotkey.clone().map(ConfigValue::Text),
            "path" => self.path.clone().map(ConfigValue::Text),
            _ => None,
        }
    }

    fn set(&mut self, path: &str, field: &str, raw: &str) -> Result<(), ConfigError> {
        match field {
            "name" => self.name = Some(raw.to_string()),
            "hotkey" => self.hotkey = Some(raw.to_string()),
            "path" => self.path = Some(raw.to_string()),
            _ => return Err(ConfigError::UnknownPath(path.to_string())),
        }
        Ok(())
    }
}

impl SubtensorConfig {
    fn get(&self, field: &str) -> Option<ConfigValue> {
        match field {
            "network" => self.network.clone().map(ConfigValue::Text),
            "chain_endpoint" => self.chain_endpoint.clone().map(ConfigValue::Text),
            _ => None,
        }
    }

    fn set(&mut self, path: &str, field: &str, raw: &str) -> Result<(), ConfigError> {
        match field {
            "network" => self.network = Some(raw.to_string()),
            "chain_endpoint" => self.chain_endpoint = Some(raw.to_string()),
            _ => return Err(ConfigError::UnknownPath(path.to_string())),
        }
        Ok(())
    }
}

impl MinerConfig {
    fn get(&self, field: &str) -> Option<ConfigValue> {
        match field {
            "root" => self.root.clone().map(ConfigValue::Text),
            "name" => self.name.clone().map(ConfigValue::Text),
            "blocks_per_epoch" => self.blocks_per_epoch.map(|v| ConfigValue::Int(i64::from(v))),
            "no_serve" => self.no_serve.map(ConfigValue::Bool),
            "no_start_axon" => self.no_start_axon.map(ConfigValue::Bool),
            "mock_subtensor" => self.mock_subtensor.map(ConfigValue::Bool),
            "full_path" => self.full_path.clone().map(ConfigValue::Text),
            _ => None,
        }
    }

    fn set(&mut self, path: &str, field: &str, raw: &str) -> Result<(), ConfigError> {
        match field {
            "root" => self.root = Some(raw.to_string()),
            "name" => self.name = Some(raw.to_string()),
            "blocks_per_epoch" => self.blocks_per_epoch = Some(parse_int(path, raw)?),
            "no_serve" => self.no_serve = Some(parse_bool(raw)),
            "no_start_axon" => self.no_start_axon = Some(parse_bool(raw)),
            "mock_subtensor" => self.mock_subtensor = Some(parse_bool(raw)),
            "full_path" => self.full_path = Some(raw.to_string()),
            _ => return Err(ConfigError::UnknownPath(path.to_string())),
        }
        Ok(())
    }
}

impl LoggingConfig {
    fn get(&self, field: &str) -> Option<ConfigValue> {
        match field {
            "debug" => self.debug.map(ConfigValue::Bool),
            "trace" => self.trace.map(ConfigValue::Bool),
            "record_log" => self.record_log.map(ConfigValue::Bool),
            "logging_dir" => self.logging_dir.clone().map(ConfigValue::Text),
            _ => None,
        }
    }

    fn set(&mut self, path: &str, field: &str, raw: &str) -> Result<(), ConfigError> {
        match field {
            "debug" => self.debug = Some(parse_bool(raw)),
            "trace" => self.trace = Some(parse_bool(raw)),
            "record_log" => self.record_log = Some(parse_bool(raw)),
            "logging_dir" => self.logging_dir = Some(raw.to_string()),
            _ => return Err(ConfigError::UnknownPath(path.to_string())),
        }
        Ok(())
    }
}
