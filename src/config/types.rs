//! Section schemas and the declared-field table.
//!
//! Every section is a closed, typed record: serde rejects unknown keys at
//! load time, and path addressing only dispatches to fields declared here.
//! A field holding `None` means "unset" -- the seed collector fills every
//! field, so a fully resolved tree has no `None` leaves.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar read back out of the configuration tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Text(String),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Text(s) => write!(f, "{}", s),
            ConfigValue::Int(n) => write!(f, "{}", n),
            ConfigValue::Bool(true) => write!(f, "True"),
            ConfigValue::Bool(false) => write!(f, "False"),
        }
    }
}

/// Declared type of a configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form string.
    Text,
    /// Integer, parsed with the field's native width.
    Int,
    /// Boolean; non-empty strings other than the falsy literals are true.
    Bool,
}

/// One declared dotted path: its environment variable, kind, and CLI help.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Dotted path, e.g. `axon.port`. Also the CLI long flag.
    pub path: &'static str,
    /// Environment variable the CLI default is sourced from (`.` -> `_`).
    pub env: &'static str,
    pub kind: FieldKind,
    pub help: &'static str,
}

/// Every dotted path the resolver recognizes.
///
/// This table is the single source of truth shared by the CLI collector,
/// the seed collectors, and the interactive prompt loop.
pub const DECLARED_FIELDS: &[FieldSpec] = &[
    FieldSpec { path: "axon.port", env: "axon_port", kind: FieldKind::Int, help: "Axon serving port" },
    FieldSpec { path: "axon.ip", env: "axon_ip", kind: FieldKind::Text, help: "Axon bind address" },
    FieldSpec { path: "axon.external_ip", env: "axon_external_ip", kind: FieldKind::Text, help: "Externally visible axon address" },
    FieldSpec { path: "axon.external_port", env: "axon_external_port", kind: FieldKind::Int, help: "Externally visible axon port" },
    FieldSpec { path: "axon.max_workers", env: "axon_max_workers", kind: FieldKind::Int, help: "Axon worker thread count" },
    FieldSpec { path: "wallet.name", env: "wallet_name", kind: FieldKind::Text, help: "Coldkey wallet name" },
    FieldSpec { path: "wallet.hotkey", env: "wallet_hotkey", kind: FieldKind::Text, help: "Hotkey name within the wallet" },
    FieldSpec { path: "wallet.path", env: "wallet_path", kind: FieldKind::Text, help: "Wallet directory" },
    FieldSpec { path: "subtensor.network", env: "subtensor_network", kind: FieldKind::Text, help: "Subtensor network (finney/test/local)" },
    FieldSpec { path: "subtensor.chain_endpoint", env: "subtensor_chain_endpoint", kind: FieldKind::Text, help: "Chain websocket endpoint" },
    FieldSpec { path: "miner.root", env: "miner_root", kind: FieldKind::Text, help: "Miner state root directory" },
    FieldSpec { path: "miner.name", env: "miner_name", kind: FieldKind::Text, help: "Miner instance name" },
    FieldSpec { path: "miner.blocks_per_epoch", env: "miner_blocks_per_epoch", kind: FieldKind::Int, help: "Blocks per epoch" },
    FieldSpec { path: "miner.no_serve", env: "miner_no_serve", kind: FieldKind::Bool, help: "Do not serve the axon to the chain" },
    FieldSpec { path: "miner.no_start_axon", env: "miner_no_start_axon", kind: FieldKind::Bool, help: "Do not start the axon server" },
    FieldSpec { path: "miner.mock_subtensor", env: "miner_mock_subtensor", kind: FieldKind::Bool, help: "Use a mock subtensor connection" },
    FieldSpec { path: "miner.full_path", env: "miner_full_path", kind: FieldKind::Text, help: "Fully qualified miner state path" },
    FieldSpec { path: "logging.debug", env: "logging_debug", kind: FieldKind::Bool, help: "Enable debug logging" },
    FieldSpec { path: "logging.trace", env: "logging_trace", kind: FieldKind::Bool, help: "Enable trace logging" },
    FieldSpec { path: "logging.record_log", env: "logging_record_log", kind: FieldKind::Bool, help: "Record logs to disk" },
    FieldSpec { path: "logging.logging_dir", env: "logging_logging_dir", kind: FieldKind::Text, help: "Log output directory" },
    FieldSpec { path: "netuid", env: "netuid", kind: FieldKind::Int, help: "Subnet netuid to register on" },
    FieldSpec { path: "no_prompt", env: "no_prompt", kind: FieldKind::Bool, help: "Skip all interactive prompts" },
    FieldSpec { path: "strict", env: "strict", kind: FieldKind::Bool, help: "Reject unrecognized command-line flags" },
    FieldSpec { path: "no_version_checking", env: "no_version_checking", kind: FieldKind::Bool, help: "Skip version compatibility checks" },
];

/// Look up the declared spec for a dotted path.
pub fn declared_field(path: &str) -> Option<&'static FieldSpec> {
    DECLARED_FIELDS.iter().find(|spec| spec.path == path)
}

/// Axon (serving endpoint) section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxonConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_workers: Option<u32>,
}

/// Wallet (key storage) section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalletConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotkey: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Subtensor (chain connection) section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubtensorConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_endpoint: Option<String>,
}

/// Miner process section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MinerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks_per_epoch: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_serve: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_start_axon: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock_subtensor: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_path: Option<String>,
}

/// Logging section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_log: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging_dir: Option<String>,
}

/// Root configuration tree: one optional instance of each section plus the
/// top-level scalars.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axon: Option<AxonConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<WalletConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtensor: Option<SubtensorConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miner: Option<MinerConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netuid: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_prompt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_version_checking: Option<bool>,
}

/// Human-readable document form for display and audit. The provenance map
/// is a separate value and never appears in this dump.
impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_yaml::to_string(self) {
            Ok(doc) => write!(f, "{}", doc),
            Err(_) => write!(f, "<unrenderable configuration>"),
        }
    }
}
