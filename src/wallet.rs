//! Wallet hotkey file reader.
//!
//! Hotkeys live at `<wallet_path>/<wallet_name>/hotkeys/<hotkey_name>` as a
//! JSON document with `publicKey`, `privateKey`, and `ss58Address` fields.
//! The resolver only loads the triple; it never validates or uses the key
//! material itself.

use crate::config::Configuration;
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// A loaded keypair: public key, private key, and chain address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypair {
    pub public_key: String,
    pub private_key: String,
    pub ss58_address: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HotkeyFile {
    public_key: String,
    private_key: String,
    ss58_address: String,
}

/// Path of a hotkey file within a wallet directory.
pub fn hotkey_path(wallet_path: &Path, wallet_name: &str, hotkey_name: &str) -> PathBuf {
    wallet_path
        .join(wallet_name)
        .join("hotkeys")
        .join(hotkey_name)
}

/// Load the keypair for `(wallet_name, hotkey_name)`.
///
/// Absence or malformed content is a fatal read error.
pub fn load_hotkey(
    wallet_path: &Path,
    wallet_name: &str,
    hotkey_name: &str,
) -> Result<Keypair, ConfigError> {
    let path = hotkey_path(wallet_path, wallet_name, hotkey_name);
    let read_err = |message: String| ConfigError::WalletKey {
        path: path.clone(),
        message,
    };

    let content = std::fs::read_to_string(&path).map_err(|err| read_err(err.to_string()))?;
    let file: HotkeyFile =
        serde_json::from_str(&content).map_err(|err| read_err(err.to_string()))?;
    Ok(Keypair {
        public_key: file.public_key,
        private_key: file.private_key,
        ss58_address: file.ss58_address,
    })
}

/// Load the keypair named by a resolved configuration's wallet section.
pub fn load_from_config(config: &Configuration) -> Result<Keypair, ConfigError> {
    let wallet = config.wallet.as_ref().ok_or(ConfigError::Missing("wallet"))?;
    let path = wallet
        .path
        .as_deref()
        .ok_or(ConfigError::Missing("wallet.path"))?;
    let name = wallet
        .name
        .as_deref()
        .ok_or(ConfigError::Missing("wallet.name"))?;
    let hotkey = wallet
        .hotkey
        .as_deref()
        .ok_or(ConfigError::Missing("wallet.hotkey"))?;
    load_hotkey(Path::new(path), name, hotkey)
}
