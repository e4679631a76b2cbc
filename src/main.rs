//! Miner configuration resolver binary.
//!
//! Seeds the configuration tree (interactively or from the environment),
//! resolves file and command-line overrides on top, prints the resolved
//! document, and writes the `.env` artifact for the miner process.

use anyhow::Result;
use miner_config::config::{self, ParseMode};
use miner_config::env_file;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let argv: Vec<String> = std::env::args().skip(1).collect();

    // Pre-pass: --no_prompt (or its env var) must be known before the seed
    // collector decides whether to offer interactive setup.
    let pre = config::parse(&argv, ParseMode::Lenient)?;
    let no_prompt = pre.flag("no_prompt");

    let seed = config::collect(no_prompt)?;
    let resolved = config::resolve(seed, &argv, false)?;

    println!("{}", resolved.config);

    env_file::write_env_file(&resolved.config, Path::new(".env"))?;
    info!("configuration resolved");
    Ok(())
}
