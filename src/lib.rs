//! Layered configuration resolver for Bittensor miner processes.
//!
//! Resolves one strongly-typed nested configuration from four sources --
//! interactive prompts, environment variables, a YAML file, and the command
//! line -- with the command line taking precedence, then materializes the
//! result as a `.env` artifact.

pub mod config;
pub mod env_file;
pub mod error;
pub mod wallet;
