//! Command-line collector: one dotted-path flag per declared field.
//!
//! Each flag defaults to its derived environment variable, so `--axon.port`
//! falls back to `axon_port` when absent from the command line. Parsing runs
//! in one of two policies:
//!
//! - *lenient*: unrecognized flags are partitioned out before clap sees
//!   them; a bare `--name` naming a declared boolean field is promoted to a
//!   `True` switch, anything else is logged and ignored.
//! - *strict*: clap parses the raw argument list and any unrecognized flag
//!   or missing value is a hard parse failure.

use super::path::parse_bool;
use super::types::{DECLARED_FIELDS, FieldKind, declared_field};
use crate::error::ConfigError;
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, Command, error::ErrorKind};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// Argument id for the optional configuration file path.
pub const CONFIG_FILE_ARG: &str = "config";

/// Parsing policy for a pass over the argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    Lenient,
    Strict,
}

/// Flat record produced by one parse pass.
///
/// `values` holds every field that received a value from any source;
/// `explicit` the subset supplied on the command line or through an
/// environment variable (as opposed to a built-in default).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub values: BTreeMap<String, String>,
    pub explicit: BTreeSet<String>,
}

impl ParsedArgs {
    /// Raw value for a declared path, if any source provided one.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.values.get(path).map(String::as_str)
    }

    /// Boolean coercion of a path's raw value; absent reads as false.
    pub fn flag(&self, path: &str) -> bool {
        self.get(path).is_some_and(parse_bool)
    }
}

fn build_command() -> Command {
    let mut cmd = Command::new("miner-config")
        .about("Resolve miner configuration from prompts, environment, file, and flags")
        .no_binary_name(true)
        .arg(
            Arg::new(CONFIG_FILE_ARG)
                .long("config")
                .value_name("PATH")
                .action(ArgAction::Set)
                .help("YAML configuration file merged over the seed values"),
        );
    for spec in DECLARED_FIELDS {
        cmd = cmd.arg(
            Arg::new(spec.path)
                .long(spec.path)
                .env(spec.env)
                .value_name(match spec.kind {
                    FieldKind::Text => "STRING",
                    FieldKind::Int => "INT",
                    FieldKind::Bool => "BOOL",
                })
                .action(ArgAction::Set)
                .help(spec.help),
        );
    }
    cmd
}

/// Parse one pass over `argv` (the argument list without the binary name).
pub fn parse(argv: &[String], mode: ParseMode) -> Result<ParsedArgs, ConfigError> {
    let (clap_argv, promotions) = match mode {
        ParseMode::Strict => (argv.to_vec(), Vec::new()),
        ParseMode::Lenient => partition_recognized(argv),
    };

    let matches = match build_command().try_get_matches_from(&clap_argv) {
        Ok(matches) => matches,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => return Err(ConfigError::Parse(err.to_string())),
    };

    let mut parsed = ParsedArgs::default();
    let ids = DECLARED_FIELDS
        .iter()
        .map(|spec| spec.path)
        .chain([CONFIG_FILE_ARG]);
    for id in ids {
        if let Some(value) = matches.get_one::<String>(id) {
            parsed.values.insert(id.to_string(), value.clone());
            if matches!(
                matches.value_source(id),
                Some(ValueSource::CommandLine | ValueSource::EnvVariable)
            ) {
                parsed.explicit.insert(id.to_string());
            }
        }
    }

    for name in promotions {
        match declared_field(&name).map(|spec| spec.kind) {
            // A bare flag naming a declared boolean field acts as a switch.
            Some(FieldKind::Bool) => {
                parsed.values.insert(name.clone(), "True".to_string());
                parsed.explicit.insert(name);
            }
            Some(_) => warn!(flag = %name, "ignoring bare flag for non-boolean field"),
            None => debug!(flag = %name, "ignoring unrecognized flag"),
        }
    }

    Ok(parsed)
}

/// Split `argv` into the tokens clap should see and the bare flag names it
/// should not. A `--name value` pair is recognized only when `name` is
/// declared; a `--name` with no following value is always pulled out as a
/// promotion candidate, even for declared fields.
fn partition_recognized(argv: &[String]) -> (Vec<String>, Vec<String>) {
    let declared: BTreeSet<&str> = DECLARED_FIELDS
        .iter()
        .map(|spec| spec.path)
        .chain([CONFIG_FILE_ARG])
        .collect();

    let mut recognized = Vec::new();
    let mut bare = Vec::new();
    let mut i = 0;
    while i < argv.len() {
        let token = &argv[i];
        if let Some(body) = token.strip_prefix("--") {
            if let Some((name, _)) = body.split_once('=') {
                // Unrecognized --name=value flags are dropped entirely.
                if declared.contains(name) {
                    recognized.push(token.clone());
                }
            } else if body == "help" {
                recognized.push(token.clone());
            } else {
                let has_value = argv
                    .get(i + 1)
                    .is_some_and(|next| !next.starts_with("--"));
                if declared.contains(body) && has_value {
                    recognized.push(token.clone());
                    recognized.push(argv[i + 1].clone());
                    i += 2;
                    continue;
                }
                bare.push(body.to_string());
            }
        }
        // Stray positional tokens are ignored in lenient mode.
        i += 1;
    }
    (recognized, bare)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn lenient_collects_declared_values() {
        let parsed = parse(
            &argv(&["--axon.port", "9999", "--wallet.name", "miner1"]),
            ParseMode::Lenient,
        )
        .unwrap();
        assert_eq!(parsed.get("axon.port"), Some("9999"));
        assert_eq!(parsed.get("wallet.name"), Some("miner1"));
        assert!(parsed.explicit.contains("axon.port"));
        assert!(parsed.explicit.contains("wallet.name"));
    }

    #[test]
    fn equals_syntax_is_recognized() {
        let parsed = parse(&argv(&["--netuid=197"]), ParseMode::Lenient).unwrap();
        assert_eq!(parsed.get("netuid"), Some("197"));
    }

    #[test]
    fn bare_boolean_flag_is_promoted_leniently() {
        let parsed = parse(&argv(&["--no_prompt"]), ParseMode::Lenient).unwrap();
        assert_eq!(parsed.get("no_prompt"), Some("True"));
        assert!(parsed.explicit.contains("no_prompt"));
        assert!(parsed.flag("no_prompt"));
    }

    #[test]
    fn bare_boolean_flag_fails_strictly() {
        let err = parse(&argv(&["--no_prompt"]), ParseMode::Strict).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_flag_is_ignored_leniently_but_fatal_strictly() {
        let lenient = parse(
            &argv(&["--bogus.flag", "x", "--axon.port", "8000"]),
            ParseMode::Lenient,
        )
        .unwrap();
        assert_eq!(lenient.get("axon.port"), Some("8000"));
        assert_eq!(lenient.get("bogus.flag"), None);

        let strict = parse(&argv(&["--bogus.flag", "x"]), ParseMode::Strict);
        assert!(matches!(strict, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn bare_flag_on_text_field_is_not_promoted() {
        let parsed = parse(&argv(&["--wallet.name"]), ParseMode::Lenient).unwrap();
        assert_eq!(parsed.get("wallet.name"), None);
    }

    #[test]
    fn environment_values_count_as_explicit() {
        // SAFETY: test-local variable name; no other test reads it.
        unsafe { std::env::set_var("miner_full_path", "/tmp/miner-state") };
        let parsed = parse(&[], ParseMode::Lenient).unwrap();
        assert_eq!(parsed.get("miner.full_path"), Some("/tmp/miner-state"));
        assert!(parsed.explicit.contains("miner.full_path"));
        unsafe { std::env::remove_var("miner_full_path") };
    }

    #[test]
    fn config_file_path_is_discovered() {
        let parsed = parse(
            &argv(&["--config", "miner.yaml", "--strict", "true"]),
            ParseMode::Lenient,
        )
        .unwrap();
        assert_eq!(parsed.get(CONFIG_FILE_ARG), Some("miner.yaml"));
        assert!(parsed.flag("strict"));
    }
}
