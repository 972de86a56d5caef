use anyhow::{Context, Result};
use common::DEFAULT_GAME_DIR;
use std::env;
use std::path::PathBuf;

pub const BASE_DIR_VAR: &str = "AOE2CHAT_BASE_DIR";
pub const PROFILE_ID_VAR: &str = "AOE2CHAT_PROFILE_ID";
pub const DECODER_VAR: &str = "AOE2CHAT_DECODER";

/// Bridge to the `mgz` replay library, shipped next to this crate
pub const BRIDGE_SCRIPT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tools/mgz_summary.py");

#[cfg(windows)]
const PYTHON: &str = "python";
#[cfg(not(windows))]
const PYTHON: &str = "python3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding one folder per profile id
    pub base_dir: PathBuf,
    /// Skips profile auto-detection when set
    pub profile_id: Option<String>,
    /// Program and arguments of the external replay decoder
    pub decoder_command: Vec<String>,
}

impl Config {
    /// Build the configuration from the environment (and `.env` if present).
    /// The first positional argument, when given, overrides the base directory.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::resolve(env::args().nth(1), |name| env::var(name).ok())
    }

    /// Resolve the configuration from a positional argument and a variable lookup.
    /// Blank values count as unset.
    pub fn resolve<F>(base_dir_arg: Option<String>, var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let base_dir = match non_empty(base_dir_arg).or_else(|| non_empty(var(BASE_DIR_VAR))) {
            Some(dir) => PathBuf::from(dir),
            None => {
                let home = non_empty(var("HOME"))
                    .or_else(|| non_empty(var("USERPROFILE")))
                    .with_context(|| {
                        format!("Cannot determine home directory, set {} instead", BASE_DIR_VAR)
                    })?;
                PathBuf::from(home).join(DEFAULT_GAME_DIR)
            }
        };

        let profile_id = non_empty(var(PROFILE_ID_VAR));

        let decoder_command = match non_empty(var(DECODER_VAR)) {
            Some(line) => parse_command(&line),
            None => default_decoder(),
        };

        Ok(Self {
            base_dir,
            profile_id,
            decoder_command,
        })
    }
}

/// Runs the bundled `mgz` bridge script
pub fn default_decoder() -> Vec<String> {
    vec![PYTHON.to_string(), BRIDGE_SCRIPT.to_string()]
}

/// Split a command line on whitespace. No quoting support.
pub fn parse_command(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}
