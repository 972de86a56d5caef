use anyhow::{bail, Context, Result};
use common::GameSummary;
use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Turns an open recorded-game file into a [`GameSummary`].
///
/// The binary format itself is not handled here; implementations delegate to a real decoder.
pub trait ReplayDecoder {
    fn decode(&self, replay: File) -> Result<GameSummary>;
}

/// Open `path` and run it through `decoder`. The file is closed before returning.
pub fn decode_replay<D: ReplayDecoder + ?Sized>(decoder: &D, path: &Path) -> Result<GameSummary> {
    let file =
        File::open(path).with_context(|| format!("Failed to open replay file: {:?}", path))?;
    let summary = decoder.decode(file);
    if let Err(e) = &summary {
        warn!("Failed to decode {:?}: {:#}", path, e);
    }
    summary
}

/// Runs an external program with the replay on stdin and reads a JSON summary from stdout:
///
/// ```json
/// {"players": [{"number": 1, "name": "Viper", "color_id": 0}],
///  "chat": [{"player_number": 1, "timestamp": 65000, "message": "gl hf"}],
///  "duration": 2400000}
/// ```
#[derive(Debug, Clone)]
pub struct CommandDecoder {
    program: String,
    args: Vec<String>,
}

impl CommandDecoder {
    pub fn new(command: &[String]) -> Result<Self> {
        let (program, args) = command
            .split_first()
            .context("Replay decoder command is empty")?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl ReplayDecoder for CommandDecoder {
    fn decode(&self, replay: File) -> Result<GameSummary> {
        debug!("Running {} {:?}", self.program, self.args);
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::from(replay))
            .output()
            .with_context(|| format!("Failed to run replay decoder {:?}", self.program))?;

        if !output.status.success() {
            bail!(
                "Replay decoder {:?} failed ({}): {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        serde_json::from_slice(&output.stdout).context("Failed to parse replay decoder output")
    }
}
