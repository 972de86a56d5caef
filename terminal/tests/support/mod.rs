#![allow(dead_code)]

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate, TimeZone};
use common::GameSummary;
use std::cell::Cell;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::SystemTime;
use terminal::app::KeyWait;
use terminal::replay::ReplayDecoder;

/// The day tests treat as "today"
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 22).unwrap()
}

/// Local wall-clock time on `date`
pub fn local_time(date: NaiveDate, hour: u32, min: u32, sec: u32) -> SystemTime {
    let naive = date.and_hms_opt(hour, min, sec).unwrap();
    SystemTime::from(Local.from_local_datetime(&naive).earliest().unwrap())
}

pub fn set_modified(path: &Path, modified: SystemTime) -> Result<()> {
    File::open(path)?.set_modified(modified)?;
    Ok(())
}

/// Write a file and backdate its modification time
pub fn write_file(dir: &Path, name: &str, contents: &str, modified: SystemTime) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents)?;
    set_modified(&path, modified)?;
    Ok(path)
}

/// Create `<base>/<id>/savegame`, optionally stamping the savegame folder
pub fn make_profile(base: &Path, id: &str, modified: Option<SystemTime>) -> Result<PathBuf> {
    let save_dir = base.join(id).join("savegame");
    fs::create_dir_all(&save_dir)?;
    if let Some(modified) = modified {
        set_modified(&save_dir, modified)?;
    }
    Ok(save_dir)
}

/// Treats the replay file itself as the decoder's JSON output.
/// Anything that is not valid JSON fails like a corrupt recording would.
pub struct JsonFileDecoder;

impl ReplayDecoder for JsonFileDecoder {
    fn decode(&self, mut replay: File) -> Result<GameSummary> {
        let mut contents = String::new();
        replay.read_to_string(&mut contents)?;
        if contents.trim() == "corrupt" {
            bail!("unsupported save version");
        }
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Counts key waits instead of touching the console
#[derive(Clone, Default)]
pub struct FakeKeys {
    pub presses: Rc<Cell<usize>>,
}

impl KeyWait for FakeKeys {
    fn wait_for_key(&mut self) -> Result<()> {
        self.presses.set(self.presses.get() + 1);
        Ok(())
    }
}

pub const CHATTY_GAME: &str = r#"{
    "players": [
        {"number": 1, "name": "Viper", "color_id": 0},
        {"number": 2, "name": "Hera", "color_id": 1}
    ],
    "chat": [
        {"player_number": 1, "timestamp": 1000, "message": "gl hf"},
        {"player_number": 2, "timestamp": 65999, "message": "gg"}
    ],
    "duration": 170000
}"#;

pub const QUIET_GAME: &str = r#"{
    "players": [{"number": 1, "name": "Viper", "color_id": 0}],
    "chat": [],
    "duration": 4200000
}"#;

pub const SYSTEM_MESSAGE_GAME: &str = r#"{
    "players": [{"number": 1, "name": "Viper", "color_id": 0}],
    "chat": [
        {"player_number": 1, "timestamp": 1000, "message": "gl hf"},
        {"player_number": null, "timestamp": 600000, "message": "Hera has left the game"}
    ],
    "duration": 170000
}"#;
