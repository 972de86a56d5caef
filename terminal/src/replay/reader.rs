use super::*;
use anyhow::{Context, Result};
use common::REPLAY_EXTENSION;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub struct ReplayReader;

impl ReplayReader {
    /// All recorded games directly inside `dir`, newest first
    pub fn list_replays(dir: &Path) -> Result<Vec<ReplayFile>> {
        let mut replays = Vec::new();

        for entry in
            fs::read_dir(dir).with_context(|| format!("Failed to read replay directory: {:?}", dir))?
        {
            let entry = entry?;
            let path = entry.path();

            if path.extension() != Some(OsStr::new(REPLAY_EXTENSION)) {
                continue;
            }

            let metadata = match fs::metadata(&path) {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!("Skipping {:?}: {}", path, e);
                    continue;
                }
            };
            if !metadata.is_file() {
                continue;
            }

            let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            replays.push(ReplayFile { path, modified });
        }

        // Stable, so equal timestamps keep directory order
        replays.sort_by(|a, b| b.modified.cmp(&a.modified));

        Ok(replays)
    }

    /// Split the replays in `dir` into the ones written on `today` and all older ones
    pub fn list_by_day(dir: &Path, today: NaiveDate) -> Result<ReplayListing> {
        let (today_replays, previous): (Vec<_>, Vec<_>) = Self::list_replays(dir)?
            .into_iter()
            .partition(|replay| replay.modified_date() == today);

        debug!(
            "Found {} replays from today and {} older ones in {:?}",
            today_replays.len(),
            previous.len(),
            dir
        );

        Ok(ReplayListing {
            today: today_replays,
            previous,
        })
    }
}
