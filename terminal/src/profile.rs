use common::{MIN_PROFILE_ID_LEN, SAVEGAME_DIR};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Could not find any profile directory in {0:?}")]
    NoProfile(PathBuf),
    #[error("No valid savegame folders found in profiles under {0:?}. Set AOE2CHAT_PROFILE_ID manually.")]
    NoSavegame(PathBuf),
    #[error("Failed to read profile base directory {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The profile whose recorded games are shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub save_dir: PathBuf,
}

impl Profile {
    fn new(base_dir: &Path, id: String) -> Self {
        let save_dir = base_dir.join(&id).join(SAVEGAME_DIR);
        Self { id, save_dir }
    }
}

/// Profile ids are long all-digit folder names
pub fn looks_like_profile_id(name: &str) -> bool {
    name.len() > MIN_PROFILE_ID_LEN && name.bytes().all(|b| b.is_ascii_digit())
}

/// Pick the profile to read replays from.
///
/// An explicit `profile_id` is taken as-is; whether its folder exists is left to whoever reads it.
/// Otherwise the single profile-looking folder under `base_dir` is used, or, when there are
/// several, the one whose `savegame` folder was modified last.
pub fn locate_profile(base_dir: &Path, profile_id: Option<&str>) -> Result<Profile, ProfileError> {
    if let Some(id) = profile_id {
        info!("Using configured profile {}", id);
        return Ok(Profile::new(base_dir, id.to_string()));
    }

    let mut candidates = profile_candidates(base_dir)?;
    debug!("Found {} profile candidates in {:?}", candidates.len(), base_dir);

    match candidates.len() {
        0 => Err(ProfileError::NoProfile(base_dir.to_path_buf())),
        1 => {
            let id = candidates.remove(0);
            info!("Using profile {}", id);
            Ok(Profile::new(base_dir, id))
        }
        _ => {
            let mut newest: Option<(String, SystemTime)> = None;
            for id in candidates {
                let savegame = base_dir.join(&id).join(SAVEGAME_DIR);
                let modified = match fs::metadata(&savegame).and_then(|m| m.modified()) {
                    Ok(modified) => modified,
                    Err(e) => {
                        debug!("Skipping profile {}: {}", id, e);
                        continue;
                    }
                };
                if newest.as_ref().map_or(true, |(_, t)| modified > *t) {
                    newest = Some((id, modified));
                }
            }

            match newest {
                Some((id, _)) => {
                    info!("Using most recently active profile {}", id);
                    Ok(Profile::new(base_dir, id))
                }
                None => {
                    warn!("None of the profiles in {:?} has a savegame folder", base_dir);
                    Err(ProfileError::NoSavegame(base_dir.to_path_buf()))
                }
            }
        }
    }
}

fn profile_candidates(base_dir: &Path) -> Result<Vec<String>, ProfileError> {
    let unreadable = |source: io::Error| ProfileError::Unreadable {
        path: base_dir.to_path_buf(),
        source,
    };

    let mut candidates = Vec::new();
    for entry in fs::read_dir(base_dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        if !entry.path().is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if looks_like_profile_id(name) {
                candidates.push(name.to_string());
            }
        }
    }
    Ok(candidates)
}
