pub mod decoder;
pub mod reader;

use chrono::{DateTime, Local, NaiveDate};
use std::path::PathBuf;
use std::time::SystemTime;

pub use decoder::{decode_replay, CommandDecoder, ReplayDecoder};
pub use reader::ReplayReader;

/// A recorded game on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayFile {
    pub path: PathBuf,
    pub modified: SystemTime,
}

impl ReplayFile {
    /// Local calendar day the file was last written
    pub fn modified_date(&self) -> NaiveDate {
        DateTime::<Local>::from(self.modified).date_naive()
    }
}

/// Replays split by whether they were written today, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayListing {
    pub today: Vec<ReplayFile>,
    pub previous: Vec<ReplayFile>,
}
