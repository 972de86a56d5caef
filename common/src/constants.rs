/// File extension of recorded games written by the game client
pub const REPLAY_EXTENSION: &str = "aoe2record";

/// Ratio between the in-game clock and wall-clock time at "normal" game speed
pub const GAME_SPEED: f64 = 1.7;

/// Name of the folder inside a profile directory that holds recorded games
pub const SAVEGAME_DIR: &str = "savegame";

/// Profile directories are all-digit names strictly longer than this
pub const MIN_PROFILE_ID_LEN: usize = 5;

/// Game folder below the user's home directory
pub const DEFAULT_GAME_DIR: &str = "Games/Age of Empires 2 DE";

pub const UNKNOWN_DATE: &str = "Unknown date";
pub const UNKNOWN_TIME: &str = "Unknown time";
pub const UNKNOWN_DURATION: &str = "Unknown duration";
pub const UNKNOWN_PLAYER: &str = "Unknown";

/// Printed in place of the chat block when nobody said anything
pub const NO_CHAT_LINE: &str = "Only boring people in this game, there was no chat";
