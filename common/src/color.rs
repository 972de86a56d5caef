use std::fmt;

/// Resets all terminal attributes
pub const ANSI_RESET: &str = "\x1b[0m";

/// In-match player color, as assigned by the lobby. Distinct from team and player number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerColor {
    Blue,
    Red,
    Green,
    Yellow,
    Teal,
    Purple,
    Gray,
    Orange,
    Unknown,
}

/// Color by `color_id` as stored in the replay
const COLOR_BY_ID: [PlayerColor; 8] = [
    PlayerColor::Blue,
    PlayerColor::Red,
    PlayerColor::Green,
    PlayerColor::Yellow,
    PlayerColor::Teal,
    PlayerColor::Purple,
    PlayerColor::Gray,
    PlayerColor::Orange,
];

// Indexed by discriminant.
const NAMES: [&str; 9] = [
    "Blue", "Red", "Green", "Yellow", "Teal", "Purple", "Gray", "Orange", "Unknown",
];

// Orange has no 16-color slot; dark yellow is the closest.
const ANSI: [&str; 9] = [
    "\x1b[94m", "\x1b[91m", "\x1b[92m", "\x1b[93m", "\x1b[96m", "\x1b[95m", "\x1b[90m", "\x1b[33m",
    ANSI_RESET,
];

impl PlayerColor {
    /// Look up a replay color id. Anything outside 0-7 (or missing) is `Unknown`.
    pub fn from_id(color_id: Option<i64>) -> Self {
        color_id
            .and_then(|id| usize::try_from(id).ok())
            .and_then(|id| COLOR_BY_ID.get(id).copied())
            .unwrap_or(PlayerColor::Unknown)
    }

    pub fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Escape sequence that switches the foreground to this color
    pub fn ansi(self) -> &'static str {
        ANSI[self as usize]
    }

    /// Wrap `text` in this color, followed by a reset
    pub fn paint(self, text: &str) -> String {
        format!("{}{}{}", self.ansi(), text, ANSI_RESET)
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
