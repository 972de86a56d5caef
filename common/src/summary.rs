use serde::{Deserialize, Serialize};

use crate::PlayerColor;

/// A participant as reported by the replay decoder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub number: i64,
    pub name: String,
    #[serde(default)]
    pub color_id: Option<i64>,
}

impl Player {
    pub fn color(&self) -> PlayerColor {
        PlayerColor::from_id(self.color_id)
    }
}

/// One chat message sent during the match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEvent {
    /// Missing or null for messages not sent by a player
    #[serde(default)]
    pub player_number: Option<i64>,
    /// Milliseconds since game start, in game time
    #[serde(default)]
    pub timestamp: u64,
    pub message: String,
}

/// Everything the transcript needs from a decoded replay
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub chat: Vec<ChatEvent>,
    /// Total game duration in milliseconds of game time
    #[serde(default)]
    pub duration: Option<u64>,
}

impl GameSummary {
    /// First player carrying `number`, if any
    pub fn player(&self, number: i64) -> Option<&Player> {
        self.players.iter().find(|p| p.number == number)
    }
}
