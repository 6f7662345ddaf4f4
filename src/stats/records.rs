use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The side that won a match. Absent means a draw or an unfinished match.
///
/// Persisted records store the winner as the team number (`1` or `2`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Winner {
    Team1,
    Team2,
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("winner must be team 1 or 2, got {0}")]
pub struct InvalidWinner(pub u8);

impl From<Winner> for u8 {
    fn from(winner: Winner) -> Self {
        match winner {
            Winner::Team1 => 1,
            Winner::Team2 => 2,
        }
    }
}

impl TryFrom<u8> for Winner {
    type Error = InvalidWinner;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Winner::Team1),
            2 => Ok(Winner::Team2),
            other => Err(InvalidWinner(other)),
        }
    }
}

/// How a match is scored: first to a points target, or a fixed round count.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Points,
    Rounds,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Singles,
    Doubles,
}

/// One finished match as shown on the statistics views.
///
/// Field names follow the persisted payload shape. Timestamps are Unix epoch
/// milliseconds; `duration` is in milliseconds as well.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: String,
    pub team1_name: String,
    pub team2_name: String,
    pub team1_score: u32,
    pub team2_score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team1_rounds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team2_rounds: Option<u32>,
    pub winner: Option<Winner>,
    pub game_mode: GameMode,
    pub game_type: GameType,
    pub start_time: u64,
    pub end_time: u64,
    pub duration: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_title: Option<String>,
}
