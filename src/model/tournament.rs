use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::player::Player;
use crate::model::types::SlugId;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    Setup,
    InProgress,
    Completed,
}

impl TournamentStatus {
    /// One-way progression; `Completed` is terminal.
    #[must_use]
    pub fn advance(self) -> Self {
        match self {
            TournamentStatus::Setup => TournamentStatus::InProgress,
            TournamentStatus::InProgress | TournamentStatus::Completed => {
                TournamentStatus::Completed
            }
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoringFormat {
    StrokePlay,
    Stableford,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Tournament {
    pub id: SlugId,
    pub name: String,
    pub date: Option<NaiveDate>,
    pub course_id: Option<SlugId>,
    pub players: Vec<Player>,
    pub skins_enabled: bool,
    pub corners_enabled: bool,
    pub format: ScoringFormat,
    pub status: TournamentStatus,
}

impl Tournament {
    pub fn skins_entrants(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.plays_skins)
    }

    pub fn corners_entrants(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.plays_corners)
    }
}
