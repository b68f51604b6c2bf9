use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::player::PlayerClass;
use crate::model::types::SlugId;
use crate::model::utils::format_time_ago;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SkinWinner {
    pub player_id: SlugId,
    pub player_name: String,
    pub score: i32,
    pub skin_points: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SkinResult {
    pub hole: i32,
    /// Empty when no enrolled player has a score on the hole (a push).
    pub winners: Vec<SkinWinner>,
    /// Reserved for a carry-over rule variant; never set by this engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pushes: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CornerWinner {
    pub player_id: SlugId,
    pub player_name: String,
    pub total_score: i32,
    pub points: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CornerResult {
    pub corner_number: i32,
    pub holes: [i32; 3],
    pub winners: Vec<CornerWinner>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ClassPlacing {
    pub player_id: SlugId,
    pub player_name: String,
    pub is_member: bool,
    pub gross: i32,
    pub net: i32,
    pub to_par: i32,
    /// 1-based; equal net scores share a position, the next distinct net
    /// takes position = its index + 1.
    pub position: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ClassResults {
    pub class: PlayerClass,
    pub players: Vec<ClassPlacing>,
}

/// Consolidated side-competition points for one player.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlayerPoints {
    pub player_id: SlugId,
    pub player_name: String,
    pub total: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TournamentStats {
    pub total_players: usize,
    pub members: usize,
    pub guests: usize,
    pub class_breakdown: BTreeMap<PlayerClass, usize>,
    pub skins_entrants: usize,
    pub corners_entrants: usize,
}

/// Snapshot of every derived standing. Disposable: recomputed in full
/// from the current scorecards, never patched incrementally.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TournamentResults {
    pub tournament_id: SlugId,
    pub class_results: Vec<ClassResults>,
    pub skin_results: Vec<SkinResult>,
    pub corner_results: Vec<CornerResult>,
    pub last_updated: DateTime<Utc>,
}

impl TournamentResults {
    /// Age of this snapshot as display text, e.g. "4 minutes".
    #[must_use]
    pub fn last_updated_ago(&self, now: DateTime<Utc>) -> String {
        format_time_ago(now - self.last_updated)
    }
}
