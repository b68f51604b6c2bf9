use serde::{Deserialize, Serialize};

use crate::model::types::SlugId;

/// One line of a scorecard. `gross` stays `None` until a score is
/// entered for the hole; `net` and `stableford` are derived alongside it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HoleScore {
    pub hole_number: i32,
    pub par: i32,
    pub stroke_index: i32,
    pub gross: Option<i32>,
    pub net: Option<i32>,
    pub gets_stroke: bool,
    pub stableford: Option<i32>,
}

impl HoleScore {
    /// Name of the hole result relative to par, once scored.
    #[must_use]
    pub fn display(&self) -> Option<ScoreDisplay> {
        self.gross.map(|g| ScoreDisplay::from_i32(g - self.par))
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
    QuadrupleBogey,
}

impl ScoreDisplay {
    #[must_use]
    pub fn from_i32(i: i32) -> Self {
        match i {
            i32::MIN..=-3 => ScoreDisplay::Albatross,
            -2 => ScoreDisplay::Eagle,
            -1 => ScoreDisplay::Birdie,
            0 => ScoreDisplay::Par,
            1 => ScoreDisplay::Bogey,
            2 => ScoreDisplay::DoubleBogey,
            3 => ScoreDisplay::TripleBogey,
            _ => ScoreDisplay::QuadrupleBogey,
        }
    }
}

impl From<i32> for ScoreDisplay {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

/// A player's 18-hole scorecard for one tournament round.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlayerRound {
    pub player_id: SlugId,
    pub tournament_id: SlugId,
    pub holes: Vec<HoleScore>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreTotals {
    pub gross: i32,
    pub net: i32,
    /// Net relative to the par of holes scored so far, not all 18.
    pub to_par: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RoundSummary {
    pub front_nine: ScoreTotals,
    pub back_nine: ScoreTotals,
    pub total: ScoreTotals,
    pub stableford_total: Option<i32>,
}
