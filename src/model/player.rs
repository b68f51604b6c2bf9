use serde::{Deserialize, Serialize};

use crate::model::course::TeeColor;
use crate::model::types::SlugId;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlayerClass {
    A,
    B,
    C,
    Senior,
}

impl PlayerClass {
    /// The fixed set of competition classes, in standings order.
    pub const ALL: [PlayerClass; 4] = [
        PlayerClass::A,
        PlayerClass::B,
        PlayerClass::C,
        PlayerClass::Senior,
    ];
}

impl std::fmt::Display for PlayerClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PlayerClass::A => "A",
            PlayerClass::B => "B",
            PlayerClass::C => "C",
            PlayerClass::Senior => "Senior",
        };
        write!(f, "{s}")
    }
}

/// Tournament roster entry. Classification and course handicap are fixed
/// at registration for the chosen tee and do not drift during a round.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Player {
    pub id: SlugId,
    pub name: String,
    pub handicap_index: f64,
    pub course_handicap: i32,
    pub class: PlayerClass,
    pub tee: TeeColor,
    pub is_member: bool,
    pub plays_skins: bool,
    pub plays_corners: bool,
}
