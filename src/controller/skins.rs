use std::collections::HashMap;

use crate::model::{HOLES_PER_ROUND, Player, PlayerRound, SkinResult, SkinWinner, SlugId};

/// One player's stake in a hole's skin: their score (if entered) and
/// whether they bought into the skins game.
#[derive(Clone, Debug)]
pub struct SkinEntry {
    pub player_id: SlugId,
    pub player_name: String,
    pub score: Option<i32>,
    pub in_skins: bool,
}

/// Award the skin for one hole: lowest score among enrolled players with
/// a score entered takes 1.0 point, split evenly across ties. No
/// secondary tiebreaker, and no carry-over between holes.
#[must_use]
pub fn skin_for_hole(hole_number: i32, entries: &[SkinEntry]) -> SkinResult {
    let contenders: Vec<&SkinEntry> = entries
        .iter()
        .filter(|e| e.in_skins && e.score.is_some())
        .collect();

    let Some(min_score) = contenders.iter().filter_map(|e| e.score).min() else {
        // Nobody holed out here yet: a push, zero points awarded.
        return SkinResult {
            hole: hole_number,
            winners: Vec::new(),
            pushes: None,
        };
    };

    let winners: Vec<&SkinEntry> = contenders
        .into_iter()
        .filter(|e| e.score == Some(min_score))
        .collect();
    let skin_points = 1.0 / winners.len() as f64;

    SkinResult {
        hole: hole_number,
        winners: winners
            .into_iter()
            .map(|e| SkinWinner {
                player_id: e.player_id.clone(),
                player_name: e.player_name.clone(),
                score: min_score,
                skin_points,
            })
            .collect(),
        pushes: None,
    }
}

/// Skins for all 18 holes, played off net scores.
#[must_use]
pub fn skins_for_round(players: &[Player], rounds: &[PlayerRound]) -> Vec<SkinResult> {
    let rounds_by_player: HashMap<&SlugId, &PlayerRound> =
        rounds.iter().map(|r| (&r.player_id, r)).collect();

    (1..=HOLES_PER_ROUND as i32)
        .map(|hole_number| {
            let entries: Vec<SkinEntry> = players
                .iter()
                .map(|p| SkinEntry {
                    player_id: p.id.clone(),
                    player_name: p.name.clone(),
                    score: rounds_by_player
                        .get(&p.id)
                        .and_then(|r| r.holes.iter().find(|h| h.hole_number == hole_number))
                        .and_then(|h| h.net),
                    in_skins: p.plays_skins,
                })
                .collect();
            skin_for_hole(hole_number, &entries)
        })
        .collect()
}
