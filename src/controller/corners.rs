use std::collections::HashMap;

use crate::model::{CornerResult, CornerWinner, Player, PlayerRound, SlugId};

/// The six fixed 3-hole segments. Not configurable and not derived from
/// course data; a rule variant means substituting this table.
pub const CORNER_GROUPS: [[i32; 3]; 6] = [
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    [10, 11, 12],
    [13, 14, 15],
    [16, 17, 18],
];

/// One player's stake in the corners game: 18 per-hole gross scores
/// (index 0 = hole 1) and the enrollment flag.
#[derive(Clone, Debug)]
pub struct CornerEntry {
    pub player_id: SlugId,
    pub player_name: String,
    pub scores: Vec<Option<i32>>,
    pub in_corners: bool,
}

/// Score the corners competition. A player qualifies for a corner only
/// with all three holes entered; partial data disqualifies them for that
/// corner outright. Corners with no qualifying player are omitted.
#[must_use]
pub fn corners(entries: &[CornerEntry]) -> Vec<CornerResult> {
    let mut results = Vec::new();

    for (corner_index, holes) in CORNER_GROUPS.iter().enumerate() {
        let mut qualified: Vec<(&CornerEntry, i32)> = Vec::new();

        for entry in entries.iter().filter(|e| e.in_corners) {
            let segment: Vec<i32> = holes
                .iter()
                .filter_map(|&hole| {
                    entry.scores.get((hole - 1) as usize).copied().flatten()
                })
                .collect();

            if segment.len() == 3 {
                qualified.push((entry, segment.iter().sum()));
            }
        }

        let Some(min_total) = qualified.iter().map(|&(_, total)| total).min() else {
            continue;
        };

        let winners: Vec<(&CornerEntry, i32)> = qualified
            .into_iter()
            .filter(|&(_, total)| total == min_total)
            .collect();

        // Rule table for the point split; the two-way branch is spelled
        // out even though it matches the general 1/n case numerically.
        let points = match winners.len() {
            1 => 1.0,
            2 => 0.5,
            n => 1.0 / n as f64,
        };

        results.push(CornerResult {
            corner_number: (corner_index as i32) + 1,
            holes: *holes,
            winners: winners
                .into_iter()
                .map(|(entry, total_score)| CornerWinner {
                    player_id: entry.player_id.clone(),
                    player_name: entry.player_name.clone(),
                    total_score,
                    points,
                })
                .collect(),
        });
    }

    results
}

/// Corners over the tournament's scorecards, summing gross strokes.
#[must_use]
pub fn corners_for_round(players: &[Player], rounds: &[PlayerRound]) -> Vec<CornerResult> {
    let rounds_by_player: HashMap<&SlugId, &PlayerRound> =
        rounds.iter().map(|r| (&r.player_id, r)).collect();

    let entries: Vec<CornerEntry> = players
        .iter()
        .map(|p| CornerEntry {
            player_id: p.id.clone(),
            player_name: p.name.clone(),
            scores: rounds_by_player
                .get(&p.id)
                .map(|r| r.holes.iter().map(|h| h.gross).collect())
                .unwrap_or_else(|| vec![None; 18]),
            in_corners: p.plays_corners,
        })
        .collect();

    corners(&entries)
}
