use chrono::{DateTime, Utc};
use tracing::debug;

use crate::controller::corners::corners_for_round;
use crate::controller::score::round_summary;
use crate::controller::skins::skins_for_round;
use crate::controller::standings::{PostedScore, class_results};
use crate::model::{
    CornerResult, Player, PlayerClass, PlayerPoints, PlayerRound, SkinResult, SlugId, Tournament,
    TournamentResults, TournamentStats,
};

/// Derive the complete results snapshot from the current scorecards.
/// Everything is recomputed from scratch; callers re-run this after any
/// score entry instead of patching earlier output. `as_of` is supplied by
/// the caller, so one snapshot always yields one identical result.
#[must_use]
pub fn compute_results(
    tournament: &Tournament,
    rounds: &[PlayerRound],
    as_of: DateTime<Utc>,
) -> TournamentResults {
    debug!(
        tournament = %tournament.id,
        players = tournament.players.len(),
        rounds = rounds.len(),
        "computing tournament results"
    );

    let posted: Vec<PostedScore> = tournament
        .players
        .iter()
        .filter_map(|p| {
            let round = rounds.iter().find(|r| r.player_id == p.id)?;
            let summary = round_summary(round);
            Some(PostedScore {
                player_id: p.id.clone(),
                gross: summary.total.gross,
                net: summary.total.net,
                to_par: summary.total.to_par,
            })
        })
        .collect();

    let skin_results = if tournament.skins_enabled {
        skins_for_round(&tournament.players, rounds)
    } else {
        Vec::new()
    };

    let corner_results = if tournament.corners_enabled {
        corners_for_round(&tournament.players, rounds)
    } else {
        Vec::new()
    };

    TournamentResults {
        tournament_id: tournament.id.clone(),
        class_results: class_results(&tournament.players, &posted),
        skin_results,
        corner_results,
        last_updated: as_of,
    }
}

/// Per-player skin totals across all 18 holes, rounded to 2 decimal
/// places and sorted descending. First-appearance order breaks exact
/// ties, keeping the output stable across recomputation.
#[must_use]
pub fn total_skins(skin_results: &[SkinResult]) -> Vec<PlayerPoints> {
    let shares = skin_results.iter().flat_map(|r| {
        r.winners
            .iter()
            .map(|w| (&w.player_id, &w.player_name, w.skin_points))
    });
    consolidate(shares)
}

/// Per-player corner point totals, same aggregation as skins.
#[must_use]
pub fn consolidated_corners(corner_results: &[CornerResult]) -> Vec<PlayerPoints> {
    let shares = corner_results.iter().flat_map(|r| {
        r.winners
            .iter()
            .map(|w| (&w.player_id, &w.player_name, w.points))
    });
    consolidate(shares)
}

fn consolidate<'a>(
    shares: impl Iterator<Item = (&'a SlugId, &'a String, f64)>,
) -> Vec<PlayerPoints> {
    let mut totals: Vec<PlayerPoints> = Vec::new();

    for (player_id, player_name, points) in shares {
        match totals.iter_mut().find(|t| t.player_id == *player_id) {
            Some(entry) => entry.total += points,
            None => totals.push(PlayerPoints {
                player_id: player_id.clone(),
                player_name: player_name.clone(),
                total: points,
            }),
        }
    }

    for entry in &mut totals {
        entry.total = (entry.total * 100.0).round() / 100.0;
    }
    totals.sort_by(|a, b| b.total.total_cmp(&a.total));
    totals
}

/// Roster head-counts for the management screen.
#[must_use]
pub fn tournament_stats(tournament: &Tournament) -> TournamentStats {
    let class_breakdown = PlayerClass::ALL
        .iter()
        .map(|&class| {
            (
                class,
                tournament.players.iter().filter(|p| p.class == class).count(),
            )
        })
        .collect();

    let members = tournament.players.iter().filter(|p| p.is_member).count();

    TournamentStats {
        total_players: tournament.players.len(),
        members,
        guests: tournament.players.len() - members,
        class_breakdown,
        skins_entrants: tournament.skins_entrants().count(),
        corners_entrants: tournament.corners_entrants().count(),
    }
}

/// Roster in display order (case-insensitive by name).
#[must_use]
pub fn sort_players_alphabetically(players: &[Player]) -> Vec<Player> {
    let mut sorted = players.to_vec();
    sorted.sort_by_key(|p| p.name.to_lowercase());
    sorted
}

/// Results snapshot as pretty JSON, for the export action.
///
/// # Errors
///
/// Will return `Err` if serialization fails
pub fn export_results(results: &TournamentResults) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}
