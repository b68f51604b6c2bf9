use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::Tournament;

pub const MIN_SIDE_GAME_ENTRANTS: usize = 2;

/// Advisory configuration finding. Nothing downstream refuses to compute
/// because of these; the caller decides what to surface.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ConfigIssue {
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn new(field: &str, message: &str) -> Self {
        ConfigIssue {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Run every configuration check and collect the findings; no check
/// short-circuits another. An empty list means the setup is sound.
#[must_use]
pub fn validate_tournament(tournament: &Tournament) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    if tournament.name.trim().is_empty() {
        issues.push(ConfigIssue::new("name", "Tournament name is required"));
    }
    if tournament.date.is_none() {
        issues.push(ConfigIssue::new("date", "Tournament date is required"));
    }
    if tournament.course_id.is_none() {
        issues.push(ConfigIssue::new("course", "A course must be selected"));
    }
    if tournament.players.is_empty() {
        issues.push(ConfigIssue::new(
            "players",
            "At least one player must be registered",
        ));
    }
    if tournament.skins_enabled && tournament.skins_entrants().count() < MIN_SIDE_GAME_ENTRANTS {
        issues.push(ConfigIssue::new(
            "skins",
            "Skins requires at least 2 participating players",
        ));
    }
    if tournament.corners_enabled && tournament.corners_entrants().count() < MIN_SIDE_GAME_ENTRANTS
    {
        issues.push(ConfigIssue::new(
            "corners",
            "Corners requires at least 2 participating players",
        ));
    }

    if !issues.is_empty() {
        debug!(
            tournament = %tournament.id,
            count = issues.len(),
            "tournament configuration has issues"
        );
    }
    issues
}
