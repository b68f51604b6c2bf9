pub mod aggregators;

pub use aggregators::*;

use crate::controller::handicap::gets_stroke;
use crate::error::EngineError;
use crate::model::{Course, HoleScore, Player, PlayerRound, ScoringFormat, SlugId};

#[must_use]
pub fn net_score(gross: i32, gets_stroke: bool) -> i32 {
    gross - i32::from(gets_stroke)
}

/// Fixed Stableford table over the net result against par:
/// eagle-or-better 4, birdie 3, par 2, bogey 1, worse 0.
#[must_use]
pub fn stableford_points(gross: i32, par: i32, gets_stroke: bool) -> i32 {
    let delta = net_score(gross, gets_stroke) - par;
    match delta {
        i32::MIN..=-2 => 4,
        -1 => 3,
        0 => 2,
        1 => 1,
        _ => 0,
    }
}

/// Open a scorecard: 18 unscored holes with the player's stroke
/// allocation already resolved.
///
/// # Errors
///
/// Will return `Err` if the course fails its well-formedness check
pub fn new_round(
    player: &Player,
    course: &Course,
    tournament_id: SlugId,
) -> Result<PlayerRound, EngineError> {
    course.check()?;
    let holes = course
        .holes
        .iter()
        .map(|h| HoleScore {
            hole_number: h.number,
            par: h.par,
            stroke_index: h.stroke_index,
            gross: None,
            net: None,
            gets_stroke: gets_stroke(player.course_handicap, h.stroke_index),
            stableford: None,
        })
        .collect();

    Ok(PlayerRound {
        player_id: player.id.clone(),
        tournament_id,
        holes,
    })
}

/// Enter (or overwrite) the gross score for one hole, re-deriving net and
/// Stableford points. Zero and negative stroke counts are refused.
///
/// # Errors
///
/// Will return `Err` if the hole is not on the scorecard or the gross
/// score is below 1
pub fn record_gross(
    round: &mut PlayerRound,
    hole_number: i32,
    gross: i32,
    format: ScoringFormat,
) -> Result<(), EngineError> {
    if gross < 1 {
        return Err(EngineError::GrossTooLow {
            hole: hole_number,
            gross,
        });
    }
    let hole = round
        .holes
        .iter_mut()
        .find(|h| h.hole_number == hole_number)
        .ok_or(EngineError::UnknownHole(hole_number))?;

    hole.gross = Some(gross);
    hole.net = Some(net_score(gross, hole.gets_stroke));
    hole.stableford = match format {
        ScoringFormat::Stableford => Some(stableford_points(gross, hole.par, hole.gets_stroke)),
        ScoringFormat::StrokePlay => None,
    };
    Ok(())
}
