use crate::error::EngineError;
use crate::model::{Course, Player, PlayerClass, SlugId, TeeColor};

/// Strokes a player receives on this course, from handicap index and the
/// tee's slope rating. `f64::round` ties away from zero, which is plain
/// round-half-up on the all-positive handicap domain.
#[must_use]
pub fn course_handicap(handicap_index: f64, slope_rating: i32) -> i32 {
    (handicap_index * f64::from(slope_rating) / 113.0).round() as i32
}

/// At most one stroke per hole, even for course handicaps above 18.
#[must_use]
pub fn gets_stroke(course_handicap: i32, stroke_index: i32) -> bool {
    course_handicap >= stroke_index
}

/// Age 65+ puts a player in the Senior class regardless of handicap.
#[must_use]
pub fn classify(handicap_index: f64, age: Option<i32>) -> PlayerClass {
    if age.is_some_and(|a| a >= 65) {
        return PlayerClass::Senior;
    }
    if handicap_index <= 12.0 {
        PlayerClass::A
    } else if handicap_index <= 18.0 {
        PlayerClass::B
    } else {
        PlayerClass::C
    }
}

/// Build a roster entry for the chosen tee. Course handicap and class are
/// resolved here, once, and stay fixed for the round.
///
/// # Errors
///
/// Will return `Err` if the course has no rating for the chosen tee
#[allow(clippy::too_many_arguments)]
pub fn register_player(
    id: SlugId,
    name: &str,
    handicap_index: f64,
    age: Option<i32>,
    tee: TeeColor,
    course: &Course,
    is_member: bool,
    plays_skins: bool,
    plays_corners: bool,
) -> Result<Player, EngineError> {
    let rating = course.tee(tee)?;
    Ok(Player {
        id,
        name: name.to_string(),
        handicap_index,
        course_handicap: course_handicap(handicap_index, rating.slope),
        class: classify(handicap_index, age),
        tee,
        is_member,
        plays_skins,
        plays_corners,
    })
}
