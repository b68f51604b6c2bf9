use thiserror::Error;

use crate::model::TeeColor;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("course must have exactly 18 holes, found {0}")]
    HoleCount(usize),
    #[error("hole {hole} has par {par}, expected 3 through 5")]
    ParOutOfRange { hole: i32, par: i32 },
    #[error("hole {hole} is numbered out of sequence")]
    HoleNumbering { hole: i32 },
    #[error("hole stroke indexes must be a permutation of 1 through 18")]
    StrokeIndexes,
    #[error("hole {0} is not on the scorecard")]
    UnknownHole(i32),
    #[error("no {tee} tees rated for course {course}")]
    UnknownTee { tee: TeeColor, course: String },
    #[error("gross score {gross} on hole {hole} must be at least 1")]
    GrossTooLow { hole: i32, gross: i32 },
    #[error("invalid identifier: {0:?}")]
    BadIdent(String),
}
