use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::model::types::SlugId;

pub const HOLES_PER_ROUND: usize = 18;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CourseHole {
    pub number: i32,
    pub par: i32,
    /// Difficulty ranking of the hole, 1 (hardest) through 18 (easiest).
    /// Handicap strokes are allocated in this order.
    pub stroke_index: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TeeRating {
    pub slope: i32,
    pub rating: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TeeColor {
    Red,
    White,
    Blue,
    Yellow,
    Green,
}

impl std::fmt::Display for TeeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TeeColor::Red => "red",
            TeeColor::White => "white",
            TeeColor::Blue => "blue",
            TeeColor::Yellow => "yellow",
            TeeColor::Green => "green",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Course {
    pub id: SlugId,
    pub name: String,
    pub holes: Vec<CourseHole>,
    pub tees: BTreeMap<TeeColor, TeeRating>,
}

impl Course {
    /// # Errors
    ///
    /// Will return `Err` unless the course has exactly 18 holes numbered
    /// 1..=18 in order, pars 3..=5, and stroke indexes forming a
    /// permutation of 1..=18.
    pub fn check(&self) -> Result<(), EngineError> {
        if self.holes.len() != HOLES_PER_ROUND {
            return Err(EngineError::HoleCount(self.holes.len()));
        }
        let mut seen_indexes = [false; HOLES_PER_ROUND];
        for (i, hole) in self.holes.iter().enumerate() {
            if hole.number != (i as i32) + 1 {
                return Err(EngineError::HoleNumbering { hole: hole.number });
            }
            if !(3..=5).contains(&hole.par) {
                return Err(EngineError::ParOutOfRange {
                    hole: hole.number,
                    par: hole.par,
                });
            }
            if !(1..=18).contains(&hole.stroke_index)
                || seen_indexes[(hole.stroke_index - 1) as usize]
            {
                return Err(EngineError::StrokeIndexes);
            }
            seen_indexes[(hole.stroke_index - 1) as usize] = true;
        }
        Ok(())
    }

    #[must_use]
    pub fn hole(&self, number: i32) -> Option<&CourseHole> {
        self.holes.iter().find(|h| h.number == number)
    }

    /// # Errors
    ///
    /// Will return `Err` if the course has no rating for the tee color
    pub fn tee(&self, color: TeeColor) -> Result<&TeeRating, EngineError> {
        self.tees.get(&color).ok_or_else(|| EngineError::UnknownTee {
            tee: color,
            course: self.name.clone(),
        })
    }

    #[must_use]
    pub fn front_nine_par(&self) -> i32 {
        self.holes.iter().take(9).map(|h| h.par).sum()
    }

    #[must_use]
    pub fn back_nine_par(&self) -> i32 {
        self.holes.iter().skip(9).map(|h| h.par).sum()
    }

    #[must_use]
    pub fn total_par(&self) -> i32 {
        self.front_nine_par() + self.back_nine_par()
    }
}
