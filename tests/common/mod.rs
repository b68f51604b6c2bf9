#![allow(dead_code)]

use std::collections::BTreeMap;

use serde::Deserialize;

use rusty_links::controller::score::{new_round, record_gross};
use rusty_links::model::{
    Course, CourseHole, Player, PlayerClass, PlayerRound, ScoringFormat, SlugId, TeeColor,
    TeeRating, Tournament,
};

pub fn slug(s: &str) -> SlugId {
    SlugId::parse(s).expect("test slug should be valid")
}

/// The 18-hole reference layout used across the tests: par 72, stroke
/// indexes a permutation of 1..=18.
pub fn pebble_beach() -> Course {
    let pars = [4, 5, 4, 4, 3, 5, 3, 4, 4, 4, 4, 3, 4, 5, 4, 4, 3, 5];
    let stroke_indexes = [5, 13, 3, 9, 17, 1, 15, 7, 11, 4, 14, 18, 2, 8, 12, 6, 16, 10];

    let holes = pars
        .iter()
        .zip(stroke_indexes)
        .enumerate()
        .map(|(i, (&par, stroke_index))| CourseHole {
            number: (i as i32) + 1,
            par,
            stroke_index,
        })
        .collect();

    let tees = BTreeMap::from([
        (TeeColor::Red, TeeRating { slope: 116, rating: 70.3 }),
        (TeeColor::White, TeeRating { slope: 120, rating: 72.1 }),
        (TeeColor::Blue, TeeRating { slope: 126, rating: 74.8 }),
        (TeeColor::Yellow, TeeRating { slope: 122, rating: 73.2 }),
    ]);

    Course {
        id: slug("pebble-beach"),
        name: "Pebble Beach Golf Links".to_string(),
        holes,
        tees,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn player(
    id: &str,
    name: &str,
    handicap_index: f64,
    course_handicap: i32,
    class: PlayerClass,
    tee: TeeColor,
    is_member: bool,
    plays_skins: bool,
    plays_corners: bool,
) -> Player {
    Player {
        id: slug(id),
        name: name.to_string(),
        handicap_index,
        course_handicap,
        class,
        tee,
        is_member,
        plays_skins,
        plays_corners,
    }
}

/// Open a scorecard and enter all 18 gross scores.
pub fn scored_round(
    player: &Player,
    course: &Course,
    tournament_id: &SlugId,
    format: ScoringFormat,
    gross: &[i32; 18],
) -> PlayerRound {
    let mut round =
        new_round(player, course, tournament_id.clone()).expect("reference course is well formed");
    for (i, &g) in gross.iter().enumerate() {
        record_gross(&mut round, (i as i32) + 1, g, format).expect("gross score should be valid");
    }
    round
}

#[derive(Deserialize)]
pub struct Fixture {
    pub tournament: Tournament,
    pub gross_scores: BTreeMap<SlugId, Vec<i32>>,
}

pub fn load_fixture() -> Fixture {
    serde_json::from_str(include_str!("../test6_tournament.json"))
        .expect("fixture json should parse")
}

/// Build the fixture's scorecards against the reference course.
pub fn fixture_rounds(fixture: &Fixture, course: &Course) -> Vec<PlayerRound> {
    fixture
        .tournament
        .players
        .iter()
        .map(|p| {
            let gross = &fixture.gross_scores[&p.id];
            let mut round = new_round(p, course, fixture.tournament.id.clone())
                .expect("reference course is well formed");
            for (i, &g) in gross.iter().enumerate() {
                record_gross(&mut round, (i as i32) + 1, g, fixture.tournament.format)
                    .expect("fixture gross scores are valid");
            }
            round
        })
        .collect()
}
