mod common;

use rusty_links::EngineError;
use rusty_links::controller::handicap::{classify, course_handicap, gets_stroke, register_player};
use rusty_links::model::{PlayerClass, TeeColor};

#[test]
fn course_handicap_rounds_to_nearest() {
    // 11.8 * 126 / 113 = 13.158...
    assert_eq!(course_handicap(11.8, 126), 13);
    assert_eq!(course_handicap(8.5, 126), 9);
    assert_eq!(course_handicap(6.2, 126), 7);
    assert_eq!(course_handicap(15.3, 120), 16);
    // slope 113 is the neutral slope: index carries through
    assert_eq!(course_handicap(10.0, 113), 10);
    // exact .5 rounds up on this all-positive domain
    assert_eq!(course_handicap(10.5, 113), 11);
    assert_eq!(course_handicap(0.0, 126), 0);
}

#[test]
fn stroke_falls_on_hardest_holes_first() {
    assert!(gets_stroke(14, 14));
    assert!(gets_stroke(14, 1));
    assert!(!gets_stroke(14, 15));
    assert!(!gets_stroke(0, 18));
}

#[test]
fn stroke_count_over_a_round_matches_course_handicap() {
    let course = common::pebble_beach();
    for ch in [0, 1, 7, 9, 13, 18, 19, 25] {
        let strokes = course
            .holes
            .iter()
            .filter(|h| gets_stroke(ch, h.stroke_index))
            .count();
        // one stroke per hole at most, no second allocation pass above 18
        assert_eq!(strokes, ch.min(18) as usize, "course handicap {ch}");
    }
}

#[test]
fn classification_boundaries_are_inclusive_on_the_lower_class() {
    assert_eq!(classify(12.0, None), PlayerClass::A);
    assert_eq!(classify(12.1, None), PlayerClass::B);
    assert_eq!(classify(18.0, None), PlayerClass::B);
    assert_eq!(classify(18.1, None), PlayerClass::C);
    assert_eq!(classify(30.0, None), PlayerClass::C);
}

#[test]
fn seniors_outrank_handicap_classification() {
    assert_eq!(classify(5.0, Some(65)), PlayerClass::Senior);
    assert_eq!(classify(25.0, Some(80)), PlayerClass::Senior);
    assert_eq!(classify(5.0, Some(64)), PlayerClass::A);
    assert_eq!(classify(5.0, None), PlayerClass::A);
}

#[test]
fn registration_resolves_tee_slope_and_class_once() {
    let course = common::pebble_beach();
    let player = register_player(
        common::slug("player-1"),
        "Harry Mitchell",
        8.5,
        None,
        TeeColor::Blue,
        &course,
        true,
        true,
        true,
    )
    .expect("blue tees are rated");

    assert_eq!(player.course_handicap, 9);
    assert_eq!(player.class, PlayerClass::A);
    assert_eq!(player.tee, TeeColor::Blue);
}

#[test]
fn registration_refuses_an_unrated_tee() {
    let course = common::pebble_beach();
    let err = register_player(
        common::slug("player-1"),
        "Harry Mitchell",
        8.5,
        None,
        TeeColor::Green,
        &course,
        true,
        false,
        false,
    )
    .unwrap_err();

    assert!(matches!(err, EngineError::UnknownTee { tee: TeeColor::Green, .. }));
}
