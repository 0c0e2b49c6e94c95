//! Ranking order tests.

use crate::common::*;
use tagrank::{compare_results, rank, search, ScoredResult};
use std::cmp::Ordering;

#[test]
fn higher_scores_rank_first() {
    let results = search(&sample_index(), "crew");
    assert_eq!(ids(&results), ["c1", "p1", "e1", "t1", "w1"]);
    assert_eq!(results[0].score, 30);
    assert_eq!(results[1].score, 8);
}

#[test]
fn title_match_outranks_description_match() {
    let results = search(&sample_index(), "fuel");
    // t1 has fuel in its title, e1 only in its description
    assert_eq!(ids(&results)[..2], ["t1", "e1"]);
    assert_eq!(results[0].score, 30);
    assert_eq!(results[1].score, 4);
}

#[test]
fn equal_scores_order_by_id() {
    let index = build(vec![
        make_titled("tank-b", "Fuel Tank"),
        make_titled("tank-c", "Fuel Tank"),
        make_titled("tank-a", "Fuel Tank"),
    ]);
    let results = search(&index, "tank");
    assert_eq!(ids(&results), ["tank-a", "tank-b", "tank-c"]);
    assert!(results.iter().all(|r| r.score == 24));
}

#[test]
fn zero_scores_trail_in_id_order() {
    let results = search(&sample_index(), "pod");
    assert_eq!(ids(&results), ["p1", "c1", "e1", "t1", "w1"]);
    assert!(results[1..].iter().all(|r| r.score == 0));
}

#[test]
fn rank_ignores_input_order() {
    let forward = vec![
        ScoredResult::new("a", 4),
        ScoredResult::new("b", 30),
        ScoredResult::new("c", 4),
        ScoredResult::new("d", 0),
    ];
    let mut backward = forward.clone();
    backward.reverse();

    assert_eq!(rank(forward), rank(backward));
}

#[test]
fn id_tiebreak_is_lexicographic() {
    // "p10" < "p2" byte-wise
    let a = ScoredResult::new("p10", 12);
    let b = ScoredResult::new("p2", 12);
    assert_eq!(compare_results(&a, &b), Ordering::Less);
    assert_eq!(ids(&rank(vec![b, a])), ["p10", "p2"]);
}
