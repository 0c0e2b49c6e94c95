//! Score values for known queries.
//!
//! Every number here is worked out by hand from the attribute weights
//! (title 12, name 6, tags 4, description 2): exact matches earn the full weight,
//! substring matches half, once for the whole query and once per query word.

use crate::common::*;
use tagrank::{score_all, search, Index, IndexConfig, ScoredResult};

#[test]
fn pod_example_scores_thirty() {
    // pod (title 12): 12 whole + 12 word = 24
    // mk1pod (name 6): 3 whole + 3 word = 6
    let index = build(vec![pod_entity()]);
    assert_eq!(score_all(&index, "pod"), vec![ScoredResult::new("p1", 30)]);
}

#[test]
fn pod_token_alone_contributes_twenty_four() {
    let index = build(vec![make_titled("p", "Pod")]);
    assert_eq!(score_of(&score_all(&index, "pod"), "p"), 24);
}

#[test]
fn query_is_case_and_whitespace_insensitive() {
    let index = sample_index();
    assert_eq!(score_all(&index, "  POD "), score_all(&index, "pod"));
}

#[test]
fn substring_matches_earn_half_weight() {
    let index = sample_index();
    let results = score_all(&index, "crew");
    // c1: crew (title) 24, crewcabin (name) 3 + 3
    assert_eq!(score_of(&results, "c1"), 30);
    // p1: crew (tags) 4 + 4
    assert_eq!(score_of(&results, "p1"), 8);
    assert_eq!(score_of(&results, "t1"), 0);
}

#[test]
fn multi_word_query_scores_each_word() {
    let results = score_all(&sample_index(), "liquid fuel");
    // t1: fuel 12, liquid 4, fueltank contains fuel 3
    assert_eq!(score_of(&results, "t1"), 19);
    // e1: liquid 4, fuel 2, liquidengine2 contains liquid 3
    assert_eq!(score_of(&results, "e1"), 9);
    assert_eq!(score_of(&results, "p1"), 0);
}

#[test]
fn multi_word_query_matches_compound_name() {
    // mk1pod contains both words: 3 + 3, plus mk1 12 and pod 12
    let results = score_all(&sample_index(), "MK1 pod");
    assert_eq!(score_of(&results, "p1"), 30);
    assert_eq!(score_of(&results, "c1"), 12);
}

#[test]
fn punctuation_in_query_splits_words() {
    let results = score_all(&sample_index(), "mk1-pod");
    assert_eq!(score_of(&results, "p1"), 30);
}

#[test]
fn full_title_query_scores_at_least_title_weight() {
    let index = sample_index();
    for (id, entry) in index.iter() {
        let results = score_all(&index, &entry.entity.title);
        assert!(
            score_of(&results, id) >= 12,
            "title query for '{}' scored {}",
            id,
            score_of(&results, id)
        );
    }
}

#[test]
fn empty_query_scores_every_entity_zero() {
    let index = sample_index();
    for query in ["", "   ", "\t\n"] {
        let results = score_all(&index, query);
        assert_eq!(results.len(), index.len());
        assert!(results.iter().all(|r| r.score == 0));
    }
}

#[test]
fn separator_only_query_scores_nothing() {
    // Normalized query "--" is non-empty but no token contains it
    let results = score_all(&sample_index(), "--");
    assert!(results.iter().all(|r| r.score == 0));
}

#[test]
fn unmatched_query_returns_every_entity() {
    let index = sample_index();
    let results = search(&index, "nonexistent");
    assert_eq!(results.len(), index.len());
    assert!(results.iter().all(|r| r.score == 0));
}

#[test]
fn empty_index_returns_nothing() {
    let index = Index::build(Vec::new(), IndexConfig::default()).unwrap();
    assert!(score_all(&index, "pod").is_empty());
    assert!(search(&index, "").is_empty());
}

#[test]
fn marker_inside_tags_does_not_hide_following_word() {
    let results = score_all(&sample_index(), "internal");
    assert_eq!(score_of(&results, "p1"), 8);

    let results = score_all(&sample_index(), "stack");
    assert_eq!(score_of(&results, "w1"), 8);
}

#[test]
fn dotted_capital_i_query_matches_title_tokens() {
    // "İstanbul" tokenizes to "i" + "stanbul" on both sides; each word is an exact hit.
    let index = build(vec![make_titled("x1", "İstanbul Ferry")]);
    assert_eq!(score_of(&score_all(&index, "istanbul ferry"), "x1"), 12);
    assert_eq!(score_of(&score_all(&index, "İstanbul ferry"), "x1"), 36);
}

#[test]
fn long_repeated_query_does_not_wrap() {
    // 2000 title tokens each containing "a", 400000 occurrences at 6 apiece.
    let title: Vec<String> = (0..2000).map(|i| format!("a{}", i)).collect();
    let index = build(vec![make_titled("big", &title.join(" "))]);

    let results = search(&index, &"a ".repeat(400_000));
    assert_eq!(results[0].score, 2000u64 * 400_000 * 6);
    assert!(results[0].score > u64::from(u32::MAX));
}
