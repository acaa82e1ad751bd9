//! Similarity-ranking properties: self exclusion, result length, ordering,
//! rounding, case-insensitive NotFound, and the deterministic tie-break.

use crate::recommend::Recommendation;
use crate::tests::test_data::synthetic_space;
use crate::tests::{tiny_space, SEED};

#[test]
fn never_recommends_the_query_entity() {
    let space = synthetic_space(60, 8, SEED);
    for i in 0..space.n_entities() {
        let name = space.index().name(i).to_string();
        let recs = space.recommend(&name, 10).unwrap();
        assert!(
            recs.iter().all(|r| r.index != i),
            "entity {} appeared in its own recommendations",
            name
        );
    }
}

#[test]
fn result_length_matches_k() {
    let space = synthetic_space(30, 6, SEED);
    for k in [1, 5, 29] {
        let recs = space.recommend("sub0000", k).unwrap();
        assert_eq!(recs.len(), k);
    }
}

#[test]
fn oversized_k_returns_every_other_entity() {
    let space = tiny_space();
    let recs = space.recommend("rust", 100).unwrap();
    assert_eq!(recs.len(), space.n_entities() - 1);
}

#[test]
fn zero_k_is_some_empty_not_none() {
    let space = tiny_space();
    let recs = space.recommend("rust", 0).unwrap();
    assert!(recs.is_empty());
}

#[test]
fn scores_are_monotonically_non_increasing() {
    let space = synthetic_space(80, 8, SEED);
    let recs = space.recommend("sub0042", 20).unwrap();
    for pair in recs.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "scores out of order: {} then {}",
            pair[0].score,
            pair[1].score
        );
    }
}

#[test]
fn unknown_names_return_none_case_insensitively() {
    let space = tiny_space();
    assert!(space.recommend("no_such_entity", 3).is_none());
    assert!(space.recommend("No_Such_Entity", 3).is_none());
    // known names resolve regardless of casing
    assert!(space.recommend("RUST", 3).is_some());
    assert!(space.recommend("Rust", 3).is_some());
}

#[test]
fn ranking_uses_raw_dot_product_not_cosine() {
    // "big" points the same way as "small" but with twice the magnitude;
    // under cosine they would tie against the query, under raw dot product
    // "big" must win.
    let space = crate::builder::RecSpaceBuilder::new()
        .with_embeddings(vec![
            vec![1.0, 1.0], // query
            vec![1.0, 0.0], // small
            vec![2.0, 0.0], // big
        ])
        .with_projection(vec![vec![0.0; 3], vec![1.0; 3], vec![2.0; 3]])
        .with_entities(vec!["query".into(), "small".into(), "big".into()])
        .build()
        .unwrap();

    let recs = space.recommend("query", 2).unwrap();
    assert_eq!(recs[0].name, "big");
    assert_eq!(recs[0].score, 2.0);
    assert_eq!(recs[1].name, "small");
}

#[test]
fn tie_break_is_ascending_index() {
    // a and b both score 1.0 against c; the lower index wins the single slot.
    let space = crate::builder::RecSpaceBuilder::new()
        .with_embeddings(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]])
        .with_projection(vec![vec![0.0; 3], vec![1.0; 3], vec![2.0; 3]])
        .with_entities(vec!["a".into(), "b".into(), "c".into()])
        .build()
        .unwrap();

    let recs = space.recommend("c", 1).unwrap();
    assert_eq!(
        recs,
        vec![Recommendation {
            name: "a".into(),
            score: 1.0,
            index: 0
        }]
    );
}

#[test]
fn scores_are_rounded_to_three_decimals() {
    let space = crate::builder::RecSpaceBuilder::new()
        .with_embeddings(vec![vec![1.0], vec![0.12345], vec![0.9]])
        .with_projection(vec![vec![0.0; 3], vec![1.0; 3], vec![2.0; 3]])
        .with_entities(vec!["q".into(), "x".into(), "y".into()])
        .build()
        .unwrap();

    let recs = space.recommend("q", 2).unwrap();
    let x = recs.iter().find(|r| r.name == "x").unwrap();
    assert_eq!(x.score, 0.123);
}

#[test]
fn large_space_ranks_consistently() {
    // Above the parallel-scan threshold; results must match the same
    // query on the sequential path semantics.
    let space = synthetic_space(2_500, 8, SEED);
    let recs = space.recommend("sub1234", 15).unwrap();
    assert_eq!(recs.len(), 15);
    for pair in recs.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert!(recs.iter().all(|r| space.index().name(r.index) == r.name));
}
