//! Bounding-box and neighborhood properties: anchor containment,
//! index-identity exclusion, inclusive boundaries, and the precondition
//! contract on indices.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::builder::RecSpaceBuilder;
use crate::spatial::BoundingBox;
use crate::tests::test_data::synthetic_space;
use crate::tests::{tiny_space, SEED};

#[test]
fn every_anchor_lies_within_the_box() {
    let space = synthetic_space(200, 6, SEED);
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    for _ in 0..20 {
        let center = rng.random_range(0..space.n_entities());
        let anchors: Vec<usize> = (0..8)
            .map(|_| rng.random_range(0..space.n_entities()))
            .filter(|&i| i != center)
            .collect();
        let hood = space.neighborhood(center, &anchors);
        for &a in &anchors {
            assert!(
                hood.bounds.contains(space.projection().point(a)),
                "anchor {} escaped the box {:?}",
                a,
                hood.bounds
            );
        }
    }
}

#[test]
fn worked_example_excludes_off_axis_point() {
    // center at origin, anchors astride it on x: x-range [-5, 5], y and z
    // half-widths 0. The point at y=5 must fall outside.
    let space = tiny_space();
    let hood = space.neighborhood(0, &[1, 2]);

    assert_eq!(
        hood.bounds,
        BoundingBox {
            min_x: -5.0,
            max_x: 5.0,
            min_y: 0.0,
            max_y: 0.0,
            min_z: 0.0,
            max_z: 0.0,
        }
    );
    assert!(hood.indices.is_empty(), "no survivors expected: {:?}", hood.labels);
}

#[test]
fn center_and_anchors_are_excluded_even_with_duplicate_coordinates() {
    // Entity 3 sits at exactly the same coordinates as anchor 1; it must
    // survive, while the anchor itself must not.
    let space = RecSpaceBuilder::new()
        .with_embeddings(vec![vec![1.0]; 4])
        .with_projection(vec![
            vec![0.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0],
            vec![-1.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0],
        ])
        .with_entities(vec!["c".into(), "a1".into(), "a2".into(), "twin".into()])
        .build()
        .unwrap();

    let hood = space.neighborhood(0, &[1, 2]);
    assert_eq!(hood.indices, vec![3]);
    assert_eq!(hood.labels, vec!["twin"]);
    assert_eq!(hood.points, vec![[1.0, 0.0, 0.0]]);
}

#[test]
fn boundary_points_are_retained() {
    // Survivor sits exactly on max_x of the box.
    let space = RecSpaceBuilder::new()
        .with_embeddings(vec![vec![1.0]; 4])
        .with_projection(vec![
            vec![0.0, 0.0, 0.0],
            vec![2.0, 0.0, 0.0],
            vec![2.0, 0.0, 0.0],
            vec![-2.0, 0.0, 0.0],
        ])
        .with_entities(vec!["c".into(), "a".into(), "edge".into(), "far_edge".into()])
        .build()
        .unwrap();

    let hood = space.neighborhood(0, &[1]);
    assert_eq!(hood.indices, vec![2, 3]);
}

#[test]
fn output_preserves_dataset_order() {
    let space = synthetic_space(300, 4, SEED);
    let hood = space.neighborhood(7, &[1, 50, 200]);
    for pair in hood.indices.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    assert_eq!(hood.indices.len(), hood.points.len());
    assert_eq!(hood.indices.len(), hood.labels.len());
}

#[test]
fn empty_anchor_set_gives_degenerate_box() {
    let space = tiny_space();
    let hood = space.neighborhood(0, &[]);
    let center = space.projection().point(0);
    assert!(hood.bounds.contains(center));
    // nothing else sits exactly at the center
    assert!(hood.indices.is_empty());
}

#[test]
#[should_panic(expected = "center index out of bounds")]
fn out_of_range_center_panics() {
    let space = tiny_space();
    space.neighborhood(99, &[1]);
}

#[test]
#[should_panic(expected = "anchor index out of bounds")]
fn out_of_range_anchor_panics() {
    let space = tiny_space();
    space.neighborhood(0, &[99]);
}
