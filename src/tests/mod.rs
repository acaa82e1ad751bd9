mod test_recommend;
mod test_spatial;

use crate::builder::RecSpaceBuilder;
use crate::core::RecSpace;

pub const SEED: u64 = 42;

/// Small fixed space shared across tests.
///
/// Projection layout mirrors the spatial worked example: the first point
/// at the origin, two anchors astride it on the x axis, one point off on
/// the y axis.
pub fn tiny_space() -> RecSpace {
    RecSpaceBuilder::new()
        .with_embeddings(vec![
            vec![1.0, 0.0],
            vec![0.9, 0.1],
            vec![0.0, 1.0],
            vec![0.5, 0.5],
        ])
        .with_projection(vec![
            vec![0.0, 0.0, 0.0],
            vec![5.0, 0.0, 0.0],
            vec![-5.0, 0.0, 0.0],
            vec![0.0, 5.0, 0.0],
        ])
        .with_entities(vec![
            "rust".into(),
            "programming".into(),
            "cooking".into(),
            "science".into(),
        ])
        .build()
        .expect("tiny space must build")
}
