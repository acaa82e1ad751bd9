//! EmbeddingSpace and RecSpace: the immutable serving bundle.
//!
//! `EmbeddingSpace` is a dense, row-major `[N, D]` matrix of entity
//! embeddings with a brute-force dot-product scan. `RecSpace` bundles it
//! with the row-aligned 3D projection and the name index, and exposes the
//! query operations: similarity ranking, boxed spatial neighborhood, and
//! scene assembly for the visualization layer.
//!
//! All three inputs are loaded once and never mutated, so a `RecSpace`
//! can be shared across request-handling threads without locking.
//!
//! # Examples
//!
//! Build a small space and ask for recommendations:
//!
//! ```
//! use recspace::builder::RecSpaceBuilder;
//!
//! let space = RecSpaceBuilder::new()
//!     .with_embeddings(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]])
//!     .with_projection(vec![vec![0.0; 3], vec![1.0; 3], vec![2.0; 3]])
//!     .with_entities(vec!["a".into(), "b".into(), "c".into()])
//!     .build()
//!     .unwrap();
//!
//! let recs = space.recommend("C", 2).unwrap();
//! assert_eq!(recs[0].name, "a");
//! assert!(space.recommend("unknown", 2).is_none());
//! ```

use log::{debug, info, trace};
use rayon::prelude::*;
use smartcore::linalg::basic::arrays::Array2;
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::index::EntityIndex;
use crate::projection::ProjectionSpace;
use crate::recommend::{rank_excluding, round3, Recommendation, Recommendations};
use crate::scene::{OverviewScene, Scene, SceneLayer};
use crate::spatial::{boxed_neighborhood, Neighborhood};

/// Row count above which the scoring scan switches to a parallel iterator.
const PAR_THRESHOLD: usize = 2_048;

/// Dense `[N, D]` matrix of entity embeddings, immutable after build.
#[derive(Clone, Debug)]
pub struct EmbeddingSpace {
    data: DenseMatrix<f64>,
    pub nitems: usize,
    pub nfeatures: usize,
}

impl EmbeddingSpace {
    /// Builds from a vector of equally-sized embedding rows.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or ragged. The builder validates both
    /// up front and reports typed errors instead.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        assert!(!rows.is_empty(), "embeddings cannot be empty");
        let nfeatures = rows[0].len();
        assert!(nfeatures > 0, "embedding rows cannot be zero-width");
        assert!(
            rows.iter().all(|r| r.len() == nfeatures),
            "all embedding rows must have the same number of features"
        );
        let nitems = rows.len();
        let data = DenseMatrix::from_iterator(rows.into_iter().flatten(), nitems, nfeatures, 0);
        debug!(
            "Embedding space created with {} items and {} features",
            nitems, nfeatures
        );
        Self {
            data,
            nitems,
            nfeatures,
        }
    }

    /// Returns (nitems, nfeatures).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nitems, self.nfeatures)
    }

    /// Returns an owned copy of one embedding row.
    ///
    /// # Panics
    ///
    /// Panics if `index >= nitems`.
    #[inline]
    pub fn item(&self, index: usize) -> Vec<f64> {
        assert!(index < self.nitems, "item index out of bounds");
        self.data.get_row(index).iterator(0).copied().collect()
    }

    /// Dot product of row `index` against a query vector.
    ///
    /// # Panics
    ///
    /// Panics if the query length differs from the feature count.
    #[inline]
    pub fn dot(&self, index: usize, query: &[f64]) -> f64 {
        assert_eq!(query.len(), self.nfeatures, "dimension mismatch");
        self.data
            .get_row(index)
            .iterator(0)
            .zip(query.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Scores every row against the embedding at `query_index`.
    ///
    /// Raw dot products, one per row, in row order. The scan runs in
    /// parallel above [`PAR_THRESHOLD`] rows.
    pub fn scores_for(&self, query_index: usize) -> Vec<f64> {
        let query = self.item(query_index);
        if self.nitems >= PAR_THRESHOLD {
            (0..self.nitems)
                .into_par_iter()
                .map(|i| self.dot(i, &query))
                .collect()
        } else {
            (0..self.nitems).map(|i| self.dot(i, &query)).collect()
        }
    }
}

/// The serving bundle: embeddings, projection, and name index, loaded once
/// and queried read-only thereafter.
#[derive(Clone, Debug)]
pub struct RecSpace {
    embeddings: EmbeddingSpace,
    projection: ProjectionSpace,
    index: EntityIndex,
    default_k: usize,
}

impl RecSpace {
    /// Assembled by the builder after cross-validation; row counts of all
    /// three parts are already known to agree.
    pub(crate) fn new(
        embeddings: EmbeddingSpace,
        projection: ProjectionSpace,
        index: EntityIndex,
        default_k: usize,
    ) -> Self {
        debug_assert_eq!(embeddings.nitems, projection.len());
        debug_assert_eq!(embeddings.nitems, index.len());
        Self {
            embeddings,
            projection,
            index,
            default_k,
        }
    }

    /// Number of entities (N).
    #[inline]
    pub fn n_entities(&self) -> usize {
        self.embeddings.nitems
    }

    #[inline]
    pub fn index(&self) -> &EntityIndex {
        &self.index
    }

    #[inline]
    pub fn embeddings(&self) -> &EmbeddingSpace {
        &self.embeddings
    }

    #[inline]
    pub fn projection(&self) -> &ProjectionSpace {
        &self.projection
    }

    /// K used by [`RecSpace::scene`] when the caller passes no count.
    #[inline]
    pub fn default_k(&self) -> usize {
        self.default_k
    }

    /// Ranks all entities by raw dot product against `name`'s embedding
    /// and returns the top `k`, self excluded, scores rounded to three
    /// decimals.
    ///
    /// `None` means the name is unknown (case-insensitively); `Some` with
    /// an empty vector means `k == 0`. Ties order by ascending index.
    pub fn recommend(&self, name: &str, k: usize) -> Option<Recommendations> {
        let idx = self.index.resolve(name)?;
        trace!("Resolved {:?} to index {}", name, idx);

        let scores = self.embeddings.scores_for(idx);
        let ranked = rank_excluding(&scores, idx, k);

        let recs: Recommendations = ranked
            .into_iter()
            .map(|(i, score)| Recommendation {
                name: self.index.name(i).to_string(),
                score: round3(score),
                index: i,
            })
            .collect();

        debug!(
            "recommend({:?}, {}): {} results, score range [{:.3}, {:.3}]",
            name,
            k,
            recs.len(),
            recs.last().map(|r| r.score).unwrap_or(f64::NAN),
            recs.first().map(|r| r.score).unwrap_or(f64::NAN),
        );
        Some(recs)
    }

    /// Boxed spatial neighborhood of `center_index` using `anchor_indices`
    /// to size the box. Center and anchors are excluded from the output by
    /// index.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of `[0, N)` — callers resolve names via
    /// the entity index first.
    pub fn neighborhood(&self, center_index: usize, anchor_indices: &[usize]) -> Neighborhood {
        boxed_neighborhood(
            &self.projection,
            self.index.names(),
            center_index,
            anchor_indices,
        )
    }

    /// Assembles the visualization scene for one entity: recommendations,
    /// the boxed neighborhood around them, and the center point, plus
    /// per-axis display ranges. `k` defaults to [`RecSpace::default_k`].
    ///
    /// `None` means the name is unknown.
    pub fn scene(&self, name: &str, k: Option<usize>) -> Option<Scene> {
        let k = k.unwrap_or(self.default_k);
        let center_index = self.index.resolve(name)?;
        let recs = self.recommend(name, k)?;

        let anchor_indices: Vec<usize> = recs.iter().map(|r| r.index).collect();
        let hood = self.neighborhood(center_index, &anchor_indices);
        let axis_ranges = hood.bounds.axis_ranges();

        let scene = Scene {
            neighborhood: SceneLayer {
                tag: "neighborhood",
                points: hood.points,
                labels: hood.labels,
            },
            recommended: SceneLayer {
                tag: "recommended",
                points: self.projection.points(&anchor_indices),
                labels: recs.iter().map(|r| r.name.clone()).collect(),
            },
            center: SceneLayer {
                tag: "center",
                points: vec![self.projection.point(center_index)],
                labels: vec![name.to_lowercase()],
            },
            axis_ranges,
        };
        info!(
            "Scene for {:?}: {} recommended, {} in neighborhood",
            name,
            scene.recommended.points.len(),
            scene.neighborhood.points.len()
        );
        Some(scene)
    }

    /// The full-dataset scene: every projected point with its label, no
    /// spatial restriction and no display ranges.
    pub fn overview_scene(&self) -> OverviewScene {
        OverviewScene {
            points: self.projection.iter_points().collect(),
            labels: self.index.names().to_vec(),
        }
    }
}
