//! Projected 3D coordinates, row-aligned with the embedding matrix.
//!
//! The projection is produced upstream by a dimensionality-reduction step
//! (t-SNE in the original pipeline) and consumed here as a read-only
//! `[N, 3]` matrix. It drives only the spatial queries and visualization —
//! similarity ranking never touches it.

use log::debug;
use smartcore::linalg::basic::arrays::{Array, Array2};
use smartcore::linalg::basic::matrix::DenseMatrix;

/// Number of axes in projected space. The spatial queries are written for
/// exactly three dimensions.
pub const PROJECTION_DIMS: usize = 3;

/// Immutable `[N, 3]` matrix of projected entity coordinates.
#[derive(Clone, Debug)]
pub struct ProjectionSpace {
    data: DenseMatrix<f64>,
    npoints: usize,
}

impl ProjectionSpace {
    /// Builds from a vector of `[x, y, z]` rows.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or any row is not exactly 3 wide. The
    /// builder validates both and reports typed errors; this constructor
    /// is the last line of defense for direct callers.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        assert!(!rows.is_empty(), "projection cannot be empty");
        assert!(
            rows.iter().all(|r| r.len() == PROJECTION_DIMS),
            "projection rows must have exactly {} coordinates",
            PROJECTION_DIMS
        );
        let npoints = rows.len();
        let data =
            DenseMatrix::from_iterator(rows.into_iter().flatten(), npoints, PROJECTION_DIMS, 0);
        debug!("Projection space created with {} points", npoints);
        Self { data, npoints }
    }

    /// Number of projected points (N).
    #[inline]
    pub fn len(&self) -> usize {
        self.npoints
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.npoints == 0
    }

    /// Returns the projected coordinate of one entity.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()` — an out-of-range index is a caller bug,
    /// never clamped.
    #[inline]
    pub fn point(&self, index: usize) -> [f64; 3] {
        assert!(index < self.npoints, "point index out of bounds");
        [
            *self.data.get((index, 0)),
            *self.data.get((index, 1)),
            *self.data.get((index, 2)),
        ]
    }

    /// Gathers the projected coordinates of a set of entities, in order.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn points(&self, indices: &[usize]) -> Vec<[f64; 3]> {
        indices.iter().map(|&i| self.point(i)).collect()
    }

    /// Iterates all points in row order.
    pub fn iter_points(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        (0..self.npoints).map(move |i| self.point(i))
    }
}
