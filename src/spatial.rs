//! Axis-aligned bounding boxes and the boxed-neighborhood query.
//!
//! The box is always centered on the query entity: each axis gets a
//! half-width equal to the farthest anchor excursion on that axis,
//! `max(|anchor_max − center|, |anchor_min − center|)`, so anchors on one
//! side widen the box symmetrically to the other. Containment is inclusive
//! on both ends of every axis.
//!
//! Exclusion of the center and anchors from the filtered cloud is by row
//! index, never by coordinate comparison — distinct entities that happen to
//! share coordinates with an anchor must survive the filter.

use log::debug;
use serde::Serialize;

use crate::projection::ProjectionSpace;

/// Axis-aligned box in projected space, centered on a query entity.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
}

// Approximate float equality, as for graph parameter comparison elsewhere
// in the pack's style.
impl PartialEq for BoundingBox {
    fn eq(&self, other: &Self) -> bool {
        approx::relative_eq!(self.min_x, other.min_x)
            && approx::relative_eq!(self.max_x, other.max_x)
            && approx::relative_eq!(self.min_y, other.min_y)
            && approx::relative_eq!(self.max_y, other.max_y)
            && approx::relative_eq!(self.min_z, other.min_z)
            && approx::relative_eq!(self.max_z, other.max_z)
    }
}

impl BoundingBox {
    /// A box with no bounds: every point passes the filter. Used for the
    /// full-dataset overview, which applies no spatial restriction.
    pub fn unbounded() -> Self {
        Self {
            min_x: f64::NEG_INFINITY,
            max_x: f64::INFINITY,
            min_y: f64::NEG_INFINITY,
            max_y: f64::INFINITY,
            min_z: f64::NEG_INFINITY,
            max_z: f64::INFINITY,
        }
    }

    /// Builds the symmetric box around `center` enclosing all `anchors`.
    ///
    /// An empty anchor set yields zero half-widths: the degenerate box
    /// containing only points exactly at the center. Edges are widened to
    /// the anchor extrema where `center ± half_width` rounds inside them,
    /// so anchors can never escape the box by a representation error.
    pub fn around(center: [f64; 3], anchors: &[[f64; 3]]) -> Self {
        let mut edges = [[0.0f64; 2]; 3];
        for axis in 0..3 {
            let mut lo = center[axis];
            let mut hi = center[axis];
            for a in anchors {
                lo = lo.min(a[axis]);
                hi = hi.max(a[axis]);
            }
            let half = (hi - center[axis]).abs().max((lo - center[axis]).abs());
            edges[axis] = [(center[axis] - half).min(lo), (center[axis] + half).max(hi)];
        }
        Self {
            min_x: edges[0][0],
            max_x: edges[0][1],
            min_y: edges[1][0],
            max_y: edges[1][1],
            min_z: edges[2][0],
            max_z: edges[2][1],
        }
    }

    /// Inclusive containment on both ends of each axis, AND across axes.
    #[inline]
    pub fn contains(&self, p: [f64; 3]) -> bool {
        p[0] >= self.min_x
            && p[0] <= self.max_x
            && p[1] >= self.min_y
            && p[1] <= self.max_y
            && p[2] >= self.min_z
            && p[2] <= self.max_z
    }

    /// Per-axis `[min, max]` display ranges.
    #[inline]
    pub fn axis_ranges(&self) -> [[f64; 2]; 3] {
        [
            [self.min_x, self.max_x],
            [self.min_y, self.max_y],
            [self.min_z, self.max_z],
        ]
    }
}

/// A boxed neighborhood: the bounds plus the surviving points, their
/// labels, and their original row indices, in dataset order.
#[derive(Clone, Debug, Serialize)]
pub struct Neighborhood {
    pub bounds: BoundingBox,
    pub points: Vec<[f64; 3]>,
    pub labels: Vec<String>,
    pub indices: Vec<usize>,
}

/// Computes the boxed neighborhood of `center_index` given its anchors.
///
/// The exclusion set is `{center} ∪ anchors`; those rows are removed by
/// index before the box filter runs. Output order follows dataset order.
///
/// # Panics
///
/// Panics if `center_index` or any anchor index is out of range.
pub(crate) fn boxed_neighborhood(
    projection: &ProjectionSpace,
    labels: &[String],
    center_index: usize,
    anchor_indices: &[usize],
) -> Neighborhood {
    let n = projection.len();
    assert!(center_index < n, "center index out of bounds");
    assert!(
        anchor_indices.iter().all(|&i| i < n),
        "anchor index out of bounds"
    );

    let center = projection.point(center_index);
    let anchors = projection.points(anchor_indices);
    let bounds = BoundingBox::around(center, &anchors);

    let mut excluded = vec![false; n];
    excluded[center_index] = true;
    for &i in anchor_indices {
        excluded[i] = true;
    }

    let mut points = Vec::new();
    let mut survivors = Vec::new();
    for (i, p) in projection.iter_points().enumerate() {
        if excluded[i] || !bounds.contains(p) {
            continue;
        }
        points.push(p);
        survivors.push(i);
    }
    let labels = survivors.iter().map(|&i| labels[i].clone()).collect();

    debug!(
        "Neighborhood of index {}: {} anchors, {} of {} points inside box",
        center_index,
        anchor_indices.len(),
        survivors.len(),
        n
    );

    Neighborhood {
        bounds,
        points,
        labels,
        indices: survivors,
    }
}
