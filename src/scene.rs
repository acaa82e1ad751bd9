//! Visualization-ready scene types.
//!
//! A `Scene` carries everything the presentation layer needs to draw the
//! neighborhood of one entity: three layered point clouds (boxed
//! neighborhood, recommendations, the center entity) and the per-axis
//! display ranges derived from the bounding box. The crate emits
//! serializable data; turning it into an actual plot is the caller's job.

use serde::Serialize;

/// One renderable layer: a point cloud with one label per point.
#[derive(Clone, Debug, Serialize)]
pub struct SceneLayer {
    pub tag: &'static str,
    pub points: Vec<[f64; 3]>,
    pub labels: Vec<String>,
}

/// The per-entity scene: layers ordered back to front, plus the `[min,
/// max]` display range per axis (the bounding box edges, centered on the
/// query entity).
#[derive(Clone, Debug, Serialize)]
pub struct Scene {
    pub neighborhood: SceneLayer,
    pub recommended: SceneLayer,
    pub center: SceneLayer,
    pub axis_ranges: [[f64; 2]; 3],
}

/// The full-dataset scene: all points, all labels, no spatial restriction.
#[derive(Clone, Debug, Serialize)]
pub struct OverviewScene {
    pub points: Vec<[f64; 3]>,
    pub labels: Vec<String>,
}
