//! recspace: nearest-neighbor recommendations over precomputed embeddings
//! with a bounded 3D neighborhood for visualization.
//!
//! The crate serves two query types over a fixed set of entities, each
//! carrying one embedding vector (`[N, D]`) and one projected 3D
//! coordinate (`[N, 3]`), both produced upstream and consumed here as
//! immutable inputs:
//!
//! - **Similarity ranking** — rank all entities by raw dot product against
//!   a query entity's embedding and return the top K, self excluded.
//! - **Spatial neighborhood** — size an axis-aligned box around the query
//!   entity's recommendations in projection space and filter the full
//!   point cloud to it, excluding the query and its recommendations by
//!   index.
//!
//! Scene assembly layers the two results into a serializable structure the
//! presentation layer can render directly. Everything is synchronous and
//! read-only after load: a [`core::RecSpace`] can be shared across request
//! threads without locking.
//!
//! # Quick start
//!
//! ```
//! use recspace::builder::RecSpaceBuilder;
//!
//! let space = RecSpaceBuilder::new()
//!     .with_embeddings(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]])
//!     .with_projection(vec![
//!         vec![0.0, 0.0, 0.0],
//!         vec![1.0, 0.0, 0.0],
//!         vec![0.0, 1.0, 0.0],
//!     ])
//!     .with_entities(vec!["rust".into(), "python".into(), "golang".into()])
//!     .build()
//!     .unwrap();
//!
//! let recs = space.recommend("rust", 2).unwrap();
//! assert_eq!(recs.len(), 2);
//! let scene = space.scene("rust", Some(2)).unwrap();
//! assert_eq!(scene.center.labels, vec!["rust"]);
//! ```

pub mod builder;
pub mod core;
pub mod dataset;
pub mod error;
pub mod index;
pub mod projection;
pub mod recommend;
pub mod scene;
pub mod spatial;

pub use crate::builder::RecSpaceBuilder;
pub use crate::core::RecSpace;
pub use crate::error::{RecError, RecResult};
pub use crate::recommend::{Recommendation, Recommendations};
pub use crate::spatial::{BoundingBox, Neighborhood};

#[cfg(test)]
mod tests;
