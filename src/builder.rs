//! Builder for [`RecSpace`]: collects the three precomputed inputs,
//! validates them against each other, and assembles the immutable serving
//! bundle. All shape and bijection defects surface here as typed errors;
//! after `build()` succeeds the query path has nothing left to validate.

use log::{debug, info};

use crate::core::{EmbeddingSpace, RecSpace};
use crate::error::{RecError, RecResult};
use crate::index::EntityIndex;
use crate::projection::{ProjectionSpace, PROJECTION_DIMS};

/// K used by scene assembly when the caller does not pass one.
pub const DEFAULT_K: usize = 10;

pub struct RecSpaceBuilder {
    embeddings: Vec<Vec<f64>>,
    projection: Vec<Vec<f64>>,
    entities: Vec<String>,
    default_k: usize,
}

impl Default for RecSpaceBuilder {
    fn default() -> Self {
        debug!("Creating RecSpaceBuilder with default_k={}", DEFAULT_K);
        Self {
            embeddings: Vec::new(),
            projection: Vec::new(),
            entities: Vec::new(),
            default_k: DEFAULT_K,
        }
    }
}

impl RecSpaceBuilder {
    pub fn new() -> Self {
        info!("Initializing new RecSpaceBuilder");
        Self::default()
    }

    /// Supplies the `[N, D]` embedding rows.
    pub fn with_embeddings(mut self, rows: Vec<Vec<f64>>) -> Self {
        debug!("Builder received {} embedding rows", rows.len());
        self.embeddings = rows;
        self
    }

    /// Supplies the `[N, 3]` projected-coordinate rows, row-aligned with
    /// the embeddings.
    pub fn with_projection(mut self, rows: Vec<Vec<f64>>) -> Self {
        debug!("Builder received {} projection rows", rows.len());
        self.projection = rows;
        self
    }

    /// Supplies the ordered entity name list; position `i` names row `i`
    /// of both matrices.
    pub fn with_entities(mut self, names: Vec<String>) -> Self {
        debug!("Builder received {} entity names", names.len());
        self.entities = names;
        self
    }

    /// Overrides the default recommendation count used by scene assembly.
    pub fn with_default_k(mut self, k: usize) -> Self {
        info!("Setting default_k: {}", k);
        self.default_k = k;
        self
    }

    /// Validates the inputs against each other and builds the space.
    ///
    /// Checks, in order: non-empty rectangular embeddings, projection
    /// width of exactly 3, row-count agreement across all three inputs,
    /// and name bijectivity (no two names may share a lowercase key).
    pub fn build(self) -> RecResult<RecSpace> {
        let n = self.embeddings.len();
        if n == 0 {
            return Err(RecError::EmptyDataset("embeddings"));
        }
        let d = self.embeddings[0].len();
        if d == 0 {
            return Err(RecError::EmptyDataset("embedding features"));
        }
        for (row, r) in self.embeddings.iter().enumerate() {
            if r.len() != d {
                return Err(RecError::RaggedMatrix {
                    row,
                    expected: d,
                    actual: r.len(),
                });
            }
        }

        if self.projection.is_empty() {
            return Err(RecError::EmptyDataset("projection"));
        }
        if let Some(bad) = self
            .projection
            .iter()
            .find(|r| r.len() != PROJECTION_DIMS)
        {
            return Err(RecError::ProjectionWidth { actual: bad.len() });
        }
        if self.projection.len() != n {
            return Err(RecError::ShapeMismatch {
                what: "projection",
                expected: n,
                actual: self.projection.len(),
            });
        }
        if self.entities.len() != n {
            return Err(RecError::ShapeMismatch {
                what: "entity names",
                expected: n,
                actual: self.entities.len(),
            });
        }

        info!(
            "Building RecSpace: {} entities, {} embedding features, default_k={}",
            n, d, self.default_k
        );

        let index = EntityIndex::from_names(self.entities)?;
        let embeddings = EmbeddingSpace::from_rows(self.embeddings);
        let projection = ProjectionSpace::from_rows(self.projection);

        info!("RecSpace build completed successfully");
        Ok(RecSpace::new(embeddings, projection, index, self.default_k))
    }
}
