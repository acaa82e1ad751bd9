//! The loading collaborator: reads the precomputed artifacts from disk and
//! hands them to the builder.
//!
//! Three JSON files make up a dataset:
//!
//! - an entity dictionary holding a two-element array `[d, inv_d]`, where
//!   `d` maps index-as-string to display name and `inv_d` maps lowercased
//!   name back to index;
//! - the `[N, D]` embedding matrix as a 2D array of numbers;
//! - the `[N, 3]` projection matrix in the same layout.
//!
//! Loading validates each file in isolation (rectangularity, index
//! contiguity, dictionary agreement) and then cross-validates shapes via
//! the builder. Every failure is a typed [`RecError`]; nothing here
//! panics.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info};

use crate::builder::RecSpaceBuilder;
use crate::core::RecSpace;
use crate::error::{RecError, RecResult};
use crate::index::EntityIndex;

/// Reads and validates the entity dictionary file.
///
/// The file layout is the `[d, inv_d]` pair described in the module docs.
/// Both directions must agree: `d` must cover indices `0..N` without gaps,
/// and `inv_d[name.to_lowercase()]` must point back at `d`'s index.
pub fn load_entities<P: AsRef<Path>>(path: P) -> RecResult<EntityIndex> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let (forward, inverse): (HashMap<String, String>, HashMap<String, usize>) =
        serde_json::from_reader(reader)?;
    debug!(
        "Entity dictionary parsed: {} forward, {} inverse entries",
        forward.len(),
        inverse.len()
    );

    let n = forward.len();
    let mut names = Vec::with_capacity(n);
    for index in 0..n {
        let name = forward
            .get(&index.to_string())
            .ok_or(RecError::IndexGap { index })?;
        names.push(name.clone());
    }

    for (index, name) in names.iter().enumerate() {
        match inverse.get(&name.to_lowercase()) {
            Some(&back) if back == index => {}
            other => {
                return Err(RecError::EntityMapMismatch {
                    name: name.clone(),
                    forward: index,
                    inverse: other.copied(),
                });
            }
        }
    }

    info!("Loaded entity dictionary with {} entries", n);
    EntityIndex::from_names(names)
}

/// Reads a 2D numeric JSON array, validating it rectangular and non-empty.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> RecResult<Vec<Vec<f64>>> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let rows: Vec<Vec<f64>> = serde_json::from_reader(reader)?;
    if rows.is_empty() {
        return Err(RecError::EmptyDataset("matrix rows"));
    }
    let width = rows[0].len();
    if width == 0 {
        return Err(RecError::EmptyDataset("matrix columns"));
    }
    for (row, r) in rows.iter().enumerate() {
        if r.len() != width {
            return Err(RecError::RaggedMatrix {
                row,
                expected: width,
                actual: r.len(),
            });
        }
    }
    debug!("Loaded matrix of shape [{}, {}]", rows.len(), width);
    Ok(rows)
}

/// Loads all three artifacts and builds a ready-to-serve [`RecSpace`].
pub fn load_recspace<P: AsRef<Path>>(
    entities_path: P,
    embeddings_path: P,
    projection_path: P,
) -> RecResult<RecSpace> {
    info!("Loading dataset");
    let index = load_entities(entities_path)?;
    let embeddings = load_matrix(embeddings_path)?;
    let projection = load_matrix(projection_path)?;

    RecSpaceBuilder::new()
        .with_entities(index.names().to_vec())
        .with_embeddings(embeddings)
        .with_projection(projection)
        .build()
}
