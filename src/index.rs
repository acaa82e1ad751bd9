//! Bidirectional entity name ↔ row index mapping.
//!
//! Names are matched case-insensitively: the lookup key is the lowercased
//! name, while the display name keeps the casing it was loaded with. The
//! mapping is a bijection over `[0, N)`, validated at construction, and is
//! immutable afterwards.

use std::collections::HashMap;

use log::debug;

use crate::error::{RecError, RecResult};

/// Immutable bijection between entity names and row indices.
///
/// Row `i` of the embedding and projection matrices belongs to the entity
/// at position `i` of the name list handed to [`EntityIndex::from_names`].
#[derive(Clone, Debug, Default)]
pub struct EntityIndex {
    names: Vec<String>,
    lookup: HashMap<String, usize>,
}

impl EntityIndex {
    /// Builds the index from an ordered name list.
    ///
    /// Fails if the list is empty or two names collapse to the same
    /// lowercase key, which would make name lookups ambiguous.
    pub fn from_names(names: Vec<String>) -> RecResult<Self> {
        if names.is_empty() {
            return Err(RecError::EmptyDataset("entity name list"));
        }
        let mut lookup = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if lookup.insert(name.to_lowercase(), i).is_some() {
                return Err(RecError::DuplicateEntity { name: name.clone() });
            }
        }
        debug!("Entity index built with {} names", names.len());
        Ok(Self { names, lookup })
    }

    /// Resolves a name to its row index, case-insensitively.
    ///
    /// `None` means the entity is unknown — a normal outcome, not an error.
    #[inline]
    pub fn resolve(&self, name: &str) -> Option<usize> {
        self.lookup.get(&name.to_lowercase()).copied()
    }

    /// Returns the display name for a row index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    /// All display names in row order.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of entities in the index.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
