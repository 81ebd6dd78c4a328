//! In-memory institution store backed by a JSON dataset.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::domain::Institution;

use super::error::StoreError;
use super::filters::AttributeFilters;
use super::InstitutionStore;

/// Institution store holding the full dataset in memory.
///
/// Read-only after construction, so it can be shared between request
/// handlers without locking.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    institutions: Vec<Institution>,
    /// Map from id to index in `institutions`.
    by_id: HashMap<u64, usize>,
}

impl MemoryStore {
    /// Create a store from a list of institutions.
    ///
    /// Fails if two institutions share an id.
    pub fn new(institutions: Vec<Institution>) -> Result<Self, StoreError> {
        let mut by_id = HashMap::with_capacity(institutions.len());
        for (idx, inst) in institutions.iter().enumerate() {
            if by_id.insert(inst.id, idx).is_some() {
                return Err(StoreError::DuplicateId(inst.id));
            }
        }

        Ok(Self {
            institutions,
            by_id,
        })
    }

    /// Load a store from a JSON file containing an array of institutions.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: shown.clone(),
            source,
        })?;

        let institutions: Vec<Institution> =
            serde_json::from_str(&json).map_err(|e| StoreError::Parse {
                path: shown.clone(),
                message: e.to_string(),
            })?;

        let store = Self::new(institutions)?;
        info!(
            path = %shown,
            institutions = store.len(),
            located = store.located_count(),
            "Loaded institution dataset"
        );

        Ok(store)
    }

    /// Number of institutions in the store.
    pub fn len(&self) -> usize {
        self.institutions.len()
    }

    /// Returns true if the store holds no institutions.
    pub fn is_empty(&self) -> bool {
        self.institutions.is_empty()
    }

    /// Number of institutions with a known location.
    pub fn located_count(&self) -> usize {
        self.institutions
            .iter()
            .filter(|i| i.location.is_some())
            .count()
    }
}

impl InstitutionStore for MemoryStore {
    fn find(&self, filters: &AttributeFilters) -> Result<Vec<Institution>, StoreError> {
        Ok(self
            .institutions
            .iter()
            .filter(|i| filters.matches(i))
            .cloned()
            .collect())
    }

    fn get(&self, id: u64) -> Result<Option<Institution>, StoreError> {
        Ok(self
            .by_id
            .get(&id)
            .map(|&idx| self.institutions[idx].clone()))
    }
}
