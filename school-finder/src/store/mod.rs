//! Institution storage.
//!
//! The search engine never talks to storage directly: request handlers
//! ask an [`InstitutionStore`] for attribute-filtered candidates and pass
//! them to the engine. The bundled [`MemoryStore`] loads a JSON dataset
//! at startup.

mod error;
mod filters;
mod memory;

pub use error::StoreError;
pub use filters::AttributeFilters;
pub use memory::MemoryStore;

use crate::domain::Institution;

/// Source of institution records.
///
/// This abstraction allows handlers to be tested with in-memory data.
pub trait InstitutionStore: Send + Sync {
    /// All institutions matching the filters.
    fn find(&self, filters: &AttributeFilters) -> Result<Vec<Institution>, StoreError>;

    /// A single institution by id.
    fn get(&self, id: u64) -> Result<Option<Institution>, StoreError>;
}
