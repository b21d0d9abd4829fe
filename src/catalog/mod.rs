//! Prompt catalog: collections of variations of versions, and the persistence contract the
//! editor shell talks to.

use crate::error::CatalogError;

mod memory;
mod model;

pub use memory::MemoryStore;
pub use model::*;

/// The persistence collaborator.
///
/// Plain request/response, no retry. Any failure is reported as a [`CatalogError`] whose
/// display string is meant to be shown to the user as-is.
pub trait PromptStore {
    fn get_collections(&self) -> Result<Vec<Collection>, CatalogError>;

    fn create_collection(&mut self, data: NewCollection) -> Result<Collection, CatalogError>;

    /// Versions of a variation, newest first.
    fn get_versions(&self, variation_id: &str) -> Result<Vec<Version>, CatalogError>;

    fn create_version(&mut self, data: NewVersion) -> Result<CreatedVersion, CatalogError>;

    /// Experiments recorded for a version, newest first.
    fn get_experiments(&self, version_id: &str) -> Result<Vec<Experiment>, CatalogError>;
}
