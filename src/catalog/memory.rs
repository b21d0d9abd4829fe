use super::{
    Author, Collection, CreatedVersion, Experiment, NewCollection, NewVersion, PromptStore,
    Variation, Version,
};
use crate::error::CatalogError;
use tracing::{debug, warn};

/// A [`PromptStore`] that keeps everything in memory. Ids come from a single counter.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    author: Author,
    collections: Vec<Collection>,
    experiments: Vec<Experiment>,
    next_id: u64,
}

impl MemoryStore {
    /// Creates an empty store; new collections are attributed to `author`.
    pub fn new(author: Author) -> Self {
        Self {
            author,
            collections: Vec::new(),
            experiments: Vec::new(),
            next_id: 0,
        }
    }

    /// Adds an empty variation to an existing collection.
    pub fn add_variation(
        &mut self,
        collection_id: &str,
        name: &str,
        description: Option<String>,
    ) -> Result<Variation, CatalogError> {
        let index = self
            .collections
            .iter()
            .position(|c| c.id == collection_id)
            .ok_or_else(|| CatalogError::CollectionNotFound(collection_id.to_string()))?;

        let variation = Variation {
            id: self.allocate_id(),
            name: name.to_string(),
            description,
            versions: Vec::new(),
        };
        self.collections[index].variations.push(variation.clone());
        debug!(collection = collection_id, variation = %variation.id, "Added variation");
        Ok(variation)
    }

    /// Every experiment recorded so far, oldest first.
    pub fn experiments(&self) -> &[Experiment] {
        &self.experiments
    }

    fn allocate_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }

    fn variation_mut(&mut self, variation_id: &str) -> Option<&mut Variation> {
        self.collections
            .iter_mut()
            .flat_map(|c| c.variations.iter_mut())
            .find(|v| v.id == variation_id)
    }
}

impl PromptStore for MemoryStore {
    fn get_collections(&self) -> Result<Vec<Collection>, CatalogError> {
        Ok(self.collections.clone())
    }

    fn create_collection(&mut self, data: NewCollection) -> Result<Collection, CatalogError> {
        if data.name.trim().is_empty() {
            warn!("Rejected collection without a name");
            return Err(CatalogError::CreateFailed("Failed to create collection"));
        }

        let collection = Collection {
            id: self.allocate_id(),
            name: data.name,
            icon: data.icon,
            model: data.model,
            description: data.description,
            is_public: data.is_public,
            fork_count: data.fork_count,
            star_count: data.star_count,
            author: self.author.clone(),
            variations: Vec::new(),
            tags: data.tags,
        };
        debug!(id = %collection.id, name = %collection.name, "Created collection");
        self.collections.push(collection.clone());
        Ok(collection)
    }

    fn get_versions(&self, variation_id: &str) -> Result<Vec<Version>, CatalogError> {
        let versions = self
            .collections
            .iter()
            .flat_map(|c| c.variations.iter())
            .find(|v| v.id == variation_id)
            .map(|v| v.versions.iter().rev().cloned().collect())
            .unwrap_or_default();
        Ok(versions)
    }

    fn create_version(&mut self, data: NewVersion) -> Result<CreatedVersion, CatalogError> {
        if self.variation_mut(&data.variation_id).is_none() {
            warn!(variation = %data.variation_id, "Version targets a missing variation");
            return Err(CatalogError::VariationNotFound(data.variation_id));
        }

        let version = Version {
            id: self.allocate_id(),
            note: data.note,
            prompt: data.prompt,
            output: data.output,
            prompt_tokens: data.prompt_tokens,
            output_tokens: data.output_tokens,
            metadata: data.metadata,
            tags: data.tags,
        };
        let experiment = Experiment::for_version(&version);

        if let Some(variation) = self.variation_mut(&data.variation_id) {
            variation.versions.push(version.clone());
        }
        self.experiments.push(experiment.clone());
        debug!(id = %version.id, variation = %data.variation_id, "Created version");

        Ok(CreatedVersion {
            version,
            experiment,
        })
    }

    fn get_experiments(&self, version_id: &str) -> Result<Vec<Experiment>, CatalogError> {
        Ok(self
            .experiments
            .iter()
            .rev()
            .filter(|e| e.version_id == version_id)
            .cloned()
            .collect())
    }
}
