//! Entity directory — read-only view of the entity store, keyed by id.

use rustc_hash::FxHashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::core::pronoun::{self, PronounError};
use crate::schema::entity::{Entity, EntityId};

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("pronoun error: {0}")]
    Pronoun(#[from] PronounError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("entity not found: {0}")]
    EntityNotFound(EntityId),
}

/// Entity records loaded from the store.
#[derive(Debug, Clone, Default)]
pub struct EntityDirectory {
    entities: FxHashMap<EntityId, Entity>,
}

impl EntityDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity, replacing any existing record with the same id.
    pub fn insert(&mut self, entity: Entity) -> Option<Entity> {
        self.entities.insert(entity.id, entity)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities sorted by id.
    pub fn entities(&self) -> Vec<&Entity> {
        let mut all: Vec<&Entity> = self.entities.values().collect();
        all.sort_by_key(|e| e.id.0);
        all
    }

    /// Load a directory from a RON file holding a list of entities.
    pub fn load_from_ron(path: &Path) -> Result<EntityDirectory, DirectoryError> {
        let contents = std::fs::read_to_string(path)?;
        let directory = Self::parse_ron(&contents)?;
        debug!(path = %path.display(), count = directory.len(), "loaded entity directory");
        Ok(directory)
    }

    /// Parse a directory from a RON list of entities. Later records
    /// override earlier ones with the same id.
    pub fn parse_ron(input: &str) -> Result<EntityDirectory, DirectoryError> {
        let raw: Vec<Entity> = ron::from_str(input)?;
        let mut directory = EntityDirectory::new();
        for entity in raw {
            directory.insert(entity);
        }
        Ok(directory)
    }

    /// Resolve `role` for the entity stored under `id`.
    ///
    /// A missing record is an error; it is never replaced by the
    /// default "nobody" entity.
    pub fn resolve(&self, id: EntityId, role: &str) -> Result<String, DirectoryError> {
        let entity = self.get(id).ok_or(DirectoryError::EntityNotFound(id))?;
        Ok(pronoun::resolve(Some(entity), role)?)
    }
}
