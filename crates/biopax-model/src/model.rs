//! The model container.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entity::{Entity, EntityKind};
use crate::pathway::BioSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BioPaxLevel {
    Level2,
    Level3,
}

impl fmt::Display for BioPaxLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level2 => write!(f, "Level 2"),
            Self::Level3 => write!(f, "Level 3"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate RDF id '{rdf_id}'")]
    DuplicateRdfId { rdf_id: String },
}

/// A complete parsed model: level marker plus entities, in insertion order,
/// indexed by RDF id.
///
/// Insertion order is preserved and iteration follows it, so a translation
/// over the same model is deterministic.
#[derive(Debug, Clone, Serialize)]
pub struct BioPaxModel {
    level: BioPaxLevel,
    entities: Vec<Entity>,
    bio_sources: Vec<BioSource>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl BioPaxModel {
    pub fn new(level: BioPaxLevel) -> Self {
        Self {
            level,
            entities: Vec::new(),
            bio_sources: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn level(&self) -> BioPaxLevel {
        self.level
    }

    pub fn insert(&mut self, entity: Entity) -> Result<(), ModelError> {
        if self.index.contains_key(&entity.rdf_id) {
            return Err(ModelError::DuplicateRdfId {
                rdf_id: entity.rdf_id,
            });
        }
        self.index.insert(entity.rdf_id.clone(), self.entities.len());
        self.entities.push(entity);
        Ok(())
    }

    pub fn get(&self, rdf_id: &str) -> Option<&Entity> {
        self.index.get(rdf_id).map(|&i| &self.entities[i])
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Records a standalone organism annotation. Some exports carry these at
    /// the model level instead of attaching them to a pathway.
    pub fn add_bio_source(&mut self, source: BioSource) {
        self.bio_sources.push(source);
    }

    pub fn bio_sources(&self) -> &[BioSource] {
        &self.bio_sources
    }

    /// Pathway entities, in insertion order.
    pub fn pathways(&self) -> impl Iterator<Item = &Entity> {
        self.entities
            .iter()
            .filter(|entity| matches!(entity.kind, EntityKind::Pathway(_)))
    }

    /// Interaction entities, in insertion order.
    pub fn interactions(&self) -> impl Iterator<Item = &Entity> {
        self.entities
            .iter()
            .filter(|entity| matches!(entity.kind, EntityKind::Interaction(_)))
    }
}
