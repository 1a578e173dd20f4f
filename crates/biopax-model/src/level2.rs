//! Level 2 adaption.
//!
//! Level 2 never references physical entities directly from interactions or
//! complexes; it goes through `physicalEntityParticipant` wrapper elements
//! that carry the location and the stoichiometric coefficient. This module
//! turns those wrappers into the unified [`Participant`] shape.

use serde::{Deserialize, Serialize};

use crate::entity::Participant;

/// A parsed `physicalEntityParticipant`.
///
/// `physical_entity` is optional because real exports omit it now and then;
/// such wrappers resolve to no participant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhysicalEntityParticipant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_entity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cellular_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stoichiometric_coefficient: Option<f64>,
}

impl PhysicalEntityParticipant {
    pub fn of(physical_entity: impl Into<String>) -> Self {
        Self {
            physical_entity: Some(physical_entity.into()),
            cellular_location: None,
            stoichiometric_coefficient: None,
        }
    }
}

/// Unwraps a participant wrapper; `None` when it references no entity.
pub fn participant(wrapper: &PhysicalEntityParticipant) -> Option<Participant> {
    let entity = wrapper.physical_entity.as_deref()?;
    Some(Participant {
        entity: entity.to_string(),
        stoichiometry: wrapper.stoichiometric_coefficient,
        cellular_location: wrapper.cellular_location.clone(),
    })
}
