//! Level 3 adaption.
//!
//! Level 3 references physical entities directly and moves stoichiometric
//! coefficients out to `Stoichiometry` side elements on the conversion.
//! This module folds such a side table back onto unified
//! [`Participant`]s.

use serde::{Deserialize, Serialize};

use crate::entity::Participant;

/// A parsed `Stoichiometry` element: coefficient for one physical entity
/// of the owning conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stoichiometry {
    pub physical_entity: String,
    pub coefficient: f64,
}

impl Stoichiometry {
    pub fn new(physical_entity: impl Into<String>, coefficient: f64) -> Self {
        Self {
            physical_entity: physical_entity.into(),
            coefficient,
        }
    }
}

/// Copies coefficients from the side table onto matching participants.
///
/// Matching is by entity RDF id, first table row wins. Participants without
/// a row keep `None`; coefficients already present are left alone.
pub fn apply_stoichiometry(participants: &mut [Participant], table: &[Stoichiometry]) {
    for participant in participants.iter_mut() {
        if participant.stoichiometry.is_some() {
            continue;
        }
        if let Some(row) = table
            .iter()
            .find(|row| row.physical_entity == participant.entity)
        {
            participant.stoichiometry = Some(row.coefficient);
        }
    }
}
