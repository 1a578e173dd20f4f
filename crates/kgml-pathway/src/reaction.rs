//! Reactions: substrate/product conversions between entries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identifiers::IdentifierMap;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ReactionType {
    Reversible,
    Irreversible,
    Other,
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Reversible => "reversible",
            Self::Irreversible => "irreversible",
            Self::Other => "other",
        };
        write!(f, "{label}")
    }
}

/// One side-member of a reaction: the participating entry plus an optional
/// stoichiometric coefficient.
///
/// Components compare by entry id and name only. The coefficient is carried
/// but deliberately excluded from equality, so reactions that differ only in
/// stoichiometric annotation deduplicate.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct ReactionComponent {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stoichiometry: Option<u32>,
}

impl ReactionComponent {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            stoichiometry: None,
        }
    }
}

impl PartialEq for ReactionComponent {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

/// Unordered equality of two component lists.
fn same_component_set(a: &[ReactionComponent], b: &[ReactionComponent]) -> bool {
    a.len() == b.len() && a.iter().all(|component| b.contains(component))
}

/// A reaction between pathway entries. Names are synthetic (`rn:unknownN`),
/// assigned by the translation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub name: String,
    pub reaction_type: ReactionType,
    pub substrates: Vec<ReactionComponent>,
    pub products: Vec<ReactionComponent>,
    #[serde(default, skip_serializing_if = "IdentifierMap::is_empty")]
    pub identifiers: IdentifierMap,
}

impl Reaction {
    pub fn new(name: impl Into<String>, reaction_type: ReactionType) -> Self {
        Self {
            name: name.into(),
            reaction_type,
            substrates: Vec::new(),
            products: Vec::new(),
            identifiers: IdentifierMap::new(),
        }
    }

    /// Duplicate test: same type, same substrate set, same product set.
    /// Component order and stoichiometric coefficients do not participate.
    pub fn matches(
        &self,
        reaction_type: ReactionType,
        substrates: &[ReactionComponent],
        products: &[ReactionComponent],
    ) -> bool {
        self.reaction_type == reaction_type
            && same_component_set(&self.substrates, substrates)
            && same_component_set(&self.products, products)
    }
}
