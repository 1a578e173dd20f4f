//! Relations: typed, subtyped edges between entries.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identifiers::IdentifierMap;

/// KGML relation types. `PPrel` links gene products, `GErel` expression
/// pairs, `maplink` connects an entry to a referenced pathway map.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RelationType {
    #[serde(rename = "ECrel")]
    Ecrel,
    #[serde(rename = "PPrel")]
    Pprel,
    #[serde(rename = "GErel")]
    Gerel,
    #[serde(rename = "PCrel")]
    Pcrel,
    #[serde(rename = "maplink")]
    Maplink,
    #[serde(rename = "other")]
    Other,
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ecrel => "ECrel",
            Self::Pprel => "PPrel",
            Self::Gerel => "GErel",
            Self::Pcrel => "PCrel",
            Self::Maplink => "maplink",
            Self::Other => "other",
        };
        write!(f, "{label}")
    }
}

/// The closed KGML subtype vocabulary.
///
/// A relation carries at least one of these. `MissingInteraction` is the
/// designated tag for edges whose interaction kind could not be classified.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SubType {
    Compound,
    HiddenCompound,
    Activation,
    Inhibition,
    Expression,
    Repression,
    IndirectEffect,
    StateChange,
    Binding,
    Association,
    BindingAssociation,
    Dissociation,
    MissingInteraction,
    Phosphorylation,
    Dephosphorylation,
    Glycosylation,
    Ubiquitination,
    Methylation,
}

impl SubType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Compound => "compound",
            Self::HiddenCompound => "hidden compound",
            Self::Activation => "activation",
            Self::Inhibition => "inhibition",
            Self::Expression => "expression",
            Self::Repression => "repression",
            Self::IndirectEffect => "indirect effect",
            Self::StateChange => "state change",
            Self::Binding => "binding",
            Self::Association => "association",
            Self::BindingAssociation => "binding/association",
            Self::Dissociation => "dissociation",
            Self::MissingInteraction => "missing interaction",
            Self::Phosphorylation => "phosphorylation",
            Self::Dephosphorylation => "dephosphorylation",
            Self::Glycosylation => "glycosylation",
            Self::Ubiquitination => "ubiquitination",
            Self::Methylation => "methylation",
        }
    }

    /// The KGML edge notation, where one exists. Compound subtypes carry an
    /// entry id instead of a glyph and return `None`.
    pub fn edge(self) -> Option<&'static str> {
        match self {
            Self::Compound | Self::HiddenCompound => None,
            Self::Activation | Self::Expression => Some("-->"),
            Self::Inhibition | Self::Repression => Some("--|"),
            Self::IndirectEffect => Some("..>"),
            Self::StateChange => Some("..."),
            Self::Binding | Self::Association | Self::BindingAssociation => Some("---"),
            Self::Dissociation => Some("-+-"),
            Self::MissingInteraction => Some("-/-"),
            Self::Phosphorylation => Some("+p"),
            Self::Dephosphorylation => Some("-p"),
            Self::Glycosylation => Some("+g"),
            Self::Ubiquitination => Some("+u"),
            Self::Methylation => Some("+m"),
        }
    }
}

impl fmt::Display for SubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How an augmentation run touched a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationSource {
    /// Newly added by an augmentation run.
    Augmented,
    /// Pre-existing; an augmentation run extended its subtype set.
    Merged,
}

/// A directed, typed edge between two entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub entry1: u32,
    pub entry2: u32,
    pub relation_type: RelationType,
    pub subtypes: BTreeSet<SubType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<RelationSource>,
    #[serde(default, skip_serializing_if = "IdentifierMap::is_empty")]
    pub identifiers: IdentifierMap,
}

impl Relation {
    pub fn new(entry1: u32, entry2: u32, relation_type: RelationType) -> Self {
        Self {
            entry1,
            entry2,
            relation_type,
            subtypes: BTreeSet::new(),
            source: None,
            identifiers: IdentifierMap::new(),
        }
    }

    /// Adds a subtype, reporting whether the set grew.
    pub fn add_subtype(&mut self, subtype: SubType) -> bool {
        self.subtypes.insert(subtype)
    }

    /// Duplicate test: endpoints (ordered) and relation type.
    pub fn matches(&self, entry1: u32, entry2: u32, relation_type: RelationType) -> bool {
        self.entry1 == entry1 && self.entry2 == entry2 && self.relation_type == relation_type
    }
}
