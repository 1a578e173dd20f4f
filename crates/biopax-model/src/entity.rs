//! Entities: the nodes of a BioPAX model.

use serde::{Deserialize, Serialize};

use crate::interaction::InteractionKind;
use crate::pathway::PathwayData;

/// A cross-reference into an external database, as the source file carried
/// it: free-text database tag plus accession.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xref {
    pub db: String,
    pub id: String,
}

impl Xref {
    pub fn new(db: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            db: db.into(),
            id: id.into(),
        }
    }
}

/// A reference to an entity taking part in something (a complex, a
/// conversion side, a control), with the per-participation annotations both
/// BioPAX levels can attach.
///
/// Level 2 wraps participants in `physicalEntityParticipant` elements
/// carrying location and coefficient; Level 3 attaches coefficients through
/// a stoichiometry side table. Both collapse to this one shape, see
/// [`crate::level2`] and [`crate::level3`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// RDF id of the participating entity.
    pub entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stoichiometry: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cellular_location: Option<String>,
}

impl Participant {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            stoichiometry: None,
            cellular_location: None,
        }
    }

    pub fn with_stoichiometry(mut self, coefficient: f64) -> Self {
        self.stoichiometry = Some(coefficient);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.cellular_location = Some(location.into());
        self
    }
}

/// Concrete class of a physical entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicalClass {
    Complex,
    Protein,
    Dna,
    DnaRegion,
    Rna,
    RnaRegion,
    SmallMolecule,
    /// The base `physicalEntity` class used without refinement.
    Generic,
}

/// Payload of a physical entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalData {
    pub class: PhysicalClass,
    /// Complex membership; arbitrarily nested (a member may itself be a
    /// complex). Empty for non-complexes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Participant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cellular_location: Option<String>,
    /// Xrefs of the Level 3 `EntityReference`, flattened in at load time.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference_xrefs: Vec<Xref>,
}

impl PhysicalData {
    pub fn of_class(class: PhysicalClass) -> Self {
        Self {
            class,
            components: Vec::new(),
            cellular_location: None,
            reference_xrefs: Vec::new(),
        }
    }
}

/// The closed union of everything a BioPAX model can contain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityKind {
    Pathway(PathwayData),
    Physical(PhysicalData),
    /// Level 3 `Gene`: a continuant standing in for a locus, without
    /// physical structure.
    Gene,
    Interaction(InteractionKind),
}

/// One element of a BioPAX model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub rdf_id: String,
    /// Literal names. Level 2 fills at most one; Level 3 may carry several.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
    /// Level 2 `SHORT-NAME` / Level 3 `displayName`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub xrefs: Vec<Xref>,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(rdf_id: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            rdf_id: rdf_id.into(),
            names: Vec::new(),
            display_name: None,
            xrefs: Vec::new(),
            kind,
        }
    }

    pub fn protein(rdf_id: impl Into<String>) -> Self {
        Self::new(
            rdf_id,
            EntityKind::Physical(PhysicalData::of_class(PhysicalClass::Protein)),
        )
    }

    pub fn small_molecule(rdf_id: impl Into<String>) -> Self {
        Self::new(
            rdf_id,
            EntityKind::Physical(PhysicalData::of_class(PhysicalClass::SmallMolecule)),
        )
    }

    pub fn complex(rdf_id: impl Into<String>, components: Vec<Participant>) -> Self {
        let mut data = PhysicalData::of_class(PhysicalClass::Complex);
        data.components = components;
        Self::new(rdf_id, EntityKind::Physical(data))
    }

    pub fn gene(rdf_id: impl Into<String>) -> Self {
        Self::new(rdf_id, EntityKind::Gene)
    }

    pub fn pathway(rdf_id: impl Into<String>, data: PathwayData) -> Self {
        Self::new(rdf_id, EntityKind::Pathway(data))
    }

    pub fn interaction(rdf_id: impl Into<String>, kind: InteractionKind) -> Self {
        Self::new(rdf_id, EntityKind::Interaction(kind))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_xref(mut self, xref: Xref) -> Self {
        self.xrefs.push(xref);
        self
    }

    /// The label to display for this entity: the display name when set,
    /// otherwise the shortest literal name.
    pub fn preferred_label(&self) -> Option<&str> {
        if let Some(display) = self.display_name.as_deref() {
            return Some(display);
        }
        self.names
            .iter()
            .min_by_key(|name| name.chars().count())
            .map(String::as_str)
    }

    /// Title for a pathway entity.
    ///
    /// One name is taken as-is. Two names favor the one containing a blank
    /// (usually the spelled-out title), else the second. More than two are
    /// joined with `;`.
    pub fn pathway_title(&self) -> Option<String> {
        match self.names.as_slice() {
            [] => None,
            [only] => Some(only.clone()),
            [first, second] => {
                if first.contains(' ') {
                    Some(first.clone())
                } else {
                    Some(second.clone())
                }
            }
            names => Some(names.join(";")),
        }
    }

    /// Short noun for log and error messages, e.g. "protein" or
    /// "biochemical conversion".
    pub fn kind_label(&self) -> &'static str {
        match &self.kind {
            EntityKind::Pathway(_) => "pathway",
            EntityKind::Gene => "gene",
            EntityKind::Physical(data) => match data.class {
                PhysicalClass::Complex => "complex",
                PhysicalClass::Protein => "protein",
                PhysicalClass::Dna => "dna",
                PhysicalClass::DnaRegion => "dna region",
                PhysicalClass::Rna => "rna",
                PhysicalClass::RnaRegion => "rna region",
                PhysicalClass::SmallMolecule => "small molecule",
                PhysicalClass::Generic => "physical entity",
            },
            EntityKind::Interaction(kind) => kind.kind_label(),
        }
    }
}
