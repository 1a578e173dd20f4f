//! Pathway entries: the nodes of the graph.
//!
//! Every physical thing a source model mentions (protein, small molecule,
//! complex, referenced sub-pathway, ...) becomes one [`Entry`] with a
//! monotonically assigned numeric id. Group entries list their member
//! entries in `components`; entries participating in reactions carry the
//! reaction names in `reaction`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identifiers::IdentifierMap;

// ============================================================================
// Vocabularies
// ============================================================================

/// KGML entry types. The translation emits `gene`, `compound`, `map`,
/// `group` and `other`; the remaining values complete the format's
/// vocabulary for models assembled by other means.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    Ortholog,
    Enzyme,
    Reaction,
    Gene,
    Genes,
    Group,
    Compound,
    Map,
    Other,
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ortholog => "ortholog",
            Self::Enzyme => "enzyme",
            Self::Reaction => "reaction",
            Self::Gene => "gene",
            Self::Genes => "genes",
            Self::Group => "group",
            Self::Compound => "compound",
            Self::Map => "map",
            Self::Other => "other",
        };
        write!(f, "{label}")
    }
}

/// Gene-level refinement of an entry, beyond the coarse [`EntryType`].
///
/// Distinguishes the sequence-entity kinds a source model separates
/// (protein vs. RNA vs. DNA vs. region thereof) even when they all map to
/// the same KGML entry type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum GeneKind {
    Protein,
    Dna,
    DnaRegion,
    Rna,
    RnaRegion,
    Gene,
    Unknown,
}

impl fmt::Display for GeneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Protein => "protein",
            Self::Dna => "dna",
            Self::DnaRegion => "dna_region",
            Self::Rna => "rna",
            Self::RnaRegion => "rna_region",
            Self::Gene => "gene",
            Self::Unknown => "unknown",
        };
        write!(f, "{label}")
    }
}

// ============================================================================
// Graphics
// ============================================================================

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum GraphicsType {
    Rectangle,
    Circle,
    RoundRectangle,
    Line,
}

impl fmt::Display for GraphicsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::RoundRectangle => "roundrectangle",
            Self::Line => "line",
        };
        write!(f, "{label}")
    }
}

/// Display block of an entry. Coordinates stay unset unless the source
/// carried them; this model never computes layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graphics {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    pub width: u32,
    pub height: u32,
    pub fgcolor: String,
    pub bgcolor: String,
    pub graphics_type: GraphicsType,
}

impl Graphics {
    fn with_shape(
        name: impl Into<String>,
        graphics_type: GraphicsType,
        width: u32,
        height: u32,
        bgcolor: &str,
    ) -> Self {
        Self {
            name: name.into(),
            x: None,
            y: None,
            width,
            height,
            fgcolor: "#000000".to_string(),
            bgcolor: bgcolor.to_string(),
            graphics_type,
        }
    }

    /// Green rectangle, the KEGG convention for gene products.
    pub fn for_gene_product(name: impl Into<String>) -> Self {
        Self::with_shape(name, GraphicsType::Rectangle, 46, 17, "#BFFFBF")
    }

    /// Small circle for compounds.
    pub fn for_compound(name: impl Into<String>) -> Self {
        Self::with_shape(name, GraphicsType::Circle, 8, 8, "#FFFFFF")
    }

    /// Rounded rectangle for a referenced pathway.
    pub fn for_pathway_reference(name: impl Into<String>) -> Self {
        Self::with_shape(name, GraphicsType::RoundRectangle, 46, 17, "#FFFFFF")
    }

    /// Group box for complexes. KGML leaves group graphics unnamed.
    pub fn for_group() -> Self {
        Self::with_shape("undefined", GraphicsType::Rectangle, 46, 17, "#FFFFFF")
    }

    /// Plain rectangle for entries without a more specific shape.
    pub fn for_label(name: impl Into<String>) -> Self {
        Self::with_shape(name, GraphicsType::Rectangle, 46, 17, "#FFFFFF")
    }
}

// ============================================================================
// Entry
// ============================================================================

/// One node of the pathway graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u32,
    /// Consolidated KEGG name: sorted, blank-separated accessions, or an
    /// `unknown{N}` placeholder when nothing could be consolidated.
    pub name: String,
    pub entry_type: EntryType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene_kind: Option<GeneKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Blank-separated names of the reactions this entry takes part in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphics: Option<Graphics>,
    /// Entry ids of group members, for `group` entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compartment: Option<String>,
    #[serde(default, skip_serializing_if = "IdentifierMap::is_empty")]
    pub identifiers: IdentifierMap,
}

impl Entry {
    pub fn new(id: u32, entry_type: EntryType, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            entry_type,
            gene_kind: None,
            link: None,
            reaction: None,
            graphics: None,
            components: Vec::new(),
            compartment: None,
            identifiers: IdentifierMap::new(),
        }
    }

    /// Records membership in a reaction. Names accumulate blank-separated;
    /// re-appending a name the entry already carries is a no-op.
    pub fn append_reaction(&mut self, reaction_name: &str) {
        match &mut self.reaction {
            None => self.reaction = Some(reaction_name.to_string()),
            Some(existing) => {
                if !existing.split_whitespace().any(|n| n == reaction_name) {
                    existing.push(' ');
                    existing.push_str(reaction_name);
                }
            }
        }
    }

    pub fn reaction_names(&self) -> impl Iterator<Item = &str> {
        self.reaction.as_deref().unwrap_or("").split_whitespace()
    }

    /// Duplicate test for construction-mode insertion: equality on every
    /// field except `id`, `name` and `reaction`.
    pub fn equivalent_to(&self, other: &Entry) -> bool {
        self.entry_type == other.entry_type
            && self.gene_kind == other.gene_kind
            && self.link == other.link
            && self.graphics == other.graphics
            && self.components == other.components
            && self.compartment == other.compartment
            && self.identifiers == other.identifiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::IdentifierDb;

    fn gene_entry(id: u32, name: &str) -> Entry {
        let mut e = Entry::new(id, EntryType::Gene, name);
        e.gene_kind = Some(GeneKind::Protein);
        e.graphics = Some(Graphics::for_gene_product("AKT1"));
        e.identifiers.insert(IdentifierDb::EntrezGene, "207");
        e
    }

    #[test]
    fn equivalence_ignores_id_name_and_reaction() {
        let a = gene_entry(1, "hsa:207");
        let mut b = gene_entry(9, "some other name");
        b.append_reaction("rn:unknown1");
        assert!(a.equivalent_to(&b));
        assert!(b.equivalent_to(&a));
    }

    #[test]
    fn equivalence_sees_identifier_differences() {
        let a = gene_entry(1, "hsa:207");
        let mut b = gene_entry(2, "hsa:207");
        b.identifiers.insert(IdentifierDb::GeneSymbol, "AKT1");
        assert!(!a.equivalent_to(&b));
    }

    #[test]
    fn equivalence_sees_component_differences() {
        let mut a = Entry::new(1, EntryType::Group, "grp");
        a.components = vec![2, 3];
        let mut b = Entry::new(4, EntryType::Group, "grp");
        b.components = vec![5, 6];
        assert!(!a.equivalent_to(&b));
    }

    #[test]
    fn append_reaction_deduplicates() {
        let mut e = Entry::new(1, EntryType::Gene, "hsa:207");
        e.append_reaction("rn:unknown1");
        e.append_reaction("rn:unknown2");
        e.append_reaction("rn:unknown1");
        assert_eq!(e.reaction.as_deref(), Some("rn:unknown1 rn:unknown2"));
        assert_eq!(e.reaction_names().count(), 2);
    }
}
