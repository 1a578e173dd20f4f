//! Pathway payloads: components, step chains, provenance.

use serde::{Deserialize, Serialize};

use crate::entity::Xref;

/// The organism a pathway (or sequence entity) belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BioSource {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
    /// Taxonomy cross-reference, when the source carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxon: Option<Xref>,
}

impl BioSource {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            names: vec![name.into()],
            taxon: None,
        }
    }

    pub fn with_taxon(mut self, taxon: Xref) -> Self {
        self.taxon = Some(taxon);
        self
    }
}

/// Where a pathway's data came from (`dataSource` / `DATA-SOURCE`).
/// Comments frequently carry the upstream URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// One step of a Level 2 pathway step chain.
///
/// `next` holds indices into the owning pathway's `steps` list. Nothing
/// forbids a chain from looping back on itself; walkers must tolerate
/// cycles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathwayStep {
    /// RDF ids of the interactions performed at this step.
    pub interactions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next: Vec<usize>,
}

/// Payload of a pathway entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathwayData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organism: Option<BioSource>,
    /// RDF ids of the pathway's processes and sub-pathways.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<String>,
    /// Level 2 step chain; empty for Level 3 models.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<PathwayStep>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_sources: Vec<DataSource>,
}
