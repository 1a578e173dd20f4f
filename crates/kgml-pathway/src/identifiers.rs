//! Database-identifier vocabulary and per-element identifier annotations.
//!
//! Cross-references arrive from source models as free-text database tags
//! ("Entrez Gene", "LL", "KEGG compound", ...). [`IdentifierDb::from_tag`]
//! normalizes those tags into a closed vocabulary; unrecognized tags map to
//! `None` and are dropped by callers. Accessions filed under a bare "KEGG"
//! tag are re-filed by shape via [`kegg_db_for_accession`].

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Database vocabulary
// ============================================================================

/// The identifier databases the translation understands.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierDb {
    KeggGenes,
    KeggCompound,
    KeggDrug,
    KeggGlycan,
    KeggOrthology,
    EntrezGene,
    GeneSymbol,
    NcbiTaxonomy,
    UniProt,
    Chebi,
    PubChem,
    Ensembl,
    GeneOntology,
    Reactome,
    PubMed,
}

impl IdentifierDb {
    /// Normalizes a free-text database tag.
    ///
    /// Matching is case-insensitive and ignores blanks, underscores and
    /// dashes, so "Entrez Gene", "entrez_gene" and "EntrezGene" all resolve
    /// to [`IdentifierDb::EntrezGene`]. The legacy LocusLink tag "LL" is an
    /// alias for Entrez Gene.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let key: String = tag
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "kegggenes" | "kegggene" => Some(Self::KeggGenes),
            "keggcompound" => Some(Self::KeggCompound),
            "keggdrug" => Some(Self::KeggDrug),
            "keggglycan" => Some(Self::KeggGlycan),
            "keggorthology" | "keggortholog" | "ko" => Some(Self::KeggOrthology),
            "entrezgene" | "entrez" | "ll" | "locuslink" => Some(Self::EntrezGene),
            "genesymbol" | "symbol" | "hgncsymbol" => Some(Self::GeneSymbol),
            "ncbitaxonomy" | "taxonomy" | "taxon" | "newttaxonomy" => Some(Self::NcbiTaxonomy),
            "uniprot" | "uniprotkb" => Some(Self::UniProt),
            "chebi" => Some(Self::Chebi),
            "pubchem" | "pubchemcompound" | "pubchemsubstance" => Some(Self::PubChem),
            "ensembl" => Some(Self::Ensembl),
            "geneontology" | "go" => Some(Self::GeneOntology),
            "reactome" => Some(Self::Reactome),
            "pubmed" => Some(Self::PubMed),
            _ => None,
        }
    }

    /// True for the five KEGG sub-databases whose accessions contribute to a
    /// consolidated KEGG name.
    pub fn is_kegg(self) -> bool {
        matches!(
            self,
            Self::KeggGenes
                | Self::KeggCompound
                | Self::KeggDrug
                | Self::KeggGlycan
                | Self::KeggOrthology
        )
    }

    /// The KEGG name prefix for accessions of this database that lack one.
    ///
    /// KEGG Genes accessions carry an organism prefix of their own
    /// ("hsa:1234"), so no fixed prefix applies.
    pub fn kegg_prefix(self) -> Option<&'static str> {
        match self {
            Self::KeggCompound => Some("cpd"),
            Self::KeggDrug => Some("dr"),
            Self::KeggGlycan => Some("gl"),
            Self::KeggOrthology => Some("ko"),
            _ => None,
        }
    }
}

impl fmt::Display for IdentifierDb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::KeggGenes => "KEGG Genes",
            Self::KeggCompound => "KEGG Compound",
            Self::KeggDrug => "KEGG Drug",
            Self::KeggGlycan => "KEGG Glycan",
            Self::KeggOrthology => "KEGG Orthology",
            Self::EntrezGene => "Entrez Gene",
            Self::GeneSymbol => "Gene Symbol",
            Self::NcbiTaxonomy => "NCBI Taxonomy",
            Self::UniProt => "UniProt",
            Self::Chebi => "ChEBI",
            Self::PubChem => "PubChem",
            Self::Ensembl => "Ensembl",
            Self::GeneOntology => "Gene Ontology",
            Self::Reactome => "Reactome",
            Self::PubMed => "PubMed",
        };
        write!(f, "{label}")
    }
}

/// Infers the KEGG sub-database from the shape of an accession filed under a
/// bare "KEGG" tag.
///
/// `C`/`D`/`G`/`K` followed by digits are compound, drug, glycan and
/// orthology accessions; anything containing a `:` is an organism-prefixed
/// genes accession. Other shapes are unrecognized.
pub fn kegg_db_for_accession(accession: &str) -> Option<IdentifierDb> {
    if accession.contains(':') {
        return Some(IdentifierDb::KeggGenes);
    }
    let rest = accession.get(1..)?;
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match accession.as_bytes()[0] {
        b'C' => Some(IdentifierDb::KeggCompound),
        b'D' => Some(IdentifierDb::KeggDrug),
        b'G' => Some(IdentifierDb::KeggGlycan),
        b'K' => Some(IdentifierDb::KeggOrthology),
        _ => None,
    }
}

/// Prepends the database's KEGG prefix when the accession has none.
///
/// "C00031" under KEGG Compound becomes "cpd:C00031"; accessions already
/// carrying a `:` and databases without a fixed prefix pass through.
pub fn prefixed(db: IdentifierDb, accession: &str) -> String {
    match db.kegg_prefix() {
        Some(prefix) if !accession.contains(':') => format!("{prefix}:{accession}"),
        _ => accession.to_string(),
    }
}

// ============================================================================
// Per-element identifier annotations
// ============================================================================

/// Database accessions attached to a pathway element, keyed by database.
///
/// Ordered on both levels so iteration (and everything derived from it, such
/// as consolidated KEGG names) is deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierMap(BTreeMap<IdentifierDb, BTreeSet<String>>);

impl IdentifierMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, db: IdentifierDb, accession: impl Into<String>) {
        self.0.entry(db).or_default().insert(accession.into());
    }

    /// Merges every accession of `other` into `self`.
    pub fn extend_from(&mut self, other: &IdentifierMap) {
        for (db, accessions) in &other.0 {
            let set = self.0.entry(*db).or_default();
            for accession in accessions {
                set.insert(accession.clone());
            }
        }
    }

    pub fn get(&self, db: IdentifierDb) -> Option<&BTreeSet<String>> {
        self.0.get(&db)
    }

    pub fn contains(&self, db: IdentifierDb) -> bool {
        self.0.contains_key(&db)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (IdentifierDb, &BTreeSet<String>)> {
        self.0.iter().map(|(db, accessions)| (*db, accessions))
    }
}
