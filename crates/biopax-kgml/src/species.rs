//! Species registry.
//!
//! The translation covers the three organisms the upstream pathway
//! databases ship curated content for. Lookups run against this fixed
//! registry; the engine resolves a pathway's organism once per pathway and
//! threads it through gene-id mapping and augmentation filtering.

use serde::Serialize;

use biopax_model::BioSource;
use kgml_pathway::IdentifierDb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Species {
    pub scientific_name: &'static str,
    pub common_name: &'static str,
    /// KEGG organism abbreviation, e.g. "hsa".
    pub kegg_abbr: &'static str,
    pub ncbi_tax_id: u32,
    /// UniProt mnemonic suffix, e.g. "_HUMAN".
    pub uniprot_suffix: &'static str,
}

pub const HUMAN: Species = Species {
    scientific_name: "Homo sapiens",
    common_name: "Human",
    kegg_abbr: "hsa",
    ncbi_tax_id: 9606,
    uniprot_suffix: "_HUMAN",
};

pub const MOUSE: Species = Species {
    scientific_name: "Mus musculus",
    common_name: "Mouse",
    kegg_abbr: "mmu",
    ncbi_tax_id: 10090,
    uniprot_suffix: "_MOUSE",
};

pub const RAT: Species = Species {
    scientific_name: "Rattus norvegicus",
    common_name: "Rat",
    kegg_abbr: "rno",
    ncbi_tax_id: 10116,
    uniprot_suffix: "_RAT",
};

const ALL: &[Species] = &[HUMAN, MOUSE, RAT];

impl Species {
    pub fn all() -> &'static [Species] {
        ALL
    }

    pub fn by_kegg_abbr(abbr: &str) -> Option<&'static Species> {
        ALL.iter()
            .find(|species| species.kegg_abbr.eq_ignore_ascii_case(abbr))
    }

    pub fn by_common_name(name: &str) -> Option<&'static Species> {
        ALL.iter()
            .find(|species| species.common_name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn by_scientific_name(name: &str) -> Option<&'static Species> {
        ALL.iter()
            .find(|species| species.scientific_name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn by_ncbi_tax_id(id: &str) -> Option<&'static Species> {
        let id: u32 = id.trim().parse().ok()?;
        ALL.iter().find(|species| species.ncbi_tax_id == id)
    }
}

/// Resolves a biosource against the registry.
///
/// The taxonomy cross-reference decides when present and recognized; names
/// are tried next, against scientific and common names. A hit is final:
/// later misses never downgrade it.
pub fn determine_species(source: &BioSource) -> Option<&'static Species> {
    if let Some(taxon) = &source.taxon {
        if IdentifierDb::from_tag(&taxon.db) == Some(IdentifierDb::NcbiTaxonomy) {
            if let Some(species) = Species::by_ncbi_tax_id(&taxon.id) {
                return Some(species);
            }
        }
    }
    for name in &source.names {
        if let Some(species) =
            Species::by_scientific_name(name).or_else(|| Species::by_common_name(name))
        {
            return Some(species);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use biopax_model::Xref;

    #[test]
    fn registry_lookups() {
        assert_eq!(Species::by_kegg_abbr("hsa"), Some(&HUMAN));
        assert_eq!(Species::by_kegg_abbr("HSA"), Some(&HUMAN));
        assert_eq!(Species::by_common_name("mouse"), Some(&MOUSE));
        assert_eq!(Species::by_scientific_name("Rattus norvegicus"), Some(&RAT));
        assert_eq!(Species::by_ncbi_tax_id(" 9606 "), Some(&HUMAN));
        assert_eq!(Species::by_kegg_abbr("dme"), None);
    }

    #[test]
    fn taxon_xref_decides_first() {
        let source = BioSource::named("Mouse").with_taxon(Xref::new("NCBI Taxonomy", "9606"));
        assert_eq!(determine_species(&source), Some(&HUMAN));
    }

    #[test]
    fn names_resolve_when_taxon_is_unusable() {
        // Unrecognized taxonomy id, but the scientific name still resolves.
        let source =
            BioSource::named("Homo sapiens").with_taxon(Xref::new("NCBI Taxonomy", "999999"));
        assert_eq!(determine_species(&source), Some(&HUMAN));

        let common = BioSource::named("human");
        assert_eq!(determine_species(&common), Some(&HUMAN));

        let unknown = BioSource::named("Drosophila melanogaster");
        assert_eq!(determine_species(&unknown), None);
    }
}
