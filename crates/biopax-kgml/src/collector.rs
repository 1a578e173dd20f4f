//! Database-identifier collection.
//!
//! Folds an entity's cross-references into an [`IdentifierMap`], applying
//! the tag quirks curated exports actually contain: "LL" is Entrez Gene,
//! and accessions filed under a bare "KEGG" tag are re-filed into the
//! right KEGG sub-database by accession shape. Unrecognized tags are
//! dropped.

use biopax_model::{Entity, EntityKind, Xref};
use kgml_pathway::{kegg_db_for_accession, EntryType, IdentifierDb, IdentifierMap};

/// Files one cross-reference into the map.
pub(crate) fn add_xref(map: &mut IdentifierMap, xref: &Xref) {
    let tag = xref.db.trim();
    let accession = xref.id.trim();
    if accession.is_empty() {
        return;
    }
    if let Some(db) = IdentifierDb::from_tag(tag) {
        map.insert(db, accession);
    } else if tag.eq_ignore_ascii_case("kegg") {
        match kegg_db_for_accession(accession) {
            Some(db) => map.insert(db, accession),
            None => tracing::warn!(
                accession,
                "KEGG cross-reference with unrecognized accession shape, dropped"
            ),
        }
    } else {
        tracing::debug!(db = tag, accession, "unrecognized database tag, dropped");
    }
}

/// Cross-references of the entity itself, plus (for physical entities) the
/// flattened entity-reference cross-references.
pub(crate) fn xref_identifiers(entity: &Entity) -> IdentifierMap {
    let mut map = IdentifierMap::new();
    for xref in &entity.xrefs {
        add_xref(&mut map, xref);
    }
    if let EntityKind::Physical(data) = &entity.kind {
        for xref in &data.reference_xrefs {
            add_xref(&mut map, xref);
        }
    }
    map
}

/// Everything an entry's identifier annotation should carry: the
/// cross-references plus, for non-map entries, the literal names filed as
/// gene symbols (the symbol mapper picks them up when no Entrez id is
/// present).
pub(crate) fn identifiers_for(entity: &Entity, entry_type: EntryType) -> IdentifierMap {
    let mut map = xref_identifiers(entity);
    if entry_type != EntryType::Map {
        if let Some(display) = &entity.display_name {
            if !display.trim().is_empty() {
                map.insert(IdentifierDb::GeneSymbol, display.trim());
            }
        }
        for name in &entity.names {
            if !name.trim().is_empty() {
                map.insert(IdentifierDb::GeneSymbol, name.trim());
            }
        }
    }
    map
}
