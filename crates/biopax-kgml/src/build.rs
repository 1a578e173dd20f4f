//! Graph-element builders: entries, reactions, relations.
//!
//! Every builder is mode-aware. In construct mode it deduplicates against
//! the pathway before appending and draws fresh ids/names only on an
//! actual append, so entry ids stay gapless and reaction names stay
//! consecutive. In augment mode nothing is ever created: entries resolve
//! to existing ones by consolidated name, reactions are skipped outright,
//! and relations are only admitted between entries the pathway already
//! has.

use std::collections::{BTreeSet, HashSet};

use biopax_model::{Entity, EntityKind, Participant, PhysicalClass, PhysicalData};
use kgml_pathway::{
    prefixed, Entry, EntryType, GeneKind, Graphics, IdentifierDb, IdentifierMap, Pathway, Reaction,
    ReactionComponent, ReactionType, Relation, RelationSource, RelationType, SubType,
};

use crate::collector;
use crate::context::UNKNOWN_NAME;
use crate::error::TranslateError;
use crate::mapper::gene_id_for_symbol_with_fallbacks;
use crate::translate::Translator;

// ============================================================================
// Entries
// ============================================================================

impl<'m> Translator<'m> {
    /// Builds (or resolves) the entry for a top-level entity.
    ///
    /// Interactions do not become entries; they are dispatched for their
    /// side effects and `None` is returned.
    pub(crate) fn entry_for_entity(
        &mut self,
        pathway: &mut Pathway,
        entity: &Entity,
    ) -> Result<Option<u32>, TranslateError> {
        self.entry_for_entity_in(pathway, entity, None, false)
    }

    /// Resolves a participant's entity and builds its entry, carrying the
    /// participant's cellular location as the compartment hint.
    pub(crate) fn entry_for_participant(
        &mut self,
        pathway: &mut Pathway,
        participant: &Participant,
        complex_member: bool,
    ) -> Result<Option<u32>, TranslateError> {
        let Some(entity) = self.model.get(&participant.entity) else {
            tracing::warn!(
                rdf_id = %participant.entity,
                "participant references no entity in the model, skipped"
            );
            return Ok(None);
        };
        self.entry_for_entity_in(
            pathway,
            entity,
            participant.cellular_location.as_deref(),
            complex_member,
        )
    }

    fn entry_for_entity_in(
        &mut self,
        pathway: &mut Pathway,
        entity: &Entity,
        compartment_hint: Option<&str>,
        complex_member: bool,
    ) -> Result<Option<u32>, TranslateError> {
        match &entity.kind {
            EntityKind::Pathway(_) => Ok(self.build_entry(
                pathway,
                entity,
                EntryType::Map,
                None,
                Vec::new(),
                compartment_hint,
                complex_member,
            )),
            EntityKind::Gene => Ok(self.build_entry(
                pathway,
                entity,
                EntryType::Other,
                Some(GeneKind::Gene),
                Vec::new(),
                compartment_hint,
                complex_member,
            )),
            EntityKind::Physical(data) => {
                self.physical_entry(pathway, entity, data, compartment_hint, complex_member)
            }
            EntityKind::Interaction(_) => {
                self.dispatch_interaction(pathway, entity)?;
                Ok(None)
            }
        }
    }

    fn physical_entry(
        &mut self,
        pathway: &mut Pathway,
        entity: &Entity,
        data: &PhysicalData,
        compartment_hint: Option<&str>,
        complex_member: bool,
    ) -> Result<Option<u32>, TranslateError> {
        let compartment = compartment_hint.or(data.cellular_location.as_deref());
        let (entry_type, gene_kind) = match data.class {
            PhysicalClass::Complex => {
                let components =
                    self.resolve_components(pathway, &entity.rdf_id, &data.components)?;
                return Ok(self.build_entry(
                    pathway,
                    entity,
                    EntryType::Group,
                    None,
                    components,
                    compartment,
                    complex_member,
                ));
            }
            PhysicalClass::Protein => (EntryType::Gene, GeneKind::Protein),
            PhysicalClass::Dna => (EntryType::Other, GeneKind::Dna),
            PhysicalClass::DnaRegion => (EntryType::Other, GeneKind::DnaRegion),
            PhysicalClass::Rna => (EntryType::Other, GeneKind::Rna),
            PhysicalClass::RnaRegion => (EntryType::Other, GeneKind::RnaRegion),
            PhysicalClass::SmallMolecule => (EntryType::Compound, GeneKind::Unknown),
            PhysicalClass::Generic => (EntryType::Other, GeneKind::Unknown),
        };
        Ok(self.build_entry(
            pathway,
            entity,
            entry_type,
            Some(gene_kind),
            Vec::new(),
            compartment,
            complex_member,
        ))
    }

    /// Flattens complex membership to leaf entry ids, depth first. A
    /// member that is itself a complex contributes its own leaves, not a
    /// nested group id. Members are always appended as fresh entries so a
    /// group owns its children outright. A membership cycle is cut at the
    /// repeated complex; a sub-complex shared by two parents still expands
    /// under each.
    pub(crate) fn resolve_components(
        &mut self,
        pathway: &mut Pathway,
        complex_rdf_id: &str,
        components: &[Participant],
    ) -> Result<Vec<u32>, TranslateError> {
        let mut expanding = HashSet::from([complex_rdf_id.to_string()]);
        self.flatten_components(pathway, components, &mut expanding)
    }

    /// `expanding` holds the complexes on the current expansion path.
    fn flatten_components(
        &mut self,
        pathway: &mut Pathway,
        components: &[Participant],
        expanding: &mut HashSet<String>,
    ) -> Result<Vec<u32>, TranslateError> {
        let mut ids = Vec::new();
        for participant in components {
            let Some(entity) = self.model.get(&participant.entity) else {
                tracing::warn!(
                    rdf_id = %participant.entity,
                    "complex component references no entity in the model, skipped"
                );
                continue;
            };
            match &entity.kind {
                EntityKind::Physical(data) if data.class == PhysicalClass::Complex => {
                    if !expanding.insert(entity.rdf_id.clone()) {
                        tracing::warn!(
                            rdf_id = %entity.rdf_id,
                            "complex membership cycles back on itself, member skipped"
                        );
                        continue;
                    }
                    ids.extend(self.flatten_components(pathway, &data.components, expanding)?);
                    expanding.remove(&entity.rdf_id);
                }
                _ => {
                    if let Some(id) = self.entry_for_entity_in(
                        pathway,
                        entity,
                        participant.cellular_location.as_deref(),
                        true,
                    )? {
                        ids.push(id);
                    }
                }
            }
        }
        Ok(ids)
    }

    /// The core entry builder.
    ///
    /// Construct mode deduplicates against existing entries (unless the
    /// entry is a complex member, which always appends) and draws an id
    /// only when appending. Augment mode resolves by consolidated name
    /// and never touches the pathway; placeholder names resolve to
    /// nothing.
    fn build_entry(
        &mut self,
        pathway: &mut Pathway,
        entity: &Entity,
        entry_type: EntryType,
        gene_kind: Option<GeneKind>,
        components: Vec<u32>,
        compartment: Option<&str>,
        complex_member: bool,
    ) -> Option<u32> {
        let identifiers = collector::identifiers_for(entity, entry_type);
        let name = self.consolidated_name(&identifiers);

        if self.ctx.is_augment() {
            if name.starts_with(UNKNOWN_NAME) {
                return None;
            }
            return pathway.best_matching_entry(&name).map(|entry| entry.id);
        }

        let label = display_label(entity);
        let graphics = match entry_type {
            EntryType::Map => Graphics::for_pathway_reference(label),
            EntryType::Compound => Graphics::for_compound(label),
            EntryType::Group | EntryType::Genes => Graphics::for_group(),
            EntryType::Gene | EntryType::Other => Graphics::for_gene_product(label),
            _ => Graphics::for_label(label),
        };

        let mut candidate = Entry::new(0, entry_type, name);
        candidate.gene_kind = gene_kind;
        candidate.graphics = Some(graphics);
        candidate.components = components;
        candidate.compartment = compartment.map(str::to_string);
        candidate.identifiers = identifiers;

        if !complex_member {
            if let Some(existing) = pathway.find_equivalent_entry(&candidate) {
                return Some(existing.id);
            }
        }
        candidate.id = self.ctx.next_entry_id();
        let id = candidate.id;
        pathway.add_entry(candidate);
        Some(id)
    }

    /// Map entry standing in for a participant-less interaction, named by
    /// the placeholder counter and labeled with the interaction's own
    /// names.
    pub(crate) fn placeholder_entry(
        &mut self,
        pathway: &mut Pathway,
        entity: &Entity,
    ) -> Option<u32> {
        let name = self.ctx.next_unknown_name();
        if self.ctx.is_augment() {
            return None;
        }

        let label = entity
            .names
            .iter()
            .map(|name| name.trim().replace(' ', "_"))
            .collect::<Vec<_>>()
            .join(" ");
        let mut candidate = Entry::new(0, EntryType::Map, name);
        candidate.graphics = Some(Graphics::for_pathway_reference(label));

        if let Some(existing) = pathway.find_equivalent_entry(&candidate) {
            return Some(existing.id);
        }
        candidate.id = self.ctx.next_entry_id();
        let id = candidate.id;
        pathway.add_entry(candidate);
        Some(id)
    }

    /// Consolidates an identifier map into the entry's KEGG name: every
    /// KEGG-database accession (prefixed), plus the KEGG genes accession
    /// mapped from Entrez gene ids or, failing those, the first gene
    /// symbol that resolves. Sorted and blank-joined; a placeholder name
    /// when nothing consolidates.
    fn consolidated_name(&mut self, identifiers: &IdentifierMap) -> String {
        let mut accessions: BTreeSet<String> = BTreeSet::new();
        for (db, ids) in identifiers.iter() {
            if db.is_kegg() {
                for id in ids {
                    accessions.insert(prefixed(db, id));
                }
            }
        }

        let mut gene_ids: Vec<u64> = Vec::new();
        if let Some(entrez) = identifiers.get(IdentifierDb::EntrezGene) {
            gene_ids.extend(entrez.iter().filter_map(|id| id.parse::<u64>().ok()));
        } else if let Some(symbols) = identifiers.get(IdentifierDb::GeneSymbol) {
            gene_ids.extend(
                symbols
                    .iter()
                    .find_map(|symbol| gene_id_for_symbol_with_fallbacks(self.mapper, symbol)),
            );
        }

        for gene_id in gene_ids {
            match self.ctx.species {
                Some(species) => match self.mapper.kegg_id_for_gene(gene_id, species) {
                    Some(kegg_id) => {
                        accessions.insert(kegg_id);
                    }
                    None => {
                        tracing::warn!(
                            gene_id,
                            "no KEGG id for gene, using the organism prefix instead"
                        );
                        accessions.insert(format!("{}:{gene_id}", species.kegg_abbr));
                    }
                },
                None => {
                    tracing::debug!(gene_id, "no species resolved, gene id left out of the name");
                }
            }
        }

        if accessions.is_empty() {
            self.ctx.next_unknown_name()
        } else {
            accessions.into_iter().collect::<Vec<_>>().join(" ")
        }
    }

    // ========================================================================
    // Reactions
    // ========================================================================

    /// Builds a reaction from two participant sides, returning its index.
    ///
    /// Left participants become substrates, right participants products.
    /// An existing reaction with the same type and unordered component
    /// sets is reused; the synthetic name is drawn only when appending.
    /// Augment mode builds no reactions at all.
    pub(crate) fn build_reaction(
        &mut self,
        pathway: &mut Pathway,
        left: &[Participant],
        right: &[Participant],
        reaction_type: ReactionType,
        identifiers: IdentifierMap,
    ) -> Result<Option<usize>, TranslateError> {
        if self.ctx.is_augment() {
            return Ok(None);
        }

        let substrates = self.reaction_side(pathway, left)?;
        let products = self.reaction_side(pathway, right)?;

        if let Some(index) = pathway.find_reaction(reaction_type, &substrates, &products) {
            return Ok(Some(index));
        }

        let mut reaction = Reaction::new(self.ctx.next_reaction_name(), reaction_type);
        reaction.substrates = substrates;
        reaction.products = products;
        reaction.identifiers = identifiers;
        pathway.add_reaction(reaction);
        Ok(Some(pathway.reactions.len() - 1))
    }

    fn reaction_side(
        &mut self,
        pathway: &mut Pathway,
        participants: &[Participant],
    ) -> Result<Vec<ReactionComponent>, TranslateError> {
        let mut side = Vec::new();
        for participant in participants {
            let Some(id) = self.entry_for_participant(pathway, participant, false)? else {
                continue;
            };
            let name = pathway
                .entry_for_id(id)
                .map(|entry| entry.name.clone())
                .unwrap_or_default();
            let mut component = ReactionComponent::new(id, name);
            component.stoichiometry = participant
                .stoichiometry
                .map(|coefficient| coefficient as u32)
                .filter(|&coefficient| coefficient > 0);
            side.push(component);
        }
        Ok(side)
    }

    // ========================================================================
    // Relations
    // ========================================================================

    /// Builds a relation between two entries, returning its index.
    ///
    /// A relation with the same ordered endpoints and type is reused and
    /// only grows its subtype set. A new relation always carries at least
    /// one subtype. Augment mode drops self-relations and relations whose
    /// endpoints are not both in the pathway, and tallies what it did.
    pub(crate) fn build_relation(
        &mut self,
        pathway: &mut Pathway,
        entry1: u32,
        entry2: u32,
        relation_type: RelationType,
        subtype: Option<SubType>,
        identifiers: IdentifierMap,
    ) -> Option<usize> {
        if let Some(index) = pathway.find_relation(entry1, entry2, relation_type) {
            if let Some(subtype) = subtype {
                let grew = pathway.relations[index].add_subtype(subtype);
                if grew && self.ctx.is_augment() {
                    self.ctx.report.merged_subtypes += 1;
                    pathway.relations[index].source = Some(RelationSource::Merged);
                }
            }
            return Some(index);
        }

        let mut relation = Relation::new(entry1, entry2, relation_type);
        relation.add_subtype(subtype.unwrap_or(SubType::MissingInteraction));
        relation.identifiers = identifiers;

        if self.ctx.is_augment() {
            if !pathway.contains_entry(entry1) || !pathway.contains_entry(entry2) {
                return None;
            }
            if entry1 == entry2 {
                self.ctx.report.self_relations += 1;
                return None;
            }
            relation.source = Some(RelationSource::Augmented);
            self.ctx.report.new_relations += 1;
        }
        pathway.add_relation(relation);
        Some(pathway.relations.len() - 1)
    }
}

/// Graphics label: the preferred entity name with blanks replaced by
/// underscores.
fn display_label(entity: &Entity) -> String {
    entity
        .preferred_label()
        .map(|label| label.trim().replace(' ', "_"))
        .unwrap_or_default()
}
