//! Pathway orchestration.
//!
//! [`Translator`] drives a whole run: it resolves the species, builds the
//! pathway shell, walks step chains and components, and hands every
//! component to the dispatcher. Counters live in a per-run context, so
//! one translator can be reused and two translators never interfere.

use std::collections::HashSet;

use biopax_model::{BioPaxModel, Entity, EntityKind, PathwayData};
use kgml_pathway::Pathway;

use crate::collector;
use crate::context::{AugmentReport, TranslationContext, TranslationMode, UNKNOWN_NAME};
use crate::error::TranslateError;
use crate::mapper::IdentifierMapper;
use crate::species::{determine_species, Species};

/// Translates one BioPAX model into KGML-style pathway graphs.
///
/// The translator borrows the model and an identifier mapper; all mutable
/// run state is internal and reset at the start of every public call.
pub struct Translator<'m> {
    pub(crate) model: &'m BioPaxModel,
    pub(crate) mapper: &'m dyn IdentifierMapper,
    pub(crate) ctx: TranslationContext,
}

impl<'m> Translator<'m> {
    pub fn new(model: &'m BioPaxModel, mapper: &'m dyn IdentifierMapper) -> Self {
        Self {
            model,
            mapper,
            ctx: TranslationContext::new(TranslationMode::Construct, None),
        }
    }

    /// Entities and pathway components skipped as unsupported constructs
    /// in the most recent call.
    pub fn skipped_constructs(&self) -> usize {
        self.ctx.skipped_constructs
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Translates every pathway of the model, one target pathway per
    /// source pathway. A model without pathway objects translates as one
    /// flat pathway named `fallback_name` over all of its entities.
    /// Pathways that come out with no entries, reactions and relations
    /// are discarded.
    pub fn translate(
        &mut self,
        comment: Option<&str>,
        fallback_name: &str,
        species: Option<&'static Species>,
    ) -> Vec<Pathway> {
        self.ctx = TranslationContext::new(TranslationMode::Construct, species);
        let model = self.model;

        let mut result = Vec::new();
        let mut saw_pathway = false;
        for source in model.pathways() {
            let EntityKind::Pathway(data) = &source.kind else {
                continue;
            };
            saw_pathway = true;
            let pathway = self.translate_pathway(source, data, comment, species);
            if pathway.is_empty() {
                tracing::info!(rdf_id = %source.rdf_id, "pathway translated empty, discarded");
                continue;
            }
            result.push(pathway);
        }

        if !saw_pathway {
            let pathway = self.translate_flat(comment, fallback_name, species);
            if pathway.is_empty() {
                tracing::info!("model translated empty, nothing to return");
            } else {
                result.push(pathway);
            }
        }
        result
    }

    /// Translates the single pathway titled `name`.
    pub fn translate_named(
        &mut self,
        name: &str,
        comment: Option<&str>,
        species: Option<&'static Species>,
    ) -> Result<Pathway, TranslateError> {
        self.ctx = TranslationContext::new(TranslationMode::Construct, species);
        let Some(source) = find_pathway_by_name(self.model, name) else {
            return Err(TranslateError::PathwayNotFound {
                name: name.to_string(),
            });
        };
        let EntityKind::Pathway(data) = &source.kind else {
            return Err(TranslateError::PathwayNotFound {
                name: name.to_string(),
            });
        };
        Ok(self.translate_pathway(source, data, comment, species))
    }

    fn translate_pathway(
        &mut self,
        source: &Entity,
        data: &PathwayData,
        comment: Option<&str>,
        fallback_species: Option<&'static Species>,
    ) -> Pathway {
        self.ctx.species = data
            .organism
            .as_ref()
            .and_then(determine_species)
            .or(fallback_species);
        match self.ctx.species {
            Some(species) => {
                tracing::info!(species = species.common_name, "determined pathway species")
            }
            None => tracing::info!(rdf_id = %source.rdf_id, "no species determined for pathway"),
        }

        let mut pathway = self.pathway_shell(source, data, comment);
        tracing::info!(title = %pathway.title, "converting pathway");

        self.walk_steps(&mut pathway, data);
        for component in &data.components {
            self.translate_component(&mut pathway, component);
        }
        pathway
    }

    /// One pathway over every entity of a model that exposes no pathway
    /// objects. The species comes from model-level organism annotations
    /// first, the caller second.
    fn translate_flat(
        &mut self,
        comment: Option<&str>,
        fallback_name: &str,
        fallback_species: Option<&'static Species>,
    ) -> Pathway {
        let model = self.model;
        self.ctx.species = model
            .bio_sources()
            .iter()
            .find_map(determine_species)
            .or(fallback_species);

        let number = self.ctx.next_pathway_number();
        let title = if fallback_name.is_empty() {
            UNKNOWN_NAME.to_string()
        } else {
            fallback_name.to_string()
        };
        let org = self.ctx.species.map(|species| species.kegg_abbr).unwrap_or("");
        let mut pathway = Pathway::new(number.to_string(), org, number, title);
        pathway.comment = comment.map(str::to_string);
        pathway.origin_format = Some("BioPAX".to_string());
        tracing::info!(title = %pathway.title, "converting flat model as one pathway");

        for entity in model.entities() {
            if let Err(err) = self.dispatch_component(&mut pathway, entity) {
                self.ctx.skipped_constructs += 1;
                tracing::warn!(%err, "skipping entity");
            }
        }
        pathway
    }

    fn pathway_shell(
        &mut self,
        source: &Entity,
        data: &PathwayData,
        comment: Option<&str>,
    ) -> Pathway {
        let number = self.ctx.pathway_number_for(&source.rdf_id);
        let (source_db, link) = data
            .data_sources
            .first()
            .map(|ds| {
                (
                    ds.names.first().cloned().unwrap_or_default(),
                    ds.comments.first().cloned(),
                )
            })
            .unwrap_or_default();
        let title = source
            .pathway_title()
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());
        let org = self.ctx.species.map(|species| species.kegg_abbr).unwrap_or("");

        let mut pathway = Pathway::new(format!("{source_db}{number}"), org, number, title);
        pathway.comment = comment.map(str::to_string);
        pathway.origin_format = Some("BioPAX".to_string());
        pathway.link = link.filter(|link| !link.is_empty());
        pathway.identifiers = collector::xref_identifiers(source);
        pathway
    }

    /// Dispatches one component by RDF id, downgrading unsupported
    /// constructs to a counted, logged skip.
    fn translate_component(&mut self, pathway: &mut Pathway, rdf_id: &str) {
        let Some(entity) = self.model.get(rdf_id) else {
            tracing::warn!(rdf_id, "pathway component is not in the model, skipped");
            return;
        };
        if let Err(err) = self.dispatch_component(pathway, entity) {
            self.ctx.skipped_constructs += 1;
            tracing::warn!(%err, "skipping component");
        }
    }

    /// Routes one entity: physical entities, genes and pathway references
    /// become entries, interactions go through the dispatcher.
    pub(crate) fn dispatch_component(
        &mut self,
        pathway: &mut Pathway,
        entity: &Entity,
    ) -> Result<(), TranslateError> {
        self.entry_for_entity(pathway, entity).map(|_| ())
    }

    // ========================================================================
    // Step chains
    // ========================================================================

    /// Walks the pathway's step chain before the plain component list, so
    /// stepped interactions translate in their curated order. `next`
    /// links may loop; the visited set keeps the walk finite.
    fn walk_steps(&mut self, pathway: &mut Pathway, data: &PathwayData) {
        let mut visited = HashSet::new();
        for index in 0..data.steps.len() {
            self.walk_step(pathway, data, index, &mut visited);
        }
    }

    fn walk_step(
        &mut self,
        pathway: &mut Pathway,
        data: &PathwayData,
        index: usize,
        visited: &mut HashSet<usize>,
    ) {
        if !visited.insert(index) {
            return;
        }
        let Some(step) = data.steps.get(index) else {
            tracing::warn!(index, "step chain references a step that does not exist");
            return;
        };
        for rdf_id in &step.interactions {
            self.translate_component(pathway, rdf_id);
        }
        for &next in &step.next {
            self.walk_step(pathway, data, next, visited);
        }
    }

    // ========================================================================
    // Augmentation
    // ========================================================================

    /// Adds relations from the model to an existing pathway.
    ///
    /// The species is re-resolved from the pathway's organism code. Only
    /// source pathways whose organism carries that species' scientific
    /// name contribute; entries are matched by name and never created,
    /// and reactions are never created. Returns what was done.
    pub fn augment(&mut self, pathway: &mut Pathway) -> Result<AugmentReport, TranslateError> {
        let Some(species) = Species::by_kegg_abbr(&pathway.org) else {
            return Err(TranslateError::UnknownOrganism {
                org: pathway.org.clone(),
            });
        };
        self.ctx = TranslationContext::new(TranslationMode::Augment, Some(species));
        let model = self.model;

        for source in model.pathways() {
            let EntityKind::Pathway(data) = &source.kind else {
                continue;
            };
            let Some(organism) = data.organism.as_ref().and_then(|org| org.names.first()) else {
                continue;
            };
            if organism != species.scientific_name {
                tracing::warn!(
                    species = species.scientific_name,
                    organism = %organism,
                    "no additional information for the pathway species, skipped"
                );
                continue;
            }
            for component in &data.components {
                self.translate_component(pathway, component);
            }
        }

        let report = self.ctx.report;
        tracing::info!(
            pathway = %pathway.name,
            new_relations = report.new_relations,
            self_relations = report.self_relations,
            merged_subtypes = report.merged_subtypes,
            "augmentation finished"
        );
        Ok(report)
    }
}

// ============================================================================
// Pathway discovery
// ============================================================================

/// Titles of all pathways that have components, sorted.
pub fn pathway_names(model: &BioPaxModel) -> Vec<String> {
    let mut names: Vec<String> = model
        .pathways()
        .filter_map(|entity| match &entity.kind {
            EntityKind::Pathway(data) if !data.components.is_empty() => entity.pathway_title(),
            _ => None,
        })
        .collect();
    names.sort();
    names
}

/// The first pathway entity titled `name`.
pub fn find_pathway_by_name<'a>(model: &'a BioPaxModel, name: &str) -> Option<&'a Entity> {
    model
        .pathways()
        .find(|entity| entity.pathway_title().as_deref() == Some(name))
}
