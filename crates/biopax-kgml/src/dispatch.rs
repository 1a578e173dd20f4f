//! Interaction dispatch.
//!
//! One exhaustive state machine over the interaction union. Controls fan
//! out over their controllers and controlled processes, conversions
//! become reactions (or pairwise relations when unclassified), genetic
//! and molecular interactions become pairwise relations, template
//! reactions become expression self-relations, and anything without a
//! more specific shape falls through to the generic handler.

use biopax_model::{
    BioPaxLevel, ControlData, ControlType, ConversionClass, ConversionData, ConversionDirection,
    Entity, EntityKind, InteractionKind, Participant,
};
use kgml_pathway::{EntryType, IdentifierMap, Pathway, ReactionType, RelationType, SubType};

use crate::collector;
use crate::error::TranslateError;
use crate::translate::Translator;

impl<'m> Translator<'m> {
    /// Routes one interaction by its shape.
    pub(crate) fn dispatch_interaction(
        &mut self,
        pathway: &mut Pathway,
        entity: &Entity,
    ) -> Result<(), TranslateError> {
        let EntityKind::Interaction(kind) = &entity.kind else {
            return Err(TranslateError::unsupported(
                &entity.rdf_id,
                entity.kind_label(),
            ));
        };
        match kind {
            InteractionKind::Control(data) => self.dispatch_control(pathway, entity, data),
            InteractionKind::Conversion(data) => self.dispatch_conversion(pathway, entity, data),
            InteractionKind::Genetic { participants } => self.relate_participant_pairs(
                pathway,
                entity,
                participants,
                RelationType::Gerel,
                SubType::Association,
            ),
            InteractionKind::Molecular { participants } => self.relate_participant_pairs(
                pathway,
                entity,
                participants,
                RelationType::Pprel,
                SubType::IndirectEffect,
            ),
            InteractionKind::Template { products } => {
                self.dispatch_template(pathway, entity, products)?;
                Ok(())
            }
            InteractionKind::Generic {
                participants,
                interaction_terms,
            } => self.dispatch_generic(pathway, entity, participants, interaction_terms, None),
        }
    }

    // ========================================================================
    // Controls
    // ========================================================================

    /// Controllers become entries; each controlled process is translated
    /// and linked back to its controller. A controller resolving to a map
    /// entry links via maplink relations, anything else via
    /// protein-protein relations.
    fn dispatch_control(
        &mut self,
        pathway: &mut Pathway,
        entity: &Entity,
        data: &ControlData,
    ) -> Result<(), TranslateError> {
        let subtype = data.control_type.map(subtype_for_control);
        for controller in &data.controllers {
            let Some(controller_entity) = self.model.get(&controller.entity) else {
                tracing::warn!(
                    rdf_id = %controller.entity,
                    "controller references no entity in the model, skipped"
                );
                continue;
            };
            let entry1 = match &controller_entity.kind {
                EntityKind::Physical(_) => {
                    self.entry_for_participant(pathway, controller, false)?
                }
                EntityKind::Pathway(_) => self.entry_for_entity(pathway, controller_entity)?,
                EntityKind::Gene | EntityKind::Interaction(_) => {
                    return Err(TranslateError::unsupported(
                        &controller_entity.rdf_id,
                        controller_entity.kind_label(),
                    ));
                }
            };
            let Some(entry1) = entry1 else {
                continue;
            };
            let relation_type = match pathway.entry_for_id(entry1).map(|entry| entry.entry_type) {
                Some(EntryType::Map) => RelationType::Maplink,
                _ => RelationType::Pprel,
            };
            for controlled in &data.controlled {
                self.dispatch_controlled(pathway, entry1, relation_type, subtype, controlled)?;
            }
        }
        Ok(())
    }

    /// Translates one controlled process and links the controller to it.
    ///
    /// Reaction-shaped conversions become reactions; a maplink controller
    /// then relates to every substrate, while a protein-protein controller
    /// instead records the reaction name on its own entry and no relation
    /// is built. Unclassified conversions, pathways, template reactions
    /// and generic interactions all produce relation chains. Relations
    /// derived from a controlled process carry that process' identifiers.
    fn dispatch_controlled(
        &mut self,
        pathway: &mut Pathway,
        entry1: u32,
        relation_type: RelationType,
        subtype: Option<SubType>,
        controlled: &str,
    ) -> Result<(), TranslateError> {
        let Some(process) = self.model.get(controlled) else {
            tracing::warn!(rdf_id = controlled, "controlled process is not in the model, skipped");
            return Ok(());
        };
        let identifiers = collector::xref_identifiers(process);

        match &process.kind {
            EntityKind::Pathway(_) => {
                if let Some(entry2) = self.entry_for_entity(pathway, process)? {
                    self.build_relation(pathway, entry1, entry2, relation_type, subtype, identifiers);
                }
                Ok(())
            }
            EntityKind::Interaction(InteractionKind::Conversion(data)) => {
                if data.class == ConversionClass::Generic {
                    let pair_subtype = subtype_for_terms(&data.interaction_terms);
                    let targets = self.relate_sides(
                        pathway,
                        &identifiers,
                        &data.left,
                        &data.right,
                        RelationType::Other,
                        pair_subtype,
                    )?;
                    for entry2 in targets {
                        self.build_relation(
                            pathway,
                            entry1,
                            entry2,
                            relation_type,
                            subtype,
                            identifiers.clone(),
                        );
                    }
                    return Ok(());
                }

                let reaction_type = reaction_type_for(data.direction);
                let Some(index) = self.build_reaction(
                    pathway,
                    &data.left,
                    &data.right,
                    reaction_type,
                    identifiers.clone(),
                )?
                else {
                    return Ok(());
                };
                if relation_type == RelationType::Maplink {
                    let substrates: Vec<u32> = pathway.reactions[index]
                        .substrates
                        .iter()
                        .map(|component| component.id)
                        .collect();
                    for entry2 in substrates {
                        self.build_relation(
                            pathway,
                            entry1,
                            entry2,
                            relation_type,
                            subtype,
                            identifiers.clone(),
                        );
                    }
                } else {
                    let name = pathway.reactions[index].name.clone();
                    if let Some(entry) = pathway.entry_for_id_mut(entry1) {
                        entry.append_reaction(&name);
                    }
                }
                Ok(())
            }
            EntityKind::Interaction(InteractionKind::Template { products }) => {
                if let Some(entry2) = self.dispatch_template(pathway, process, products)? {
                    self.build_relation(pathway, entry1, entry2, relation_type, subtype, identifiers);
                }
                Ok(())
            }
            EntityKind::Interaction(InteractionKind::Generic {
                participants,
                interaction_terms,
            }) => self.dispatch_generic(
                pathway,
                process,
                participants,
                interaction_terms,
                Some((entry1, relation_type, subtype)),
            ),
            EntityKind::Interaction(_) => self.dispatch_interaction(pathway, process),
            EntityKind::Physical(_) | EntityKind::Gene => Err(TranslateError::unsupported(
                &process.rdf_id,
                process.kind_label(),
            )),
        }
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// A conversion reached outside any control: reaction-shaped classes
    /// become reactions, the unclassified base class becomes pairwise
    /// left-to-right relations.
    fn dispatch_conversion(
        &mut self,
        pathway: &mut Pathway,
        entity: &Entity,
        data: &ConversionData,
    ) -> Result<(), TranslateError> {
        let identifiers = collector::xref_identifiers(entity);
        if data.class == ConversionClass::Generic {
            let subtype = subtype_for_terms(&data.interaction_terms);
            self.relate_sides(
                pathway,
                &identifiers,
                &data.left,
                &data.right,
                RelationType::Pprel,
                subtype,
            )?;
            return Ok(());
        }
        let reaction_type = reaction_type_for(data.direction);
        self.build_reaction(pathway, &data.left, &data.right, reaction_type, identifiers)?;
        Ok(())
    }

    /// Relations from every left participant to every right participant.
    /// Returns the distinct right-hand entry ids, for controller chains.
    fn relate_sides(
        &mut self,
        pathway: &mut Pathway,
        identifiers: &IdentifierMap,
        lefts: &[Participant],
        rights: &[Participant],
        relation_type: RelationType,
        subtype: Option<SubType>,
    ) -> Result<Vec<u32>, TranslateError> {
        let mut targets = Vec::new();
        for left in lefts {
            let Some(entry1) = self.entry_for_participant(pathway, left, false)? else {
                continue;
            };
            for right in rights {
                let Some(entry2) = self.entry_for_participant(pathway, right, false)? else {
                    continue;
                };
                self.build_relation(
                    pathway,
                    entry1,
                    entry2,
                    relation_type,
                    subtype,
                    identifiers.clone(),
                );
                if !targets.contains(&entry2) {
                    targets.push(entry2);
                }
            }
        }
        Ok(targets)
    }

    // ========================================================================
    // Participant-set interactions
    // ========================================================================

    /// Genetic and molecular interactions: one relation per unordered
    /// participant pair. A single participant still becomes an entry.
    fn relate_participant_pairs(
        &mut self,
        pathway: &mut Pathway,
        entity: &Entity,
        participants: &[Participant],
        relation_type: RelationType,
        subtype: SubType,
    ) -> Result<(), TranslateError> {
        match participants {
            [] => Ok(()),
            [only] => {
                self.entry_for_participant(pathway, only, false)?;
                Ok(())
            }
            _ => {
                let identifiers = collector::xref_identifiers(entity);
                for i in 0..participants.len() - 1 {
                    let Some(entry1) =
                        self.entry_for_participant(pathway, &participants[i], false)?
                    else {
                        continue;
                    };
                    for participant in &participants[i + 1..] {
                        let Some(entry2) =
                            self.entry_for_participant(pathway, participant, false)?
                        else {
                            continue;
                        };
                        if entry1 == entry2 {
                            continue;
                        }
                        self.build_relation(
                            pathway,
                            entry1,
                            entry2,
                            relation_type,
                            Some(subtype),
                            identifiers.clone(),
                        );
                    }
                }
                Ok(())
            }
        }
    }

    /// Template reactions: every product gains an expression self-relation
    /// carrying the reaction's identifiers. Returns the last product's
    /// entry, for controller chains.
    pub(crate) fn dispatch_template(
        &mut self,
        pathway: &mut Pathway,
        entity: &Entity,
        products: &[Participant],
    ) -> Result<Option<u32>, TranslateError> {
        let identifiers = collector::xref_identifiers(entity);
        let mut last = None;
        for product in products {
            if let Some(id) = self.entry_for_participant(pathway, product, false)? {
                self.build_relation(
                    pathway,
                    id,
                    id,
                    RelationType::Gerel,
                    Some(SubType::Expression),
                    identifiers.clone(),
                );
                last = Some(id);
            }
        }
        Ok(last)
    }

    // ========================================================================
    // Generic interactions
    // ========================================================================

    /// Interactions with no more specific shape: entries for all
    /// participants, a relation for every ordered pair of distinct
    /// entries, and a link from the optional base entry (a controller) to
    /// each participant. A participant-less interaction synthesizes a
    /// placeholder map entry so the base still has something to link to.
    fn dispatch_generic(
        &mut self,
        pathway: &mut Pathway,
        entity: &Entity,
        participants: &[Participant],
        interaction_terms: &[String],
        base: Option<(u32, RelationType, Option<SubType>)>,
    ) -> Result<(), TranslateError> {
        let identifiers = collector::xref_identifiers(entity);

        if participants.is_empty() {
            let placeholder = self.placeholder_entry(pathway, entity);
            if let (Some(entry2), Some((entry1, relation_type, subtype))) = (placeholder, base) {
                self.build_relation(pathway, entry1, entry2, relation_type, subtype, identifiers);
            }
            return Ok(());
        }

        let mut ids = Vec::new();
        for participant in participants {
            if let Some(id) = self.entry_for_participant(pathway, participant, false)? {
                ids.push(id);
            }
        }

        let pair_type = match self.model.level() {
            BioPaxLevel::Level2 => RelationType::Other,
            BioPaxLevel::Level3 => RelationType::Maplink,
        };
        let pair_subtype = subtype_for_terms(interaction_terms);
        for &entry1 in &ids {
            for &entry2 in &ids {
                if entry1 == entry2 {
                    continue;
                }
                self.build_relation(
                    pathway,
                    entry1,
                    entry2,
                    pair_type,
                    pair_subtype,
                    identifiers.clone(),
                );
            }
        }
        if let Some((entry1, relation_type, subtype)) = base {
            for &entry2 in &ids {
                self.build_relation(
                    pathway,
                    entry1,
                    entry2,
                    relation_type,
                    subtype,
                    identifiers.clone(),
                );
            }
        }
        Ok(())
    }
}

// ============================================================================
// Classification tables
// ============================================================================

/// Control-type vocabulary to relation subtype. Every enumerator is an
/// activation or an inhibition.
pub(crate) fn subtype_for_control(control_type: ControlType) -> SubType {
    match control_type {
        ControlType::Activation
        | ControlType::ActivationAllosteric
        | ControlType::ActivationNonallosteric
        | ControlType::ActivationUnknownMechanism => SubType::Activation,
        ControlType::Inhibition
        | ControlType::InhibitionAllosteric
        | ControlType::InhibitionCompetitive
        | ControlType::InhibitionIrreversible
        | ControlType::InhibitionNoncompetitive
        | ControlType::InhibitionOther
        | ControlType::InhibitionUncompetitive
        | ControlType::InhibitionUnknownMechanism => SubType::Inhibition,
    }
}

/// Free-text interaction terms to relation subtype, first term only.
/// Suffix matching, because curated exports usually append the term to a
/// vocabulary IRI. Unrecognized terms classify as a state change.
pub(crate) fn subtype_for_terms(terms: &[String]) -> Option<SubType> {
    let term = terms.first()?;
    let lowered = term.to_ascii_lowercase();
    let subtype = if lowered.ends_with("activation") {
        SubType::Activation
    } else if lowered.ends_with("inhibition") {
        SubType::Inhibition
    } else if lowered.ends_with("transcription") || lowered.ends_with("translation") {
        SubType::Expression
    } else if lowered.ends_with("molecular_interaction") {
        SubType::BindingAssociation
    } else if lowered.ends_with("hedgehog_cleavage_and_lipidation") {
        SubType::IndirectEffect
    } else {
        tracing::warn!(term = %term, "unrecognized interaction term, classified as state change");
        SubType::StateChange
    };
    Some(subtype)
}

/// Conversion direction to reaction type. An unstated direction is not
/// assumed irreversible.
pub(crate) fn reaction_type_for(direction: Option<ConversionDirection>) -> ReactionType {
    match direction {
        Some(ConversionDirection::LeftToRight | ConversionDirection::RightToLeft) => {
            ReactionType::Irreversible
        }
        Some(ConversionDirection::Reversible) => ReactionType::Reversible,
        None => ReactionType::Other,
    }
}
