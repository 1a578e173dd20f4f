//! Per-run translation state.
//!
//! Every counter the engine consumes lives here, owned by one translation
//! run. A fresh context per call keeps concurrent translations of
//! different models (or species) independent.

use serde::Serialize;

use crate::species::Species;

/// Placeholder stem for elements no identifier could be consolidated for.
pub const UNKNOWN_NAME: &str = "unknown";

/// Write mode of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationMode {
    /// Build a pathway from scratch, deduplicating before every insert.
    Construct,
    /// Add relations to an existing pathway. Entries and reactions are
    /// never created; entries are matched by consolidated name.
    Augment,
}

/// What an augmentation run did to the target pathway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AugmentReport {
    /// Relations appended. Self-relations are excluded by construction.
    pub new_relations: usize,
    /// Relations dropped because both endpoints resolved to one entry.
    pub self_relations: usize,
    /// Subtypes merged into relations that already existed.
    pub merged_subtypes: usize,
}

/// Mutable state of one translation run.
#[derive(Debug)]
pub(crate) struct TranslationContext {
    mode: TranslationMode,
    pub(crate) species: Option<&'static Species>,
    entry_id: u32,
    reaction_no: u32,
    unknown_no: u32,
    pathway_number: u32,
    pub(crate) skipped_constructs: usize,
    pub(crate) report: AugmentReport,
}

impl TranslationContext {
    pub(crate) fn new(mode: TranslationMode, species: Option<&'static Species>) -> Self {
        Self {
            mode,
            species,
            entry_id: 0,
            reaction_no: 0,
            unknown_no: 0,
            pathway_number: 100_000,
            skipped_constructs: 0,
            report: AugmentReport::default(),
        }
    }

    pub(crate) fn is_augment(&self) -> bool {
        self.mode == TranslationMode::Augment
    }

    /// Next entry id, starting at 1. Callers draw one only when an entry is
    /// actually appended, so ids stay gapless within a pathway.
    pub(crate) fn next_entry_id(&mut self) -> u32 {
        self.entry_id += 1;
        self.entry_id
    }

    /// Next synthetic reaction name, "rn:unknown1" upward.
    pub(crate) fn next_reaction_name(&mut self) -> String {
        self.reaction_no += 1;
        format!("rn:{UNKNOWN_NAME}{}", self.reaction_no)
    }

    /// Next placeholder entry name, "unknown1" upward.
    pub(crate) fn next_unknown_name(&mut self) -> String {
        self.unknown_no += 1;
        format!("{UNKNOWN_NAME}{}", self.unknown_no)
    }

    /// Pathway number for a source RDF id.
    ///
    /// Ids of the form "biopaxpid_9717" carry their number behind the first
    /// underscore; anything else draws from a fallback counter starting at
    /// 100000.
    pub(crate) fn pathway_number_for(&mut self, rdf_id: &str) -> u32 {
        if let Some((_, suffix)) = rdf_id.split_once('_') {
            if let Ok(number) = suffix.parse() {
                return number;
            }
        }
        self.next_pathway_number()
    }

    /// Fallback number for sources without a usable RDF id, such as a flat
    /// model translated as one pathway.
    pub(crate) fn next_pathway_number(&mut self) -> u32 {
        let number = self.pathway_number;
        self.pathway_number += 1;
        number
    }
}
